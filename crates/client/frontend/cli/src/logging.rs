//! File-only tracing setup for the terminal UI.
//!
//! The alternate screen owns stdout and stderr while the overlay is up, so
//! every log line goes to a per-session file instead.
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use directories::ProjectDirs;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Overrides the platform log directory.
pub const LOG_DIR_ENV: &str = "BATTLE_INFO_LOG_DIR";
const LOG_FILE: &str = "client.log";

/// Installs the global subscriber, writing to `<log dir>/<session>/client.log`.
///
/// A session id is generated from the current time when none is given.
pub fn setup_logging(session_id: &Option<String>) -> Result<()> {
    let session_id = session_id.clone().unwrap_or_else(generated_session_id);
    let session_log_dir = session_log_dir(&log_directory(), &session_id);
    std::fs::create_dir_all(&session_log_dir).with_context(|| {
        format!("Failed to create log directory {}", session_log_dir.display())
    })?;

    let file_appender = tracing_appender::rolling::never(&session_log_dir, LOG_FILE);
    let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing::Level::INFO.into());

    // ANSI stays on so `tail -f` shows colors.
    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking_file)
        .with_ansi(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .try_init()
        .context("A global tracing subscriber is already installed")?;

    // The writer lives for the whole process.
    std::mem::forget(guard);

    tracing::info!("Logging initialized: session={}", session_id);
    tracing::info!("Log file: {}", session_log_dir.join(LOG_FILE).display());

    Ok(())
}

/// Root directory holding one sub-directory per session.
pub fn log_directory() -> PathBuf {
    if let Some(dir) = std::env::var_os(LOG_DIR_ENV) {
        return PathBuf::from(dir);
    }
    ProjectDirs::from("", "", "battle-info")
        .map(|dirs| dirs.cache_dir().join("logs"))
        .unwrap_or_else(|| std::env::temp_dir().join("battle-info").join("logs"))
}

fn session_log_dir(root: &Path, session_id: &str) -> PathBuf {
    root.join(session_id)
}

fn generated_session_id() -> String {
    let timestamp = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_secs())
        .unwrap_or_default();
    format!("session_{timestamp}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sessions_get_their_own_directory() {
        let root = Path::new("/var/log/battle-info");
        assert_eq!(
            session_log_dir(root, "session_1"),
            PathBuf::from("/var/log/battle-info/session_1")
        );
    }

    #[test]
    fn generated_session_ids_are_timestamped() {
        let id = generated_session_id();
        let timestamp = id.strip_prefix("session_").unwrap();
        assert!(timestamp.parse::<u64>().unwrap() > 0);
    }
}
