//! CLI-specific configuration for terminal UI.
use std::env;

/// CLI terminal UI configuration.
///
/// This contains settings specific to the terminal interface,
/// separate from cross-frontend overlay configuration.
#[derive(Clone, Debug)]
pub struct CliConfig {
    /// Frame pacing of the overlay loop in milliseconds.
    pub frame_interval_ms: u64,
    pub cell: CellSize,
    /// Ring the terminal bell on cursor and decision cues.
    pub bell: bool,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            frame_interval_ms: 16,
            cell: CellSize::default(),
            bell: false,
        }
    }
}

impl CliConfig {
    /// Construct CLI configuration from environment variables.
    ///
    /// Environment variables:
    /// - `CLI_FRAME_INTERVAL_MS` - Frame interval in milliseconds (default: 16)
    /// - `CLI_CELL_WIDTH_PX` - Surface pixels per terminal column (default: 8)
    /// - `CLI_CELL_HEIGHT_PX` - Surface pixels per terminal row (default: 16)
    /// - `CLI_BELL` - Ring the bell on cues (default: false)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(interval) = read_env::<u64>("CLI_FRAME_INTERVAL_MS") {
            config.frame_interval_ms = interval.max(1);
        }
        if let Some(width) = read_env::<i32>("CLI_CELL_WIDTH_PX") {
            config.cell.width = width.max(1);
        }
        if let Some(height) = read_env::<i32>("CLI_CELL_HEIGHT_PX") {
            config.cell.height = height.max(1);
        }
        if let Some(bell) = read_env_bool("CLI_BELL") {
            config.bell = bell;
        }

        config
    }
}

/// Size of one terminal cell on the overlay's pixel surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CellSize {
    pub width: i32,
    pub height: i32,
}

impl Default for CellSize {
    fn default() -> Self {
        Self {
            width: 8,
            height: 16,
        }
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}

fn read_env_bool(key: &str) -> Option<bool> {
    match env::var(key).ok()?.to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}
