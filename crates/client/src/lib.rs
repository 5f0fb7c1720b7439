//! Top-level client wiring a battle scenario to a frontend.
//!
//! # Architecture
//!
//! ```text
//! Client (Top-level container)
//!   ├─→ OverlaySession (battle snapshot, effect producer, overlay config)
//!   └─→ Frontend (UI layer - CLI, GUI, etc.)
//! ```
//!
//! The client owns no rules; it hands the session to the frontend and
//! reports how the player left the overlay.

mod builder;
mod config;

pub use builder::ClientBuilder;
pub use config::ClientConfig;

// Re-export Frontend trait from client-frontend-core
pub use client_frontend_core::{Frontend, InfoAction};

use anyhow::Result;
use client_frontend_core::OverlaySession;

/// Top-level client container.
pub struct Client {
    session: OverlaySession,
    frontend: Box<dyn Frontend>,
}

impl Client {
    /// Create a new ClientBuilder.
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    pub fn session(&self) -> &OverlaySession {
        &self.session
    }

    /// Transfers control to the frontend until the overlay closes.
    ///
    /// # Errors
    ///
    /// Returns an error if the frontend's input or output fails.
    pub async fn run(self) -> Result<InfoAction> {
        let Client {
            session,
            mut frontend,
        } = self;

        tracing::info!(
            inspect = %session.inspect,
            combatants = session.battle.combatants.len(),
            turn = session.battle.turn_count + 1,
            "Opening battler info"
        );
        let action = frontend.run(session).await?;
        tracing::info!(%action, "Battler info closed");
        Ok(action)
    }
}
