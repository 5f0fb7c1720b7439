//! Trait describing a runnable client front-end.
use anyhow::Result;
use async_trait::async_trait;
use battle_core::{BattleState, BattlerIndex};

use crate::config::FrontendConfig;
use crate::navigation::InfoAction;
use crate::services::effects::EffectProducer;

/// Everything a frontend needs to open the overlay on one battle.
pub struct OverlaySession {
    pub battle: BattleState,
    /// Combatant shown first.
    pub inspect: BattlerIndex,
    pub producer: Box<dyn EffectProducer + Send + Sync>,
    pub config: FrontendConfig,
}

impl OverlaySession {
    pub fn new(
        battle: BattleState,
        inspect: BattlerIndex,
        producer: Box<dyn EffectProducer + Send + Sync>,
        config: FrontendConfig,
    ) -> Self {
        Self {
            battle,
            inspect,
            producer,
            config,
        }
    }
}

/// Frontend abstraction for UI layers.
///
/// A frontend owns its input, output and frame pacing, and drives
/// [`BattlerInfoOverlay`](crate::overlay::BattlerInfoOverlay) with them.
///
/// # Implementations
///
/// - `CliFrontend`: Terminal-based UI (ratatui + crossterm)
#[async_trait]
pub trait Frontend: Send {
    /// Runs the overlay until the player leaves it.
    ///
    /// # Errors
    ///
    /// Returns an error if the frontend's terminal, window or input device
    /// fails.
    async fn run(&mut self, session: OverlaySession) -> Result<InfoAction>;
}
