//! Glue code tying the overlay core to the terminal.
use std::io;

use anyhow::{Context, Result};
use async_trait::async_trait;
use client_frontend_core::{
    BattleAccessor, BattlerInfoOverlay, Frontend, InfoAction, OverlaySession,
};

use crate::clock::IntervalClock;
use crate::config::CliConfig;
use crate::input::KeyboardInput;
use crate::presentation::{TerminalRenderer, terminal};

/// Terminal frontend: crossterm keys in, ratatui frames out.
pub struct CliFrontend {
    config: CliConfig,
}

impl CliFrontend {
    pub fn new(config: CliConfig) -> Self {
        Self { config }
    }
}

#[async_trait]
impl Frontend for CliFrontend {
    async fn run(&mut self, session: OverlaySession) -> Result<InfoAction> {
        tracing::info!("CLI frontend starting...");

        let terminal = terminal::init()?;
        let _guard = terminal::TerminalGuard;

        let mut renderer =
            TerminalRenderer::new(terminal, self.config.cell, session.config.surface_width);
        if self.config.bell {
            renderer = renderer.with_bell(io::stdout());
        }
        let mut input = KeyboardInput::new();
        let mut clock = IntervalClock::from_millis(self.config.frame_interval_ms);

        let overlay = BattlerInfoOverlay::new(
            &session.battle,
            session.producer.as_ref(),
            &session.config,
        );
        let combatants = session.battle.all_combatants();
        let outcome = overlay
            .open(
                session.inspect,
                &combatants,
                &mut input,
                &mut renderer,
                &mut clock,
            )
            .await;

        drop(renderer);
        terminal::restore()?;

        outcome.context("Battler info overlay failed")
    }
}
