//! Client builder with dependency injection pattern.

use anyhow::{Context, Result};
use battle_content::Scenario;
use battle_core::BattlerIndex;
use client_frontend_core::{CatalogEffectProducer, EffectProducer, FrontendConfig, OverlaySession};

use crate::{Client, Frontend};

/// Builder for constructing a Client with proper validation.
///
/// The scenario and frontend are required. The effect producer defaults to
/// the standard catalog using the frontend config's hail style.
#[derive(Default)]
pub struct ClientBuilder {
    scenario: Option<Scenario>,
    inspect: Option<BattlerIndex>,
    producer: Option<Box<dyn EffectProducer + Send + Sync>>,
    frontend_config: Option<FrontendConfig>,
    frontend: Option<Box<dyn Frontend>>,
}

impl ClientBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the battle scenario (required).
    pub fn scenario(mut self, scenario: Scenario) -> Self {
        self.scenario = Some(scenario);
        self
    }

    /// Open on `index` instead of the scenario's own choice.
    pub fn inspect(mut self, index: BattlerIndex) -> Self {
        self.inspect = Some(index);
        self
    }

    pub fn producer(mut self, producer: impl EffectProducer + Send + Sync + 'static) -> Self {
        self.producer = Some(Box::new(producer));
        self
    }

    pub fn frontend_config(mut self, config: FrontendConfig) -> Self {
        self.frontend_config = Some(config);
        self
    }

    /// Set the frontend (required).
    pub fn frontend(mut self, frontend: impl Frontend + 'static) -> Self {
        self.frontend = Some(Box::new(frontend));
        self
    }

    /// Build the Client.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Scenario or frontend is not set
    /// - The inspected combatant is not in the battle
    pub fn build(self) -> Result<Client> {
        let scenario = self
            .scenario
            .context("Scenario is required. Use .scenario() to set it.")?;

        let frontend = self
            .frontend
            .context("Frontend is required. Use .frontend() to set it.")?;

        let inspect = self.inspect.unwrap_or(scenario.inspect);
        if scenario.battle.combatant(inspect).is_none() {
            anyhow::bail!("Combatant {inspect} is not in scenario '{}'", scenario.name);
        }

        let config = self.frontend_config.unwrap_or_default();
        let producer = self.producer.unwrap_or_else(|| {
            Box::new(CatalogEffectProducer::default().with_hail_style(config.hail_style))
        });

        Ok(Client {
            session: OverlaySession::new(scenario.battle, inspect, producer, config),
            frontend,
        })
    }
}
