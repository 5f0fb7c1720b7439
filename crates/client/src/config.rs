//! Client configuration read from the environment.
use std::env;
use std::path::PathBuf;

use anyhow::Result;
use battle_content::{
    CatalogLoader, ConditionCatalog, ConditionRegistry, HailStyle, Scenario, ScenarioLoader,
};
use battle_core::BattlerIndex;
use client_frontend_core::CatalogEffectProducer;

/// Where the battle comes from and how the session is labelled.
#[derive(Clone, Debug, Default)]
pub struct ClientConfig {
    /// RON scenario; the bundled scenario is used when unset.
    pub scenario_path: Option<PathBuf>,
    /// TOML catalog overrides.
    pub catalog_path: Option<PathBuf>,
    /// Overrides the scenario's initially inspected combatant.
    pub inspect: Option<BattlerIndex>,
    pub session_id: Option<String>,
}

impl ClientConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `BATTLE_SCENARIO` - Path to a RON battle scenario
    /// - `BATTLE_CATALOG` - Path to TOML catalog overrides
    /// - `BATTLE_INFO_INSPECT` - Battler index opened first
    /// - `BATTLE_INFO_SESSION` - Log session id (default: timestamp)
    pub fn from_env() -> Self {
        Self {
            scenario_path: read_path("BATTLE_SCENARIO"),
            catalog_path: read_path("BATTLE_CATALOG"),
            inspect: env::var("BATTLE_INFO_INSPECT")
                .ok()
                .and_then(|raw| raw.trim().parse().ok())
                .map(BattlerIndex),
            session_id: env::var("BATTLE_INFO_SESSION")
                .ok()
                .filter(|id| !id.trim().is_empty()),
        }
    }

    pub fn load_scenario(&self) -> Result<Scenario> {
        match &self.scenario_path {
            Some(path) => ScenarioLoader::load(path),
            None => ScenarioLoader::bundled(),
        }
    }

    /// Standard catalog and registry with any configured overrides applied.
    pub fn load_producer(&self, hail_style: HailStyle) -> Result<CatalogEffectProducer> {
        let mut catalog = ConditionCatalog::standard();
        let mut registry = ConditionRegistry::standard();
        if let Some(path) = &self.catalog_path {
            CatalogLoader::load(path)?.apply(&mut catalog, &mut registry);
        }
        Ok(CatalogEffectProducer::new(catalog, registry).with_hail_style(hail_style))
    }
}

fn read_path(key: &str) -> Option<PathBuf> {
    env::var_os(key)
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
}
