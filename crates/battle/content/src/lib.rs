//! Static battle content and loaders.
//!
//! This crate houses the text the overlay shows for battle conditions and
//! provides loaders for RON/TOML data files:
//! - Condition catalog (label, counter format, description per condition)
//! - Scoped condition registry (which store holds which condition, and how)
//! - Weather and terrain text
//! - Battle scenarios (data-driven via RON)
//! - Catalog overrides (data-driven via TOML)
//!
//! Content is consumed by presentation crates and never appears in battle
//! state.

pub mod catalog;
pub mod registry;
pub mod weather;

#[cfg(feature = "loaders")]
pub mod loaders;

pub use catalog::{
    ConditionCatalog, ConditionSpec, CounterFormat, Description, MoveSlot, NO_COUNTER, Visibility,
    standard_spec,
};
pub use registry::{ConditionRegistry, ScopeEntries};
pub use weather::{HailStyle, TerrainText, WeatherText, terrain_text, weather_text};

#[cfg(feature = "loaders")]
pub use loaders::{CatalogLoader, CatalogOverrides, Scenario, ScenarioLoader};
