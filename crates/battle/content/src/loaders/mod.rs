//! Content loaders for reading battle data from files.
//!
//! Scenarios are RON snapshots of a battle; catalog overrides are TOML
//! files that replace condition rows or the condition registry.

pub mod catalog;
pub mod scenario;

pub use catalog::{CatalogLoader, CatalogOverrides};
pub use scenario::{Scenario, ScenarioLoader};

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}
