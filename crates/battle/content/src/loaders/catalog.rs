//! Catalog override loader.
//!
//! Example:
//! ```toml
//! [conditions.Reflect]
//! label = "Barrier"
//! counter = { ratio = 8 }
//! description = { text = "Physical damage is halved." }
//!
//! [registry.field]
//! counter = ["Gravity", "TrickRoom"]
//! ```

use std::collections::BTreeMap;
use std::path::Path;

use battle_core::ConditionKind;
use serde::{Deserialize, Serialize};

use crate::catalog::{ConditionCatalog, ConditionSpec};
use crate::loaders::{LoadResult, read_file};
use crate::registry::ConditionRegistry;

/// Rows and registry read from an override file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogOverrides {
    pub conditions: BTreeMap<ConditionKind, ConditionSpec>,
    /// Replaces the whole registry when present.
    pub registry: Option<ConditionRegistry>,
}

impl CatalogOverrides {
    /// Applies the overrides to a catalog and registry.
    pub fn apply(self, catalog: &mut ConditionCatalog, registry: &mut ConditionRegistry) {
        catalog.merge(self.conditions);
        if let Some(replacement) = self.registry {
            *registry = replacement;
        }
    }
}

/// Loader for catalog overrides from TOML files.
pub struct CatalogLoader;

impl CatalogLoader {
    pub fn load(path: &Path) -> LoadResult<CatalogOverrides> {
        let content = read_file(path)?;
        Self::parse(&content)
            .map_err(|e| anyhow::anyhow!("Invalid catalog {}: {}", path.display(), e))
    }

    pub fn parse(content: &str) -> LoadResult<CatalogOverrides> {
        toml::from_str(content).map_err(|e| anyhow::anyhow!("Failed to parse catalog TOML: {}", e))
    }
}
