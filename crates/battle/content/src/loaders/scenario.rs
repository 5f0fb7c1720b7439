//! Battle scenario loader.
//!
//! A scenario is a battle snapshot plus the combatant the overlay opens on.

use std::collections::HashSet;
use std::path::Path;

use battle_core::{BattleState, BattlerIndex};
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// Battle snapshot loaded from a RON file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scenario {
    #[serde(default)]
    pub name: String,
    /// Combatant inspected when the overlay opens.
    #[serde(default)]
    pub inspect: BattlerIndex,
    pub battle: BattleState,
}

/// Loader for battle scenarios from RON files.
pub struct ScenarioLoader;

impl ScenarioLoader {
    /// Load a scenario from a RON file.
    ///
    /// Fails when the file cannot be parsed, two combatants share an index,
    /// or the inspected combatant is missing.
    pub fn load(path: &Path) -> LoadResult<Scenario> {
        let content = read_file(path)?;
        Self::parse(&content)
            .map_err(|e| anyhow::anyhow!("Invalid scenario {}: {}", path.display(), e))
    }

    /// Scenario shipped with the crate, used when no file is configured.
    pub fn bundled() -> LoadResult<Scenario> {
        Self::parse(include_str!("../../data/scenarios/trainer_double.ron"))
    }

    /// Parse a scenario from RON text.
    pub fn parse(content: &str) -> LoadResult<Scenario> {
        let scenario: Scenario = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse scenario RON: {}", e))?;
        validate(&scenario)?;
        Ok(scenario)
    }
}

fn validate(scenario: &Scenario) -> LoadResult<()> {
    let battle = &scenario.battle;
    if battle.combatants.is_empty() {
        anyhow::bail!("scenario has no combatants");
    }

    let mut seen = HashSet::new();
    for combatant in &battle.combatants {
        if !seen.insert(combatant.index) {
            anyhow::bail!("combatant index {} is used twice", combatant.index);
        }
        if combatant.hp > combatant.total_hp {
            anyhow::bail!(
                "combatant {} has {} HP out of {}",
                combatant.index,
                combatant.hp,
                combatant.total_hp
            );
        }
    }

    if battle.combatant(scenario.inspect).is_none() {
        anyhow::bail!("inspected combatant {} is not in battle", scenario.inspect);
    }
    Ok(())
}
