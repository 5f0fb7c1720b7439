//! Battle snapshot: combatants, field, sides and positions.
mod combatant;

pub use combatant::{BattlerIndex, Combatant, Cosmetics, Gender, Identity, Side, TeraState};

use crate::conditions::EffectStore;
use crate::field::{Terrain, Weather};

const UTILITY_UMBRELLA: &str = "Utility Umbrella";

/// Field-wide state.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct FieldState {
    pub weather: Weather,
    /// Remaining weather turns; zero for weather that does not expire.
    pub weather_duration: u8,
    pub terrain: Terrain,
    pub terrain_duration: u8,
    pub effects: EffectStore,
}

/// Conditions covering one side's whole team.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SideState {
    pub effects: EffectStore,
}

/// Conditions bound to a battler slot rather than to its occupant.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PositionState {
    pub effects: EffectStore,
}

/// Snapshot of a battle as the overlay sees it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BattleState {
    /// Zero-based turn counter.
    pub turn_count: u32,
    pub wild: bool,
    /// Whether the battle counts toward the player's records.
    pub internal: bool,
    /// Whether the battle's command window is currently on screen.
    pub command_window_visible: bool,
    /// Abilities such as Cloud Nine suppress weather for everyone.
    pub weather_suppressed: bool,
    pub field: FieldState,
    pub ally_side: SideState,
    pub enemy_side: SideState,
    /// Position states indexed by battler index.
    pub positions: Vec<PositionState>,
    pub combatants: Vec<Combatant>,
}

impl BattleState {
    pub fn combatant(&self, index: BattlerIndex) -> Option<&Combatant> {
        self.combatants.iter().find(|c| c.index == index)
    }

    pub fn combatant_mut(&mut self, index: BattlerIndex) -> Option<&mut Combatant> {
        self.combatants.iter_mut().find(|c| c.index == index)
    }

    pub fn side(&self, side: Side) -> &SideState {
        match side.slot() {
            0 => &self.ally_side,
            _ => &self.enemy_side,
        }
    }

    pub fn side_mut(&mut self, side: Side) -> &mut SideState {
        match side.slot() {
            0 => &mut self.ally_side,
            _ => &mut self.enemy_side,
        }
    }

    pub fn position(&self, index: BattlerIndex) -> Option<&PositionState> {
        self.positions.get(index.as_usize())
    }

    /// Position state for `index`, growing the table when needed.
    pub fn position_mut(&mut self, index: BattlerIndex) -> &mut PositionState {
        let slot = index.as_usize();
        if self.positions.len() <= slot {
            self.positions.resize_with(slot + 1, PositionState::default);
        }
        &mut self.positions[slot]
    }

    /// Combatants on `side`, ordered by battler index.
    pub fn side_combatants(&self, side: Side) -> Vec<&Combatant> {
        let mut members: Vec<&Combatant> =
            self.combatants.iter().filter(|c| c.side() == side).collect();
        members.sort_by_key(|c| c.index);
        members
    }

    /// Every combatant: the viewer's side first, then the opposing side.
    pub fn display_order(&self) -> Vec<BattlerIndex> {
        self.side_combatants(Side::Ally)
            .into_iter()
            .chain(self.side_combatants(Side::Enemy))
            .map(|c| c.index)
            .collect()
    }

    /// Weather as it applies to `combatant`.
    pub fn effective_weather(&self, combatant: &Combatant) -> Weather {
        if self.weather_suppressed {
            return Weather::None;
        }
        let weather = self.field.weather;
        if weather.is_sun_or_rain() && combatant.item.as_deref() == Some(UTILITY_UMBRELLA) {
            return Weather::None;
        }
        weather
    }

    /// Whether a capture device may be thrown right now.
    ///
    /// Only wild battles allow it, and only while exactly one opposing
    /// combatant stands and can be targeted.
    pub fn capture_allowed(&self) -> bool {
        if !self.wild {
            return false;
        }
        let standing: Vec<&Combatant> = self
            .side_combatants(Side::Enemy)
            .into_iter()
            .filter(|c| !c.is_fainted())
            .collect();
        matches!(standing.as_slice(), [target] if !target.semi_invulnerable)
    }
}
