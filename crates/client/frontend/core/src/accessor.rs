//! Read access to the battle the overlay inspects.

use battle_core::{BattleState, BattlerIndex, Combatant, Side};

/// Queries the overlay makes against the battle.
///
/// Only [`BattleAccessor::state`] is required; the rest derive from the
/// snapshot and may be overridden by hosts that track them elsewhere.
pub trait BattleAccessor {
    fn state(&self) -> &BattleState;

    fn combatant(&self, index: BattlerIndex) -> Option<&Combatant> {
        self.state().combatant(index)
    }

    /// Whether `index` is on the side opposing the viewer.
    fn opposes(&self, index: BattlerIndex) -> bool {
        index.side() == Side::Enemy
    }

    /// Every combatant in navigation order.
    fn all_combatants(&self) -> Vec<BattlerIndex> {
        self.state().display_order()
    }

    /// Standing combatants on the viewer's side, ordered by battler index.
    fn same_side(&self) -> Vec<BattlerIndex> {
        side_indices(self.state(), Side::Ally)
    }

    /// Standing combatants on the opposing side, ordered by battler index.
    fn opposing_side(&self) -> Vec<BattlerIndex> {
        side_indices(self.state(), Side::Enemy)
    }

    fn command_window_visible(&self) -> bool {
        self.state().command_window_visible
    }

    fn capture_allowed(&self) -> bool {
        self.state().capture_allowed()
    }
}

impl BattleAccessor for BattleState {
    fn state(&self) -> &BattleState {
        self
    }
}

fn side_indices(battle: &BattleState, side: Side) -> Vec<BattlerIndex> {
    battle
        .side_combatants(side)
        .into_iter()
        .filter(|combatant| !combatant.is_fainted())
        .map(|combatant| combatant.index)
        .collect()
}
