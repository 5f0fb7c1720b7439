//! Battle snapshot data model shared by content loaders and frontends.
//!
//! `battle-core` describes what a battle looks like at one instant: the
//! combatants on both sides, the field, per-side and per-position condition
//! stores, and the battler-scoped conditions. It owns no combat rules; the
//! presentation crates only read from it.
pub mod conditions;
pub mod element;
pub mod field;
pub mod state;
pub mod stats;
pub mod status;

pub use conditions::{ConditionKind, ConditionScope, EffectStore, EffectValue, ValueKind};
pub use element::ElementType;
pub use field::{Terrain, Weather};
pub use state::{
    BattleState, BattlerIndex, Combatant, Cosmetics, FieldState, Gender, Identity, PositionState,
    Side, SideState, TeraState,
};
pub use stats::{NatureShift, Stat, StatStages};
pub use status::StatusCondition;
