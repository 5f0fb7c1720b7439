//! Ongoing battle conditions and the stores that hold them.
//!
//! Conditions live at four scopes: the whole field, one side's team, one
//! battler position, or one battler. Each scope keeps an [`EffectStore`]
//! mapping a [`ConditionKind`] to its current [`EffectValue`].

use std::collections::BTreeMap;

use crate::state::BattlerIndex;

/// Where a condition is stored.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, strum::Display, strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case")]
pub enum ConditionScope {
    Field,
    Team,
    Position,
    Battler,
}

/// How a condition's stored value is interpreted.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, strum::Display, strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case")]
pub enum ValueKind {
    /// On/off switch.
    Boolean,
    /// Turn counter or stack count; zero means inactive.
    Counter,
    /// Reference to another battler; absent means inactive.
    Index,
}

/// Stored value of one condition.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EffectValue {
    Flag(bool),
    Counter(i32),
    Index(Option<BattlerIndex>),
}

impl EffectValue {
    /// Whether the value counts as active when interpreted as `kind`.
    ///
    /// A value whose shape does not match `kind` is never active.
    pub fn is_active_as(&self, kind: ValueKind) -> bool {
        match (kind, self) {
            (ValueKind::Boolean, Self::Flag(on)) => *on,
            (ValueKind::Counter, Self::Counter(n)) => *n != 0,
            (ValueKind::Index, Self::Index(target)) => target.is_some(),
            _ => false,
        }
    }

    pub fn is_active(&self) -> bool {
        match self {
            Self::Flag(on) => *on,
            Self::Counter(n) => *n != 0,
            Self::Index(target) => target.is_some(),
        }
    }

    /// Numeric reading of the value: counters as-is, flags as 0/1, indices as
    /// the battler index or -1.
    pub fn number(&self) -> i32 {
        match self {
            Self::Flag(on) => i32::from(*on),
            Self::Counter(n) => *n,
            Self::Index(Some(index)) => i32::from(index.0),
            Self::Index(None) => -1,
        }
    }

    pub fn battler(&self) -> Option<BattlerIndex> {
        match self {
            Self::Index(target) => *target,
            _ => None,
        }
    }
}

/// Ongoing conditions, keyed by kind.
///
/// The names follow the moves, abilities and mechanics that create them.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(ascii_case_insensitive)]
pub enum ConditionKind {
    // Field
    FairyLock,
    Gravity,
    IonDeluge,
    MagicRoom,
    MudSportField,
    TrickRoom,
    WaterSportField,
    WonderRoom,
    // Team
    AuroraVeil,
    Cannonade,
    CheerDefense1,
    CheerDefense2,
    CheerDefense3,
    CheerOffense1,
    CheerOffense2,
    CheerOffense3,
    CraftyShield,
    LightScreen,
    LuckyChant,
    MatBlock,
    Mist,
    QuickGuard,
    Rainbow,
    Reflect,
    Safeguard,
    SeaOfFire,
    Spikes,
    StealthRock,
    Steelsurge,
    StickyWeb,
    Swamp,
    Tailwind,
    ToxicSpikes,
    VineLash,
    Volcalith,
    WideGuard,
    Wildfire,
    // Position
    FutureSightCounter,
    HealingWish,
    LunarDance,
    Wish,
    ZHealing,
    // Battler
    AquaRing,
    Attract,
    BanefulBunker,
    BurningBulwark,
    Charge,
    Confusion,
    Curse,
    Disable,
    Electrify,
    Embargo,
    Encore,
    Endure,
    FocusEnergy,
    Foresight,
    GastroAcid,
    GlaiveRush,
    HealBlock,
    HelpingHand,
    HyperBeam,
    Imprison,
    Ingrain,
    JawLock,
    KingsShield,
    LaserFocus,
    LeechSeed,
    LockOn,
    MagicCoat,
    MagnetRise,
    MeanLook,
    Minimize,
    MiracleEye,
    MudSport,
    Nightmare,
    NoRetreat,
    Obstruct,
    Octolock,
    Outrage,
    PerishSong,
    Powder,
    PowerTrick,
    Protect,
    Rage,
    SaltCure,
    SilkTrap,
    SkyDrop,
    SlowStart,
    SmackDown,
    SpikyShield,
    Splinters,
    Stockpile,
    Substitute,
    Syrupy,
    TarShot,
    Taunt,
    Telekinesis,
    ThroatChop,
    Torment,
    Toxic,
    Trapping,
    TwoTurnAttack,
    Uproar,
    WaterSport,
    WeightChange,
    Yawn,
}

/// Conditions active at one scope.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct EffectStore {
    values: BTreeMap<ConditionKind, EffectValue>,
}

impl EffectStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, kind: ConditionKind) -> Option<EffectValue> {
        self.values.get(&kind).copied()
    }

    pub fn set(&mut self, kind: ConditionKind, value: EffectValue) {
        self.values.insert(kind, value);
    }

    pub fn with(mut self, kind: ConditionKind, value: EffectValue) -> Self {
        self.set(kind, value);
        self
    }

    pub fn clear(&mut self, kind: ConditionKind) {
        self.values.remove(&kind);
    }

    /// Counter value of `kind`, zero when unset or not a counter.
    pub fn counter(&self, kind: ConditionKind) -> i32 {
        match self.get(kind) {
            Some(EffectValue::Counter(n)) => n,
            _ => 0,
        }
    }

    /// Whether `kind` is set and active regardless of its value shape.
    pub fn is_active(&self, kind: ConditionKind) -> bool {
        self.get(kind).is_some_and(|value| value.is_active())
    }

    pub fn iter(&self) -> impl Iterator<Item = (ConditionKind, EffectValue)> + '_ {
        self.values.iter().map(|(kind, value)| (*kind, *value))
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn activity_follows_value_kind() {
        assert!(EffectValue::Flag(true).is_active_as(ValueKind::Boolean));
        assert!(!EffectValue::Flag(false).is_active_as(ValueKind::Boolean));
        assert!(EffectValue::Counter(-1).is_active_as(ValueKind::Counter));
        assert!(!EffectValue::Counter(0).is_active_as(ValueKind::Counter));
        assert!(EffectValue::Index(Some(BattlerIndex(1))).is_active_as(ValueKind::Index));
        assert!(!EffectValue::Index(None).is_active_as(ValueKind::Index));
    }

    #[test]
    fn mismatched_shapes_are_inactive() {
        assert!(!EffectValue::Counter(3).is_active_as(ValueKind::Boolean));
        assert!(!EffectValue::Flag(true).is_active_as(ValueKind::Index));
    }

    #[test]
    fn store_reports_counters_and_clears() {
        let mut store = EffectStore::new()
            .with(ConditionKind::Reflect, EffectValue::Counter(4))
            .with(ConditionKind::Mist, EffectValue::Flag(true));
        assert_eq!(store.counter(ConditionKind::Reflect), 4);
        assert_eq!(store.counter(ConditionKind::Mist), 0);
        assert!(store.is_active(ConditionKind::Mist));

        store.clear(ConditionKind::Mist);
        assert!(!store.is_active(ConditionKind::Mist));
        assert_eq!(store.iter().count(), 1);
    }
}
