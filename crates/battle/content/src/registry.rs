//! Which store holds each condition and how its value is read.

use battle_core::{ConditionKind, ConditionScope, ValueKind};

/// Conditions of one scope, grouped by value kind.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ScopeEntries {
    pub boolean: Vec<ConditionKind>,
    pub counter: Vec<ConditionKind>,
    pub index: Vec<ConditionKind>,
}

impl ScopeEntries {
    fn new(boolean: &[ConditionKind], counter: &[ConditionKind], index: &[ConditionKind]) -> Self {
        Self {
            boolean: boolean.to_vec(),
            counter: counter.to_vec(),
            index: index.to_vec(),
        }
    }

    /// Entries in display order: booleans, then counters, then indices.
    pub fn iter(&self) -> impl Iterator<Item = (ValueKind, ConditionKind)> + '_ {
        let tag = |kind: ValueKind| move |condition: &ConditionKind| (kind, *condition);
        self.boolean
            .iter()
            .map(tag(ValueKind::Boolean))
            .chain(self.counter.iter().map(tag(ValueKind::Counter)))
            .chain(self.index.iter().map(tag(ValueKind::Index)))
    }

    pub fn len(&self) -> usize {
        self.boolean.len() + self.counter.len() + self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Ordered list of the conditions the overlay walks for every combatant.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default = "ConditionRegistry::empty"))]
pub struct ConditionRegistry {
    pub field: ScopeEntries,
    pub team: ScopeEntries,
    pub position: ScopeEntries,
    pub battler: ScopeEntries,
}

impl Default for ConditionRegistry {
    fn default() -> Self {
        Self::standard()
    }
}

impl ConditionRegistry {
    /// Registry with no entries at all.
    pub fn empty() -> Self {
        Self {
            field: ScopeEntries::default(),
            team: ScopeEntries::default(),
            position: ScopeEntries::default(),
            battler: ScopeEntries::default(),
        }
    }

    /// Built-in registry.
    ///
    /// Imprison and Uproar are left out: they affect every combatant and are
    /// reported from whichever battler holds them.
    pub fn standard() -> Self {
        use ConditionKind::*;

        Self {
            field: ScopeEntries::new(
                &[IonDeluge],
                &[
                    FairyLock,
                    Gravity,
                    MagicRoom,
                    MudSportField,
                    TrickRoom,
                    WaterSportField,
                    WonderRoom,
                ],
                &[],
            ),
            team: ScopeEntries::new(
                &[
                    CraftyShield,
                    MatBlock,
                    QuickGuard,
                    StealthRock,
                    Steelsurge,
                    StickyWeb,
                    WideGuard,
                ],
                &[
                    AuroraVeil,
                    Cannonade,
                    CheerDefense1,
                    CheerDefense2,
                    CheerDefense3,
                    CheerOffense1,
                    CheerOffense2,
                    CheerOffense3,
                    LightScreen,
                    LuckyChant,
                    Mist,
                    Rainbow,
                    Reflect,
                    Safeguard,
                    SeaOfFire,
                    Spikes,
                    Swamp,
                    Tailwind,
                    ToxicSpikes,
                    VineLash,
                    Volcalith,
                    Wildfire,
                ],
                &[],
            ),
            position: ScopeEntries::new(
                &[HealingWish, LunarDance, ZHealing],
                &[FutureSightCounter, Wish],
                &[],
            ),
            battler: ScopeEntries::new(
                &[
                    AquaRing,
                    BanefulBunker,
                    BurningBulwark,
                    Curse,
                    Electrify,
                    Endure,
                    Foresight,
                    GastroAcid,
                    HelpingHand,
                    Ingrain,
                    KingsShield,
                    MagicCoat,
                    Minimize,
                    MiracleEye,
                    MudSport,
                    Nightmare,
                    NoRetreat,
                    Obstruct,
                    Powder,
                    PowerTrick,
                    Protect,
                    Rage,
                    SaltCure,
                    SilkTrap,
                    SmackDown,
                    SpikyShield,
                    TarShot,
                    Torment,
                    TwoTurnAttack,
                    WaterSport,
                ],
                &[
                    Charge,
                    Confusion,
                    Disable,
                    Embargo,
                    Encore,
                    FocusEnergy,
                    GlaiveRush,
                    HealBlock,
                    HyperBeam,
                    LaserFocus,
                    LockOn,
                    MagnetRise,
                    Outrage,
                    PerishSong,
                    SlowStart,
                    Splinters,
                    Stockpile,
                    Substitute,
                    Syrupy,
                    Taunt,
                    Telekinesis,
                    ThroatChop,
                    Toxic,
                    Trapping,
                    WeightChange,
                    Yawn,
                ],
                &[Attract, JawLock, LeechSeed, MeanLook, Octolock, SkyDrop],
            ),
        }
    }

    pub fn scope(&self, scope: ConditionScope) -> &ScopeEntries {
        match scope {
            ConditionScope::Field => &self.field,
            ConditionScope::Team => &self.team,
            ConditionScope::Position => &self.position,
            ConditionScope::Battler => &self.battler,
        }
    }

    /// Every entry: field, team, position, battler, each in value-kind order.
    pub fn iter(&self) -> impl Iterator<Item = (ConditionScope, ValueKind, ConditionKind)> + '_ {
        [
            ConditionScope::Field,
            ConditionScope::Team,
            ConditionScope::Position,
            ConditionScope::Battler,
        ]
        .into_iter()
        .flat_map(move |scope| {
            self.scope(scope)
                .iter()
                .map(move |(value_kind, condition)| (scope, value_kind, condition))
        })
    }

    pub fn len(&self) -> usize {
        self.field.len() + self.team.len() + self.position.len() + self.battler.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
