//! Display text for every battle condition.
//!
//! The catalog maps a [`ConditionKind`] to the row the overlay shows for it:
//! a label, how the stored value turns into the counter column, and a
//! description template filled in from battle state.

use std::collections::BTreeMap;

use battle_core::{ConditionKind, ElementType};
use strum::IntoEnumIterator;

/// Counter column shown when a condition has nothing to count.
pub const NO_COUNTER: &str = "--";

/// How a condition's stored value is shown in the counter column.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum CounterFormat {
    /// Always `--`.
    None,
    /// Remaining turns out of a fixed maximum, `n/max`.
    Ratio(u8),
    /// Stacked layers, `+n`.
    Stack,
    /// Literal text regardless of the value.
    Fixed(String),
    /// The value itself.
    Raw,
}

impl CounterFormat {
    pub fn format(&self, value: i32) -> String {
        match self {
            Self::None => NO_COUNTER.to_string(),
            Self::Ratio(max) => format!("{value}/{max}"),
            Self::Stack => format!("+{value}"),
            Self::Fixed(text) => text.clone(),
            Self::Raw => value.to_string(),
        }
    }
}

/// Move a condition's description refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum MoveSlot {
    Encore,
    Disable,
}

/// Description template of a condition.
///
/// Templates use `{label}`, `{battler}`, `{move}` and `{change}` as
/// placeholders; which ones are filled depends on the variant.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Description {
    Text(String),
    /// `{battler}` is the battler the condition's index points at.
    WithBattler(String),
    /// `{label}` is the condition label, `{move}` the move held in `slot`.
    WithMove { template: String, slot: MoveSlot },
    /// Picks `when` if the combatant has `element`, else `otherwise`.
    ByType {
        element: ElementType,
        when: String,
        otherwise: String,
    },
    /// `{change}` is "increased" or "decreased" by the value's sign.
    Weight(String),
}

/// When a condition appears at all.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Visibility {
    #[default]
    Always,
    /// Only while the combatant is semi-invulnerable.
    SemiInvulnerable,
}

/// One catalog row.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ConditionSpec {
    pub label: String,
    pub counter: CounterFormat,
    pub description: Description,
    #[cfg_attr(feature = "serde", serde(default))]
    pub visibility: Visibility,
}

impl ConditionSpec {
    fn new(label: &str, counter: CounterFormat, description: Description) -> Self {
        Self {
            label: label.to_string(),
            counter,
            description,
            visibility: Visibility::Always,
        }
    }
}

/// Catalog of condition rows, keyed by kind.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConditionCatalog {
    specs: BTreeMap<ConditionKind, ConditionSpec>,
}

impl Default for ConditionCatalog {
    fn default() -> Self {
        Self::standard()
    }
}

impl ConditionCatalog {
    /// Catalog with the built-in row of every condition.
    pub fn standard() -> Self {
        let specs = ConditionKind::iter()
            .map(|kind| (kind, standard_spec(kind)))
            .collect();
        Self { specs }
    }

    pub fn spec(&self, kind: ConditionKind) -> Option<&ConditionSpec> {
        self.specs.get(&kind)
    }

    /// Replaces the row of `kind`.
    pub fn insert(&mut self, kind: ConditionKind, spec: ConditionSpec) {
        self.specs.insert(kind, spec);
    }

    /// Applies every row of `overrides` on top of this catalog.
    pub fn merge(&mut self, overrides: impl IntoIterator<Item = (ConditionKind, ConditionSpec)>) {
        self.specs.extend(overrides);
    }

    pub fn len(&self) -> usize {
        self.specs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }
}

fn text(description: &str) -> Description {
    Description::Text(description.to_string())
}

fn with_battler(template: &str) -> Description {
    Description::WithBattler(template.to_string())
}

fn by_type(element: ElementType, when: &str, otherwise: &str) -> Description {
    Description::ByType {
        element,
        when: when.to_string(),
        otherwise: otherwise.to_string(),
    }
}

fn fixed(counter: &str) -> CounterFormat {
    CounterFormat::Fixed(counter.to_string())
}

/// Built-in row of `kind`.
pub fn standard_spec(kind: ConditionKind) -> ConditionSpec {
    use ConditionKind::*;
    use CounterFormat::{Raw, Ratio, Stack};

    const EVASION_IGNORED: &str = "The Pokémon's evasion boosts are ignored.";
    const NO_ESCAPE: &str = "The Pokémon can't flee or be switched out.";
    const TAKES_DAMAGE_EACH_TURN: &str = "The Pokémon takes damage at the end of each turn.";
    const HEALS_SWITCH_IN: &str = "Fully heals a Pokémon switching into this spot.";
    const SWITCH_IN_DAMAGE: &str = "Pokémon that switch into battle will take damage.";
    const NOT_FIRE_DAMAGE: &str = "Pokémon that are not Fire types take damage every turn.";
    const NONE: CounterFormat = CounterFormat::None;

    match kind {
        // Field
        FairyLock => ConditionSpec::new("Fairy Lock", Ratio(2), text("No Pokémon can flee.")),
        Gravity => ConditionSpec::new(
            "Gravity",
            Ratio(5),
            text("Grounds Pokémon. Prevents midair actions. Increases accuracy."),
        ),
        IonDeluge => ConditionSpec::new(
            "Ion Deluge",
            NONE,
            text("The Pokémon's Normal type moves become Electric type."),
        ),
        MagicRoom => ConditionSpec::new(
            "Magic Room",
            Ratio(5),
            text("No Pokémon can use their held items."),
        ),
        MudSport => ConditionSpec::new(
            "Mud Sport",
            NONE,
            text("The power of Electric moves is reduced."),
        ),
        MudSportField => ConditionSpec::new(
            "Mud Sport",
            Ratio(5),
            text("The power of Electric moves is reduced."),
        ),
        TrickRoom => ConditionSpec::new(
            "Trick Room",
            Ratio(5),
            text("Slower Pokémon get to move first."),
        ),
        WaterSport => ConditionSpec::new(
            "Water Sport",
            NONE,
            text("The power of Fire moves is reduced."),
        ),
        WaterSportField => ConditionSpec::new(
            "Water Sport",
            Ratio(5),
            text("The power of Fire moves is reduced."),
        ),
        WonderRoom => ConditionSpec::new(
            "Wonder Room",
            Ratio(5),
            text("All Pokémon swap their Def and Sp. Def stats."),
        ),

        // Team
        AuroraVeil => ConditionSpec::new(
            "Aurora Veil",
            Ratio(5),
            text("The Pokémon takes half damage from physical and special moves."),
        ),
        Cannonade => ConditionSpec::new(
            "G-Max Cannonade",
            Ratio(4),
            text("Pokémon that are not Water types take damage every turn."),
        ),
        CheerDefense1 => ConditionSpec::new(
            "Defense Cheer 1",
            Ratio(3),
            text("The Pokémon takes reduced damage from attacks."),
        ),
        CheerDefense2 => ConditionSpec::new(
            "Defense Cheer 2",
            Ratio(3),
            text("The Pokémon is immune to critical hits and move effects."),
        ),
        CheerDefense3 => ConditionSpec::new(
            "Defense Cheer 3",
            Ratio(3),
            text("The Pokémon will survive all incoming attacks with 1 HP."),
        ),
        CheerOffense1 => ConditionSpec::new(
            "Offense Cheer 1",
            Ratio(3),
            text("The Pokémon's attacks deal increased damage."),
        ),
        CheerOffense2 => ConditionSpec::new(
            "Offense Cheer 2",
            Ratio(3),
            text("The Pokémon's attacks will trigger effects & critically hit."),
        ),
        CheerOffense3 => ConditionSpec::new(
            "Offense Cheer 3",
            Ratio(3),
            text("The Pokémon's attacks bypass effects like Protect & Substitute."),
        ),
        CraftyShield => ConditionSpec::new(
            "Crafty Shield",
            NONE,
            text("The Pokémon is protected from all status moves."),
        ),
        LightScreen => ConditionSpec::new(
            "Light Screen",
            Ratio(5),
            text("The Pokémon takes half damage from special moves."),
        ),
        LuckyChant => ConditionSpec::new(
            "Lucky Chant",
            Ratio(5),
            text("The Pokémon is immune to critical hits."),
        ),
        MatBlock | KingsShield | Obstruct | SilkTrap | BurningBulwark => ConditionSpec::new(
            "Damage Protect",
            NONE,
            text("The Pokémon is protected from all incoming damage."),
        ),
        Mist => ConditionSpec::new(
            "Mist",
            Ratio(5),
            text("The Pokémon's stats cannot be lowered."),
        ),
        QuickGuard => ConditionSpec::new(
            "Quick Guard",
            NONE,
            text("The Pokémon is protected from all priority moves."),
        ),
        Rainbow => ConditionSpec::new(
            "Rainbow",
            Ratio(4),
            text("The additional effects of moves are more likely to occur."),
        ),
        Reflect => ConditionSpec::new(
            "Reflect",
            Ratio(5),
            text("The Pokémon takes half damage from physical moves."),
        ),
        Safeguard => ConditionSpec::new(
            "Safeguard",
            Ratio(5),
            text("The Pokémon is protected from status conditions."),
        ),
        SeaOfFire => ConditionSpec::new("Sea of Fire", Ratio(4), text(NOT_FIRE_DAMAGE)),
        Spikes => ConditionSpec::new(
            "Spikes",
            Stack,
            text("Grounded Pokémon that switch into battle will take damage."),
        ),
        StealthRock => ConditionSpec::new("Stealth Rock", fixed("+1"), text(SWITCH_IN_DAMAGE)),
        Steelsurge => ConditionSpec::new("G-Max Steelsurge", fixed("+1"), text(SWITCH_IN_DAMAGE)),
        StickyWeb => ConditionSpec::new(
            "Sticky Web",
            fixed("+1"),
            text("Pokémon that switch into battle will have their Speed lowered."),
        ),
        Swamp => ConditionSpec::new(
            "Swamp",
            Ratio(4),
            text("Speed is reduced by 75% in swampy conditions."),
        ),
        Tailwind => ConditionSpec::new(
            "Tailwind",
            Ratio(4),
            text("The Pokémon's Speed stat is doubled."),
        ),
        ToxicSpikes => ConditionSpec::new(
            "Toxic Spikes",
            Stack,
            text("Grounded Pokémon that switch into battle will be poisoned."),
        ),
        VineLash => ConditionSpec::new(
            "G-Max Vine Lash",
            Ratio(4),
            text("Pokémon that are not Grass types take damage every turn."),
        ),
        Volcalith => ConditionSpec::new(
            "G-Max Volcalith",
            Ratio(4),
            text("Pokémon that are not Rock types take damage every turn."),
        ),
        WideGuard => ConditionSpec::new(
            "Wide Guard",
            NONE,
            text("The Pokémon is protected from all spread moves."),
        ),
        Wildfire => ConditionSpec::new("G-Max Wildfire", Ratio(4), text(NOT_FIRE_DAMAGE)),

        // Position
        FutureSightCounter => ConditionSpec::new(
            "Future Attack",
            Raw,
            text("The Pokémon in this spot will be attacked in 2 turns."),
        ),
        HealingWish => ConditionSpec::new("Healing Wish", NONE, text(HEALS_SWITCH_IN)),
        LunarDance => ConditionSpec::new("Lunar Dance", NONE, text(HEALS_SWITCH_IN)),
        Wish => ConditionSpec::new(
            "Wish",
            NONE,
            text("The Pokémon in this spot restores HP on the next turn."),
        ),
        ZHealing => ConditionSpec::new(
            "Z-Healing",
            NONE,
            text("A Pokémon switching into this spot will recover its HP."),
        ),

        // Battler
        AquaRing => ConditionSpec::new(
            "Aqua Ring",
            NONE,
            text("The Pokémon regains some HP at the end of each turn."),
        ),
        Attract => ConditionSpec::new(
            "Infatuation",
            NONE,
            with_battler("The Pokémon is less likely to attack {battler}."),
        ),
        Protect | SpikyShield | BanefulBunker => ConditionSpec::new(
            "Full Protect",
            NONE,
            text("The Pokémon is protected from all incoming moves."),
        ),
        Charge => ConditionSpec::new(
            "Charge",
            NONE,
            text("The Pokémon's next Electric move will double in power."),
        ),
        Confusion => ConditionSpec::new(
            "Confusion",
            NONE,
            text("The Pokémon may hurt itself in its confusion."),
        ),
        Curse => ConditionSpec::new("Curse", NONE, text(TAKES_DAMAGE_EACH_TURN)),
        Disable => ConditionSpec::new(
            "Move Disabled",
            Ratio(4),
            Description::WithMove {
                template: "{move} has been disabled and cannot be used.".to_string(),
                slot: MoveSlot::Disable,
            },
        ),
        Electrify => ConditionSpec::new(
            "Electrify",
            NONE,
            text("The Pokémon's next move will be Electric type."),
        ),
        Embargo => ConditionSpec::new(
            "Embargo",
            Ratio(5),
            text("Items cannot be used on or by the Pokémon."),
        ),
        Encore => ConditionSpec::new(
            "Encore",
            Ratio(3),
            Description::WithMove {
                template: "Due to {label}, the Pokémon can only use {move}.".to_string(),
                slot: MoveSlot::Encore,
            },
        ),
        Endure => ConditionSpec::new(
            "Endure",
            NONE,
            text("The Pokémon will survive all incoming attacks with 1 HP."),
        ),
        FocusEnergy => ConditionSpec::new(
            "Critical Hit Boost",
            NONE,
            text("The Pokémon is more likely to land critical hits."),
        ),
        Foresight => ConditionSpec::new(
            "Foresight",
            NONE,
            by_type(
                ElementType::Ghost,
                "The Pokémon's Ghost immunities and evasion boosts are ignored.",
                EVASION_IGNORED,
            ),
        ),
        GastroAcid => ConditionSpec::new(
            "No Ability",
            NONE,
            text("The Pokémon's Ability loses its effect."),
        ),
        GlaiveRush => ConditionSpec::new(
            "Vulnerable",
            Ratio(2),
            text("The Pokémon cannot evade and takes double damage."),
        ),
        HealBlock => ConditionSpec::new(
            "Heal Block",
            Ratio(5),
            text("The Pokémon's HP cannot be restored by healing effects."),
        ),
        HelpingHand => ConditionSpec::new(
            "Helping Hand",
            NONE,
            text("The Pokémon's damage output is being increased."),
        ),
        HyperBeam => ConditionSpec::new(
            "Recharging",
            Ratio(2),
            text("The Pokémon cannot move until it recharges from its last attack."),
        ),
        Imprison => ConditionSpec::new(
            "Imprison",
            NONE,
            text("Pokémon can't use moves known by an opposing Imprison user."),
        ),
        Ingrain => ConditionSpec::new(
            "Ingrain",
            NONE,
            text("The Pokémon regains some HP every turn, but cannot switch out."),
        ),
        MeanLook | NoRetreat | JawLock | Octolock => {
            ConditionSpec::new("No Escape", NONE, text(NO_ESCAPE))
        }
        LaserFocus => ConditionSpec::new(
            "Laser Focus",
            Ratio(2),
            text("The Pokémon's next attack is a guaranteed critical hit."),
        ),
        LeechSeed => ConditionSpec::new(
            "Leech Seed",
            NONE,
            with_battler("The Pokémon's HP is leeched every turn to heal {battler}."),
        ),
        LockOn => ConditionSpec::new(
            "Lock-On",
            Ratio(2),
            text("Any move used against a locked-on target will be sure to hit."),
        ),
        MagicCoat => ConditionSpec::new(
            "Magic Coat",
            NONE,
            text("The Pokémon bounces back any incoming status moves."),
        ),
        MagnetRise => ConditionSpec::new(
            "Magnet Rise",
            Ratio(5),
            text("The Pokémon is airborne and immune to Ground moves."),
        ),
        Minimize => ConditionSpec::new(
            "Minimize",
            NONE,
            text("The Pokémon shrunk and now takes more damage when squished."),
        ),
        MiracleEye => ConditionSpec::new(
            "Miracle Eye",
            NONE,
            by_type(
                ElementType::Dark,
                "The Pokémon's Dark immunities and evasion boosts are ignored.",
                EVASION_IGNORED,
            ),
        ),
        Nightmare => ConditionSpec::new(
            "Nightmare",
            NONE,
            text("The Pokémon takes damage each turn it spends asleep."),
        ),
        Outrage => ConditionSpec::new(
            "Rampaging",
            NONE,
            text("The Pokémon rampages for 2-3 turns. It then becomes confused."),
        ),
        PerishSong => ConditionSpec::new(
            "Counting Down",
            Raw,
            text("All Pokémon in this battle state will faint after 3 turns."),
        ),
        Powder => ConditionSpec::new(
            "Powder",
            NONE,
            text("The Pokémon takes damage when it uses a Fire type move."),
        ),
        PowerTrick => ConditionSpec::new(
            "Power Trick",
            NONE,
            text("The Pokémon's Atk and Def are swapped."),
        ),
        Rage => ConditionSpec::new(
            "Rage",
            NONE,
            text("The Pokémon's Attack stat increases whenever it's hit."),
        ),
        SaltCure => ConditionSpec::new("Salt Cure", NONE, text(TAKES_DAMAGE_EACH_TURN)),
        SkyDrop => ConditionSpec::new(
            "Sky Drop",
            NONE,
            with_battler("The Pokémon is being lifted in the air by {battler}."),
        ),
        SlowStart => ConditionSpec::new(
            "Slow Start",
            Raw,
            text("The Pokémon gets its act together in 5 turns."),
        ),
        SmackDown => ConditionSpec::new(
            "Smack Down",
            NONE,
            by_type(
                ElementType::Flying,
                "The Pokémon is grounded and its Flying immunities are ignored.",
                "The Pokémon is grounded.",
            ),
        ),
        Splinters => ConditionSpec::new("Splinters", Ratio(3), text(TAKES_DAMAGE_EACH_TURN)),
        Stockpile => ConditionSpec::new(
            "Stockpile",
            Stack,
            text("Stockpiling increases the Pokémon's defensive stats."),
        ),
        Substitute => ConditionSpec::new(
            "Substitute",
            NONE,
            text("The Pokémon's substitute will take any incoming moves."),
        ),
        Syrupy => ConditionSpec::new(
            "Speed Down",
            Raw,
            text("The Pokémon's Speed is lowered for 3 turns."),
        ),
        TarShot => ConditionSpec::new(
            "Tar Shot",
            NONE,
            text("The Pokémon has been made weaker to Fire type moves."),
        ),
        Taunt => ConditionSpec::new(
            "Taunt",
            Ratio(4),
            text("The Pokémon can only use moves that deal damage."),
        ),
        Telekinesis => ConditionSpec::new(
            "Telekinesis",
            Ratio(3),
            text("The Pokémon has been made airborne, but it cannot evade attacks."),
        ),
        ThroatChop => ConditionSpec::new(
            "Throat Chop",
            Ratio(2),
            text("The Pokémon can't use any sound-based moves."),
        ),
        Torment => ConditionSpec::new(
            "Torment",
            NONE,
            text("The Pokémon can't use the same move twice in a row."),
        ),
        Toxic => ConditionSpec::new(
            "Badly Poisoned",
            NONE,
            text("Damage the Pokémon takes from its poison worsens every turn."),
        ),
        Trapping => ConditionSpec::new(
            "Bound",
            NONE,
            text("The Pokémon is bound and takes damage every turn."),
        ),
        TwoTurnAttack => ConditionSpec {
            visibility: Visibility::SemiInvulnerable,
            ..ConditionSpec::new(
                "Semi-Invulnerable",
                NONE,
                text("The Pokémon cannot be hit by most attacks."),
            )
        },
        Uproar => ConditionSpec::new(
            "Uproar",
            NONE,
            text("Pokémon cannot fall asleep during an uproar."),
        ),
        WeightChange => ConditionSpec::new(
            "Weight Changed",
            NONE,
            Description::Weight("The Pokémon's weight has been {change}.".to_string()),
        ),
        Yawn => ConditionSpec::new(
            "Drowsy",
            Ratio(2),
            text("The Pokémon will fall asleep at the end of the next turn."),
        ),
    }
}
