//! Combatants and their identities.

use std::fmt;

use crate::conditions::EffectStore;
use crate::element::ElementType;
use crate::stats::{NatureShift, StatStages};
use crate::status::StatusCondition;

/// Slot of a combatant in battle.
///
/// Even indices belong to the viewer's side, odd indices to the opponent.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct BattlerIndex(pub u8);

impl BattlerIndex {
    pub const fn side(self) -> Side {
        if self.0 % 2 == 0 {
            Side::Ally
        } else {
            Side::Enemy
        }
    }

    pub const fn as_usize(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for BattlerIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Side of the battle relative to the viewer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum Side {
    Ally,
    Enemy,
}

impl Side {
    pub const fn opposite(self) -> Side {
        match self {
            Side::Ally => Side::Enemy,
            Side::Enemy => Side::Ally,
        }
    }

    pub(crate) const fn slot(self) -> usize {
        match self {
            Side::Ally => 0,
            Side::Enemy => 1,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Gender {
    Male,
    Female,
    #[default]
    Genderless,
}

impl Gender {
    /// Column of this gender inside the gender icon sheet.
    pub const fn icon_position(self) -> u8 {
        match self {
            Gender::Male => 0,
            Gender::Female => 1,
            Gender::Genderless => 2,
        }
    }
}

/// What a combatant looks like to an observer.
///
/// A combatant under an illusion presents a different identity to the
/// opposing side.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Identity {
    pub name: String,
    pub gender: Gender,
    pub shiny: bool,
    /// Species typing, before any in-battle changes.
    pub types: Vec<ElementType>,
}

impl Identity {
    pub fn new(name: impl Into<String>, types: Vec<ElementType>) -> Self {
        Self {
            name: name.into(),
            types,
            ..Self::default()
        }
    }
}

/// Cosmetic attributes only shown on wild combatants.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Cosmetics {
    pub shiny_leaves: u8,
    /// Size scale in `0..=255`; small below 60, large from 196.
    pub size_scale: Option<u8>,
    pub marked: bool,
}

/// Terastallization state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TeraState {
    pub tera_type: Option<ElementType>,
    pub active: bool,
    /// Whether the combatant could still terastallize this battle.
    pub available: bool,
}

/// One participant of the battle.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Combatant {
    pub index: BattlerIndex,
    pub identity: Identity,
    /// Identity shown to the opposing side while an illusion holds.
    pub disguise: Option<Identity>,
    pub level: u8,
    pub raid_boss: bool,
    pub hp: u32,
    pub total_hp: u32,
    pub status: StatusCondition,
    /// Current battle typing (after type-changing moves, before tera).
    pub types: Vec<ElementType>,
    /// Type added on top of the battle typing (Forest's Curse, Trick-or-Treat).
    pub extra_type: Option<ElementType>,
    pub tera: TeraState,
    /// Turns left in the Dynamax state; `Some(0)` is an indefinite Dynamax.
    pub dynamax_turns: Option<u8>,
    pub stages: StatStages,
    pub nature: NatureShift,
    pub ability: String,
    pub item: Option<String>,
    pub last_move: Option<String>,
    /// Trainer owning the combatant; wild combatants have none.
    pub owner: Option<String>,
    pub owned_by_player: bool,
    /// Whether the player's records know this species.
    pub species_known: bool,
    pub cosmetics: Cosmetics,
    /// HP percentage the combatant cannot drop below when attacked.
    pub damage_threshold: Option<u8>,
    pub semi_invulnerable: bool,
    /// Whether grounded effects such as terrain reach this combatant.
    pub grounded: bool,
    pub encore_move: Option<String>,
    pub disable_move: Option<String>,
    pub effects: EffectStore,
}

impl Combatant {
    pub fn new(index: BattlerIndex, identity: Identity, level: u8, total_hp: u32) -> Self {
        Self {
            index,
            types: identity.types.clone(),
            identity,
            level,
            hp: total_hp,
            total_hp,
            grounded: true,
            ..Self::default()
        }
    }

    pub fn side(&self) -> Side {
        self.index.side()
    }

    /// Whether the combatant stands on the side opposing the viewer.
    pub fn opposes(&self) -> bool {
        self.side() == Side::Enemy
    }

    pub fn is_wild(&self) -> bool {
        self.owner.is_none()
    }

    pub fn is_fainted(&self) -> bool {
        self.hp == 0
    }

    pub fn is_dynamaxed(&self) -> bool {
        self.dynamax_turns.is_some()
    }

    pub fn is_terastallized(&self) -> bool {
        self.tera.active
    }

    pub fn has_illusion(&self) -> bool {
        self.disguise.is_some()
    }

    /// Identity as seen by the viewer: opponents may show a disguise.
    pub fn displayed_identity(&self) -> &Identity {
        match (&self.disguise, self.opposes()) {
            (Some(disguise), true) => disguise,
            _ => &self.identity,
        }
    }

    /// Typing including the extra type, or the tera type while terastallized.
    pub fn effective_types(&self) -> Vec<ElementType> {
        if self.tera.active
            && let Some(tera_type) = self.tera.tera_type
            && tera_type != ElementType::Stellar
        {
            return vec![tera_type];
        }
        let mut types = self.types.clone();
        if let Some(extra) = self.extra_type
            && !types.contains(&extra)
        {
            types.push(extra);
        }
        types
    }

    pub fn has_type(&self, element: ElementType) -> bool {
        self.effective_types().contains(&element)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mimic(index: u8) -> Combatant {
        let mut combatant = Combatant::new(
            BattlerIndex(index),
            Identity::new("Zoroark", vec![ElementType::Dark]),
            50,
            120,
        );
        combatant.disguise = Some(Identity::new(
            "Lapras",
            vec![ElementType::Water, ElementType::Ice],
        ));
        combatant
    }

    #[test]
    fn parity_decides_side() {
        assert_eq!(BattlerIndex(0).side(), Side::Ally);
        assert_eq!(BattlerIndex(3).side(), Side::Enemy);
        assert_eq!(Side::Ally.opposite(), Side::Enemy);
    }

    #[test]
    fn disguise_only_shows_to_the_other_side() {
        assert_eq!(mimic(1).displayed_identity().name, "Lapras");
        assert_eq!(mimic(0).displayed_identity().name, "Zoroark");
    }

    #[test]
    fn tera_type_replaces_battle_typing() {
        let mut combatant = mimic(0);
        combatant.extra_type = Some(ElementType::Grass);
        assert_eq!(
            combatant.effective_types(),
            vec![ElementType::Dark, ElementType::Grass]
        );

        combatant.tera = TeraState {
            tera_type: Some(ElementType::Fairy),
            active: true,
            available: false,
        };
        assert!(combatant.has_type(ElementType::Fairy));
        assert!(!combatant.has_type(ElementType::Dark));
    }
}
