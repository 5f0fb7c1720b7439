//! Elemental typing.

/// Elemental type of a combatant or move.
///
/// `Unknown` is the "???" type shown for species the player has never met
/// and for combatants that lost all of their types.
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
pub enum ElementType {
    Normal,
    Fighting,
    Flying,
    Poison,
    Ground,
    Rock,
    Bug,
    Ghost,
    Steel,
    #[strum(to_string = "???")]
    Unknown,
    Fire,
    Water,
    Grass,
    Electric,
    Psychic,
    Ice,
    Dragon,
    Dark,
    Fairy,
    Stellar,
}

impl ElementType {
    const ICON_ORDER: [ElementType; 20] = [
        Self::Normal,
        Self::Fighting,
        Self::Flying,
        Self::Poison,
        Self::Ground,
        Self::Rock,
        Self::Bug,
        Self::Ghost,
        Self::Steel,
        Self::Unknown,
        Self::Fire,
        Self::Water,
        Self::Grass,
        Self::Electric,
        Self::Psychic,
        Self::Ice,
        Self::Dragon,
        Self::Dark,
        Self::Fairy,
        Self::Stellar,
    ];

    /// Row of this type inside the type icon sheet.
    pub const fn icon_position(self) -> u8 {
        self as u8
    }

    /// Inverse of [`ElementType::icon_position`].
    pub fn from_icon_position(position: u8) -> Option<Self> {
        Self::ICON_ORDER.get(position as usize).copied()
    }
}
