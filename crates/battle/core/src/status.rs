//! Major (non-volatile) status conditions.

/// Persistent status condition of a combatant.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::Display, strum::EnumString,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(ascii_case_insensitive)]
pub enum StatusCondition {
    #[default]
    None,
    Sleep,
    Poison,
    Burn,
    Paralysis,
    Frozen,
    Drowsy,
    Frostbite,
}

impl StatusCondition {
    /// Row of this status inside the status icon sheet, `None` when healthy.
    pub const fn icon_position(self) -> Option<u8> {
        match self {
            Self::None => None,
            Self::Sleep => Some(0),
            Self::Poison => Some(1),
            Self::Burn => Some(2),
            Self::Paralysis => Some(3),
            Self::Frozen => Some(4),
            Self::Drowsy => Some(5),
            Self::Frostbite => Some(6),
        }
    }

    /// Inverse of [`StatusCondition::icon_position`].
    pub const fn from_icon_position(position: u8) -> Option<Self> {
        match position {
            0 => Some(Self::Sleep),
            1 => Some(Self::Poison),
            2 => Some(Self::Burn),
            3 => Some(Self::Paralysis),
            4 => Some(Self::Frozen),
            5 => Some(Self::Drowsy),
            6 => Some(Self::Frostbite),
            _ => None,
        }
    }

    /// Three-letter tag used by text-only renderers.
    pub const fn tag(self) -> &'static str {
        match self {
            Self::None => "",
            Self::Sleep => "SLP",
            Self::Poison => "PSN",
            Self::Burn => "BRN",
            Self::Paralysis => "PAR",
            Self::Frozen => "FRZ",
            Self::Drowsy => "DRW",
            Self::Frostbite => "FRB",
        }
    }
}
