//! Field-wide weather and terrain.

/// Active weather on the field.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::EnumString, strum::EnumIter)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(ascii_case_insensitive)]
pub enum Weather {
    #[default]
    None,
    Sun,
    HarshSun,
    Rain,
    HeavyRain,
    Sandstorm,
    Hail,
    Snow,
    StrongWinds,
    ShadowSky,
}

impl Weather {
    pub const fn name(self) -> &'static str {
        match self {
            Self::None => "None",
            Self::Sun => "Sun",
            Self::HarshSun => "Harsh Sun",
            Self::Rain => "Rain",
            Self::HeavyRain => "Heavy Rain",
            Self::Sandstorm => "Sandstorm",
            Self::Hail => "Hail",
            Self::Snow => "Snow",
            Self::StrongWinds => "Strong Winds",
            Self::ShadowSky => "Shadow Sky",
        }
    }

    /// Weathers whose effect a Utility Umbrella cancels for its holder.
    pub const fn is_sun_or_rain(self) -> bool {
        matches!(
            self,
            Self::Sun | Self::HarshSun | Self::Rain | Self::HeavyRain
        )
    }
}

/// Active terrain on the field.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::EnumString, strum::EnumIter)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(ascii_case_insensitive)]
pub enum Terrain {
    #[default]
    None,
    Electric,
    Grassy,
    Misty,
    Psychic,
}

impl Terrain {
    pub const fn name(self) -> &'static str {
        match self {
            Self::None => "None",
            Self::Electric => "Electric",
            Self::Grassy => "Grassy",
            Self::Misty => "Misty",
            Self::Psychic => "Psychic",
        }
    }
}
