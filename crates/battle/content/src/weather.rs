//! Weather and terrain rows.

use battle_core::{Terrain, Weather};

/// How hail is presented. Games that replaced hail with snow pick `Snow`,
/// games that merged the two pick `Hailstorm`.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, strum::Display, strum::EnumString, strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum HailStyle {
    #[default]
    Hail,
    Snow,
    Hailstorm,
}

const SNOW_DESCRIPTION: &str = "Boosts Def of Ice types. Blizzard always hits.";

/// Label and description of the active weather.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WeatherText {
    pub label: &'static str,
    pub description: &'static str,
}

/// Text for `weather`, or `None` when the sky is clear.
pub fn weather_text(weather: Weather, hail: HailStyle) -> Option<WeatherText> {
    let (label, description) = match weather {
        Weather::None => return None,
        Weather::Hail => match hail {
            HailStyle::Hail => (
                weather.name(),
                "Non-Ice types take damage each turn. Blizzard always hits.",
            ),
            HailStyle::Snow => ("Snow", SNOW_DESCRIPTION),
            HailStyle::Hailstorm => ("Hailstorm", "Combined effects of both Hail and Snow."),
        },
        Weather::Sun => (weather.name(), "Boosts Fire moves and weakens Water moves."),
        Weather::HarshSun => (weather.name(), "Boosts Fire moves and negates Water moves."),
        Weather::Rain => (weather.name(), "Boosts Water moves and weakens Fire moves."),
        Weather::HeavyRain => (weather.name(), "Boosts Water moves and negates Fire moves."),
        Weather::Snow => (weather.name(), SNOW_DESCRIPTION),
        Weather::Sandstorm => (
            weather.name(),
            "Boosts Rock type Sp. Def. Damages unless Rock/Ground/Steel.",
        ),
        Weather::StrongWinds => (
            weather.name(),
            "Flying types won't take super effective damage.",
        ),
        Weather::ShadowSky => (
            weather.name(),
            "Boosts Shadow moves. Non-Shadow Pokémon damaged each turn.",
        ),
    };
    Some(WeatherText { label, description })
}

/// Label and description of the active terrain.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TerrainText {
    pub label: String,
    pub description: &'static str,
}

/// Text for `terrain`, or `None` when there is no terrain.
pub fn terrain_text(terrain: Terrain) -> Option<TerrainText> {
    let description = match terrain {
        Terrain::None => return None,
        Terrain::Electric => "Grounded Pokémon immune to sleep. Boosts Electric moves.",
        Terrain::Grassy => "Grounded Pokémon recover HP each turn. Boosts Grass moves.",
        Terrain::Psychic => "Priority moves fail on grounded targets. Boosts Psychic moves.",
        Terrain::Misty => "Status can't be changed when grounded. Weakens Dragon moves.",
    };
    Some(TerrainText {
        label: format!("{} Terrain", terrain.name()),
        description,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hail_follows_style() {
        let label = |style| weather_text(Weather::Hail, style).unwrap().label;
        assert_eq!(label(HailStyle::Hail), "Hail");
        assert_eq!(label(HailStyle::Snow), "Snow");
        assert_eq!(label(HailStyle::Hailstorm), "Hailstorm");
    }

    #[test]
    fn hail_style_parses_case_insensitively() {
        assert_eq!("SNOW".parse::<HailStyle>().unwrap(), HailStyle::Snow);
        assert_eq!(HailStyle::Hailstorm.to_string(), "hailstorm");
        assert!("sleet".parse::<HailStyle>().is_err());
    }

    #[test]
    fn clear_field_has_no_rows() {
        assert!(weather_text(Weather::None, HailStyle::default()).is_none());
        assert!(terrain_text(Terrain::None).is_none());
        assert_eq!(terrain_text(Terrain::Misty).unwrap().label, "Misty Terrain");
    }
}
