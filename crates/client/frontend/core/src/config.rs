//! Frontend configuration structures and loaders.
//!
//! This module contains overlay settings shared across frontend
//! implementations (CLI, GUI, etc.).

use std::env;

use battle_content::HailStyle;

/// Frontend-specific configuration.
#[derive(Clone, Debug)]
pub struct FrontendConfig {
    /// Width of the logical drawing surface in pixels.
    pub surface_width: i32,
    /// Show real typing for species the player has never met.
    pub show_new_species_types: bool,
    pub hail_style: HailStyle,
}

impl Default for FrontendConfig {
    fn default() -> Self {
        Self {
            surface_width: 512,
            show_new_species_types: false,
            hail_style: HailStyle::default(),
        }
    }
}

impl FrontendConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `BATTLE_INFO_SURFACE_WIDTH` - Surface width in pixels (default: 512)
    /// - `BATTLE_INFO_SHOW_NEW_SPECIES_TYPES` - Reveal unknown species typing (default: false)
    /// - `BATTLE_INFO_HAIL_STYLE` - `hail`, `snow` or `hailstorm` (default: hail)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(width) = read_env::<i32>("BATTLE_INFO_SURFACE_WIDTH") {
            config.surface_width = width.max(MIN_SURFACE_WIDTH);
        }
        if let Some(show) = read_env_bool("BATTLE_INFO_SHOW_NEW_SPECIES_TYPES") {
            config.show_new_species_types = show;
        }
        if let Some(style) = read_env::<HailStyle>("BATTLE_INFO_HAIL_STYLE") {
            config.hail_style = style;
        }

        config
    }
}

/// Narrowest surface that still fits the info panel.
const MIN_SURFACE_WIDTH: i32 = 480;

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}

fn read_env_bool(key: &str) -> Option<bool> {
    match env::var(key).ok()?.to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}
