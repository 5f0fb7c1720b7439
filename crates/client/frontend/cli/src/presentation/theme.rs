//! Ratatui rendition of the overlay's images and text colors.
//!
//! Sprite sheets have no terminal equivalent, so each image becomes either a
//! background fill over its footprint or a short styled label. Sheet images
//! are decoded back from their source rect.

use battle_core::{ElementType, StatusCondition};
use client_frontend_core::{Asset, ColorPair, ImageDraw, Indicator, Rgb};
use ratatui::style::{Color, Modifier, Style};

/// Height of the logical overlay surface in pixels.
pub const SURFACE_HEIGHT: i32 = 384;

/// Terminal rendition of one image.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Sprite {
    /// Paints the background of a `width` x `height` pixel footprint.
    Fill {
        width: i32,
        height: i32,
        style: Style,
    },
    /// Writes `text` at the image origin.
    Label { text: String, style: Style },
    Hidden,
}

impl Sprite {
    fn fill(width: i32, height: i32, background: Color) -> Self {
        Sprite::Fill {
            width,
            height,
            style: Style::default().bg(background),
        }
    }

    fn label(text: impl Into<String>, style: Style) -> Self {
        Sprite::Label {
            text: text.into(),
            style,
        }
    }
}

/// Ratatui-specific theme for the battler info overlay.
#[derive(Clone, Copy, Debug, Default)]
pub struct RatatuiTheme;

impl RatatuiTheme {
    pub fn sprite(&self, image: &ImageDraw, surface_width: i32) -> Sprite {
        match image.asset {
            Asset::InfoBackground => {
                Sprite::fill(surface_width, SURFACE_HEIGHT, Color::Rgb(40, 48, 64))
            }
            Asset::InfoData | Asset::ExtraSlot => Sprite::Hidden,
            Asset::LevelPlate => Sprite::label("Lv", Style::default().fg(Color::Gray)),
            Asset::Gender => match column(image, 22) {
                Some(0) => Sprite::label("♂", Style::default().fg(Color::LightBlue)),
                Some(1) => Sprite::label("♀", Style::default().fg(Color::LightRed)),
                _ => Sprite::Hidden,
            },
            Asset::OwnerPlate => {
                let background = match row(image, 20) {
                    Some(0) => Color::Rgb(48, 96, 160),
                    _ => Color::Rgb(160, 56, 48),
                };
                Sprite::fill(source_width(image, 128), 20, background)
            }
            Asset::HpBar => {
                let color = match row(image, 6) {
                    Some(0) => Color::Green,
                    Some(1) => Color::Yellow,
                    _ => Color::Red,
                };
                Sprite::fill(source_width(image, 96), 6, color)
            }
            Asset::Statuses => row(image, 16)
                .and_then(StatusCondition::from_icon_position)
                .map_or(Sprite::Hidden, |status| {
                    Sprite::label(
                        status.tag(),
                        Style::default()
                            .fg(Color::Black)
                            .bg(status_color(status))
                            .add_modifier(Modifier::BOLD),
                    )
                }),
            Asset::ShinyMark => Sprite::label("★", Style::default().fg(Color::LightYellow)),
            Asset::Cursor => {
                let background = match row(image, 26) {
                    Some(2) => Color::Rgb(216, 112, 48),
                    Some(1) => Color::Rgb(88, 96, 112),
                    _ => Color::Rgb(64, 72, 88),
                };
                Sprite::fill(source_width(image, 218), 26, background)
            }
            Asset::ShinyLeaf => Sprite::label("✿", Style::default().fg(Color::LightGreen)),
            Asset::SizeIcon => {
                let text = if column(image, 28) == Some(0) { "S" } else { "L" };
                Sprite::label(text, Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
            }
            Asset::MarkIcon => Sprite::label("◆", Style::default().fg(Color::LightMagenta)),
            Asset::StatArrows => {
                if column(image, 18) == Some(0) {
                    Sprite::label("▲", Style::default().fg(Color::LightRed))
                } else {
                    Sprite::label("▼", Style::default().fg(Color::LightBlue))
                }
            }
            Asset::Types => element_label(row(image, 28), ""),
            Asset::TeraTypes => element_label(row(image, 32), "T:"),
            Asset::EffectsPanel => Sprite::fill(218, 96, Color::Rgb(200, 200, 192)),
            Asset::SliderBase => Sprite::fill(18, 120, Color::Rgb(64, 72, 88)),
            Asset::Slider => {
                if column(image, 18) == Some(0) {
                    let arrow = if row(image, 19) == Some(0) { "▴" } else { "▾" };
                    Sprite::label(arrow, Style::default().fg(Color::White))
                } else {
                    Sprite::fill(18, source_height(image, 7), Color::Gray)
                }
            }
            Asset::BattlerIcon(index) => Sprite::label(
                format!("[{index}]"),
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            ),
        }
    }

    /// Text in its base color over its shadow color.
    pub fn text(&self, colors: ColorPair, outline: bool) -> Style {
        let style = Style::default().fg(rgb(colors.base)).bg(rgb(colors.shadow));
        if outline {
            style.add_modifier(Modifier::BOLD)
        } else {
            style
        }
    }

    pub fn indicator(&self, indicator: Indicator) -> (&'static str, Style) {
        let glyph = match indicator {
            Indicator::LeftArrow => "◀",
            Indicator::RightArrow => "▶",
        };
        (glyph, Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD))
    }
}

fn rgb(Rgb(r, g, b): Rgb) -> Color {
    Color::Rgb(r, g, b)
}

fn row(image: &ImageDraw, height: i32) -> Option<u8> {
    image.source.and_then(|source| u8::try_from(source.y / height).ok())
}

fn column(image: &ImageDraw, width: i32) -> Option<u8> {
    image.source.and_then(|source| u8::try_from(source.x / width).ok())
}

fn source_width(image: &ImageDraw, fallback: i32) -> i32 {
    image.source.map_or(fallback, |source| source.width)
}

fn source_height(image: &ImageDraw, fallback: i32) -> i32 {
    image.source.map_or(fallback, |source| source.height)
}

fn element_label(row: Option<u8>, prefix: &str) -> Sprite {
    let Some(element) = row.and_then(ElementType::from_icon_position) else {
        return Sprite::Hidden;
    };
    let name: String = element.to_string().to_uppercase().chars().take(8).collect();
    Sprite::label(
        format!("{prefix}{name}"),
        Style::default()
            .fg(Color::White)
            .bg(element_color(element))
            .add_modifier(Modifier::BOLD),
    )
}

fn element_color(element: ElementType) -> Color {
    match element {
        ElementType::Normal => Color::Rgb(168, 168, 120),
        ElementType::Fighting => Color::Rgb(192, 48, 40),
        ElementType::Flying => Color::Rgb(168, 144, 240),
        ElementType::Poison => Color::Rgb(160, 64, 160),
        ElementType::Ground => Color::Rgb(224, 192, 104),
        ElementType::Rock => Color::Rgb(184, 160, 56),
        ElementType::Bug => Color::Rgb(168, 184, 32),
        ElementType::Ghost => Color::Rgb(112, 88, 152),
        ElementType::Steel => Color::Rgb(184, 184, 208),
        ElementType::Unknown => Color::Rgb(104, 160, 144),
        ElementType::Fire => Color::Rgb(240, 128, 48),
        ElementType::Water => Color::Rgb(104, 144, 240),
        ElementType::Grass => Color::Rgb(120, 200, 80),
        ElementType::Electric => Color::Rgb(248, 208, 48),
        ElementType::Psychic => Color::Rgb(248, 88, 136),
        ElementType::Ice => Color::Rgb(152, 216, 216),
        ElementType::Dragon => Color::Rgb(112, 56, 248),
        ElementType::Dark => Color::Rgb(112, 88, 72),
        ElementType::Fairy => Color::Rgb(238, 153, 172),
        ElementType::Stellar => Color::Rgb(64, 176, 200),
    }
}

fn status_color(status: StatusCondition) -> Color {
    match status {
        StatusCondition::None => Color::Reset,
        StatusCondition::Sleep | StatusCondition::Drowsy => Color::Gray,
        StatusCondition::Poison => Color::Magenta,
        StatusCondition::Burn => Color::LightRed,
        StatusCondition::Paralysis => Color::Yellow,
        StatusCondition::Frozen | StatusCondition::Frostbite => Color::LightCyan,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use battle_core::BattlerIndex;

    fn label(sprite: Sprite) -> String {
        match sprite {
            Sprite::Label { text, .. } => text,
            other => panic!("expected a label, got {other:?}"),
        }
    }

    #[test]
    fn sheet_images_decode_from_their_source_rect() {
        let theme = RatatuiTheme;
        let fire_row = i32::from(ElementType::Fire.icon_position()) * 28;
        let fire = ImageDraw::new(Asset::Types, 0, 0).with_source(0, fire_row, 64, 28);
        assert_eq!(label(theme.sprite(&fire, 512)), "FIRE");

        let tera_row = i32::from(ElementType::Dragon.icon_position()) * 32;
        let tera = ImageDraw::new(Asset::TeraTypes, 0, 0).with_source(0, tera_row, 32, 32);
        assert_eq!(label(theme.sprite(&tera, 512)), "T:DRAGON");

        let burn = ImageDraw::new(Asset::Statuses, 0, 0).with_source(0, 2 * 16, 44, 16);
        assert_eq!(label(theme.sprite(&burn, 512)), "BRN");

        let female = ImageDraw::new(Asset::Gender, 0, 0).with_source(22, 0, 22, 22);
        assert_eq!(label(theme.sprite(&female, 512)), "♀");

        let icon = ImageDraw::new(Asset::BattlerIcon(BattlerIndex(3)), 0, 0);
        assert_eq!(label(theme.sprite(&icon, 512)), "[#3]");
    }

    #[test]
    fn unknown_type_is_shown_as_question_marks() {
        let row = i32::from(ElementType::Unknown.icon_position()) * 28;
        let unknown = ImageDraw::new(Asset::Types, 0, 0).with_source(0, row, 64, 28);
        assert_eq!(label(RatatuiTheme.sprite(&unknown, 512)), "???");
    }

    #[test]
    fn hp_bar_fill_follows_zone_and_width() {
        let bar = ImageDraw::new(Asset::HpBar, 86, 86).with_source(0, 6, 48, 6);
        assert_eq!(
            RatatuiTheme.sprite(&bar, 512),
            Sprite::Fill {
                width: 48,
                height: 6,
                style: Style::default().bg(Color::Yellow),
            }
        );
    }

    #[test]
    fn text_paints_shadow_behind_base_color() {
        let style = RatatuiTheme.text(ColorPair::DARK, true);
        assert_eq!(style.fg, Some(Color::Rgb(56, 56, 56)));
        assert_eq!(style.bg, Some(Color::Rgb(184, 184, 184)));
        assert!(style.add_modifier.contains(Modifier::BOLD));
    }
}
