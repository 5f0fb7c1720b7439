//! Draw instructions and the renderer that presents them.
//!
//! Everything is laid out on a logical pixel surface; renderers decide how
//! pixels map onto their output.

use battle_core::BattlerIndex;

use crate::error::Result;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Region of a sprite sheet, in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SourceRect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl SourceRect {
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rgb(pub u8, pub u8, pub u8);

/// Text color with its drop shadow.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ColorPair {
    pub base: Rgb,
    pub shadow: Rgb,
}

impl ColorPair {
    /// Light text for dark plates.
    pub const LIGHT: Self = Self::new(Rgb(232, 232, 232), Rgb(72, 72, 72));
    /// Dark text for light plates.
    pub const DARK: Self = Self::new(Rgb(56, 56, 56), Rgb(184, 184, 184));

    pub const fn new(base: Rgb, shadow: Rgb) -> Self {
        Self { base, shadow }
    }

    pub const fn with_shadow(self, shadow: Rgb) -> Self {
        Self { shadow, ..self }
    }
}

/// Images the overlay draws.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Asset {
    InfoBackground,
    InfoData,
    LevelPlate,
    /// Sheet with one 22px column per gender.
    Gender,
    /// Owner plate; row 0 for the player, row 1 for other trainers.
    OwnerPlate,
    /// Sheet with one 6px row per HP zone.
    HpBar,
    /// Sheet with one 16px row per status condition.
    Statuses,
    ShinyMark,
    /// Row cursor; rows 0, 1 and 2 are the ability/item plate, the plain
    /// effect row and the highlighted effect row.
    Cursor,
    /// Frame around an extra icon (cosmetics, tera badge).
    ExtraSlot,
    ShinyLeaf,
    /// Size icon; column 0 is small, column 1 is large.
    SizeIcon,
    MarkIcon,
    /// Stage arrows; column 0 points up, column 1 down.
    StatArrows,
    /// Sheet with one 28px row per element type.
    Types,
    /// Sheet with one 32px row per element type.
    TeraTypes,
    EffectsPanel,
    SliderBase,
    /// Slider sheet: arrows in column 0, thumb pieces in column 1.
    Slider,
    BattlerIcon(BattlerIndex),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ImageDraw {
    pub asset: Asset,
    pub at: Point,
    pub source: Option<SourceRect>,
}

impl ImageDraw {
    pub const fn new(asset: Asset, x: i32, y: i32) -> Self {
        Self {
            asset,
            at: Point::new(x, y),
            source: None,
        }
    }

    pub const fn with_source(mut self, x: i32, y: i32, width: i32, height: i32) -> Self {
        self.source = Some(SourceRect::new(x, y, width, height));
        self
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum TextAlign {
    #[default]
    Left,
    Center,
    Right,
}

/// Word-wrapping box for long text.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Wrap {
    pub width: i32,
    pub line_height: i32,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TextDraw {
    pub text: String,
    pub at: Point,
    pub align: TextAlign,
    pub colors: ColorPair,
    pub outline: bool,
    pub wrap: Option<Wrap>,
}

impl TextDraw {
    pub fn new(
        text: impl Into<String>,
        x: i32,
        y: i32,
        align: TextAlign,
        colors: ColorPair,
    ) -> Self {
        Self {
            text: text.into(),
            at: Point::new(x, y),
            align,
            colors,
            outline: false,
            wrap: None,
        }
    }

    pub fn outlined(mut self) -> Self {
        self.outline = true;
        self
    }

    pub fn wrapped(mut self, width: i32, line_height: i32) -> Self {
        self.wrap = Some(Wrap { width, line_height });
        self
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DrawCommand {
    Image(ImageDraw),
    Text(TextDraw),
}

impl DrawCommand {
    pub fn as_image(&self) -> Option<&ImageDraw> {
        match self {
            DrawCommand::Image(image) => Some(image),
            DrawCommand::Text(_) => None,
        }
    }

    pub fn as_text(&self) -> Option<&TextDraw> {
        match self {
            DrawCommand::Text(text) => Some(text),
            DrawCommand::Image(_) => None,
        }
    }
}

impl From<ImageDraw> for DrawCommand {
    fn from(image: ImageDraw) -> Self {
        DrawCommand::Image(image)
    }
}

impl From<TextDraw> for DrawCommand {
    fn from(text: TextDraw) -> Self {
        DrawCommand::Text(text)
    }
}

/// Arrows flanking the overlay while it is open.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[strum(serialize_all = "snake_case")]
pub enum Indicator {
    LeftArrow,
    RightArrow,
}

/// Acknowledgment sounds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[strum(serialize_all = "snake_case")]
pub enum Cue {
    Cursor,
    Decision,
}

/// Output device of the overlay.
///
/// `clear` and `draw` build up the next frame; `flush` presents it.
pub trait OverlayRenderer {
    fn clear(&mut self);

    fn draw(&mut self, commands: &[DrawCommand]);

    fn set_indicator(&mut self, indicator: Indicator, visible: bool, at: Point);

    fn play(&mut self, cue: Cue);

    fn flush(&mut self) -> Result<()>;
}
