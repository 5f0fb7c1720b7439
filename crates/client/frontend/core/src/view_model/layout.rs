//! Fixed positions on the logical overlay surface.
use crate::render::{Point, Rgb};

pub const XPOS: i32 = 28;
pub const YPOS: i32 = 24;
pub const ICON_X: i32 = XPOS + 28;
pub const ICON_Y: i32 = YPOS + 62;
/// Left edge of the effect rows and the ability/item plates.
pub const PANEL_X: i32 = XPOS + 240;
pub const SLIDER_X: i32 = PANEL_X + 222;
pub const ROW_HEIGHT: i32 = 24;

/// Shadow of stat labels a nature raises.
pub const NATURE_RAISED: Rgb = Rgb(136, 96, 72);
/// Shadow of stat labels a nature lowers.
pub const NATURE_LOWERED: Rgb = Rgb(64, 120, 152);

pub const INDICATOR_Y: i32 = 71;

pub const fn left_indicator() -> Point {
    Point::new(-2, INDICATOR_Y)
}

pub const fn right_indicator(surface_width: i32) -> Point {
    Point::new(surface_width - 38, INDICATOR_Y)
}
