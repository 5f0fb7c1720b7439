//! Terminal presentation: setup/teardown, theme and the overlay renderer.
pub mod renderer;
pub mod terminal;
pub mod theme;

pub use renderer::{OverlayCanvas, RenderError, TerminalRenderer};
pub use theme::{RatatuiTheme, Sprite};
