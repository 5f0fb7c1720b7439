//! Cross-frontend core of the battler info overlay.
//!
//! Houses the navigation state machine, effect-row production and windowing,
//! the view models that turn a battle snapshot into draw commands, and the
//! collaborator traits (input, renderer, frame clock) a concrete frontend
//! implements.
pub mod accessor;
pub mod clock;
pub mod config;
pub mod error;
pub mod frontend;
pub mod input;
pub mod navigation;
pub mod overlay;
pub mod render;
pub mod services;
pub mod view_model;

pub use accessor::BattleAccessor;
pub use clock::FrameClock;
pub use config::FrontendConfig;
pub use error::{OverlayError, Result};
pub use frontend::{Frontend, OverlaySession};
pub use input::{Button, ButtonState, Buttons, InputSource};
pub use navigation::{InfoAction, NavigationController, NavigationState, Refresh, Step};
pub use overlay::BattlerInfoOverlay;
pub use render::{
    Asset, ColorPair, Cue, DrawCommand, ImageDraw, Indicator, OverlayRenderer, Point, Rgb,
    SourceRect, TextAlign, TextDraw, Wrap,
};
pub use services::{
    CatalogEffectProducer, EffectEntry, EffectList, EffectProducer, WindowView, compute_window,
};
