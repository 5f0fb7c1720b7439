//! Pure services backing the overlay: effect rows and their scroll window.
pub mod effects;
pub mod windowing;

pub use effects::{CatalogEffectProducer, EffectEntry, EffectList, EffectProducer};
pub use windowing::{
    ScrollTrack, ScrollbarView, Thumb, WindowView, compute_window, compute_window_with,
};
