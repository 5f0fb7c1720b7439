//! Terminal UI frontend for the battler info overlay.
//!
//! This crate implements the `client_frontend_core::Frontend` trait on top of
//! ratatui and crossterm.
//!
//! # Architecture
//!
//! `CliFrontend` only supplies collaborators:
//! - `KeyboardInput` samples crossterm key events once per frame
//! - `TerminalRenderer` paints draw commands onto a cell grid
//! - `IntervalClock` paces frames with a tokio interval
//!
//! Navigation and layout stay in `client-frontend-core`.

mod app;
mod clock;
mod config;
mod input;
pub mod logging;
pub mod presentation;

pub use app::CliFrontend;
pub use clock::IntervalClock;
pub use config::{CellSize, CliConfig};
pub use input::{KeyboardInput, handle_key};
pub use logging::setup_logging;
pub use presentation::{RenderError, TerminalRenderer};

// Re-export for convenience (used in main.rs)
pub use client_frontend_core::FrontendConfig;
