//! View models derived from the battle snapshot.
//!
//! Each view captures what one part of the overlay shows and turns it into
//! positioned [`DrawCommand`](crate::render::DrawCommand)s.
pub mod battler_info;
pub mod effects_panel;
pub mod layout;

pub use battler_info::{BattlerInfoView, Cosmetic, HpBar, OwnerDetails, StatRow};
pub use effects_panel::{EffectRowView, EffectsPanelView};
