//! Errors surfaced by overlay collaborators.
//!
//! Navigation itself never fails; these only describe input or output
//! devices going away underneath the overlay.
use thiserror::Error;

pub type Result<T> = std::result::Result<T, OverlayError>;

#[derive(Debug, Error)]
pub enum OverlayError {
    #[error("failed to poll input")]
    Input(#[source] std::io::Error),

    #[error("failed to present overlay frame")]
    Render(#[source] std::io::Error),

    #[error("combatant {0} is not in battle")]
    UnknownCombatant(battle_core::BattlerIndex),
}
