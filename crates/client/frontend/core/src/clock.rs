//! Host frame pacing.
use async_trait::async_trait;

/// Yields control back to the host until its next frame.
///
/// The overlay awaits this once per tick; nothing else in the overlay
/// suspends.
#[async_trait]
pub trait FrameClock: Send {
    async fn next_frame(&mut self);
}
