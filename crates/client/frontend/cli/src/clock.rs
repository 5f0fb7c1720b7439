//! Fixed-rate frame clock.
use std::time::Duration;

use async_trait::async_trait;
use client_frontend_core::FrameClock;
use tokio::time::{self, Interval, MissedTickBehavior};

/// Ticks at a fixed interval; frames that fall behind are dropped rather
/// than replayed in a burst.
pub struct IntervalClock {
    interval: Interval,
}

impl IntervalClock {
    pub fn new(period: Duration) -> Self {
        let mut interval = time::interval(period.max(Duration::from_millis(1)));
        interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
        Self { interval }
    }

    pub fn from_millis(millis: u64) -> Self {
        Self::new(Duration::from_millis(millis))
    }
}

#[async_trait]
impl FrameClock for IntervalClock {
    async fn next_frame(&mut self) {
        self.interval.tick().await;
    }
}
