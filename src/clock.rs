//! Frame clock: turns wall-clock instants into whole elapsed milliseconds.
//!
//! The engine counts gravity in integer milliseconds. Truncating each frame's
//! duration would lose up to a millisecond per frame, so the sub-millisecond
//! remainder is carried into the next frame.

use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
pub struct FrameClock {
    last: Instant,
    carry: Duration,
}

impl FrameClock {
    pub fn new(now: Instant) -> Self {
        Self {
            last: now,
            carry: Duration::ZERO,
        }
    }

    /// Whole milliseconds since the previous call (or construction).
    ///
    /// An `now` earlier than the previous instant counts as zero.
    pub fn advance(&mut self, now: Instant) -> u32 {
        let elapsed = now.saturating_duration_since(self.last) + self.carry;
        self.last = now.max(self.last);

        let ms = elapsed.as_millis().min(u32::MAX as u128) as u32;
        self.carry = elapsed.saturating_sub(Duration::from_millis(ms as u64));
        ms
    }

    /// Time left until `frame` has passed since the previous call
    pub fn until_next(&self, now: Instant, frame: Duration) -> Duration {
        frame.saturating_sub(now.saturating_duration_since(self.last))
    }
}
