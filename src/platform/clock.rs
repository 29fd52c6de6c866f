//! Fixed-rate tick pacing
//!
//! Schedules one simulation tick per period. Falling behind does not cause a
//! burst of catch-up ticks; the schedule restarts from the late tick instead.

use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
pub struct TickClock {
    period: Duration,
    next: Instant,
}

impl TickClock {
    /// Clock ticking `rate` times per second, first tick due at `start`
    pub fn new(rate: u32, start: Instant) -> Self {
        Self {
            period: Duration::from_secs(1) / rate.max(1),
            next: start,
        }
    }

    /// When the next tick is due
    pub fn deadline(&self) -> Instant {
        self.next
    }

    pub fn is_due(&self, now: Instant) -> bool {
        now >= self.next
    }

    /// Mark the current tick as run at `now` and schedule the next one
    pub fn advance(&mut self, now: Instant) {
        self.next += self.period;
        if self.next <= now {
            self.next = now + self.period;
        }
    }
}
