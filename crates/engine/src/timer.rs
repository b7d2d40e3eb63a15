//! Fixed-interval gravity timer fed with measured frame times.

use std::time::Duration;

/// Accumulates elapsed monotonic time and fires once per gravity interval.
///
/// Frames never line up exactly with the interval, so the overshoot of a
/// firing frame is carried into the next interval. At most one step fires per
/// [`GravityTimer::advance`]; a backlog of a whole interval or more is dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GravityTimer {
    interval: Duration,
    accumulated: Duration,
}

impl GravityTimer {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            accumulated: Duration::ZERO,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Time accumulated towards the next step
    pub fn accumulated(&self) -> Duration {
        self.accumulated
    }

    /// Add one frame's elapsed time; returns true when a gravity step is due.
    pub fn advance(&mut self, elapsed: Duration) -> bool {
        self.accumulated = self.accumulated.saturating_add(elapsed);
        if self.accumulated < self.interval {
            return false;
        }

        self.accumulated -= self.interval;
        if self.accumulated >= self.interval {
            self.accumulated = Duration::ZERO;
        }
        true
    }
}
