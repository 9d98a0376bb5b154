//! Time sources for the control loop.
//!
//! Everything that timestamps robot behavior goes through a [`Clock`] so that the control loop can
//! run against wall-clock time on the robot and against a hand-advanced clock in tests.

use core::{cell::Cell, time::Duration};
use std::time::Instant;

/// The period of one control cycle.
pub const CONTROL_PERIOD: Duration = Duration::from_millis(20);

/// A monotonic source of "time since the program started".
pub trait Clock {
    /// Returns the duration that has elapsed since this clock was started.
    fn uptime(&self) -> Duration;
}

/// A [`Clock`] backed by the operating system's monotonic timer.
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    start: Instant,
}

impl SystemClock {
    /// Starts a new clock at zero.
    #[must_use]
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn uptime(&self) -> Duration {
        self.start.elapsed()
    }
}

/// A [`Clock`] that only moves when told to.
///
/// Used by the simulator and by tests to step the control loop one cycle at a time.
#[derive(Debug, Default)]
pub struct ManualClock {
    now: Cell<Duration>,
}

impl ManualClock {
    /// Creates a clock stopped at zero.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            now: Cell::new(Duration::ZERO),
        }
    }

    /// Moves the clock forward by `by`.
    pub fn advance(&self, by: Duration) {
        self.now.set(self.now.get() + by);
    }
}

impl Clock for ManualClock {
    fn uptime(&self) -> Duration {
        self.now.get()
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn uptime(&self) -> Duration {
        (**self).uptime()
    }
}

impl<C: Clock + ?Sized> Clock for std::rc::Rc<C> {
    fn uptime(&self) -> Duration {
        (**self).uptime()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn manual_clock_only_moves_when_advanced() {
        let clock = ManualClock::new();
        assert_eq!(clock.uptime(), Duration::ZERO);

        clock.advance(CONTROL_PERIOD);
        clock.advance(CONTROL_PERIOD);
        assert_eq!(clock.uptime(), Duration::from_millis(40));
    }

    #[test]
    fn system_clock_is_monotonic() {
        let clock = SystemClock::new();
        let first = clock.uptime();
        let second = clock.uptime();
        assert!(second >= first);
    }
}
