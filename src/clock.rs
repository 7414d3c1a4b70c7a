use std::time::Duration;

use crate::config::MAX_CATCH_UP_TICKS;

/// Fixed-rate movement timer driven by elapsed frame time.
///
/// Frames call [`TickClock::advance`] with the time since the previous frame;
/// the clock reports how many whole movement periods have passed.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct TickClock {
    period: Duration,
    accumulated: Duration,
}

impl TickClock {
    #[must_use]
    pub fn new(period: Duration) -> Self {
        debug_assert!(!period.is_zero());

        Self {
            period,
            accumulated: Duration::ZERO,
        }
    }

    /// Clock firing `ticks_per_second` times per second.
    #[must_use]
    pub fn per_second(ticks_per_second: u32) -> Self {
        Self::new(Duration::from_secs(1) / ticks_per_second.max(1))
    }

    #[must_use]
    pub fn period(&self) -> Duration {
        self.period
    }

    /// Adds `elapsed` and returns the number of ticks now due.
    ///
    /// At most `MAX_CATCH_UP_TICKS` are returned; time beyond that is dropped.
    pub fn advance(&mut self, elapsed: Duration) -> u32 {
        self.accumulated += elapsed;

        let mut due = 0;
        while self.accumulated >= self.period {
            self.accumulated -= self.period;
            due += 1;

            if due == MAX_CATCH_UP_TICKS {
                self.accumulated = self.accumulated.min(self.period - Duration::from_nanos(1));
                break;
            }
        }

        due
    }

    /// Like [`TickClock::advance`], but only while play is running.
    ///
    /// A stopped clock holds no partial progress, so the first frame after a
    /// resume or restart never fires a tick early.
    pub fn advance_while(&mut self, running: bool, elapsed: Duration) -> u32 {
        if !running {
            self.reset();
            return 0;
        }

        self.advance(elapsed)
    }

    /// Forgets partial progress towards the next tick.
    pub fn reset(&mut self) {
        self.accumulated = Duration::ZERO;
    }
}
