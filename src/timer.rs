//! Repeating timers driven by elapsed time instead of the OS.
//!
//! A run owns its timers, so dropping the run (or clearing its clock on game
//! over) cancels them. Nothing can fire for a run that has ended.

use std::time::Duration;

const MIN_INTERVAL: Duration = Duration::from_millis(1);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepeatingTimer {
    interval: Duration,
    elapsed: Duration,
}

impl RepeatingTimer {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval: interval.max(MIN_INTERVAL),
            elapsed: Duration::ZERO,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Time left until the next firing.
    pub fn remaining(&self) -> Duration {
        self.interval.saturating_sub(self.elapsed)
    }

    pub fn wait(&mut self, dt: Duration) {
        self.elapsed += dt;
    }

    /// Consumes one firing if the timer is due.
    pub fn take_due(&mut self) -> bool {
        if self.elapsed >= self.interval {
            self.elapsed -= self.interval;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fires_after_full_interval() {
        let mut timer = RepeatingTimer::new(Duration::from_millis(30));
        timer.wait(Duration::from_millis(29));
        assert!(!timer.take_due());
        timer.wait(Duration::from_millis(1));
        assert!(timer.take_due());
        assert!(!timer.take_due());
    }

    #[test]
    fn test_carries_over_excess_time() {
        let mut timer = RepeatingTimer::new(Duration::from_millis(30));
        timer.wait(Duration::from_millis(75));
        assert!(timer.take_due());
        assert!(timer.take_due());
        assert!(!timer.take_due());
        assert_eq!(timer.remaining(), Duration::from_millis(15));
    }

    #[test]
    fn test_zero_interval_is_clamped() {
        let timer = RepeatingTimer::new(Duration::ZERO);
        assert_eq!(timer.interval(), MIN_INTERVAL);
        assert!(timer.remaining() > Duration::ZERO);
    }
}
