#![forbid(unsafe_code)]

//! Autoplay timer.
//!
//! A plain duration accumulator. The gallery ticks it alongside the engine
//! and routes each firing through the same guarded navigation path as a
//! click, so autoplay can never preempt an in-flight transition.

use std::time::Duration;

/// Interval timer driving automatic advancement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Autoplay {
    delay: Duration,
    elapsed: Duration,
    running: bool,
}

impl Autoplay {
    /// A stopped timer with the given interval.
    #[must_use]
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            elapsed: Duration::ZERO,
            running: false,
        }
    }

    /// Whether the timer is counting.
    #[must_use]
    pub fn running(&self) -> bool {
        self.running
    }

    /// Start counting from zero. Restarting an already-running timer
    /// resets the interval.
    pub fn start(&mut self) {
        self.running = true;
        self.elapsed = Duration::ZERO;
    }

    /// Stop counting and discard accumulated time.
    pub fn stop(&mut self) {
        self.running = false;
        self.elapsed = Duration::ZERO;
    }

    /// Advance by `dt`. Returns `true` when the interval elapses; the
    /// overshoot carries into the next interval.
    pub fn tick(&mut self, dt: Duration) -> bool {
        if !self.running {
            return false;
        }
        self.elapsed = self.elapsed.saturating_add(dt);
        if self.elapsed >= self.delay {
            self.elapsed -= self.delay;
            return true;
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DELAY: Duration = Duration::from_millis(4000);

    #[test]
    fn stopped_timer_never_fires() {
        let mut auto = Autoplay::new(DELAY);
        assert!(!auto.tick(Duration::from_secs(60)));
    }

    #[test]
    fn fires_once_per_interval() {
        let mut auto = Autoplay::new(DELAY);
        auto.start();
        assert!(!auto.tick(Duration::from_millis(3999)));
        assert!(auto.tick(Duration::from_millis(1)));
        assert!(!auto.tick(Duration::from_millis(3999)));
    }

    #[test]
    fn overshoot_carries_forward() {
        let mut auto = Autoplay::new(DELAY);
        auto.start();
        assert!(auto.tick(Duration::from_millis(4100)));
        // 100 ms already accumulated toward the next firing.
        assert!(auto.tick(Duration::from_millis(3900)));
    }

    #[test]
    fn restart_resets_the_interval() {
        let mut auto = Autoplay::new(DELAY);
        auto.start();
        let _ = auto.tick(Duration::from_millis(3000));
        auto.start();
        assert!(!auto.tick(Duration::from_millis(3000)));
        assert!(auto.tick(Duration::from_millis(1000)));
    }

    #[test]
    fn stop_discards_accumulated_time() {
        let mut auto = Autoplay::new(DELAY);
        auto.start();
        let _ = auto.tick(Duration::from_millis(3999));
        auto.stop();
        auto.start();
        assert!(!auto.tick(Duration::from_millis(3999)));
    }
}
