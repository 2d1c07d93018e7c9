//! Fixed timestep scheduling
//!
//! Real elapsed time is accumulated and spent in whole ticks, so the
//! simulation runs at the same pace regardless of host speed.

use std::time::Duration;

use crate::consts::MAX_SUBSTEPS;

#[derive(Debug, Clone)]
pub struct FixedClock {
    step: Duration,
    accumulator: Duration,
}

impl FixedClock {
    pub fn new(tick_rate: u32) -> Self {
        Self {
            step: Duration::from_secs(1) / tick_rate.max(1),
            accumulator: Duration::ZERO,
        }
    }

    /// Length of one tick
    pub fn step(&self) -> Duration {
        self.step
    }

    /// Add elapsed real time and return how many ticks are now due.
    ///
    /// At most `MAX_SUBSTEPS` ticks are returned; any backlog beyond that is
    /// dropped rather than replayed.
    pub fn advance(&mut self, elapsed: Duration) -> u32 {
        self.accumulator += elapsed;

        let mut due = 0;
        while self.accumulator >= self.step && due < MAX_SUBSTEPS {
            self.accumulator -= self.step;
            due += 1;
        }
        if due == MAX_SUBSTEPS && self.accumulator >= self.step {
            log::warn!(
                "Simulation fell behind, dropping {:?} of backlog",
                self.accumulator
            );
            self.accumulator = Duration::ZERO;
        }
        due
    }

    /// Time left until the next tick is due
    pub fn until_next_tick(&self) -> Duration {
        self.step.saturating_sub(self.accumulator)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_matches_rate() {
        let clock = FixedClock::new(24);
        assert_eq!(clock.step(), Duration::from_secs(1) / 24);
    }

    #[test]
    fn test_partial_step_carries_over() {
        let mut clock = FixedClock::new(10);
        assert_eq!(clock.advance(Duration::from_millis(60)), 0);
        assert_eq!(clock.until_next_tick(), Duration::from_millis(40));
        assert_eq!(clock.advance(Duration::from_millis(60)), 1);
        assert_eq!(clock.until_next_tick(), Duration::from_millis(80));
    }

    #[test]
    fn test_backlog_is_capped() {
        let mut clock = FixedClock::new(10);
        assert_eq!(clock.advance(Duration::from_secs(5)), MAX_SUBSTEPS);
        // Backlog dropped, next tick is a full step away
        assert_eq!(clock.until_next_tick(), Duration::from_millis(100));
    }
}
