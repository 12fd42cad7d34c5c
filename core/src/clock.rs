use std::time::Duration;

/// Gates simulation ticks to a target rate from elapsed wall-clock time.
///
/// At most one tick is released per call; leftover time below one interval
/// carries over and any larger backlog is dropped, so a stalled host does
/// not fast-forward the fight.
#[derive(Clone, Debug)]
pub struct FrameLimiter {
    interval: Duration,
    accumulated: Duration,
}

impl FrameLimiter {
    pub fn new(tick_rate: u32) -> Self {
        FrameLimiter {
            interval: Duration::from_secs(1) / tick_rate.max(1),
            accumulated: Duration::ZERO,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Add `elapsed` and report whether a tick is due.
    pub fn advance(&mut self, elapsed: Duration) -> bool {
        self.accumulated += elapsed;
        if self.accumulated < self.interval {
            return false;
        }
        let remainder = self.accumulated.as_nanos() % self.interval.as_nanos();
        self.accumulated = Duration::from_nanos(remainder as u64);
        true
    }

    /// Time left until the next tick is due.
    pub fn until_next(&self) -> Duration {
        self.interval.saturating_sub(self.accumulated)
    }
}

/// One-second countdown driver for the round timer, fed in simulation ticks.
#[derive(Clone, Debug)]
pub struct SecondCounter {
    ticks_per_second: u32,
    ticks: u32,
}

impl SecondCounter {
    pub fn new(tick_rate: u32) -> Self {
        SecondCounter {
            ticks_per_second: tick_rate.max(1),
            ticks: 0,
        }
    }

    /// Count one tick; true when a whole second has passed.
    pub fn tick(&mut self) -> bool {
        self.ticks += 1;
        if self.ticks >= self.ticks_per_second {
            self.ticks = 0;
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
    fn interval_matches_rate() {
        assert_eq!(FrameLimiter::new(60).interval(), Duration::from_nanos(16_666_666));
        assert_eq!(FrameLimiter::new(120).interval(), Duration::from_nanos(8_333_333));
    }

    #[test]
    fn releases_tick_once_interval_elapsed() {
        let mut limiter = FrameLimiter::new(30);
        assert!(!limiter.advance(Duration::from_millis(20)));
        assert!(limiter.advance(Duration::from_millis(20)));
        assert!(!limiter.advance(Duration::from_millis(1)));
    }

    #[test]
    fn carries_remainder_drops_backlog() {
        let mut limiter = FrameLimiter::new(60);
        assert!(limiter.advance(Duration::from_millis(100)));
        assert!(limiter.until_next() > Duration::ZERO);
        assert!(limiter.until_next() <= limiter.interval());
        // The 100ms stall released only one tick.
        assert!(!limiter.advance(Duration::from_millis(1)));
    }

    #[test]
    fn second_counter_fires_every_rate_ticks() {
        let mut counter = SecondCounter::new(30);
        let fired: Vec<bool> = (0..60).map(|_| counter.tick()).collect();
        assert_eq!(fired.iter().filter(|f| **f).count(), 2);
        assert!(fired[29]);
        assert!(fired[59]);
    }
}
