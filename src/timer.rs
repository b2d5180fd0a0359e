use std::time::{Duration, Instant};

/// Repeating timer for game ticks. The interval is passed in on every poll,
/// so a new difficulty applies from the tick after the one already scheduled.
#[derive(Debug, Clone, Copy)]
pub struct Ticker {
    next: Instant,
}

impl Ticker {
    /// first tick is due immediately
    pub fn start(now: Instant) -> Self {
        Self { next: now }
    }

    pub fn deadline(&self) -> Instant {
        self.next
    }

    /// True when a tick is due; re-arms `interval` after `now`.
    pub fn poll(&mut self, now: Instant, interval: Duration) -> bool {
        if now < self.next {
            return false;
        }
        self.next = now + interval;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fires_once_per_interval() {
        let t0 = Instant::now();
        let step = Duration::from_millis(100);
        let mut ticker = Ticker::start(t0);

        assert!(ticker.poll(t0, step));
        assert!(!ticker.poll(t0 + Duration::from_millis(99), step));
        assert!(ticker.poll(t0 + step, step));
        assert_eq!(ticker.deadline(), t0 + step * 2);
    }

    #[test]
    fn new_interval_waits_for_scheduled_tick() {
        let t0 = Instant::now();
        let mut ticker = Ticker::start(t0);
        assert!(ticker.poll(t0, Duration::from_millis(150)));

        // switching to 50ms does not pull the pending tick forward
        assert!(!ticker.poll(t0 + Duration::from_millis(60), Duration::from_millis(50)));
        assert!(ticker.poll(t0 + Duration::from_millis(150), Duration::from_millis(50)));
        assert_eq!(ticker.deadline(), t0 + Duration::from_millis(200));
    }
}
