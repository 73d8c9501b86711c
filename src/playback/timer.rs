use std::time::{Duration, Instant};

/// Visualizer refresh cadence while a track plays.
pub const REFRESH_INTERVAL: Duration = Duration::from_millis(100);

/// Fixed-interval timer polled from the event loop.
#[derive(Debug, Clone)]
pub struct RefreshTimer {
    interval: Duration,
    next_tick: Option<Instant>,
}

impl Default for RefreshTimer {
    fn default() -> Self {
        Self::new(REFRESH_INTERVAL)
    }
}

impl RefreshTimer {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            next_tick: None,
        }
    }

    /// (Re)start the timer; the first tick is one interval after `now`.
    pub fn start(&mut self, now: Instant) {
        self.next_tick = Some(now + self.interval);
    }

    pub fn stop(&mut self) {
        self.next_tick = None;
    }

    pub fn is_running(&self) -> bool {
        self.next_tick.is_some()
    }

    /// Returns true when a tick is due at `now` and schedules the next one.
    ///
    /// Missed ticks are collapsed into one.
    pub fn fire(&mut self, now: Instant) -> bool {
        match self.next_tick {
            Some(due) if now >= due => {
                let mut next = due + self.interval;
                if next <= now {
                    next = now + self.interval;
                }
                self.next_tick = Some(next);
                true
            }
            _ => false,
        }
    }
}
