use std::time::{Duration, Instant};

/**
 * Monotonic one-shot timer.
 *
 * The timer never fires on its own. Callers pass the current instant and ask whether the
 * configured duration has elapsed since the last `start`.
 */
#[derive(Debug, Clone)]
pub struct Timer {
    duration: Duration,
    started: Option<Instant>,
}

impl Timer {
    pub fn new(duration: Duration) -> Timer {
        Timer {
            duration,
            started: None,
        }
    }

    /// Arms the timer, restarting it if already running.
    pub fn start(&mut self, now: Instant) {
        self.started = Some(now);
    }

    pub fn stop(&mut self) {
        self.started = None;
    }

    pub fn is_running(&self) -> bool {
        self.started.is_some()
    }

    pub fn is_expired(&self, now: Instant) -> bool {
        match self.started {
            Some(started) => now.saturating_duration_since(started) >= self.duration,
            None => false,
        }
    }
}
