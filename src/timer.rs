// src/timer.rs
// Deadline timers driven by the app clock. A timer belongs to whoever armed it
// and fires at most once per arming; re-arming or cancelling drops the old
// deadline, so a stale callback can never run.

/// Milliseconds since the app started, advanced by `App::on_tick`.
pub type Millis = u64;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Timer {
    deadline: Option<Millis>,
}

impl Timer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Arm for `now + delay`, replacing any pending deadline.
    pub fn start(&mut self, now: Millis, delay: Millis) {
        self.deadline = Some(now.saturating_add(delay));
    }

    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    /// True exactly once, on the first poll at or after the deadline.
    pub fn poll(&mut self, now: Millis) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fires_once_at_deadline() {
        let mut t = Timer::new();
        t.start(100, 300);
        assert!(!t.poll(399));
        assert!(t.poll(400));
        assert!(!t.poll(500));
    }

    #[test]
    fn restart_replaces_earlier_deadline() {
        let mut t = Timer::new();
        t.start(0, 300);
        t.start(200, 300);
        assert!(!t.poll(300));
        assert!(!t.poll(499));
        assert!(t.poll(500));
    }

    #[test]
    fn cancelled_timer_never_fires() {
        let mut t = Timer::new();
        t.start(0, 10);
        t.cancel();
        assert!(!t.poll(1_000));
        t.cancel();
        t.start(1_000, 10);
        assert!(t.poll(1_010));
    }
}
