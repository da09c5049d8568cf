use crate::timer::{Millis, Timer};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub title: String,
    pub body: String,
}

/// State management for toasts
#[derive(Default)]
pub struct NotificationState {
    pub current: Option<Toast>,
    timer: Timer,
}

impl NotificationState {
    /// Show a toast; with `ms` it dismisses itself, otherwise it stays until cleared.
    pub fn set_notification(
        &mut self,
        title: impl Into<String>,
        body: impl Into<String>,
        ms: Option<Millis>,
        now: Millis,
    ) {
        self.current = Some(Toast {
            title: title.into(),
            body: body.into(),
        });
        match ms {
            Some(ms) => self.timer.start(now, ms),
            None => self.timer.cancel(),
        }
    }

    pub fn clear_notification(&mut self) {
        self.current = None;
        self.timer.cancel();
    }

    /// Returns true when a toast closed on this tick.
    pub fn tick(&mut self, now: Millis) -> bool {
        if self.timer.poll(now) {
            self.current = None;
            return true;
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toast_dismisses_itself() {
        let mut n = NotificationState::default();
        n.set_notification("Application Received!", "", Some(3000), 0);
        assert!(!n.tick(2999));
        assert!(n.current.is_some());
        assert!(n.tick(3000));
        assert!(n.current.is_none());
    }

    #[test]
    fn sticky_toast_waits_for_clear() {
        let mut n = NotificationState::default();
        n.set_notification("Error", "bad filter", None, 0);
        assert!(!n.tick(1_000_000));
        n.clear_notification();
        assert!(n.current.is_none());
    }

    #[test]
    fn replacing_a_toast_restarts_its_clock() {
        let mut n = NotificationState::default();
        n.set_notification("a", "", Some(100), 0);
        n.set_notification("b", "", Some(100), 80);
        assert!(!n.tick(120));
        assert_eq!(n.current.as_ref().unwrap().title, "b");
        assert!(n.tick(180));
    }
}
