#![forbid(unsafe_code)]

//! Caller-polled timer state machines.
//!
//! The panel is single-threaded and event-driven: nothing here spawns a
//! thread or registers a real timer. Both types hold a deadline and answer
//! "has it passed?" when polled with the caller's clock instant, so tests can
//! drive them with synthetic time.
//!
//! # Design
//!
//! [`Debounce`] implements arm/reset semantics: every [`notify`] pushes the
//! deadline out to `now + window`, implicitly cancelling the pending fire.
//! Only one deadline is ever live, so a continuous notification stream
//! postpones the fire indefinitely — newest notification wins.
//!
//! [`OneShot`] fires exactly once, a fixed delay after [`start`], regardless
//! of any other activity.
//!
//! [`notify`]: Debounce::notify
//! [`start`]: OneShot::start

use web_time::{Duration, Instant};

/// A re-armable quiet-period timer.
#[derive(Debug, Clone)]
pub struct Debounce {
    window: Duration,
    deadline: Option<Instant>,
}

impl Debounce {
    /// Create a debounce with the given quiet window.
    #[must_use]
    pub const fn new(window: Duration) -> Self {
        Self {
            window,
            deadline: None,
        }
    }

    /// The configured quiet window.
    #[must_use]
    pub const fn window(&self) -> Duration {
        self.window
    }

    /// Record a notification at `now`, re-arming the deadline.
    ///
    /// A pending fire is cancelled; the new deadline is `now + window`.
    pub fn notify(&mut self, now: Instant) {
        self.deadline = Some(now + self.window);
    }

    /// True if a fire is pending.
    #[must_use]
    pub const fn is_armed(&self) -> bool {
        self.deadline.is_some()
    }

    /// Poll at `now`. Returns `true` at most once per arming, when the
    /// quiet window has elapsed without a further notification.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }

    /// Drop any pending fire.
    pub fn cancel(&mut self) {
        self.deadline = None;
    }
}

/// A timer that fires exactly once, a fixed delay after being started.
#[derive(Debug, Clone)]
pub struct OneShot {
    delay: Duration,
    fire_at: Option<Instant>,
    fired: bool,
}

impl OneShot {
    /// Create an unstarted one-shot with the given delay.
    #[must_use]
    pub const fn new(delay: Duration) -> Self {
        Self {
            delay,
            fire_at: None,
            fired: false,
        }
    }

    /// Start the countdown at `now`. Starting an already-started or
    /// already-fired one-shot is a no-op.
    pub fn start(&mut self, now: Instant) {
        if self.fire_at.is_none() && !self.fired {
            self.fire_at = Some(now + self.delay);
        }
    }

    /// True if started and not yet fired.
    #[must_use]
    pub const fn is_pending(&self) -> bool {
        self.fire_at.is_some()
    }

    /// Poll at `now`. Returns `true` exactly once, when the delay has
    /// elapsed since `start`.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.fire_at {
            Some(fire_at) if now >= fire_at => {
                self.fire_at = None;
                self.fired = true;
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn debounce_fires_after_quiet_window() {
        let t0 = Instant::now();
        let mut d = Debounce::new(ms(1500));
        d.notify(t0);
        assert!(!d.poll(t0 + ms(1499)));
        assert!(d.poll(t0 + ms(1500)));
        // One fire per arming.
        assert!(!d.poll(t0 + ms(3000)));
    }

    #[test]
    fn debounce_rearm_postpones_fire() {
        let t0 = Instant::now();
        let mut d = Debounce::new(ms(1500));
        d.notify(t0);
        d.notify(t0 + ms(1000));
        assert!(!d.poll(t0 + ms(1500)));
        assert!(!d.poll(t0 + ms(2499)));
        assert!(d.poll(t0 + ms(2500)));
    }

    #[test]
    fn debounce_unarmed_never_fires() {
        let t0 = Instant::now();
        let mut d = Debounce::new(ms(10));
        assert!(!d.poll(t0 + ms(1000)));
        assert!(!d.is_armed());
    }

    #[test]
    fn debounce_cancel_drops_pending_fire() {
        let t0 = Instant::now();
        let mut d = Debounce::new(ms(10));
        d.notify(t0);
        d.cancel();
        assert!(!d.poll(t0 + ms(100)));
    }

    #[test]
    fn one_shot_fires_exactly_once() {
        let t0 = Instant::now();
        let mut b = OneShot::new(ms(2000));
        b.start(t0);
        assert!(!b.poll(t0 + ms(1999)));
        assert!(b.poll(t0 + ms(2000)));
        assert!(!b.poll(t0 + ms(9999)));
        assert!(!b.is_pending());
    }

    #[test]
    fn one_shot_restart_after_fire_is_noop() {
        let t0 = Instant::now();
        let mut b = OneShot::new(ms(5));
        b.start(t0);
        assert!(b.poll(t0 + ms(5)));
        b.start(t0 + ms(10));
        assert!(!b.poll(t0 + ms(100)));
    }

    #[test]
    fn one_shot_double_start_keeps_first_deadline() {
        let t0 = Instant::now();
        let mut b = OneShot::new(ms(100));
        b.start(t0);
        b.start(t0 + ms(90));
        assert!(b.poll(t0 + ms(100)));
    }
}
