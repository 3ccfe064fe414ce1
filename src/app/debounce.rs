//! Debounce scheduler for query input.
//!
//! Holds a single pending value with its due time and keeps at most one host
//! timer armed. Zellij timers cannot be cancelled, so a new update never
//! schedules a second timer: it moves the due time forward, and when the armed
//! timer fires early the scheduler re-arms for the remainder. The pending slot
//! is the source of truth, which guarantees one emission per burst.

use std::time::{Duration, Instant};

/// Host timers may fire slightly before the requested delay has elapsed.
const TIMER_SLACK: Duration = Duration::from_millis(5);

/// What the caller should do after feeding a timer expiry to the scheduler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TimerOutcome {
    /// Nothing is pending.
    Idle,
    /// A value is pending and the armed timer will fire later.
    Waiting,
    /// The armed timer fired before the due time; schedule another for this long.
    Rearm(Duration),
    /// The burst settled; this is the committed value.
    Commit(String),
}

#[derive(Debug, Clone)]
struct Pending {
    value: String,
    due: Instant,
}

/// Trailing-edge debouncer with a single pending slot.
#[derive(Debug, Clone)]
pub struct Debouncer {
    delay: Duration,
    pending: Option<Pending>,
    armed_until: Option<Instant>,
}

impl Debouncer {
    #[must_use]
    pub const fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
            armed_until: None,
        }
    }

    #[must_use]
    pub const fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Records a new value, replacing (and thereby cancelling) any pending one.
    ///
    /// Returns the delay for a new host timer, or `None` when an armed timer
    /// already exists and will be re-armed on expiry.
    pub fn update(&mut self, value: String, now: Instant) -> Option<Duration> {
        let due = now + self.delay;
        if self.pending.is_some() {
            tracing::trace!(value = %value, "debounce pending value replaced");
        }
        self.pending = Some(Pending { value, due });

        if self.timer_armed(now) {
            None
        } else {
            self.armed_until = Some(due);
            Some(self.delay)
        }
    }

    /// Drops the pending value without emitting it.
    pub fn cancel(&mut self) {
        if self.pending.take().is_some() {
            tracing::debug!("debounce pending value cancelled");
        }
    }

    /// Feeds a host timer expiry observed at `now`.
    ///
    /// The host does not say which timer fired, so expiries that belong to
    /// other consumers are tolerated: they observe a timer still armed ahead
    /// and return [`TimerOutcome::Waiting`].
    pub fn on_timer(&mut self, now: Instant) -> TimerOutcome {
        let armed = self.timer_armed(now);
        if !armed {
            self.armed_until = None;
        }

        let Some(pending) = &self.pending else {
            return TimerOutcome::Idle;
        };

        if now + TIMER_SLACK >= pending.due {
            let value = self.pending.take().map(|p| p.value).unwrap_or_default();
            return TimerOutcome::Commit(value);
        }

        if armed {
            TimerOutcome::Waiting
        } else {
            let remaining = pending.due.saturating_duration_since(now);
            self.armed_until = Some(pending.due);
            TimerOutcome::Rearm(remaining)
        }
    }

    fn timer_armed(&self, now: Instant) -> bool {
        self.armed_until.is_some_and(|until| until > now + TIMER_SLACK)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DELAY: Duration = Duration::from_millis(300);

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn burst_emits_once_with_last_value() {
        let t0 = Instant::now();
        let mut debouncer = Debouncer::new(DELAY);

        assert_eq!(debouncer.update("a".into(), t0), Some(DELAY));
        assert_eq!(debouncer.update("al".into(), t0 + ms(100)), None);
        assert_eq!(debouncer.update("ali".into(), t0 + ms(200)), None);

        // First timer fires at t0+300 but the burst ended at t0+200.
        assert_eq!(debouncer.on_timer(t0 + ms(300)), TimerOutcome::Rearm(ms(200)));
        assert_eq!(debouncer.on_timer(t0 + ms(500)), TimerOutcome::Commit("ali".into()));
        assert_eq!(debouncer.on_timer(t0 + ms(900)), TimerOutcome::Idle);
    }

    #[test]
    fn empty_values_are_still_emitted() {
        let t0 = Instant::now();
        let mut debouncer = Debouncer::new(DELAY);

        debouncer.update("x".into(), t0);
        debouncer.update(String::new(), t0 + ms(50));

        assert_eq!(debouncer.on_timer(t0 + ms(300)), TimerOutcome::Rearm(ms(50)));
        assert_eq!(debouncer.on_timer(t0 + ms(350)), TimerOutcome::Commit(String::new()));
    }

    #[test]
    fn foreign_timer_expiry_is_ignored() {
        let t0 = Instant::now();
        let mut debouncer = Debouncer::new(DELAY);

        debouncer.update("heat".into(), t0);

        assert_eq!(debouncer.on_timer(t0 + ms(120)), TimerOutcome::Waiting);
        assert_eq!(debouncer.on_timer(t0 + ms(300)), TimerOutcome::Commit("heat".into()));
    }

    #[test]
    fn slightly_early_expiry_still_commits() {
        let t0 = Instant::now();
        let mut debouncer = Debouncer::new(DELAY);

        debouncer.update("ran".into(), t0);

        assert_eq!(debouncer.on_timer(t0 + ms(298)), TimerOutcome::Commit("ran".into()));
    }

    #[test]
    fn cancel_suppresses_emission_and_frees_the_timer() {
        let t0 = Instant::now();
        let mut debouncer = Debouncer::new(DELAY);

        debouncer.update("ronin".into(), t0);
        debouncer.cancel();
        assert!(!debouncer.is_pending());
        assert_eq!(debouncer.on_timer(t0 + ms(300)), TimerOutcome::Idle);

        // The armed timer has fired, so the next update arms a fresh one.
        assert_eq!(debouncer.update("r".into(), t0 + ms(400)), Some(DELAY));
    }

    #[test]
    fn update_after_commit_arms_new_timer() {
        let t0 = Instant::now();
        let mut debouncer = Debouncer::new(DELAY);

        debouncer.update("a".into(), t0);
        assert_eq!(debouncer.on_timer(t0 + ms(300)), TimerOutcome::Commit("a".into()));
        assert_eq!(debouncer.update("ab".into(), t0 + ms(310)), Some(DELAY));
    }
}
