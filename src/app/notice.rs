//! Transient status line.
//!
//! A single slot holding the latest acknowledgement or error. Setting a notice
//! replaces whatever was shown; it disappears on the first timer expiry after
//! its deadline.

use std::time::{Duration, Instant};

/// Host timers may fire slightly before the requested delay has elapsed.
const EXPIRY_SLACK: Duration = Duration::from_millis(5);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Ack,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
    pub expires_at: Instant,
}

/// Single-slot notice holder with a fixed time-to-live.
#[derive(Debug, Clone)]
pub struct NoticeBoard {
    ttl: Duration,
    current: Option<Notice>,
}

impl NoticeBoard {
    #[must_use]
    pub const fn new(ttl: Duration) -> Self {
        Self { ttl, current: None }
    }

    #[must_use]
    pub const fn current(&self) -> Option<&Notice> {
        self.current.as_ref()
    }

    /// Shows a notice until `now + ttl`. Returns the delay to schedule the
    /// expiry timer for.
    pub fn post(&mut self, kind: NoticeKind, text: impl Into<String>, now: Instant) -> Duration {
        let text = text.into();
        match kind {
            NoticeKind::Ack => tracing::debug!(text = %text, "notice posted"),
            NoticeKind::Error => tracing::warn!(text = %text, "error notice posted"),
        }
        self.current = Some(Notice {
            kind,
            text,
            expires_at: now + self.ttl,
        });
        self.ttl
    }

    /// Drops the notice if its deadline has passed. Returns `true` when it did.
    pub fn expire(&mut self, now: Instant) -> bool {
        if self
            .current
            .as_ref()
            .is_some_and(|n| n.expires_at <= now + EXPIRY_SLACK)
        {
            self.current = None;
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
    fn notice_expires_after_ttl() {
        let t0 = Instant::now();
        let mut board = NoticeBoard::new(Duration::from_secs(3));

        assert_eq!(board.post(NoticeKind::Ack, "Movie liked", t0), Duration::from_secs(3));
        assert!(!board.expire(t0 + Duration::from_secs(1)));
        assert_eq!(board.current().map(|n| n.text.as_str()), Some("Movie liked"));

        assert!(board.expire(t0 + Duration::from_secs(3)));
        assert!(board.current().is_none());
    }

    #[test]
    fn newer_notice_replaces_and_extends() {
        let t0 = Instant::now();
        let mut board = NoticeBoard::new(Duration::from_secs(3));

        board.post(NoticeKind::Ack, "Movie liked", t0);
        board.post(NoticeKind::Error, "Failed to dislike movie (HTTP 500)", t0 + Duration::from_secs(2));

        // The first notice's timer fires but the replacement is still live.
        assert!(!board.expire(t0 + Duration::from_secs(3)));
        assert_eq!(board.current().map(|n| n.kind), Some(NoticeKind::Error));
        assert!(board.expire(t0 + Duration::from_secs(5)));
    }
}
