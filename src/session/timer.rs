//! Deferred transition to the results view.
//!
//! The session never sleeps. Completing a reading arms a
//! `ScheduledTransition`; the caller reports elapsed time through
//! `ReadingSession::advance`, and the transition fires only if it is due
//! and still belongs to the current reading.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::draw::ReadingId;

/// A pending move to the results view.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduledTransition {
    reading: ReadingId,
    due: Duration,
}

impl ScheduledTransition {
    /// Schedule for `reading`, due `delay` after `now`.
    #[must_use]
    pub fn after(reading: ReadingId, now: Duration, delay: Duration) -> Self {
        Self {
            reading,
            due: now.saturating_add(delay),
        }
    }

    /// The reading this transition belongs to.
    #[must_use]
    pub fn reading(&self) -> ReadingId {
        self.reading
    }

    /// Session time at which the transition fires.
    #[must_use]
    pub fn due(&self) -> Duration {
        self.due
    }

    #[must_use]
    pub fn is_due(&self, now: Duration) -> bool {
        now >= self.due
    }

    /// Time left before firing (zero once due).
    #[must_use]
    pub fn remaining(&self, now: Duration) -> Duration {
        self.due.saturating_sub(now)
    }
}
