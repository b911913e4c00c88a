// SPDX-License-Identifier: MPL-2.0
//! Countdown clock for scheduled sessions.
//!
//! [`CountdownClock`] tracks one target instant per session and derives a
//! displayable hours/minutes breakdown of the remaining time. The clock has
//! no timer of its own: an external subscription feeds it the current time
//! through [`CountdownClock::tick`], and every tick recomputes the
//! remaining time from the original targets, so repeated ticking cannot
//! accumulate drift.

use chrono::{DateTime, Utc};
use std::collections::BTreeMap;

const MILLIS_PER_HOUR: i64 = 3_600_000;
const MILLIS_PER_MINUTE: i64 = 60_000;

/// Identifier of one countdown target (one scheduled session occurrence).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SessionId(String);

impl SessionId {
    /// Creates a session id from any string-like value.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the id as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Remaining time broken down for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TimeLeft {
    /// Whole hours remaining.
    pub hours: u64,
    /// Whole minutes remaining beyond the hours, always below 60.
    pub minutes: u64,
}

impl TimeLeft {
    /// Decomposes a millisecond duration into whole hours and minutes.
    ///
    /// Negative input is clamped to zero before decomposition, so the
    /// result never goes negative once a target has passed.
    #[must_use]
    pub fn from_millis(millis: i64) -> Self {
        let millis = millis.max(0);
        Self {
            hours: (millis / MILLIS_PER_HOUR) as u64,
            minutes: ((millis % MILLIS_PER_HOUR) / MILLIS_PER_MINUTE) as u64,
        }
    }

    /// Checks if no displayable time remains.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.hours == 0 && self.minutes == 0
    }
}

/// Lifecycle of a single countdown.
///
/// The transition is one-directional: once a session has been observed
/// elapsed it stays elapsed, even if a later tick carries an earlier
/// timestamp (clock skew on the host).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionStatus {
    /// The target instant lies ahead; time is still counting down.
    Pending,
    /// The target instant has passed (or was never parseable).
    Elapsed,
}

#[derive(Debug, Clone, PartialEq)]
struct Entry {
    /// Target instant; `None` records an unparseable timestamp, which
    /// fails safe to elapsed rather than erroring.
    target: Option<DateTime<Utc>>,
    remaining: TimeLeft,
    status: SessionStatus,
}

/// Derives per-session remaining time from a set of target instants.
///
/// All state is recomputed from `(targets, now)` on every tick; the maps
/// returned by [`remaining`](Self::remaining) and queried by
/// [`elapsed`](Self::elapsed) are never written by callers. Elapsed
/// sessions are retained and flagged, not pruned.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CountdownClock {
    entries: BTreeMap<SessionId, Entry>,
}

impl CountdownClock {
    /// Creates a clock for the given targets and computes the initial
    /// remaining time as of `now`.
    ///
    /// A `None` target marks a session whose timestamp could not be
    /// parsed; it reports [`SessionStatus::Elapsed`] from the start.
    #[must_use]
    pub fn new(targets: BTreeMap<SessionId, Option<DateTime<Utc>>>, now: DateTime<Utc>) -> Self {
        let entries = targets
            .into_iter()
            .map(|(id, target)| {
                let (remaining, status) = compute(target, now);
                (
                    id,
                    Entry {
                        target,
                        remaining,
                        status,
                    },
                )
            })
            .collect();
        Self { entries }
    }

    /// Recomputes the remaining time of every session as of `now`.
    ///
    /// Each value is derived from the session's original target, never
    /// from the previous remaining value, so calling this twice with the
    /// same `now` yields identical results. The pending-to-elapsed
    /// transition latches: an earlier `now` on a later tick cannot revive
    /// an elapsed session.
    pub fn tick(&mut self, now: DateTime<Utc>) {
        for entry in self.entries.values_mut() {
            let (remaining, status) = compute(entry.target, now);
            entry.remaining = remaining;
            if entry.status != SessionStatus::Elapsed {
                entry.status = status;
            }
        }
    }

    /// Returns the remaining time for a session, if it is tracked.
    #[must_use]
    pub fn remaining(&self, id: &SessionId) -> Option<TimeLeft> {
        self.entries.get(id).map(|entry| entry.remaining)
    }

    /// Checks if a session's target has passed.
    ///
    /// Unknown sessions report `false`.
    #[must_use]
    pub fn elapsed(&self, id: &SessionId) -> bool {
        self.entries
            .get(id)
            .is_some_and(|entry| entry.status == SessionStatus::Elapsed)
    }

    /// Returns the status for a session, if it is tracked.
    #[must_use]
    pub fn status(&self, id: &SessionId) -> Option<SessionStatus> {
        self.entries.get(id).map(|entry| entry.status)
    }

    /// Checks if any tracked session is still counting down.
    ///
    /// The countdown tick subscription stays alive only while this holds.
    #[must_use]
    pub fn has_pending(&self) -> bool {
        self.entries
            .values()
            .any(|entry| entry.status == SessionStatus::Pending)
    }

    /// Returns the number of tracked sessions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Checks if the clock tracks no sessions.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn compute(target: Option<DateTime<Utc>>, now: DateTime<Utc>) -> (TimeLeft, SessionStatus) {
    match target {
        Some(target) => {
            let millis = (target - now).num_milliseconds();
            let remaining = TimeLeft::from_millis(millis);
            let status = if millis <= 0 {
                SessionStatus::Elapsed
            } else {
                SessionStatus::Pending
            };
            (remaining, status)
        }
        None => (TimeLeft::default(), SessionStatus::Elapsed),
    }
}
