// SPDX-License-Identifier: MPL-2.0
//! Schedule payload loading and validation.
//!
//! A schedule is a TOML document listing the sessions the board counts
//! down to. Timestamps are RFC 3339 strings and are parsed leniently: a
//! session whose `starts-at` cannot be parsed is kept without a target
//! instant, which the countdown clock reports as already elapsed. Only
//! structural problems (unreadable file, invalid TOML, duplicate ids)
//! fail the load.

use crate::countdown::SessionId;
use crate::error::{Result, ScheduleError};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use std::collections::{BTreeMap, HashSet};
use std::path::Path;

/// Raw payload shape as written in the TOML file.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "kebab-case")]
struct RawSchedule {
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    sessions: Vec<RawSession>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "kebab-case")]
struct RawSession {
    id: String,
    title: String,
    #[serde(default)]
    starts_at: Option<String>,
}

/// One scheduled session occurrence.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    id: SessionId,
    title: String,
    /// Target instant; `None` when `starts-at` was missing or unparseable.
    starts_at: Option<DateTime<Utc>>,
}

impl Session {
    /// Returns the session identifier.
    #[must_use]
    pub fn id(&self) -> &SessionId {
        &self.id
    }

    /// Returns the display title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the start instant, if one could be parsed.
    #[must_use]
    pub fn starts_at(&self) -> Option<DateTime<Utc>> {
        self.starts_at
    }
}

/// A validated schedule: unique session ids, sessions ordered by start
/// instant with unparseable targets last.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Schedule {
    title: Option<String>,
    sessions: Vec<Session>,
}

impl Schedule {
    /// Reads and validates a schedule payload from `path`.
    ///
    /// # Errors
    ///
    /// Returns a [`ScheduleError`] if the file cannot be read, is not
    /// valid TOML, or contains duplicate session ids.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ScheduleError::IoError(e.to_string()))?;
        Self::parse(&content)
    }

    /// Parses and validates a schedule payload.
    ///
    /// # Errors
    ///
    /// Returns a [`ScheduleError`] on invalid TOML or duplicate ids.
    pub fn parse(content: &str) -> Result<Self> {
        let raw: RawSchedule =
            toml::from_str(content).map_err(|e| ScheduleError::InvalidFormat(e.to_string()))?;

        let mut seen = HashSet::new();
        let mut sessions = Vec::with_capacity(raw.sessions.len());
        for session in raw.sessions {
            if !seen.insert(session.id.clone()) {
                return Err(ScheduleError::DuplicateSession(session.id).into());
            }
            sessions.push(Session {
                id: SessionId::new(session.id),
                title: session.title,
                starts_at: session.starts_at.as_deref().and_then(parse_instant),
            });
        }

        // Unparseable targets sort after every real instant.
        sessions.sort_by_key(|s| (s.starts_at.is_none(), s.starts_at));

        Ok(Self {
            title: raw.title,
            sessions,
        })
    }

    /// Returns the schedule title, if the payload declared one.
    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// Returns the sessions in display order.
    #[must_use]
    pub fn sessions(&self) -> &[Session] {
        &self.sessions
    }

    /// Returns the target mapping used to build a countdown clock.
    #[must_use]
    pub fn targets(&self) -> BTreeMap<SessionId, Option<DateTime<Utc>>> {
        self.sessions
            .iter()
            .map(|s| (s.id.clone(), s.starts_at))
            .collect()
    }

    /// Returns the number of sessions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    /// Checks if the schedule has no sessions.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}

/// Parses an RFC 3339 timestamp, normalized to UTC.
///
/// Returns `None` instead of an error so one bad timestamp cannot take
/// down the whole payload.
fn parse_instant(value: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(value.trim())
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}
