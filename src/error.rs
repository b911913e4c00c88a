// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
    Schedule(ScheduleError),
}

/// Specific error types for schedule payload problems.
/// Used to provide user-friendly, localized error messages.
#[derive(Debug, Clone)]
pub enum ScheduleError {
    /// The payload is not valid TOML or misses required fields
    InvalidFormat(String),

    /// Two sessions share the same identifier
    DuplicateSession(String),

    /// The payload file could not be read
    IoError(String),
}

impl ScheduleError {
    /// Returns the i18n message key for this error type.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            ScheduleError::InvalidFormat(_) => "error-schedule-invalid-format",
            ScheduleError::DuplicateSession(_) => "error-schedule-duplicate-session",
            ScheduleError::IoError(_) => "error-schedule-io",
        }
    }
}

impl fmt::Display for ScheduleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScheduleError::InvalidFormat(msg) => write!(f, "Invalid schedule: {}", msg),
            ScheduleError::DuplicateSession(id) => {
                write!(f, "Duplicate session id: {}", id)
            }
            ScheduleError::IoError(msg) => write!(f, "I/O error: {}", msg),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Schedule(e) => write!(f, "Schedule Error: {}", e),
        }
    }
}

impl From<ScheduleError> for Error {
    fn from(err: ScheduleError) -> Self {
        Error::Schedule(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
