//! Error types for civil-time parsing and conversion.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from parsing civil date/time strings or UTC offsets.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum TimeError {
    /// Date or time string did not split into the expected integer fields.
    InvalidFormat(String),
    /// Fields parsed but fall outside the calendar/clock range.
    InvalidRange(String),
    /// UTC offset string or magnitude is not acceptable.
    InvalidOffset(String),
}

impl Display for TimeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidFormat(msg) => write!(f, "invalid date/time format: {msg}"),
            Self::InvalidRange(msg) => write!(f, "date/time out of range: {msg}"),
            Self::InvalidOffset(msg) => write!(f, "invalid UTC offset: {msg}"),
        }
    }
}

impl Error for TimeError {}
