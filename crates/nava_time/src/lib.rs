//! Time scales and calendars for the chart pipeline.
//!
//! Everything downstream of input parsing works in Julian Days (UTC).
//! This crate owns the three conversions that get there:
//!
//! - civil date/time strings plus an explicit UTC offset → [`CivilMoment`]
//! - calendar ↔ Julian Day ([`julian`])
//! - Julian Day → Greenwich/local sidereal time ([`sidereal`])
//!
//! The UTC offset is a required caller input. No timezone database is
//! consulted and no local default is ever assumed.

pub mod civil;
pub mod error;
pub mod julian;
pub mod sidereal;

pub use civil::{CivilMoment, UtcOffset, UtcTime};
pub use error::TimeError;
pub use julian::{J2000_JD, calendar_to_jd, jd_to_calendar, jd_to_centuries};
pub use sidereal::{gmst_deg, local_sidereal_deg};
