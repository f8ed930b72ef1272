//! Civil date/time input with an explicit UTC offset.
//!
//! The service accepts a local birth date (`"YYYY-MM-DD"`), clock time
//! (`"HH:MM"`), and the civil-to-UTC offset the caller asserts for that
//! place. The offset is a required input: silently assuming UTC or a
//! fixed zone is exactly the ambiguity this type exists to remove.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use crate::error::TimeError;
use crate::julian::{calendar_to_jd, day_fraction, jd_to_calendar};

/// Maximum UTC offset magnitude in minutes (±18:00, the IANA extreme).
const MAX_OFFSET_MINUTES: i32 = 18 * 60;

/// A fixed civil-to-UTC offset, east positive.
///
/// `+5:30` (IST) is 330 minutes; `-8:00` is −480.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UtcOffset {
    minutes: i32,
}

impl UtcOffset {
    /// UTC itself (offset zero).
    pub const UTC: UtcOffset = UtcOffset { minutes: 0 };

    /// Build an offset from whole minutes east of UTC.
    pub fn from_minutes(minutes: i32) -> Result<Self, TimeError> {
        if minutes.abs() > MAX_OFFSET_MINUTES {
            return Err(TimeError::InvalidOffset(format!(
                "{minutes} minutes exceeds ±18:00"
            )));
        }
        Ok(Self { minutes })
    }

    /// Total minutes east of UTC.
    pub fn minutes(self) -> i32 {
        self.minutes
    }

    /// Offset expressed as a fraction of a day.
    pub fn as_days(self) -> f64 {
        self.minutes as f64 / 1440.0
    }
}

impl FromStr for UtcOffset {
    type Err = TimeError;

    /// Parse `"+5:30"`, `"-08:00"`, `"0:00"` (sign optional).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (sign, rest) = match s.as_bytes().first() {
            Some(b'+') => (1, &s[1..]),
            Some(b'-') => (-1, &s[1..]),
            Some(_) => (1, s),
            None => return Err(TimeError::InvalidOffset("empty string".into())),
        };
        let (h, m) = rest
            .split_once(':')
            .ok_or_else(|| TimeError::InvalidOffset(format!("expected HH:MM, got {s:?}")))?;
        let hours: i32 = h
            .parse()
            .map_err(|_| TimeError::InvalidOffset(format!("bad hours in {s:?}")))?;
        let minutes: i32 = m
            .parse()
            .map_err(|_| TimeError::InvalidOffset(format!("bad minutes in {s:?}")))?;
        if !(0..60).contains(&minutes) || hours < 0 {
            return Err(TimeError::InvalidOffset(format!("fields out of range in {s:?}")));
        }
        Self::from_minutes(sign * (hours * 60 + minutes))
    }
}

impl Display for UtcOffset {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let sign = if self.minutes < 0 { '-' } else { '+' };
        let mag = self.minutes.abs();
        write!(f, "{sign}{}:{:02}", mag / 60, mag % 60)
    }
}

/// A parsed local civil moment: calendar fields plus the UTC offset.
///
/// Immutable; created once per request from the raw input strings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CivilMoment {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    pub offset: UtcOffset,
}

impl CivilMoment {
    /// Parse `"YYYY-MM-DD"` and `"HH:MM"` strings plus an offset.
    ///
    /// Fails with [`TimeError::InvalidFormat`] unless the date splits into
    /// exactly three integers and the time into exactly two, and with
    /// [`TimeError::InvalidRange`] for impossible calendar/clock fields.
    pub fn parse(date: &str, time: &str, offset: UtcOffset) -> Result<Self, TimeError> {
        let d: Vec<&str> = date.split('-').collect();
        // A leading '-' on a negative year would split differently; years
        // before the common era are not meaningful birth inputs here.
        if d.len() != 3 {
            return Err(TimeError::InvalidFormat(format!(
                "date {date:?} is not YYYY-MM-DD"
            )));
        }
        let year: i32 = parse_field(d[0], date)?;
        let month: u32 = parse_field(d[1], date)?;
        let day: u32 = parse_field(d[2], date)?;

        let t: Vec<&str> = time.split(':').collect();
        if t.len() != 2 {
            return Err(TimeError::InvalidFormat(format!(
                "time {time:?} is not HH:MM"
            )));
        }
        let hour: u32 = parse_field(t[0], time)?;
        let minute: u32 = parse_field(t[1], time)?;

        let m = Self {
            year,
            month,
            day,
            hour,
            minute,
            offset,
        };
        m.check_ranges()?;
        Ok(m)
    }

    fn check_ranges(&self) -> Result<(), TimeError> {
        if !(1..=12).contains(&self.month) {
            return Err(TimeError::InvalidRange(format!("month {}", self.month)));
        }
        let dim = days_in_month(self.year, self.month);
        if !(1..=dim).contains(&self.day) {
            return Err(TimeError::InvalidRange(format!(
                "day {} of {}-{:02}",
                self.day, self.year, self.month
            )));
        }
        if self.hour > 23 {
            return Err(TimeError::InvalidRange(format!("hour {}", self.hour)));
        }
        if self.minute > 59 {
            return Err(TimeError::InvalidRange(format!("minute {}", self.minute)));
        }
        Ok(())
    }

    /// Julian Day of this moment in UTC.
    ///
    /// The offset is subtracted in JD space, so day/month/year rollover
    /// falls out of the calendar arithmetic for free.
    pub fn julian_day_utc(&self) -> f64 {
        let local_frac = self.day as f64 + day_fraction(self.hour, self.minute, 0.0);
        calendar_to_jd(self.year, self.month, local_frac) - self.offset.as_days()
    }

    /// The equivalent UTC calendar moment.
    pub fn to_utc(&self) -> UtcTime {
        UtcTime::from_jd(self.julian_day_utc())
    }
}

fn parse_field<T: FromStr>(field: &str, whole: &str) -> Result<T, TimeError> {
    field
        .trim()
        .parse()
        .map_err(|_| TimeError::InvalidFormat(format!("non-numeric field in {whole:?}")))
}

fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap(year) => 29,
        2 => 28,
        _ => 0,
    }
}

fn is_leap(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// UTC calendar date/time, minute precision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UtcTime {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
}

impl UtcTime {
    /// Recover UTC calendar fields from a Julian Day, rounded to the minute.
    pub fn from_jd(jd: f64) -> Self {
        let (year, month, day_frac) = jd_to_calendar(jd);
        let day = day_frac.floor() as u32;
        let total_minutes = ((day_frac - day as f64) * 1440.0).round() as u32;
        if total_minutes == 1440 {
            // Rounding landed on the next midnight; resplit half a minute
            // later so the calendar carry happens in JD space.
            return Self::from_jd(jd + 0.5 / 1440.0);
        }
        Self {
            year,
            month,
            day,
            hour: total_minutes / 60,
            minute: total_minutes % 60,
        }
    }
}

impl Display for UtcTime {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02}T{:02}:{:02}Z",
            self.year, self.month, self.day, self.hour, self.minute
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ist() -> UtcOffset {
        "+5:30".parse().unwrap()
    }

    #[test]
    fn offset_parse_variants() {
        assert_eq!(ist().minutes(), 330);
        assert_eq!("-08:00".parse::<UtcOffset>().unwrap().minutes(), -480);
        assert_eq!("0:00".parse::<UtcOffset>().unwrap(), UtcOffset::UTC);
    }

    #[test]
    fn offset_rejects_garbage() {
        assert!("530".parse::<UtcOffset>().is_err());
        assert!("+5:75".parse::<UtcOffset>().is_err());
        assert!("+19:00".parse::<UtcOffset>().is_err());
        assert!("".parse::<UtcOffset>().is_err());
    }

    #[test]
    fn offset_display_roundtrip() {
        for s in ["+5:30", "-8:00", "+0:00"] {
            let o: UtcOffset = s.parse().unwrap();
            assert_eq!(o.to_string(), s);
        }
    }

    #[test]
    fn parse_valid_moment() {
        let m = CivilMoment::parse("2000-01-01", "12:00", ist()).unwrap();
        assert_eq!((m.year, m.month, m.day, m.hour, m.minute), (2000, 1, 1, 12, 0));
    }

    #[test]
    fn parse_rejects_malformed_date() {
        assert!(CivilMoment::parse("2000/01/01", "12:00", ist()).is_err());
        assert!(CivilMoment::parse("2000-01", "12:00", ist()).is_err());
        assert!(CivilMoment::parse("2000-xx-01", "12:00", ist()).is_err());
    }

    #[test]
    fn parse_rejects_malformed_time() {
        assert!(CivilMoment::parse("2000-01-01", "12", ist()).is_err());
        assert!(CivilMoment::parse("2000-01-01", "12:00:00", ist()).is_err());
        assert!(CivilMoment::parse("2000-01-01", "12:ab", ist()).is_err());
    }

    #[test]
    fn parse_rejects_out_of_range() {
        assert!(CivilMoment::parse("2000-13-01", "12:00", ist()).is_err());
        assert!(CivilMoment::parse("2001-02-29", "12:00", ist()).is_err());
        assert!(CivilMoment::parse("2000-01-01", "24:00", ist()).is_err());
        assert!(CivilMoment::parse("2000-01-01", "12:60", ist()).is_err());
    }

    #[test]
    fn leap_day_accepted() {
        assert!(CivilMoment::parse("2000-02-29", "00:00", UtcOffset::UTC).is_ok());
        assert!(CivilMoment::parse("2024-02-29", "00:00", UtcOffset::UTC).is_ok());
    }

    #[test]
    fn ist_noon_golden_jd() {
        // 2000-01-01 12:00 +5:30 → 1999-12-31 06:30 UTC → JD 2451543.7708333…
        let m = CivilMoment::parse("2000-01-01", "12:00", ist()).unwrap();
        let jd = m.julian_day_utc();
        assert!((jd - 2_451_543.770_833_333).abs() < 1e-8, "jd = {jd}");
    }

    #[test]
    fn ist_noon_utc_fields() {
        let m = CivilMoment::parse("2000-01-01", "12:00", ist()).unwrap();
        let utc = m.to_utc();
        assert_eq!(utc.to_string(), "1999-12-31T06:30Z");
    }

    #[test]
    fn utc_offset_zero_is_identity() {
        let m = CivilMoment::parse("2024-01-15", "12:00", UtcOffset::UTC).unwrap();
        assert_eq!(m.to_utc().to_string(), "2024-01-15T12:00Z");
    }

    #[test]
    fn jd_monotonic_across_offsets() {
        let early = CivilMoment::parse("2024-01-15", "12:00", "+5:30".parse().unwrap()).unwrap();
        let late = CivilMoment::parse("2024-01-15", "12:00", "-5:30".parse().unwrap()).unwrap();
        // Same wall clock, easterly zone is earlier in UTC.
        assert!(early.julian_day_utc() < late.julian_day_utc());
    }

    #[test]
    fn minute_rounding_carries_past_midnight() {
        // 2000-12-31 23:59:48 rounds to the next minute, which is
        // midnight of the next day and year.
        let jd = calendar_to_jd(2000, 12, 31.0 + 1_439.8 / 1_440.0);
        assert_eq!(UtcTime::from_jd(jd).to_string(), "2001-01-01T00:00Z");
        // Just under the rounding threshold stays on the old day.
        let jd = calendar_to_jd(2000, 12, 31.0 + 1_439.4 / 1_440.0);
        assert_eq!(UtcTime::from_jd(jd).to_string(), "2000-12-31T23:59Z");
    }

    #[test]
    fn westward_offset_rolls_day_forward() {
        let m = CivilMoment::parse("1999-12-31", "20:00", "-8:00".parse().unwrap()).unwrap();
        assert_eq!(m.to_utc().to_string(), "2000-01-01T04:00Z");
    }
}
