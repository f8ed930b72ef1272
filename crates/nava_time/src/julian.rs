//! Gregorian calendar ↔ Julian Day conversion.
//!
//! The Julian Day number is the continuous day count used throughout
//! astronomical computation; the fractional part encodes time of day
//! (JD x.5 is midnight UTC).
//!
//! Formulas: Meeus, *Astronomical Algorithms* (2nd ed.), Chapter 7.
//! Valid for all dates on the Gregorian calendar.

/// Julian Day of the J2000.0 epoch (2000-Jan-01 12:00).
pub const J2000_JD: f64 = 2_451_545.0;

/// Convert a Gregorian calendar date to a Julian Day.
///
/// `day_frac` is the day of month plus the fraction of the day, e.g.
/// `15.5` for the 15th at 12:00. The result is monotonically increasing
/// in time and exactly reproducible for identical inputs.
pub fn calendar_to_jd(year: i32, month: u32, day_frac: f64) -> f64 {
    let (y, m) = if month <= 2 {
        (year - 1, month + 12)
    } else {
        (year, month)
    };
    let a = (y as f64 / 100.0).floor();
    let b = 2.0 - a + (a / 4.0).floor();
    (365.25 * (y as f64 + 4716.0)).floor() + (30.6001 * (m as f64 + 1.0)).floor() + day_frac + b
        - 1524.5
}

/// Convert a Julian Day back to a Gregorian `(year, month, day_frac)`.
pub fn jd_to_calendar(jd: f64) -> (i32, u32, f64) {
    let z = (jd + 0.5).floor();
    let f = jd + 0.5 - z;

    let alpha = ((z - 1_867_216.25) / 36_524.25).floor();
    let a = z + 1.0 + alpha - (alpha / 4.0).floor();
    let b = a + 1524.0;
    let c = ((b - 122.1) / 365.25).floor();
    let d = (365.25 * c).floor();
    let e = ((b - d) / 30.6001).floor();

    let day_frac = b - d - (30.6001 * e).floor() + f;
    let month = if e < 14.0 { e - 1.0 } else { e - 13.0 };
    let year = if month > 2.0 { c - 4716.0 } else { c - 4715.0 };

    (year as i32, month as u32, day_frac)
}

/// Julian centuries since J2000.0.
pub fn jd_to_centuries(jd: f64) -> f64 {
    (jd - J2000_JD) / 36_525.0
}

/// Fraction of a day from clock fields: `(h + m/60 + s/3600) / 24`.
pub fn day_fraction(hour: u32, minute: u32, second: f64) -> f64 {
    (hour as f64 + minute as f64 / 60.0 + second / 3600.0) / 24.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn j2000_noon() {
        let jd = calendar_to_jd(2000, 1, 1.5);
        assert!((jd - J2000_JD).abs() < 1e-9, "jd = {jd}");
    }

    #[test]
    fn gregorian_reform_reference() {
        // Meeus example 7.a: 1957-Oct-4.81 = JD 2436116.31
        let jd = calendar_to_jd(1957, 10, 4.81);
        assert!((jd - 2_436_116.31).abs() < 1e-6, "jd = {jd}");
    }

    #[test]
    fn utc_1999_dec_31_0630() {
        // The 2000-01-01 12:00 IST (+5:30) golden scenario.
        let jd = calendar_to_jd(1999, 12, 31.0 + day_fraction(6, 30, 0.0));
        assert!((jd - 2_451_543.770_833_333).abs() < 1e-8, "jd = {jd}");
    }

    #[test]
    fn monotonic_in_time() {
        let a = calendar_to_jd(2024, 3, 20.0);
        let b = calendar_to_jd(2024, 3, 20.25);
        let c = calendar_to_jd(2024, 3, 21.0);
        assert!(a < b && b < c);
    }

    #[test]
    fn reproducible() {
        let a = calendar_to_jd(1987, 6, 19.5);
        let b = calendar_to_jd(1987, 6, 19.5);
        assert_eq!(a, b);
    }

    #[test]
    fn roundtrip_calendar() {
        for &(y, m, d) in &[(2000, 1, 1.5), (1999, 12, 31.270_833_3), (2024, 2, 29.75)] {
            let jd = calendar_to_jd(y, m, d);
            let (ry, rm, rd) = jd_to_calendar(jd);
            assert_eq!((ry, rm), (y, m), "date {y}-{m}");
            assert!((rd - d).abs() < 1e-6, "day_frac {rd} vs {d}");
        }
    }

    #[test]
    fn centuries_at_j2000() {
        assert_eq!(jd_to_centuries(J2000_JD), 0.0);
    }

    #[test]
    fn day_fraction_noon() {
        assert!((day_fraction(12, 0, 0.0) - 0.5).abs() < 1e-15);
    }

    #[test]
    fn day_fraction_0630() {
        assert!((day_fraction(6, 30, 0.0) - 0.270_833_333_333).abs() < 1e-9);
    }
}
