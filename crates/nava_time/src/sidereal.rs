//! Earth Rotation Angle and Greenwich Mean Sidereal Time.
//!
//! The ascendant and house cusps hinge on local sidereal time, so this
//! module turns a UTC Julian Day into GMST and then LST for an observer
//! at a given east longitude. UTC is used directly in place of UT1; the
//! difference is under a second, far below the minute-level precision of
//! the birth inputs.
//!
//! All angles here are degrees, matching the rest of the chart pipeline.
//!
//! Sources:
//! - ERA: IERS Conventions 2010, Eq. 5.15. Public domain.
//! - GMST polynomial: Capitaine et al. 2003, Table 2. Public domain.

use crate::julian::J2000_JD;

/// Earth Rotation Angle in degrees, [0, 360).
///
/// θ = 360° × (0.7790572732640 + 1.00273781191135448 × Du),
/// Du = JD − 2451545.0.
pub fn earth_rotation_angle_deg(jd: f64) -> f64 {
    let du = jd - J2000_JD;
    let turns = 0.779_057_273_264_0 + 1.002_737_811_911_354_48 * du;
    (turns * 360.0).rem_euclid(360.0)
}

/// Greenwich Mean Sidereal Time in degrees, [0, 360).
///
/// GMST = ERA + polynomial(T) with T in Julian centuries from J2000.0.
/// The polynomial terms are arcseconds:
///   0.014506 + 4612.156534·T + 1.3915817·T² − 0.00000044·T³
///   − 0.000029956·T⁴ − 0.0000000368·T⁵
pub fn gmst_deg(jd: f64) -> f64 {
    let t = (jd - J2000_JD) / 36525.0;
    let poly_arcsec = 0.014506
        + t * (4612.156534 + t * (1.3915817 + t * (-0.00000044 + t * (-0.000029956 + t * -0.0000000368))));
    (earth_rotation_angle_deg(jd) + poly_arcsec / 3600.0).rem_euclid(360.0)
}

/// Local sidereal time in degrees for an observer east of Greenwich.
pub fn local_sidereal_deg(jd: f64, longitude_east_deg: f64) -> f64 {
    (gmst_deg(jd) + longitude_east_deg).rem_euclid(360.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn era_at_j2000() {
        // ERA at JD 2451545.0 is about 280.46°.
        let era = earth_rotation_angle_deg(J2000_JD);
        assert!((era - 280.46).abs() < 0.1, "ERA = {era}");
    }

    #[test]
    fn gmst_j2000_midnight() {
        // 2000-Jan-01 0h: GMST ≈ 6h 39m 51s ≈ 99.97°.
        let g = gmst_deg(2_451_544.5);
        assert!((g - 99.97).abs() < 0.1, "GMST = {g}");
    }

    #[test]
    fn gmst_advances_per_day() {
        // One solar day advances sidereal time by ~0.986° modulo 360.
        let g1 = gmst_deg(2_451_545.0);
        let g2 = gmst_deg(2_451_546.0);
        let diff = (g2 - g1).rem_euclid(360.0);
        assert!((diff - 0.986).abs() < 0.01, "daily advance = {diff}");
    }

    #[test]
    fn lst_wraps_into_range() {
        for &jd in &[2_451_545.0, 2_460_000.5, 2_440_000.5] {
            for &lon in &[-179.9, -75.0, 0.0, 77.2, 179.9] {
                let lst = local_sidereal_deg(jd, lon);
                assert!((0.0..360.0).contains(&lst), "LST out of range: {lst}");
            }
        }
    }

    #[test]
    fn lst_equals_gmst_at_greenwich() {
        let jd = 2_460_310.75;
        assert!((local_sidereal_deg(jd, 0.0) - gmst_deg(jd)).abs() < 1e-12);
    }
}
