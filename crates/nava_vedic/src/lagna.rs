//! Lagna (Ascendant) and Midheaven from local sidereal time.
//!
//! Standard spherical astronomy formulas (Meeus, Astronomical
//! Algorithms 2nd ed., ch. 13), evaluated with the mean obliquity of
//! J2000.0. Both results are tropical longitudes; the caller applies
//! the ayanamsha afterwards like any other body.

use crate::util::normalize_360;

/// Mean obliquity of the ecliptic at J2000.0, degrees (IAU 1976).
pub const OBLIQUITY_J2000_DEG: f64 = 23.439_291_111;

/// Tropical longitude of the Ascendant in degrees, [0, 360).
///
/// `Asc = atan2(-cos LST, sin LST · cos ε + tan φ · sin ε)`
pub fn ascendant_deg(lst_deg: f64, latitude_deg: f64) -> f64 {
    let lst = lst_deg.to_radians();
    let phi = latitude_deg.to_radians();
    let eps = OBLIQUITY_J2000_DEG.to_radians();
    let asc = f64::atan2(-lst.cos(), lst.sin() * eps.cos() + phi.tan() * eps.sin());
    normalize_360(asc.to_degrees())
}

/// Tropical longitude of the Midheaven in degrees, [0, 360).
///
/// `MC = atan2(sin LST, cos LST · cos ε)`
pub fn midheaven_deg(lst_deg: f64) -> f64 {
    let lst = lst_deg.to_radians();
    let eps = OBLIQUITY_J2000_DEG.to_radians();
    let mc = f64::atan2(lst.sin(), lst.cos() * eps.cos());
    normalize_360(mc.to_degrees())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::arc_forward;

    #[test]
    fn equator_ascendant_at_lst_zero() {
        // LST = 0 puts 0° Aries on the meridian; at the equator the
        // ascendant is 90° ahead of the MC.
        let asc = ascendant_deg(0.0, 0.0);
        let mc = midheaven_deg(0.0);
        assert!(mc.abs() < 1e-9 || (mc - 360.0).abs() < 1e-9, "mc = {mc}");
        assert!((asc - 90.0).abs() < 1e-9, "asc = {asc}");
    }

    #[test]
    fn mc_at_lst_90() {
        // LST = 90°: RA of the meridian is 90°, which maps to ecliptic
        // longitude 90° (solstitial colure).
        let mc = midheaven_deg(90.0);
        assert!((mc - 90.0).abs() < 1e-9, "mc = {mc}");
    }

    #[test]
    fn ascendant_leads_mc() {
        // The ascendant sits in the quadrant after the MC for mid
        // latitudes.
        for &lst in &[0.0, 50.0, 123.0, 200.0, 301.0] {
            let asc = ascendant_deg(lst, 28.6);
            let mc = midheaven_deg(lst);
            let gap = arc_forward(mc, asc);
            assert!((0.0..180.0).contains(&gap), "lst {lst}: gap = {gap}");
        }
    }

    #[test]
    fn results_in_range() {
        for &lst in &[0.0, 90.0, 180.0, 270.0, 359.9] {
            for &lat in &[-60.0, -28.6, 0.0, 28.6, 60.0] {
                let asc = ascendant_deg(lst, lat);
                assert!((0.0..360.0).contains(&asc), "asc = {asc}");
            }
            let mc = midheaven_deg(lst);
            assert!((0.0..360.0).contains(&mc), "mc = {mc}");
        }
    }
}
