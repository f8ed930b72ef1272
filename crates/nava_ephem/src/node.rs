//! Mean ascending node of the lunar orbit.
//!
//! The mean node regresses through the ecliptic in about 18.6 years.
//! Its longitude is the Delaunay argument Ω evaluated directly; no
//! periodic terms, which is exactly the "mean node" convention.
//!
//! Source: IERS Conventions 2010, Table 5.2e (Ω polynomial, arcseconds).
//! Public domain.

const ARCSEC_PER_DEG: f64 = 3600.0;

/// Mean lunar node longitude in degrees, [0, 360).
///
/// `t` is Julian centuries from J2000.0.
pub(crate) fn longitude_deg(t: f64) -> f64 {
    let arcsec = 450_160.398_036
        + t * (-6_962_890.543_1 + t * (7.472_2 + t * (0.007_702 + t * -0.000_059_39)));
    (arcsec / ARCSEC_PER_DEG).rem_euclid(360.0)
}
