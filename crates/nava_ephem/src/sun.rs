//! Geometric solar longitude.
//!
//! Mean longitude plus the equation of center, good to roughly 0.01°
//! over the supported span. Nutation and aberration are omitted; they
//! are below the precision the chart layer rounds to.
//!
//! Source: Meeus, Astronomical Algorithms 2nd ed., ch. 25. Public domain
//! formulae.

/// True geometric solar longitude in degrees, [0, 360).
///
/// `t` is Julian centuries (TT taken equal to UTC) from J2000.0.
pub(crate) fn longitude_deg(t: f64) -> f64 {
    let l0 = 280.46646 + t * (36000.76983 + t * 0.0003032);
    let m = mean_anomaly_deg(t).to_radians();
    let c = (1.914602 - t * (0.004817 + t * 0.000014)) * m.sin()
        + (0.019993 - 0.000101 * t) * (2.0 * m).sin()
        + 0.000289 * (3.0 * m).sin();
    (l0 + c).rem_euclid(360.0)
}

/// Solar mean anomaly in degrees (not normalized).
pub(crate) fn mean_anomaly_deg(t: f64) -> f64 {
    357.52911 + t * (35999.05029 - t * 0.0001537)
}
