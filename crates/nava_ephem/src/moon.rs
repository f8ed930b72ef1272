//! Geocentric lunar longitude from a truncated periodic series.
//!
//! The series keeps every longitude term with an amplitude above about
//! 0.002°, which lands the Moon within a couple of hundredths of a
//! degree of the full theory. That is two orders of magnitude tighter
//! than a sign boundary, the quantity the chart layer actually consumes.
//!
//! Source: Meeus, Astronomical Algorithms 2nd ed., ch. 47 (abridged
//! ELP-2000/82). Public domain formulae.

/// Longitude terms: multiples of (D, M, M', F) and the coefficient in
/// 1e-6 degrees. Terms with a solar-anomaly factor are scaled by E per
/// power of M.
const LON_TERMS: &[(i32, i32, i32, i32, f64)] = &[
    (0, 0, 1, 0, 6_288_774.0),
    (2, 0, -1, 0, 1_274_027.0),
    (2, 0, 0, 0, 658_314.0),
    (0, 0, 2, 0, 213_618.0),
    (0, 1, 0, 0, -185_116.0),
    (0, 0, 0, 2, -114_332.0),
    (2, 0, -2, 0, 58_793.0),
    (2, -1, -1, 0, 57_066.0),
    (2, 0, 1, 0, 53_322.0),
    (2, -1, 0, 0, 45_758.0),
    (0, 1, -1, 0, -40_923.0),
    (1, 0, 0, 0, -34_720.0),
    (0, 1, 1, 0, -30_383.0),
    (2, 0, 0, -2, 15_327.0),
    (0, 0, 1, 2, -12_528.0),
    (0, 0, 1, -2, 10_980.0),
    (4, 0, -1, 0, 10_675.0),
    (0, 0, 3, 0, 10_034.0),
    (4, 0, -2, 0, 8_548.0),
    (2, 1, -1, 0, -7_888.0),
    (2, 1, 0, 0, -6_766.0),
    (1, 0, -1, 0, -5_163.0),
    (1, 1, 0, 0, 4_987.0),
    (2, -1, 1, 0, 4_036.0),
    (2, 0, 2, 0, 3_994.0),
    (4, 0, 0, 0, 3_861.0),
    (2, 0, -3, 0, 3_665.0),
    (0, 1, -2, 0, -2_689.0),
    (2, 0, -1, 2, -2_602.0),
    (2, -1, -2, 0, 2_390.0),
];

/// Geocentric ecliptic longitude of the Moon in degrees, [0, 360).
///
/// `t` is Julian centuries from J2000.0.
pub(crate) fn longitude_deg(t: f64) -> f64 {
    // Mean longitude and the four fundamental arguments, degrees.
    let lp = poly(t, &[218.316_447_7, 481_267.881_234_21, -0.001_578_6])
        + t.powi(3) / 538_841.0
        - t.powi(4) / 65_194_000.0;
    let d = poly(t, &[297.850_192_1, 445_267.111_403_4, -0.001_881_9])
        + t.powi(3) / 545_868.0
        - t.powi(4) / 113_065_000.0;
    let m = poly(t, &[357.529_109_2, 35_999.050_290_9, -0.000_153_6]) + t.powi(3) / 24_490_000.0;
    let mp = poly(t, &[134.963_396_4, 477_198.867_505_5, 0.008_741_4])
        + t.powi(3) / 69_699.0
        - t.powi(4) / 14_712_000.0;
    let f = poly(t, &[93.272_095_0, 483_202.017_523_3, -0.003_653_9])
        - t.powi(3) / 3_526_000.0
        + t.powi(4) / 863_310_000.0;

    // Eccentricity damping for terms involving the solar anomaly.
    let e = 1.0 - t * (0.002_516 + t * 0.000_007_4);

    let mut sum = 0.0;
    for &(cd, cm, cmp, cf, coeff) in LON_TERMS {
        let arg = (cd as f64 * d + cm as f64 * m + cmp as f64 * mp + cf as f64 * f).to_radians();
        let damp = match cm.abs() {
            0 => 1.0,
            1 => e,
            _ => e * e,
        };
        sum += coeff * damp * arg.sin();
    }

    // Planetary perturbation terms.
    let a1 = (119.75 + 131.849 * t).to_radians();
    let a2 = (53.09 + 479_264.290 * t).to_radians();
    sum += 3_958.0 * a1.sin() + 1_962.0 * (lp - f).to_radians().sin() + 318.0 * a2.sin();

    (lp + sum * 1e-6).rem_euclid(360.0)
}

fn poly(t: f64, coeffs: &[f64]) -> f64 {
    coeffs.iter().rev().fold(0.0, |acc, &c| acc * t + c)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn meeus_example_47a() {
        // 1992 Apr 12 0h TD: geometric longitude 133.162655°.
        let lon = longitude_deg(-0.077_221_081_451);
        assert!((lon - 133.1627).abs() < 0.02, "lon = {lon}");
    }

    #[test]
    fn monthly_revolution() {
        // The Moon covers 360° in ~27.32 days, about 13.18°/day on average.
        let day_cty = 1.0 / 36525.0;
        let l0 = longitude_deg(0.0);
        let l1 = longitude_deg(day_cty);
        let advance = (l1 - l0).rem_euclid(360.0);
        assert!((11.0..16.0).contains(&advance), "daily motion = {advance}");
    }
}
