//! Geocentric planetary longitudes from mean Keplerian elements.
//!
//! Each planet's heliocentric position comes from osculating elements
//! linear in time, solved through Kepler's equation and rotated into the
//! ecliptic frame. Subtracting the heliocentric position of the
//! Earth-Moon barycenter yields the geocentric vector whose longitude
//! the chart layer consumes. Accuracy over 1800-2050 is a few
//! arcminutes for the inner planets and better than a degree for Pluto.
//!
//! Source: Standish, "Keplerian Elements for Approximate Positions of
//! the Major Planets" (JPL), 1800 AD - 2050 AD table. Public domain.

use crate::error::EphemError;
use crate::Body;

/// a (au), e, I, L, ϖ, Ω (deg) at J2000.0 followed by their rates per
/// Julian century.
struct Elements {
    base: [f64; 6],
    rate: [f64; 6],
}

const MERCURY: Elements = Elements {
    base: [0.387_099_27, 0.205_635_93, 7.004_979_02, 252.250_323_50, 77.457_796_28, 48.330_765_93],
    rate: [0.000_000_37, 0.000_019_06, -0.005_947_49, 149_472.674_111_75, 0.160_476_89, -0.125_340_81],
};
const VENUS: Elements = Elements {
    base: [0.723_335_66, 0.006_776_72, 3.394_676_05, 181.979_099_50, 131.602_467_18, 76.679_842_55],
    rate: [0.000_003_90, -0.000_041_07, -0.000_788_90, 58_517.815_387_29, 0.002_683_29, -0.277_694_18],
};
const EM_BARY: Elements = Elements {
    base: [1.000_002_61, 0.016_711_23, -0.000_015_31, 100.464_571_66, 102.937_681_93, 0.0],
    rate: [0.000_005_62, -0.000_043_92, -0.012_946_68, 35_999.372_449_81, 0.323_273_64, 0.0],
};
const MARS: Elements = Elements {
    base: [1.523_710_34, 0.093_394_10, 1.849_691_42, -4.553_432_05, -23.943_629_59, 49.559_538_91],
    rate: [0.000_018_47, 0.000_078_82, -0.008_131_31, 19_140.302_684_99, 0.444_410_88, -0.292_573_43],
};
const JUPITER: Elements = Elements {
    base: [5.202_887_00, 0.048_386_24, 1.304_396_95, 34.396_440_51, 14.728_479_83, 100.473_909_09],
    rate: [-0.000_116_07, -0.000_132_53, -0.001_837_14, 3_034.746_127_75, 0.212_526_68, 0.204_691_06],
};
const SATURN: Elements = Elements {
    base: [9.536_675_94, 0.053_861_79, 2.485_991_87, 49.954_244_23, 92.598_878_31, 113.662_424_48],
    rate: [-0.001_250_60, -0.000_509_91, 0.001_936_09, 1_222.493_622_01, -0.418_972_16, -0.288_677_94],
};
const URANUS: Elements = Elements {
    base: [19.189_164_64, 0.047_257_44, 0.772_637_83, 313.238_104_51, 170.954_276_30, 74.016_925_03],
    rate: [-0.001_961_76, -0.000_043_97, -0.002_429_39, 428.482_027_85, 0.408_052_81, 0.042_405_89],
};
const NEPTUNE: Elements = Elements {
    base: [30.069_922_76, 0.008_590_48, 1.770_043_47, -55.120_029_69, 44.964_762_27, 131.784_225_74],
    rate: [0.000_262_91, 0.000_051_05, 0.000_353_72, 218.459_453_25, -0.322_414_64, -0.005_086_64],
};
const PLUTO: Elements = Elements {
    base: [39.482_116_75, 0.248_827_30, 17.140_012_06, 238.929_038_33, 224.068_916_29, 110.303_936_84],
    rate: [-0.000_315_96, 0.000_051_70, 0.000_048_18, 145.207_805_15, -0.040_629_42, -0.011_834_82],
};

fn elements_for(body: Body) -> Option<&'static Elements> {
    match body {
        Body::Mercury => Some(&MERCURY),
        Body::Venus => Some(&VENUS),
        Body::Mars => Some(&MARS),
        Body::Jupiter => Some(&JUPITER),
        Body::Saturn => Some(&SATURN),
        Body::Uranus => Some(&URANUS),
        Body::Neptune => Some(&NEPTUNE),
        Body::Pluto => Some(&PLUTO),
        _ => None,
    }
}

/// Geocentric ecliptic longitude of a planet in degrees, [0, 360).
///
/// `t` is Julian centuries from J2000.0; `jd` only labels the error.
pub(crate) fn longitude_deg(body: Body, t: f64, jd: f64) -> Result<f64, EphemError> {
    let el = elements_for(body).ok_or(EphemError::UnsupportedBody(body))?;
    let planet = heliocentric(el, t, body, jd)?;
    let earth = heliocentric(&EM_BARY, t, body, jd)?;
    let x = planet[0] - earth[0];
    let y = planet[1] - earth[1];
    Ok(y.atan2(x).to_degrees().rem_euclid(360.0))
}

/// Heliocentric ecliptic position in au.
fn heliocentric(el: &Elements, t: f64, body: Body, jd: f64) -> Result<[f64; 3], EphemError> {
    let [a, e, i, l, peri, node] = std::array::from_fn(|k| el.base[k] + el.rate[k] * t);
    let omega = peri - node; // argument of perihelion
    let m = (l - peri).rem_euclid(360.0);

    let ecc = kepler_deg(m, e, body, jd)?.to_radians();
    // Orbital-plane coordinates with the x axis toward perihelion.
    let xp = a * (ecc.cos() - e);
    let yp = a * (1.0 - e * e).sqrt() * ecc.sin();

    let (so, co) = omega.to_radians().sin_cos();
    let (sn, cn) = node.to_radians().sin_cos();
    let (si, ci) = i.to_radians().sin_cos();

    Ok([
        (co * cn - so * sn * ci) * xp + (-so * cn - co * sn * ci) * yp,
        (co * sn + so * cn * ci) * xp + (-so * sn + co * cn * ci) * yp,
        so * si * xp + co * si * yp,
    ])
}

/// Solve Kepler's equation M = E - e sin E. Arguments and result in
/// degrees.
fn kepler_deg(m: f64, e: f64, body: Body, jd: f64) -> Result<f64, EphemError> {
    let e_star = e.to_degrees();
    let mut ecc = m + e_star * m.to_radians().sin();
    for _ in 0..50 {
        let dm = m - (ecc - e_star * ecc.to_radians().sin());
        let de = dm / (1.0 - e * ecc.to_radians().cos());
        ecc += de;
        if de.abs() < 1e-8 {
            return Ok(ecc);
        }
    }
    Err(EphemError::NoConvergence { body, jd })
}
