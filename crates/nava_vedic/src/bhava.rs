//! House (bhava) division and occupancy.
//!
//! Three systems: Placidus (time-based semi-arc trisection), Whole-Sign
//! (each sign is one house starting from the ascendant's sign), and
//! Equal (30° from the ascendant degree). Placidus degenerates inside
//! the polar circles, so latitudes beyond ±66.5° are rejected for it;
//! the other two work everywhere.
//!
//! Cusps and inputs here are all sidereal longitudes. The geometry is
//! identical in either zodiac as long as cusps and bodies agree.
//!
//! Sources: standard spherical astronomy (Meeus, Montenbruck & Pfleger).

use std::f64::consts::PI;

use crate::error::VedicError;
use crate::lagna::OBLIQUITY_J2000_DEG;
use crate::util::{arc_forward, normalize_360};

/// Latitude limit in degrees for time-based systems.
const MAX_LATITUDE_DEG: f64 = 66.5;

/// Supported house division methods.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum HouseSystem {
    /// Semi-arc trisection. The traditional default.
    #[default]
    Placidus,
    /// One sign per house from the ascendant's sign.
    WholeSign,
    /// Twelve 30° houses from the ascendant degree.
    Equal,
}

impl HouseSystem {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Placidus => "Placidus",
            Self::WholeSign => "Whole Sign",
            Self::Equal => "Equal",
        }
    }
}

/// Twelve house cusps in sidereal degrees, cusp 1 first.
pub type Cusps = [f64; 12];

/// Compute house cusps for the given system.
///
/// `asc_deg` and `mc_deg` are sidereal; `ramc_deg` is the right
/// ascension of the MC (equal to LST) and `latitude_deg` the observer
/// latitude, both needed only for Placidus.
pub fn compute_cusps(
    system: HouseSystem,
    asc_deg: f64,
    mc_deg: f64,
    ramc_deg: f64,
    latitude_deg: f64,
    ayanamsha_deg: f64,
) -> Result<Cusps, VedicError> {
    match system {
        HouseSystem::Equal => Ok(equal_cusps(asc_deg)),
        HouseSystem::WholeSign => Ok(whole_sign_cusps(asc_deg)),
        HouseSystem::Placidus => {
            if latitude_deg.abs() > MAX_LATITUDE_DEG {
                return Err(VedicError::LatitudeOutOfRange {
                    latitude_deg,
                    limit_deg: MAX_LATITUDE_DEG,
                });
            }
            placidus_cusps(
                asc_deg,
                mc_deg,
                ramc_deg.to_radians(),
                latitude_deg.to_radians(),
                ayanamsha_deg,
            )
        }
    }
}

/// Equal houses: cusp i = asc + i·30.
fn equal_cusps(asc_deg: f64) -> Cusps {
    let mut cusps = [0.0; 12];
    for (i, cusp) in cusps.iter_mut().enumerate() {
        *cusp = normalize_360(asc_deg + i as f64 * 30.0);
    }
    cusps
}

/// Whole-sign houses: cusp 1 at the start of the ascendant's sign.
fn whole_sign_cusps(asc_deg: f64) -> Cusps {
    let start = (normalize_360(asc_deg) / 30.0).floor() * 30.0;
    equal_cusps(start)
}

/// Placidus: angular cusps from Asc/MC, intermediate cusps by iterative
/// trisection of the diurnal and nocturnal semi-arcs.
fn placidus_cusps(
    asc_deg: f64,
    mc_deg: f64,
    ramc: f64,
    lat: f64,
    ayanamsha_deg: f64,
) -> Result<Cusps, VedicError> {
    let eps = OBLIQUITY_J2000_DEG.to_radians();

    let mut cusps = [0.0; 12];
    cusps[0] = asc_deg;
    cusps[3] = normalize_360(mc_deg + 180.0);
    cusps[6] = normalize_360(asc_deg + 180.0);
    cusps[9] = mc_deg;

    // The iteration runs in the tropical frame (RA and declination know
    // nothing of the ayanamsha); reduce each result afterwards.
    let sid = |tropical: f64| normalize_360(tropical - ayanamsha_deg);

    // Houses 11, 12: MC → Asc, diurnal semi-arc.
    cusps[10] = sid(placidus_cusp(ramc, lat, eps, 1.0 / 3.0, true)?);
    cusps[11] = sid(placidus_cusp(ramc, lat, eps, 2.0 / 3.0, true)?);

    // Houses 2, 3: Asc → IC, nocturnal semi-arc.
    cusps[1] = sid(placidus_cusp(ramc, lat, eps, 1.0 / 3.0, false)?);
    cusps[2] = sid(placidus_cusp(ramc, lat, eps, 2.0 / 3.0, false)?);

    // Remaining cusps are antipodes.
    cusps[4] = normalize_360(cusps[10] + 180.0);
    cusps[5] = normalize_360(cusps[11] + 180.0);
    cusps[7] = normalize_360(cusps[1] + 180.0);
    cusps[8] = normalize_360(cusps[2] + 180.0);

    Ok(cusps)
}

/// One intermediate Placidus cusp by fixed-point iteration, returned as
/// a tropical longitude in degrees. The latitude guard keeps the map
/// contractive, but a stalled iteration is still an error, not a
/// silently wrong cusp.
fn placidus_cusp(
    ramc: f64,
    lat: f64,
    eps: f64,
    fraction: f64,
    above_horizon: bool,
) -> Result<f64, VedicError> {
    let base = if above_horizon { ramc } else { ramc + PI };
    let mut ra = base + fraction * PI / 2.0;

    for _ in 0..50 {
        let dec = (eps.sin() * ra.sin()).asin();
        let semi_arc = semi_arc_rad(dec, lat, above_horizon);
        let new_ra = base + fraction * semi_arc;
        if (new_ra - ra).abs() < 1e-10 {
            return Ok(normalize_360(equator_to_ecliptic_deg(new_ra, eps)));
        }
        ra = new_ra;
    }

    Err(VedicError::NoConvergence {
        latitude_deg: lat.to_degrees(),
    })
}

/// Diurnal (or nocturnal) semi-arc in radians.
fn semi_arc_rad(dec: f64, lat: f64, diurnal: bool) -> f64 {
    let cos_ha = -(dec.tan() * lat.tan());
    let ha = cos_ha.clamp(-1.0, 1.0).acos();
    if diurnal { ha } else { PI - ha }
}

/// Ecliptic longitude in degrees of the equator-division point at RA,
/// with dec = asin(sin ε · sin RA).
fn equator_to_ecliptic_deg(ra: f64, eps: f64) -> f64 {
    let dec = (eps.sin() * ra.sin()).asin();
    let sin_lon = ra.sin() * eps.cos() + dec.tan() * eps.sin();
    f64::atan2(sin_lon, ra.cos()).to_degrees()
}

/// House (1..=12) a longitude falls in: the last cusp not past it.
pub fn house_of(cusps: &Cusps, lon_deg: f64) -> u8 {
    let lon = normalize_360(lon_deg);
    let mut best = 0usize;
    let mut best_arc = 360.0;
    for (i, &cusp) in cusps.iter().enumerate() {
        let arc = arc_forward(cusp, lon);
        if arc < best_arc {
            best_arc = arc;
            best = i;
        }
    }
    best as u8 + 1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equal_cusps_spacing() {
        let cusps = equal_cusps(100.0);
        for i in 0..12 {
            let expected = normalize_360(100.0 + i as f64 * 30.0);
            assert!((cusps[i] - expected).abs() < 1e-10, "cusp {i}");
        }
    }

    #[test]
    fn whole_sign_snaps_to_sign_start() {
        let cusps = whole_sign_cusps(137.4); // Leo rising
        assert!((cusps[0] - 120.0).abs() < 1e-10);
        assert!((cusps[1] - 150.0).abs() < 1e-10);
    }

    #[test]
    fn placidus_angular_cusps_fixed() {
        let cusps = compute_cusps(HouseSystem::Placidus, 123.0, 33.0, 30.0, 28.6, 0.0).unwrap();
        assert!((cusps[0] - 123.0).abs() < 1e-10);
        assert!((cusps[9] - 33.0).abs() < 1e-10);
        assert!((cusps[6] - 303.0).abs() < 1e-10);
        assert!((cusps[3] - 213.0).abs() < 1e-10);
    }

    #[test]
    fn placidus_cusps_ordered() {
        let cusps = compute_cusps(HouseSystem::Placidus, 100.0, 10.0, 7.0, 45.0, 0.0).unwrap();
        // Successive cusps must advance; the 12 arcs sum to 360.
        let total: f64 = (0..12)
            .map(|i| arc_forward(cusps[i], cusps[(i + 1) % 12]))
            .sum();
        assert!((total - 360.0).abs() < 1e-6, "total = {total}");
    }

    #[test]
    fn placidus_polar_latitude_rejected() {
        let err = compute_cusps(HouseSystem::Placidus, 0.0, 270.0, 270.0, 70.0, 0.0).unwrap_err();
        assert!(matches!(err, VedicError::LatitudeOutOfRange { .. }));
    }

    #[test]
    fn placidus_converges_across_the_allowed_latitudes() {
        for &lat in &[-66.4, -45.0, 0.0, 28.6, 55.7, 66.4] {
            for &ramc in &[0.0, 77.0, 145.0, 222.5, 310.0] {
                let cusps = compute_cusps(HouseSystem::Placidus, 10.0, 280.0, ramc, lat, 24.1)
                    .unwrap();
                for (i, c) in cusps.iter().enumerate() {
                    assert!((0.0..360.0).contains(c), "lat {lat} ramc {ramc} cusp {i}");
                }
            }
        }
    }

    #[test]
    fn whole_sign_works_at_polar_latitude() {
        assert!(compute_cusps(HouseSystem::WholeSign, 15.0, 300.0, 300.0, 78.2, 0.0).is_ok());
    }

    #[test]
    fn equal_matches_placidus_at_equator_angles() {
        // At the equator the nocturnal and diurnal semi-arcs are both
        // 90°, so Placidus intermediate cusps trisect in RA.
        let cusps = compute_cusps(HouseSystem::Placidus, 90.0, 0.0, 0.0, 0.0, 0.0).unwrap();
        assert!((cusps[0] - 90.0).abs() < 1e-9);
    }

    #[test]
    fn house_of_respects_cusp_boundaries() {
        let cusps = equal_cusps(100.0);
        assert_eq!(house_of(&cusps, 100.0), 1);
        assert_eq!(house_of(&cusps, 129.9), 1);
        assert_eq!(house_of(&cusps, 130.0), 2);
        assert_eq!(house_of(&cusps, 99.9), 12);
        assert_eq!(house_of(&cusps, 40.0), 11);
    }

    #[test]
    fn house_of_wraps_through_aries() {
        let cusps = equal_cusps(350.0);
        assert_eq!(house_of(&cusps, 355.0), 1);
        assert_eq!(house_of(&cusps, 5.0), 1);
        assert_eq!(house_of(&cusps, 20.0), 2);
    }
}
