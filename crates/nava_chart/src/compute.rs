//! Chart assembly: ephemeris states to placed, signed, housed bodies.

use nava_ephem::{Body, BodyState, Ephemeris};
use nava_time::{CivilMoment, jd_to_centuries, local_sidereal_deg};
use nava_vedic::{
    Ayanamsha, HouseSystem, ascendant_deg, compute_cusps, house_of, midheaven_deg, normalize_360,
    rashi_from_longitude,
};

use crate::error::ChartError;
use crate::types::{Chart, ChartMeta, HouseRecord, PlanetRecord};

/// The chart roster. `Rahu` is the mean ascending node; `Ketu` is its
/// antipode and never queried from the ephemeris.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartBody {
    Sun,
    Moon,
    Mercury,
    Venus,
    Mars,
    Jupiter,
    Saturn,
    Uranus,
    Neptune,
    Pluto,
    Rahu,
    Ketu,
}

/// Roster order is wire order: Ketu directly after Rahu.
pub const CHART_BODIES: [ChartBody; 12] = [
    ChartBody::Sun,
    ChartBody::Moon,
    ChartBody::Mercury,
    ChartBody::Venus,
    ChartBody::Mars,
    ChartBody::Jupiter,
    ChartBody::Saturn,
    ChartBody::Uranus,
    ChartBody::Neptune,
    ChartBody::Pluto,
    ChartBody::Rahu,
    ChartBody::Ketu,
];

impl ChartBody {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sun => "Sun",
            Self::Moon => "Moon",
            Self::Mercury => "Mercury",
            Self::Venus => "Venus",
            Self::Mars => "Mars",
            Self::Jupiter => "Jupiter",
            Self::Saturn => "Saturn",
            Self::Uranus => "Uranus",
            Self::Neptune => "Neptune",
            Self::Pluto => "Pluto",
            Self::Rahu => "Rahu",
            Self::Ketu => "Ketu",
        }
    }

    /// The ephemeris body backing this chart body, if any.
    pub const fn ephem_body(self) -> Option<Body> {
        match self {
            Self::Sun => Some(Body::Sun),
            Self::Moon => Some(Body::Moon),
            Self::Mercury => Some(Body::Mercury),
            Self::Venus => Some(Body::Venus),
            Self::Mars => Some(Body::Mars),
            Self::Jupiter => Some(Body::Jupiter),
            Self::Saturn => Some(Body::Saturn),
            Self::Uranus => Some(Body::Uranus),
            Self::Neptune => Some(Body::Neptune),
            Self::Pluto => Some(Body::Pluto),
            Self::Rahu => Some(Body::MeanNode),
            Self::Ketu => None,
        }
    }
}

/// Geographic observer position, degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoLocation {
    pub latitude_deg: f64,
    pub longitude_deg: f64,
}

impl GeoLocation {
    pub fn new(latitude_deg: f64, longitude_deg: f64) -> Result<Self, ChartError> {
        if !latitude_deg.is_finite() || latitude_deg.abs() > 90.0 {
            return Err(ChartError::Location(format!("latitude {latitude_deg}")));
        }
        if !longitude_deg.is_finite() || longitude_deg.abs() > 180.0 {
            return Err(ChartError::Location(format!("longitude {longitude_deg}")));
        }
        Ok(Self {
            latitude_deg,
            longitude_deg,
        })
    }
}

/// Chart computation options.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ChartConfig {
    pub ayanamsha: Ayanamsha,
    pub house_system: HouseSystem,
}

/// Compute a full natal chart.
///
/// Any ephemeris failure aborts the whole chart; a chart with a body
/// missing is never produced.
pub fn compute_chart<E: Ephemeris + ?Sized>(
    ephemeris: &E,
    moment: &CivilMoment,
    location: GeoLocation,
    config: ChartConfig,
) -> Result<Chart, ChartError> {
    let jd = moment.julian_day_utc();
    let t = jd_to_centuries(jd);
    let ayanamsha_deg = config.ayanamsha.at_centuries(t);

    // Angles first: ascendant and MC are tropical, reduced like any
    // body.
    let lst = local_sidereal_deg(jd, location.longitude_deg);
    let asc_sid = normalize_360(ascendant_deg(lst, location.latitude_deg) - ayanamsha_deg);
    let mc_sid = normalize_360(midheaven_deg(lst) - ayanamsha_deg);
    let cusps = compute_cusps(
        config.house_system,
        asc_sid,
        mc_sid,
        lst,
        location.latitude_deg,
        ayanamsha_deg,
    )?;

    // Gather every ephemeris-backed state before building any record,
    // so a late failure cannot leave a partial roster. Ketu is derived
    // from Rahu, not queried: the node's antipode with the same
    // (retrograde) motion.
    let rahu = ephemeris.state(Body::MeanNode, jd)?;
    let ketu = BodyState {
        lon_deg: (rahu.lon_deg + 180.0).rem_euclid(360.0),
        speed_deg_per_day: rahu.speed_deg_per_day,
    };
    let mut states: Vec<(ChartBody, BodyState)> = Vec::with_capacity(CHART_BODIES.len());
    for chart_body in CHART_BODIES {
        let state = match chart_body {
            ChartBody::Rahu => rahu,
            ChartBody::Ketu => ketu,
            other => match other.ephem_body() {
                Some(body) => ephemeris.state(body, jd)?,
                None => continue,
            },
        };
        states.push((chart_body, state));
    }

    let planets = states
        .into_iter()
        .map(|(chart_body, state)| {
            let lon = normalize_360(state.lon_deg - ayanamsha_deg);
            let pos = rashi_from_longitude(lon);
            PlanetRecord {
                name: chart_body.name().to_owned(),
                lon,
                sign: pos.rashi.western_name().to_owned(),
                sign_index: pos.rashi.index(),
                degree_in_sign: pos.degrees_in_rashi,
                house: house_of(&cusps, lon),
                is_retrograde: state.is_retrograde(),
                speed: state.speed_deg_per_day,
            }
        })
        .collect();

    let houses = cusps
        .iter()
        .enumerate()
        .map(|(i, &degree)| HouseRecord {
            house: i as u8 + 1,
            degree,
        })
        .collect();

    Ok(Chart {
        ascendant: asc_sid,
        ascendant_sign: rashi_from_longitude(asc_sid).rashi.western_name().to_owned(),
        planets,
        houses,
        meta: ChartMeta {
            julian_day: jd,
            ayanamsha: config.ayanamsha.name().to_owned(),
            ayanamsha_deg,
            house_system: config.house_system.name().to_owned(),
            utc_offset: moment.offset.to_string(),
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roster_has_twelve_bodies_ketu_after_rahu() {
        assert_eq!(CHART_BODIES.len(), 12);
        let rahu = CHART_BODIES.iter().position(|b| *b == ChartBody::Rahu).unwrap();
        let ketu = CHART_BODIES.iter().position(|b| *b == ChartBody::Ketu).unwrap();
        assert_eq!(ketu, rahu + 1);
    }

    #[test]
    fn only_ketu_lacks_an_ephemeris_body() {
        for body in CHART_BODIES {
            assert_eq!(body.ephem_body().is_none(), body == ChartBody::Ketu);
        }
    }

    #[test]
    fn location_bounds() {
        assert!(GeoLocation::new(28.6, 77.2).is_ok());
        assert!(GeoLocation::new(90.0, -180.0).is_ok());
        assert!(GeoLocation::new(90.1, 0.0).is_err());
        assert!(GeoLocation::new(0.0, 180.1).is_err());
        assert!(GeoLocation::new(f64::NAN, 0.0).is_err());
    }
}
