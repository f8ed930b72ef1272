//! Analytic ephemeris for the bodies a natal chart needs.
//!
//! Positions come from closed-form series and mean orbital elements, so
//! the crate carries no data files and no global state. Every call is a
//! pure function of the body and the epoch. The [`Ephemeris`] trait is
//! the seam the chart layer programs against; [`AnalyticEphemeris`] is
//! the built-in backend and tests substitute their own.
//!
//! All longitudes are tropical geocentric ecliptic longitudes in
//! degrees, [0, 360). Sidereal reduction happens downstream.

pub mod error;
mod moon;
mod node;
mod planets;
mod sun;

use nava_time::jd_to_centuries;

pub use error::EphemError;

/// Celestial bodies the ephemeris can position.
///
/// `MeanNode` is the ascending lunar node; the descending node is its
/// antipode and is derived by the caller rather than computed here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Body {
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
    MeanNode,
}

impl Body {
    /// All bodies, in traditional chart order.
    pub const ALL: [Body; 11] = [
        Body::Sun,
        Body::Moon,
        Body::Mercury,
        Body::Venus,
        Body::Mars,
        Body::Jupiter,
        Body::Saturn,
        Body::Uranus,
        Body::Neptune,
        Body::Pluto,
        Body::MeanNode,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            Body::Sun => "Sun",
            Body::Moon => "Moon",
            Body::Mercury => "Mercury",
            Body::Venus => "Venus",
            Body::Mars => "Mars",
            Body::Jupiter => "Jupiter",
            Body::Saturn => "Saturn",
            Body::Uranus => "Uranus",
            Body::Neptune => "Neptune",
            Body::Pluto => "Pluto",
            Body::MeanNode => "Mean Node",
        }
    }
}

/// Instantaneous state of a body: longitude and its rate of change.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BodyState {
    /// Tropical ecliptic longitude, degrees in [0, 360).
    pub lon_deg: f64,
    /// Longitude rate in degrees per day. Negative means retrograde.
    pub speed_deg_per_day: f64,
}

impl BodyState {
    pub fn is_retrograde(&self) -> bool {
        self.speed_deg_per_day < 0.0
    }
}

/// A source of body positions at a UTC Julian Day.
pub trait Ephemeris {
    fn state(&self, body: Body, jd: f64) -> Result<BodyState, EphemError>;
}

/// First Julian Day the mean-element fits cover (1800-01-01 UTC).
pub const SPAN_MIN_JD: f64 = 2_378_496.5;
/// Last Julian Day the mean-element fits cover (2050-01-01 UTC).
pub const SPAN_MAX_JD: f64 = 2_469_807.5;

/// Half-step in days for the symmetric speed difference.
const SPEED_STEP: f64 = 0.05;

/// The built-in series-based backend.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnalyticEphemeris;

impl AnalyticEphemeris {
    pub fn new() -> Self {
        Self
    }

    fn longitude(&self, body: Body, jd: f64) -> Result<f64, EphemError> {
        let t = jd_to_centuries(jd);
        match body {
            Body::Sun => Ok(sun::longitude_deg(t)),
            Body::Moon => Ok(moon::longitude_deg(t)),
            Body::MeanNode => Ok(node::longitude_deg(t)),
            _ => planets::longitude_deg(body, t, jd),
        }
    }
}

impl Ephemeris for AnalyticEphemeris {
    fn state(&self, body: Body, jd: f64) -> Result<BodyState, EphemError> {
        if !(SPAN_MIN_JD..=SPAN_MAX_JD).contains(&jd) {
            return Err(EphemError::OutOfRange {
                jd,
                min: SPAN_MIN_JD,
                max: SPAN_MAX_JD,
            });
        }
        let lon_deg = self.longitude(body, jd)?;
        let before = self.longitude(body, jd - SPEED_STEP)?;
        let after = self.longitude(body, jd + SPEED_STEP)?;
        let speed_deg_per_day = wrap_180(after - before) / (2.0 * SPEED_STEP);
        Ok(BodyState {
            lon_deg,
            speed_deg_per_day,
        })
    }
}

/// Shortest signed arc, degrees in (-180, 180].
fn wrap_180(deg: f64) -> f64 {
    let w = deg.rem_euclid(360.0);
    if w > 180.0 { w - 360.0 } else { w }
}
