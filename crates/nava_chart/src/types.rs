//! Serialized chart shapes.
//!
//! Field names are the service's public contract; renaming one is a
//! breaking change for every consumer.

use serde::{Deserialize, Serialize};

/// One placed body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanetRecord {
    pub name: String,
    /// Sidereal ecliptic longitude, degrees [0, 360).
    pub lon: f64,
    /// Western sign name, e.g. "Scorpio".
    pub sign: String,
    /// 0-based sign index, Aries = 0.
    pub sign_index: u8,
    /// Degrees into the sign, [0, 30).
    pub degree_in_sign: f64,
    /// Occupied house, 1..=12.
    pub house: u8,
    pub is_retrograde: bool,
    /// Longitude rate, degrees per day.
    pub speed: f64,
}

/// One house cusp.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HouseRecord {
    pub house: u8,
    /// Cusp sidereal longitude, degrees [0, 360).
    pub degree: f64,
}

/// Provenance for a computed chart.
///
/// Two keys were renamed from the legacy service's meta block:
/// `ayanamsa` is spelled `ayanamsha` here, and `timezone_assumption`
/// became `utc_offset` (the offset is now a required input, not an
/// assumption). Consumers migrating from the legacy API must map both.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartMeta {
    pub julian_day: f64,
    /// Ayanamsha system name and its value in degrees at the epoch.
    pub ayanamsha: String,
    pub ayanamsha_deg: f64,
    pub house_system: String,
    /// The civil-to-UTC offset the caller asserted, e.g. "+5:30".
    pub utc_offset: String,
}

/// A complete natal chart. Either every body is present or the chart
/// was never produced; no partial charts exist.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Chart {
    /// Sidereal ascendant longitude, degrees [0, 360).
    pub ascendant: f64,
    pub ascendant_sign: String,
    pub planets: Vec<PlanetRecord>,
    pub houses: Vec<HouseRecord>,
    pub meta: ChartMeta,
}

impl Chart {
    /// Look up a body by its wire name.
    pub fn planet(&self, name: &str) -> Option<&PlanetRecord> {
        self.planets.iter().find(|p| p.name == name)
    }

    /// The Moon's sign, the primary rashi in the sidereal tradition.
    pub fn moon_sign(&self) -> Option<&str> {
        self.planet("Moon").map(|p| p.sign.as_str())
    }
}
