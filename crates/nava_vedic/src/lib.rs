//! Sidereal zodiac reductions: ayanamsha, rashi, ascendant, houses.
//!
//! Pure angle math on degree inputs. Nothing here touches an ephemeris
//! or a clock; the chart layer wires those in.

pub mod ayanamsha;
pub mod bhava;
pub mod error;
pub mod lagna;
pub mod rashi;
pub mod util;

pub use ayanamsha::{Ayanamsha, general_precession_deg, sidereal_from_tropical};
pub use bhava::{Cusps, HouseSystem, compute_cusps, house_of};
pub use error::VedicError;
pub use lagna::{OBLIQUITY_J2000_DEG, ascendant_deg, midheaven_deg};
pub use rashi::{ALL_RASHIS, Rashi, RashiPosition, rashi_from_longitude};
pub use util::normalize_360;
