//! Natal chart assembly.
//!
//! Joins the time, ephemeris, and sidereal layers into the serialized
//! chart the service returns: twelve placed bodies (the nine classical
//! grahas' modern roster plus Rahu and Ketu), twelve house cusps, the
//! ascendant, and provenance metadata.
//!
//! The ephemeris is an explicit collaborator passed per call. There is
//! no global configuration and no partial output: a chart either has
//! every body or it is an error.

pub mod compute;
pub mod error;
pub mod types;

pub use compute::{CHART_BODIES, ChartBody, ChartConfig, GeoLocation, compute_chart};
pub use error::ChartError;
pub use types::{Chart, ChartMeta, HouseRecord, PlanetRecord};
