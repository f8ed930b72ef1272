use std::error::Error;
use std::fmt::{Display, Formatter};

use nava_ephem::EphemError;
use nava_time::TimeError;
use nava_vedic::VedicError;

/// Failures while assembling a chart.
///
/// `Time` and `Location` variants mean the caller's input was bad and
/// should be surfaced as such. `Ephemeris` means the position backend
/// could not deliver; callers that have a degraded path take it then.
#[derive(Debug)]
#[non_exhaustive]
pub enum ChartError {
    Time(TimeError),
    Location(String),
    Ephemeris(EphemError),
    Houses(VedicError),
}

impl ChartError {
    /// Whether this error stems from caller input rather than the
    /// computation backend.
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, ChartError::Time(_) | ChartError::Location(_) | ChartError::Houses(_))
    }
}

impl Display for ChartError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ChartError::Time(e) => write!(f, "time: {e}"),
            ChartError::Location(msg) => write!(f, "location: {msg}"),
            ChartError::Ephemeris(e) => write!(f, "ephemeris: {e}"),
            ChartError::Houses(e) => write!(f, "houses: {e}"),
        }
    }
}

impl Error for ChartError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            ChartError::Time(e) => Some(e),
            ChartError::Ephemeris(e) => Some(e),
            ChartError::Houses(e) => Some(e),
            ChartError::Location(_) => None,
        }
    }
}

impl From<TimeError> for ChartError {
    fn from(e: TimeError) -> Self {
        ChartError::Time(e)
    }
}

impl From<EphemError> for ChartError {
    fn from(e: EphemError) -> Self {
        ChartError::Ephemeris(e)
    }
}

impl From<VedicError> for ChartError {
    fn from(e: VedicError) -> Self {
        ChartError::Houses(e)
    }
}
