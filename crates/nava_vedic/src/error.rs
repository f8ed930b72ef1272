use std::error::Error;
use std::fmt::{Display, Formatter};

/// Failures in sidereal reductions and house division.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum VedicError {
    /// Observer latitude too extreme for a time-based house system.
    LatitudeOutOfRange { latitude_deg: f64, limit_deg: f64 },
    /// The cusp fixed-point iteration did not settle within its budget.
    NoConvergence { latitude_deg: f64 },
}

impl Display for VedicError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            VedicError::LatitudeOutOfRange { latitude_deg, limit_deg } => write!(
                f,
                "latitude {latitude_deg}° exceeds the ±{limit_deg}° limit for this house system"
            ),
            VedicError::NoConvergence { latitude_deg } => write!(
                f,
                "house cusp iteration did not converge at latitude {latitude_deg}°"
            ),
        }
    }
}

impl Error for VedicError {}
