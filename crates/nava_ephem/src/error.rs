use std::error::Error;
use std::fmt::{Display, Formatter};

use crate::Body;

/// Failures while evaluating a body position.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum EphemError {
    /// Requested epoch falls outside the fitted span of the series.
    OutOfRange { jd: f64, min: f64, max: f64 },
    /// The backend cannot compute this body.
    UnsupportedBody(Body),
    /// Kepler's equation failed to converge for this body/epoch.
    NoConvergence { body: Body, jd: f64 },
}

impl Display for EphemError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            EphemError::OutOfRange { jd, min, max } => {
                write!(f, "JD {jd} outside supported span [{min}, {max}]")
            }
            EphemError::UnsupportedBody(body) => {
                write!(f, "body {} not supported by this backend", body.name())
            }
            EphemError::NoConvergence { body, jd } => {
                write!(f, "Kepler iteration did not converge for {} at JD {jd}", body.name())
            }
        }
    }
}

impl Error for EphemError {}
