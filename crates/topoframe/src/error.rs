//! Error types for the geodetic solve.

use std::fmt;

/// Errors that can occur when solving geodetic coordinates from ECEF.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GeodeticError {
    /// The position is the ECEF origin, where both angles are undefined.
    ZeroPosition,
    /// The position lies on the polar axis, where longitude is undefined
    /// and the latitude iteration divides by the equatorial radial distance.
    PolarAxis {
        /// The z-component of the degenerate position, in kilometers.
        z_km: f64,
    },
}

impl fmt::Display for GeodeticError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroPosition => {
                write!(
                    f,
                    "position is the ECEF origin: latitude and longitude are undefined"
                )
            }
            Self::PolarAxis { z_km } => {
                write!(
                    f,
                    "position (0, 0, {z_km}) lies on the polar axis: longitude is undefined"
                )
            }
        }
    }
}

impl std::error::Error for GeodeticError {}

/// Result type for geodetic operations.
pub type GeodeticResult<T> = Result<T, GeodeticError>;
