//! Error types for the geocalc crate.

use thiserror::Error;

/// Result type alias for geocalc operations.
pub type Result<T> = std::result::Result<T, GeoError>;

/// Errors returned by the validating constructors.
///
/// The geodesic operations themselves never fail; only building values from
/// untrusted input does.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeoError {
    /// Latitude outside -90..=90 or not finite
    #[error("Invalid latitude: {0} (expected -90..=90)")]
    InvalidLatitude(f64),

    /// Longitude outside -180..=180 or not finite
    #[error("Invalid longitude: {0} (expected -180..=180)")]
    InvalidLongitude(f64),

    /// Degrees/minutes/seconds triple with out-of-range components
    #[error("Invalid DMS value {degrees}° {minutes}' {seconds}\": {reason}")]
    InvalidDms {
        degrees: i32,
        minutes: i32,
        seconds: f64,
        reason: &'static str,
    },

    /// Radius that cannot describe a sphere or a search circle
    #[error("Invalid radius: {0}")]
    InvalidRadius(f64),
}

/// Error code for integration with foodshare-core style error handling.
/// Range: 10xxx for geo errors.
#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeoErrorCode {
    /// Invalid latitude
    InvalidLatitude = 10001,
    /// Invalid longitude
    InvalidLongitude = 10002,
    /// Invalid DMS triple
    InvalidDms = 10003,
    /// Invalid radius
    InvalidRadius = 10004,
}

impl GeoError {
    /// Returns the error code for this error.
    pub fn code(&self) -> GeoErrorCode {
        match self {
            GeoError::InvalidLatitude(_) => GeoErrorCode::InvalidLatitude,
            GeoError::InvalidLongitude(_) => GeoErrorCode::InvalidLongitude,
            GeoError::InvalidDms { .. } => GeoErrorCode::InvalidDms,
            GeoError::InvalidRadius(_) => GeoErrorCode::InvalidRadius,
        }
    }
}
