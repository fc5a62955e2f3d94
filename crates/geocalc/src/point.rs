//! Geographic points.

use crate::{Coordinate, GeoError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A location given by latitude and longitude in decimal degrees.
///
/// Points are plain values: they are never mutated and no clamping is applied,
/// so a point may sit outside the usual ranges. Use [`Point::try_from_degrees`]
/// or [`Point::is_valid`] when the input is untrusted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    latitude: f64,
    longitude: f64,
}

impl Point {
    /// Creates a point from a latitude and a longitude coordinate.
    #[inline]
    pub fn new(latitude: Coordinate, longitude: Coordinate) -> Self {
        Self::from_degrees(latitude.value(), longitude.value())
    }

    /// Creates a point from raw decimal degrees.
    #[inline]
    pub const fn from_degrees(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }

    /// Creates a point from raw decimal degrees, checking both ranges.
    pub fn try_from_degrees(latitude: f64, longitude: f64) -> Result<Self> {
        Ok(Self::new(
            Coordinate::latitude(latitude)?,
            Coordinate::longitude(longitude)?,
        ))
    }

    /// Creates a point from radians.
    #[inline]
    pub fn from_radians(latitude: f64, longitude: f64) -> Self {
        Self::from_degrees(latitude.to_degrees(), longitude.to_degrees())
    }

    /// Latitude in decimal degrees.
    #[inline]
    pub const fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Longitude in decimal degrees.
    #[inline]
    pub const fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Returns true if the point is finite and within -90..=90 / -180..=180.
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }

    /// Checks ranges, reporting the first offending component.
    pub fn validate(&self) -> Result<()> {
        if !(self.latitude.is_finite() && (-90.0..=90.0).contains(&self.latitude)) {
            return Err(GeoError::InvalidLatitude(self.latitude));
        }
        if !(self.longitude.is_finite() && (-180.0..=180.0).contains(&self.longitude)) {
            return Err(GeoError::InvalidLongitude(self.longitude));
        }
        Ok(())
    }

    /// Converts to (latitude, longitude) radians for internal calculations.
    #[inline]
    pub(crate) fn to_radians(self) -> (f64, f64) {
        (self.latitude.to_radians(), self.longitude.to_radians())
    }
}

impl From<(f64, f64)> for Point {
    fn from((lat, lng): (f64, f64)) -> Self {
        Self::from_degrees(lat, lng)
    }
}

impl From<(Coordinate, Coordinate)> for Point {
    fn from((lat, lng): (Coordinate, Coordinate)) -> Self {
        Self::new(lat, lng)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.latitude, self.longitude)
    }
}
