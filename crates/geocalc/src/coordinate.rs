//! Latitude/longitude values.
//!
//! A [`Coordinate`] is a single angle stored as signed decimal degrees. It can
//! be built from decimal degrees, radians, degrees + decimal minutes (the
//! format most GPS receivers print) or degrees/minutes/seconds. Every
//! representation collapses to the same decimal-degree value immediately.

use crate::{GeoError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single latitude or longitude angle in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Coordinate(f64);

impl Coordinate {
    /// Creates a coordinate from decimal degrees, stored as-is.
    #[inline]
    pub const fn from_degrees(value: f64) -> Self {
        Self(value)
    }

    /// Creates a coordinate from radians.
    #[inline]
    pub fn from_radians(value: f64) -> Self {
        Self(value.to_degrees())
    }

    /// Creates a coordinate from degrees, minutes and seconds.
    ///
    /// The sign applies to the whole triple and is read from the first
    /// non-zero component, so `0° -17' 28.33"` is negative. Magnitudes of
    /// minutes and seconds are always added.
    ///
    /// # Example
    /// ```
    /// use geocalc::Coordinate;
    ///
    /// let lat = Coordinate::from_dms(-34, 36, 35.9994);
    /// assert!((lat.value() + 34.609999833).abs() < 1e-9);
    ///
    /// let lng = Coordinate::from_dms(0, -17, 28.3338);
    /// assert!(lng.value() < 0.0);
    /// ```
    pub fn from_dms(degrees: i32, minutes: i32, seconds: f64) -> Self {
        let negative = if degrees != 0 {
            degrees < 0
        } else if minutes != 0 {
            minutes < 0
        } else {
            seconds < 0.0
        };

        let magnitude = f64::from(degrees.unsigned_abs())
            + f64::from(minutes.unsigned_abs()) / 60.0
            + seconds.abs() / 3600.0;

        Self(if negative { -magnitude } else { magnitude })
    }

    /// Like [`Coordinate::from_dms`] but rejects minutes outside `0..60`,
    /// seconds outside `[0, 60)` and non-finite seconds.
    pub fn try_from_dms(degrees: i32, minutes: i32, seconds: f64) -> Result<Self> {
        let invalid = |reason| GeoError::InvalidDms {
            degrees,
            minutes,
            seconds,
            reason,
        };

        if !seconds.is_finite() {
            return Err(invalid("seconds must be finite"));
        }
        if minutes.unsigned_abs() >= 60 {
            return Err(invalid("minutes must be in 0..60"));
        }
        if seconds.abs() >= 60.0 {
            return Err(invalid("seconds must be in [0, 60)"));
        }

        Ok(Self::from_dms(degrees, minutes, seconds))
    }

    /// Creates a coordinate from whole degrees and decimal minutes, e.g.
    /// `51° 29.0626'`. The sign is taken from degrees, or from minutes when
    /// degrees is zero.
    pub fn from_degrees_minutes(degrees: i32, minutes: f64) -> Self {
        let negative = if degrees != 0 { degrees < 0 } else { minutes < 0.0 };
        let magnitude = f64::from(degrees.unsigned_abs()) + minutes.abs() / 60.0;
        Self(if negative { -magnitude } else { magnitude })
    }

    /// Creates a latitude, rejecting values outside -90..=90.
    pub fn latitude(value: f64) -> Result<Self> {
        if value.is_finite() && (-90.0..=90.0).contains(&value) {
            Ok(Self(value))
        } else {
            Err(GeoError::InvalidLatitude(value))
        }
    }

    /// Creates a longitude, rejecting values outside -180..=180.
    pub fn longitude(value: f64) -> Result<Self> {
        if value.is_finite() && (-180.0..=180.0).contains(&value) {
            Ok(Self(value))
        } else {
            Err(GeoError::InvalidLongitude(value))
        }
    }

    /// The value in decimal degrees.
    #[inline]
    pub const fn value(&self) -> f64 {
        self.0
    }

    /// The value in radians.
    #[inline]
    pub fn to_radians(&self) -> f64 {
        self.0.to_radians()
    }

    /// Splits the value back into degrees, minutes and seconds.
    pub fn to_dms(&self) -> Dms {
        let magnitude = self.0.abs();
        let degrees = magnitude.trunc();
        let total_minutes = (magnitude - degrees) * 60.0;
        let minutes = total_minutes.trunc();

        Dms {
            negative: self.0.is_sign_negative() && self.0 != 0.0,
            degrees: degrees as u32,
            minutes: minutes as u32,
            seconds: (total_minutes - minutes) * 60.0,
        }
    }
}

impl From<f64> for Coordinate {
    fn from(value: f64) -> Self {
        Self::from_degrees(value)
    }
}

impl From<Coordinate> for f64 {
    fn from(coordinate: Coordinate) -> Self {
        coordinate.0
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Unsigned degrees/minutes/seconds with a separate sign flag.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Dms {
    /// True for south latitudes and west longitudes
    pub negative: bool,
    pub degrees: u32,
    pub minutes: u32,
    pub seconds: f64,
}

impl From<Dms> for Coordinate {
    fn from(dms: Dms) -> Self {
        let magnitude =
            f64::from(dms.degrees) + f64::from(dms.minutes) / 60.0 + dms.seconds / 3600.0;
        Self(if dms.negative { -magnitude } else { magnitude })
    }
}

impl fmt::Display for Dms {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.negative { "-" } else { "" };
        write!(f, "{}{}° {}' {:.4}\"", sign, self.degrees, self.minutes, self.seconds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_degrees_stores_value() {
        assert_eq!(Coordinate::from_degrees(51.4843774).value(), 51.4843774);
        assert_eq!(Coordinate::from_degrees(-0.2912044).value(), -0.2912044);
    }

    #[test]
    fn test_from_dms_positive() {
        let c = Coordinate::from_dms(51, 29, 3.7572);
        let expected = 51.0 + 29.0 / 60.0 + 3.7572 / 3600.0;
        assert!((c.value() - expected).abs() < 1e-12);
    }

    #[test]
    fn test_from_dms_negative_degrees() {
        let c = Coordinate::from_dms(-58, 22, 11.9994);
        let expected = -(58.0 + 22.0 / 60.0 + 11.9994 / 3600.0);
        assert!((c.value() - expected).abs() < 1e-12);
    }

    #[test]
    fn test_from_dms_sign_from_minutes_and_seconds() {
        let minutes = Coordinate::from_dms(0, -17, 28.3338);
        assert!((minutes.value() + (17.0 / 60.0 + 28.3338 / 3600.0)).abs() < 1e-12);

        let seconds = Coordinate::from_dms(0, 0, -30.0);
        assert!((seconds.value() + 30.0 / 3600.0).abs() < 1e-12);

        let positive = Coordinate::from_dms(0, 17, 28.3338);
        assert!(positive.value() > 0.0);
    }

    #[test]
    fn test_try_from_dms_rejects_out_of_range() {
        assert!(Coordinate::try_from_dms(10, 60, 0.0).is_err());
        assert!(Coordinate::try_from_dms(10, 0, 60.0).is_err());
        assert!(Coordinate::try_from_dms(10, 0, f64::NAN).is_err());
        assert!(Coordinate::try_from_dms(10, 59, 59.999).is_ok());
    }

    #[test]
    fn test_degrees_minutes() {
        let c = Coordinate::from_degrees_minutes(51, 29.0626);
        assert!((c.value() - (51.0 + 29.0626 / 60.0)).abs() < 1e-12);

        let c = Coordinate::from_degrees_minutes(0, -17.47);
        assert!(c.value() < 0.0);
    }

    #[test]
    fn test_radians() {
        let c = Coordinate::from_radians(std::f64::consts::FRAC_PI_2);
        assert!((c.value() - 90.0).abs() < 1e-12);
        assert!((c.to_radians() - std::f64::consts::FRAC_PI_2).abs() < 1e-15);
    }

    #[test]
    fn test_validated_ranges() {
        assert!(Coordinate::latitude(90.0).is_ok());
        assert!(Coordinate::latitude(-90.0).is_ok());
        assert_eq!(Coordinate::latitude(90.5), Err(GeoError::InvalidLatitude(90.5)));
        assert!(Coordinate::latitude(f64::NAN).is_err());

        assert!(Coordinate::longitude(180.0).is_ok());
        assert!(Coordinate::longitude(-181.0).is_err());
        assert!(Coordinate::longitude(f64::INFINITY).is_err());
    }

    #[test]
    fn test_to_dms_recovers_components() {
        let dms = Coordinate::from_dms(-34, 36, 35.9994).to_dms();
        assert!(dms.negative);
        assert_eq!(dms.degrees, 34);
        assert_eq!(dms.minutes, 36);
        assert!((dms.seconds - 35.9994).abs() < 1e-6);

        let back = Coordinate::from(dms);
        assert!((back.value() - Coordinate::from_dms(-34, 36, 35.9994).value()).abs() < 1e-12);
    }

    #[test]
    fn test_display() {
        let dms = Coordinate::from_dms(51, 29, 3.7572).to_dms();
        assert_eq!(dms.to_string(), "51° 29' 3.7572\"");
    }
}
