//! Spherical Earth calculations.
//!
//! Distance uses the spherical law of cosines, bearing and destination use the
//! standard great-circle formulas. Everything here is a pure function over
//! [`Point`] values; the only parameter is the sphere radius, which defaults to
//! the Earth's mean radius.

use crate::{BoundingArea, GeoError, Point, Result};
use serde::{Deserialize, Serialize};
use std::f64::consts::{FRAC_PI_2, PI, TAU};
use tracing::debug;

/// Earth's mean radius in meters (6371.01 km).
pub const EARTH_RADIUS_M: f64 = 6_371_010.0;

/// WGS84 equatorial radius in meters.
pub const WGS84_EQUATORIAL_RADIUS_M: f64 = 6_378_137.0;

/// A sphere to run calculations on.
///
/// The free functions in this module use [`Sphere::EARTH`]; construct a
/// different sphere to trade the mean radius for another model.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sphere {
    /// Radius in meters
    pub radius_m: f64,
}

impl Default for Sphere {
    fn default() -> Self {
        Self::EARTH
    }
}

impl Sphere {
    /// The Earth with its mean radius.
    pub const EARTH: Sphere = Sphere {
        radius_m: EARTH_RADIUS_M,
    };

    /// The Earth with the WGS84 equatorial radius.
    pub const WGS84_EQUATORIAL: Sphere = Sphere {
        radius_m: WGS84_EQUATORIAL_RADIUS_M,
    };

    /// Creates a sphere, rejecting non-finite or non-positive radii.
    pub fn new(radius_m: f64) -> Result<Self> {
        let sphere = Self { radius_m };
        sphere.validate()?;
        Ok(sphere)
    }

    /// Validates a sphere that was built from configuration.
    pub fn validate(&self) -> Result<()> {
        if self.radius_m.is_finite() && self.radius_m > 0.0 {
            Ok(())
        } else {
            Err(GeoError::InvalidRadius(self.radius_m))
        }
    }

    /// Great-circle distance in meters.
    pub fn distance(&self, from: &Point, to: &Point) -> f64 {
        if from == to {
            return 0.0;
        }

        let (lat1, lng1) = from.to_radians();
        let (lat2, lng2) = to.to_radians();

        // Rounding can push the cosine just past ±1 for near-identical points.
        let cos_angle = (lat1.sin() * lat2.sin() + lat1.cos() * lat2.cos() * (lng1 - lng2).cos())
            .clamp(-1.0, 1.0);

        self.radius_m * cos_angle.acos()
    }

    /// Point reached by travelling `distance_m` meters from `origin` along
    /// the great circle with initial bearing `bearing_deg`.
    ///
    /// The resulting longitude is wrapped into -180..=180.
    pub fn destination(&self, origin: &Point, bearing_deg: f64, distance_m: f64) -> Point {
        if distance_m == 0.0 {
            return *origin;
        }

        let (lat1, lng1) = origin.to_radians();
        let theta = bearing_deg.to_radians();
        let delta = distance_m / self.radius_m;

        let lat2 = (lat1.sin() * delta.cos() + lat1.cos() * delta.sin() * theta.cos())
            .clamp(-1.0, 1.0)
            .asin();
        let lng2 = lng1
            + (theta.sin() * delta.sin() * lat1.cos()).atan2(delta.cos() - lat1.sin() * lat2.sin());

        Point::from_degrees(lat2.to_degrees(), normalize_longitude(lng2.to_degrees()))
    }

    /// Rectangle whose north-east and south-west corners lie `radius_m`
    /// meters from `center` on the 45° and 225° bearings.
    ///
    /// The corners are exact; the edge midpoints end up roughly
    /// `radius_m / √2` from the center, so this does not enclose the whole
    /// circle. Use [`Sphere::enclosing_area`] when it must.
    ///
    /// If the circle reaches a pole the area spans every longitude and is
    /// clamped to that pole.
    pub fn bounding_area(&self, center: &Point, radius_m: f64) -> BoundingArea {
        if let Some(area) = self.polar_area(center, radius_m) {
            return area;
        }

        BoundingArea::new(
            self.destination(center, 45.0, radius_m),
            self.destination(center, 225.0, radius_m),
        )
    }

    /// Smallest lat/lng rectangle containing every point within `radius_m`
    /// meters of `center`.
    ///
    /// The longitude half-width is `asin(sin δ / cos φ)`, which widens the
    /// box away from the equator. Longitudes are wrapped, so the result
    /// crosses the antimeridian when the circle does.
    pub fn enclosing_area(&self, center: &Point, radius_m: f64) -> BoundingArea {
        if let Some(area) = self.polar_area(center, radius_m) {
            return area;
        }

        let (lat, lng) = center.to_radians();
        let delta = radius_m / self.radius_m;

        let d_lng = (delta.sin() / lat.cos()).clamp(-1.0, 1.0).asin();

        BoundingArea::new(
            Point::from_radians(lat + delta, normalize_radians(lng + d_lng)),
            Point::from_radians(lat - delta, normalize_radians(lng - d_lng)),
        )
    }

    /// Full-longitude band for circles that reach a pole, `None` otherwise.
    fn polar_area(&self, center: &Point, radius_m: f64) -> Option<BoundingArea> {
        let (lat, _) = center.to_radians();
        let delta = radius_m / self.radius_m;
        let lat_max = lat + delta;
        let lat_min = lat - delta;

        if lat_max < FRAC_PI_2 && lat_min > -FRAC_PI_2 {
            return None;
        }

        debug!(
            latitude = center.latitude(),
            radius_m,
            "Radius reaches a pole, spanning all longitudes"
        );

        let north = lat_max.min(FRAC_PI_2).to_degrees();
        let south = lat_min.max(-FRAC_PI_2).to_degrees();

        Some(BoundingArea::new(
            Point::from_degrees(north, 180.0),
            Point::from_degrees(south, -180.0),
        ))
    }
}

/// Great-circle distance in meters on the mean-radius Earth.
///
/// # Example
/// ```
/// use geocalc::{distance, Point};
///
/// let kew = Point::from_degrees(51.4843774, -0.2912044);
/// let richmond = Point::from_degrees(51.4613418, -0.3035466);
///
/// assert!((distance(&kew, &richmond) - 2700.326).abs() < 0.01);
/// ```
#[inline]
pub fn distance(from: &Point, to: &Point) -> f64 {
    Sphere::EARTH.distance(from, to)
}

/// Initial bearing in degrees, in `[0, 360)`, from `from` towards `to`.
///
/// The bearing does not depend on the sphere radius.
pub fn bearing(from: &Point, to: &Point) -> f64 {
    let (lat1, lng1) = from.to_radians();
    let (lat2, lng2) = to.to_radians();
    let d_lng = lng2 - lng1;

    let y = d_lng.sin() * lat2.cos();
    let x = lat1.cos() * lat2.sin() - lat1.sin() * lat2.cos() * d_lng.cos();

    (y.atan2(x).to_degrees() + 360.0) % 360.0
}

/// Destination point on the mean-radius Earth. See [`Sphere::destination`].
#[inline]
pub fn destination(origin: &Point, bearing_deg: f64, distance_m: f64) -> Point {
    Sphere::EARTH.destination(origin, bearing_deg, distance_m)
}

/// Bounding area on the mean-radius Earth. See [`Sphere::bounding_area`].
#[inline]
pub fn bounding_area(center: &Point, radius_m: f64) -> BoundingArea {
    Sphere::EARTH.bounding_area(center, radius_m)
}

/// Enclosing area on the mean-radius Earth. See [`Sphere::enclosing_area`].
#[inline]
pub fn enclosing_area(center: &Point, radius_m: f64) -> BoundingArea {
    Sphere::EARTH.enclosing_area(center, radius_m)
}

/// Wraps a longitude in degrees into -180..=180. In-range values are
/// returned unchanged.
#[inline]
pub fn normalize_longitude(lng: f64) -> f64 {
    if (-180.0..=180.0).contains(&lng) {
        lng
    } else {
        (lng + 540.0).rem_euclid(360.0) - 180.0
    }
}

#[inline]
fn normalize_radians(lng: f64) -> f64 {
    if (-PI..=PI).contains(&lng) {
        lng
    } else {
        (lng + 3.0 * PI).rem_euclid(TAU) - PI
    }
}
