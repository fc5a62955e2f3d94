//! Spherical Earth geometry.
//!
//! This crate provides:
//! - Coordinates from decimal degrees, radians, degrees/decimal minutes or DMS
//! - Great-circle distance, initial bearing and destination point
//! - Bounding areas around a point, including at the poles and across the antimeridian
//! - Batch proximity search with optional parallelism
//!
//! # Example
//!
//! ```
//! use geocalc::{bearing, bounding_area, destination, distance, Coordinate, Point};
//!
//! let kew = Point::new(Coordinate::from_degrees(51.4843774), Coordinate::from_degrees(-0.2912044));
//! let richmond = Point::from_degrees(51.4613418, -0.3035466);
//!
//! let meters = distance(&kew, &richmond);
//! assert!((meters - 2700.326).abs() < 0.01);
//!
//! let there = destination(&kew, bearing(&kew, &richmond), meters);
//! assert!((there.latitude() - richmond.latitude()).abs() < 1e-6);
//!
//! let area = bounding_area(&kew, 3000.0);
//! assert!((distance(&kew, &area.north_east()) - 3000.0).abs() < 1e-3);
//! ```

mod area;
mod calc;
mod coordinate;
mod error;
mod point;
pub mod batch;

pub use area::BoundingArea;
pub use batch::{calculate_distances, search, DistanceResult, SearchOptions};
pub use calc::{
    bearing, bounding_area, destination, distance, enclosing_area, normalize_longitude, Sphere,
    EARTH_RADIUS_M, WGS84_EQUATORIAL_RADIUS_M,
};
pub use coordinate::{Coordinate, Dms};
pub use error::{GeoError, GeoErrorCode, Result};
pub use point::Point;
