//! Latitude/longitude aligned rectangles.

use crate::Point;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A rectangle described by its north-east and south-west corners.
///
/// When the rectangle crosses the antimeridian the north-east longitude is
/// smaller than the south-west one; [`BoundingArea::contains`] accounts for
/// that wrap.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingArea {
    north_east: Point,
    south_west: Point,
}

impl BoundingArea {
    /// Creates an area from its north-east and south-west corners.
    #[inline]
    pub const fn new(north_east: Point, south_west: Point) -> Self {
        Self {
            north_east,
            south_west,
        }
    }

    #[inline]
    pub const fn north_east(&self) -> Point {
        self.north_east
    }

    #[inline]
    pub const fn south_west(&self) -> Point {
        self.south_west
    }

    /// North-west corner: north-east latitude, south-west longitude.
    #[inline]
    pub const fn north_west(&self) -> Point {
        Point::from_degrees(self.north_east.latitude(), self.south_west.longitude())
    }

    /// South-east corner: south-west latitude, north-east longitude.
    #[inline]
    pub const fn south_east(&self) -> Point {
        Point::from_degrees(self.south_west.latitude(), self.north_east.longitude())
    }

    /// Returns true when the longitude range wraps through ±180°.
    #[inline]
    pub fn crosses_antimeridian(&self) -> bool {
        self.north_east.longitude() < self.south_west.longitude()
    }

    /// Returns true if the point lies inside the rectangle or on its edge.
    pub fn contains(&self, point: &Point) -> bool {
        let lat = point.latitude();
        if lat < self.south_west.latitude() || lat > self.north_east.latitude() {
            return false;
        }

        let lng = point.longitude();
        let west = self.south_west.longitude();
        let east = self.north_east.longitude();
        if self.crosses_antimeridian() {
            lng >= west || lng <= east
        } else {
            lng >= west && lng <= east
        }
    }
}

impl fmt::Display for BoundingArea {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NE {} / SW {}", self.north_east, self.south_west)
    }
}
