//! Batch distance calculations with optional parallelism.
//!
//! Proximity search over many located items: plain distance lists, sorted
//! nearest-first lists, and radius queries that prefilter candidates with an
//! enclosing lat/lng rectangle before computing exact distances.

use crate::{GeoError, Point, Result, Sphere};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

/// Result of a distance calculation for a single item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DistanceResult {
    /// The item ID
    pub id: i64,
    /// Distance in meters (Infinity if the item's point is invalid)
    pub distance: f64,
}

/// Input item for batch distance calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocatedItem {
    /// Item ID
    pub id: i64,
    /// Item location
    pub point: Point,
}

impl LocatedItem {
    pub fn new(id: i64, point: impl Into<Point>) -> Self {
        Self {
            id,
            point: point.into(),
        }
    }
}

/// Options for [`search`].
///
/// Deserializable so callers can load it from their own configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchOptions {
    /// Only keep items within this many meters (None for all)
    pub radius_m: Option<f64>,
    /// Maximum number of results to return (None for all)
    pub max_results: Option<usize>,
    /// Sphere used for distances
    pub sphere: Sphere,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            radius_m: None,
            max_results: None,
            sphere: Sphere::EARTH,
        }
    }
}

impl SearchOptions {
    /// Checks the radius and the sphere.
    pub fn validate(&self) -> Result<()> {
        if let Some(radius) = self.radius_m {
            if !radius.is_finite() || radius < 0.0 {
                return Err(GeoError::InvalidRadius(radius));
            }
        }
        self.sphere.validate()
    }
}

/// Calculate distances in meters from an origin to multiple items.
///
/// Items with an invalid point get an infinite distance.
///
/// # Example
/// ```
/// use geocalc::{calculate_distances, batch::LocatedItem, Point};
///
/// let items = vec![
///     LocatedItem::new(1, (52.5200, 13.4050)),
///     LocatedItem::new(2, (48.8566, 2.3522)),
/// ];
///
/// let results = calculate_distances(&Point::from_degrees(50.0, 10.0), &items);
/// assert_eq!(results.len(), 2);
/// ```
pub fn calculate_distances(origin: &Point, items: &[LocatedItem]) -> Vec<DistanceResult> {
    distances_on(&Sphere::EARTH, origin, items)
}

/// Calculate distances and return items sorted by distance (closest first).
pub fn calculate_distances_sorted(
    origin: &Point,
    items: &[LocatedItem],
    max_results: Option<usize>,
) -> Vec<DistanceResult> {
    let mut results = calculate_distances(origin, items);
    sort_and_truncate(&mut results, max_results);
    results
}

/// Calculate distances for items within `radius_m` meters, sorted by
/// distance.
///
/// Candidates outside the circle's enclosing rectangle are skipped without
/// computing a distance.
pub fn calculate_distances_within_radius(
    origin: &Point,
    items: &[LocatedItem],
    radius_m: f64,
) -> Vec<DistanceResult> {
    let mut results = within_radius_on(&Sphere::EARTH, origin, items, radius_m);
    sort_and_truncate(&mut results, None);
    results
}

/// Run a proximity search described by `options`.
///
/// # Errors
/// Returns [`GeoError::InvalidRadius`] if the options do not validate.
pub fn search(
    origin: &Point,
    items: &[LocatedItem],
    options: &SearchOptions,
) -> Result<Vec<DistanceResult>> {
    options.validate()?;

    let mut results = match options.radius_m {
        Some(radius) => within_radius_on(&options.sphere, origin, items, radius),
        None => distances_on(&options.sphere, origin, items),
    };
    sort_and_truncate(&mut results, options.max_results);

    trace!(
        origin = %origin,
        returned = results.len(),
        "Proximity search finished"
    );
    Ok(results)
}

fn distances_on(sphere: &Sphere, origin: &Point, items: &[LocatedItem]) -> Vec<DistanceResult> {
    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;
        items
            .par_iter()
            .map(|item| calculate_single_distance(sphere, origin, item))
            .collect()
    }

    #[cfg(not(feature = "parallel"))]
    {
        items
            .iter()
            .map(|item| calculate_single_distance(sphere, origin, item))
            .collect()
    }
}

fn within_radius_on(
    sphere: &Sphere,
    origin: &Point,
    items: &[LocatedItem],
    radius_m: f64,
) -> Vec<DistanceResult> {
    let area = sphere.enclosing_area(origin, radius_m);
    let keep = |item: &LocatedItem| -> Option<DistanceResult> {
        if !area.contains(&item.point) {
            return None;
        }
        let result = calculate_single_distance(sphere, origin, item);
        (result.distance <= radius_m).then_some(result)
    };

    #[cfg(feature = "parallel")]
    let results: Vec<DistanceResult> = {
        use rayon::prelude::*;
        items.par_iter().filter_map(keep).collect()
    };

    #[cfg(not(feature = "parallel"))]
    let results: Vec<DistanceResult> = items.iter().filter_map(keep).collect();

    debug!(
        candidates = items.len(),
        matched = results.len(),
        radius_m,
        "Radius search complete"
    );
    results
}

fn sort_and_truncate(results: &mut Vec<DistanceResult>, max_results: Option<usize>) {
    // Infinity (invalid points) sorts last
    results.sort_by(|a, b| a.distance.total_cmp(&b.distance));

    if let Some(max) = max_results {
        results.truncate(max);
    }
}

/// Calculate distance for a single item.
#[inline]
fn calculate_single_distance(sphere: &Sphere, origin: &Point, item: &LocatedItem) -> DistanceResult {
    let distance = if item.point.is_valid() {
        sphere.distance(origin, &item.point)
    } else {
        f64::INFINITY
    };

    DistanceResult {
        id: item.id,
        distance,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FRANKFURT: Point = Point::from_degrees(50.1109, 8.6821);

    fn create_test_items() -> Vec<LocatedItem> {
        vec![
            // Berlin
            LocatedItem::new(1, (52.5200, 13.4050)),
            // Paris
            LocatedItem::new(2, (48.8566, 2.3522)),
            // London
            LocatedItem::new(3, (51.5074, -0.1276)),
            // Invalid location
            LocatedItem::new(4, (123.0, 0.0)),
        ]
    }

    #[test]
    fn test_batch_distances() {
        let items = create_test_items();
        let results = calculate_distances(&FRANKFURT, &items);

        assert_eq!(results.len(), 4);

        let berlin = results.iter().find(|r| r.id == 1).unwrap();
        assert!(berlin.distance > 400_000.0 && berlin.distance < 450_000.0);

        let invalid = results.iter().find(|r| r.id == 4).unwrap();
        assert!(invalid.distance.is_infinite());
    }

    #[test]
    fn test_sorted_distances() {
        let items = create_test_items();
        let results = calculate_distances_sorted(&FRANKFURT, &items, None);

        let ids: Vec<i64> = results.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4]);
        for window in results.windows(2) {
            assert!(window[0].distance <= window[1].distance);
        }
    }

    #[test]
    fn test_max_results() {
        let items = create_test_items();
        let results = calculate_distances_sorted(&FRANKFURT, &items, Some(2));
        assert_eq!(results.len(), 2);
    }

    #[test]
    fn test_radius_filter() {
        let items = create_test_items();
        // Berlin (~424 km) is in, Paris (~479 km) and London (~637 km) are out
        let results = calculate_distances_within_radius(&FRANKFURT, &items, 450_000.0);

        assert_eq!(results.len(), 1);
        assert_eq!(results[0].id, 1);
        assert!(results.iter().all(|r| r.distance <= 450_000.0));
    }

    #[test]
    fn test_radius_filter_across_antimeridian() {
        let origin = Point::from_degrees(-17.0, 179.9);
        let items = vec![
            LocatedItem::new(1, (-17.0, -179.9)),
            LocatedItem::new(2, (-17.0, 179.8)),
            LocatedItem::new(3, (-17.0, 170.0)),
        ];

        let results = calculate_distances_within_radius(&origin, &items, 30_000.0);
        let ids: Vec<i64> = results.iter().map(|r| r.id).collect();
        assert_eq!(ids.len(), 2);
        assert!(ids.contains(&1) && ids.contains(&2));
    }

    #[test]
    fn test_radius_filter_at_pole() {
        let items = vec![
            LocatedItem::new(1, (89.95, 0.0)),
            LocatedItem::new(2, (89.95, 180.0)),
            LocatedItem::new(3, (80.0, 0.0)),
        ];

        let results = calculate_distances_within_radius(&Point::from_degrees(90.0, 0.0), &items, 10_000.0);
        assert_eq!(results.len(), 2);
    }

    #[test]
    fn test_search_with_options() {
        let items = create_test_items();
        let options = SearchOptions {
            radius_m: Some(700_000.0),
            max_results: Some(2),
            ..Default::default()
        };

        let results = search(&FRANKFURT, &items, &options).unwrap();
        assert_eq!(results.iter().map(|r| r.id).collect::<Vec<_>>(), vec![1, 2]);
    }

    #[test]
    fn test_search_rejects_bad_radius() {
        let options = SearchOptions {
            radius_m: Some(-1.0),
            ..Default::default()
        };
        let err = search(&FRANKFURT, &[], &options).unwrap_err();
        assert_eq!(err, GeoError::InvalidRadius(-1.0));
    }

    #[test]
    fn test_options_from_json() {
        let options: SearchOptions =
            serde_json::from_str(r#"{"radius_m": 5000.0, "sphere": {"radius_m": 6378137.0}}"#).unwrap();

        assert_eq!(options.radius_m, Some(5000.0));
        assert_eq!(options.max_results, None);
        assert_eq!(options.sphere, Sphere::WGS84_EQUATORIAL);
        assert!(options.validate().is_ok());
    }
}
