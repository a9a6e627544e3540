//! Degree-space geometry helpers.
//!
//! All distances here are plain Euclidean deltas over (lon, lat) pairs, not
//! geodesic. At the sub-kilometer scales the sampler and dedup work with,
//! the error against true ground distance does not change any decision.

use curbside_core::Coordinate;

/// Scale factor for rounding locations to 5 decimal places (~1m).
const LOCATION_KEY_SCALE: f64 = 100_000.0;

/// Euclidean distance between two coordinates, in degrees.
#[must_use]
pub fn distance(a: Coordinate, b: Coordinate) -> f64 {
    ((a.lon - b.lon).powi(2) + (a.lat - b.lat).powi(2)).sqrt()
}

/// Rectangular query region as (min, max) longitude and latitude.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub min_lon: f64,
    pub min_lat: f64,
    pub max_lon: f64,
    pub max_lat: f64,
}

impl BoundingBox {
    /// Box of `buffer` degrees on each side of `center`.
    #[must_use]
    pub fn around(center: Coordinate, buffer: f64) -> Self {
        Self {
            min_lon: center.lon - buffer,
            min_lat: center.lat - buffer,
            max_lon: center.lon + buffer,
            max_lat: center.lat + buffer,
        }
    }
}

/// Location rounded to 5 decimal places, as an integer pair usable as a
/// hash key. Two records with the same key are "the same place" for dedup.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn rounded_location(coord: Coordinate) -> (i64, i64) {
    (
        (coord.lon * LOCATION_KEY_SCALE).round() as i64,
        (coord.lat * LOCATION_KEY_SCALE).round() as i64,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distance_is_euclidean_in_degrees() {
        let a = Coordinate::new(0.0, 0.0);
        let b = Coordinate::new(3.0, 4.0);
        assert!((distance(a, b) - 5.0).abs() < 1e-12);
    }

    #[test]
    fn distance_is_symmetric() {
        let a = Coordinate::new(-0.1, 51.5);
        let b = Coordinate::new(-0.2, 51.6);
        assert!((distance(a, b) - distance(b, a)).abs() < 1e-12);
    }

    #[test]
    fn bounding_box_around_is_symmetric_about_center() {
        let bbox = BoundingBox::around(Coordinate::new(1.0, 2.0), 0.002);
        assert!((bbox.min_lon - 0.998).abs() < 1e-12);
        assert!((bbox.max_lon - 1.002).abs() < 1e-12);
        assert!((bbox.min_lat - 1.998).abs() < 1e-12);
        assert!((bbox.max_lat - 2.002).abs() < 1e-12);
    }

    #[test]
    fn rounded_location_merges_within_five_decimals() {
        let a = rounded_location(Coordinate::new(1.000_001, 2.000_002));
        let b = rounded_location(Coordinate::new(1.000_003, 2.000_001));
        assert_eq!(a, b);
    }

    #[test]
    fn rounded_location_separates_beyond_five_decimals() {
        let a = rounded_location(Coordinate::new(1.000_00, 2.0));
        let b = rounded_location(Coordinate::new(1.000_06, 2.0));
        assert_ne!(a, b);
    }
}
