//! Adaptive route sampling.
//!
//! Reduces a route's coordinate list to the points worth querying. Point
//! density stands in for "urban": where consecutive route points cluster
//! tightly the sampler keeps more of them, on open stretches it keeps
//! fewer. This is a heuristic density reducer, not a real urban-area
//! classifier — a slow GPS trace on a rural road will read as "urban".

use curbside_core::Coordinate;

use crate::geo::distance;

/// Half-width of the window inspected around a candidate point.
const URBAN_WINDOW: usize = 5;

/// A window whose mean consecutive spacing is below this is "urban".
const URBAN_MEAN_SPACING_DEGREES: f64 = 0.001;

/// Minimum spacing between kept points in urban stretches (~200m).
const MIN_SAMPLE_SPACING_DEGREES: f64 = 0.002;

/// Non-urban stretches keep points 3x further apart.
const RURAL_SPACING_FACTOR: f64 = 3.0;

/// Reduce a route to a sparser subsequence of query points.
///
/// The first and last input points are always kept. An interior point is
/// kept only when its distance from the last kept point meets the minimum
/// spacing for its own urban/non-urban classification.
#[must_use]
pub fn sample_route(route: &[Coordinate]) -> Vec<Coordinate> {
    let mut sampled: Vec<Coordinate> = Vec::new();

    for (i, &coord) in route.iter().enumerate() {
        if i == 0 || i == route.len() - 1 {
            sampled.push(coord);
            continue;
        }

        let spacing = if is_urban_window(route, i) {
            MIN_SAMPLE_SPACING_DEGREES
        } else {
            MIN_SAMPLE_SPACING_DEGREES * RURAL_SPACING_FACTOR
        };

        match sampled.last() {
            Some(&last) if distance(last, coord) < spacing => {}
            _ => sampled.push(coord),
        }
    }

    sampled
}

/// Classify the window around `index` by mean consecutive point spacing.
///
/// Windows smaller than 3 points are non-urban by default: too little data
/// to call it clustering.
fn is_urban_window(route: &[Coordinate], index: usize) -> bool {
    let start = index.saturating_sub(URBAN_WINDOW);
    let end = (index + URBAN_WINDOW).min(route.len());
    let segment = &route[start..end];

    if segment.len() < 3 {
        return false;
    }

    let total: f64 = segment
        .windows(2)
        .map(|pair| distance(pair[0], pair[1]))
        .sum();
    #[allow(clippy::cast_precision_loss)]
    let mean = total / (segment.len() - 1) as f64;
    mean < URBAN_MEAN_SPACING_DEGREES
}
