//! Route parking collection pipeline.
//!
//! Ties sampler → query → fetch → normalize → merge together. One call is
//! one run; the identifier set and record accumulator live on the stack of
//! that call, so concurrent runs never share state.

use std::collections::HashSet;

use curbside_core::{Coordinate, ParkingRecord};

use crate::client::OverpassClient;
use crate::error::OverpassError;
use crate::geo::BoundingBox;
use crate::merge::dedupe_and_merge;
use crate::normalize::normalize_element;
use crate::query::parking_query;
use crate::sample::sample_route;
use crate::types::OverpassElement;

/// Collect parking facilities along a route.
///
/// Sampled points are queried sequentially, one interpreter round-trip per
/// point. A failed point is logged and skipped; the run always completes
/// over the remaining points, so the worst network outcome is an empty
/// result, never an error. An empty route yields an empty result.
///
/// Within a run each element ID is normalized at most once, regardless of
/// how many bbox queries return it; the final location-based merge then
/// collapses records from distinct elements that resolve to the same place.
///
/// # Errors
///
/// Returns [`OverpassError::InvalidRoute`] when a coordinate is non-finite
/// or `buffer_degrees` is not a positive finite number. Network failures of
/// individual points are not errors.
pub async fn collect_route_parking(
    client: &OverpassClient,
    route: &[Coordinate],
    buffer_degrees: f64,
) -> Result<Vec<ParkingRecord>, OverpassError> {
    validate(route, buffer_degrees)?;

    let sampled = sample_route(route);

    // Fetch phase: every sampled point gets its outcome recorded, success
    // or failure, before any accumulation happens.
    let mut outcomes: Vec<(Coordinate, Result<Vec<OverpassElement>, OverpassError>)> =
        Vec::with_capacity(sampled.len());
    for point in sampled {
        let query = parking_query(&BoundingBox::around(point, buffer_degrees));
        outcomes.push((point, client.fetch_elements(&query).await));
    }

    // Accumulation phase: partition outcomes, normalize successes, log and
    // drop failures.
    let mut processed_ids: HashSet<i64> = HashSet::new();
    let mut records: Vec<ParkingRecord> = Vec::new();
    let mut failed_points = 0usize;

    for (point, outcome) in outcomes {
        match outcome {
            Ok(elements) => {
                for element in elements {
                    if processed_ids.insert(element.id) {
                        if let Some(record) = normalize_element(&element, point) {
                            records.push(record);
                        }
                    }
                }
            }
            Err(error) => {
                failed_points += 1;
                tracing::warn!(
                    lon = point.lon,
                    lat = point.lat,
                    error = %error,
                    "skipping sample point after fetch failure"
                );
            }
        }
    }

    if failed_points > 0 {
        tracing::info!(failed_points, kept_records = records.len(), "partial route collection");
    }

    Ok(dedupe_and_merge(records))
}

fn validate(route: &[Coordinate], buffer_degrees: f64) -> Result<(), OverpassError> {
    if let Some(bad) = route.iter().find(|c| !c.is_finite()) {
        return Err(OverpassError::InvalidRoute {
            reason: format!("non-finite coordinate ({}, {})", bad.lon, bad.lat),
        });
    }
    if !buffer_degrees.is_finite() || buffer_degrees <= 0.0 {
        return Err(OverpassError::InvalidRoute {
            reason: format!("buffer must be a positive finite number of degrees, got {buffer_degrees}"),
        });
    }
    Ok(())
}
