//! Overpass QL query construction.

use crate::geo::BoundingBox;

/// Render the parking query for one bounding box.
///
/// Requests ways carrying any of the three parking tag families, with full
/// geometry (`out body`) followed by a skeleton pass (`>; out skel qt;`) so
/// the server can compute way centers. Bbox values are numeric by
/// construction, so no escaping is needed.
///
/// Overpass QL order is (south, west, north, east), i.e. latitudes first.
#[must_use]
pub fn parking_query(bbox: &BoundingBox) -> String {
    let bounds = format!(
        "{},{},{},{}",
        bbox.min_lat, bbox.min_lon, bbox.max_lat, bbox.max_lon
    );
    format!(
        "[out:json][timeout:25];\n\
         (\n\
           way({bounds})[\"amenity\"=\"parking\"];\n\
           way({bounds})[\"parking\"];\n\
           way({bounds})[\"parking:lane\"];\n\
         );\n\
         out body;\n\
         >;\n\
         out skel qt;\n"
    )
}
