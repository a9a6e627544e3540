//! Normalized parking records produced by the route collection pipeline.
//!
//! Attribute fields are plain strings with `""` meaning "not reported by the
//! source". OpenStreetMap tag values are free-form text (`"yes"`, `"no"`,
//! `"2 hours"`, numeric strings), so no further typing is attempted here;
//! the empty-string convention is what the coalesce merge keys off.

use serde::{Deserialize, Serialize};

/// A (longitude, latitude) pair in degrees.
///
/// Serialized on the wire as a two-element JSON array `[lon, lat]`.
/// Distances over coordinates are plain Euclidean deltas in degree-space,
/// not geodesic — sufficient for the sub-kilometer buffers used here.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct Coordinate {
    pub lon: f64,
    pub lat: f64,
}

impl Coordinate {
    #[must_use]
    pub fn new(lon: f64, lat: f64) -> Self {
        Self { lon, lat }
    }

    /// Both components are finite (not NaN or infinite).
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.lon.is_finite() && self.lat.is_finite()
    }
}

impl From<[f64; 2]> for Coordinate {
    fn from(pair: [f64; 2]) -> Self {
        Self {
            lon: pair[0],
            lat: pair[1],
        }
    }
}

impl From<Coordinate> for [f64; 2] {
    fn from(coord: Coordinate) -> Self {
        [coord.lon, coord.lat]
    }
}

/// A parking facility normalized from one Overpass element.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParkingRecord {
    /// Overpass element ID as a string.
    pub id: String,
    /// Element center when the source reports one, otherwise the sampled
    /// route point whose query returned the element.
    pub location: Coordinate,
    /// Overpass element type (`"way"` in practice; nodes from the skeleton
    /// pass carry no tags and are filtered out before normalization).
    #[serde(rename = "type")]
    pub element_type: String,
    pub parking: ParkingAttributes,
}

/// Parking-specific attributes lifted from an element's tag map.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParkingAttributes {
    /// Parking kind (`surface`, `parallel`, `multi-storey`, ...).
    #[serde(rename = "type")]
    pub kind: String,
    pub access: String,
    pub fee: String,
    pub maxstay: String,
    pub capacity: String,
    /// Count of disabled-accessible spaces (`capacity:disabled` tag).
    pub disabled: String,
    pub surface: String,
    pub lanes: LaneDetails,
}

/// Street-side parking lane tags (`parking:lane:left/right/both`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LaneDetails {
    pub left: String,
    pub right: String,
    pub both: String,
}

impl ParkingAttributes {
    /// Fill every empty field of `self` with the corresponding non-empty
    /// field of `other`. Populated fields are never overwritten, so when two
    /// records disagree on a field the earlier one silently wins. That is a
    /// known latent weakness of the merge (no quality or recency
    /// tie-breaking); tests pin the behavior rather than change it.
    pub fn coalesce_from(&mut self, other: &ParkingAttributes) {
        coalesce_field(&mut self.kind, &other.kind);
        coalesce_field(&mut self.access, &other.access);
        coalesce_field(&mut self.fee, &other.fee);
        coalesce_field(&mut self.maxstay, &other.maxstay);
        coalesce_field(&mut self.capacity, &other.capacity);
        coalesce_field(&mut self.disabled, &other.disabled);
        coalesce_field(&mut self.surface, &other.surface);
        coalesce_field(&mut self.lanes.left, &other.lanes.left);
        coalesce_field(&mut self.lanes.right, &other.lanes.right);
        coalesce_field(&mut self.lanes.both, &other.lanes.both);
    }
}

fn coalesce_field(base: &mut String, other: &str) {
    if base.is_empty() && !other.is_empty() {
        *base = other.to_owned();
    }
}

/// Aggregate counts over a pipeline result, by parking kind.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct ParkingSummary {
    pub total_spots: usize,
    pub types: ParkingTypeCounts,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct ParkingTypeCounts {
    pub parallel: usize,
    pub surface: usize,
    pub other: usize,
}

/// Count records by parking kind for the summary endpoint.
#[must_use]
pub fn summarize_parking(records: &[ParkingRecord]) -> ParkingSummary {
    let parallel = records
        .iter()
        .filter(|r| r.parking.kind == "parallel")
        .count();
    let surface = records
        .iter()
        .filter(|r| r.parking.kind == "surface")
        .count();
    ParkingSummary {
        total_spots: records.len(),
        types: ParkingTypeCounts {
            parallel,
            surface,
            other: records.len() - parallel - surface,
        },
    }
}

/// Render records as numbered plain-text lines for the rulebook collaborator.
///
/// Only non-empty fields are mentioned; a record with no reported attributes
/// still gets its numbered line so counts stay aligned with the record list.
#[must_use]
pub fn parking_prompt(records: &[ParkingRecord]) -> String {
    records
        .iter()
        .enumerate()
        .map(|(i, record)| {
            let p = &record.parking;
            let mut details = Vec::new();
            if !p.kind.is_empty() {
                details.push(format!("Type: {}", p.kind));
            }
            if !p.access.is_empty() {
                details.push(format!("Access: {}", p.access));
            }
            if !p.fee.is_empty() {
                details.push(format!("Fee: {}", p.fee));
            }
            if !p.maxstay.is_empty() {
                details.push(format!("Maximum stay: {}", p.maxstay));
            }
            format!("Parking Spot {}: {}", i + 1, details.join(", "))
        })
        .collect::<Vec<_>>()
        .join("\n")
}
