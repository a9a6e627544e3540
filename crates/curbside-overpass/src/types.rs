//! Overpass API response types for the `/api/interpreter` endpoint.
//!
//! ## Observed shape
//!
//! The interpreter answers `[out:json]` queries with an envelope of the form
//! `{"version": ..., "generator": ..., "elements": [...]}`. Only `elements`
//! matters here; the rest is ignored by serde.
//!
//! ### `center`
//! Present on ways only when the query requests geometry (our queries do,
//! via the `>; out skel qt;` pass). Nodes carry `lat`/`lon` directly but no
//! `center`; for them normalization falls back to the sampled query point.
//!
//! ### `tags`
//! Absent entirely on skeleton nodes, hence `#[serde(default)]`. Keys and
//! values are free-form OSM text.

use std::collections::HashMap;

use serde::Deserialize;

/// Top-level interpreter response.
#[derive(Debug, Deserialize)]
pub struct OverpassResponse {
    #[serde(default)]
    pub elements: Vec<OverpassElement>,
}

/// One element (way or node) from an interpreter response.
#[derive(Debug, Clone, Deserialize)]
pub struct OverpassElement {
    /// OSM element ID. Unique per element type, stable across responses.
    pub id: i64,

    /// Element type: `"way"`, `"node"`, or `"relation"`.
    #[serde(rename = "type")]
    pub element_type: String,

    /// Computed center point. Present for ways with geometry, absent for
    /// skeleton nodes.
    #[serde(default)]
    pub center: Option<OverpassCenter>,

    /// Tag map. Absent on skeleton elements — defaults to empty.
    #[serde(default)]
    pub tags: HashMap<String, String>,
}

/// Computed center of a way.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct OverpassCenter {
    pub lon: f64,
    pub lat: f64,
}
