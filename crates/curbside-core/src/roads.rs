//! Road-network descriptions submitted by the frontend.
//!
//! A network groups named roads by UK road class. The maps are `BTreeMap` so
//! report output is sorted by road name without an extra sort pass.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A user-supplied road network, keyed by class then road name.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RoadNetwork {
    #[serde(default)]
    pub motorways: BTreeMap<String, RoadAttributes>,
    #[serde(default, rename = "aRoads")]
    pub a_roads: BTreeMap<String, RoadAttributes>,
    #[serde(default, rename = "bRoads")]
    pub b_roads: BTreeMap<String, RoadAttributes>,
}

/// Per-road configuration. All fields optional on the wire; absent values
/// fall back to zero/false rather than failing the whole request.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RoadAttributes {
    /// Lane width in meters.
    #[serde(default)]
    pub width: f64,
    #[serde(default)]
    pub cycle_path: bool,
    /// Whether the road has street parking.
    #[serde(default)]
    pub parking: bool,
    /// Speed limit in mph.
    #[serde(default)]
    pub speed_limit: u32,
}

/// A road flattened to name + attributes, as emitted in report `rawData`.
#[derive(Debug, Clone, Serialize)]
pub struct RoadDetails {
    pub name: String,
    pub width: f64,
    pub cycle_path: bool,
    pub parking: bool,
    pub speed_limit: u32,
}

/// Structured report over a road network.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoadReport {
    pub major_roads: MajorRoads,
    pub raw_data: Vec<RoadDetails>,
    pub street_parking_available: bool,
    pub total_major_roads: usize,
}

/// Sorted road names per class.
#[derive(Debug, Serialize)]
pub struct MajorRoads {
    pub motorways: Vec<String>,
    #[serde(rename = "aRoads")]
    pub a_roads: Vec<String>,
    #[serde(rename = "bRoads")]
    pub b_roads: Vec<String>,
}

/// Per-class road counts.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct RouteSummary {
    pub total_roads: usize,
    pub road_types: RoadTypeCounts,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct RoadTypeCounts {
    pub motorways: usize,
    #[serde(rename = "aRoads")]
    pub a_roads: usize,
    #[serde(rename = "bRoads")]
    pub b_roads: usize,
}

impl RoadNetwork {
    fn all_roads(&self) -> impl Iterator<Item = (&String, &RoadAttributes)> {
        self.motorways
            .iter()
            .chain(self.a_roads.iter())
            .chain(self.b_roads.iter())
    }

    fn road_count(&self) -> usize {
        self.motorways.len() + self.a_roads.len() + self.b_roads.len()
    }
}

fn details(name: &str, attrs: &RoadAttributes) -> RoadDetails {
    RoadDetails {
        name: name.to_owned(),
        width: attrs.width,
        cycle_path: attrs.cycle_path,
        parking: attrs.parking,
        speed_limit: attrs.speed_limit,
    }
}

/// Render a network as natural-language sentences, one per road.
///
/// This is the plain-text description handed to the external rulebook
/// collaborator alongside a user query; it carries no markup.
#[must_use]
pub fn describe_network(network: &RoadNetwork) -> String {
    if network.road_count() == 0 {
        return "No road data available to generate a prompt.".to_owned();
    }

    network
        .all_roads()
        .map(|(name, attrs)| {
            let parking = if attrs.parking {
                "has street parking"
            } else {
                "does not have street parking"
            };
            let cycle = if attrs.cycle_path {
                "It includes a cycle path."
            } else {
                ""
            };
            format!(
                "{name} has a lane width of {width}m and {parking}. Speed limit is {limit}mph.{cycle}",
                width = attrs.width,
                limit = attrs.speed_limit,
            )
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Build the structured report for a network.
#[must_use]
pub fn network_report(network: &RoadNetwork) -> RoadReport {
    let raw_data = network
        .all_roads()
        .map(|(name, attrs)| details(name, attrs))
        .collect();

    RoadReport {
        major_roads: MajorRoads {
            motorways: network.motorways.keys().cloned().collect(),
            a_roads: network.a_roads.keys().cloned().collect(),
            b_roads: network.b_roads.keys().cloned().collect(),
        },
        raw_data,
        // A-roads are the class that carries street parking in this model.
        street_parking_available: !network.a_roads.is_empty(),
        total_major_roads: network.road_count(),
    }
}

/// Count roads per class.
#[must_use]
pub fn summarize_network(network: &RoadNetwork) -> RouteSummary {
    RouteSummary {
        total_roads: network.road_count(),
        road_types: RoadTypeCounts {
            motorways: network.motorways.len(),
            a_roads: network.a_roads.len(),
            b_roads: network.b_roads.len(),
        },
    }
}
