//! Normalization from raw Overpass elements to [`curbside_core::ParkingRecord`].
//!
//! Tag lookups follow a fixed precedence per field: the most specific known
//! key first, then a generic synonym, then a default. The order is part of
//! the output contract and is pinned by tests.

use curbside_core::{Coordinate, LaneDetails, ParkingAttributes, ParkingRecord};

use crate::types::OverpassElement;

/// Normalize one element, or `None` when it carries no recognized parking
/// tag (`amenity`, `parking`, or any `parking:lane` key) — skeleton nodes
/// and unrelated ways fall out here.
///
/// Location prefers the element's own computed center; elements without one
/// inherit `query_point`, the sampled route coordinate whose bbox query
/// returned them.
#[must_use]
pub fn normalize_element(element: &OverpassElement, query_point: Coordinate) -> Option<ParkingRecord> {
    let tags = &element.tags;

    let recognized = tags
        .keys()
        .any(|key| key == "amenity" || key == "parking" || key.starts_with("parking:lane"));
    if !recognized {
        return None;
    }

    let tag = |key: &str| tags.get(key).map(String::as_str);
    let first_of = |keys: &[&str], default: &str| -> String {
        keys.iter()
            .find_map(|key| tag(key).filter(|v| !v.is_empty()))
            .unwrap_or(default)
            .to_owned()
    };

    let location = element
        .center
        .map_or(query_point, |center| Coordinate::new(center.lon, center.lat));

    Some(ParkingRecord {
        id: element.id.to_string(),
        location,
        element_type: element.element_type.clone(),
        parking: ParkingAttributes {
            kind: first_of(&["parking", "amenity"], ""),
            access: first_of(&["access"], "public"),
            fee: first_of(&["parking:fee", "fee"], "no"),
            maxstay: first_of(&["parking:maxstay", "maxstay"], ""),
            capacity: first_of(&["capacity"], ""),
            disabled: first_of(&["capacity:disabled"], ""),
            surface: first_of(&["surface"], ""),
            lanes: LaneDetails {
                left: first_of(&["parking:lane:left"], ""),
                right: first_of(&["parking:lane:right"], ""),
                both: first_of(&["parking:lane:both"], ""),
            },
        },
    })
}

#[cfg(test)]
mod tests {
    use crate::types::OverpassCenter;

    use super::*;

    fn element_with_tags(tags: &[(&str, &str)]) -> OverpassElement {
        OverpassElement {
            id: 42,
            element_type: "way".to_owned(),
            center: Some(OverpassCenter {
                lon: 10.0,
                lat: 50.0,
            }),
            tags: tags
                .iter()
                .map(|&(k, v)| (k.to_owned(), v.to_owned()))
                .collect(),
        }
    }

    fn origin() -> Coordinate {
        Coordinate::new(0.0, 0.0)
    }

    #[test]
    fn element_without_recognized_tags_is_dropped() {
        let element = element_with_tags(&[("highway", "residential"), ("surface", "asphalt")]);
        assert!(normalize_element(&element, origin()).is_none());
    }

    #[test]
    fn untagged_skeleton_element_is_dropped() {
        let element = OverpassElement {
            id: 7,
            element_type: "node".to_owned(),
            center: None,
            tags: std::collections::HashMap::new(),
        };
        assert!(normalize_element(&element, origin()).is_none());
    }

    #[test]
    fn parking_lane_family_key_is_recognized() {
        let element = element_with_tags(&[("parking:lane:left", "parallel")]);
        let record = normalize_element(&element, origin()).unwrap();
        assert_eq!(record.parking.lanes.left, "parallel");
    }

    #[test]
    fn id_becomes_string_and_type_carries_over() {
        let element = element_with_tags(&[("amenity", "parking")]);
        let record = normalize_element(&element, origin()).unwrap();
        assert_eq!(record.id, "42");
        assert_eq!(record.element_type, "way");
    }

    #[test]
    fn kind_prefers_parking_over_amenity() {
        let element = element_with_tags(&[("parking", "surface"), ("amenity", "parking")]);
        let record = normalize_element(&element, origin()).unwrap();
        assert_eq!(record.parking.kind, "surface");
    }

    #[test]
    fn kind_falls_back_to_amenity() {
        let element = element_with_tags(&[("amenity", "parking")]);
        let record = normalize_element(&element, origin()).unwrap();
        assert_eq!(record.parking.kind, "parking");
    }

    #[test]
    fn fee_prefers_specific_key_over_generic() {
        let element = element_with_tags(&[
            ("amenity", "parking"),
            ("parking:fee", "yes"),
            ("fee", "no"),
        ]);
        let record = normalize_element(&element, origin()).unwrap();
        assert_eq!(record.parking.fee, "yes");
    }

    #[test]
    fn fee_defaults_to_no() {
        let element = element_with_tags(&[("amenity", "parking")]);
        let record = normalize_element(&element, origin()).unwrap();
        assert_eq!(record.parking.fee, "no");
    }

    #[test]
    fn maxstay_prefers_specific_key_and_defaults_empty() {
        let with_both = element_with_tags(&[
            ("amenity", "parking"),
            ("parking:maxstay", "2 hours"),
            ("maxstay", "4 hours"),
        ]);
        let record = normalize_element(&with_both, origin()).unwrap();
        assert_eq!(record.parking.maxstay, "2 hours");

        let bare = element_with_tags(&[("amenity", "parking")]);
        let record = normalize_element(&bare, origin()).unwrap();
        assert_eq!(record.parking.maxstay, "");
    }

    #[test]
    fn access_defaults_to_public() {
        let element = element_with_tags(&[("amenity", "parking")]);
        let record = normalize_element(&element, origin()).unwrap();
        assert_eq!(record.parking.access, "public");
    }

    #[test]
    fn capacity_and_disabled_and_surface_carry_over() {
        let element = element_with_tags(&[
            ("amenity", "parking"),
            ("capacity", "120"),
            ("capacity:disabled", "4"),
            ("surface", "asphalt"),
        ]);
        let record = normalize_element(&element, origin()).unwrap();
        assert_eq!(record.parking.capacity, "120");
        assert_eq!(record.parking.disabled, "4");
        assert_eq!(record.parking.surface, "asphalt");
    }

    #[test]
    fn location_prefers_element_center() {
        let element = element_with_tags(&[("amenity", "parking")]);
        let record = normalize_element(&element, Coordinate::new(1.0, 2.0)).unwrap();
        assert_eq!(record.location, Coordinate::new(10.0, 50.0));
    }

    #[test]
    fn location_falls_back_to_query_point() {
        let mut element = element_with_tags(&[("amenity", "parking")]);
        element.center = None;
        let query_point = Coordinate::new(1.0, 2.0);
        let record = normalize_element(&element, query_point).unwrap();
        assert_eq!(record.location, query_point);
    }
}
