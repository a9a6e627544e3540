//! Location-based deduplication of normalized records.

use std::collections::hash_map::Entry;
use std::collections::HashMap;

use curbside_core::ParkingRecord;

use crate::geo::rounded_location;

/// Collapse records that resolve to (nearly) the same location.
///
/// Records are grouped by location rounded to 5 decimal places (~1m). The
/// first record of a group is kept as the base; later records only fill in
/// attributes the base left empty (see
/// [`curbside_core::ParkingAttributes::coalesce_from`]). Output preserves
/// first-seen order of the groups.
///
/// Postcondition: no two returned records share a rounded location.
#[must_use]
pub fn dedupe_and_merge(records: Vec<ParkingRecord>) -> Vec<ParkingRecord> {
    let mut order: Vec<(i64, i64)> = Vec::new();
    let mut groups: HashMap<(i64, i64), ParkingRecord> = HashMap::new();

    for record in records {
        match groups.entry(rounded_location(record.location)) {
            Entry::Occupied(mut entry) => {
                entry.get_mut().parking.coalesce_from(&record.parking);
            }
            Entry::Vacant(entry) => {
                order.push(*entry.key());
                entry.insert(record);
            }
        }
    }

    order
        .into_iter()
        .filter_map(|key| groups.remove(&key))
        .collect()
}
