//! Distribution of finished trips across the drone fleet.

use crate::error::{FleetError, Result};
use crate::models::Trip;
use std::collections::BTreeMap;

/// Hand each trip, in input order, to the drone holding the fewest trips.
///
/// Ties go to the lowest drone index. Only trip counts are balanced; trip
/// weight and length are not considered. Every drone `0..drone_count`
/// appears in the result, possibly with no trips.
pub fn assign_trips_to_drones(
    trips: &[Trip],
    drone_count: usize,
) -> Result<BTreeMap<usize, Vec<Trip>>> {
    if drone_count == 0 {
        return Err(FleetError::InvalidConfiguration(
            "cannot assign trips to zero drones".to_string(),
        ));
    }

    let mut assignments: BTreeMap<usize, Vec<Trip>> =
        (0..drone_count).map(|drone| (drone, Vec::new())).collect();
    let mut counts = vec![0usize; drone_count];

    for trip in trips {
        // min_by_key keeps the first minimum, i.e. the lowest index.
        let Some((drone, _)) = counts.iter().enumerate().min_by_key(|(_, count)| **count) else {
            break;
        };
        counts[drone] += 1;
        assignments.entry(drone).or_default().push(trip.clone());
    }

    Ok(assignments)
}
