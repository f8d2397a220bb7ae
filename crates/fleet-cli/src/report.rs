//! Console rendering of fleet plans.

use fleet_core::{FleetError, FleetParams, FleetSummary, UnservableReason};

/// Render a plain-text summary of a plan, one block per drone.
pub fn render_summary(summary: &FleetSummary, params: &FleetParams) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "Fleet: {} drones | capacity {:.2} kg | range {:.2} km | depot ({:.2}, {:.2})\n",
        params.drone_count, params.capacity_kg, params.range_km, params.depot.x, params.depot.y
    ));
    out.push_str(&format!(
        "Plan:  {} orders in {} trips | {:.2} kg | {:.2} km\n",
        summary.total_orders, summary.total_trips, summary.total_weight_kg, summary.total_km
    ));

    for drone in &summary.drones {
        out.push('\n');
        out.push_str(&format!(
            "Drone {}: {} trips, {:.2} kg, {:.2} km\n",
            drone.drone,
            drone.trips.len(),
            drone.total_weight_kg,
            drone.total_km
        ));
        if drone.trips.is_empty() {
            out.push_str("  (idle)\n");
        }
        for (idx, trip) in drone.trips.iter().enumerate() {
            let stops: Vec<String> = trip.visit_order.iter().map(|id| format!("#{id}")).collect();
            out.push_str(&format!(
                "  trip {}: {} | {:.2} kg ({:.0}%) | {:.2} km{}\n",
                idx + 1,
                stops.join(" -> "),
                trip.total_weight_kg,
                trip.load_factor * 100.0,
                trip.route_km,
                if trip.exact_route { "" } else { " (estimated)" }
            ));
        }
    }

    out
}

/// One-line explanation of a planning failure for the console.
pub fn describe_failure(err: &FleetError) -> String {
    match err {
        FleetError::UnservableOrder {
            order_id,
            reason: UnservableReason::ExceedsCapacity { .. },
            ..
        } => format!("order #{order_id} is too heavy for any drone: {err}"),
        FleetError::UnservableOrder {
            order_id,
            reason: UnservableReason::ExceedsRange { .. },
            ..
        } => format!("order #{order_id} is out of drone range: {err}"),
        FleetError::InvalidConfiguration(_) => err.to_string(),
    }
}
