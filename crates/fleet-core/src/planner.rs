//! End-to-end planning: validate, build trips, spread them over drones.

use crate::allocator::allocate_trips;
use crate::assigner::assign_trips_to_drones;
use crate::error::Result;
use crate::models::{DeliveryPlan, Order};
use crate::params::FleetParams;

/// Allocate `orders` into trips and assign the trips to the fleet.
///
/// Either the whole batch is planned or an error is returned.
pub fn plan_deliveries(orders: &[Order], params: &FleetParams) -> Result<DeliveryPlan> {
    params.validate()?;

    let trips = allocate_trips(orders, params.capacity_kg, params.range_km, params.depot)?;
    let assignments = assign_trips_to_drones(&trips, params.drone_count)?;

    tracing::info!(
        orders = orders.len(),
        trips = trips.len(),
        drones = params.drone_count,
        "delivery plan ready"
    );

    Ok(DeliveryPlan { trips, assignments })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FleetError;

    #[test]
    fn plans_every_order_once() {
        let orders = vec![
            Order::new(1, 1.0, 1.0, 2.0, "alta"),
            Order::new(2, -2.0, 1.0, 2.0, "media"),
            Order::new(3, 3.0, -3.0, 2.0, "baixa"),
            Order::new(4, 0.5, 0.5, 4.0, "alta"),
        ];
        let plan = plan_deliveries(&orders, &FleetParams::default()).unwrap();
        assert_eq!(plan.order_count(), orders.len());

        let assigned: usize = plan.assignments.values().map(Vec::len).sum();
        assert_eq!(assigned, plan.trips.len());
    }

    #[test]
    fn invalid_params_fail_before_allocation() {
        let params = FleetParams {
            drone_count: 0,
            ..FleetParams::default()
        };
        let err = plan_deliveries(&[Order::new(1, 1.0, 0.0, 1.0, "alta")], &params).unwrap_err();
        assert!(matches!(err, FleetError::InvalidConfiguration(_)));
    }

    #[test]
    fn empty_batch_gives_idle_fleet() {
        let plan = plan_deliveries(&[], &FleetParams::default()).unwrap();
        assert!(plan.trips.is_empty());
        assert_eq!(plan.assignments.len(), 3);
        assert!(plan.trips_for(0).is_empty());
    }
}
