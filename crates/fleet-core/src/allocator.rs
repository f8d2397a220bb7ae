//! Greedy trip construction.
//!
//! Orders are placed most urgent first (nearest first within a priority
//! class). Each order goes into the first open trip, scanning from the
//! fullest, that still fits both the payload and the range budget; otherwise
//! it opens a new trip. An order that cannot even be served on its own
//! aborts the whole run.

use crate::error::{FleetError, Result, UnservableReason};
use crate::geometry::distance;
use crate::models::{Order, Point, Trip};
use crate::route_estimator::estimate_min_route;
use std::cmp::Ordering;

/// Slack added to the range budget to absorb floating-point rounding.
pub const ROUTE_TOLERANCE_KM: f64 = 1e-9;

/// Group `orders` into trips that each fit one drone load.
///
/// Trips are returned in creation order. Fails with
/// [`FleetError::UnservableOrder`] on the first order that neither fits an
/// open trip nor a trip of its own, and with
/// [`FleetError::InvalidConfiguration`] if any order has a non-positive or
/// non-finite weight or non-finite coordinates. No partial result is returned.
pub fn allocate_trips(
    orders: &[Order],
    capacity_kg: f64,
    range_km: f64,
    depot: Point,
) -> Result<Vec<Trip>> {
    orders.iter().try_for_each(check_order)?;

    let mut trips: Vec<Trip> = Vec::new();

    for order in placement_order(orders, depot) {
        if let Some(idx) = find_open_trip(&trips, order, capacity_kg, range_km, depot) {
            tracing::debug!(
                order_id = order.id,
                trip = idx,
                load_kg = trips[idx].total_weight_kg() + order.weight_kg,
                "order added to open trip"
            );
            trips[idx].add_order(order.clone());
            continue;
        }

        let solo_distance_km = 2.0 * distance(depot, order.coord());
        if let Some(reason) = solo_violation(order, solo_distance_km, capacity_kg, range_km) {
            tracing::warn!(order_id = order.id, %reason, "order cannot be served");
            return Err(FleetError::UnservableOrder {
                order_id: order.id,
                reason,
                solo_distance_km,
            });
        }

        tracing::debug!(order_id = order.id, trip = trips.len(), "opened new trip");
        trips.push(Trip::with_order(order.clone()));
    }

    tracing::info!(
        orders = orders.len(),
        trips = trips.len(),
        "trip allocation complete"
    );
    Ok(trips)
}

fn check_order(order: &Order) -> Result<()> {
    if !order.weight_kg.is_finite() || order.weight_kg <= 0.0 {
        return Err(FleetError::InvalidConfiguration(format!(
            "order {} must have a positive weight, got {}",
            order.id, order.weight_kg
        )));
    }
    if !order.location.is_finite() {
        return Err(FleetError::InvalidConfiguration(format!(
            "order {} has non-finite coordinates",
            order.id
        )));
    }
    Ok(())
}

/// Orders sorted by priority rank, then distance from the depot.
///
/// The sort is stable, so equal keys keep their input order.
fn placement_order(orders: &[Order], depot: Point) -> Vec<&Order> {
    let mut sorted: Vec<&Order> = orders.iter().collect();
    sorted.sort_by(|a, b| {
        a.priority.rank().cmp(&b.priority.rank()).then_with(|| {
            distance(depot, a.coord())
                .partial_cmp(&distance(depot, b.coord()))
                .unwrap_or(Ordering::Equal)
        })
    });
    sorted
}

/// Index of the first trip, fullest first, that can absorb `order`.
fn find_open_trip(
    trips: &[Trip],
    order: &Order,
    capacity_kg: f64,
    range_km: f64,
    depot: Point,
) -> Option<usize> {
    let mut candidates: Vec<usize> = (0..trips.len()).collect();
    candidates.sort_by(|&a, &b| {
        trips[a]
            .remaining_capacity(capacity_kg)
            .partial_cmp(&trips[b].remaining_capacity(capacity_kg))
            .unwrap_or(Ordering::Equal)
    });

    candidates.into_iter().find(|&idx| {
        let trip = &trips[idx];
        if trip.total_weight_kg() + order.weight_kg > capacity_kg {
            return false;
        }
        let mut stops = trip.coords();
        stops.push(order.coord());
        estimate_min_route(depot, &stops) <= range_km + ROUTE_TOLERANCE_KM
    })
}

fn solo_violation(
    order: &Order,
    solo_distance_km: f64,
    capacity_kg: f64,
    range_km: f64,
) -> Option<UnservableReason> {
    if order.weight_kg > capacity_kg {
        Some(UnservableReason::ExceedsCapacity {
            weight_kg: order.weight_kg,
            capacity_kg,
        })
    } else if solo_distance_km > range_km + ROUTE_TOLERANCE_KM {
        Some(UnservableReason::ExceedsRange { range_km })
    } else {
        None
    }
}
