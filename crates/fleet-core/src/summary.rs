//! Report-ready view of a delivery plan.

use crate::models::{DeliveryPlan, Point, Trip};
use crate::params::FleetParams;
use crate::route_estimator::plan_route;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TripSummary {
    /// Order ids in the visiting order of the best route found
    pub visit_order: Vec<u32>,
    pub total_weight_kg: f64,
    pub route_km: f64,
    /// Share of drone capacity used, 0.0..=1.0
    pub load_factor: f64,
    /// False when the route came from the nearest-neighbour heuristic
    pub exact_route: bool,
}

impl TripSummary {
    pub fn from_trip(trip: &Trip, depot: Point, capacity_kg: f64) -> Self {
        let route = plan_route(depot, &trip.coords());
        let orders = trip.orders();
        Self {
            visit_order: route.visit_order.iter().map(|&i| orders[i].id).collect(),
            total_weight_kg: trip.total_weight_kg(),
            route_km: route.length_km,
            load_factor: if capacity_kg > 0.0 {
                trip.total_weight_kg() / capacity_kg
            } else {
                0.0
            },
            exact_route: route.exact,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DroneSummary {
    pub drone: usize,
    pub trips: Vec<TripSummary>,
    pub total_weight_kg: f64,
    pub total_km: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FleetSummary {
    pub total_orders: usize,
    pub total_trips: usize,
    pub total_weight_kg: f64,
    pub total_km: f64,
    pub drones: Vec<DroneSummary>,
}

impl FleetSummary {
    pub fn from_plan(plan: &DeliveryPlan, params: &FleetParams) -> Self {
        let drones: Vec<DroneSummary> = plan
            .assignments
            .iter()
            .map(|(&drone, trips)| {
                let trips: Vec<TripSummary> = trips
                    .iter()
                    .map(|trip| TripSummary::from_trip(trip, params.depot, params.capacity_kg))
                    .collect();
                DroneSummary {
                    drone,
                    total_weight_kg: trips.iter().map(|t| t.total_weight_kg).sum(),
                    total_km: trips.iter().map(|t| t.route_km).sum(),
                    trips,
                }
            })
            .collect();

        Self {
            total_orders: plan.order_count(),
            total_trips: plan.trips.len(),
            total_weight_kg: drones.iter().map(|d| d.total_weight_kg).sum(),
            total_km: drones.iter().map(|d| d.total_km).sum(),
            drones,
        }
    }
}
