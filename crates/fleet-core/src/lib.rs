//! Trip allocation and fleet assignment for drone deliveries.
//!
//! Orders are packed into trips that respect both drone payload and
//! per-trip range, then the trips are spread across the fleet.

pub mod allocator;
pub mod assigner;
pub mod error;
pub mod geometry;
pub mod models;
pub mod params;
pub mod planner;
pub mod route_estimator;
pub mod summary;

pub use allocator::{allocate_trips, ROUTE_TOLERANCE_KM};
pub use assigner::assign_trips_to_drones;
pub use error::{FleetError, UnservableReason};
pub use geometry::{distance, route_length};
pub use models::{DeliveryPlan, Order, Point, Priority, Trip};
pub use params::FleetParams;
pub use planner::plan_deliveries;
pub use route_estimator::{
    estimate_min_route, plan_route, RoutePlan, EXACT_ROUTE_LIMIT, HEURISTIC_STARTS,
};
pub use summary::{DroneSummary, FleetSummary, TripSummary};
