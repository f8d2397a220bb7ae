//! Core data models for the fleet planner.

use crate::route_estimator::estimate_min_route;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// A planar coordinate in kilometres.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

/// Delivery priority class. Variants are declared most urgent first.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Priority {
    High,
    Medium,
    Low,
    /// Unrecognised label; always placed after every known class
    #[default]
    Unknown,
}

impl Priority {
    /// Ordinal rank used as the primary placement key (lower = more urgent).
    pub fn rank(&self) -> u8 {
        match self {
            Priority::High => 0,
            Priority::Medium => 1,
            Priority::Low => 2,
            Priority::Unknown => 3,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::High => "high",
            Priority::Medium => "medium",
            Priority::Low => "low",
            Priority::Unknown => "unknown",
        }
    }
}

impl From<&str> for Priority {
    fn from(label: &str) -> Self {
        match label.trim().to_ascii_lowercase().as_str() {
            "high" | "alta" => Priority::High,
            "medium" | "media" | "média" => Priority::Medium,
            "low" | "baixa" => Priority::Low,
            _ => Priority::Unknown,
        }
    }
}

impl From<String> for Priority {
    fn from(label: String) -> Self {
        Priority::from(label.as_str())
    }
}

impl From<Priority> for String {
    fn from(priority: Priority) -> Self {
        priority.as_str().to_string()
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A delivery order. Created before allocation and never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: u32,
    #[serde(flatten)]
    pub location: Point,
    #[serde(alias = "weight")]
    pub weight_kg: f64,
    #[serde(default)]
    pub priority: Priority,
}

impl Order {
    pub fn new(id: u32, x: f64, y: f64, weight_kg: f64, priority: impl Into<Priority>) -> Self {
        Self {
            id,
            location: Point::new(x, y),
            weight_kg,
            priority: priority.into(),
        }
    }

    pub fn coord(&self) -> Point {
        self.location
    }
}

/// One drone load: a set of orders served in a single round trip from the depot.
///
/// Insertion order is not the visiting order; the visiting order is
/// recomputed by the route estimator on demand. The weight total is only
/// changed together with the order list, so it always equals the sum of
/// the contained order weights.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "TripRecord")]
pub struct Trip {
    orders: Vec<Order>,
    total_weight_kg: f64,
}

/// Wire form of a trip; the weight total is rebuilt from the orders.
#[derive(Deserialize)]
struct TripRecord {
    orders: Vec<Order>,
}

impl From<TripRecord> for Trip {
    fn from(record: TripRecord) -> Self {
        let mut trip = Trip::new();
        for order in record.orders {
            trip.add_order(order);
        }
        trip
    }
}

impl Trip {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a trip holding a single order.
    pub fn with_order(order: Order) -> Self {
        let mut trip = Self::new();
        trip.add_order(order);
        trip
    }

    pub fn add_order(&mut self, order: Order) {
        self.total_weight_kg += order.weight_kg;
        self.orders.push(order);
    }

    /// Remove the order with the given id, returning it if it was present.
    pub fn remove_order(&mut self, order_id: u32) -> Option<Order> {
        let idx = self.orders.iter().position(|o| o.id == order_id)?;
        let order = self.orders.remove(idx);
        self.total_weight_kg -= order.weight_kg;
        if self.orders.is_empty() {
            self.total_weight_kg = 0.0;
        }
        Some(order)
    }

    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    pub fn total_weight_kg(&self) -> f64 {
        self.total_weight_kg
    }

    pub fn coords(&self) -> Vec<Point> {
        self.orders.iter().map(Order::coord).collect()
    }

    pub fn order_ids(&self) -> Vec<u32> {
        self.orders.iter().map(|o| o.id).collect()
    }

    pub fn len(&self) -> usize {
        self.orders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }

    pub fn remaining_capacity(&self, capacity_kg: f64) -> f64 {
        capacity_kg - self.total_weight_kg
    }

    /// Estimated minimum round-trip length from `depot` through every stop.
    pub fn route_km(&self, depot: Point) -> f64 {
        estimate_min_route(depot, &self.coords())
    }
}

/// Result of a successful planning run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DeliveryPlan {
    /// Trips in creation order
    pub trips: Vec<Trip>,
    /// Drone index to its assigned trips; every drone has an entry
    pub assignments: BTreeMap<usize, Vec<Trip>>,
}

impl DeliveryPlan {
    pub fn order_count(&self) -> usize {
        self.trips.iter().map(Trip::len).sum()
    }

    pub fn trips_for(&self, drone: usize) -> &[Trip] {
        self.assignments
            .get(&drone)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn priority_accepts_english_and_legacy_labels() {
        assert_eq!(Priority::from("alta"), Priority::High);
        assert_eq!(Priority::from("HIGH"), Priority::High);
        assert_eq!(Priority::from("media"), Priority::Medium);
        assert_eq!(Priority::from("baixa"), Priority::Low);
        assert_eq!(Priority::from("urgent"), Priority::Unknown);
    }

    #[test]
    fn unknown_priority_ranks_last() {
        let mut ranks = [
            Priority::Unknown,
            Priority::Low,
            Priority::High,
            Priority::Medium,
        ];
        ranks.sort();
        assert_eq!(
            ranks,
            [Priority::High, Priority::Medium, Priority::Low, Priority::Unknown]
        );
        assert_eq!(Priority::Unknown.rank(), 3);
    }

    #[test]
    fn trip_weight_tracks_add_and_remove() {
        let mut trip = Trip::new();
        trip.add_order(Order::new(1, 1.0, 1.0, 1.5, "alta"));
        trip.add_order(Order::new(2, 2.0, 0.0, 2.0, "baixa"));
        assert_eq!(trip.len(), 2);
        assert!((trip.total_weight_kg() - 3.5).abs() < 1e-12);

        let removed = trip.remove_order(1).expect("order 1 present");
        assert_eq!(removed.id, 1);
        assert!((trip.total_weight_kg() - 2.0).abs() < 1e-12);
        assert!(trip.remove_order(42).is_none());
        assert!((trip.total_weight_kg() - 2.0).abs() < 1e-12);

        trip.remove_order(2);
        assert!(trip.is_empty());
        assert_eq!(trip.total_weight_kg(), 0.0);
    }

    #[test]
    fn trip_route_is_round_trip_for_single_stop() {
        let trip = Trip::with_order(Order::new(7, 3.0, 4.0, 1.0, "media"));
        assert_eq!(trip.coords(), vec![Point::new(3.0, 4.0)]);
        assert!((trip.route_km(Point::ORIGIN) - 10.0).abs() < 1e-12);
        assert!((trip.remaining_capacity(5.0) - 4.0).abs() < 1e-12);
    }

    #[test]
    fn deserialized_trip_recomputes_weight_total() {
        let trip: Trip = serde_json::from_str(
            r#"{
                "orders": [
                    {"id": 1, "x": 1.0, "y": 1.0, "weight": 1.0, "priority": "alta"},
                    {"id": 2, "x": 2.0, "y": 0.0, "weight": 0.5, "priority": "baixa"}
                ],
                "total_weight_kg": 99.0
            }"#,
        )
        .expect("valid trip json");
        assert_eq!(trip.order_ids(), vec![1, 2]);
        assert!((trip.total_weight_kg() - 1.5).abs() < 1e-12);

        let round: Trip =
            serde_json::from_value(serde_json::to_value(&trip).expect("serializable"))
                .expect("trip json reloads");
        assert_eq!(round, trip);
    }

    #[test]
    fn order_deserializes_flat_json() {
        let order: Order = serde_json::from_str(
            r#"{"id": 3, "x": 1.5, "y": -2.0, "weight": 0.8, "priority": "alta"}"#,
        )
        .expect("valid order json");
        assert_eq!(order, Order::new(3, 1.5, -2.0, 0.8, Priority::High));

        let json = serde_json::to_value(&order).expect("serializable");
        assert_eq!(json["priority"], "high");
        assert_eq!(json["x"], 1.5);
    }
}
