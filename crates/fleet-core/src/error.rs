//! Error types for trip allocation and fleet assignment.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Why an order could not be served, even by a dedicated trip.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum UnservableReason {
    /// The order alone is heavier than one drone can carry
    ExceedsCapacity { weight_kg: f64, capacity_kg: f64 },
    /// Depot -> order -> depot is longer than one drone can fly
    ExceedsRange { range_km: f64 },
}

impl fmt::Display for UnservableReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnservableReason::ExceedsCapacity {
                weight_kg,
                capacity_kg,
            } => write!(
                f,
                "weight {weight_kg:.2} kg exceeds drone capacity {capacity_kg:.2} kg"
            ),
            UnservableReason::ExceedsRange { range_km } => {
                write!(f, "solo round trip exceeds drone range {range_km:.2} km")
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum FleetError {
    #[error("order {order_id} cannot be served: {reason} (solo route {solo_distance_km:.2} km)")]
    UnservableOrder {
        order_id: u32,
        reason: UnservableReason,
        solo_distance_km: f64,
    },

    #[error("invalid fleet configuration: {0}")]
    InvalidConfiguration(String),
}

impl FleetError {
    /// Offending order id, if this error refers to one.
    pub fn order_id(&self) -> Option<u32> {
        match self {
            FleetError::UnservableOrder { order_id, .. } => Some(*order_id),
            FleetError::InvalidConfiguration(_) => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, FleetError>;
