//! Fleet parameters consumed by the planner.

use crate::error::{FleetError, Result};
use crate::models::Point;
use serde::{Deserialize, Serialize};

/// Configuration for a homogeneous drone fleet operating from one depot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FleetParams {
    /// Maximum payload per trip in kilograms
    pub capacity_kg: f64,
    /// Maximum round-trip distance per trip in kilometres
    pub range_km: f64,
    /// Where every trip starts and ends
    #[serde(default)]
    pub depot: Point,
    /// Number of drones trips are distributed across
    pub drone_count: usize,
}

impl Default for FleetParams {
    fn default() -> Self {
        Self {
            capacity_kg: 5.0,
            range_km: 20.0,
            depot: Point::ORIGIN,
            drone_count: 3,
        }
    }
}

impl FleetParams {
    pub fn validate(&self) -> Result<()> {
        if !self.capacity_kg.is_finite() || self.capacity_kg <= 0.0 {
            return Err(FleetError::InvalidConfiguration(format!(
                "capacity must be a positive number of kg, got {}",
                self.capacity_kg
            )));
        }
        if !self.range_km.is_finite() || self.range_km <= 0.0 {
            return Err(FleetError::InvalidConfiguration(format!(
                "range must be a positive number of km, got {}",
                self.range_km
            )));
        }
        if !self.depot.is_finite() {
            return Err(FleetError::InvalidConfiguration(
                "depot coordinates must be finite".to_string(),
            ));
        }
        if self.drone_count == 0 {
            return Err(FleetError::InvalidConfiguration(
                "drone count must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
