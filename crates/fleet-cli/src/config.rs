//! Fleet configuration from environment.

use fleet_core::{FleetParams, Point};
use std::env;

/// Environment-provided fleet defaults, overridden by command-line flags.
#[derive(Debug, Clone)]
pub struct FleetConfig {
    pub params: FleetParams,
}

impl FleetConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from an arbitrary key lookup; unset or unparsable values fall back to defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = FleetParams::default();
        let parsed = |key: &str| lookup(key).and_then(|s| s.trim().parse::<f64>().ok());

        Self {
            params: FleetParams {
                capacity_kg: parsed("FLEET_CAPACITY_KG").unwrap_or(defaults.capacity_kg),
                range_km: parsed("FLEET_RANGE_KM").unwrap_or(defaults.range_km),
                depot: Point::new(
                    parsed("FLEET_DEPOT_X").unwrap_or(defaults.depot.x),
                    parsed("FLEET_DEPOT_Y").unwrap_or(defaults.depot.y),
                ),
                drone_count: lookup("FLEET_DRONES")
                    .and_then(|s| s.trim().parse().ok())
                    .unwrap_or(defaults.drone_count),
            },
        }
    }

    pub fn with_overrides(
        mut self,
        capacity_kg: Option<f64>,
        range_km: Option<f64>,
        drones: Option<usize>,
        depot_x: Option<f64>,
        depot_y: Option<f64>,
    ) -> Self {
        if let Some(capacity_kg) = capacity_kg {
            self.params.capacity_kg = capacity_kg;
        }
        if let Some(range_km) = range_km {
            self.params.range_km = range_km;
        }
        if let Some(drones) = drones {
            self.params.drone_count = drones;
        }
        if let Some(x) = depot_x {
            self.params.depot.x = x;
        }
        if let Some(y) = depot_y {
            self.params.depot.y = y;
        }
        self
    }
}
