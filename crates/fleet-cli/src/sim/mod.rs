//! Order sources for simulation runs.
//!
//! Provides a fixed demo batch, seeded random batches, and loading of
//! order batches from JSON files.

mod demo_data;
mod orders_file;

pub use demo_data::{random_orders, sample_orders, RandomBatch};
pub use orders_file::{load_orders, parse_orders};
