//! Fleet CLI - Command line tools for the drone delivery planner.
//!
//! This crate provides the `fleet-sim` binary plus the pieces it is built
//! from: environment configuration, order sources and console reporting.

pub mod config;
pub mod logging;
pub mod report;
pub mod sim;

pub use config::FleetConfig;
pub use logging::log_filter;
pub use report::{describe_failure, render_summary};
