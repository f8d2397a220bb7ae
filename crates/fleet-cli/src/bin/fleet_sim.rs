//! Fleet simulator - plan a batch of deliveries and print the result.
//!
//! Usage:
//!   cargo run -p fleet-cli --bin fleet-sim -- --orders 30 --seed 7 --drones 4
//!   cargo run -p fleet-cli --bin fleet-sim -- --input demos/orders.json --json

use anyhow::{Context, Result};
use clap::Parser;
use fleet_cli::sim::{load_orders, random_orders, sample_orders, RandomBatch};
use fleet_cli::{describe_failure, log_filter, render_summary, FleetConfig};
use fleet_core::{plan_deliveries, FleetSummary};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(author, version, about = "Plan drone delivery trips for a batch of orders")]
struct Args {
    /// Read orders from a JSON array file instead of generating them
    #[arg(long, conflicts_with = "sample")]
    input: Option<PathBuf>,

    /// Use the built-in demo batch
    #[arg(long)]
    sample: bool,

    /// Number of random orders to generate
    #[arg(long, default_value_t = 20)]
    orders: u32,

    /// Seed for random order generation
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Half-width of the square delivery area around the origin (km)
    #[arg(long, default_value_t = 6.0)]
    area_km: f64,

    /// Heaviest random order (kg)
    #[arg(long, default_value_t = 3.0)]
    max_weight_kg: f64,

    /// Number of drones (overrides FLEET_DRONES)
    #[arg(long)]
    drones: Option<usize>,

    /// Payload per trip in kg (overrides FLEET_CAPACITY_KG)
    #[arg(long)]
    capacity_kg: Option<f64>,

    /// Round-trip range per trip in km (overrides FLEET_RANGE_KM)
    #[arg(long)]
    range_km: Option<f64>,

    /// Depot x coordinate (overrides FLEET_DEPOT_X)
    #[arg(long, allow_hyphen_values = true)]
    depot_x: Option<f64>,

    /// Depot y coordinate (overrides FLEET_DEPOT_Y)
    #[arg(long, allow_hyphen_values = true)]
    depot_y: Option<f64>,

    /// Print the plan summary as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    // Logs go to stderr so --json output stays clean
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(log_filter(&std::env::var("RUST_LOG").unwrap_or_default())?)
        .init();

    let args = Args::parse();

    let config = FleetConfig::from_env().with_overrides(
        args.capacity_kg,
        args.range_km,
        args.drones,
        args.depot_x,
        args.depot_y,
    );
    let params = config.params;

    let orders = if let Some(path) = &args.input {
        load_orders(path)?
    } else if args.sample {
        sample_orders()
    } else {
        random_orders(&RandomBatch {
            count: args.orders,
            area_km: args.area_km,
            max_weight_kg: args.max_weight_kg,
            seed: args.seed,
        })
    };
    tracing::info!(orders = orders.len(), drones = params.drone_count, "planning deliveries");

    let plan = match plan_deliveries(&orders, &params) {
        Ok(plan) => plan,
        Err(err) => {
            tracing::error!(order_id = ?err.order_id(), "planning failed");
            anyhow::bail!(describe_failure(&err));
        }
    };

    let summary = FleetSummary::from_plan(&plan, &params);
    if args.json {
        let json = serde_json::to_string_pretty(&summary).context("failed to encode summary")?;
        println!("{json}");
    } else {
        print!("{}", render_summary(&summary, &params));
    }

    Ok(())
}
