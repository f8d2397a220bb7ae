//! Loading order batches from JSON files.

use anyhow::{bail, Context, Result};
use fleet_core::Order;
use std::collections::HashSet;
use std::path::Path;

/// Read a JSON array of orders from `path`.
pub fn load_orders(path: &Path) -> Result<Vec<Order>> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read orders from {}", path.display()))?;
    parse_orders(&raw).with_context(|| format!("invalid order file {}", path.display()))
}

/// Parse and sanity-check a JSON order batch.
pub fn parse_orders(raw: &str) -> Result<Vec<Order>> {
    let orders: Vec<Order> = serde_json::from_str(raw).context("malformed order JSON")?;

    let mut seen = HashSet::with_capacity(orders.len());
    for order in &orders {
        if !seen.insert(order.id) {
            bail!("duplicate order id {}", order.id);
        }
        if !order.location.is_finite() {
            bail!("order {} has non-finite coordinates", order.id);
        }
        if !order.weight_kg.is_finite() || order.weight_kg <= 0.0 {
            bail!(
                "order {} must have a positive weight, got {}",
                order.id,
                order.weight_kg
            );
        }
    }

    tracing::debug!(orders = orders.len(), "order batch parsed");
    Ok(orders)
}
