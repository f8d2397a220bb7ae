//! Pre-defined and randomly generated order batches.

use fleet_core::{Order, Priority};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const PRIORITIES: [Priority; 3] = [Priority::High, Priority::Medium, Priority::Low];
const MIN_WEIGHT_KG: f64 = 0.1;

/// Parameters for a random order batch.
#[derive(Debug, Clone)]
pub struct RandomBatch {
    pub count: u32,
    /// Orders are spread uniformly over [-area_km, area_km] on both axes
    pub area_km: f64,
    pub max_weight_kg: f64,
    pub seed: u64,
}

impl Default for RandomBatch {
    fn default() -> Self {
        Self {
            count: 20,
            area_km: 6.0,
            max_weight_kg: 3.0,
            seed: 42,
        }
    }
}

/// A small mixed-priority batch around the origin, servable with default fleet params.
pub fn sample_orders() -> Vec<Order> {
    vec![
        Order::new(1, 1.0, 1.0, 1.0, Priority::High),
        Order::new(2, 2.5, -1.0, 2.0, Priority::Medium),
        Order::new(3, -3.0, 2.0, 1.5, Priority::Low),
        Order::new(4, 4.0, 3.0, 0.5, Priority::High),
        Order::new(5, -1.5, -4.0, 2.5, Priority::Medium),
        Order::new(6, 0.5, 5.0, 1.0, Priority::Low),
        Order::new(7, -5.0, -1.0, 3.0, Priority::High),
        Order::new(8, 3.5, 4.5, 0.8, Priority::Medium),
    ]
}

/// Generate `batch.count` orders with ids `1..=count`. Same seed, same batch.
pub fn random_orders(batch: &RandomBatch) -> Vec<Order> {
    let mut rng = StdRng::seed_from_u64(batch.seed);
    let area = batch.area_km.abs();
    let max_weight = batch.max_weight_kg.max(MIN_WEIGHT_KG);

    (1..=batch.count)
        .map(|id| {
            let x = if area > 0.0 { rng.random_range(-area..=area) } else { 0.0 };
            let y = if area > 0.0 { rng.random_range(-area..=area) } else { 0.0 };
            let weight = rng.random_range(MIN_WEIGHT_KG..=max_weight);
            let priority = PRIORITIES[rng.random_range(0..PRIORITIES.len())];
            // Round to grams / metres so printed batches are readable.
            Order::new(
                id,
                (x * 1000.0).round() / 1000.0,
                (y * 1000.0).round() / 1000.0,
                ((weight * 1000.0).round() / 1000.0).max(MIN_WEIGHT_KG),
                priority,
            )
        })
        .collect()
}
