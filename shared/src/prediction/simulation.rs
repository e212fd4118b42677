//! Simulated consumption history
//!
//! The store keeps no movement log, so the engine reconstructs a plausible
//! daily history from the current snapshot. Past levels follow the status'
//! depletion rate and each one is off by up to `noise_ratio` of itself, the
//! way a hand count drifts. Noise is drawn from a generator seeded by the
//! snapshot itself: the same stock always yields the same history.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::PredictionConfig;
use crate::models::{Stock, StockStatus};

const FNV_OFFSET_BASIS: u64 = 0xcbf2_9ce4_8422_2325;
const FNV_PRIME: u64 = 0x0000_0100_0000_01b3;

/// Share of the reference level consumed per day, by status
pub fn depletion_fraction(status: StockStatus) -> f64 {
    match status {
        StockStatus::OutOfStock => 0.12,
        StockStatus::Critical => 0.10,
        StockStatus::Low => 0.05,
        StockStatus::Optimal => 0.025,
        StockStatus::Overstocked => 0.01,
    }
}

/// Stable seed for a stock snapshot (FNV-1a)
pub fn snapshot_seed(stock: &Stock, base_seed: u64) -> u64 {
    stock
        .id
        .bytes()
        .chain([0])
        .chain(stock.name.bytes())
        .chain([0])
        .chain(stock.quantity.to_bits().to_le_bytes())
        .chain(stock.status.as_str().bytes())
        .chain(stock.unit().as_str().bytes())
        .fold(FNV_OFFSET_BASIS ^ base_seed, |hash, byte| {
            (hash ^ u64::from(byte)).wrapping_mul(FNV_PRIME)
        })
}

/// Daily levels over `config.history_days`, oldest first, ending at `quantity`
pub fn simulate_history(
    stock: &Stock,
    quantity: f64,
    reference: f64,
    config: &PredictionConfig,
) -> Vec<f64> {
    let days = config.history_days.max(1) as usize;
    let base_rate = reference * depletion_fraction(stock.status);
    let mut rng = StdRng::seed_from_u64(snapshot_seed(stock, config.seed));

    let mut levels = Vec::with_capacity(days);
    for days_ago in (1..days).rev() {
        let trend = quantity + base_rate * days_ago as f64;
        let noise: f64 = rng.gen_range(-1.0f64..=1.0) * config.noise_ratio;
        levels.push((trend * (1.0 + noise)).max(0.0));
    }
    // Today's level is the snapshot itself
    levels.push(quantity);
    levels
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_history_ends_at_current_quantity() {
        let stock = Stock::new("1", "Tube", 40.0).with_status(StockStatus::Low);
        let history = simulate_history(&stock, 40.0, 100.0, &PredictionConfig::default());
        assert_eq!(history.len(), 30);
        assert_eq!(history[29], 40.0);
    }

    #[test]
    fn test_levels_stay_within_noise_of_trend() {
        let stock = Stock::new("1", "Tube", 40.0).with_status(StockStatus::Low);
        let config = PredictionConfig::default();
        let history = simulate_history(&stock, 40.0, 100.0, &config);

        for (day, level) in history.iter().enumerate() {
            let trend = 40.0 + 5.0 * (29 - day) as f64;
            assert!((level - trend).abs() <= trend * config.noise_ratio + 1e-9, "day {day}");
        }
        // Counts drift, so the series is not monotonic
        assert!(history.windows(2).any(|w| w[0] < w[1]));
    }

    #[test]
    fn test_without_noise_levels_decrease() {
        let stock = Stock::new("1", "Tube", 40.0).with_status(StockStatus::Low);
        let config = PredictionConfig {
            noise_ratio: 0.0,
            ..PredictionConfig::default()
        };
        let history = simulate_history(&stock, 40.0, 100.0, &config);
        assert!(history.windows(2).all(|w| w[0] > w[1]));
    }

    #[test]
    fn test_history_is_reproducible() {
        let stock = Stock::new("1", "Tube", 40.0);
        let config = PredictionConfig::default();
        assert_eq!(
            simulate_history(&stock, 40.0, 100.0, &config),
            simulate_history(&stock, 40.0, 100.0, &config)
        );
    }

    #[test]
    fn test_seed_depends_on_snapshot() {
        let a = Stock::new("1", "Tube", 40.0);
        let b = Stock::new("1", "Tube", 41.0);
        assert_ne!(snapshot_seed(&a, 0), snapshot_seed(&b, 0));
        assert_ne!(snapshot_seed(&a, 0), snapshot_seed(&a, 1));
    }

    #[test]
    fn test_without_noise_consumption_is_constant() {
        let stock = Stock::new("1", "Tube", 10.0).with_status(StockStatus::Critical);
        let config = PredictionConfig {
            noise_ratio: 0.0,
            ..PredictionConfig::default()
        };
        let history = simulate_history(&stock, 10.0, 100.0, &config);
        assert!((history[0] - (10.0 + 29.0 * 10.0)).abs() < 1e-9);
    }
}
