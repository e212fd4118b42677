//! Prediction policy configuration
//!
//! Supports hierarchical configuration loading:
//! 1. Default values in code
//! 2. An optional configuration file (TOML, JSON, YAML...)
//! 3. Environment variable overrides with the STOCK_PREDICTION_ prefix

use config::{Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::StockResult;

pub const ENV_PREFIX: &str = "STOCK_PREDICTION";

/// Policy constants of the rupture prediction engine
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct PredictionConfig {
    /// Days of simulated history fitted per stock
    #[validate(range(min = 3, max = 365))]
    pub history_days: u32,

    /// Days between the reorder date and the projected rupture
    #[validate(range(max = 90))]
    pub reorder_lead_time_days: u32,

    /// Relative day-to-day variation of simulated consumption
    #[validate(range(min = 0.0, max = 1.0))]
    pub noise_ratio: f64,

    /// Standard errors applied to the slope for the confidence band
    #[validate(range(min = 0.0, max = 10.0))]
    pub confidence_z: f64,

    /// Projections beyond this many days are reported as this value
    #[validate(range(min = 1, max = 3650))]
    pub max_projection_days: u32,

    /// Target level for stocks without a max threshold
    #[validate(range(min = 0.001))]
    pub default_capacity: f64,

    /// Mixed into every per-stock seed
    pub seed: u64,
}

impl Default for PredictionConfig {
    fn default() -> Self {
        Self {
            history_days: 30,
            reorder_lead_time_days: 3,
            noise_ratio: 0.25,
            confidence_z: 1.96,
            max_projection_days: 365,
            default_capacity: 100.0,
            seed: 0,
        }
    }
}

impl PredictionConfig {
    /// Load from defaults, an optional file and the environment, then validate
    pub fn load(path: Option<&str>) -> StockResult<Self> {
        let mut builder = Self::builder_with_defaults()?;
        if let Some(path) = path {
            builder = builder.add_source(File::with_name(path).required(false));
        }
        let config = builder
            .add_source(Environment::with_prefix(ENV_PREFIX).try_parsing(true))
            .build()?;

        Self::finish(config)
    }

    /// Parse and validate a TOML document (e.g. for tests or embedded settings)
    pub fn from_toml_str(s: &str) -> StockResult<Self> {
        let config = Self::builder_with_defaults()?
            .add_source(File::from_str(s, FileFormat::Toml))
            .build()?;

        Self::finish(config)
    }

    fn builder_with_defaults(
    ) -> StockResult<config::ConfigBuilder<config::builder::DefaultState>> {
        let defaults = Self::default();
        Ok(config::Config::builder()
            .set_default("history_days", i64::from(defaults.history_days))?
            .set_default(
                "reorder_lead_time_days",
                i64::from(defaults.reorder_lead_time_days),
            )?
            .set_default("noise_ratio", defaults.noise_ratio)?
            .set_default("confidence_z", defaults.confidence_z)?
            .set_default("max_projection_days", i64::from(defaults.max_projection_days))?
            .set_default("default_capacity", defaults.default_capacity)?
            .set_default("seed", 0i64)?)
    }

    fn finish(config: config::Config) -> StockResult<Self> {
        let settings: PredictionConfig = config.try_deserialize()?;
        settings.validate()?;
        tracing::debug!(?settings, "prediction config loaded");
        Ok(settings)
    }
}
