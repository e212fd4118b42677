//! Shared core of the stock inventory application
//!
//! This crate holds the pure computations used by the browser front-end
//! (via WASM): rupture prediction, unit formatting and parsing, and
//! container arithmetic for percentage-based consumables.

pub mod config;
pub mod containers;
pub mod error;
pub mod models;
pub mod prediction;
pub mod types;
pub mod units;
pub mod validation;

pub use crate::config::PredictionConfig;
pub use containers::*;
pub use error::*;
pub use models::*;
pub use prediction::{
    analyze_stocks, predict_stock_ruptures, predict_stock_ruptures_with, PredictionReport,
};
pub use types::*;
pub use units::*;
pub use validation::*;
