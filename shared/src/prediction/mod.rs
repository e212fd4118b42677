//! Stock rupture prediction
//!
//! For every stock a daily history is simulated, a linear trend is fitted
//! to it and the current quantity is projected forward at the fitted rate.
//! The confidence band moves the slope by `confidence_z` standard errors.
//!
//! The engine is pure: `today` and the configuration are explicit, and the
//! simulated history is seeded from the stock snapshot.

mod regression;
mod simulation;

pub use regression::LinearFit;
pub use simulation::{depletion_fraction, simulate_history, snapshot_seed};

use chrono::{Days, NaiveDate, Utc};

use crate::config::PredictionConfig;
use crate::error::DataQualityError;
use crate::models::{RiskLevel, Stock, StockPrediction, StockUnit};
use crate::validation::inspect_stock;

/// Slopes flatter than this are treated as "not depleting"
const SLOPE_EPSILON: f64 = 1e-9;

/// Predictions of a batch together with the problems found in its records
#[derive(Debug, Clone, Default)]
pub struct PredictionReport {
    pub predictions: Vec<StockPrediction>,
    pub issues: Vec<DataQualityError>,
}

impl PredictionReport {
    pub fn skipped(&self) -> usize {
        self.issues.iter().filter(|i| i.is_skipped()).count()
    }
}

/// Predict ruptures with the default policy, as of today (UTC)
pub fn predict_stock_ruptures(stocks: &[Stock]) -> Vec<StockPrediction> {
    predict_stock_ruptures_with(stocks, &PredictionConfig::default(), Utc::now().date_naive())
}

pub fn predict_stock_ruptures_with(
    stocks: &[Stock],
    config: &PredictionConfig,
    today: NaiveDate,
) -> Vec<StockPrediction> {
    analyze_stocks(stocks, config, today).predictions
}

/// Predict every usable record; unusable ones are reported, not fatal
#[tracing::instrument(skip_all, fields(stocks = stocks.len(), today = %today))]
pub fn analyze_stocks(
    stocks: &[Stock],
    config: &PredictionConfig,
    today: NaiveDate,
) -> PredictionReport {
    let mut report = PredictionReport {
        predictions: Vec::with_capacity(stocks.len()),
        issues: Vec::new(),
    };

    for (index, stock) in stocks.iter().enumerate() {
        let inspection = inspect_stock(index, stock);
        for issue in &inspection.issues {
            tracing::warn!(%issue, "stock data quality issue");
        }
        report.issues.extend(inspection.issues);

        let Some(quantity) = inspection.quantity else {
            continue;
        };
        let prediction = predict_stock(stock, quantity, inspection.max_threshold, config, today);
        tracing::debug!(
            stock_id = %prediction.stock_id,
            risk = %prediction.risk_level,
            days = ?prediction.days_until_rupture,
            confidence = prediction.confidence,
            "stock rupture predicted"
        );
        report.predictions.push(prediction);
    }

    tracing::info!(
        predicted = report.predictions.len(),
        skipped = report.skipped(),
        at_risk = report.predictions.iter().filter(|p| p.is_at_risk()).count(),
        "rupture predictions computed"
    );
    report
}

fn predict_stock(
    stock: &Stock,
    quantity: f64,
    max_threshold: Option<f64>,
    config: &PredictionConfig,
    today: NaiveDate,
) -> StockPrediction {
    let target = max_threshold
        .filter(|max| *max > 0.0)
        .unwrap_or(config.default_capacity);
    let reference = target.max(quantity);

    let history = simulate_history(stock, quantity, reference, config);
    let (slope, spread, confidence) = match LinearFit::fit(&history) {
        Some(fit) => (
            fit.slope,
            config.confidence_z * fit.slope_std_error,
            fit.r_squared,
        ),
        None => (0.0, 0.0, 0.0),
    };
    let daily_consumption_rate = (-slope).max(0.0);

    let horizon = config.max_projection_days;
    let (days, pessimistic, optimistic) = if quantity <= 0.0 {
        (Some(0), Some(0), Some(0))
    } else {
        (
            project_rupture(quantity, slope, horizon),
            project_rupture(quantity, slope - spread, horizon),
            project_rupture(quantity, slope + spread, horizon),
        )
    };

    let lead_time = config.reorder_lead_time_days;
    let reorder_quantity = target - quantity + daily_consumption_rate * f64::from(lead_time);

    StockPrediction {
        stock_id: stock.id.clone(),
        stock_name: stock.name.clone(),
        risk_level: RiskLevel::from_days(days),
        days_until_rupture: days,
        date_of_rupture: days.and_then(|d| add_days(today, d)),
        confidence,
        daily_consumption_rate,
        current_quantity: quantity,
        days_until_rupture_pessimistic: pessimistic,
        days_until_rupture_optimistic: optimistic,
        recommended_reorder_date: days.and_then(|d| add_days(today, d.saturating_sub(lead_time))),
        recommended_reorder_quantity: round_up_to_unit(reorder_quantity, stock.unit()),
    }
}

/// Whole days until `quantity` reaches zero at `slope`; `None` if not depleting
fn project_rupture(quantity: f64, slope: f64, horizon: u32) -> Option<u32> {
    if !(slope < -SLOPE_EPSILON) {
        return None;
    }
    let days = (quantity / -slope).floor().min(f64::from(horizon));
    Some(days as u32)
}

fn add_days(date: NaiveDate, days: u32) -> Option<NaiveDate> {
    date.checked_add_days(Days::new(u64::from(days)))
}

/// Round up to the unit's decimals; never negative
fn round_up_to_unit(value: f64, unit: StockUnit) -> f64 {
    if !(value > 0.0) {
        return 0.0;
    }
    let factor = 10f64.powi(unit.decimals() as i32);
    (value * factor - 1e-9).ceil() / factor
}
