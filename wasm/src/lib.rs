//! WebAssembly module for the stock inventory application
//!
//! Provides client-side computation for:
//! - Stock rupture predictions
//! - Quantity formatting and parsing
//! - Container purchases and usage sessions
//!
//! Structured values cross the boundary as camelCase JSON strings.

mod logging;

use chrono::NaiveDate;
use serde::Serialize;
use wasm_bindgen::prelude::*;

use shared::{
    format_quantity_with_locale, parse_quantity_input_with_locale, stocks_from_json, Locale,
    PredictionConfig, PredictionSummary, Stock, StockPrediction, StockStatus, StockUnit,
};

pub use logging::init_logging;

/// Initialize the WASM module
#[wasm_bindgen(start)]
pub fn init() {
    // Set up panic hook for better error messages in browser console
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    init_logging();
}

/// Format a quantity for display, e.g. `"1 250 ml"`
#[wasm_bindgen]
pub fn format_quantity(
    quantity: Option<f64>,
    unit: &str,
    locale: Option<String>,
) -> Result<String, JsValue> {
    let unit = parse_unit(unit)?;
    Ok(format_quantity_with_locale(quantity, unit, parse_locale(locale)))
}

/// Human label of a unit
#[wasm_bindgen]
pub fn unit_label(unit: &str, locale: Option<String>) -> Result<String, JsValue> {
    Ok(parse_unit(unit)?.label(parse_locale(locale)).to_string())
}

/// Parse user input such as `"2,5 m"` into `{ quantity, unit }`
#[wasm_bindgen]
pub fn parse_quantity(input: &str, locale: Option<String>) -> Result<String, JsValue> {
    to_json(&parse_quantity_input_with_locale(input, parse_locale(locale)))
}

/// Add containers to a percentage stock; returns a `PurchaseResult`
#[wasm_bindgen]
pub fn purchase_containers(stock_json: &str, containers_count: i32) -> Result<String, JsValue> {
    let stock = parse_stock(stock_json)?;
    let result = shared::purchase_containers(&stock, containers_count).map_err(to_js_error)?;
    to_json(&result)
}

/// Record a usage session; returns a `UsageResult`
#[wasm_bindgen]
pub fn record_usage(stock_json: &str, amount_used: Option<f64>) -> Result<String, JsValue> {
    let stock = parse_stock(stock_json)?;
    let result = shared::record_usage(&stock, amount_used).map_err(to_js_error)?;
    to_json(&result)
}

/// Predict ruptures for a JSON array of stocks
///
/// `today` is `YYYY-MM-DD`; the browser date is used when omitted.
/// Unusable records are logged and left out of the result.
#[wasm_bindgen]
pub fn predict_stock_ruptures(
    stocks_json: &str,
    today: Option<String>,
    config_toml: Option<String>,
) -> Result<String, JsValue> {
    let predictions = predict(stocks_json, today.as_deref(), config_toml.as_deref())?;
    to_json(&predictions)
}

/// Aggregate a JSON array of predictions into a `PredictionSummary`
#[wasm_bindgen]
pub fn summarize_predictions(predictions_json: &str) -> Result<String, JsValue> {
    let predictions: Vec<StockPrediction> =
        serde_json::from_str(predictions_json).map_err(to_js_error)?;
    to_json(&PredictionSummary::from_predictions(&predictions))
}

/// Status of a stock from its level and thresholds, e.g. `"out-of-stock"`
#[wasm_bindgen]
pub fn derive_stock_status(
    quantity: f64,
    min_threshold: Option<f64>,
    max_threshold: Option<f64>,
) -> String {
    StockStatus::from_levels(quantity, min_threshold, max_threshold)
        .as_str()
        .to_string()
}

#[wasm_bindgen]
pub fn total_capacity(containers_owned: u32, container_capacity: f64) -> f64 {
    shared::calculate_total_capacity(containers_owned, container_capacity)
}

#[wasm_bindgen]
pub fn percentage_to_volume(percentage: f64, container_volume: f64) -> f64 {
    shared::percentage_to_volume(percentage, container_volume)
}

#[wasm_bindgen]
pub fn volume_to_percentage(volume: f64, container_volume: f64, total_capacity: f64) -> f64 {
    shared::volume_to_percentage(volume, container_volume, total_capacity)
}

/// Container breakdown of a percentage stock, `"null"` for other units
#[wasm_bindgen]
pub fn container_info(stock_json: &str) -> Result<String, JsValue> {
    let stock = parse_stock(stock_json)?;
    to_json(&shared::container_info(&stock))
}

// ============================================================================
// Helpers
// ============================================================================

fn predict(
    stocks_json: &str,
    today: Option<&str>,
    config_toml: Option<&str>,
) -> Result<Vec<StockPrediction>, JsValue> {
    let (stocks, _) = stocks_from_json(stocks_json).map_err(to_js_error)?;
    let config = match config_toml {
        Some(toml) => PredictionConfig::from_toml_str(toml).map_err(to_js_error)?,
        None => PredictionConfig::default(),
    };
    let today = match today {
        Some(date) => NaiveDate::parse_from_str(date, "%Y-%m-%d")
            .map_err(|e| JsValue::from_str(&format!("Invalid date {}: {}", date, e)))?,
        None => browser_today()?,
    };

    Ok(shared::predict_stock_ruptures_with(&stocks, &config, today))
}

fn browser_today() -> Result<NaiveDate, JsValue> {
    let now = js_sys::Date::new_0();
    NaiveDate::from_ymd_opt(
        now.get_full_year() as i32,
        now.get_month() + 1,
        now.get_date(),
    )
    .ok_or_else(|| JsValue::from_str("Browser returned an invalid date"))
}

fn parse_stock(stock_json: &str) -> Result<Stock, JsValue> {
    serde_json::from_str(stock_json)
        .map_err(|e| JsValue::from_str(&format!("Invalid stock JSON: {}", e)))
}

fn parse_unit(unit: &str) -> Result<StockUnit, JsValue> {
    unit.parse::<StockUnit>().map_err(|e| JsValue::from_str(&e))
}

fn parse_locale(locale: Option<String>) -> Locale {
    locale
        .and_then(|code| code.parse().ok())
        .unwrap_or_default()
}

fn to_json<T: Serialize>(value: &T) -> Result<String, JsValue> {
    serde_json::to_string(value).map_err(to_js_error)
}

fn to_js_error(error: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&error.to_string())
}
