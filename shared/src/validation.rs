//! Validation utilities for stock records
//!
//! Batch inputs come from the browser store and may carry hand-edited
//! fixtures. Problems with one record are reported as [`DataQualityError`]s
//! so the rest of the batch can still be processed.

use crate::error::{DataQualityError, StockResult};
use crate::models::Stock;

// ============================================================================
// Field Validations
// ============================================================================

/// Validate that a quantity is a finite, non-negative number
pub fn validate_quantity(quantity: f64) -> Result<(), &'static str> {
    if !quantity.is_finite() {
        return Err("Quantity must be a finite number");
    }
    if quantity < 0.0 {
        return Err("Quantity cannot be negative");
    }
    Ok(())
}

/// Validate that thresholds are non-negative and ordered
pub fn validate_thresholds(min: Option<f64>, max: Option<f64>) -> Result<(), &'static str> {
    for threshold in [min, max].into_iter().flatten() {
        if !threshold.is_finite() || threshold < 0.0 {
            return Err("Thresholds must be finite and non-negative");
        }
    }
    if let (Some(min), Some(max)) = (min, max) {
        if min > max {
            return Err("Min threshold cannot exceed max threshold");
        }
    }
    Ok(())
}

/// Validate a container capacity (percentage points per container)
pub fn validate_container_capacity(capacity: f64) -> Result<(), &'static str> {
    if !capacity.is_finite() || capacity <= 0.0 {
        return Err("Container capacity must be positive");
    }
    Ok(())
}

// ============================================================================
// Record Inspection
// ============================================================================

/// Values of a record that are safe to compute with
#[derive(Debug, Clone, PartialEq)]
pub struct StockInspection {
    /// `None` when the record must be skipped
    pub quantity: Option<f64>,
    pub min_threshold: Option<f64>,
    pub max_threshold: Option<f64>,
    pub issues: Vec<DataQualityError>,
}

/// Inspect record `index` of a batch, defaulting what can be defaulted
pub fn inspect_stock(index: usize, stock: &Stock) -> StockInspection {
    let mut issues = Vec::new();

    let quantity = if !stock.quantity.is_finite() {
        issues.push(DataQualityError::NonFiniteQuantity {
            index,
            stock_id: stock.id.clone(),
        });
        None
    } else if stock.quantity < 0.0 {
        issues.push(DataQualityError::NegativeQuantity {
            index,
            stock_id: stock.id.clone(),
            quantity: stock.quantity,
        });
        Some(0.0)
    } else {
        Some(stock.quantity)
    };

    let sane = |t: Option<f64>| t.filter(|t| t.is_finite() && *t >= 0.0);
    let (mut min_threshold, mut max_threshold) =
        (sane(stock.min_threshold), sane(stock.max_threshold));
    if let (Some(min), Some(max)) = (min_threshold, max_threshold) {
        if validate_thresholds(Some(min), Some(max)).is_err() {
            issues.push(DataQualityError::InvertedThresholds {
                index,
                stock_id: stock.id.clone(),
                min,
                max,
            });
            min_threshold = None;
            max_threshold = None;
        }
    }

    StockInspection {
        quantity,
        min_threshold,
        max_threshold,
        issues,
    }
}

/// Read a JSON array of stocks, skipping elements that are not stock records
///
/// A document that is not an array at all is an error.
pub fn stocks_from_json(json: &str) -> StockResult<(Vec<Stock>, Vec<DataQualityError>)> {
    let elements: Vec<serde_json::Value> = serde_json::from_str(json)?;
    let mut stocks = Vec::with_capacity(elements.len());
    let mut issues = Vec::new();

    for (index, element) in elements.into_iter().enumerate() {
        match serde_json::from_value::<Stock>(element) {
            Ok(stock) => stocks.push(stock),
            Err(e) => {
                let issue = DataQualityError::Malformed {
                    index,
                    reason: e.to_string(),
                };
                tracing::warn!(%issue, "skipping stock record");
                issues.push(issue);
            }
        }
    }

    Ok((stocks, issues))
}
