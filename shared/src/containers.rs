//! Container-based consumables (paint tubes, bottles)
//!
//! A percentage stock counts its quantity in percentage points: one full
//! container contributes `container_capacity` points (100 unless recorded
//! otherwise). None of these functions mutate the stock; the caller applies
//! the returned values to its store.

use crate::error::{StockError, StockResult};
use crate::models::{ContainerInfo, PurchaseResult, Stock, StockUnit, UsageResult};
use crate::units::format_quantity_with_unit;

/// Add `containers_count` full containers to a percentage stock
pub fn purchase_containers(stock: &Stock, containers_count: i32) -> StockResult<PurchaseResult> {
    let unit = stock.unit();
    if unit != StockUnit::Percentage {
        return Err(StockError::NotPercentageStock { unit });
    }
    if containers_count <= 0 {
        return Err(StockError::NonPositiveContainerCount(containers_count));
    }

    let added = containers_count.unsigned_abs();
    let capacity = stock.container_capacity();
    let new_containers_owned = stock.containers_owned().saturating_add(added);
    let new_quantity = current_quantity(stock) + f64::from(added) * capacity;
    let total_capacity = calculate_total_capacity(new_containers_owned, capacity);

    tracing::debug!(
        stock_id = %stock.id,
        added,
        new_containers_owned,
        new_quantity,
        "containers purchased"
    );

    Ok(PurchaseResult {
        new_quantity,
        new_containers_owned,
        total_capacity,
        message: format!(
            "{} container(s) added to {}: {} available, {} capacity",
            added,
            stock.name,
            format_quantity_with_unit(Some(new_quantity), unit),
            format_quantity_with_unit(Some(total_capacity), unit),
        ),
    })
}

/// Record one usage session, consuming `amount_used` or the unit's default
///
/// Remaining sessions are always estimated with the unit's default
/// consumption, even when an explicit amount was given.
pub fn record_usage(stock: &Stock, amount_used: Option<f64>) -> StockResult<UsageResult> {
    let unit = stock.unit();
    let default_consumption = unit.default_consumption();
    let consumed = amount_used.unwrap_or(default_consumption);
    if !(consumed > 0.0) || !consumed.is_finite() {
        return Err(StockError::NonPositiveConsumption(consumed));
    }

    let new_quantity = (current_quantity(stock) - consumed).max(0.0);
    let remaining_sessions = (new_quantity / default_consumption).floor() as u32;

    tracing::debug!(
        stock_id = %stock.id,
        consumed,
        new_quantity,
        remaining_sessions,
        "usage recorded"
    );

    Ok(UsageResult {
        new_quantity,
        consumed,
        remaining_sessions,
        message: format!(
            "Used {} of {}: {} left (about {} session(s))",
            format_quantity_with_unit(Some(consumed), unit),
            stock.name,
            format_quantity_with_unit(Some(new_quantity), unit),
            remaining_sessions,
        ),
    })
}

/// Capacity, in percentage points, of all owned containers
pub fn calculate_total_capacity(containers_owned: u32, container_capacity: f64) -> f64 {
    f64::from(containers_owned) * container_capacity
}

/// Absolute volume held by `percentage` points, 100 being one full container
pub fn percentage_to_volume(percentage: f64, container_volume: f64) -> f64 {
    percentage / 100.0 * container_volume
}

/// Percentage points held by an absolute `volume`
///
/// The result is clamped to `[0, total_capacity]`: a volume beyond what the
/// owned containers hold reports `total_capacity`, a negative one reports 0.
/// Returns 0 when `container_volume` or `total_capacity` is not positive.
pub fn volume_to_percentage(volume: f64, container_volume: f64, total_capacity: f64) -> f64 {
    if !(total_capacity > 0.0) || !(container_volume > 0.0) {
        return 0.0;
    }
    (volume / container_volume * 100.0).clamp(0.0, total_capacity)
}

/// Whole and partial containers of a percentage stock; `None` for other units
pub fn container_info(stock: &Stock) -> Option<ContainerInfo> {
    if stock.unit() != StockUnit::Percentage {
        return None;
    }

    let capacity = stock.container_capacity();
    let containers_owned = stock.containers_owned();
    let total_capacity = calculate_total_capacity(containers_owned, capacity);
    let quantity = current_quantity(stock);
    let full_containers = (quantity / capacity).floor() as u32;
    let partial = quantity - f64::from(full_containers) * capacity;
    let fill_ratio = if total_capacity > 0.0 {
        (quantity / total_capacity).min(1.0)
    } else {
        0.0
    };

    Some(ContainerInfo {
        containers_owned,
        container_capacity: capacity,
        total_capacity,
        full_containers,
        partial_percentage: partial / capacity * 100.0,
        fill_ratio,
    })
}

/// Quantity usable in arithmetic: NaN and negatives count as empty
fn current_quantity(stock: &Stock) -> f64 {
    if stock.quantity.is_finite() {
        stock.quantity.max(0.0)
    } else {
        0.0
    }
}
