//! Stock records as held by the inventory store

use serde::{Deserialize, Deserializer, Serialize};

use super::StockUnit;

/// Capacity of one container, in percentage points, when none is recorded
pub const DEFAULT_CONTAINER_CAPACITY: f64 = 100.0;

/// An inventory record tracked by quantity and unit
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Stock {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    #[serde(alias = "label")]
    pub name: String,
    /// NaN when the record carried no usable quantity
    #[serde(default = "missing_quantity", deserialize_with = "deserialize_quantity")]
    pub quantity: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_threshold: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_threshold: Option<f64>,
    #[serde(default)]
    pub status: StockStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<StockUnit>,
    /// Percentage points contributed by one container
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub container_capacity: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub containers_owned: Option<u32>,
}

impl Stock {
    pub fn new(id: impl Into<String>, name: impl Into<String>, quantity: f64) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            quantity,
            min_threshold: None,
            max_threshold: None,
            status: StockStatus::Optimal,
            unit: None,
            container_capacity: None,
            containers_owned: None,
        }
    }

    pub fn with_unit(mut self, unit: StockUnit) -> Self {
        self.unit = Some(unit);
        self
    }

    pub fn with_status(mut self, status: StockStatus) -> Self {
        self.status = status;
        self
    }

    pub fn with_thresholds(mut self, min: Option<f64>, max: Option<f64>) -> Self {
        self.min_threshold = min;
        self.max_threshold = max;
        self
    }

    pub fn with_containers(mut self, owned: u32, capacity: f64) -> Self {
        self.containers_owned = Some(owned);
        self.container_capacity = Some(capacity);
        self
    }

    /// Unit of the stock, `piece` when unset
    pub fn unit(&self) -> StockUnit {
        self.unit.unwrap_or_default()
    }

    pub fn container_capacity(&self) -> f64 {
        self.container_capacity
            .filter(|c| c.is_finite() && *c > 0.0)
            .unwrap_or(DEFAULT_CONTAINER_CAPACITY)
    }

    pub fn containers_owned(&self) -> u32 {
        self.containers_owned.unwrap_or(0)
    }
}

/// Stock level relative to its thresholds
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "kebab-case")]
pub enum StockStatus {
    #[default]
    Optimal,
    Low,
    Critical,
    OutOfStock,
    Overstocked,
}

impl StockStatus {
    /// Status the store assigns for a quantity and its thresholds
    pub fn from_levels(quantity: f64, min: Option<f64>, max: Option<f64>) -> Self {
        if !(quantity > 0.0) {
            return StockStatus::OutOfStock;
        }
        if let Some(min) = min.filter(|m| m.is_finite() && *m > 0.0) {
            if quantity <= min / 2.0 {
                return StockStatus::Critical;
            }
            if quantity <= min {
                return StockStatus::Low;
            }
        }
        match max {
            Some(max) if max.is_finite() && quantity > max => StockStatus::Overstocked,
            _ => StockStatus::Optimal,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            StockStatus::Optimal => "optimal",
            StockStatus::Low => "low",
            StockStatus::Critical => "critical",
            StockStatus::OutOfStock => "out-of-stock",
            StockStatus::Overstocked => "overstocked",
        }
    }
}

impl std::fmt::Display for StockStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StockStatus::Optimal => write!(f, "Optimal"),
            StockStatus::Low => write!(f, "Low"),
            StockStatus::Critical => write!(f, "Critical"),
            StockStatus::OutOfStock => write!(f, "Out of Stock"),
            StockStatus::Overstocked => write!(f, "Overstocked"),
        }
    }
}

fn missing_quantity() -> f64 {
    f64::NAN
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Text(String),
    Integer(i64),
}

fn deserialize_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match RawId::deserialize(deserializer)? {
        RawId::Text(id) => id,
        RawId::Integer(id) => id.to_string(),
    })
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawQuantity {
    Number(f64),
    Text(String),
    Missing(()),
}

/// Accepts numbers, numeric strings and null; anything unusable becomes NaN
fn deserialize_quantity<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match RawQuantity::deserialize(deserializer)? {
        RawQuantity::Number(q) => q,
        RawQuantity::Text(text) => text.trim().parse().unwrap_or(f64::NAN),
        RawQuantity::Missing(()) => f64::NAN,
    })
}
