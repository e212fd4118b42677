//! Results of container purchases and usage sessions

use serde::{Deserialize, Serialize};

use super::Stock;

/// Outcome of buying containers for a percentage stock
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PurchaseResult {
    pub new_quantity: f64,
    pub new_containers_owned: u32,
    pub total_capacity: f64,
    pub message: String,
}

impl PurchaseResult {
    /// Copy of `stock` with the purchase applied
    pub fn apply_to(&self, stock: &Stock) -> Stock {
        Stock {
            quantity: self.new_quantity,
            containers_owned: Some(self.new_containers_owned),
            ..stock.clone()
        }
    }
}

/// Outcome of recording one usage session
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UsageResult {
    pub new_quantity: f64,
    pub consumed: f64,
    /// Sessions left at the unit's default consumption
    pub remaining_sessions: u32,
    pub message: String,
}

impl UsageResult {
    pub fn apply_to(&self, stock: &Stock) -> Stock {
        Stock {
            quantity: self.new_quantity,
            ..stock.clone()
        }
    }
}

/// Breakdown of a percentage stock into whole and partial containers
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ContainerInfo {
    pub containers_owned: u32,
    pub container_capacity: f64,
    pub total_capacity: f64,
    pub full_containers: u32,
    /// Fill level of the opened container, in percent of one container
    pub partial_percentage: f64,
    /// Quantity over total capacity, 0 when nothing is owned
    pub fill_ratio: f64,
}
