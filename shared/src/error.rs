//! Error types for the inventory core
//!
//! `StockError` is returned to the caller; `DataQualityError` is collected
//! while processing a batch and never aborts it.

use thiserror::Error;

use crate::models::StockUnit;

/// Broad category of a [`StockError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A precondition of a stock operation was not met
    Validation,
    Configuration,
    /// The caller handed over a document that cannot be read at all
    Input,
}

#[derive(Error, Debug)]
pub enum StockError {
    #[error("Container purchases are reserved for percentage stocks (stock unit is {unit})")]
    NotPercentageStock { unit: StockUnit },

    #[error("Container count must be positive, got {0}")]
    NonPositiveContainerCount(i32),

    #[error("Consumed amount must be positive, got {0}")]
    NonPositiveConsumption(f64),

    #[error("Invalid prediction configuration: {0}")]
    InvalidConfig(#[from] validator::ValidationErrors),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Invalid stock document: {0}")]
    Json(#[from] serde_json::Error),
}

impl StockError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            StockError::NotPercentageStock { .. }
            | StockError::NonPositiveContainerCount(_)
            | StockError::NonPositiveConsumption(_) => ErrorKind::Validation,
            StockError::InvalidConfig(_) | StockError::Config(_) => ErrorKind::Configuration,
            StockError::Json(_) => ErrorKind::Input,
        }
    }
}

/// Problem with one record of a batch
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DataQualityError {
    #[error("record #{index} ({stock_id}) has no usable quantity, skipped")]
    NonFiniteQuantity { index: usize, stock_id: String },

    #[error("record #{index} ({stock_id}) has negative quantity {quantity}, treated as 0")]
    NegativeQuantity {
        index: usize,
        stock_id: String,
        quantity: f64,
    },

    #[error("record #{index} ({stock_id}) has min threshold {min} above max {max}, thresholds ignored")]
    InvertedThresholds {
        index: usize,
        stock_id: String,
        min: f64,
        max: f64,
    },

    #[error("record #{index} is malformed, skipped: {reason}")]
    Malformed { index: usize, reason: String },
}

impl DataQualityError {
    pub fn index(&self) -> usize {
        match self {
            DataQualityError::NonFiniteQuantity { index, .. }
            | DataQualityError::NegativeQuantity { index, .. }
            | DataQualityError::InvertedThresholds { index, .. }
            | DataQualityError::Malformed { index, .. } => *index,
        }
    }

    /// Whether the record was dropped from the batch
    pub fn is_skipped(&self) -> bool {
        matches!(
            self,
            DataQualityError::NonFiniteQuantity { .. } | DataQualityError::Malformed { .. }
        )
    }
}

pub type StockResult<T> = Result<T, StockError>;
