//! Rupture prediction models

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::types::Locale;

/// Urgency of a predicted rupture
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    /// 3 days or less
    Critical,
    /// 4-7 days
    High,
    /// 8-14 days
    Medium,
    /// 15 days or more, or no rupture in sight
    Low,
}

impl RiskLevel {
    pub const ALL: [RiskLevel; 4] = [
        RiskLevel::Critical,
        RiskLevel::High,
        RiskLevel::Medium,
        RiskLevel::Low,
    ];

    pub fn from_days(days_until_rupture: Option<u32>) -> Self {
        match days_until_rupture {
            Some(0..=3) => RiskLevel::Critical,
            Some(4..=7) => RiskLevel::High,
            Some(8..=14) => RiskLevel::Medium,
            Some(_) | None => RiskLevel::Low,
        }
    }

    /// Legend used by the analytics dashboard
    pub fn label(&self, locale: Locale) -> &'static str {
        match (locale, self) {
            (Locale::French, RiskLevel::Critical) => "Critique (≤3j)",
            (Locale::French, RiskLevel::High) => "Élevé (4-7j)",
            (Locale::French, RiskLevel::Medium) => "Moyen (8-14j)",
            (Locale::French, RiskLevel::Low) => "Faible (15j+)",
            (Locale::English, RiskLevel::Critical) => "Critical (≤3d)",
            (Locale::English, RiskLevel::High) => "High (4-7d)",
            (Locale::English, RiskLevel::Medium) => "Medium (8-14d)",
            (Locale::English, RiskLevel::Low) => "Low (15d+)",
        }
    }
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RiskLevel::Critical => write!(f, "Critical"),
            RiskLevel::High => write!(f, "High"),
            RiskLevel::Medium => write!(f, "Medium"),
            RiskLevel::Low => write!(f, "Low"),
        }
    }
}

/// Predicted rupture of one stock, computed fresh from a snapshot
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StockPrediction {
    pub stock_id: String,
    pub stock_name: String,
    pub risk_level: RiskLevel,
    pub days_until_rupture: Option<u32>,
    pub date_of_rupture: Option<NaiveDate>,
    /// Fit quality between 0 and 1
    pub confidence: f64,
    /// Units consumed per day, never negative
    pub daily_consumption_rate: f64,
    pub current_quantity: f64,
    /// Faster depletion bound
    pub days_until_rupture_pessimistic: Option<u32>,
    /// Slower depletion bound
    pub days_until_rupture_optimistic: Option<u32>,
    pub recommended_reorder_date: Option<NaiveDate>,
    pub recommended_reorder_quantity: f64,
}

impl StockPrediction {
    pub fn is_at_risk(&self) -> bool {
        matches!(self.risk_level, RiskLevel::Critical | RiskLevel::High)
    }
}

/// Aggregate view of a batch of predictions
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct PredictionSummary {
    pub total: usize,
    pub critical: usize,
    pub high: usize,
    pub medium: usize,
    pub low: usize,
    /// 0 for an empty batch
    pub average_confidence: f64,
    pub next_rupture: Option<NaiveDate>,
}

impl PredictionSummary {
    pub fn from_predictions(predictions: &[StockPrediction]) -> Self {
        let mut summary = PredictionSummary {
            total: predictions.len(),
            ..Default::default()
        };

        for prediction in predictions {
            match prediction.risk_level {
                RiskLevel::Critical => summary.critical += 1,
                RiskLevel::High => summary.high += 1,
                RiskLevel::Medium => summary.medium += 1,
                RiskLevel::Low => summary.low += 1,
            }
        }

        if !predictions.is_empty() {
            let total: f64 = predictions.iter().map(|p| p.confidence).sum();
            summary.average_confidence = total / predictions.len() as f64;
        }

        summary.next_rupture = predictions.iter().filter_map(|p| p.date_of_rupture).min();
        summary
    }

    pub fn count(&self, level: RiskLevel) -> usize {
        match level {
            RiskLevel::Critical => self.critical,
            RiskLevel::High => self.high,
            RiskLevel::Medium => self.medium,
            RiskLevel::Low => self.low,
        }
    }
}

/// Order predictions by how soon they rupture; no rupture in sight goes last
pub fn sort_by_urgency(predictions: &mut [StockPrediction]) {
    predictions.sort_by(|a, b| {
        let days = |p: &StockPrediction| p.days_until_rupture.unwrap_or(u32::MAX);
        days(a)
            .cmp(&days(b))
            .then_with(|| a.stock_name.cmp(&b.stock_name))
    });
}
