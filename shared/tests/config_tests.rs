//! Prediction configuration tests

use shared::{ErrorKind, PredictionConfig, StockError};
use validator::Validate;

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod unit_tests {
    use super::*;

    /// Built-in defaults pass validation
    #[test]
    fn test_defaults_are_valid() {
        let config = PredictionConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.history_days, 30);
        assert_eq!(config.reorder_lead_time_days, 3);
        assert_eq!(config.max_projection_days, 365);
        assert_eq!(config.default_capacity, 100.0);
    }

    /// An empty document yields the defaults
    #[test]
    fn test_empty_document() {
        let config = PredictionConfig::from_toml_str("").unwrap();
        assert_eq!(config, PredictionConfig::default());
    }

    /// File values override defaults; unset keys keep them
    #[test]
    fn test_toml_overrides() {
        let config = PredictionConfig::from_toml_str(
            r#"
            history_days = 60
            noise_ratio = 0.1
            seed = 42
            "#,
        )
        .unwrap();

        assert_eq!(config.history_days, 60);
        assert_eq!(config.noise_ratio, 0.1);
        assert_eq!(config.seed, 42);
        assert_eq!(config.confidence_z, 1.96);
        assert_eq!(config.reorder_lead_time_days, 3);
    }

    /// Out-of-range values are configuration errors
    #[test]
    fn test_rejects_out_of_range_values() {
        for document in [
            "history_days = 2",
            "noise_ratio = 1.5",
            "max_projection_days = 0",
            "default_capacity = 0.0",
            "reorder_lead_time_days = 120",
        ] {
            let err = PredictionConfig::from_toml_str(document).unwrap_err();
            assert!(matches!(err, StockError::InvalidConfig(_)), "{document}");
            assert_eq!(err.kind(), ErrorKind::Configuration);
        }
    }

    /// Unparseable documents are configuration errors too
    #[test]
    fn test_rejects_malformed_document() {
        let err = PredictionConfig::from_toml_str("history_days = = 3").unwrap_err();
        assert!(matches!(err, StockError::Config(_)));
        assert_eq!(err.kind(), ErrorKind::Configuration);
    }

    /// A missing optional file falls back to defaults
    #[test]
    fn test_load_without_file() {
        let config = PredictionConfig::load(Some("does-not-exist/prediction")).unwrap();
        assert!(config.validate().is_ok());
    }
}
