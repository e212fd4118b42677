//! Unit formatting and parsing tests
//!
//! Tests for quantity display including:
//! - Unit configuration totality
//! - Missing quantity placeholder
//! - Format/parse round trip

use proptest::prelude::*;
use shared::{
    format_quantity_with_locale, format_quantity_with_unit, get_unit_label, parse_quantity_input,
    parse_quantity_input_with_locale, Locale, StockUnit,
};

// Helper to round like the unit does
fn rounded(quantity: f64, unit: StockUnit) -> f64 {
    let factor = 10f64.powi(unit.decimals() as i32);
    (quantity * factor).round() / factor
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod unit_tests {
    use super::*;

    /// Every unit has a non-empty label in every locale
    #[test]
    fn test_unit_labels_are_total() {
        for unit in StockUnit::ALL {
            assert!(!get_unit_label(unit).is_empty());
            assert!(!unit.label(Locale::English).is_empty());
        }
        assert_eq!(get_unit_label(StockUnit::Percentage), "Pourcentage");
        assert_eq!(StockUnit::Kg.label(Locale::English), "Kilograms");
    }

    /// Default consumption table
    #[test]
    fn test_default_consumption() {
        assert_eq!(StockUnit::Percentage.default_consumption(), 12.0);
        assert_eq!(StockUnit::Ml.default_consumption(), 75.0);
        assert_eq!(StockUnit::Liter.default_consumption(), 75.0);
        assert_eq!(StockUnit::G.default_consumption(), 200.0);
        assert_eq!(StockUnit::Kg.default_consumption(), 200.0);
        assert_eq!(StockUnit::Meter.default_consumption(), 1.5);
        assert_eq!(StockUnit::Piece.default_consumption(), 1.0);
    }

    /// Missing quantities render as a dash
    #[test]
    fn test_missing_quantity_placeholder() {
        assert_eq!(format_quantity_with_unit(None, StockUnit::Piece), "-");
        assert_eq!(format_quantity_with_unit(Some(f64::NAN), StockUnit::Ml), "-");
        assert_eq!(format_quantity_with_unit(Some(f64::INFINITY), StockUnit::Kg), "-");
    }

    /// French formatting: narrow no-break space groups, comma decimals
    #[test]
    fn test_format_french() {
        assert_eq!(format_quantity_with_unit(Some(12.0), StockUnit::Piece), "12");
        assert_eq!(format_quantity_with_unit(Some(53.0), StockUnit::Percentage), "53 %");
        assert_eq!(format_quantity_with_unit(Some(1250.0), StockUnit::Ml), "1\u{202f}250 ml");
        assert_eq!(format_quantity_with_unit(Some(2.5), StockUnit::Meter), "2,50 m");
        assert_eq!(format_quantity_with_unit(Some(1.25), StockUnit::Liter), "1,25 L");
        assert_eq!(format_quantity_with_unit(Some(199.6), StockUnit::G), "200 g");
    }

    /// English formatting: comma groups, dot decimals
    #[test]
    fn test_format_english() {
        assert_eq!(
            format_quantity_with_locale(Some(1234567.891), StockUnit::Kg, Locale::English),
            "1,234,567.89 kg"
        );
        assert_eq!(
            format_quantity_with_locale(Some(-1500.0), StockUnit::Piece, Locale::English),
            "-1,500"
        );
    }

    /// Rounding is half away from zero
    #[test]
    fn test_format_rounds_half_away_from_zero() {
        assert_eq!(format_quantity_with_unit(Some(0.5), StockUnit::Piece), "1");
        assert_eq!(format_quantity_with_unit(Some(-0.5), StockUnit::Piece), "-1");
        assert_eq!(format_quantity_with_unit(Some(12.5), StockUnit::Percentage), "13 %");
    }

    /// Quantities too large for a Decimal still format as numbers
    #[test]
    fn test_format_huge_quantity() {
        let formatted = format_quantity_with_unit(Some(1e29), StockUnit::Kg);
        assert_ne!(formatted, "-");
        assert!(formatted.ends_with(",00 kg"), "{formatted}");
        let digits = formatted.chars().filter(char::is_ascii_digit).count();
        assert!((31..=32).contains(&digits), "{formatted}");

        let formatted =
            format_quantity_with_locale(Some(-1e30), StockUnit::Piece, Locale::English);
        assert!(formatted.starts_with("-1,"), "{formatted}");
        assert!(!formatted.contains('.'), "{formatted}");
    }

    /// Suffix recognition
    #[test]
    fn test_parse_suffixes() {
        let cases = [
            ("12%", Some(StockUnit::Percentage), 12.0),
            ("2.5m", Some(StockUnit::Meter), 2.5),
            ("250ml", Some(StockUnit::Ml), 250.0),
            ("500g", Some(StockUnit::G), 500.0),
            ("1.2kg", Some(StockUnit::Kg), 1.2),
            ("3l", Some(StockUnit::Liter), 3.0),
            ("3 L", Some(StockUnit::Liter), 3.0),
            ("250 ML", Some(StockUnit::Ml), 250.0),
            ("42", None, 42.0),
        ];

        for (input, unit, quantity) in cases {
            let parsed = parse_quantity_input(input);
            assert_eq!(parsed.unit, unit, "{input}");
            assert!((parsed.quantity - quantity).abs() < 1e-12, "{input}");
        }
    }

    /// Decimal commas and grouping spaces
    #[test]
    fn test_parse_localized_numbers() {
        assert_eq!(parse_quantity_input("1,5 L").value(), Some(1.5));
        assert_eq!(parse_quantity_input("1\u{202f}250 ml").value(), Some(1250.0));
        assert_eq!(parse_quantity_input("1\u{a0}250").value(), Some(1250.0));
        assert_eq!(
            parse_quantity_input_with_locale("1,250.75 kg", Locale::English).value(),
            Some(1250.75)
        );
    }

    /// Unreadable input yields NaN, never a panic
    #[test]
    fn test_parse_invalid_input() {
        let parsed = parse_quantity_input("beaucoup");
        assert!(parsed.quantity.is_nan());
        assert!(!parsed.is_valid());
        assert_eq!(parsed.unit, None);

        let parsed = parse_quantity_input("kg");
        assert!(parsed.quantity.is_nan());
        assert_eq!(parsed.unit, Some(StockUnit::Kg));

        assert!(parse_quantity_input("").quantity.is_nan());
        assert!(parse_quantity_input("1.2.3m").quantity.is_nan());
        assert!(parse_quantity_input("inf").quantity.is_nan());
    }
}

// ============================================================================
// Property-Based Tests
// ============================================================================

#[cfg(test)]
mod property_tests {
    use super::*;

    fn unit_strategy() -> impl Strategy<Value = StockUnit> {
        prop::sample::select(StockUnit::ALL.to_vec())
    }

    fn locale_strategy() -> impl Strategy<Value = Locale> {
        prop_oneof![Just(Locale::French), Just(Locale::English)]
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// Parsing a formatted quantity recovers the rounded number and the unit
        #[test]
        fn prop_format_parse_round_trip(
            quantity in -1_000_000.0f64..1_000_000.0f64,
            unit in unit_strategy(),
            locale in locale_strategy()
        ) {
            let formatted = format_quantity_with_locale(Some(quantity), unit, locale);
            let parsed = parse_quantity_input_with_locale(&formatted, locale);

            prop_assert!((parsed.quantity - rounded(quantity, unit)).abs() < 1e-6, "{}", formatted);
            if unit == StockUnit::Piece {
                prop_assert_eq!(parsed.unit, None);
            } else {
                prop_assert_eq!(parsed.unit, Some(unit));
            }
        }

        /// Formatting never panics; only non-finite input yields the placeholder
        #[test]
        fn prop_format_is_total(quantity in any::<f64>(), unit in unit_strategy()) {
            let formatted = format_quantity_with_unit(Some(quantity), unit);
            if quantity.is_finite() {
                prop_assert_ne!(formatted, "-");
            } else {
                prop_assert_eq!(formatted, "-");
            }
        }
    }
}
