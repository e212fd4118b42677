//! Formatting and parsing of quantities with their unit
//!
//! Formatting rounds half away from zero to the unit's precision and groups
//! thousands the way the locale does. Parsing accepts what formatting emits
//! as well as what users type ("2.5m", "12%", "1,5 L").

use rust_decimal::prelude::FromPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::models::StockUnit;
use crate::types::{Locale, SymbolPosition};

/// Placeholder shown for a missing quantity
pub const MISSING_QUANTITY: &str = "-";

/// Suffixes in matching order; two-letter suffixes first so "ml" is not read as meters
const SUFFIXES: [(&str, StockUnit); 6] = [
    ("%", StockUnit::Percentage),
    ("ml", StockUnit::Ml),
    ("kg", StockUnit::Kg),
    ("m", StockUnit::Meter),
    ("g", StockUnit::G),
    ("l", StockUnit::Liter),
];

/// Format a quantity in the default locale
pub fn format_quantity_with_unit(quantity: Option<f64>, unit: StockUnit) -> String {
    format_quantity_with_locale(quantity, unit, Locale::default())
}

pub fn format_quantity_with_locale(
    quantity: Option<f64>,
    unit: StockUnit,
    locale: Locale,
) -> String {
    let Some(quantity) = quantity.filter(|q| q.is_finite()) else {
        return MISSING_QUANTITY.to_string();
    };
    let plain = match round_to_unit(quantity, unit) {
        Some(rounded) => rounded.to_string(),
        // Beyond Decimal's range, where f64 has no fractional digits left
        None => format!("{:.*}", unit.decimals() as usize, quantity),
    };

    let number = group_digits(&plain, locale);
    let config = unit.config();
    match (config.symbol, config.position) {
        ("", _) => number,
        (symbol, SymbolPosition::After) => format!("{} {}", number, symbol),
        (symbol, SymbolPosition::Before) => format!("{} {}", symbol, number),
    }
}

/// Round to the unit's decimals; `None` for NaN, infinities and values beyond `Decimal`'s range
pub fn round_to_unit(quantity: f64, unit: StockUnit) -> Option<Decimal> {
    if !quantity.is_finite() {
        return None;
    }
    let decimals = unit.decimals();
    // Values too small for a Decimal are zero at any display precision
    let exact = Decimal::from_f64(quantity)
        .or_else(|| (quantity.abs() < 1.0).then_some(Decimal::ZERO))?;
    let mut rounded =
        exact.round_dp_with_strategy(decimals, RoundingStrategy::MidpointAwayFromZero);
    if rounded.is_zero() {
        rounded = Decimal::ZERO;
    }
    rounded.rescale(decimals);
    Some(rounded)
}

fn group_digits(plain: &str, locale: Locale) -> String {
    let (sign, unsigned) = match plain.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", plain),
    };
    let (integer, fraction) = match unsigned.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (unsigned, None),
    };

    let mut grouped = String::with_capacity(plain.len() + integer.len() / 3);
    grouped.push_str(sign);
    for (i, digit) in integer.chars().enumerate() {
        if i > 0 && (integer.len() - i) % 3 == 0 {
            grouped.push(locale.group_separator());
        }
        grouped.push(digit);
    }
    if let Some(fraction) = fraction {
        grouped.push(locale.decimal_separator());
        grouped.push_str(fraction);
    }
    grouped
}

/// Quantity typed by a user, with the unit its suffix names
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ParsedQuantity {
    /// NaN when the number could not be read
    pub quantity: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit: Option<StockUnit>,
}

impl ParsedQuantity {
    pub fn value(&self) -> Option<f64> {
        self.quantity.is_finite().then_some(self.quantity)
    }

    pub fn is_valid(&self) -> bool {
        self.value().is_some()
    }
}

/// Parse user input in the default locale
pub fn parse_quantity_input(input: &str) -> ParsedQuantity {
    parse_quantity_input_with_locale(input, Locale::default())
}

pub fn parse_quantity_input_with_locale(input: &str, locale: Locale) -> ParsedQuantity {
    let trimmed = input.trim();
    let (number, unit) = SUFFIXES
        .iter()
        .find_map(|(suffix, unit)| {
            strip_suffix_ignore_case(trimmed, suffix).map(|rest| (rest, Some(*unit)))
        })
        .unwrap_or((trimmed, None));

    ParsedQuantity {
        quantity: parse_number(number, locale).unwrap_or(f64::NAN),
        unit,
    }
}

fn strip_suffix_ignore_case<'a>(input: &'a str, suffix: &str) -> Option<&'a str> {
    let split = input.len().checked_sub(suffix.len())?;
    if !input.is_char_boundary(split) {
        return None;
    }
    let (rest, tail) = input.split_at(split);
    tail.eq_ignore_ascii_case(suffix).then_some(rest)
}

fn parse_number(raw: &str, locale: Locale) -> Option<f64> {
    let compact: String = raw.chars().filter(|c| !c.is_whitespace()).collect();
    let normalized = match locale {
        Locale::French => compact.replace(',', "."),
        Locale::English => compact.replace(',', ""),
    };
    if normalized.is_empty() || !normalized.chars().any(|c| c.is_ascii_digit()) {
        return None;
    }
    normalized.parse::<f64>().ok().filter(|q| q.is_finite())
}
