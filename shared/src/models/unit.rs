//! Measurement units and their display configuration

use serde::{Deserialize, Serialize};

use crate::types::{Locale, SymbolPosition};

/// Unit a stock quantity is measured in
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum StockUnit {
    #[default]
    Piece,
    /// Percentage of a container's capacity (paint tubes, bottles)
    Percentage,
    Ml,
    G,
    Meter,
    Liter,
    Kg,
}

/// Fixed display and consumption settings of a unit
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UnitConfig {
    /// Empty for units shown as a bare count
    pub symbol: &'static str,
    pub position: SymbolPosition,
    /// Always 0 or 2
    pub decimals: u32,
    /// Amount used by one work session
    pub default_consumption: f64,
}

const PIECE: UnitConfig = UnitConfig {
    symbol: "",
    position: SymbolPosition::After,
    decimals: 0,
    default_consumption: 1.0,
};

const PERCENTAGE: UnitConfig = UnitConfig {
    symbol: "%",
    position: SymbolPosition::After,
    decimals: 0,
    default_consumption: 12.0,
};

const ML: UnitConfig = UnitConfig {
    symbol: "ml",
    position: SymbolPosition::After,
    decimals: 0,
    default_consumption: 75.0,
};

const GRAM: UnitConfig = UnitConfig {
    symbol: "g",
    position: SymbolPosition::After,
    decimals: 0,
    default_consumption: 200.0,
};

const METER: UnitConfig = UnitConfig {
    symbol: "m",
    position: SymbolPosition::After,
    decimals: 2,
    default_consumption: 1.5,
};

const LITER: UnitConfig = UnitConfig {
    symbol: "L",
    position: SymbolPosition::After,
    decimals: 2,
    default_consumption: 75.0,
};

const KILOGRAM: UnitConfig = UnitConfig {
    symbol: "kg",
    position: SymbolPosition::After,
    decimals: 2,
    default_consumption: 200.0,
};

impl StockUnit {
    pub const ALL: [StockUnit; 7] = [
        StockUnit::Piece,
        StockUnit::Percentage,
        StockUnit::Ml,
        StockUnit::G,
        StockUnit::Meter,
        StockUnit::Liter,
        StockUnit::Kg,
    ];

    pub fn config(&self) -> &'static UnitConfig {
        match self {
            StockUnit::Piece => &PIECE,
            StockUnit::Percentage => &PERCENTAGE,
            StockUnit::Ml => &ML,
            StockUnit::G => &GRAM,
            StockUnit::Meter => &METER,
            StockUnit::Liter => &LITER,
            StockUnit::Kg => &KILOGRAM,
        }
    }

    pub fn symbol(&self) -> &'static str {
        self.config().symbol
    }

    pub fn decimals(&self) -> u32 {
        self.config().decimals
    }

    pub fn default_consumption(&self) -> f64 {
        self.config().default_consumption
    }

    /// Human readable unit name
    pub fn label(&self, locale: Locale) -> &'static str {
        match (locale, self) {
            (Locale::French, StockUnit::Piece) => "Pièces",
            (Locale::French, StockUnit::Percentage) => "Pourcentage",
            (Locale::French, StockUnit::Ml) => "Millilitres",
            (Locale::French, StockUnit::G) => "Grammes",
            (Locale::French, StockUnit::Meter) => "Mètres",
            (Locale::French, StockUnit::Liter) => "Litres",
            (Locale::French, StockUnit::Kg) => "Kilogrammes",
            (Locale::English, StockUnit::Piece) => "Pieces",
            (Locale::English, StockUnit::Percentage) => "Percentage",
            (Locale::English, StockUnit::Ml) => "Milliliters",
            (Locale::English, StockUnit::G) => "Grams",
            (Locale::English, StockUnit::Meter) => "Meters",
            (Locale::English, StockUnit::Liter) => "Liters",
            (Locale::English, StockUnit::Kg) => "Kilograms",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            StockUnit::Piece => "piece",
            StockUnit::Percentage => "percentage",
            StockUnit::Ml => "ml",
            StockUnit::G => "g",
            StockUnit::Meter => "meter",
            StockUnit::Liter => "liter",
            StockUnit::Kg => "kg",
        }
    }
}

impl std::fmt::Display for StockUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for StockUnit {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        StockUnit::ALL
            .into_iter()
            .find(|unit| unit.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown stock unit: {}", s))
    }
}

/// Label of a unit in the default locale
pub fn get_unit_label(unit: StockUnit) -> &'static str {
    unit.label(Locale::default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_unit_has_two_or_zero_decimals() {
        for unit in StockUnit::ALL {
            assert!(matches!(unit.decimals(), 0 | 2), "{unit}");
        }
    }

    #[test]
    fn test_unit_round_trips_through_str() {
        for unit in StockUnit::ALL {
            assert_eq!(unit.as_str().parse::<StockUnit>(), Ok(unit));
        }
        assert!("litre".parse::<StockUnit>().is_err());
    }

    #[test]
    fn test_serde_names_match_as_str() {
        for unit in StockUnit::ALL {
            let json = serde_json::to_string(&unit).unwrap();
            assert_eq!(json, format!("\"{}\"", unit.as_str()));
        }
    }
}
