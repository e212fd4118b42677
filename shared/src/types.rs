//! Common types used across the inventory core

use serde::{Deserialize, Serialize};

/// Display locale for quantities and labels
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    French,
    English,
}

impl Locale {
    pub fn code(&self) -> &'static str {
        match self {
            Locale::French => "fr",
            Locale::English => "en",
        }
    }

    /// Thousands separator (narrow no-break space for French)
    pub fn group_separator(&self) -> char {
        match self {
            Locale::French => '\u{202f}',
            Locale::English => ',',
        }
    }

    pub fn decimal_separator(&self) -> char {
        match self {
            Locale::French => ',',
            Locale::English => '.',
        }
    }
}

impl std::str::FromStr for Locale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fr" | "fr-fr" | "french" => Ok(Locale::French),
            "en" | "en-us" | "en-gb" | "english" => Ok(Locale::English),
            other => Err(format!("unsupported locale: {}", other)),
        }
    }
}

/// Where a unit symbol sits relative to the number
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SymbolPosition {
    Before,
    After,
}
