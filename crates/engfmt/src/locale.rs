//! Minimal locale model for decimal rendering.
//!
//! Stands in for the environment's locale facility: just the separators and
//! the exponent glyph that fixed-point and scientific rendering need. Only
//! consulted when [`localizes_format`](crate::FormatterConfig) is set.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Separator and symbol set for localized output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Locale {
    /// Glyph between the integer and fraction parts.
    pub decimal_separator: char,
    /// Glyph between integer digit groups of three.
    pub grouping_separator: char,
    /// Glyph introducing the exponent in scientific notation.
    pub exponent_symbol: char,
}

impl Locale {
    /// C/POSIX conventions; the default.
    pub const POSIX: Locale = Locale {
        decimal_separator: '.',
        grouping_separator: ',',
        exponent_symbol: 'E',
    };

    /// English conventions.
    pub const EN: Locale = Locale::POSIX;

    /// German conventions: comma decimal separator, dot grouping.
    pub const DE: Locale = Locale {
        decimal_separator: ',',
        grouping_separator: '.',
        exponent_symbol: 'E',
    };

    /// French conventions: comma decimal separator, narrow no-break space
    /// grouping.
    pub const FR: Locale = Locale {
        decimal_separator: ',',
        grouping_separator: '\u{202f}',
        exponent_symbol: 'E',
    };
}

impl Default for Locale {
    fn default() -> Self {
        Locale::POSIX
    }
}

impl FromStr for Locale {
    type Err = Error;

    fn from_str(tag: &str) -> Result<Self, Error> {
        match tag.to_ascii_lowercase().as_str() {
            "c" | "posix" => Ok(Locale::POSIX),
            "en" => Ok(Locale::EN),
            "de" => Ok(Locale::DE),
            "fr" => Ok(Locale::FR),
            _ => Err(Error::UnknownLocale(tag.to_string())),
        }
    }
}
