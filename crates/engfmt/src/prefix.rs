//! SI metric prefix table: bidirectional exponent/symbol lookup.

use serde::{Deserialize, Serialize};

/// An SI metric prefix denoting a power-of-1000 scale factor.
///
/// Variants are ordered by exponent, yocto (10^-24) through yotta (10^24),
/// with [`MetricPrefix::Unit`] standing in for the glyphless 10^0 entry.
/// Exponents outside this range have no prefix and render in scientific
/// notation instead.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum MetricPrefix {
    Yocto,
    Zepto,
    Atto,
    Femto,
    Pico,
    Nano,
    Micro,
    Milli,
    Unit,
    Kilo,
    Mega,
    Giga,
    Tera,
    Peta,
    Exa,
    Zetta,
    Yotta,
}

impl MetricPrefix {
    /// All prefixes in table order (strictly increasing exponent).
    pub const ALL: [MetricPrefix; 17] = [
        MetricPrefix::Yocto,
        MetricPrefix::Zepto,
        MetricPrefix::Atto,
        MetricPrefix::Femto,
        MetricPrefix::Pico,
        MetricPrefix::Nano,
        MetricPrefix::Micro,
        MetricPrefix::Milli,
        MetricPrefix::Unit,
        MetricPrefix::Kilo,
        MetricPrefix::Mega,
        MetricPrefix::Giga,
        MetricPrefix::Tera,
        MetricPrefix::Peta,
        MetricPrefix::Exa,
        MetricPrefix::Zetta,
        MetricPrefix::Yotta,
    ];

    /// Power-of-ten exponent, a multiple of 3 in -24..=24.
    pub const fn exponent(self) -> i32 {
        match self {
            MetricPrefix::Yocto => -24,
            MetricPrefix::Zepto => -21,
            MetricPrefix::Atto => -18,
            MetricPrefix::Femto => -15,
            MetricPrefix::Pico => -12,
            MetricPrefix::Nano => -9,
            MetricPrefix::Micro => -6,
            MetricPrefix::Milli => -3,
            MetricPrefix::Unit => 0,
            MetricPrefix::Kilo => 3,
            MetricPrefix::Mega => 6,
            MetricPrefix::Giga => 9,
            MetricPrefix::Tera => 12,
            MetricPrefix::Peta => 15,
            MetricPrefix::Exa => 18,
            MetricPrefix::Zetta => 21,
            MetricPrefix::Yotta => 24,
        }
    }

    /// Scale factor `10^exponent`.
    ///
    /// Spelled as decimal literals rather than computed powers so each
    /// multiplier is the correctly rounded double.
    pub const fn multiplier(self) -> f64 {
        match self {
            MetricPrefix::Yocto => 1e-24,
            MetricPrefix::Zepto => 1e-21,
            MetricPrefix::Atto => 1e-18,
            MetricPrefix::Femto => 1e-15,
            MetricPrefix::Pico => 1e-12,
            MetricPrefix::Nano => 1e-9,
            MetricPrefix::Micro => 1e-6,
            MetricPrefix::Milli => 1e-3,
            MetricPrefix::Unit => 1.0,
            MetricPrefix::Kilo => 1e3,
            MetricPrefix::Mega => 1e6,
            MetricPrefix::Giga => 1e9,
            MetricPrefix::Tera => 1e12,
            MetricPrefix::Peta => 1e15,
            MetricPrefix::Exa => 1e18,
            MetricPrefix::Zetta => 1e21,
            MetricPrefix::Yotta => 1e24,
        }
    }

    /// Look up the prefix for a power-of-ten exponent.
    ///
    /// Returns `None` when `exponent` is not a multiple of 3 or lies outside
    /// -24..=24. Exponent 0 is in-table and yields [`MetricPrefix::Unit`],
    /// so values in [1, 1000) take the metric path and render without a
    /// trailing glyph.
    pub fn from_exponent(exponent: i32) -> Option<MetricPrefix> {
        match exponent {
            -24 => Some(MetricPrefix::Yocto),
            -21 => Some(MetricPrefix::Zepto),
            -18 => Some(MetricPrefix::Atto),
            -15 => Some(MetricPrefix::Femto),
            -12 => Some(MetricPrefix::Pico),
            -9 => Some(MetricPrefix::Nano),
            -6 => Some(MetricPrefix::Micro),
            -3 => Some(MetricPrefix::Milli),
            0 => Some(MetricPrefix::Unit),
            3 => Some(MetricPrefix::Kilo),
            6 => Some(MetricPrefix::Mega),
            9 => Some(MetricPrefix::Giga),
            12 => Some(MetricPrefix::Tera),
            15 => Some(MetricPrefix::Peta),
            18 => Some(MetricPrefix::Exa),
            21 => Some(MetricPrefix::Zetta),
            24 => Some(MetricPrefix::Yotta),
            _ => None,
        }
    }

    /// Look up the prefix whose symbol is `symbol`, case-sensitively.
    ///
    /// Both 'µ' and its ASCII fallback 'u' match micro. No symbol maps to
    /// [`MetricPrefix::Unit`].
    pub fn from_symbol(symbol: char) -> Option<MetricPrefix> {
        match symbol {
            'y' => Some(MetricPrefix::Yocto),
            'z' => Some(MetricPrefix::Zepto),
            'a' => Some(MetricPrefix::Atto),
            'f' => Some(MetricPrefix::Femto),
            'p' => Some(MetricPrefix::Pico),
            'n' => Some(MetricPrefix::Nano),
            'µ' | 'u' => Some(MetricPrefix::Micro),
            'm' => Some(MetricPrefix::Milli),
            'k' => Some(MetricPrefix::Kilo),
            'M' => Some(MetricPrefix::Mega),
            'G' => Some(MetricPrefix::Giga),
            'T' => Some(MetricPrefix::Tera),
            'P' => Some(MetricPrefix::Peta),
            'E' => Some(MetricPrefix::Exa),
            'Z' => Some(MetricPrefix::Zetta),
            'Y' => Some(MetricPrefix::Yotta),
            _ => None,
        }
    }

    /// Glyph for this prefix, or `None` for [`MetricPrefix::Unit`].
    ///
    /// Micro renders as 'µ' when `greek_mu` is set and as 'u' otherwise;
    /// every other prefix has a single canonical glyph.
    pub fn symbol(self, greek_mu: bool) -> Option<char> {
        match self {
            MetricPrefix::Yocto => Some('y'),
            MetricPrefix::Zepto => Some('z'),
            MetricPrefix::Atto => Some('a'),
            MetricPrefix::Femto => Some('f'),
            MetricPrefix::Pico => Some('p'),
            MetricPrefix::Nano => Some('n'),
            MetricPrefix::Micro => Some(if greek_mu { 'µ' } else { 'u' }),
            MetricPrefix::Milli => Some('m'),
            MetricPrefix::Unit => None,
            MetricPrefix::Kilo => Some('k'),
            MetricPrefix::Mega => Some('M'),
            MetricPrefix::Giga => Some('G'),
            MetricPrefix::Tera => Some('T'),
            MetricPrefix::Peta => Some('P'),
            MetricPrefix::Exa => Some('E'),
            MetricPrefix::Zetta => Some('Z'),
            MetricPrefix::Yotta => Some('Y'),
        }
    }

    /// SI prefix name; empty for [`MetricPrefix::Unit`].
    pub fn name(self) -> &'static str {
        match self {
            MetricPrefix::Yocto => "yocto",
            MetricPrefix::Zepto => "zepto",
            MetricPrefix::Atto => "atto",
            MetricPrefix::Femto => "femto",
            MetricPrefix::Pico => "pico",
            MetricPrefix::Nano => "nano",
            MetricPrefix::Micro => "micro",
            MetricPrefix::Milli => "milli",
            MetricPrefix::Unit => "",
            MetricPrefix::Kilo => "kilo",
            MetricPrefix::Mega => "mega",
            MetricPrefix::Giga => "giga",
            MetricPrefix::Tera => "tera",
            MetricPrefix::Peta => "peta",
            MetricPrefix::Exa => "exa",
            MetricPrefix::Zetta => "zetta",
            MetricPrefix::Yotta => "yotta",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_exponents_strictly_increase() {
        for pair in MetricPrefix::ALL.windows(2) {
            assert!(
                pair[0].exponent() < pair[1].exponent(),
                "{:?} >= {:?}",
                pair[0],
                pair[1]
            );
        }
    }

    #[test]
    fn test_table_exponents_are_multiples_of_three() {
        for prefix in MetricPrefix::ALL {
            assert_eq!(prefix.exponent() % 3, 0, "{prefix:?}");
            assert!(prefix.exponent().abs() <= 24, "{prefix:?}");
        }
    }

    #[test]
    fn test_from_exponent_roundtrip() {
        for prefix in MetricPrefix::ALL {
            assert_eq!(MetricPrefix::from_exponent(prefix.exponent()), Some(prefix));
        }
    }

    #[test]
    fn test_from_exponent_rejects_off_table_values() {
        assert_eq!(MetricPrefix::from_exponent(1), None);
        assert_eq!(MetricPrefix::from_exponent(-1), None);
        assert_eq!(MetricPrefix::from_exponent(4), None);
        assert_eq!(MetricPrefix::from_exponent(27), None);
        assert_eq!(MetricPrefix::from_exponent(-27), None);
        assert_eq!(MetricPrefix::from_exponent(i32::MAX), None);
    }

    #[test]
    fn test_from_symbol_roundtrip() {
        for prefix in MetricPrefix::ALL {
            if let Some(symbol) = prefix.symbol(true) {
                assert_eq!(MetricPrefix::from_symbol(symbol), Some(prefix));
            }
        }
    }

    #[test]
    fn test_from_symbol_is_case_sensitive() {
        assert_eq!(MetricPrefix::from_symbol('k'), Some(MetricPrefix::Kilo));
        assert_eq!(MetricPrefix::from_symbol('K'), None);
        assert_eq!(MetricPrefix::from_symbol('M'), Some(MetricPrefix::Mega));
        assert_eq!(MetricPrefix::from_symbol('m'), Some(MetricPrefix::Milli));
        assert_eq!(MetricPrefix::from_symbol('P'), Some(MetricPrefix::Peta));
        assert_eq!(MetricPrefix::from_symbol('p'), Some(MetricPrefix::Pico));
    }

    #[test]
    fn test_from_symbol_rejects_unknown_glyphs() {
        assert_eq!(MetricPrefix::from_symbol('q'), None);
        assert_eq!(MetricPrefix::from_symbol('x'), None);
        assert_eq!(MetricPrefix::from_symbol('0'), None);
        assert_eq!(MetricPrefix::from_symbol(' '), None);
    }

    #[test]
    fn test_micro_symbol_variants() {
        assert_eq!(MetricPrefix::Micro.symbol(true), Some('µ'));
        assert_eq!(MetricPrefix::Micro.symbol(false), Some('u'));
        assert_eq!(MetricPrefix::from_symbol('µ'), Some(MetricPrefix::Micro));
        assert_eq!(MetricPrefix::from_symbol('u'), Some(MetricPrefix::Micro));
    }

    #[test]
    fn test_unit_has_no_symbol() {
        assert_eq!(MetricPrefix::Unit.symbol(true), None);
        assert_eq!(MetricPrefix::Unit.symbol(false), None);
        assert_eq!(MetricPrefix::Unit.multiplier(), 1.0);
    }

    #[test]
    fn test_multipliers_match_exponents() {
        for prefix in MetricPrefix::ALL {
            let expected = 10f64.powi(prefix.exponent());
            let relative = (prefix.multiplier() - expected).abs() / expected;
            assert!(relative < 1e-14, "{prefix:?}: {relative}");
        }
    }
}
