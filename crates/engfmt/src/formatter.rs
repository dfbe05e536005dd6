//! Engineering-notation formatting and parsing.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::locale::Locale;
use crate::prefix::MetricPrefix;
use crate::render;

/// Shared configuration read by both rendering paths.
///
/// A single struct consulted at call time by the fixed-point and scientific
/// backends; mutating a field takes effect on the next call and affects both
/// paths identically.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormatterConfig {
    /// Upper bound on rendered fraction digits.
    pub max_fraction_digits: usize,
    /// Lower bound on rendered fraction digits; trailing zeros are kept up
    /// to this many places.
    pub min_fraction_digits: usize,
    /// Separator/symbol set applied when `localizes_format` is set.
    pub locale: Locale,
    /// Apply `locale` when rendering; POSIX conventions otherwise.
    pub localizes_format: bool,
    /// Sign string for values >= 0.
    pub positive_sign: String,
    /// Sign string for negative values.
    pub negative_sign: String,
    /// Render micro as 'µ' rather than the ASCII fallback 'u'.
    pub use_greek_mu: bool,
}

impl Default for FormatterConfig {
    fn default() -> Self {
        Self {
            max_fraction_digits: 12,
            min_fraction_digits: 0,
            locale: Locale::POSIX,
            localizes_format: false,
            positive_sign: String::new(),
            negative_sign: "-".to_string(),
            use_greek_mu: true,
        }
    }
}

/// Formats floating-point values in engineering notation and parses them
/// back.
///
/// Not synchronized; callers sharing one instance across threads must treat
/// the configuration as read-only after setup or serialize access.
#[derive(Debug, Clone, Default)]
pub struct EngineeringFormatter {
    pub config: FormatterConfig,
}

impl EngineeringFormatter {
    /// Formatter with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: FormatterConfig) -> Self {
        Self { config }
    }

    /// Render `value` in engineering notation.
    ///
    /// The mantissa is normalized into [1, 1000) and suffixed with the
    /// metric prefix for its power-of-1000 scale. Magnitudes outside the
    /// yocto..yotta table fall back to scientific notation. Zero, NaN, and
    /// the infinities have no order of magnitude and render through the
    /// plain decimal path verbatim.
    pub fn format(&self, value: f64) -> String {
        if value == 0.0 || !value.is_finite() {
            return render::decimal(value, &self.config);
        }

        let magnitude = value.abs();
        let mut exponent_of_1000 = (magnitude.log10() / 3.0).floor() as i32;
        let mut mantissa = Self::mantissa_for(magnitude, exponent_of_1000);
        // Rounding in log10 can land the mantissa just outside [1, 1000)
        // near the bucket boundaries.
        if mantissa >= 1000.0 {
            exponent_of_1000 += 1;
            mantissa = Self::mantissa_for(magnitude, exponent_of_1000);
        } else if mantissa < 1.0 {
            exponent_of_1000 -= 1;
            mantissa = Self::mantissa_for(magnitude, exponent_of_1000);
        }

        let sign = if value >= 0.0 {
            &self.config.positive_sign
        } else {
            &self.config.negative_sign
        };

        match MetricPrefix::from_exponent(3 * exponent_of_1000) {
            Some(prefix) => {
                let digits = render::decimal(mantissa, &self.config);
                match prefix.symbol(self.config.use_greek_mu) {
                    Some(symbol) => format!("{sign}{digits}{symbol}"),
                    None => format!("{sign}{digits}"),
                }
            }
            None => format!("{sign}{}", render::scientific(magnitude, &self.config)),
        }
    }

    /// Mantissa of `magnitude` for a power-of-1000 bucket.
    ///
    /// In-table buckets divide by the prefix's exact decimal multiplier;
    /// `powi` is not correctly rounded for negative exponents and can push
    /// an exact power of ten just outside its bucket. Off-table buckets only
    /// feed the renormalization guard, so `powi` precision suffices there.
    fn mantissa_for(magnitude: f64, exponent_of_1000: i32) -> f64 {
        match MetricPrefix::from_exponent(3 * exponent_of_1000) {
            Some(prefix) => magnitude / prefix.multiplier(),
            None => magnitude / 1000f64.powi(exponent_of_1000),
        }
    }

    /// Parse a string in decimal, scientific, or engineering notation.
    ///
    /// Whitespace is stripped anywhere in the input. A direct float parse is
    /// tried first; failing that, the last character is taken as a metric
    /// prefix symbol and the rest as the mantissa. Malformed input yields
    /// `None`; this never panics.
    pub fn parse(&self, text: &str) -> Option<f64> {
        let stripped: String = text.chars().filter(|ch| !ch.is_whitespace()).collect();
        if let Ok(value) = stripped.parse::<f64>() {
            return Some(value);
        }

        // Trailing prefix symbol form, e.g. "4.7k". Needs at least one
        // mantissa character plus the symbol.
        let mut chars = stripped.chars();
        let symbol = chars.next_back()?;
        let mantissa_text = chars.as_str();
        if mantissa_text.is_empty() {
            return None;
        }
        let mantissa: f64 = mantissa_text.parse().ok()?;
        let prefix = MetricPrefix::from_symbol(symbol)?;
        Some(mantissa * prefix.multiplier())
    }

    /// [`parse`](Self::parse), but with a diagnostic error for callers that
    /// report failures upward.
    pub fn try_parse(&self, text: &str) -> Result<f64> {
        self.parse(text)
            .ok_or_else(|| Error::ParseFailed(text.to_string()))
    }
}
