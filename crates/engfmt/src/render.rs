//! Fixed-point and scientific rendering backends.
//!
//! These are the two "sub-formatter" paths the engineering formatter is
//! built on. Both read the shared [`FormatterConfig`] at call time, so the
//! fraction-digit bounds and locale options can never drift apart between
//! them. Both are total: NaN and the infinities render as their float
//! `Display` spellings instead of failing.

use crate::formatter::FormatterConfig;

/// Render `value` in plain decimal notation.
pub fn decimal(value: f64, config: &FormatterConfig) -> String {
    if !value.is_finite() {
        return non_finite(value);
    }
    localize(&fixed(value, config), config)
}

/// Render `value` in scientific notation with a mantissa in [1, 10).
///
/// Zero and non-finite values delegate to [`decimal`]; they have no
/// meaningful exponent.
pub fn scientific(value: f64, config: &FormatterConfig) -> String {
    if value == 0.0 || !value.is_finite() {
        return decimal(value, config);
    }
    // The shortest round-trip repr gives the decimal mantissa and exponent
    // without any log/pow rounding trouble near exact powers of ten.
    let repr = format!("{value:e}");
    let Some((mantissa_repr, exponent_repr)) = repr.split_once('e') else {
        return decimal(value, config);
    };
    let mantissa: f64 = mantissa_repr.parse().unwrap_or(value);
    let mut exponent: i32 = exponent_repr.parse().unwrap_or(0);
    let mut raw = fixed(mantissa, config);
    // Rounding at the fraction bound can carry 9.99… up to 10; renormalize
    // rather than emit a two-digit mantissa.
    if raw.trim_start_matches('-').starts_with("10") {
        exponent += 1;
        raw = fixed(mantissa / 10.0, config);
    }
    let digits = localize(&raw, config);
    format!("{digits}{}{exponent}", exponent_symbol(config))
}

fn non_finite(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else if value.is_sign_positive() {
        "inf".to_string()
    } else {
        "-inf".to_string()
    }
}

/// Fixed-point digits with the configured fraction bounds, unlocalized.
///
/// Renders with `max_fraction_digits` places (or `min_fraction_digits` when
/// that is larger), then trims trailing zeros down to the minimum, dropping
/// the separator when the fraction empties.
fn fixed(value: f64, config: &FormatterConfig) -> String {
    let places = config.max_fraction_digits.max(config.min_fraction_digits);
    let mut out = format!("{value:.places$}");
    if places > config.min_fraction_digits {
        if let Some(dot) = out.find('.') {
            let keep = if config.min_fraction_digits == 0 {
                dot
            } else {
                dot + 1 + config.min_fraction_digits
            };
            let mut end = out.len();
            while end > keep && out.as_bytes()[end - 1] == b'0' {
                end -= 1;
            }
            if end > keep && out.as_bytes()[end - 1] == b'.' {
                end -= 1;
            }
            out.truncate(end);
        }
    }
    out
}

/// Swap in the locale separators and group integer digits in threes.
fn localize(digits: &str, config: &FormatterConfig) -> String {
    if !config.localizes_format {
        return digits.to_string();
    }
    let locale = &config.locale;
    let (int_part, frac_part) = match digits.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (digits, None),
    };
    let (sign, int_digits) = match int_part.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", int_part),
    };
    let mut out = String::with_capacity(digits.len() + 4);
    out.push_str(sign);
    let len = int_digits.len();
    for (i, ch) in int_digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(locale.grouping_separator);
        }
        out.push(ch);
    }
    if let Some(frac_part) = frac_part {
        out.push(locale.decimal_separator);
        out.push_str(frac_part);
    }
    out
}

fn exponent_symbol(config: &FormatterConfig) -> char {
    if config.localizes_format {
        config.locale.exponent_symbol
    } else {
        'E'
    }
}
