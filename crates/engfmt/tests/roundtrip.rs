//! Round-trip tests: format then parse across the full prefix range.

use engfmt::{EngineeringFormatter, FormatterConfig};

/// Relative tolerance for one round-trip through the default twelve
/// fraction digits of output.
const ROUNDTRIP_TOL: f64 = 1e-9;

fn assert_roundtrip(formatter: &EngineeringFormatter, value: f64) {
    let text = formatter.format(value);
    let back = formatter
        .parse(&text)
        .unwrap_or_else(|| panic!("failed to parse {text:?} (from {value:e})"));
    let error = (back - value).abs();
    assert!(
        error <= ROUNDTRIP_TOL * value.abs(),
        "{value:e} -> {text:?} -> {back:e}"
    );
}

#[test]
fn test_roundtrip_across_prefix_range() {
    let formatter = EngineeringFormatter::new();
    for exponent in -24..=26 {
        for mantissa in [1.0, 1.5, 2.5, 7.77, 9.999] {
            assert_roundtrip(&formatter, mantissa * 10f64.powi(exponent));
        }
    }
}

#[test]
fn test_roundtrip_negative_values() {
    let formatter = EngineeringFormatter::new();
    for exponent in -24..=26 {
        for mantissa in [-1.0, -3.3, -9.5] {
            assert_roundtrip(&formatter, mantissa * 10f64.powi(exponent));
        }
    }
}

#[test]
fn test_roundtrip_through_scientific_fallback() {
    let formatter = EngineeringFormatter::new();
    for value in [1e30, 4.2e42, 2.5e-31, 1e-300, -6.02e27] {
        assert_roundtrip(&formatter, value);
    }
}

#[test]
fn test_roundtrip_with_ascii_micro() {
    let mut formatter = EngineeringFormatter::new();
    formatter.config.use_greek_mu = false;
    let text = formatter.format(0.0000025);
    assert_eq!(text, "2.5u");
    assert_roundtrip(&formatter, 0.0000025);
}

#[test]
fn test_second_roundtrip_is_stable() {
    let formatter = EngineeringFormatter::new();
    for value in [1234.5678, 0.000_001_234, 9.87e-20, 6.5e25, -42.0, 1e30] {
        let once = formatter.format(value);
        let back = formatter
            .parse(&once)
            .unwrap_or_else(|| panic!("failed to parse {once:?}"));
        assert_eq!(formatter.format(back), once, "unstable for {value:e}");
    }
}

#[test]
fn test_roundtrip_with_reduced_precision_config() {
    let formatter = EngineeringFormatter::with_config(FormatterConfig {
        max_fraction_digits: 3,
        ..FormatterConfig::default()
    });
    // Three fraction digits on a [1, 1000) mantissa keeps the round-trip
    // within one part in a thousand.
    for value in [1234.5678, 0.0473, 8.85e-12] {
        let text = formatter.format(value);
        let back = formatter.parse(&text).unwrap();
        assert!(
            (back - value).abs() <= 1e-3 * value.abs(),
            "{value} -> {text} -> {back}"
        );
    }
}
