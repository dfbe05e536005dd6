//! Engineering-notation number formatting.
//!
//! Renders `f64` values in engineering notation — decimal notation whose
//! power-of-ten exponent is restricted to multiples of three — using SI
//! metric prefixes ("1.5k", "2.5µ") where one exists, and falling back to
//! scientific notation outside the yocto..yotta range. Strings in decimal,
//! scientific, or engineering notation parse back into values.
//!
//! # Example
//!
//! ```
//! use engfmt::EngineeringFormatter;
//!
//! let formatter = EngineeringFormatter::new();
//! assert_eq!(formatter.format(1500.0), "1.5k");
//! assert_eq!(formatter.format(0.0000025), "2.5µ");
//! assert_eq!(formatter.parse("1.5k"), Some(1500.0));
//! ```
//!
//! Output is driven by a [`FormatterConfig`] that both the fixed-point and
//! scientific rendering paths consult at call time:
//!
//! ```
//! use engfmt::EngineeringFormatter;
//!
//! let mut formatter = EngineeringFormatter::new();
//! formatter.config.max_fraction_digits = 2;
//! formatter.config.use_greek_mu = false;
//! assert_eq!(formatter.format(0.00000456789), "4.57u");
//! ```

pub mod error;
pub mod formatter;
pub mod locale;
pub mod prefix;
pub mod render;

pub use error::{Error, Result};
pub use formatter::{EngineeringFormatter, FormatterConfig};
pub use locale::Locale;
pub use prefix::MetricPrefix;
