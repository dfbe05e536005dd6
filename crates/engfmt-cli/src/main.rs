//! Engineering-notation formatting from the command line.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use engfmt::{EngineeringFormatter, FormatterConfig, Locale, MetricPrefix};

#[derive(Parser)]
#[command(name = "engfmt")]
#[command(about = "Format and parse numbers in engineering notation", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Render values in engineering notation
    Format {
        /// Values to render (plain, scientific, or engineering notation)
        #[arg(value_name = "VALUE", required = true)]
        values: Vec<String>,

        /// Maximum fraction digits
        #[arg(short, long, default_value_t = 12)]
        digits: usize,

        /// Minimum fraction digits (pads with trailing zeros)
        #[arg(long, default_value_t = 0)]
        min_digits: usize,

        /// Use ASCII "u" instead of "µ" for micro
        #[arg(long)]
        ascii: bool,

        /// Sign string for non-negative values
        #[arg(long, default_value = "")]
        plus: String,

        /// Locale tag: c, posix, en, de, or fr
        #[arg(long)]
        locale: Option<Locale>,

        /// Apply the locale's separators to the output
        #[arg(long)]
        localize: bool,
    },
    /// Parse engineering-notation strings back into plain values
    Parse {
        #[arg(value_name = "TEXT", required = true)]
        texts: Vec<String>,
    },
    /// Print the metric prefix table
    Prefixes,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Format {
            values,
            digits,
            min_digits,
            ascii,
            plus,
            locale,
            localize,
        } => {
            let mut config = FormatterConfig {
                max_fraction_digits: digits,
                min_fraction_digits: min_digits,
                use_greek_mu: !ascii,
                positive_sign: plus,
                localizes_format: localize,
                ..FormatterConfig::default()
            };
            if let Some(locale) = locale {
                config.locale = locale;
            }
            let formatter = EngineeringFormatter::with_config(config);
            for value in &values {
                let parsed = parse_argument(&formatter, value)?;
                println!("{}", formatter.format(parsed));
            }
        }
        Command::Parse { texts } => {
            let formatter = EngineeringFormatter::new();
            for text in &texts {
                println!("{}", parse_argument(&formatter, text)?);
            }
        }
        Command::Prefixes => {
            for prefix in MetricPrefix::ALL {
                let symbol = prefix.symbol(true).unwrap_or(' ');
                println!("{symbol}  10^{:<3}  {}", prefix.exponent(), prefix.name());
            }
        }
    }

    Ok(())
}

fn parse_argument(formatter: &EngineeringFormatter, text: &str) -> Result<f64> {
    formatter
        .try_parse(text)
        .with_context(|| format!("invalid argument {text:?}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_argument_names_the_offender() {
        let formatter = EngineeringFormatter::new();
        assert_eq!(parse_argument(&formatter, "1.5k").unwrap(), 1500.0);
        let err = parse_argument(&formatter, "wat").unwrap_err();
        assert!(format!("{err:#}").contains("invalid argument \"wat\""));
    }
}
