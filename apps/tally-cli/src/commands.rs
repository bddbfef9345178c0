use std::io::Read;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, info};

use tally_core::checkout::{calculate_total_request, validate_order_request};
use tally_core::{apply_discount, coerce, process_payment, CheckoutLimits, FieldValue};

use crate::error::CliError;

#[derive(Parser)]
#[command(name = "tally")]
#[command(about = "Tolerant order totals from messy line-item JSON.")]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Total an order body ({"items": [...]}) read from FILE or stdin
    #[command(alias = "t")]
    Total { file: Option<PathBuf> },
    /// Check that every item of an order body is valid
    #[command(alias = "v")]
    Validate { file: Option<PathBuf> },
    /// Coerce one value (a JSON literal, or plain text) to a number
    #[command(alias = "c")]
    Coerce {
        #[arg(allow_hyphen_values = true)]
        value: String,
    },
    /// Apply a percentage discount to a total
    #[command(alias = "d")]
    Discount {
        #[arg(long, allow_hyphen_values = true)]
        total: Option<f64>,
        #[arg(long, allow_hyphen_values = true)]
        percent: Option<f64>,
    },
    /// Check a payment amount and method against the allow-list
    #[command(alias = "p")]
    Pay {
        #[arg(long, allow_hyphen_values = true)]
        amount: Option<f64>,
        #[arg(long)]
        method: Option<String>,
    },
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

#[derive(Serialize)]
struct CoerceOutput<'a> {
    input: &'a str,
    value: f64,
}

#[derive(Serialize)]
struct DiscountOutput {
    total: Option<f64>,
}

/// Runs one command and prints its JSON result to stdout.
///
/// Returns `false` when the outcome is a business-level "no" (rejected
/// order, invalid order, refused payment) so the caller can set the exit code.
pub fn run(command: Commands, limits: &CheckoutLimits) -> Result<bool, CliError> {
    match command {
        Commands::Total { file } => {
            let body = read_body(file.as_ref())?;
            let response = calculate_total_request(&body, limits);
            info!(status = response.status(), "Order total computed");
            print_json(&response)?;
            Ok(response.is_accepted())
        }
        Commands::Validate { file } => {
            let body = read_body(file.as_ref())?;
            let report = validate_order_request(&body, limits)?;
            info!(valid = report.valid, items = report.item_count, "Order validated");
            print_json(&report)?;
            Ok(report.valid)
        }
        Commands::Coerce { value } => {
            let parsed = serde_json::from_str::<Value>(&value)
                .map(FieldValue::from)
                .unwrap_or_else(|_| FieldValue::Text(value.clone()));
            debug!(?parsed, "Coercing value");
            print_json(&CoerceOutput {
                input: &value,
                value: coerce(&parsed),
            })?;
            Ok(true)
        }
        Commands::Discount { total, percent } => {
            print_json(&DiscountOutput {
                total: apply_discount(total, percent),
            })?;
            Ok(true)
        }
        Commands::Pay { amount, method } => {
            let result = process_payment(amount, method.as_deref());
            print_json(&result)?;
            Ok(result.success)
        }
    }
}

fn read_body(path: Option<&PathBuf>) -> Result<Value, CliError> {
    let raw = match path {
        Some(p) => std::fs::read_to_string(p).map_err(|e| CliError::read(path, e))?,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .map_err(|e| CliError::read(None, e))?;
            buf
        }
    };

    // An empty body means no items, same as a request without parameters.
    if raw.trim().is_empty() {
        return Ok(Value::Object(Default::default()));
    }

    Ok(serde_json::from_str(&raw)?)
}

fn print_json<T: Serialize>(value: &T) -> Result<(), CliError> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_subcommands() {
        let cli = CommandLine::try_parse_from(["tally", "discount", "--total", "100", "--percent", "-10"])
            .unwrap();
        assert!(matches!(
            cli.command,
            Commands::Discount { total: Some(t), percent: Some(p) } if t == 100.0 && p == -10.0
        ));

        let cli = CommandLine::try_parse_from(["tally", "p", "--amount", "5", "--method", "paypal"])
            .unwrap();
        assert!(matches!(cli.command, Commands::Pay { method: Some(ref m), .. } if m == "paypal"));

        for negative in ["-5", "-$3.50"] {
            let cli = CommandLine::try_parse_from(["tally", "coerce", negative]).unwrap();
            assert!(matches!(cli.command, Commands::Coerce { ref value } if value == negative));
        }

        let cli = CommandLine::try_parse_from(["tally", "total"]).unwrap();
        assert!(matches!(cli.command, Commands::Total { file: None }));
    }

    #[test]
    fn test_run_reports_business_outcome() {
        let limits = CheckoutLimits::default();
        let refused = Commands::Pay {
            amount: Some(5.0),
            method: Some("cash".to_string()),
        };
        assert!(!run(refused, &limits).unwrap());

        let coerced = Commands::Coerce {
            value: "$12.50".to_string(),
        };
        assert!(run(coerced, &limits).unwrap());
    }

    #[test]
    fn test_missing_file_is_a_read_error() {
        let err = read_body(Some(&PathBuf::from("/nonexistent/order.json"))).unwrap_err();
        assert!(matches!(err, CliError::Read { .. }));
    }
}
