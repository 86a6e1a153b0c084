//! # CLI Interface
//!
//! Defines the command-line argument structure for the `beerpay` binary
//! using `clap` derive. Four subcommands: `pair`, `invoice`, `sin`, and
//! `version`.

use clap::{Parser, Subcommand};

use crate::config;

/// Beerpay: generate invoices for beer and other drinks.
///
/// Talks to a BitPay-compatible payment API. Pair once with `beerpay
/// pair`, approve the token in the web UI, then create invoices with
/// `beerpay invoice <amount>`.
#[derive(Parser, Debug)]
#[command(
    name = "beerpay",
    about = "Generate invoices for beer and other drinks",
    version,
    propagate_version = true
)]
pub struct BeerpayCli {
    /// Emit logs as JSON lines instead of human-readable output.
    #[arg(long, global = true, env = "BEERPAY_LOG_JSON")]
    pub log_json: bool,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level subcommands for the beerpay binary.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Request an API token: generates a fresh SIN, asks the payment API
    /// for a pairing code, and prints the approval URL.
    Pair(PairArgs),
    /// Create an invoice for the given amount.
    Invoice(InvoiceArgs),
    /// Generate and print one SIN, nothing else. Handy for debugging the
    /// pairing flow by hand.
    Sin,
    /// Print version information and exit.
    Version,
}

/// Arguments for the `pair` subcommand.
#[derive(Parser, Debug)]
pub struct PairArgs {
    /// Base URL of the payment API.
    #[arg(long, env = "BEERPAY_API_URL", default_value = config::DEFAULT_API_URL)]
    pub api_url: String,

    /// Label shown next to the token in the payment API's dashboard.
    #[arg(long, default_value = config::DEFAULT_LABEL)]
    pub label: String,

    /// Facade to request for the token. "pos" is enough to create
    /// invoices; don't ask for more than you need.
    #[arg(long, default_value = config::DEFAULT_FACADE)]
    pub facade: String,
}

/// Arguments for the `invoice` subcommand.
#[derive(Parser, Debug)]
pub struct InvoiceArgs {
    /// Invoice amount in CHF, e.g. 2.50.
    pub amount: f64,

    /// Item description shown on the invoice.
    #[arg(long, default_value = config::DEFAULT_LABEL)]
    pub description: String,

    /// Base URL of the payment API.
    #[arg(long, env = "BEERPAY_API_URL", default_value = config::DEFAULT_API_URL)]
    pub api_url: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli_structure() {
        // Ensures the derive macros produce a valid CLI definition.
        BeerpayCli::command().debug_assert();
    }

    #[test]
    fn test_invoice_amount_parses() {
        let cli = BeerpayCli::parse_from(["beerpay", "invoice", "2.50"]);
        match cli.command {
            Commands::Invoice(args) => {
                assert!((args.amount - 2.5).abs() < f64::EPSILON);
                assert_eq!(args.description, "Beerpay");
            }
            other => panic!("expected invoice command, got {:?}", other),
        }
    }

    #[test]
    fn test_invoice_requires_amount() {
        assert!(BeerpayCli::try_parse_from(["beerpay", "invoice"]).is_err());
        assert!(BeerpayCli::try_parse_from(["beerpay", "invoice", "a-beer"]).is_err());
    }

    #[test]
    fn test_pair_defaults() {
        let cli = BeerpayCli::parse_from(["beerpay", "pair"]);
        match cli.command {
            Commands::Pair(args) => {
                assert_eq!(args.api_url, config::DEFAULT_API_URL);
                assert_eq!(args.label, "Beerpay");
                assert_eq!(args.facade, "pos");
            }
            other => panic!("expected pair command, got {:?}", other),
        }
    }
}
