// Copyright (c) 2026 Coredump Hackerspace. MIT License.
// See LICENSE for details.

//! # Beerpay CLI
//!
//! Entry point for the `beerpay` binary. Parses CLI arguments, initializes
//! logging, and drives the two flows against the payment API:
//!
//! - `pair`   : generate a SIN, request an API token, print the approval URL
//! - `invoice`: create an invoice for an amount in CHF
//! - `sin`    : generate and print one SIN
//! - `version`: print build version information
//!
//! All the cryptography lives in `beerpay-protocol`; this binary only
//! moves strings between it, the API, and the terminal.

mod api;
mod cli;
mod config;
mod logging;

use anyhow::{Context, Result};
use clap::Parser;

use cli::{BeerpayCli, Commands};
use logging::LogFormat;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = BeerpayCli::parse();

    let format = if cli.log_json {
        LogFormat::Json
    } else {
        LogFormat::Pretty
    };
    logging::init_logging("beerpay=info,beerpay_protocol=info", format);

    match cli.command {
        Commands::Pair(args) => pair(args).await,
        Commands::Invoice(args) => invoice(args).await,
        Commands::Sin => print_sin(),
        Commands::Version => {
            print_version();
            Ok(())
        }
    }
}

/// Runs the pairing flow: mint a SIN, exchange it for a pairing code,
/// and tell the human where to approve it.
async fn pair(args: cli::PairArgs) -> Result<()> {
    let sin = beerpay_protocol::identity::generate_sin()
        .context("failed to generate a SIN")?;
    tracing::info!(sin = %sin, "generated ephemeral identity");

    let client = api::ApiClient::new(args.api_url.clone());
    let pairing_code = client
        .create_token(&sin, &args.label, &args.facade)
        .await
        .context("token request failed")?;

    println!(
        "Please visit {}/api-access-request?pairingCode={}",
        args.api_url.trim_end_matches('/'),
        pairing_code
    );
    println!("and approve that API token.");
    Ok(())
}

/// Creates an invoice and prints the API's response.
async fn invoice(args: cli::InvoiceArgs) -> Result<()> {
    anyhow::ensure!(
        args.amount.is_finite() && args.amount > 0.0,
        "amount must be a positive number of {}",
        config::CURRENCY
    );

    let client = api::ApiClient::new(args.api_url);
    let invoice = client
        .create_invoice(args.amount, &args.description)
        .await
        .context("invoice request failed")?;

    println!("{}", serde_json::to_string_pretty(&invoice)?);
    Ok(())
}

/// Generates a single SIN and prints it to stdout.
fn print_sin() -> Result<()> {
    let sin = beerpay_protocol::identity::generate_sin()
        .context("failed to generate a SIN")?;
    println!("{}", sin);
    Ok(())
}

/// Prints version information to stdout.
fn print_version() {
    println!("beerpay  {}", env!("CARGO_PKG_VERSION"));
    println!("protocol {}", beerpay_protocol::config::PROTOCOL_VERSION);
}
