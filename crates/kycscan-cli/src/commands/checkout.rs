//! Checkout command - decode bridge messages and build checkout options.

use std::path::{Path, PathBuf};
use std::str::FromStr;

use clap::{Args, Subcommand};
use console::style;
use rust_decimal::Decimal;

use kycscan_core::checkout::{CheckoutEvent, CheckoutOrder, decode_event};

use super::{load_config, read_input};

/// Arguments for the checkout command.
#[derive(Args)]
pub struct CheckoutArgs {
    #[command(subcommand)]
    command: CheckoutCommand,
}

#[derive(Subcommand)]
enum CheckoutCommand {
    /// Decode messages posted by the checkout page, one JSON object per line
    Decode {
        /// File with posted messages (`-` for stdin)
        input: PathBuf,
    },

    /// Print the options object for the hosted checkout script
    Options {
        /// Provider order id
        #[arg(long)]
        order_id: String,

        /// Merchant key id
        #[arg(long)]
        key_id: String,

        /// Amount in rupees, e.g. 499.50
        #[arg(long)]
        amount: String,
    },
}

pub async fn run(args: CheckoutArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    match args.command {
        CheckoutCommand::Decode { input } => decode_messages(&input),
        CheckoutCommand::Options {
            order_id,
            key_id,
            amount,
        } => print_options(config_path, order_id, key_id, &amount),
    }
}

fn decode_messages(input: &Path) -> anyhow::Result<()> {
    let text = read_input(input)?;

    for line in text.lines().filter(|l| !l.trim().is_empty()) {
        match decode_event(line) {
            Ok(Some(event)) => println!("{}", describe(&event)),
            Ok(None) => println!("{} ignored: {}", style("-").dim(), line.trim()),
            Err(e) => eprintln!("{} {}", style("✗").red(), e),
        }
    }

    Ok(())
}

fn describe(event: &CheckoutEvent) -> String {
    match event {
        CheckoutEvent::PaymentSuccess {
            payment_id,
            order_id,
            signature,
        } => format!(
            "{} success payment={} order={} signature={}",
            style("✓").green(),
            payment_id,
            order_id,
            signature
        ),
        CheckoutEvent::PaymentFailed { error } => {
            format!("{} failed: {}", style("✗").red(), error)
        }
        CheckoutEvent::PaymentClosed => format!("{} closed", style("ℹ").blue()),
    }
}

fn print_options(
    config_path: Option<&str>,
    order_id: String,
    key_id: String,
    amount: &str,
) -> anyhow::Result<()> {
    let config = load_config(config_path)?;
    let amount = Decimal::from_str(amount)
        .map_err(|e| anyhow::anyhow!("Invalid amount {}: {}", amount, e))?;

    let order = CheckoutOrder::new(order_id, key_id, amount)?;
    eprintln!("{} Amount to pay: {}", style("ℹ").blue(), order.display_amount());
    println!(
        "{}",
        serde_json::to_string_pretty(&order.options(&config.checkout)?)?
    );

    Ok(())
}
