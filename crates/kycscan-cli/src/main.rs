//! CLI application for Aadhaar KYC scanning.

mod commands;

use clap::{Parser, Subcommand};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use commands::{batch, checkout, config, extract, review};

/// Aadhaar KYC - Extract and review identity details from OCR text
#[derive(Parser)]
#[command(name = "kycscan")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Path to config file
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract Aadhaar details from one OCR text file
    Extract(extract::ExtractArgs),

    /// Extract Aadhaar details from many OCR text files
    Batch(batch::BatchArgs),

    /// Mask an Aadhaar number for display
    Mask(review::MaskArgs),

    /// Extract, review and build a pending KYC submission
    Submit(review::SubmitArgs),

    /// Decode checkout bridge messages and build checkout options
    Checkout(checkout::CheckoutArgs),

    /// Manage configuration
    Config(config::ConfigArgs),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Set up logging based on verbosity
    let level = match cli.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    // Execute command
    match cli.command {
        Commands::Extract(args) => extract::run(args, cli.config.as_deref()).await,
        Commands::Batch(args) => batch::run(args, cli.config.as_deref()).await,
        Commands::Mask(args) => review::mask(args).await,
        Commands::Submit(args) => review::submit(args, cli.config.as_deref()).await,
        Commands::Checkout(args) => checkout::run(args, cli.config.as_deref()).await,
        Commands::Config(args) => config::run(args, cli.config.as_deref()).await,
    }
}
