//! Config command - inspect and edit the kycscan configuration file.

use std::fs;
use std::path::PathBuf;

use clap::{Args, Subcommand};
use console::style;
use serde_json::Value;

use kycscan_core::models::config::KycConfig;

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    command: ConfigCommand,
}

#[derive(Subcommand)]
enum ConfigCommand {
    /// Show current configuration
    Show,

    /// Write a configuration file with default values
    Init {
        /// Overwrite existing file
        #[arg(long)]
        force: bool,
    },

    /// Get a configuration value
    Get {
        /// Dotted key (e.g., "extraction.apply_hints")
        key: String,
    },

    /// Set a configuration value
    Set {
        /// Dotted key
        key: String,
        /// New value (JSON, or a plain string)
        value: String,
    },

    /// Show configuration file path
    Path,
}

/// Default configuration file location.
pub fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("kycscan")
        .join("config.json")
}

/// Configuration file selected by `--config` or the default location.
struct ConfigFile {
    path: PathBuf,
}

impl ConfigFile {
    fn new(config_path: Option<&str>) -> Self {
        Self {
            path: config_path.map(PathBuf::from).unwrap_or_else(default_config_path),
        }
    }

    fn load(&self) -> anyhow::Result<KycConfig> {
        if self.path.exists() {
            Ok(KycConfig::from_file(&self.path)?)
        } else {
            Ok(KycConfig::default())
        }
    }

    fn save(&self, config: &KycConfig) -> anyhow::Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        config.save(&self.path)?;
        Ok(())
    }
}

/// Turn `a.b.c` into the JSON pointer `/a/b/c`.
fn pointer(key: &str) -> String {
    key.split('.').map(|part| format!("/{}", part)).collect()
}

pub async fn run(args: ConfigArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let file = ConfigFile::new(config_path);

    match args.command {
        ConfigCommand::Show => {
            if !file.path.exists() {
                eprintln!("{} No config file found, showing defaults.", style("ℹ").blue());
            }
            println!("{}", serde_json::to_string_pretty(&file.load()?)?);
        }
        ConfigCommand::Init { force } => {
            if file.path.exists() && !force {
                anyhow::bail!(
                    "Config file already exists at {}. Use --force to overwrite.",
                    file.path.display()
                );
            }
            file.save(&KycConfig::default())?;
            println!(
                "{} Created configuration file at {}",
                style("✓").green(),
                file.path.display()
            );
        }
        ConfigCommand::Get { key } => {
            let json = serde_json::to_value(file.load()?)?;
            let value = json
                .pointer(&pointer(&key))
                .ok_or_else(|| anyhow::anyhow!("Configuration key not found: {}", key))?;
            println!("{}", serde_json::to_string_pretty(value)?);
        }
        ConfigCommand::Set { key, value } => {
            let parsed: Value =
                serde_json::from_str(&value).unwrap_or_else(|_| Value::String(value.clone()));

            let mut json = serde_json::to_value(file.load()?)?;
            let slot = json
                .pointer_mut(&pointer(&key))
                .ok_or_else(|| anyhow::anyhow!("Configuration key not found: {}", key))?;
            *slot = parsed.clone();

            let config: KycConfig = serde_json::from_value(json)
                .map_err(|e| anyhow::anyhow!("Invalid value for {}: {}", key, e))?;
            file.save(&config)?;

            println!(
                "{} Set {} = {}",
                style("✓").green(),
                key,
                serde_json::to_string(&parsed)?
            );
        }
        ConfigCommand::Path => {
            println!("Configuration file: {}", file.path.display());
            if file.path.exists() {
                println!("Status: {}", style("exists").green());
            } else {
                println!("Status: {}", style("not created").yellow());
                println!();
                println!("Run 'kycscan config init' to create a configuration file.");
            }
        }
    }

    Ok(())
}
