//! Subcommand implementations.

pub mod batch;
pub mod checkout;
pub mod config;
pub mod extract;
pub mod review;

use std::io::Read;
use std::path::Path;

use kycscan_core::models::config::KycConfig;

/// Load configuration from `--config`, the default location, or defaults.
pub fn load_config(config_path: Option<&str>) -> anyhow::Result<KycConfig> {
    if let Some(path) = config_path {
        return Ok(KycConfig::from_file(Path::new(path))?);
    }

    let default_path = config::default_config_path();
    if default_path.exists() {
        Ok(KycConfig::from_file(&default_path)?)
    } else {
        Ok(KycConfig::default())
    }
}

/// Read input text from a file, or from stdin when the path is `-`.
pub fn read_input(input: &Path) -> anyhow::Result<String> {
    if input == Path::new("-") {
        let mut text = String::new();
        std::io::stdin().read_to_string(&mut text)?;
        return Ok(text);
    }

    if !input.exists() {
        anyhow::bail!("Input file not found: {}", input.display());
    }

    Ok(std::fs::read_to_string(input)?)
}
