//! Configuration structures for extraction, review and checkout.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{KycError, Result};

/// Main configuration for kycscan.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct KycConfig {
    /// Field extraction configuration.
    pub extraction: ExtractionConfig,

    /// Review and submission configuration.
    pub review: ReviewConfig,

    /// Payment checkout configuration.
    pub checkout: CheckoutConfig,
}

/// Field extraction configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionConfig {
    /// Fill empty fields from OCR service hints.
    pub apply_hints: bool,

    /// Report fields that could not be extracted as warnings.
    pub warn_on_missing: bool,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            apply_hints: true,
            warn_on_missing: true,
        }
    }
}

/// Review and submission configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ReviewConfig {
    /// Require explicit confirmation before submitting.
    pub require_confirmation: bool,

    /// Show the document number masked in human-readable output.
    pub mask_document_number: bool,
}

impl Default for ReviewConfig {
    fn default() -> Self {
        Self {
            require_confirmation: true,
            mask_document_number: true,
        }
    }
}

/// Payment checkout configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CheckoutConfig {
    /// ISO currency code for orders.
    pub currency: String,

    /// Merchant name shown on the hosted checkout page.
    pub merchant_name: String,

    /// Payment description shown on the hosted checkout page.
    pub description: String,
}

impl Default for CheckoutConfig {
    fn default() -> Self {
        Self {
            currency: "INR".to_string(),
            merchant_name: "PowerNetPro".to_string(),
            description: "Wallet Top-up".to_string(),
        }
    }
}

impl KycConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content)
            .map_err(|e| KycError::Config(format!("{}: {}", path.display(), e)))
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content =
            serde_json::to_string_pretty(self).map_err(|e| KycError::Config(e.to_string()))?;
        std::fs::write(path, content)?;
        Ok(())
    }
}
