//! Configuration structures for extraction and CSV ingestion.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::operation::DEFAULT_STATUS;

/// Main configuration for ctower.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CtowerConfig {
    /// Operation field extraction configuration.
    pub extraction: ExtractionConfig,

    /// CSV export reading configuration.
    pub csv: CsvConfig,
}

/// Operation field extraction configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionConfig {
    /// Status assigned to giros without an `ESTADO` label.
    pub default_giro_status: String,

    /// Status assigned to liberaciones without an `ESTADO` label.
    pub default_liberacion_status: String,

    /// Allowed absolute difference between giros total and purchase total.
    #[serde(with = "rust_decimal::serde::float")]
    pub reconcile_tolerance: Decimal,

    /// Skip rows that fail the operation-text pre-check.
    pub require_valid_text: bool,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            default_giro_status: DEFAULT_STATUS.to_string(),
            default_liberacion_status: DEFAULT_STATUS.to_string(),
            reconcile_tolerance: Decimal::new(1, 2),
            require_valid_text: true,
        }
    }
}

/// CSV export configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CsvConfig {
    /// Field delimiter.
    pub delimiter: char,

    /// Whether the first record is a header row.
    pub has_headers: bool,

    /// Header of the operation-info column (auto-detected when unset).
    pub info_column: Option<String>,
}

impl Default for CsvConfig {
    fn default() -> Self {
        Self {
            delimiter: ',',
            has_headers: true,
            info_column: None,
        }
    }
}

impl CtowerConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &std::path::Path) -> crate::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)?;
        config.check()?;
        Ok(config)
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &std::path::Path) -> crate::Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Reject values the extractor cannot work with.
    pub fn check(&self) -> crate::Result<()> {
        if self.extraction.reconcile_tolerance.is_sign_negative() {
            return Err(crate::CtowerError::Config(
                "extraction.reconcile_tolerance must not be negative".to_string(),
            ));
        }
        if !self.csv.delimiter.is_ascii() {
            return Err(crate::CtowerError::Config(format!(
                "csv.delimiter must be a single ASCII character, got {:?}",
                self.csv.delimiter
            )));
        }
        Ok(())
    }
}
