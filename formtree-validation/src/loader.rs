// Validation configuration file loaders

use crate::config::ValidationConfig;
use crate::errors::{ConfigError, Result};
use serde_json::Value;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Supported configuration file formats
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FileFormat {
    Json,
    Toml,
}

impl FileFormat {
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_lowercase().as_str() {
            "json" => Some(FileFormat::Json),
            "toml" => Some(FileFormat::Toml),
            _ => None,
        }
    }
}

/// Loads a [`ValidationConfig`] from a JSON or TOML document
///
/// TOML documents use the same layout as JSON, with tables for nested
/// records:
///
/// ```toml
/// [name]
/// label = "Full name"
/// rules = { required = true, maxLength = 8 }
///
/// [venue.address.street.rules]
/// required = true
/// ```
pub struct ConfigLoader {
    format: FileFormat,
}

impl ConfigLoader {
    pub fn new(format: FileFormat) -> Self {
        Self { format }
    }

    /// Auto-detect format from file extension
    pub fn auto(path: &str) -> Result<Self> {
        let ext = Path::new(path)
            .extension()
            .and_then(|s| s.to_str())
            .ok_or_else(|| ConfigError::LoadError("No file extension found".to_string()))?;

        let format = FileFormat::from_extension(ext)
            .ok_or_else(|| ConfigError::LoadError(format!("Unsupported format: {}", ext)))?;

        Ok(Self::new(format))
    }

    /// Load a validation configuration from file
    pub fn load_file(&self, path: &str) -> Result<ValidationConfig> {
        let content = fs::read_to_string(path)
            .map_err(|e| ConfigError::LoadError(format!("Failed to read file: {}", e)))?;

        debug!(path = %path, format = ?self.format, "Loading validation configuration");
        self.parse(&content)
    }

    /// Parse a validation configuration from a string
    pub fn parse(&self, content: &str) -> Result<ValidationConfig> {
        ValidationConfig::from_json(&self.parse_value(content)?)
    }

    /// Parse the document into a JSON value without interpreting it
    pub fn parse_value(&self, content: &str) -> Result<Value> {
        match self.format {
            FileFormat::Json => self.parse_json(content),
            FileFormat::Toml => self.parse_toml(content),
        }
    }

    fn parse_json(&self, content: &str) -> Result<Value> {
        serde_json::from_str(content)
            .map_err(|e| ConfigError::ParseError(format!("JSON parse error: {}", e)))
    }

    fn parse_toml(&self, content: &str) -> Result<Value> {
        let toml_value: toml::Value = toml::from_str(content)
            .map_err(|e| ConfigError::ParseError(format!("TOML parse error: {}", e)))?;

        serde_json::to_value(toml_value)
            .map_err(|e| ConfigError::ParseError(format!("TOML to JSON conversion error: {}", e)))
    }
}
