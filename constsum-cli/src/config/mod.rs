//! Configuration module
//!
//! Optional TOML file; command-line flags override its values.

use crate::error::CliError;
use crate::input::FileReader;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// CLI configuration structure
#[derive(Debug, Deserialize, Serialize, Default, PartialEq)]
pub struct CliConfig {
    /// Checksum defaults
    #[serde(default)]
    pub checksum: ChecksumDefaults,

    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,
}

/// Checksum-related defaults
#[derive(Debug, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct ChecksumDefaults {
    /// Evaluate against the Greek table
    pub greek: bool,

    /// Lowercase names before lookup
    pub lowercase: bool,

    /// Join unit tokens with " * "
    pub padded: bool,
}

impl Default for ChecksumDefaults {
    fn default() -> Self {
        Self {
            greek: false,
            lowercase: false,
            padded: true,
        }
    }
}

/// Output-related configuration
#[derive(Debug, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct OutputConfig {
    /// Default output format
    pub format: OutputFormat,

    /// Pretty print JSON output
    pub pretty_json: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            pretty_json: true,
        }
    }
}

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Plain result string
    #[default]
    Text,
    /// JSON array of checksum records
    Json,
    /// Markdown table
    Markdown,
}

impl CliConfig {
    /// Parse configuration from TOML text
    pub fn from_toml_str(text: &str) -> Result<Self> {
        toml::from_str(text).map_err(|e| CliError::ConfigError(e.to_string()).into())
    }

    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Err(CliError::FileNotFound(path.display().to_string()).into());
        }

        let text = FileReader::read_text(path)?;
        let config = Self::from_toml_str(&text)?;
        log::debug!("Loaded configuration from {}: {:?}", path.display(), config);
        Ok(config)
    }

    /// Load from `path` if given, otherwise use defaults
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }
}
