//! Checksum options

use crate::error::Result;
use crate::evaluator::{Checksum, Evaluator};
use crate::normalize::Normalizer;
use crate::tables::Alphabet;
use serde::{Deserialize, Serialize};

/// Options that select how a name is normalized and evaluated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ChecksumConfig {
    /// Letter table; Greek also turns on transliteration
    pub alphabet: Alphabet,
    /// Lowercase ASCII letters before lookup
    pub lowercase: bool,
    /// Join unit tokens with `" * "` instead of `"*"`
    pub padded: bool,
}

impl ChecksumConfig {
    /// Create a configuration builder
    pub fn builder() -> ChecksumConfigBuilder {
        ChecksumConfigBuilder::default()
    }

    /// Normalizer for these options
    pub fn normalizer(&self) -> Normalizer {
        Normalizer::new(self.lowercase, self.alphabet.is_greek())
    }

    /// Evaluator for these options
    pub fn evaluator(&self) -> Evaluator {
        Evaluator::new(self.alphabet, self.padded)
    }

    /// Normalize and evaluate `name`
    pub fn compute(&self, name: &str) -> Checksum {
        let normalized = self.normalizer().normalize(name);
        self.evaluator().evaluate(&normalized)
    }
}

/// Fluent builder for [`ChecksumConfig`]
#[derive(Debug, Default)]
pub struct ChecksumConfigBuilder {
    config: ChecksumConfig,
}

impl ChecksumConfigBuilder {
    /// Create a builder with default options
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the alphabet
    pub fn alphabet(mut self, alphabet: Alphabet) -> Self {
        self.config.alphabet = alphabet;
        self
    }

    /// Set the alphabet by name (`latin`, `greek`, ...)
    pub fn alphabet_name(mut self, name: &str) -> Result<Self> {
        self.config.alphabet = name.parse()?;
        Ok(self)
    }

    /// Select Greek (`true`) or Latin (`false`)
    pub fn greek(mut self, greek: bool) -> Self {
        self.config.alphabet = Alphabet::from_greek_flag(greek);
        self
    }

    /// Lowercase before lookup
    pub fn lowercase(mut self, lowercase: bool) -> Self {
        self.config.lowercase = lowercase;
        self
    }

    /// Pad unit separators
    pub fn padded(mut self, padded: bool) -> Self {
        self.config.padded = padded;
        self
    }

    /// Build the configuration
    pub fn build(self) -> ChecksumConfig {
        self.config
    }
}
