//! Physical-constant checksums for names
//!
//! Every Latin or Greek letter stands for a physical constant with a value
//! and a list of unit tokens. A name is normalized (accent folding, optional
//! lowercasing, optional Latin to Greek transliteration) and then folded
//! into the product of its letters' values and the concatenation of their
//! units.
//!
//! # Example
//!
//! ```rust
//! use constsum_core::{compute_checksum, ChecksumConfig};
//!
//! let rendered = compute_checksum("c", false, false);
//! assert!(rendered.starts_with("299800000.0000"));
//! assert!(rendered.ends_with(" m*s^-1"));
//!
//! let config = ChecksumConfig::builder().greek(true).padded(true).build();
//! let checksum = config.compute("pi");
//! assert_eq!(checksum.units, "radA");
//! ```

pub mod config;
pub mod error;
pub mod evaluator;
pub mod format;
pub mod normalize;
pub mod tables;

pub use config::{ChecksumConfig, ChecksumConfigBuilder};
pub use error::{CoreError, Result};
pub use evaluator::{Checksum, Evaluator};
pub use normalize::Normalizer;
pub use tables::{Alphabet, AlphabetTable, LetterEntry};

/// Render the checksum of `name` with compact unit separators
///
/// `use_greek` transliterates to Greek and reads the Greek table;
/// `lowercase` lowercases ASCII letters first.
pub fn compute_checksum(name: &str, use_greek: bool, lowercase: bool) -> String {
    let config = ChecksumConfig::builder()
        .greek(use_greek)
        .lowercase(lowercase)
        .build();
    compute_checksum_with(name, &config).render()
}

/// Checksum of `name` under explicit options
pub fn compute_checksum_with(name: &str, config: &ChecksumConfig) -> Checksum {
    config.compute(name)
}
