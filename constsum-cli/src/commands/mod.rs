//! CLI command implementations

use anyhow::Result;
use clap::{Args, Subcommand};
use constsum_core::ChecksumConfig;
use std::path::PathBuf;

use crate::config::ChecksumDefaults;

pub mod batch;
pub mod compute;
pub mod prompt;
pub mod table;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Compute the checksum of a single name
    Compute(compute::ComputeArgs),

    /// Ask for a name and options interactively
    Prompt(prompt::PromptArgs),

    /// Compute checksums for every name in one or more files
    Batch(batch::BatchArgs),

    /// List the constants behind each letter
    Table(table::TableArgs),
}

impl Commands {
    /// Run the selected command
    pub fn execute(&self) -> Result<()> {
        match self {
            Commands::Compute(args) => args.execute(),
            Commands::Prompt(args) => args.execute(),
            Commands::Batch(args) => args.execute(),
            Commands::Table(args) => args.execute(),
        }
    }
}

/// Checksum options shared by `compute` and `batch`
#[derive(Debug, Clone, Default, Args)]
pub struct ChecksumArgs {
    /// Transliterate to Greek and use the Greek letter table
    #[arg(short, long, conflicts_with = "alphabet")]
    pub greek: bool,

    /// Letter table by name (latin or greek)
    #[arg(short, long, value_name = "NAME")]
    pub alphabet: Option<String>,

    /// Lowercase ASCII letters before lookup
    #[arg(short, long)]
    pub lowercase: bool,

    /// Keep letter case even if the config file lowercases
    #[arg(long, conflicts_with = "lowercase")]
    pub no_lowercase: bool,

    /// Join unit tokens with " * " (default)
    #[arg(long, conflicts_with = "compact")]
    pub padded: bool,

    /// Join unit tokens with "*"
    #[arg(long)]
    pub compact: bool,

    /// Configuration file (TOML)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

impl ChecksumArgs {
    /// Merge flags over file defaults
    pub fn resolve(&self, defaults: &ChecksumDefaults) -> Result<ChecksumConfig> {
        let mut builder = ChecksumConfig::builder()
            .greek(self.greek || defaults.greek)
            .lowercase(resolve_flag(self.lowercase, self.no_lowercase, defaults.lowercase))
            .padded(resolve_flag(self.padded, self.compact, defaults.padded));

        if let Some(name) = &self.alphabet {
            builder = builder.alphabet_name(name)?;
        }

        Ok(builder.build())
    }
}

/// An on/off flag pair over a file default; `off` wins, then `on`
pub(crate) fn resolve_flag(on: bool, off: bool, default: bool) -> bool {
    if off {
        false
    } else {
        on || default
    }
}

/// Initialize logging based on verbosity level
pub(crate) fn init_logging(verbose: u8, quiet: bool) {
    if quiet {
        return;
    }

    let log_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    // A logger may already be installed when commands run in-process
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
        .try_init();
}
