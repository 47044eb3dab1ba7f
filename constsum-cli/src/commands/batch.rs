//! Batch command implementation

use anyhow::{Context, Result};
use clap::Args;
use constsum_core::{Checksum, ChecksumConfig};
use rayon::prelude::*;
use std::fs::File;
use std::io::{self, BufWriter};
use std::path::PathBuf;

use super::{init_logging, ChecksumArgs};
use crate::config::{CliConfig, OutputFormat};
use crate::error::CliError;
use crate::input::{resolve_patterns, FileReader};
use crate::output::{create_formatter, OutputFormatter};
use crate::progress::ProgressReporter;

/// Arguments for the batch command
#[derive(Debug, Args)]
pub struct BatchArgs {
    /// Input files or patterns (supports glob), one name per line
    #[arg(short, long, value_name = "FILE/PATTERN", required = true)]
    pub input: Vec<String>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    #[command(flatten)]
    pub checksum: ChecksumArgs,

    /// Number of worker threads (default: all available)
    #[arg(short, long, value_name = "N")]
    pub threads: Option<usize>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl BatchArgs {
    /// Execute the batch command
    pub fn execute(&self) -> Result<()> {
        init_logging(self.verbose, self.quiet);

        let file_config = CliConfig::load_or_default(self.checksum.config.as_deref())?;
        let config = self.checksum.resolve(&file_config.checksum)?;

        let files = resolve_patterns(&self.input)?;
        log::info!("Reading names from {} files", files.len());

        let mut progress = ProgressReporter::new(self.quiet);
        progress.init_files(files.len() as u64);

        let mut names = Vec::new();
        for path in &files {
            let file_names = FileReader::read_names(path)?;
            log::debug!("{}: {} names", path.display(), file_names.len());
            progress.file_completed(&path.display().to_string(), file_names.len());
            names.extend(file_names);
        }

        let checksums = compute_all(&names, config, self.threads)?;
        progress.finish(checksums.len());

        let format = self.format.unwrap_or(file_config.output.format);
        let pretty = file_config.output.pretty_json;
        match &self.output {
            Some(path) => {
                let file = File::create(path)
                    .with_context(|| format!("Failed to create {}", path.display()))?;
                let formatter = create_formatter(format, BufWriter::new(file), pretty, true);
                write_all(formatter, &names, &checksums)?;
                log::info!("Wrote {} checksums to {}", checksums.len(), path.display());
            }
            None => {
                let formatter = create_formatter(format, io::stdout(), pretty, true);
                write_all(formatter, &names, &checksums)?;
            }
        }

        Ok(())
    }
}

/// Evaluate every name on a rayon pool, preserving input order
pub fn compute_all(
    names: &[String],
    config: ChecksumConfig,
    threads: Option<usize>,
) -> Result<Vec<Checksum>> {
    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(threads) = threads {
        if threads == 0 {
            return Err(
                CliError::ConfigError("threads must be greater than 0".to_string()).into(),
            );
        }
        builder = builder.num_threads(threads);
    }
    let pool = builder.build().context("Failed to build thread pool")?;

    Ok(pool.install(|| names.par_iter().map(|name| config.compute(name)).collect()))
}

fn write_all(
    mut formatter: Box<dyn OutputFormatter + '_>,
    names: &[String],
    checksums: &[Checksum],
) -> Result<()> {
    for (name, checksum) in names.iter().zip(checksums) {
        formatter.format_checksum(name, checksum)?;
    }
    formatter.finish()
}
