//! Compute command implementation

use anyhow::Result;
use clap::Args;
use std::io;

use super::{init_logging, ChecksumArgs};
use crate::config::{CliConfig, OutputFormat};
use crate::output::create_formatter;

/// Arguments for the compute command
#[derive(Debug, Args)]
pub struct ComputeArgs {
    /// Name to evaluate
    #[arg(value_name = "NAME")]
    pub name: String,

    #[command(flatten)]
    pub checksum: ChecksumArgs,

    /// Output format
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl ComputeArgs {
    /// Execute the compute command
    pub fn execute(&self) -> Result<()> {
        init_logging(self.verbose, false);

        let file_config = CliConfig::load_or_default(self.checksum.config.as_deref())?;
        let config = self.checksum.resolve(&file_config.checksum)?;
        log::info!("Computing checksum for {:?}", self.name);
        log::debug!("Options: {:?}", config);

        let checksum = config.compute(&self.name);

        let format = self.format.unwrap_or(file_config.output.format);
        let mut formatter =
            create_formatter(format, io::stdout(), file_config.output.pretty_json, false);
        formatter.format_checksum(&self.name, &checksum)?;
        formatter.finish()?;

        Ok(())
    }
}
