//! constsum command-line entry point

use anyhow::Result;
use clap::Parser;
use constsum_cli::commands::Commands;

/// Checksums of names built from physical constants
#[derive(Debug, Parser)]
#[command(name = "constsum", version, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    cli.command.execute()
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_compute() {
        let cli = Cli::try_parse_from(["constsum", "compute", "Ada", "--greek"]).unwrap();
        match cli.command {
            Commands::Compute(args) => {
                assert_eq!(args.name, "Ada");
                assert!(args.checksum.greek);
            }
            other => panic!("expected compute, got {other:?}"),
        }
    }
}
