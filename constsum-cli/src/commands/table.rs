//! Table command implementation

use anyhow::Result;
use clap::Args;
use constsum_core::tables::transliteration::LATIN_TO_GREEK;
use constsum_core::Alphabet;
use std::io::{self, Write};

/// Arguments for the table command
#[derive(Debug, Args)]
pub struct TableArgs {
    /// Alphabet to list (latin or greek)
    #[arg(value_name = "ALPHABET", default_value = "latin")]
    pub alphabet: String,

    /// Join unit tokens with "*" instead of " * "
    #[arg(long)]
    pub compact: bool,
}

impl TableArgs {
    /// Execute the table command
    pub fn execute(&self) -> Result<()> {
        let alphabet: Alphabet = self.alphabet.parse()?;
        let stdout = io::stdout();
        let mut out = stdout.lock();
        write_table(&mut out, alphabet, !self.compact)?;
        out.flush()?;
        Ok(())
    }
}

/// Latin letter that transliterates to `greek`
fn latin_source(greek: char) -> Option<char> {
    LATIN_TO_GREEK
        .iter()
        .find(|(_, g)| *g == greek)
        .map(|(latin, _)| *latin)
}

/// One line per letter: symbol, value, units
pub fn write_table<W: Write>(writer: &mut W, alphabet: Alphabet, padded: bool) -> Result<()> {
    let table = alphabet.table();
    writeln!(writer, "{} alphabet ({} letters)", alphabet, table.len())?;

    for entry in table.entries() {
        let units = if entry.is_dimensionless() {
            "(dimensionless)".to_string()
        } else {
            entry.unit_string(padded)
        };

        match alphabet {
            Alphabet::Latin => {
                writeln!(writer, "  {}  {:<14e}  {}", entry.symbol, entry.value, units)?
            }
            Alphabet::Greek => {
                let source = latin_source(entry.symbol).unwrap_or('-');
                writeln!(
                    writer,
                    "  {} ({})  {:<14e}  {}",
                    entry.symbol, source, entry.value, units
                )?
            }
        }
    }

    Ok(())
}
