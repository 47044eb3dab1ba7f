//! Plain text output formatter

use super::OutputFormatter;
use anyhow::Result;
use constsum_core::Checksum;
use std::io::Write;

/// Plain text formatter - one result string per line
pub struct TextFormatter<W: Write> {
    writer: W,
    show_names: bool,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            show_names: false,
        }
    }

    /// Prefix every line with `<name>: `
    pub fn show_names(mut self, show_names: bool) -> Self {
        self.show_names = show_names;
        self
    }
}

impl<W: Write + Send + Sync> OutputFormatter for TextFormatter<W> {
    fn format_checksum(&mut self, name: &str, checksum: &Checksum) -> Result<()> {
        if self.show_names {
            write!(self.writer, "{name}: ")?;
        }
        writeln!(self.writer, "{checksum}")?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
