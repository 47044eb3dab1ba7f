//! Markdown output formatter

use super::OutputFormatter;
use anyhow::Result;
use constsum_core::Checksum;
use std::io::Write;

/// Markdown formatter - outputs checksums as a table
pub struct MarkdownFormatter<W: Write> {
    writer: W,
    row_count: usize,
}

impl<W: Write> MarkdownFormatter<W> {
    /// Create a new markdown formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            row_count: 0,
        }
    }
}

/// Escape characters that would break a table cell
fn escape_cell(text: &str) -> String {
    text.replace('|', "\\|").replace('*', "\\*")
}

impl<W: Write + Send + Sync> OutputFormatter for MarkdownFormatter<W> {
    fn format_checksum(&mut self, name: &str, checksum: &Checksum) -> Result<()> {
        if self.row_count == 0 {
            writeln!(self.writer, "| # | Name | Value | Units |")?;
            writeln!(self.writer, "|---|------|-------|-------|")?;
        }
        self.row_count += 1;
        writeln!(
            self.writer,
            "| {} | {} | {:e} | {} |",
            self.row_count,
            escape_cell(name),
            checksum.value,
            escape_cell(&checksum.units)
        )?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        writeln!(self.writer)?;
        writeln!(self.writer, "---")?;
        writeln!(self.writer, "*Total names: {}*", self.row_count)?;
        self.writer.flush()?;
        Ok(())
    }
}
