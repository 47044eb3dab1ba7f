//! JSON output formatter

use super::OutputFormatter;
use anyhow::Result;
use constsum_core::Checksum;
use serde::{Deserialize, Serialize};
use std::io::Write;

/// JSON formatter - outputs checksums as a JSON array
pub struct JsonFormatter<W: Write> {
    writer: W,
    pretty: bool,
    records: Vec<ChecksumRecord>,
}

/// Data structure for JSON output
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct ChecksumRecord {
    /// The name as given
    pub name: String,
    /// Product of the matched letters' values
    pub value: f64,
    /// Concatenated unit text
    pub units: String,
    /// Letters that matched, after normalization
    pub letters: String,
    /// Fixed-point result string
    pub result: String,
}

impl ChecksumRecord {
    /// Build a record from a computed checksum
    pub fn new(name: &str, checksum: &Checksum) -> Self {
        Self {
            name: name.to_string(),
            value: checksum.value,
            units: checksum.units.clone(),
            letters: checksum.letters.iter().collect(),
            result: checksum.render(),
        }
    }
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            pretty: true,
            records: Vec::new(),
        }
    }

    /// Pretty-print (default) or emit a single line
    pub fn pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }
}

impl<W: Write + Send + Sync> OutputFormatter for JsonFormatter<W> {
    fn format_checksum(&mut self, name: &str, checksum: &Checksum) -> Result<()> {
        self.records.push(ChecksumRecord::new(name, checksum));
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        if self.pretty {
            serde_json::to_writer_pretty(&mut self.writer, &self.records)?;
        } else {
            serde_json::to_writer(&mut self.writer, &self.records)?;
        }
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use constsum_core::{compute_checksum_with, ChecksumConfig};

    #[test]
    fn test_records_array() {
        let config = ChecksumConfig::builder().greek(true).build();
        let mut buffer = Vec::new();
        {
            let mut formatter = JsonFormatter::new(&mut buffer).pretty(false);
            formatter
                .format_checksum("pi", &compute_checksum_with("pi", &config))
                .unwrap();
            formatter
                .format_checksum("7", &compute_checksum_with("7", &config))
                .unwrap();
            formatter.finish().unwrap();
        }

        let records: Vec<ChecksumRecord> = serde_json::from_slice(&buffer).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].name, "pi");
        assert_eq!(records[0].letters, "πι");
        assert_eq!(records[0].units, "radA");
        assert_eq!(records[1].value, 1.0);
        assert!(records[1].result.ends_with(' '));
    }

    #[test]
    fn test_empty_array() {
        let mut buffer = Vec::new();
        {
            let mut formatter = JsonFormatter::new(&mut buffer).pretty(false);
            formatter.finish().unwrap();
        }
        assert_eq!(String::from_utf8(buffer).unwrap(), "[]\n");
    }
}
