//! Output formatting module

use crate::config::OutputFormat;
use anyhow::Result;
use constsum_core::Checksum;
use std::io::Write;

/// Trait for output formatters
pub trait OutputFormatter: Send + Sync {
    /// Format and output the checksum of one name
    fn format_checksum(&mut self, name: &str, checksum: &Checksum) -> Result<()>;

    /// Finalize output (e.g., close JSON array)
    fn finish(&mut self) -> Result<()>;
}

pub mod json;
pub mod markdown;
pub mod text;

pub use json::JsonFormatter;
pub use markdown::MarkdownFormatter;
pub use text::TextFormatter;

/// Build the formatter for `format`
///
/// `show_names` prefixes text output with the name; JSON and Markdown always
/// carry it.
pub fn create_formatter<'a, W: Write + Send + Sync + 'a>(
    format: OutputFormat,
    writer: W,
    pretty_json: bool,
    show_names: bool,
) -> Box<dyn OutputFormatter + 'a> {
    match format {
        OutputFormat::Text => Box::new(TextFormatter::new(writer).show_names(show_names)),
        OutputFormat::Json => Box::new(JsonFormatter::new(writer).pretty(pretty_json)),
        OutputFormat::Markdown => Box::new(MarkdownFormatter::new(writer)),
    }
}
