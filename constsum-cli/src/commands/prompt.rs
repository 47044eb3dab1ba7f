//! Interactive prompt session
//!
//! Asks for a name and two yes/no answers, echoes them back and prints the
//! result between `---Result:` and `---` banner lines.

use anyhow::Result;
use clap::Args;
use constsum_core::ChecksumConfig;
use std::collections::VecDeque;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use super::{init_logging, resolve_flag};
use crate::config::CliConfig;
use crate::error::CliError;

const NAME_PROMPT: &str = "Input name: ";
const GREEK_PROMPT: &str = "As greek (convert latin to greek letters)? (0 for no, 1 for yes): ";
const LOWER_PROMPT: &str = "Lower it (uppercase chars to lowercase)? (0 for no, 1 for yes): ";

/// Arguments for the prompt command
#[derive(Debug, Args)]
pub struct PromptArgs {
    /// Join unit tokens with " * " even if the config file says otherwise
    #[arg(long, conflicts_with = "compact")]
    pub padded: bool,

    /// Join unit tokens with "*" instead of " * "
    #[arg(long)]
    pub compact: bool,

    /// Configuration file (TOML)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl PromptArgs {
    /// Execute the prompt command
    pub fn execute(&self) -> Result<()> {
        init_logging(self.verbose, false);

        let file_config = CliConfig::load_or_default(self.config.as_deref())?;
        let padded = resolve_flag(self.padded, self.compact, file_config.checksum.padded);

        let stdin = io::stdin();
        let stdout = io::stdout();
        run_session(stdin.lock(), stdout.lock(), padded)
    }
}

/// Whitespace-separated tokens read lazily, line by line
///
/// Once an answer fails to parse the reader stays failed and every later
/// answer reads as no.
struct TokenReader<R> {
    reader: R,
    pending: VecDeque<String>,
    failed: bool,
}

/// Split a token into a leading signed integer and the unread rest
fn split_integer(token: &str) -> Option<(i64, &str)> {
    let bytes = token.as_bytes();
    let sign_len = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    let digits = bytes[sign_len..]
        .iter()
        .take_while(|b| b.is_ascii_digit())
        .count();
    if digits == 0 {
        return None;
    }

    let end = sign_len + digits;
    let value = token[..end].parse::<i64>().ok()?;
    Some((value, &token[end..]))
}

impl<R: BufRead> TokenReader<R> {
    fn new(reader: R) -> Self {
        Self {
            reader,
            pending: VecDeque::new(),
            failed: false,
        }
    }

    /// Next token, or `None` at end of input
    fn next_token(&mut self) -> Result<Option<String>> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(Some(token));
            }

            let mut line = String::new();
            if self.reader.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            self.pending
                .extend(line.split_whitespace().map(str::to_string));
        }
    }

    /// Read a 0/1 answer; only `1` counts as yes
    ///
    /// Only the leading integer of a token is consumed, e.g. `1abc` answers
    /// yes and leaves `abc` for the next read.
    fn next_choice(&mut self, question: &str) -> Result<bool> {
        if self.failed {
            log::warn!("Input already failed; treating {question:?} as no");
            return Ok(false);
        }

        let Some(token) = self.next_token()? else {
            log::warn!("No answer for {question:?}; treating as no");
            return Ok(false);
        };

        match split_integer(&token) {
            Some((answer, rest)) => {
                if !rest.is_empty() {
                    self.pending.push_front(rest.to_string());
                }
                Ok(answer == 1)
            }
            None => {
                log::warn!("Expected 0 or 1 for {question:?}, got {token:?}; treating as no");
                self.failed = true;
                Ok(false)
            }
        }
    }
}

fn yes_no(flag: bool) -> &'static str {
    if flag {
        "Yes"
    } else {
        "No"
    }
}

fn prompt<W: Write>(writer: &mut W, text: &str) -> Result<()> {
    write!(writer, "{text}")?;
    writer.flush()?;
    Ok(())
}

/// Run one interactive session over arbitrary reader and writer
pub fn run_session<R: BufRead, W: Write>(reader: R, mut writer: W, padded: bool) -> Result<()> {
    let mut tokens = TokenReader::new(reader);

    prompt(&mut writer, NAME_PROMPT)?;
    let name = tokens
        .next_token()?
        .ok_or_else(|| CliError::InputError("no name given".to_string()))?;

    prompt(&mut writer, GREEK_PROMPT)?;
    let is_greek = tokens.next_choice("greek")?;

    prompt(&mut writer, LOWER_PROMPT)?;
    let is_lower = tokens.next_choice("lowercase")?;

    writeln!(writer, "Name: {name}")?;
    writeln!(writer, "Is Greek: {}", yes_no(is_greek))?;
    writeln!(writer, "Lowercase: {}", yes_no(is_lower))?;

    let config = ChecksumConfig::builder()
        .greek(is_greek)
        .lowercase(is_lower)
        .padded(padded)
        .build();
    let result = config.compute(&name).render();

    writeln!(writer)?;
    writeln!(writer, "---Result:")?;
    write!(writer, "{result}")?;
    writeln!(writer)?;
    writeln!(writer, "---")?;
    writer.flush()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn session(input: &str, padded: bool) -> Result<String> {
        let mut output = Vec::new();
        run_session(Cursor::new(input), &mut output, padded)?;
        Ok(String::from_utf8(output).unwrap())
    }

    #[test]
    fn test_full_session_transcript() {
        let output = session("c\n0\n0\n", true).unwrap();
        let zeros = "0".repeat(64);
        let expected = format!(
            "{NAME_PROMPT}{GREEK_PROMPT}{LOWER_PROMPT}Name: c\nIs Greek: No\nLowercase: No\n\n---Result:\n299800000.{zeros} m * s^-1\n---\n"
        );
        assert_eq!(output, expected);
    }

    #[test]
    fn test_answers_on_one_line() {
        let output = session("pi 1 1", false).unwrap();
        assert!(output.contains("Is Greek: Yes\nLowercase: Yes\n"));
        assert!(output.contains(" radA\n---\n"));
    }

    #[test]
    fn test_name_is_first_token_only() {
        let output = session("Ada Lovelace\n0\n0\n", true).unwrap();
        assert!(output.contains("Name: Ada\n"));
        // "Lovelace" is read as the greek answer and treated as no
        assert!(output.contains("Is Greek: No\n"));
    }

    #[test]
    fn test_non_one_answers_mean_no() {
        let output = session("x 2 yes", true).unwrap();
        assert!(output.contains("Is Greek: No\nLowercase: No\n"));
    }

    #[test]
    fn test_failed_answer_fails_the_rest() {
        // "Lovelace" fails the greek answer, so the trailing 1 is never read
        let output = session("Ada Lovelace 1\n", true).unwrap();
        assert!(output.contains("Is Greek: No\nLowercase: No\n"));
    }

    #[test]
    fn test_leading_integer_is_consumed() {
        let output = session("x 1abc 1", true).unwrap();
        // "1" answers greek, "abc" then fails the lowercase answer
        assert!(output.contains("Is Greek: Yes\nLowercase: No\n"));

        let output = session("x 11 +1", true).unwrap();
        assert!(output.contains("Is Greek: No\nLowercase: Yes\n"));
    }

    #[test]
    fn test_split_integer() {
        assert_eq!(split_integer("1"), Some((1, "")));
        assert_eq!(split_integer("-1x"), Some((-1, "x")));
        assert_eq!(split_integer("+0"), Some((0, "")));
        assert_eq!(split_integer("yes"), None);
        assert_eq!(split_integer("-"), None);
        assert_eq!(split_integer("99999999999999999999"), None);
    }

    #[test]
    fn test_missing_answers_mean_no() {
        let output = session("x\n", true).unwrap();
        assert!(output.contains("Is Greek: No\nLowercase: No\n"));
    }

    #[test]
    fn test_empty_input_is_an_error() {
        let err = session("", true).unwrap_err();
        assert_eq!(err.to_string(), "Input error: no name given");
    }
}
