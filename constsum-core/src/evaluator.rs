//! Checksum evaluation over a normalized name

use crate::format::{self, BASE_VALUE, DIMENSIONLESS};
use crate::tables::Alphabet;
use smallvec::SmallVec;
use std::fmt;

/// Product of letter values plus the concatenated unit text
#[derive(Debug, Clone, PartialEq)]
pub struct Checksum {
    /// Running product, starting from [`BASE_VALUE`]
    pub value: f64,
    /// Unit groups of matched letters, in input order, without separators
    pub units: String,
    /// Symbols that matched a table entry, in input order
    pub letters: SmallVec<[char; 16]>,
}

impl Checksum {
    /// Checksum of a name with no matching letters
    pub fn base() -> Self {
        Self {
            value: BASE_VALUE,
            units: String::new(),
            letters: SmallVec::new(),
        }
    }

    /// `<value to 64 places> <units>`
    pub fn render(&self) -> String {
        format::format_result(self.value, &self.units)
    }

    /// Number of characters that contributed
    pub fn matched(&self) -> usize {
        self.letters.len()
    }
}

impl Default for Checksum {
    fn default() -> Self {
        Self::base()
    }
}

impl fmt::Display for Checksum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

/// Folds already-normalized text into a [`Checksum`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Evaluator {
    alphabet: Alphabet,
    padded: bool,
}

impl Evaluator {
    /// Create an evaluator for one alphabet and unit separator style
    pub fn new(alphabet: Alphabet, padded: bool) -> Self {
        Self { alphabet, padded }
    }

    /// Alphabet this evaluator reads from
    pub fn alphabet(&self) -> Alphabet {
        self.alphabet
    }

    /// Whether unit tokens are joined with `" * "`
    pub fn padded(&self) -> bool {
        self.padded
    }

    /// Multiply the values and append the units of every matching character
    ///
    /// Characters without an entry are skipped. A letter whose rendered unit
    /// text is exactly `dimensionless` still scales the value but adds no
    /// unit text.
    pub fn evaluate(&self, text: &str) -> Checksum {
        let table = self.alphabet.table();
        let mut checksum = Checksum::base();

        for ch in text.chars() {
            let Some(entry) = table.get(ch) else {
                log::trace!("skipping {ch:?}: not in the {} table", self.alphabet);
                continue;
            };

            let unit_text = entry.unit_string(self.padded);
            checksum.value *= entry.value;
            checksum.letters.push(ch);

            if unit_text != DIMENSIONLESS {
                checksum.units.push_str(&unit_text);
            }
        }

        log::debug!(
            "evaluated {} of {} characters against {}: value={:e}",
            checksum.matched(),
            text.chars().count(),
            self.alphabet,
            checksum.value
        );

        checksum
    }
}
