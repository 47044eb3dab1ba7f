//! Letter tables: each Latin or Greek letter stands for a physical constant
//!
//! Lookup is allocation-free; ASCII symbols use a direct index and Greek
//! symbols fall back to a hash map.

use crate::error::CoreError;
use crate::format;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

/// A letter and the constant it stands for
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LetterEntry {
    /// The letter itself
    pub symbol: char,
    /// Numeric value of the constant
    pub value: f64,
    /// Unit tokens, in the order they are rendered
    pub units: &'static [&'static str],
}

impl LetterEntry {
    /// Create a table entry
    pub const fn new(symbol: char, value: f64, units: &'static [&'static str]) -> Self {
        Self {
            symbol,
            value,
            units,
        }
    }

    /// Units joined with the compact or padded separator
    pub fn unit_string(&self, padded: bool) -> String {
        format::format_units(self.units, padded)
    }

    /// True when the unit list is exactly the `dimensionless` sentinel
    pub fn is_dimensionless(&self) -> bool {
        matches!(self.units, [only] if *only == format::DIMENSIONLESS)
    }
}

const DIMENSIONLESS_UNITS: &[&str] = &[format::DIMENSIONLESS];

/// Lowercase Greek letters
#[allow(clippy::approx_constant)]
pub static GREEK_ENTRIES: [LetterEntry; 24] = [
    LetterEntry::new('α', 7.297e-3, &["C", "s", "kg^-1", "m^-1"]),
    LetterEntry::new('β', 2.2e6, &["m", "s^-1"]),
    LetterEntry::new('γ', 1.1732e-7, &["m", "s^-2"]),
    LetterEntry::new('δ', 1e-5, &["kg", "m^-3"]),
    LetterEntry::new('ε', 8.854e-12, &["F", "m^-1"]),
    LetterEntry::new('ζ', 2.45e-3, &["kg", "m", "s^-2"]),
    LetterEntry::new('η', 1.002e-3, &["Pa", "s"]),
    LetterEntry::new('θ', 0.523, &["rad"]),
    LetterEntry::new('ι', 0.01, &["A"]),
    LetterEntry::new('κ', 401.0, &["W", "m^-1", "K^-1"]),
    LetterEntry::new('λ', 6.626e-34, &["J", "s"]),
    LetterEntry::new('μ', 1.256e-6, &["N", "A^-2"]),
    LetterEntry::new('ν', 5e14, &["Hz"]),
    LetterEntry::new('ξ', 0.5, &["V", "s", "m^-1"]),
    LetterEntry::new('ο', 273.15, &["K"]),
    LetterEntry::new('π', 3.1415926535, &["rad"]),
    LetterEntry::new('ρ', 1000.0, &["kg", "m^-3"]),
    LetterEntry::new('σ', 5.67e-8, &["W", "m^-2", "K^-4"]),
    LetterEntry::new('τ', 2.2e-6, &["s"]),
    LetterEntry::new('υ', 340.0, &["m", "s^-1"]),
    LetterEntry::new('φ', 2.07e-15, &["Wb"]),
    LetterEntry::new('χ', 1.9e-5, DIMENSIONLESS_UNITS),
    LetterEntry::new('ψ', 1.054e-34, &["J", "s"]),
    LetterEntry::new('ω', 6.28, &["rad", "s^-1"]),
];

/// Latin letters, lowercase then uppercase
///
/// Lowercase `j`, `o` and `s` have no constant assigned.
#[allow(clippy::approx_constant)]
pub static LATIN_ENTRIES: [LetterEntry; 49] = [
    LetterEntry::new('a', 9.81, &["m", "s^-2"]),
    LetterEntry::new('b', 1.0e-10, &["m"]),
    LetterEntry::new('c', 2.998e8, &["m", "s^-1"]),
    LetterEntry::new('d', 0.01, &["m"]),
    LetterEntry::new('e', 1.602e-19, &["C"]),
    LetterEntry::new('f', 60.0, &["Hz"]),
    LetterEntry::new('g', 9.81, &["m", "s^-2"]),
    LetterEntry::new('h', 6.626e-34, &["J", "s"]),
    LetterEntry::new('i', 1.0, &["A"]),
    LetterEntry::new('k', 1.38e-23, &["J", "K^-1"]),
    LetterEntry::new('l', 0.5, &["m"]),
    LetterEntry::new('m', 1.0, &["kg"]),
    LetterEntry::new('n', 1.0, DIMENSIONLESS_UNITS),
    LetterEntry::new('p', 1.0, &["kg", "m", "s^-1"]),
    LetterEntry::new('q', 1.602e-19, &["C"]),
    LetterEntry::new('r', 1.0, &["m"]),
    LetterEntry::new('t', 1.0, &["s"]),
    LetterEntry::new('u', 1.0, &["m", "s^-1"]),
    LetterEntry::new('v', 3.0, &["m", "s^-1"]),
    LetterEntry::new('w', 100.0, &["J"]),
    LetterEntry::new('x', 2.0, &["m"]),
    LetterEntry::new('y', 3.0, &["m"]),
    LetterEntry::new('z', 4.0, &["m"]),
    LetterEntry::new('A', 1.0, &["m^2"]),
    LetterEntry::new('B', 1.0, &["T"]),
    LetterEntry::new('C', 299792458.0, &["m", "s^-1"]),
    LetterEntry::new('D', 1.0, &["m"]),
    LetterEntry::new('E', 2.718281828459045, DIMENSIONLESS_UNITS),
    LetterEntry::new('F', 1.0, &["N"]),
    LetterEntry::new('G', 6.67430e-11, &["m^3", "kg^-1", "s^-2"]),
    LetterEntry::new('H', 6.62607015e-34, &["J", "s"]),
    LetterEntry::new('I', 1.0, &["A"]),
    LetterEntry::new('J', 1.0, &["kg", "m^2", "s^-2"]),
    LetterEntry::new('K', 1.380649e-23, &["J", "K^-1"]),
    LetterEntry::new('L', 1.0, &["m"]),
    LetterEntry::new('M', 1.0, &["kg"]),
    LetterEntry::new('N', 1.0, DIMENSIONLESS_UNITS),
    LetterEntry::new('O', 0.0, DIMENSIONLESS_UNITS),
    LetterEntry::new('P', 1.0, &["kg", "m", "s^-1"]),
    LetterEntry::new('Q', 1.602176634e-19, &["C"]),
    LetterEntry::new('R', 8.314462618, &["J", "mol^-1", "K^-1"]),
    LetterEntry::new('S', 1.0, &["J", "K^-1"]),
    LetterEntry::new('T', 273.15, &["K"]),
    LetterEntry::new('U', 1.0, &["J"]),
    LetterEntry::new('V', 1.0, &["m^3"]),
    LetterEntry::new('W', 1.0, &["J"]),
    LetterEntry::new('X', 1.0, &["m"]),
    LetterEntry::new('Y', 1.0, &["m"]),
    LetterEntry::new('Z', 1.0, &["m"]),
];

/// Keyed view over an ordered slice of letter entries
#[derive(Debug, Clone)]
pub struct AlphabetTable {
    entries: &'static [LetterEntry],
    /// ASCII symbol -> entry index
    ascii_index: [Option<usize>; 128],
    /// Non-ASCII symbol -> entry index
    non_ascii: HashMap<char, usize>,
}

impl AlphabetTable {
    /// Index `entries`; the first entry wins for a repeated symbol
    pub fn new(entries: &'static [LetterEntry]) -> Self {
        let mut ascii_index = [None; 128];
        let mut non_ascii = HashMap::new();

        for (idx, entry) in entries.iter().enumerate() {
            if entry.symbol.is_ascii() {
                let slot = &mut ascii_index[entry.symbol as usize];
                if slot.is_none() {
                    *slot = Some(idx);
                }
            } else {
                non_ascii.entry(entry.symbol).or_insert(idx);
            }
        }

        Self {
            entries,
            ascii_index,
            non_ascii,
        }
    }

    /// Look up the entry for an exact symbol - hot path
    #[inline]
    pub fn get(&self, ch: char) -> Option<&'static LetterEntry> {
        let idx = if ch.is_ascii() {
            self.ascii_index[ch as usize]
        } else {
            self.non_ascii.get(&ch).copied()
        };
        idx.and_then(|idx| self.entries.get(idx))
    }

    /// Whether `ch` has an entry
    pub fn contains(&self, ch: char) -> bool {
        self.get(ch).is_some()
    }

    /// Entries in table order
    pub fn entries(&self) -> &'static [LetterEntry] {
        self.entries
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when the table has no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

static GREEK_TABLE: OnceLock<AlphabetTable> = OnceLock::new();
static LATIN_TABLE: OnceLock<AlphabetTable> = OnceLock::new();

/// Which letter table a name is evaluated against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alphabet {
    /// Latin letters, both cases
    #[default]
    Latin,
    /// Lowercase Greek letters, reached through transliteration
    Greek,
}

impl Alphabet {
    /// All alphabets, Latin first
    pub const ALL: [Alphabet; 2] = [Alphabet::Latin, Alphabet::Greek];

    /// The process-wide table for this alphabet
    pub fn table(self) -> &'static AlphabetTable {
        match self {
            Alphabet::Latin => LATIN_TABLE.get_or_init(|| AlphabetTable::new(&LATIN_ENTRIES)),
            Alphabet::Greek => GREEK_TABLE.get_or_init(|| AlphabetTable::new(&GREEK_ENTRIES)),
        }
    }

    /// Short lowercase name
    pub fn name(self) -> &'static str {
        match self {
            Alphabet::Latin => "latin",
            Alphabet::Greek => "greek",
        }
    }

    /// Alphabet selected by the `use_greek` flag
    pub fn from_greek_flag(use_greek: bool) -> Self {
        if use_greek {
            Alphabet::Greek
        } else {
            Alphabet::Latin
        }
    }

    /// Whether names are transliterated before lookup
    pub fn is_greek(self) -> bool {
        self == Alphabet::Greek
    }
}

impl fmt::Display for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Alphabet {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "latin" | "lat" | "l" => Ok(Alphabet::Latin),
            "greek" | "grc" | "g" => Ok(Alphabet::Greek),
            other => Err(CoreError::UnknownAlphabet(other.to_string())),
        }
    }
}
