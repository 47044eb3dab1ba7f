//! Constant lookup tables
//!
//! All tables are process-wide, read-only, and built at most once.

pub mod accent;
pub mod alphabet;
pub mod transliteration;

pub use accent::fold_accent;
pub use alphabet::{Alphabet, AlphabetTable, LetterEntry, GREEK_ENTRIES, LATIN_ENTRIES};
pub use transliteration::to_greek_letter;
