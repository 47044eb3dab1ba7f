//! Text normalization ahead of table lookup
//!
//! The pipeline is accent folding, then optional ASCII lowercasing, then
//! optional Latin to Greek transliteration. Every step works on `char`s, so
//! multi-byte characters are never split.

use crate::tables::{fold_accent, to_greek_letter};

/// Replace known accented letters with their ASCII base letter
pub fn fold_accents(text: &str) -> String {
    text.chars()
        .map(|ch| fold_accent(ch).unwrap_or(ch))
        .collect()
}

/// Lowercase ASCII letters; everything else is kept as-is
pub fn to_lower(text: &str) -> String {
    text.chars().map(|ch| ch.to_ascii_lowercase()).collect()
}

/// Transliterate Latin letters to Greek letters
///
/// Each character is lowered only for the lookup. Characters without a Greek
/// counterpart are emitted unchanged, in their original case.
pub fn to_greek(text: &str) -> String {
    text.chars()
        .map(|ch| to_greek_letter(ch.to_ascii_lowercase()).unwrap_or(ch))
        .collect()
}

/// Normalization options for one evaluation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Normalizer {
    /// Lowercase before transliteration and lookup
    pub lowercase: bool,
    /// Transliterate to Greek letters
    pub greek: bool,
}

impl Normalizer {
    /// Create a normalizer
    pub fn new(lowercase: bool, greek: bool) -> Self {
        Self { lowercase, greek }
    }

    /// Run the full pipeline
    pub fn normalize(&self, text: &str) -> String {
        let mut normalized = fold_accents(text);
        if self.lowercase {
            normalized = to_lower(&normalized);
        }
        if self.greek {
            normalized = to_greek(&normalized);
        }
        normalized
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fold_accents() {
        assert_eq!(fold_accents("José"), "Jose");
        assert_eq!(fold_accents("Ñandú"), "Nandu");
        assert_eq!(fold_accents("François Müller"), "Francois Muller");
    }

    #[test]
    fn test_fold_accents_passthrough() {
        assert_eq!(fold_accents("R2-D2, 42!"), "R2-D2, 42!");
        assert_eq!(fold_accents("Øresund"), "Øresund");
        assert_eq!(fold_accents(""), "");
    }

    #[test]
    fn test_fold_accents_idempotent() {
        let once = fold_accents("Ãçèñtö");
        assert_eq!(fold_accents(&once), once);
    }

    #[test]
    fn test_to_lower_ascii_only() {
        assert_eq!(to_lower("EmMa"), "emma");
        assert_eq!(to_lower("ΑΒ"), "ΑΒ");
        assert_eq!(to_lower("X-1"), "x-1");
    }

    #[test]
    fn test_to_greek_per_character() {
        assert_eq!(to_greek("pi"), "πι");
        assert_eq!(to_greek("alpha"), "αλπηα");
    }

    #[test]
    fn test_to_greek_lowers_locally() {
        assert_eq!(to_greek("Pi"), "πι");
    }

    #[test]
    fn test_to_greek_keeps_original_case_when_unmapped() {
        assert_eq!(to_greek("Jv"), "Jv");
        assert_eq!(to_greek("J9 "), "J9 ");
    }

    #[test]
    fn test_pipeline_order() {
        let normalizer = Normalizer::new(true, true);
        assert_eq!(normalizer.normalize("Éric"), "εριχ");

        let latin_only = Normalizer::new(true, false);
        assert_eq!(latin_only.normalize("Éric"), "eric");

        let untouched = Normalizer::default();
        assert_eq!(untouched.normalize("Éric"), "Eric");
    }
}
