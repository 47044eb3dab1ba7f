//! Accent folding table
//!
//! Maps accented Latin letters to their unaccented ASCII base letter.

use std::collections::HashMap;
use std::sync::OnceLock;

/// Accented letter -> ASCII base letter
#[rustfmt::skip]
pub static ACCENT_FOLDS: [(char, char); 48] = [
    ('á', 'a'), ('à', 'a'), ('ä', 'a'), ('ã', 'a'), ('â', 'a'),
    ('é', 'e'), ('è', 'e'), ('ë', 'e'), ('ê', 'e'),
    ('í', 'i'), ('ì', 'i'), ('ï', 'i'), ('î', 'i'),
    ('ó', 'o'), ('ò', 'o'), ('ö', 'o'), ('õ', 'o'), ('ô', 'o'),
    ('ú', 'u'), ('ù', 'u'), ('ü', 'u'), ('û', 'u'),
    ('ç', 'c'), ('ñ', 'n'),
    ('Á', 'A'), ('À', 'A'), ('Ä', 'A'), ('Ã', 'A'), ('Â', 'A'),
    ('É', 'E'), ('È', 'E'), ('Ë', 'E'), ('Ê', 'E'),
    ('Í', 'I'), ('Ì', 'I'), ('Ï', 'I'), ('Î', 'I'),
    ('Ó', 'O'), ('Ò', 'O'), ('Ö', 'O'), ('Õ', 'O'), ('Ô', 'O'),
    ('Ú', 'U'), ('Ù', 'U'), ('Ü', 'U'), ('Û', 'U'),
    ('Ç', 'C'), ('Ñ', 'N'),
];

static FOLD_MAP: OnceLock<HashMap<char, char>> = OnceLock::new();

/// Unaccented base letter for `ch`, if `ch` is a known accented letter
#[inline]
pub fn fold_accent(ch: char) -> Option<char> {
    // Every key is non-ASCII
    if ch.is_ascii() {
        return None;
    }
    FOLD_MAP
        .get_or_init(|| ACCENT_FOLDS.iter().copied().collect())
        .get(&ch)
        .copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lowercase_folds() {
        assert_eq!(fold_accent('á'), Some('a'));
        assert_eq!(fold_accent('ç'), Some('c'));
        assert_eq!(fold_accent('ñ'), Some('n'));
        assert_eq!(fold_accent('ü'), Some('u'));
    }

    #[test]
    fn test_uppercase_folds() {
        assert_eq!(fold_accent('É'), Some('E'));
        assert_eq!(fold_accent('Ô'), Some('O'));
        assert_eq!(fold_accent('Ñ'), Some('N'));
    }

    #[test]
    fn test_unmapped_characters() {
        assert_eq!(fold_accent('a'), None);
        assert_eq!(fold_accent('1'), None);
        assert_eq!(fold_accent('ø'), None);
        assert_eq!(fold_accent('α'), None);
    }

    #[test]
    fn test_table_targets_are_ascii() {
        for (accented, base) in ACCENT_FOLDS.iter() {
            assert!(!accented.is_ascii(), "{accented} should be non-ASCII");
            assert!(base.is_ascii_alphabetic(), "{base} should be ASCII");
        }
    }
}
