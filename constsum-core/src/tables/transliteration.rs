//! Latin to Greek transliteration table

/// Lowercase Latin letter -> lowercase Greek letter, by phonetic analogy
///
/// `j` and `v` have no counterpart and are left untouched.
#[rustfmt::skip]
pub const LATIN_TO_GREEK: [(char, char); 24] = [
    ('a', 'α'), ('b', 'β'), ('g', 'γ'), ('d', 'δ'), ('e', 'ε'),
    ('z', 'ζ'), ('h', 'η'), ('q', 'θ'), ('i', 'ι'), ('k', 'κ'),
    ('l', 'λ'), ('m', 'μ'), ('n', 'ν'), ('x', 'ξ'), ('o', 'ο'),
    ('p', 'π'), ('r', 'ρ'), ('s', 'σ'), ('t', 'τ'), ('u', 'υ'),
    ('f', 'φ'), ('c', 'χ'), ('y', 'ψ'), ('w', 'ω'),
];

/// ASCII index over [`LATIN_TO_GREEK`]
const GREEK_BY_ASCII: [Option<char>; 128] = {
    let mut table = [None; 128];
    let mut i = 0;
    while i < LATIN_TO_GREEK.len() {
        let (latin, greek) = LATIN_TO_GREEK[i];
        table[latin as usize] = Some(greek);
        i += 1;
    }
    table
};

/// Greek letter for the lowercase Latin letter `ch`
///
/// Callers lower the character themselves; uppercase input is not mapped.
#[inline]
pub fn to_greek_letter(ch: char) -> Option<char> {
    if ch.is_ascii() {
        GREEK_BY_ASCII[ch as usize]
    } else {
        None
    }
}
