//! End-to-end checksum behaviour through the public API

#![allow(clippy::approx_constant)]

use constsum_core::{
    compute_checksum, compute_checksum_with, format::format_value, normalize::to_greek,
    Alphabet, ChecksumConfig,
};

fn base_render() -> String {
    format!("1.{} ", "0".repeat(64))
}

#[test]
fn test_empty_name_renders_base_in_every_mode() {
    for use_greek in [false, true] {
        for lowercase in [false, true] {
            assert_eq!(compute_checksum("", use_greek, lowercase), base_render());
        }
    }
}

#[test]
fn test_non_letters_keep_the_base() {
    assert_eq!(compute_checksum("123 !?-.,", false, false), base_render());
    assert_eq!(compute_checksum("123 !?-.,", true, true), base_render());
}

#[test]
fn test_speed_of_light() {
    let zeros = "0".repeat(64);
    assert_eq!(
        compute_checksum("c", false, false),
        format!("299800000.{zeros} m*s^-1")
    );

    let padded = ChecksumConfig::builder().padded(true).build();
    assert_eq!(
        compute_checksum_with("c", &padded).render(),
        format!("299800000.{zeros} m * s^-1")
    );
}

#[test]
fn test_table_keys_are_case_sensitive() {
    let charge = format!("{} C", format_value(1.602e-19));

    assert_eq!(compute_checksum("e", false, true), charge);
    assert_eq!(compute_checksum("e", false, false), charge);
    // Lowercasing turns Euler's number into the elementary charge
    assert_eq!(compute_checksum("E", false, true), charge);
    assert_eq!(
        compute_checksum("E", false, false),
        format!("{} ", format_value(2.718281828459045))
    );
}

#[test]
fn test_transliteration_is_per_character() {
    assert_eq!(to_greek("pi"), "πι");

    let expected = format!("{} radA", format_value(3.1415926535 * 0.01));
    assert_eq!(compute_checksum("pi", true, false), expected);

    // The Greek table entry for π alone
    let pi_only = format!("{} rad", format_value(3.1415926535));
    assert_eq!(compute_checksum("p", true, false), pi_only);
    assert_ne!(expected, pi_only);
}

#[test]
fn test_dimensionless_letters_add_no_units() {
    let config = ChecksumConfig::default();
    for name in ["E", "N", "O", "n"] {
        let checksum = compute_checksum_with(name, &config);
        assert_eq!(checksum.units, "", "{name}");
        assert_eq!(checksum.matched(), 1, "{name}");
    }

    // `c` becomes χ in Greek mode
    let greek = ChecksumConfig::builder().alphabet(Alphabet::Greek).build();
    let checksum = compute_checksum_with("c", &greek);
    assert_eq!(checksum.value, 1.9e-5);
    assert_eq!(checksum.units, "");
}

#[test]
fn test_order_changes_units_not_value() {
    let config = ChecksumConfig::default();
    let ab = compute_checksum_with("ab", &config);
    let ba = compute_checksum_with("ba", &config);

    assert_eq!(ab.value, ba.value);
    assert_eq!(ab.units, "m*s^-2m");
    assert_eq!(ba.units, "mm*s^-2");
}

#[test]
fn test_accented_names_match_their_folded_form() {
    assert_eq!(
        compute_checksum("José", false, false),
        compute_checksum("Jose", false, false)
    );
    assert_eq!(
        compute_checksum("ÉLÈNE", true, true),
        compute_checksum("elene", true, false)
    );
}

#[test]
fn test_full_name_latin() {
    let checksum = compute_checksum_with("José", &ChecksumConfig::default());
    assert_eq!(checksum.letters.as_slice(), &['J', 'e']);
    assert_eq!(checksum.units, "kg*m^2*s^-2C");
    assert_eq!(checksum.value, 1.602e-19);
}

#[test]
fn test_greek_mode_skips_letters_without_counterpart() {
    let checksum = compute_checksum_with("jv", &ChecksumConfig::builder().greek(true).build());
    assert_eq!(checksum.matched(), 0);
    assert_eq!(checksum.render(), base_render());
}

#[test]
fn test_tables_are_shared_across_threads() {
    let handles: Vec<_> = (0..4)
        .map(|_| std::thread::spawn(|| compute_checksum("Ada Lovelace", true, true)))
        .collect();
    let expected = compute_checksum("Ada Lovelace", true, true);
    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}
