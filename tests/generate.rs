//! Library-level checks of the generation contract.

use std::collections::HashSet;

use passgen::pass::charset::{DEFAULT_SYMBOLS, DIGITS, LETTERS};
use passgen::{Error, generate};

#[test]
fn output_matches_enabled_alphabet() {
    let cases: [(bool, bool, bool, &[u8]); 3] = [
        (true, false, false, LETTERS),
        (false, true, false, DIGITS),
        (false, false, true, DEFAULT_SYMBOLS),
    ];
    for (letters, digits, symbols, alphabet) in cases {
        for length in [1, 4, 6, 10, 20] {
            let pass = generate(length, letters, digits, symbols).unwrap();
            assert_eq!(pass.len(), length);
            assert!(pass.bytes().all(|b| alphabet.contains(&b)));
        }
    }
}

#[test]
fn nothing_enabled_is_an_error() {
    assert!(matches!(
        generate(10, false, false, false),
        Err(Error::NoCategorySelected)
    ));
}

#[test]
fn no_character_is_systematically_excluded() {
    let mut seen = HashSet::new();
    for _ in 0..500 {
        seen.extend(generate(20, true, true, true).unwrap().bytes());
    }
    // 10,000 draws over 66 characters.
    assert_eq!(seen.len(), LETTERS.len() + DIGITS.len() + DEFAULT_SYMBOLS.len());
}
