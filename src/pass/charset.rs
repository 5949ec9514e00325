//! Alphabet building for password generation.

use crate::error::{Error, Result};

pub const LETTERS: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const DIGITS: &[u8] = b"0123456789";
pub const DEFAULT_SYMBOLS: &[u8] = b"+-=_";

/// Which character categories take part in the alphabet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Categories {
    pub letters: bool,
    pub digits: bool,
    pub symbols: bool,
}

impl Categories {
    pub const ALL: Categories = Categories {
        letters: true,
        digits: true,
        symbols: true,
    };
}

impl Default for Categories {
    fn default() -> Self {
        Self::ALL
    }
}

/// Build the alphabet: letters, then digits, then symbols.
///
/// Fails with [`Error::NoCategorySelected`] when the result would be empty,
/// which includes symbols-only with an empty symbol set.
pub fn build(categories: &Categories, symbols: &[u8]) -> Result<Vec<u8>> {
    let mut chars = Vec::with_capacity(size(categories, symbols));

    if categories.letters {
        chars.extend_from_slice(LETTERS);
    }

    if categories.digits {
        chars.extend_from_slice(DIGITS);
    }

    if categories.symbols {
        chars.extend_from_slice(symbols);
    }

    if chars.is_empty() {
        return Err(Error::NoCategorySelected);
    }
    Ok(chars)
}

/// Alphabet size (for entropy calculation).
pub fn size(categories: &Categories, symbols: &[u8]) -> usize {
    let mut size = 0;
    if categories.letters {
        size += LETTERS.len();
    }
    if categories.digits {
        size += DIGITS.len();
    }
    if categories.symbols {
        size += symbols.len();
    }
    size
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn categories_concatenate_in_fixed_order() {
        let chars = build(&Categories::ALL, DEFAULT_SYMBOLS).unwrap();
        let expected = [LETTERS, DIGITS, DEFAULT_SYMBOLS].concat();
        assert_eq!(chars, expected);
        assert_eq!(chars.len(), 66);
    }

    #[test]
    fn single_category_alphabets() {
        let digits = Categories { letters: false, digits: true, symbols: false };
        assert_eq!(build(&digits, DEFAULT_SYMBOLS).unwrap(), DIGITS);

        let symbols = Categories { letters: false, digits: false, symbols: true };
        assert_eq!(build(&symbols, DEFAULT_SYMBOLS).unwrap(), b"+-=_");
    }

    #[test]
    fn empty_alphabet_is_a_configuration_error() {
        let none = Categories { letters: false, digits: false, symbols: false };
        assert!(matches!(
            build(&none, DEFAULT_SYMBOLS),
            Err(Error::NoCategorySelected)
        ));

        let empty_symbols = Categories { letters: false, digits: false, symbols: true };
        assert!(matches!(
            build(&empty_symbols, b""),
            Err(Error::NoCategorySelected)
        ));
    }

    #[test]
    fn size_matches_built_alphabet() {
        let c = Categories { letters: true, digits: false, symbols: true };
        assert_eq!(size(&c, b"!@"), build(&c, b"!@").unwrap().len());
        assert_eq!(size(&Categories { letters: false, digits: false, symbols: false }, b"+"), 0);
    }
}
