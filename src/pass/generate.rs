//! Password generation.

use rand::Rng;
use tracing::debug;
use zeroize::Zeroizing;

use super::charset::{self, Categories, DEFAULT_SYMBOLS};
use crate::error::Result;
use crate::settings::Settings;

/// A generated password. The buffer is wiped when dropped.
pub type Password = Zeroizing<String>;

/// Generate one password from the default symbol set using the thread RNG.
pub fn generate(length: usize, letters: bool, digits: bool, symbols: bool) -> Result<Password> {
    let categories = Categories {
        letters,
        digits,
        symbols,
    };
    generate_with(&mut rand::rng(), length, &categories, DEFAULT_SYMBOLS)
}

/// Generate one password with an injected RNG.
pub fn generate_with<R: Rng + ?Sized>(
    rng: &mut R,
    length: usize,
    categories: &Categories,
    symbols: &[u8],
) -> Result<Password> {
    let chars = charset::build(categories, symbols)?;
    let length = super::normalize_length(Some(length));
    debug!(length, alphabet = chars.len(), "generating password");
    Ok(from_charset(rng, &chars, length))
}

/// Generate `count` passwords that share one alphabet.
pub fn generate_batch<R: Rng + ?Sized>(
    rng: &mut R,
    settings: &Settings,
    count: usize,
) -> Result<Vec<Password>> {
    let chars = charset::build(&settings.categories(), &settings.symbol_chars)?;
    let length = super::normalize_length(Some(settings.pass_length));
    debug!(length, count, alphabet = chars.len(), "generating batch");
    Ok((0..count)
        .map(|_| from_charset(rng, &chars, length))
        .collect())
}

/// Sample `length` characters uniformly, with replacement.
/// `chars` must be a non-empty ASCII alphabet.
#[inline]
fn from_charset<R: Rng + ?Sized>(rng: &mut R, chars: &[u8], length: usize) -> Password {
    let mut pass = Zeroizing::new(String::with_capacity(length));
    for _ in 0..length {
        pass.push(chars[rng.random_range(0..chars.len())] as char);
    }
    pass
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;
    use crate::error::Error;
    use crate::pass::charset::{DIGITS, LETTERS};

    fn only(letters: bool, digits: bool, symbols: bool) -> Categories {
        Categories {
            letters,
            digits,
            symbols,
        }
    }

    #[test]
    fn letters_only() {
        let mut rng = StdRng::seed_from_u64(1);
        let pass = generate_with(&mut rng, 10, &only(true, false, false), DEFAULT_SYMBOLS).unwrap();
        assert_eq!(pass.len(), 10);
        assert!(pass.chars().all(|c| c.is_ascii_alphabetic()));
    }

    #[test]
    fn digits_only() {
        let mut rng = StdRng::seed_from_u64(2);
        let pass = generate_with(&mut rng, 6, &only(false, true, false), DEFAULT_SYMBOLS).unwrap();
        assert_eq!(pass.len(), 6);
        assert!(pass.chars().all(|c| "0123456789".contains(c)));
    }

    #[test]
    fn symbols_only() {
        let mut rng = StdRng::seed_from_u64(3);
        let pass = generate_with(&mut rng, 4, &only(false, false, true), DEFAULT_SYMBOLS).unwrap();
        assert_eq!(pass.len(), 4);
        assert!(pass.chars().all(|c| "+-=_".contains(c)));
    }

    #[test]
    fn all_categories_length_twenty() {
        let union = [LETTERS, DIGITS, DEFAULT_SYMBOLS].concat();
        let pass = generate(20, true, true, true).unwrap();
        assert_eq!(pass.len(), 20);
        assert!(pass.bytes().all(|b| union.contains(&b)));
    }

    #[test]
    fn every_length_and_category_combination() {
        let mut rng = StdRng::seed_from_u64(4);
        for mask in 1u8..8 {
            let cats = only(mask & 1 != 0, mask & 2 != 0, mask & 4 != 0);
            let alphabet = charset::build(&cats, DEFAULT_SYMBOLS).unwrap();
            for length in [1, 6, 8, 10, 12, 20, 64] {
                let pass = generate_with(&mut rng, length, &cats, DEFAULT_SYMBOLS).unwrap();
                assert_eq!(pass.len(), length);
                assert!(pass.bytes().all(|b| alphabet.contains(&b)));
            }
        }
    }

    #[test]
    fn no_category_yields_no_password() {
        let err = generate(12, false, false, false).unwrap_err();
        assert!(matches!(err, Error::NoCategorySelected));
    }

    #[test]
    fn zero_length_falls_back_to_default() {
        let mut rng = StdRng::seed_from_u64(5);
        let pass = generate_with(&mut rng, 0, &Categories::ALL, DEFAULT_SYMBOLS).unwrap();
        assert_eq!(pass.len(), crate::pass::DEFAULT_LENGTH);
    }

    #[test]
    fn huge_length_is_capped_not_allocated() {
        let pass = generate(usize::MAX, true, true, true).unwrap();
        assert_eq!(pass.len(), crate::pass::MAX_LENGTH);

        let mut rng = StdRng::seed_from_u64(9);
        let settings = Settings {
            pass_length: 100_000_000_000,
            ..Settings::default()
        };
        let batch = generate_batch(&mut rng, &settings, 2).unwrap();
        assert!(batch.iter().all(|p| p.len() == crate::pass::MAX_LENGTH));
    }

    #[test]
    fn same_seed_same_password() {
        let a = generate_with(&mut StdRng::seed_from_u64(42), 16, &Categories::ALL, DEFAULT_SYMBOLS)
            .unwrap();
        let b = generate_with(&mut StdRng::seed_from_u64(42), 16, &Categories::ALL, DEFAULT_SYMBOLS)
            .unwrap();
        assert_eq!(*a, *b);
    }

    #[test]
    fn custom_symbol_set() {
        let mut rng = StdRng::seed_from_u64(6);
        let pass = generate_with(&mut rng, 32, &only(false, false, true), b"!@#").unwrap();
        assert!(pass.chars().all(|c| "!@#".contains(c)));
    }

    #[test]
    fn characters_are_roughly_uniform() {
        let mut rng = StdRng::seed_from_u64(7);
        let alphabet = charset::build(&Categories::ALL, DEFAULT_SYMBOLS).unwrap();
        let mut counts: HashMap<u8, usize> = HashMap::new();

        let samples = 2000;
        let length = 66;
        for _ in 0..samples {
            let pass = generate_with(&mut rng, length, &Categories::ALL, DEFAULT_SYMBOLS).unwrap();
            for b in pass.bytes() {
                *counts.entry(b).or_default() += 1;
            }
        }

        // 132,000 draws over 66 characters: 2,000 expected each.
        let expected = (samples * length / alphabet.len()) as f64;
        assert_eq!(counts.len(), alphabet.len());
        for c in &alphabet {
            let n = counts[c] as f64;
            assert!(
                (n - expected).abs() < expected * 0.15,
                "{} appeared {} times, expected ~{}",
                *c as char,
                n,
                expected
            );
        }
    }

    #[test]
    fn batch_shares_settings() {
        let mut rng = StdRng::seed_from_u64(8);
        let settings = Settings {
            pass_length: 8,
            use_letters: false,
            use_symbols: false,
            ..Settings::default()
        };
        let batch = generate_batch(&mut rng, &settings, 5).unwrap();
        assert_eq!(batch.len(), 5);
        assert!(batch.iter().all(|p| p.len() == 8 && p.chars().all(|c| c.is_ascii_digit())));
    }

    #[test]
    fn batch_with_no_category_fails() {
        let settings = Settings {
            use_letters: false,
            use_digits: false,
            use_symbols: false,
            ..Settings::default()
        };
        let mut rng = StdRng::seed_from_u64(9);
        assert!(generate_batch(&mut rng, &settings, 3).is_err());
    }
}
