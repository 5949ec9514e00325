//! Password generation settings.

mod file;

use crate::pass::charset::DEFAULT_SYMBOLS;
use crate::pass::{Categories, DEFAULT_LENGTH};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub pass_length: usize,
    pub number_of_passwords: usize,
    pub use_letters: bool,
    pub use_digits: bool,
    pub use_symbols: bool,
    pub symbol_chars: Vec<u8>,
    pub output_file_path: String,
}

impl Settings {
    pub fn load_from_file() -> Result<Self, std::io::Error> {
        let mut settings = Settings::default();
        file::load(&mut settings)?;
        Ok(settings)
    }

    pub fn save_to_file(&self) -> Result<(), std::io::Error> {
        file::save(self)
    }

    pub fn categories(&self) -> Categories {
        Categories {
            letters: self.use_letters,
            digits: self.use_digits,
            symbols: self.use_symbols,
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            pass_length: DEFAULT_LENGTH,
            number_of_passwords: 1,
            use_letters: true,
            use_digits: true,
            use_symbols: true,
            symbol_chars: DEFAULT_SYMBOLS.to_vec(),
            output_file_path: String::new(),
        }
    }
}
