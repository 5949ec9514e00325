//! Password generation and output.

pub mod charset;
mod generate;
pub mod output;

pub use charset::Categories;
pub use generate::{Password, generate, generate_batch, generate_with};

/// Length used when none, zero, or garbage is supplied.
pub const DEFAULT_LENGTH: usize = 12;

/// Lengths offered by the interactive selector.
pub const LENGTH_PRESETS: [usize; 5] = [6, 8, 10, 12, 20];

/// Longest password that will be generated; longer requests are capped.
pub const MAX_LENGTH: usize = 4096;

/// Coerce a missing or zero length to [`DEFAULT_LENGTH`] and cap it at
/// [`MAX_LENGTH`].
pub fn normalize_length(length: Option<usize>) -> usize {
    match length {
        Some(len) if len >= 1 => len.min(MAX_LENGTH),
        _ => DEFAULT_LENGTH,
    }
}

/// Parse a user-typed length, falling back to [`DEFAULT_LENGTH`].
pub fn parse_length(s: &str) -> usize {
    normalize_length(s.trim().replace(',', "").parse().ok())
}
