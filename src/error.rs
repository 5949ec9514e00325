//! Error type shared by generation, settings and the CLI.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// Every character category is disabled, so the alphabet is empty.
    #[error("Select at least one character category")]
    NoCategorySelected,

    #[error("Invalid number: {0}")]
    InvalidNumber(String),

    #[error("Unknown argument: {0}")]
    UnknownArg(String),

    #[error("Cannot combine {0} with {1}")]
    ConflictingFlags(&'static str, &'static str),

    #[error("Clipboard error: {0}")]
    Clipboard(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Parse errors exit with 2, everything else with 1.
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::InvalidNumber(_) | Error::UnknownArg(_) | Error::ConflictingFlags(..) => 2,
            _ => 1,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_category_message_is_human_readable() {
        assert_eq!(
            Error::NoCategorySelected.to_string(),
            "Select at least one character category"
        );
    }

    #[test]
    fn parse_errors_use_usage_exit_code() {
        assert_eq!(Error::UnknownArg("--x".into()).exit_code(), 2);
        assert_eq!(Error::InvalidNumber("abc".into()).exit_code(), 2);
        assert_eq!(Error::ConflictingFlags("--board", "--output").exit_code(), 2);
        assert_eq!(Error::NoCategorySelected.exit_code(), 1);
    }
}
