//! passgen - random passwords from letters, digits and symbols.
//!
//! [`pass::generate`] is the core: build an alphabet from the enabled
//! categories and sample it uniformly. Everything else is the terminal
//! front-end around it.

pub mod cli;
pub mod clipboard;
pub mod error;
pub mod exits;
pub mod logging;
pub mod pass;
pub mod rng;
pub mod settings;
pub mod terminal;
pub mod tui;

pub use error::{Error, Result};
pub use pass::{Categories, Password, generate};
pub use settings::Settings;
