//! Shared terminal utilities.
//!
//! Box drawing, entropy display, raw mode management, and ANSI helpers.

mod output;
mod raw_mode;

pub use output::*;
pub use raw_mode::*;
