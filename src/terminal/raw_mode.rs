//! Raw mode RAII guard.

use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use std::io;

/// Raw mode for as long as the guard lives, restored even on early return.
pub struct RawModeGuard(());

impl RawModeGuard {
    pub fn new() -> io::Result<Self> {
        enable_raw_mode()?;
        Ok(Self(()))
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
    }
}
