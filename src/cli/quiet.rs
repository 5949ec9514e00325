//! Process-wide quiet mode for CLI output.

use std::sync::atomic::{AtomicBool, Ordering};

static QUIET: AtomicBool = AtomicBool::new(false);

pub fn set(quiet: bool) {
    QUIET.store(quiet, Ordering::SeqCst);
}

pub fn enabled() -> bool {
    QUIET.load(Ordering::Relaxed)
}

/// Check if stdin is a tty (interactive)
pub fn is_interactive() -> bool {
    unsafe { libc::isatty(0) == 1 }
}

/// Skip prompts when quiet or when nobody is at the keyboard.
pub fn skip_prompt() -> bool {
    enabled() || !is_interactive()
}
