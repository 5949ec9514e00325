//! Centralized warning and prompt messages for CLI output.

use std::io::Write;

use super::quiet;
use crate::terminal::{GREEN, RED, RESET};

const YELLOW: &str = "\x1b[33m";

/// Print a warning message to stderr (yellow) - suppressed in quiet mode
pub fn warn(msg: &str) {
    if !quiet::enabled() {
        eprintln!("{YELLOW}{msg}{RESET}");
    }
}

/// Print an error message to stderr (red) - NOT suppressed (errors are always shown)
pub fn error(msg: &str) {
    eprintln!("{RED}{msg}{RESET}");
}

pub fn length_fallback(raw: &str, length: usize) {
    warn(&format!("Invalid length '{raw}', using {length}"));
}

pub fn length_capped(raw: &str, length: usize) {
    warn(&format!("Length '{raw}' is too long, using {length}"));
}

pub fn settings_failed(action: &str, err: &std::io::Error) {
    warn(&format!("Failed to {action} settings: {err}"));
}

/// Print clipboard copied confirmation - suppressed in quiet mode
pub fn clipboard_copied() {
    if !quiet::enabled() {
        println!("{GREEN}Copied to clipboard!{RESET}");
    }
}

/// Prompt user when clipboard is unavailable. Returns true to fallback to terminal, false to abort.
/// In quiet/non-interactive mode, silently falls back to terminal.
pub fn clipboard_fallback_prompt() -> bool {
    if quiet::skip_prompt() {
        return true;
    }

    eprint!("Clipboard unavailable. Print to terminal instead? [Y/n]: ");
    let _ = std::io::stderr().flush();

    let mut input = String::new();
    if std::io::stdin().read_line(&mut input).is_ok() {
        let input = input.trim().to_lowercase();
        if input.is_empty() || input == "y" || input == "yes" {
            eprintln!();
            return true;
        }
    } else {
        return true;
    }

    eprintln!("\nAborted.");
    false
}

/// Print password output summary - suppressed in quiet mode
pub fn passwords_written(count: usize, path: &str) {
    if !quiet::enabled() {
        println!("{count} password(s) \u{2192} {path}");
    }
}
