//! CLI context - bundles settings, flags, and clipboard state.

use std::path::Path;

use tracing::info;

use super::{CliFlags, prompts, quiet};
use crate::clipboard::{Clipboard, SystemClipboard};
use crate::error::Result;
use crate::pass::{self, output};
use crate::rng;
use crate::settings::Settings;
use crate::tui::print_help;

const DEFAULT_OUTPUT_FILE: &str = "passwords.txt";

/// Application context for CLI mode.
pub struct Context {
    pub settings: Settings,
    pub clipboard: Option<Box<dyn Clipboard>>,
    pub flags: CliFlags,
}

impl Context {
    /// Create a new context by parsing command-line arguments.
    pub fn new(args: &[String]) -> Result<Self> {
        let flags = super::parse(args)?;
        quiet::set(flags.quiet);

        let settings = if flags.saved {
            Settings::load_from_file().unwrap_or_else(|e| {
                prompts::settings_failed("load", &e);
                Settings::default()
            })
        } else {
            Settings::default()
        };

        Ok(Self {
            settings,
            clipboard: None,
            flags,
        })
    }

    pub fn run(&mut self) -> Result<()> {
        if self.handle_info_flags() {
            return Ok(());
        }
        if !self.apply_flags() {
            return Ok(());
        }
        self.save_if_requested();
        self.generate_output()
    }

    /// Returns true when an info flag was handled and nothing else should run.
    fn handle_info_flags(&self) -> bool {
        if self.flags.help {
            print_help();
            return true;
        }
        if self.flags.version {
            println!("passgen {}", env!("CARGO_PKG_VERSION"));
            return true;
        }
        false
    }

    /// Apply CLI flags to settings. Returns false if the user aborted.
    fn apply_flags(&mut self) -> bool {
        if let Some(ref raw) = self.flags.length {
            let length = pass::parse_length(raw);
            match raw.trim().replace(',', "").parse::<usize>() {
                Ok(n) if n == length => {}
                Ok(n) if n > pass::MAX_LENGTH => prompts::length_capped(raw, length),
                _ => prompts::length_fallback(raw, length),
            }
            self.settings.pass_length = length;
        }
        if let Some(num) = self.flags.number {
            self.settings.number_of_passwords = num;
        }

        // Each flag only clears its own category; the rest keep their saved state.
        if self.flags.no_letters {
            self.settings.use_letters = false;
        }
        if self.flags.no_digits {
            self.settings.use_digits = false;
        }
        if self.flags.no_symbols {
            self.settings.use_symbols = false;
        }
        if let Some(ref chars) = self.flags.symbols {
            self.settings.symbol_chars = chars.bytes().filter(u8::is_ascii_graphic).collect();
        }

        if let Some(ref path) = self.flags.output {
            self.settings.output_file_path = output_path(path);
        }

        if self.flags.clipboard {
            match SystemClipboard::new() {
                Ok(c) => self.clipboard = Some(Box::new(c)),
                Err(e) => {
                    info!(error = %e, "clipboard unavailable");
                    if !prompts::clipboard_fallback_prompt() {
                        return false;
                    }
                }
            }
        }
        true
    }

    fn save_if_requested(&self) {
        if self.flags.save
            && let Err(e) = self.settings.save_to_file()
        {
            prompts::settings_failed("save", &e);
        }
    }

    /// Generate passwords and handle output.
    pub fn generate_output(&mut self) -> Result<()> {
        let count = self.settings.number_of_passwords.max(1);
        let mut rng = rng::from_seed(self.flags.seed);
        let passwords = pass::generate_batch(&mut rng, &self.settings, count)?;
        info!(count, length = self.settings.pass_length, "passwords generated");

        if let Some(clipboard) = self.clipboard.as_mut() {
            clipboard.copy(&output::joined(&passwords))?;
            prompts::clipboard_copied();
        } else if !self.settings.output_file_path.is_empty() {
            output::append_to_file(&self.settings.output_file_path, &passwords)?;
            let full_path = std::fs::canonicalize(&self.settings.output_file_path)
                .map(|p| p.display().to_string())
                .unwrap_or_else(|_| self.settings.output_file_path.clone());
            prompts::passwords_written(count, &full_path);
        } else {
            let stdout = std::io::stdout();
            output::write_batch(&mut stdout.lock(), &passwords)?;
        }
        Ok(())
    }
}

/// Directories (".", trailing '/') get the default file name.
fn output_path(path: &str) -> String {
    if path == "." || path.ends_with('/') || Path::new(path).is_dir() {
        Path::new(path)
            .join(DEFAULT_OUTPUT_FILE)
            .display()
            .to_string()
    } else {
        path.to_string()
    }
}
