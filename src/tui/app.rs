//! Interactive screen state and key handling.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use rand::rngs::StdRng;
use tracing::{debug, info};

use crate::clipboard::Clipboard;
use crate::pass::{self, LENGTH_PRESETS, Password, charset};
use crate::settings::Settings;
use crate::terminal::{calculate_entropy, entropy_strength};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    ToggleLetters,
    ToggleDigits,
    ToggleSymbols,
    PrevPreset,
    NextPreset,
    CustomLength,
    EditSymbols,
    Generate,
    ToggleVisibility,
    Copy,
    Save,
    Help,
    Quit,
}

impl Action {
    pub fn from_key(key: KeyEvent) -> Option<Action> {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return matches!(key.code, KeyCode::Char('c') | KeyCode::Char('q'))
                .then_some(Action::Quit);
        }
        let action = match key.code {
            KeyCode::Char('1') => Action::ToggleLetters,
            KeyCode::Char('2') => Action::ToggleDigits,
            KeyCode::Char('3') => Action::ToggleSymbols,
            KeyCode::Left | KeyCode::Char('-') => Action::PrevPreset,
            KeyCode::Right | KeyCode::Char('+') => Action::NextPreset,
            KeyCode::Char('l') => Action::CustomLength,
            KeyCode::Char('e') => Action::EditSymbols,
            KeyCode::Enter | KeyCode::Char('g') => Action::Generate,
            KeyCode::Char('v') => Action::ToggleVisibility,
            KeyCode::Char('c') => Action::Copy,
            KeyCode::Char('s') => Action::Save,
            KeyCode::Char('h') | KeyCode::Char('?') => Action::Help,
            KeyCode::Char('q') | KeyCode::Esc => Action::Quit,
            _ => return None,
        };
        Some(action)
    }
}

/// One-line message under the password field.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Notice {
    #[default]
    None,
    Info(String),
    Error(String),
}

pub struct App {
    pub settings: Settings,
    pub password: Option<Password>,
    /// Whether the password is shown in clear; masked by default.
    pub visible: bool,
    pub notice: Notice,
    pub source: &'static str,
    rng: StdRng,
    clipboard: Option<Box<dyn Clipboard>>,
}

impl App {
    pub fn new(
        settings: Settings,
        rng: StdRng,
        source: &'static str,
        clipboard: Option<Box<dyn Clipboard>>,
    ) -> Self {
        Self {
            settings,
            password: None,
            visible: false,
            notice: Notice::None,
            source,
            rng,
            clipboard,
        }
    }

    /// Apply an action that needs no further input. Returns false on quit.
    pub fn apply(&mut self, action: Action) -> bool {
        self.notice = Notice::None;
        match action {
            Action::ToggleLetters => self.settings.use_letters = !self.settings.use_letters,
            Action::ToggleDigits => self.settings.use_digits = !self.settings.use_digits,
            Action::ToggleSymbols => self.settings.use_symbols = !self.settings.use_symbols,
            Action::PrevPreset => self.settings.pass_length = prev_preset(self.settings.pass_length),
            Action::NextPreset => self.settings.pass_length = next_preset(self.settings.pass_length),
            Action::Generate => self.generate(),
            Action::ToggleVisibility => self.visible = !self.visible,
            Action::Copy => self.copy(),
            Action::Save => self.save(),
            Action::Quit => return false,
            // Handled by the screen loop, which owns the terminal.
            Action::CustomLength | Action::EditSymbols | Action::Help => {}
        }
        true
    }

    pub fn set_length(&mut self, length: usize) {
        self.settings.pass_length = pass::normalize_length(Some(length));
    }

    pub fn set_symbols(&mut self, symbols: &str) {
        self.settings.symbol_chars = symbols.bytes().filter(u8::is_ascii_graphic).collect();
    }

    fn generate(&mut self) {
        let categories = self.settings.categories();
        match pass::generate_with(
            &mut self.rng,
            self.settings.pass_length,
            &categories,
            &self.settings.symbol_chars,
        ) {
            Ok(password) => self.password = Some(password),
            Err(e) => {
                debug!(error = %e, "generation refused");
                self.password = None;
                self.notice = Notice::Error(e.to_string());
            }
        }
    }

    fn copy(&mut self) {
        let Some(password) = self.password.as_ref() else {
            self.notice = Notice::Info("Nothing to copy!".into());
            return;
        };
        let Some(clipboard) = self.clipboard.as_mut() else {
            self.notice = Notice::Error("Clipboard unavailable".into());
            return;
        };
        self.notice = match clipboard.copy(password) {
            Ok(()) => Notice::Info("Copied to clipboard!".into()),
            Err(e) => Notice::Error(e.to_string()),
        };
    }

    fn save(&mut self) {
        self.notice = match self.settings.save_to_file() {
            Ok(()) => {
                info!("settings saved from interactive screen");
                Notice::Info("Settings saved".into())
            }
            Err(e) => Notice::Error(format!("Error saving settings: {e}")),
        };
    }

    /// Text for the password field: masked unless visible.
    pub fn display_password(&self) -> String {
        match &self.password {
            None => String::new(),
            Some(p) if self.visible => p.as_str().to_owned(),
            Some(p) => "\u{2022}".repeat(p.len()),
        }
    }

    /// Entropy of the current settings, in bits, with its strength label.
    pub fn entropy(&self) -> (f64, &'static str) {
        let size = charset::size(&self.settings.categories(), &self.settings.symbol_chars);
        let bits = calculate_entropy(self.settings.pass_length, size);
        (bits, entropy_strength(bits))
    }
}

fn next_preset(current: usize) -> usize {
    LENGTH_PRESETS
        .iter()
        .copied()
        .find(|&p| p > current)
        .unwrap_or(LENGTH_PRESETS[0])
}

fn prev_preset(current: usize) -> usize {
    LENGTH_PRESETS
        .iter()
        .rev()
        .copied()
        .find(|&p| p < current)
        .unwrap_or(LENGTH_PRESETS[LENGTH_PRESETS.len() - 1])
}
