//! Interactive screen loop.

use crossterm::event::{Event, KeyEvent, KeyEventKind, read};
use tracing::{debug, info};

use super::app::{Action, App};
use super::{get_editable_input, get_numeric_input, print_help, print_screen};
use crate::clipboard::{Clipboard, SystemClipboard};
use crate::rng;
use crate::settings::Settings;
use crate::terminal::{RawModeGuard, clear, reset_terminal};

/// Block until a key is pressed. `None` if the terminal can't be read.
fn read_key() -> Option<KeyEvent> {
    let _guard = RawModeGuard::new().ok()?;
    loop {
        match read() {
            Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => return Some(key),
            Ok(_) => {}
            Err(_) => return None,
        }
    }
}

fn wait_for_key() {
    println!("Press any key to return");
    let _ = read_key();
}

pub fn gen_main_screen() {
    reset_terminal();

    let settings = Settings::load_from_file().unwrap_or_else(|e| {
        debug!(error = %e, "using default settings");
        Settings::default()
    });

    let clipboard = match SystemClipboard::new() {
        Ok(c) => Some(Box::new(c) as Box<dyn Clipboard>),
        Err(e) => {
            info!(error = %e, "clipboard unavailable");
            None
        }
    };

    let mut app = App::new(settings, rng::from_seed(None), rng::source_name(None), clipboard);

    loop {
        print_screen(&app);

        let Some(key) = read_key() else {
            break;
        };
        let Some(action) = Action::from_key(key) else {
            continue;
        };

        match action {
            Action::CustomLength => {
                if let Some(len) = get_numeric_input("Password length", app.settings.pass_length) {
                    app.set_length(len);
                }
            }
            Action::EditSymbols => {
                let current: String = app.settings.symbol_chars.iter().map(|&c| c as char).collect();
                if let Some(symbols) = get_editable_input("Symbols", &current) {
                    app.set_symbols(&symbols);
                }
            }
            Action::Help => {
                clear();
                print_help();
                wait_for_key();
            }
            _ => {
                if !app.apply(action) {
                    break;
                }
            }
        }
    }

    clear();
    reset_terminal();
}
