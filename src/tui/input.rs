use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, read};

use crate::terminal::{RawModeGuard, flush};

/// Outcome of feeding one key to a [`LineEditor`].
#[derive(Debug, PartialEq, Eq)]
enum Step {
    Editing,
    Done,
    Cancelled,
}

/// Single-line editor state, independent of the terminal.
struct LineEditor {
    buf: Vec<char>,
    cursor: usize,
    accept: fn(char) -> bool,
}

impl LineEditor {
    fn new(initial: &str, accept: fn(char) -> bool) -> Self {
        let buf: Vec<char> = initial.chars().collect();
        let cursor = buf.len();
        Self {
            buf,
            cursor,
            accept,
        }
    }

    fn text(&self) -> String {
        self.buf.iter().collect()
    }

    fn apply(&mut self, key: KeyEvent) -> Step {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Char('c') | KeyCode::Char('q') if ctrl => return Step::Cancelled,
            KeyCode::Char('u') if ctrl => {
                self.buf.clear();
                self.cursor = 0;
            }
            KeyCode::Esc => return Step::Cancelled,
            KeyCode::Enter => return Step::Done,
            KeyCode::Backspace => {
                if self.cursor > 0 {
                    self.cursor -= 1;
                    self.buf.remove(self.cursor);
                }
            }
            KeyCode::Delete => {
                if self.cursor < self.buf.len() {
                    self.buf.remove(self.cursor);
                }
            }
            KeyCode::Left => self.cursor = self.cursor.saturating_sub(1),
            KeyCode::Right => self.cursor = (self.cursor + 1).min(self.buf.len()),
            KeyCode::Home => self.cursor = 0,
            KeyCode::End => self.cursor = self.buf.len(),
            KeyCode::Char(c) if !ctrl && (self.accept)(c) => {
                self.buf.insert(self.cursor, c);
                self.cursor += 1;
            }
            _ => {}
        }
        Step::Editing
    }
}

fn edit(prompt: &str, initial: &str, accept: fn(char) -> bool) -> Option<String> {
    let mut editor = LineEditor::new(initial, accept);

    let _guard = match RawModeGuard::new() {
        Ok(g) => g,
        Err(_) => return Some(editor.text()),
    };

    print!("\r{}: {}", prompt, editor.text());
    flush();
    let mut last_len = editor.buf.len();

    let step = loop {
        match read() {
            Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => {
                let step = editor.apply(key);
                if step != Step::Editing {
                    break step;
                }

                print!("\r{}: {}", prompt, " ".repeat(last_len + 1));
                print!("\r{}: {}", prompt, editor.text());
                print!("\x1b[{}G", prompt.len() + 3 + editor.cursor);
                flush();
                last_len = editor.buf.len();
            }
            Ok(_) => {}
            Err(_) => break Step::Cancelled,
        }
    };

    drop(_guard);
    print!("\r\n");
    flush();

    match step {
        Step::Done => Some(editor.text()),
        _ => None,
    }
}

/// Read a number. Empty input yields `Some(0)`; Esc yields `None`.
pub fn get_numeric_input(prompt: &str, initial_value: usize) -> Option<usize> {
    let initial = if initial_value > 0 {
        initial_value.to_string()
    } else {
        String::new()
    };
    let digits = edit(prompt, &initial, |c| c.is_ascii_digit())?;
    if digits.is_empty() {
        Some(0)
    } else {
        // Overflow reads as 0 so callers apply their fallback.
        Some(digits.parse().unwrap_or(0))
    }
}

/// Read printable ASCII text. Esc yields `None`.
pub fn get_editable_input(prompt: &str, initial_value: &str) -> Option<String> {
    edit(prompt, initial_value, |c| c.is_ascii_graphic())
}
