//! Terminal output utilities.
//!
//! ANSI helpers, a boxed panel renderer and entropy helpers.

use crossterm::terminal::disable_raw_mode;
use std::io::{self, Write};

pub const RESET: &str = "\x1b[0m";
pub const UNDERLINE: &str = "\x1b[4m";
pub const RED: &str = "\x1b[38;5;9m";
pub const GREEN: &str = "\x1b[38;5;10m";

/// Clear screen and move cursor to top-left.
pub fn clear() {
    print!("\x1b[2J\x1b[3J\x1b[H");
    flush();
}

pub fn flush() {
    let _ = io::stdout().flush();
}

/// Leave raw mode and show the cursor again.
pub fn reset_terminal() {
    let _ = disable_raw_mode();
    print!("\x1b[0m\x1b[?25h");
    flush();
}

pub fn format_number(num: usize) -> String {
    let s = num.to_string();
    let mut result = String::with_capacity(s.len() + s.len() / 3);
    for (i, c) in s.chars().enumerate() {
        if i > 0 && (s.len() - i).is_multiple_of(3) {
            result.push(',');
        }
        result.push(c);
    }
    result
}

/// Outer width of a [`Panel`], borders included.
pub const PANEL_WIDTH: usize = 60;
const INNER: usize = PANEL_WIDTH - 4;
const FLAG_COLUMN: usize = 24;

enum Row {
    Text(String),
    Center(String),
    Rule,
}

/// A titled box of rows, rendered in one piece.
pub struct Panel {
    title: String,
    rows: Vec<Row>,
}

impl Panel {
    pub fn new(title: &str) -> Self {
        Self {
            title: title.to_string(),
            rows: Vec::new(),
        }
    }

    pub fn line(&mut self, text: impl Into<String>) -> &mut Self {
        self.rows.push(Row::Text(text.into()));
        self
    }

    pub fn blank(&mut self) -> &mut Self {
        self.line("")
    }

    pub fn center(&mut self, text: impl Into<String>) -> &mut Self {
        self.rows.push(Row::Center(text.into()));
        self
    }

    pub fn rule(&mut self) -> &mut Self {
        self.rows.push(Row::Rule);
        self
    }

    /// A flag in a fixed-width column followed by its description.
    pub fn opt(&mut self, flag: &str, desc: &str) -> &mut Self {
        self.line(format!("{flag:<width$}{desc}", width = FLAG_COLUMN))
    }

    pub fn render(&self) -> String {
        let bar = |n: usize| "─".repeat(n);
        let mut out = String::new();

        let head = if self.title.is_empty() {
            String::new()
        } else {
            format!("─ {} ", self.title)
        };
        let fill = (PANEL_WIDTH - 2).saturating_sub(head.chars().count());
        out.push_str(&format!("┌{head}{}┐\n", bar(fill)));

        for row in &self.rows {
            match row {
                Row::Rule => out.push_str(&format!("├{}┤\n", bar(PANEL_WIDTH - 2))),
                Row::Text(text) => {
                    let pad = INNER.saturating_sub(visible_width(text));
                    out.push_str(&format!("│ {text}{} │\n", " ".repeat(pad)));
                }
                Row::Center(text) => {
                    let pad = INNER.saturating_sub(visible_width(text));
                    let left = pad / 2;
                    out.push_str(&format!(
                        "│ {}{text}{} │\n",
                        " ".repeat(left),
                        " ".repeat(pad - left)
                    ));
                }
            }
        }

        out.push_str(&format!("└{}┘\n", bar(PANEL_WIDTH - 2)));
        out
    }

    pub fn print(&self) {
        print!("{}", self.render());
    }
}

/// Printed width of `s`, skipping ANSI colour sequences.
pub fn visible_width(s: &str) -> usize {
    let mut width = 0;
    let mut chars = s.chars();
    while let Some(c) = chars.next() {
        if c == '\x1b' {
            for c in chars.by_ref() {
                if c == 'm' {
                    break;
                }
            }
        } else {
            width += 1;
        }
    }
    width
}

/// Password entropy in bits.
pub fn calculate_entropy(password_length: usize, charset_size: usize) -> f64 {
    if charset_size == 0 {
        return 0.0;
    }
    password_length as f64 * (charset_size as f64).log2()
}

pub fn entropy_strength(bits: f64) -> &'static str {
    match bits as u32 {
        0..=35 => "Weak",
        36..=59 => "Fair",
        60..=127 => "Strong",
        _ => "Very Strong",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn width_ignores_ansi() {
        assert_eq!(visible_width(&format!("{RED}abc{RESET}")), 3);
        assert_eq!(visible_width("├─┤"), 3);
    }

    #[test]
    fn panel_rows_share_one_width() {
        let mut panel = Panel::new("Title");
        panel
            .line(format!("{UNDERLINE}styled{RESET}"))
            .center("mid")
            .rule()
            .opt("-l, --length <N>", "Password length")
            .blank();
        let rendered = panel.render();

        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines.len(), 7);
        assert!(lines[0].starts_with("┌─ Title ─"));
        assert!(lines[3].starts_with('├'));
        assert!(lines[6].starts_with('└'));
        for line in &lines {
            assert_eq!(visible_width(line), PANEL_WIDTH, "{line}");
        }
        assert!(lines[4].contains(&format!("{:<24}Password length", "-l, --length <N>")));
    }

    #[test]
    fn centered_text_is_balanced() {
        let mut panel = Panel::new("");
        panel.center("ab");
        let rendered = panel.render();
        let row = rendered.lines().nth(1).unwrap();
        let inner = &row["│ ".len()..row.len() - " │".len()];
        assert_eq!(inner.len() - inner.trim_start().len(), 27);
        assert_eq!(inner.len() - inner.trim_end().len(), 27);
    }

    #[test]
    fn numbers_get_separators() {
        assert_eq!(format_number(20), "20");
        assert_eq!(format_number(1000), "1,000");
        assert_eq!(format_number(1234567), "1,234,567");
    }

    #[test]
    fn entropy() {
        assert_eq!(calculate_entropy(10, 0), 0.0);
        assert!((calculate_entropy(6, 10) - 19.93).abs() < 0.01);
        assert_eq!(entropy_strength(calculate_entropy(6, 10)), "Weak");
        assert_eq!(entropy_strength(calculate_entropy(12, 66)), "Strong");
        assert_eq!(entropy_strength(calculate_entropy(8, 66)), "Fair");
        assert_eq!(entropy_strength(calculate_entropy(30, 66)), "Very Strong");
    }
}
