use super::app::{App, Notice};
use crate::pass::LENGTH_PRESETS;
use crate::terminal::{GREEN, Panel, RED, RESET, UNDERLINE, clear, flush, format_number};

fn switch(on: bool) -> &'static str {
    if on { "[x]" } else { "[ ]" }
}

/// Presets with the active one bracketed; a custom length is appended.
fn preset_row(length: usize) -> String {
    let mut row: Vec<String> = LENGTH_PRESETS
        .iter()
        .map(|&p| {
            if p == length {
                format!("[{p}]")
            } else {
                format!(" {p} ")
            }
        })
        .collect();
    if !LENGTH_PRESETS.contains(&length) {
        row.push(format!("[{}]", format_number(length)));
    }
    row.join("")
}

fn help_panel() -> Panel {
    let mut p = Panel::new("passgen");
    p.center("Random password generator")
        .blank()
        .line("MODES:")
        .line("  1) Interactive: run without arguments. Toggle")
        .line("     categories, pick a length, generate and copy.")
        .line("  2) Client: pass flags (e.g. -l 20 -n 5) to print")
        .line("     passwords without the screen.")
        .blank()
        .line("USAGE:")
        .line("  passgen [OPTIONS]")
        .blank()
        .line("OPTIONS:")
        .line(" Password:")
        .opt("  -l, --length <N>", "Password length (default: 12)")
        .opt("  -n, --number <N>", "How many (default: 1)")
        .opt("      --no-letters", "Exclude a-z and A-Z")
        .opt("      --no-digits", "Exclude 0-9")
        .opt("      --no-symbols", "Exclude symbols")
        .opt("      --symbols <CHARS>", "Symbol set (default: +-=_)")
        .opt("      --seed <N>", "Repeatable output for a seed")
        .blank()
        .line(" Output:")
        .opt("  -o, --output [FILE]", "Append to passwords.txt or FILE")
        .opt("  -b, --board", "Copy to clipboard")
        .opt("  -q, --quiet", "Suppress warnings")
        .blank()
        .line(" Settings:")
        .opt("  -s, --saved", "Start from saved settings")
        .opt("      --save", "Save the resulting settings")
        .blank()
        .line(" Info:")
        .opt("  -h, --help", "Display this help message")
        .opt("  -v, --version", "Display version")
        .blank()
        .line("EXAMPLES:")
        .line("  passgen                  Interactive screen")
        .line("  passgen -l 20            One password, 20 characters")
        .line("  passgen -n 3 -b          Three passwords to clipboard")
        .line("  passgen -l 6 --no-letters --no-symbols")
        .line("                           Six-digit PIN");
    p
}

pub fn print_help() {
    help_panel().print();
    println!();
}

fn screen_panel(app: &App) -> Panel {
    let s = &app.settings;
    let symbols: String = s.symbol_chars.iter().map(|&c| c as char).collect();
    let (bits, strength) = app.entropy();
    let eye = if app.visible { "v) hide" } else { "v) show" };

    let mut p = Panel::new("Password Generator");
    p.center("Esc/q: quit | h: help")
        .blank()
        .line(format!("{UNDERLINE}Characters{RESET}:"))
        .line(format!("  1) {} Letters   a-z A-Z", switch(s.use_letters)))
        .line(format!("  2) {} Digits    0-9", switch(s.use_digits)))
        .line(format!("  3) {} Symbols   {symbols}", switch(s.use_symbols)))
        .line("     e) edit symbol set")
        .blank()
        .line(format!("{UNDERLINE}Length{RESET}:"))
        .line(format!("  \u{2190}/\u{2192} {}", preset_row(s.pass_length)))
        .line("     l) custom length")
        .blank()
        .line(format!("Entropy: {bits:.1} bits ({strength})"))
        .line(format!("Source: {}", app.source))
        .blank()
        .rule()
        .line(format!("Password: {}", app.display_password()))
        .rule()
        .line(format!("  Enter) generate  |  {eye}  |  c) copy  |  s) save"));
    p
}

pub fn print_screen(app: &App) {
    clear();
    screen_panel(app).print();

    match &app.notice {
        Notice::None => println!(),
        Notice::Info(msg) => println!("{GREEN}{msg}{RESET}"),
        Notice::Error(msg) => println!("{RED}{msg}{RESET}"),
    }
    flush();
}
