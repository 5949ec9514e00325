//! Settings file persistence.

use std::env;
use std::fs::OpenOptions;
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use super::Settings;
use crate::pass::normalize_length;

const FIELDS: usize = 7;

pub fn save(settings: &Settings) -> std::io::Result<()> {
    let path = get_path();
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let mut file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(&path)?;

    file.write_all(encode(settings).as_bytes())?;
    debug!(path = %path.display(), "settings saved");
    Ok(())
}

pub fn load(settings: &mut Settings) -> std::io::Result<()> {
    let path = get_path();
    if !path.exists() {
        debug!(path = %path.display(), "no settings file, writing defaults");
        return save(settings);
    }

    let file = OpenOptions::new().read(true).open(&path)?;
    let mut reader = BufReader::new(file);
    let mut line = String::new();
    reader.read_line(&mut line)?;

    if !decode(line.trim_end_matches(['\r', '\n']), settings) {
        warn!(path = %path.display(), "settings file malformed, rewriting defaults");
        *settings = Settings::default();
        save(settings)?;
    }

    Ok(())
}

fn encode(settings: &Settings) -> String {
    let symbols: String = settings.symbol_chars.iter().map(|&c| c as char).collect();

    format!(
        "{},{},{},{},{},{},{}\n",
        settings.pass_length,
        settings.number_of_passwords,
        settings.use_letters,
        settings.use_digits,
        settings.use_symbols,
        escape(&symbols),
        escape(&settings.output_file_path),
    )
}

fn escape(s: &str) -> String {
    s.chars()
        .map(|c| match c {
            ',' => "|,".to_string(),
            '|' => "||".to_string(),
            _ => c.to_string(),
        })
        .collect()
}

/// Returns false when the field count is wrong.
fn decode(line: &str, settings: &mut Settings) -> bool {
    let parts = split_escaped(line, ',');
    if parts.len() != FIELDS {
        return false;
    }

    settings.pass_length = normalize_length(parts[0].parse().ok());
    settings.number_of_passwords = parts[1].parse().unwrap_or(settings.number_of_passwords);
    settings.use_letters = parts[2].parse().unwrap_or(settings.use_letters);
    settings.use_digits = parts[3].parse().unwrap_or(settings.use_digits);
    settings.use_symbols = parts[4].parse().unwrap_or(settings.use_symbols);
    settings.symbol_chars = parts[5].bytes().filter(u8::is_ascii_graphic).collect();
    settings.output_file_path = parts[6].to_string();
    true
}

#[inline]
fn get_path() -> PathBuf {
    let home = env::var("HOME").unwrap_or_else(|_| ".".into());
    Path::new(&home).join(".config/passgen/settings")
}

fn split_escaped(s: &str, delimiter: char) -> Vec<String> {
    let mut parts = vec![];
    let mut current = String::new();
    let mut escape_next = false;

    for c in s.chars() {
        if escape_next {
            current.push(c);
            escape_next = false;
        } else if c == '|' {
            escape_next = true;
        } else if c == delimiter {
            parts.push(std::mem::take(&mut current));
        } else {
            current.push(c);
        }
    }

    parts.push(current);
    parts
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_escaped_symbols() {
        let settings = Settings {
            pass_length: 20,
            number_of_passwords: 3,
            use_digits: false,
            symbol_chars: b"+,|-".to_vec(),
            output_file_path: "out,dir/pw.txt".into(),
            ..Settings::default()
        };

        let line = encode(&settings);
        let mut decoded = Settings::default();
        assert!(decode(line.trim_end(), &mut decoded));
        assert_eq!(decoded, settings);
    }

    #[test]
    fn empty_trailing_fields_survive() {
        let settings = Settings {
            use_symbols: false,
            symbol_chars: Vec::new(),
            ..Settings::default()
        };
        let mut decoded = Settings::default();
        assert!(decode(encode(&settings).trim_end(), &mut decoded));
        assert_eq!(decoded, settings);
    }

    #[test]
    fn bad_fields_keep_defaults() {
        let mut decoded = Settings::default();
        assert!(decode("0,x,maybe,true,false,+-,", &mut decoded));
        assert_eq!(decoded.pass_length, crate::pass::DEFAULT_LENGTH);
        assert_eq!(decoded.number_of_passwords, 1);
        assert!(decoded.use_letters);
        assert!(!decoded.use_symbols);
        assert_eq!(decoded.symbol_chars, b"+-");
    }

    #[test]
    fn wrong_field_count_is_rejected() {
        let mut decoded = Settings::default();
        assert!(!decode("12,1,true", &mut decoded));
        assert!(!decode("", &mut decoded));
    }

    #[test]
    fn split_handles_escapes() {
        assert_eq!(split_escaped("a|,b,c", ','), vec!["a,b", "c"]);
        assert_eq!(split_escaped("a,,b", ','), vec!["a", "", "b"]);
        assert_eq!(split_escaped("a,", ','), vec!["a", ""]);
    }
}
