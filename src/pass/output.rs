//! Password output to terminal, file, or clipboard buffer.

use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::Path;

use zeroize::{Zeroize, Zeroizing};

use super::Password;

/// Write one password per line.
pub fn write_batch<W: Write>(out: &mut W, passwords: &[Password]) -> io::Result<()> {
    let mut line = Vec::new();
    for pass in passwords {
        line.extend_from_slice(pass.as_bytes());
        line.push(b'\n');
        out.write_all(&line)?;
        line.zeroize();
    }
    out.flush()
}

/// Append passwords to `path`, creating parent directories as needed.
pub fn append_to_file(path: &str, passwords: &[Password]) -> io::Result<()> {
    if let Some(parent) = Path::new(path).parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        std::fs::create_dir_all(parent)?;
    }

    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    write_batch(&mut file, passwords)
}

/// Join passwords with newlines for the clipboard.
pub fn joined(passwords: &[Password]) -> Zeroizing<String> {
    let mut out = Zeroizing::new(String::new());
    for (i, pass) in passwords.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        out.push_str(pass);
    }
    out
}
