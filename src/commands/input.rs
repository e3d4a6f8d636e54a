//! Reading command input from an argument, a file or stdin.

use std::io::{self, Read};
use std::path::Path;

use anyhow::{Context, Result};

/// Returns the bytes from `--message`, `--file`, or stdin, in that order.
pub fn read_bytes(message: Option<&str>, file: Option<&Path>) -> Result<Vec<u8>> {
    if let Some(message) = message {
        return Ok(message.as_bytes().to_vec());
    }

    if let Some(path) = file {
        return std::fs::read(path)
            .with_context(|| format!("Failed to read {}", path.display()));
    }

    eprintln!("Reading from stdin (Ctrl+D to finish):");
    let mut buffer = Vec::new();
    io::stdin()
        .read_to_end(&mut buffer)
        .context("Failed to read from stdin")?;
    strip_line_ending(&mut buffer);
    Ok(buffer)
}

/// Same as [`read_bytes`] but requires UTF-8.
pub fn read_text(message: Option<&str>, file: Option<&Path>) -> Result<String> {
    let bytes = read_bytes(message, file)?;
    String::from_utf8(bytes).context("Input is not valid UTF-8")
}

/// Drops one trailing `\n` or `\r\n`.
///
/// Only line endings are removed: several alphabet characters (thin spaces)
/// count as Unicode whitespace, so a full trim could eat payload digits.
pub fn strip_line_ending(buffer: &mut Vec<u8>) {
    if buffer.last() == Some(&b'\n') {
        buffer.pop();
        if buffer.last() == Some(&b'\r') {
            buffer.pop();
        }
    }
}
