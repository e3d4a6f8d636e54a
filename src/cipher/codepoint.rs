//! `U+XXXX` code point notation.

use super::CipherError;

/// Parses `U+XXXX` (case-insensitive `U+`) into a character.
///
/// Surrogates and values above U+10FFFF are rejected.
pub fn parse_codepoint(input: &str) -> Result<char, CipherError> {
    let invalid = || CipherError::InvalidCodepoint(input.to_string());

    let trimmed = input.trim();
    let hex = trimmed
        .strip_prefix("U+")
        .or_else(|| trimmed.strip_prefix("u+"))
        .ok_or_else(invalid)?;

    if hex.is_empty() || hex.len() > 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(invalid());
    }

    let value = u32::from_str_radix(hex, 16).map_err(|_| invalid())?;
    char::from_u32(value).ok_or_else(invalid)
}

/// Formats a character as `U+XXXX` (at least four hex digits).
pub fn format_codepoint(ch: char) -> String {
    format!("U+{:04X}", ch as u32)
}

/// Interprets user input for a message prefix.
///
/// Input starting with `U+` is read as a code point; anything else yields
/// its first character. Surrounding whitespace is ignored.
pub fn parse_prefix(input: &str) -> Result<char, CipherError> {
    let input = input.trim();

    let mut chars = input.chars();
    let first = chars.next().ok_or(CipherError::EmptyPrefix)?;

    let has_u_plus = input.get(..2).is_some_and(|p| p.eq_ignore_ascii_case("u+"));
    if has_u_plus && input.len() > 2 {
        return parse_codepoint(input);
    }

    Ok(first)
}
