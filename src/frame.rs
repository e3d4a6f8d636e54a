//! Message framing.
//!
//! A framed message looks like
//!
//! ```text
//! [prefix][BOUNDARY][payload][BOUNDARY][suffix]
//! ```
//!
//! where the prefix is a single character (usually visible, so the message
//! has something to select and copy) and BOUNDARY is three word joiners.
//!
//! The payload is not escaped. U+2060 is also digit 3 of the larger built-in
//! alphabets, so a payload containing three of them in a row ends the frame
//! early when parsed.

use thiserror::Error;

/// The character repeated to form the boundary (WORD JOINER).
pub const BOUNDARY_CHAR: char = '\u{2060}';

/// Boundary marking the start and end of a payload.
pub const BOUNDARY: &str = "\u{2060}\u{2060}\u{2060}";

/// Errors raised while parsing a framed message.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FrameError {
    #[error("Empty message provided for decoding")]
    EmptyMessage,

    #[error("No boundary found after prefix")]
    MissingOpeningBoundary,

    #[error("No closing boundary found")]
    MissingClosingBoundary,
}

/// The three parts of a framed message, borrowed from the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParsedMessage<'a> {
    /// Leading character.
    pub prefix: char,
    /// Text between the two boundaries.
    pub payload: &'a str,
    /// Whatever follows the closing boundary (usually empty).
    pub suffix: &'a str,
}

/// Wraps `payload` as `prefix + BOUNDARY + payload + BOUNDARY`.
pub fn frame(prefix: char, payload: &str) -> String {
    let mut framed =
        String::with_capacity(prefix.len_utf8() + payload.len() + 2 * BOUNDARY.len());
    framed.push(prefix);
    framed.push_str(BOUNDARY);
    framed.push_str(payload);
    framed.push_str(BOUNDARY);
    framed
}

/// Splits a framed message into prefix, payload and suffix.
///
/// The opening boundary is searched for after the prefix character, never
/// overlapping it. The closing boundary is the first one after the opening
/// boundary ends.
pub fn parse(message: &str) -> Result<ParsedMessage<'_>, FrameError> {
    let prefix = message.chars().next().ok_or(FrameError::EmptyMessage)?;
    let after_prefix = prefix.len_utf8();

    let open = message[after_prefix..]
        .find(BOUNDARY)
        .map(|pos| after_prefix + pos)
        .ok_or(FrameError::MissingOpeningBoundary)?;
    let payload_start = open + BOUNDARY.len();

    let close = message[payload_start..]
        .find(BOUNDARY)
        .map(|pos| payload_start + pos)
        .ok_or(FrameError::MissingClosingBoundary)?;

    Ok(ParsedMessage {
        prefix,
        payload: &message[payload_start..close],
        suffix: &message[close + BOUNDARY.len()..],
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_layout() {
        let framed = frame('X', "ab");
        assert_eq!(framed, "X\u{2060}\u{2060}\u{2060}ab\u{2060}\u{2060}\u{2060}");
    }

    #[test]
    fn test_parse_framed() {
        let framed = frame('X', "ab");
        let parsed = parse(&framed).unwrap();
        assert_eq!(
            parsed,
            ParsedMessage {
                prefix: 'X',
                payload: "ab",
                suffix: "",
            }
        );
    }

    #[test]
    fn test_parse_keeps_suffix() {
        let message = format!("{}trailing text", frame('\u{2764}', "\u{200B}\u{200C}"));
        let parsed = parse(&message).unwrap();
        assert_eq!(parsed.prefix, '\u{2764}');
        assert_eq!(parsed.payload, "\u{200B}\u{200C}");
        assert_eq!(parsed.suffix, "trailing text");
    }

    #[test]
    fn test_parse_empty_payload() {
        let framed = frame('*', "");
        let parsed = parse(&framed).unwrap();
        assert_eq!(parsed.payload, "");
        assert_eq!(parsed.suffix, "");
    }

    #[test]
    fn test_parse_empty_message() {
        assert_eq!(parse(""), Err(FrameError::EmptyMessage));
    }

    #[test]
    fn test_parse_missing_opening() {
        assert_eq!(parse("X"), Err(FrameError::MissingOpeningBoundary));
        assert_eq!(parse("Xab\u{2060}\u{2060}"), Err(FrameError::MissingOpeningBoundary));
    }

    #[test]
    fn test_parse_missing_closing() {
        let message = format!("X{}ab", BOUNDARY);
        assert_eq!(parse(&message), Err(FrameError::MissingClosingBoundary));
    }

    #[test]
    fn test_prefix_not_part_of_opening_boundary() {
        // Prefix is itself a word joiner: the opening boundary must start after it.
        let message = format!("{}{}{}ab{}", BOUNDARY_CHAR, BOUNDARY_CHAR, BOUNDARY_CHAR, BOUNDARY);
        // After the prefix only two joiners remain before "ab", so no opening boundary
        // is found until the one after "ab", and then nothing closes it.
        assert_eq!(parse(&message), Err(FrameError::MissingClosingBoundary));

        let framed = frame(BOUNDARY_CHAR, "ab");
        let parsed = parse(&framed).unwrap();
        assert_eq!(parsed.prefix, BOUNDARY_CHAR);
        assert_eq!(parsed.payload, "ab");
    }

    #[test]
    fn test_embedded_boundary_cuts_payload() {
        let payload = format!("a{}b", BOUNDARY);
        let framed = frame('X', &payload);
        let parsed = parse(&framed).unwrap();
        assert_eq!(parsed.payload, "a");
        assert_eq!(parsed.suffix, format!("b{}", BOUNDARY));
    }

    #[test]
    fn test_multibyte_prefix() {
        let framed = frame('\u{1F47B}', "z");
        let parsed = parse(&framed).unwrap();
        assert_eq!(parsed.prefix, '\u{1F47B}');
        assert_eq!(parsed.payload, "z");
    }
}
