//! Text messages end to end: UTF-8, codec and framing together.
//!
//! This is what the CLI works with. The lower-level [`encoder`](crate::encoder),
//! [`decoder`](crate::decoder) and [`frame`](crate::frame) modules stay usable
//! on their own for raw bytes.

use crate::cipher::CipherRegistry;
use crate::decoder::decode;
use crate::encoder::encode;
use crate::error::Result;
use crate::frame::{frame, parse, BOUNDARY};

/// A decoded message with its framing parts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RevealedMessage {
    /// Leading character of the framed message.
    pub prefix: char,
    /// Decoded payload bytes.
    pub bytes: Vec<u8>,
    /// Text after the closing boundary.
    pub suffix: String,
}

impl RevealedMessage {
    /// Payload as UTF-8 text.
    pub fn text(&self) -> Result<&str> {
        Ok(std::str::from_utf8(&self.bytes)?)
    }

    /// Consumes the message and returns the payload as a `String`.
    pub fn into_text(self) -> Result<String> {
        String::from_utf8(self.bytes).map_err(|e| e.utf8_error().into())
    }
}

/// Encodes `text` and frames it behind `prefix`.
pub fn conceal(
    registry: &CipherRegistry,
    text: &str,
    prefix: char,
    cipher_name: &str,
) -> Result<String> {
    conceal_bytes(registry, text.as_bytes(), prefix, cipher_name)
}

/// Encodes arbitrary bytes and frames them behind `prefix`.
pub fn conceal_bytes(
    registry: &CipherRegistry,
    data: &[u8],
    prefix: char,
    cipher_name: &str,
) -> Result<String> {
    let payload = encode(registry, data, cipher_name)?;
    Ok(frame(prefix, &payload))
}

/// Parses a framed message and decodes its payload.
///
/// The cipher must be the one used by the sender; the framing does not
/// record it.
pub fn reveal(
    registry: &CipherRegistry,
    message: &str,
    cipher_name: &str,
) -> Result<RevealedMessage> {
    let parsed = parse(message)?;
    let bytes = decode(registry, parsed.payload, cipher_name)?;

    Ok(RevealedMessage {
        prefix: parsed.prefix,
        bytes,
        suffix: parsed.suffix.to_string(),
    })
}

/// Inserts a concealed message into `carrier` after `at` characters.
///
/// Positions past the end append to the carrier.
pub fn embed(carrier: &str, at: usize, concealed: &str) -> String {
    let offset = carrier
        .char_indices()
        .nth(at)
        .map_or(carrier.len(), |(idx, _)| idx);

    let mut out = String::with_capacity(carrier.len() + concealed.len());
    out.push_str(&carrier[..offset]);
    out.push_str(concealed);
    out.push_str(&carrier[offset..]);
    out
}

/// Finds a framed message inside larger text.
///
/// Returns the text starting at the prefix, i.e. the character right before
/// the first boundary. Text that starts with a boundary has no prefix and
/// yields `None`.
pub fn locate(text: &str) -> Option<&str> {
    let boundary = text.find(BOUNDARY)?;
    let (prefix_start, _) = text[..boundary].char_indices().next_back()?;
    Some(&text[prefix_start..])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::frame::FrameError;

    const HEX: &str = "Hex Whisper (base16)";

    #[test]
    fn test_conceal_reveal_roundtrip() {
        let registry = CipherRegistry::builtin();
        let concealed = conceal(&registry, "meet at dawn \u{1F305}", '\u{2764}', HEX).unwrap();

        let revealed = reveal(&registry, &concealed, HEX).unwrap();
        assert_eq!(revealed.prefix, '\u{2764}');
        assert_eq!(revealed.text().unwrap(), "meet at dawn \u{1F305}");
        assert_eq!(revealed.suffix, "");
    }

    #[test]
    fn test_concealed_is_mostly_invisible() {
        let registry = CipherRegistry::builtin();
        let concealed = conceal(&registry, "secret", 'X', "Binary Breath (base2)").unwrap();
        let visible: Vec<char> = concealed
            .chars()
            .filter(|c| !matches!(c, '\u{200B}' | '\u{200C}' | '\u{2060}'))
            .collect();
        assert_eq!(visible, vec!['X']);
    }

    #[test]
    fn test_reveal_wrong_cipher_fails() {
        let registry = CipherRegistry::builtin();
        let concealed = conceal(&registry, "hello", 'X', HEX).unwrap();
        let result = reveal(&registry, &concealed, "Binary Breath (base2)");
        assert!(matches!(result, Err(Error::Decode(_))));
    }

    #[test]
    fn test_reveal_unframed_fails() {
        let registry = CipherRegistry::builtin();
        let result = reveal(&registry, "just text", HEX);
        assert!(matches!(
            result,
            Err(Error::Frame(FrameError::MissingOpeningBoundary))
        ));
    }

    #[test]
    fn test_reveal_invalid_utf8() {
        let registry = CipherRegistry::builtin();
        let concealed = conceal_bytes(&registry, &[0xFF, 0xFE], 'X', HEX).unwrap();
        let revealed = reveal(&registry, &concealed, HEX).unwrap();
        assert_eq!(revealed.bytes, vec![0xFF, 0xFE]);
        assert!(matches!(revealed.text(), Err(Error::InvalidUtf8(_))));
        assert!(matches!(revealed.into_text(), Err(Error::InvalidUtf8(_))));
    }

    #[test]
    fn test_embed_and_locate() {
        let registry = CipherRegistry::builtin();
        let concealed = conceal(&registry, "hi", '.', HEX).unwrap();
        let carrier = "Nothing to see here";
        let text = embed(carrier, 7, &concealed);

        assert!(text.starts_with("Nothing"));
        let found = locate(&text).unwrap();
        assert!(found.starts_with('.'));

        let revealed = reveal(&registry, found, HEX).unwrap();
        assert_eq!(revealed.text().unwrap(), "hi");
        assert_eq!(revealed.suffix, " to see here");
    }

    #[test]
    fn test_embed_past_end_appends() {
        assert_eq!(embed("abc", 99, "Z"), "abcZ");
        assert_eq!(embed("abc", 0, "Z"), "Zabc");
        assert_eq!(embed("\u{00E9}t\u{00E9}", 1, "Z"), "\u{00E9}Zt\u{00E9}");
    }

    #[test]
    fn test_locate_none() {
        assert_eq!(locate("plain text"), None);
        assert_eq!(locate(BOUNDARY), None);
    }
}
