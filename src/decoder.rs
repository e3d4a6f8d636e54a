//! Invisible text back to bytes.
//!
//! Decoding is strict: a single character outside the alphabet, or a digit
//! count that does not split into whole bytes, fails the whole call. Nothing
//! is skipped and no partial output is returned.

use thiserror::Error;

use crate::cipher::{Cipher, CipherError, CipherRegistry};
use crate::digits::from_digits;

/// Errors that can occur during decoding.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    #[error(transparent)]
    Cipher(#[from] CipherError),

    #[error("Unexpected character {ch:?} at position {position} for cipher '{cipher}'")]
    UnexpectedCharacter {
        /// The character not found in the alphabet.
        ch: char,
        /// Character index in the encoded input.
        position: usize,
        /// Name of the cipher used for decoding.
        cipher: String,
    },

    #[error("Encoded length {length} is not a multiple of {width} digits per byte")]
    MalformedLength {
        /// Number of digits read.
        length: usize,
        /// Digits per byte of the cipher.
        width: usize,
    },

    #[error("Chunk {chunk} decodes to {value}, which does not fit in a byte")]
    ByteOverflow {
        /// Decoded value of the chunk.
        value: u32,
        /// Index of the offending chunk (= output byte index).
        chunk: usize,
    },
}

/// Decodes `encoded` with the cipher registered as `cipher_name`.
pub fn decode(
    registry: &CipherRegistry,
    encoded: &str,
    cipher_name: &str,
) -> Result<Vec<u8>, DecodeError> {
    let cipher = registry.resolve(cipher_name)?;
    decode_with_cipher(cipher, encoded)
}

/// Decodes `encoded` with an already resolved cipher.
pub fn decode_with_cipher(cipher: &Cipher, encoded: &str) -> Result<Vec<u8>, DecodeError> {
    let base = cipher.base();
    let width = cipher.digits_per_byte();

    let digits = encoded
        .chars()
        .enumerate()
        .map(|(position, ch)| {
            cipher
                .digit_for(ch)
                .ok_or_else(|| DecodeError::UnexpectedCharacter {
                    ch,
                    position,
                    cipher: cipher.name().to_string(),
                })
        })
        .collect::<Result<Vec<u32>, _>>()?;

    if digits.len() % width != 0 {
        return Err(DecodeError::MalformedLength {
            length: digits.len(),
            width,
        });
    }

    digits
        .chunks(width)
        .enumerate()
        .map(|(chunk, group)| {
            let value = from_digits(group, base);
            u8::try_from(value).map_err(|_| DecodeError::ByteOverflow { value, chunk })
        })
        .collect()
}
