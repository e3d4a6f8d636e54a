//! Bytes to invisible text.
//!
//! Each byte becomes `digits_per_byte` characters of the chosen alphabet,
//! most significant digit first. Output length is always
//! `data.len() * digits_per_byte`.

use crate::cipher::{Cipher, CipherError, CipherRegistry};
use crate::digits::to_digits;

/// Encodes `data` with the cipher registered as `cipher_name`.
///
/// # Errors
/// Returns [`CipherError::UnknownCipher`] if the name is not registered.
pub fn encode(
    registry: &CipherRegistry,
    data: &[u8],
    cipher_name: &str,
) -> Result<String, CipherError> {
    let cipher = registry.resolve(cipher_name)?;
    Ok(encode_with_cipher(cipher, data))
}

/// Encodes `data` with an already resolved cipher.
pub fn encode_with_cipher(cipher: &Cipher, data: &[u8]) -> String {
    let base = cipher.base();
    let width = cipher.digits_per_byte();
    let alphabet = cipher.alphabet();

    let mut encoded = String::with_capacity(data.len() * width * 3);
    for &byte in data {
        for digit in to_digits(byte, base, width) {
            encoded.push(alphabet[digit as usize]);
        }
    }
    encoded
}
