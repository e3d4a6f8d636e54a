//! Invisible alphabets ("ciphers") and the registry that names them.
//!
//! A cipher is an ordered list of invisible Unicode characters. The position
//! of a character in the list is the digit value it stands for, so the
//! alphabet length is the numeric base used by the codec.
//!
//! The registry is built once (see [`CipherRegistry::builtin`] or
//! [`crate::config::GhostinkConfig::build_registry`]) and then only read.

mod builtin;
mod codepoint;

use std::collections::HashMap;

use thiserror::Error;

use crate::digits::digits_per_byte;

pub use builtin::{BUILTIN_CIPHERS, DEFAULT_CIPHER};
pub use codepoint::{format_codepoint, parse_codepoint, parse_prefix};

/// Errors raised while defining or looking up ciphers.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CipherError {
    #[error("Unknown cipher: '{0}'")]
    UnknownCipher(String),

    #[error("Cipher '{0}' is already registered")]
    DuplicateCipher(String),

    #[error("Cipher '{name}' repeats character {ch:?} in its alphabet")]
    DuplicateCharacter {
        /// Cipher being defined.
        name: String,
        /// The repeated character.
        ch: char,
    },

    #[error("Cipher '{name}' needs at least 2 characters, got {size}")]
    AlphabetTooSmall {
        /// Cipher being defined.
        name: String,
        /// Number of characters supplied.
        size: usize,
    },

    #[error("Invalid code point: '{0}' (expected U+XXXX)")]
    InvalidCodepoint(String),

    #[error("Empty prefix")]
    EmptyPrefix,
}

/// A named invisible alphabet.
///
/// Immutable once built. The inverse lookup (character to digit) is computed
/// at construction so decoding never rebuilds it.
#[derive(Debug, Clone)]
pub struct Cipher {
    name: String,
    alphabet: Vec<char>,
    lookup: HashMap<char, u32>,
    width: usize,
}

impl Cipher {
    /// Creates a cipher from literal characters.
    ///
    /// Fails if the alphabet has fewer than two characters or repeats one,
    /// since either would break the digit/character bijection.
    pub fn new(name: impl Into<String>, alphabet: Vec<char>) -> Result<Self, CipherError> {
        let name = name.into();

        if alphabet.len() < 2 {
            return Err(CipherError::AlphabetTooSmall {
                name,
                size: alphabet.len(),
            });
        }

        let mut lookup = HashMap::with_capacity(alphabet.len());
        for (digit, &ch) in alphabet.iter().enumerate() {
            if lookup.insert(ch, digit as u32).is_some() {
                return Err(CipherError::DuplicateCharacter { name, ch });
            }
        }

        let width = digits_per_byte(alphabet.len() as u32);

        Ok(Self {
            name,
            alphabet,
            lookup,
            width,
        })
    }

    /// Creates a cipher from `U+XXXX` code point strings.
    pub fn from_codepoints<S: AsRef<str>>(
        name: impl Into<String>,
        codepoints: &[S],
    ) -> Result<Self, CipherError> {
        let alphabet = codepoints
            .iter()
            .map(|cp| parse_codepoint(cp.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(name, alphabet)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The ordered alphabet; index = digit value.
    pub fn alphabet(&self) -> &[char] {
        &self.alphabet
    }

    /// Numeric base (alphabet size).
    pub fn base(&self) -> u32 {
        self.alphabet.len() as u32
    }

    /// Number of digits used for every encoded byte.
    pub fn digits_per_byte(&self) -> usize {
        self.width
    }

    /// Character for a digit, if the digit is in range.
    pub fn char_for(&self, digit: u32) -> Option<char> {
        self.alphabet.get(digit as usize).copied()
    }

    /// Digit value of a character, if it belongs to this alphabet.
    pub fn digit_for(&self, ch: char) -> Option<u32> {
        self.lookup.get(&ch).copied()
    }

    pub fn contains(&self, ch: char) -> bool {
        self.lookup.contains_key(&ch)
    }
}

/// Ordered collection of ciphers, keyed by name.
///
/// Names keep insertion order so menus list them the same way every run.
#[derive(Debug, Clone, Default)]
pub struct CipherRegistry {
    ciphers: Vec<Cipher>,
    index: HashMap<String, usize>,
}

impl CipherRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry holding the built-in ciphers.
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        for &(name, codepoints) in BUILTIN_CIPHERS {
            let cipher = Cipher::from_codepoints(name, codepoints)
                .expect("built-in cipher table should be valid");
            registry
                .register(cipher)
                .expect("built-in cipher names should be unique");
        }
        registry
    }

    /// Adds a cipher. Names must be unique.
    pub fn register(&mut self, cipher: Cipher) -> Result<(), CipherError> {
        if self.index.contains_key(cipher.name()) {
            return Err(CipherError::DuplicateCipher(cipher.name().to_string()));
        }
        self.index.insert(cipher.name().to_string(), self.ciphers.len());
        self.ciphers.push(cipher);
        Ok(())
    }

    /// Looks up a cipher by name.
    pub fn resolve(&self, name: &str) -> Result<&Cipher, CipherError> {
        self.index
            .get(name)
            .map(|&idx| &self.ciphers[idx])
            .ok_or_else(|| CipherError::UnknownCipher(name.to_string()))
    }

    /// Cipher names in insertion order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.ciphers.iter().map(|c| c.name())
    }

    /// Ciphers in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Cipher> {
        self.ciphers.iter()
    }

    /// Cipher at a 0-based menu position.
    pub fn get(&self, position: usize) -> Option<&Cipher> {
        self.ciphers.get(position)
    }

    pub fn len(&self) -> usize {
        self.ciphers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ciphers.is_empty()
    }
}
