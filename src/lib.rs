//! # Ghostink - invisible ink for plain text
//!
//! Ghostink turns bytes into runs of invisible Unicode characters
//! (zero-width spaces, word joiners, thin spaces) and back. The result can
//! be pasted into ordinary text without changing how it looks.
//!
//! ## Overview
//!
//! - A **cipher** is an ordered alphabet of invisible characters. Its length
//!   is the numeric base; position in the alphabet is the digit value.
//! - Every byte is written as a fixed number of base-N digits
//!   (`ceil(8 / log2(base))`), most significant first.
//! - A **framed message** is `prefix + BOUNDARY + payload + BOUNDARY`, where
//!   the prefix is one visible character and the boundary is three word
//!   joiners (U+2060).
//!
//! This is obfuscation, not encryption: anyone who knows the alphabets can
//! read the message, and the invisible span is easy to spot programmatically.
//!
//! ## Example Usage
//!
//! ```rust
//! use ghostink::{conceal, reveal, CipherRegistry};
//!
//! let registry = CipherRegistry::builtin();
//!
//! let hidden = conceal(&registry, "meet at dawn", '*', "Hex Whisper (base16)").unwrap();
//! assert!(hidden.starts_with('*'));
//!
//! let revealed = reveal(&registry, &hidden, "Hex Whisper (base16)").unwrap();
//! assert_eq!(revealed.text().unwrap(), "meet at dawn");
//! ```
//!
//! ## Modules
//!
//! - [`cipher`]: Alphabets, the cipher registry, code point parsing
//! - [`digits`]: Fixed-width base-N digit conversion for single bytes
//! - [`encoder`]: Bytes to invisible text
//! - [`decoder`]: Invisible text to bytes (strict)
//! - [`frame`]: Prefix and boundary framing
//! - [`message`]: Text-level conceal / reveal
//! - [`config`]: `~/.ghostink/config.toml` with custom ciphers

pub mod cipher;
pub mod config;
pub mod decoder;
pub mod digits;
pub mod encoder;
pub mod error;
pub mod frame;
pub mod message;

// Re-export commonly used types at the crate root
pub use cipher::{parse_codepoint, parse_prefix, Cipher, CipherError, CipherRegistry};
pub use config::{CipherSpec, ConfigError, GhostinkConfig};
pub use decoder::{decode, decode_with_cipher, DecodeError};
pub use digits::{digits_per_byte, from_digits, to_digits};
pub use encoder::{encode, encode_with_cipher};
pub use error::{Error, Result};
pub use frame::{frame, parse, FrameError, ParsedMessage, BOUNDARY, BOUNDARY_CHAR};
pub use message::{conceal, conceal_bytes, embed, locate, reveal, RevealedMessage};
