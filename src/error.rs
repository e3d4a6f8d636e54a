//! Crate-level error type.

use thiserror::Error;

use crate::cipher::CipherError;
use crate::config::ConfigError;
use crate::decoder::DecodeError;
use crate::frame::FrameError;

/// Any error produced by the ghostink library.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Cipher(#[from] CipherError),

    #[error(transparent)]
    Decode(#[from] DecodeError),

    #[error(transparent)]
    Frame(#[from] FrameError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Decoded payload is not valid UTF-8: {0}")]
    InvalidUtf8(#[from] std::str::Utf8Error),
}

pub type Result<T> = std::result::Result<T, Error>;
