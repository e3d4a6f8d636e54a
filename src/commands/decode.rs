//! Decode command - recover a hidden message.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use tracing::{debug, info};

use ghostink::{decode, locate, reveal};

use super::input::{read_bytes, strip_line_ending};
use super::{AppContext, CommandExecutor};

/// Decode a message hidden with `ghostink encode`.
///
/// Input is the whole framed message (prefix and boundaries included),
/// unless --raw or --scan is given. Decoding fails on any character that is
/// not part of the cipher, so the cipher must match the one used to encode.
#[derive(Args, Debug)]
pub struct DecodeCommand {
    /// Encoded text (reads stdin if neither --message nor --file is given)
    #[arg(short, long, conflicts_with = "file")]
    pub message: Option<String>,

    /// Read the encoded text from a file
    #[arg(short, long, conflicts_with = "message")]
    pub file: Option<PathBuf>,

    /// Cipher name or list number (see `ghostink ciphers`)
    #[arg(short, long)]
    pub cipher: Option<String>,

    /// Input is a bare payload without prefix and boundaries
    #[arg(long, conflicts_with = "scan")]
    pub raw: bool,

    /// Look for the hidden message inside larger text
    #[arg(long)]
    pub scan: bool,

    /// Write decoded bytes to this file instead of printing text
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

impl DecodeCommand {
    /// Reads the input and returns the decoded bytes.
    pub fn decode_input(&self, ctx: &AppContext) -> Result<Vec<u8>> {
        let cipher_name = ctx.resolve_cipher_name(self.cipher.as_deref())?;

        let mut raw_input = read_bytes(self.message.as_deref(), self.file.as_deref())?;
        // A file saved from `encode > FILE` ends with the newline encode prints.
        if self.file.is_some() {
            strip_line_ending(&mut raw_input);
        }
        let input = String::from_utf8(raw_input).context("Input is not valid UTF-8")?;

        if input.is_empty() {
            anyhow::bail!("Nothing to decode");
        }

        let bytes = if self.raw {
            decode(&ctx.registry, &input, &cipher_name).context("Failed to decode payload")?
        } else {
            let framed = if self.scan {
                locate(&input).context("No hidden message found in input")?
            } else {
                input.as_str()
            };

            let revealed =
                reveal(&ctx.registry, framed, &cipher_name).context("Failed to decode message")?;
            debug!(
                prefix = %revealed.prefix,
                suffix_len = revealed.suffix.len(),
                "parsed framed message"
            );
            revealed.bytes
        };

        info!(cipher = %cipher_name, bytes = bytes.len(), "decoded");
        Ok(bytes)
    }
}

impl CommandExecutor for DecodeCommand {
    fn execute(&self, ctx: &AppContext) -> Result<()> {
        let bytes = self.decode_input(ctx)?;

        match &self.output {
            Some(path) => {
                std::fs::write(path, &bytes)
                    .with_context(|| format!("Failed to write to {}", path.display()))?;
                eprintln!("Decoded {} bytes to {}", bytes.len(), path.display());
            }
            None => {
                let text = String::from_utf8(bytes)
                    .context("Decoded data is not UTF-8 text; use --output to save raw bytes")?;
                println!("{}", text);
            }
        }

        Ok(())
    }
}
