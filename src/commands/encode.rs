//! Encode command - hide text or a file as invisible characters.

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use tracing::{debug, info};

use ghostink::{conceal_bytes, embed, encode};

use super::input::{read_bytes, read_text};
use super::{AppContext, CommandExecutor};

/// Encode a message into invisible characters.
///
/// The output is `prefix + boundary + payload + boundary` and can be pasted
/// anywhere. Decoding needs the same cipher.
#[derive(Args, Debug)]
pub struct EncodeCommand {
    /// Text to hide (reads stdin if neither --message nor --file is given)
    #[arg(short, long, conflicts_with = "file")]
    pub message: Option<String>,

    /// Hide the contents of a file instead (any bytes)
    #[arg(short, long, conflicts_with = "message")]
    pub file: Option<PathBuf>,

    /// Cipher name or list number (see `ghostink ciphers`)
    #[arg(short, long)]
    pub cipher: Option<String>,

    /// Visible prefix character, literal or U+XXXX
    #[arg(short, long, conflicts_with = "raw")]
    pub prefix: Option<String>,

    /// Print only the invisible payload, without prefix and boundaries
    #[arg(long)]
    pub raw: bool,

    /// Text file to hide the message in (printed with the message inserted)
    #[arg(long, conflicts_with = "raw")]
    pub carrier: Option<PathBuf>,

    /// Character position in the carrier where the message goes
    #[arg(long, default_value_t = 0, requires = "carrier")]
    pub at: usize,
}

impl EncodeCommand {
    /// Builds the text the command prints, without the trailing newline.
    pub fn render(&self, ctx: &AppContext) -> Result<String> {
        let cipher_name = ctx.resolve_cipher_name(self.cipher.as_deref())?;
        let data = read_bytes(self.message.as_deref(), self.file.as_deref())?;

        if data.is_empty() {
            anyhow::bail!("Nothing to encode");
        }

        debug!(cipher = %cipher_name, bytes = data.len(), "encoding");

        let output = if self.raw {
            encode(&ctx.registry, &data, &cipher_name)?
        } else {
            let prefix = ctx.resolve_prefix(self.prefix.as_deref())?;
            let concealed = conceal_bytes(&ctx.registry, &data, prefix, &cipher_name)
                .context("Failed to encode message")?;

            match &self.carrier {
                Some(path) => {
                    let carrier = read_text(None, Some(path))
                        .with_context(|| format!("Failed to load carrier {}", path.display()))?;
                    embed(&carrier, self.at, &concealed)
                }
                None => concealed,
            }
        };

        info!(
            cipher = %cipher_name,
            bytes = data.len(),
            chars = output.chars().count(),
            "encoded"
        );
        Ok(output)
    }

    /// Writes the rendered output as one line.
    pub fn write_output<W: Write>(&self, ctx: &AppContext, out: &mut W) -> Result<()> {
        let output = self.render(ctx)?;
        writeln!(out, "{}", output).context("Failed to write output")?;
        Ok(())
    }
}

impl CommandExecutor for EncodeCommand {
    fn execute(&self, ctx: &AppContext) -> Result<()> {
        self.write_output(ctx, &mut io::stdout().lock())
    }
}
