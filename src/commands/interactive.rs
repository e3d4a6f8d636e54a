//! Interactive command - menu-driven encode/decode session.

use std::io::{self, BufRead, Write};
use std::str::FromStr;

use anyhow::{Context, Result};
use clap::Args;
use tracing::debug;

use ghostink::{conceal, parse_prefix, reveal, CipherError};

use super::input::strip_line_ending;
use super::{AppContext, CommandExecutor};

/// Start an interactive session (the default when no command is given).
#[derive(Args, Debug, Default)]
pub struct InteractiveCommand {}

impl CommandExecutor for InteractiveCommand {
    fn execute(&self, ctx: &AppContext) -> Result<()> {
        let stdin = io::stdin();
        let stdout = io::stdout();
        Session::new(ctx, stdin.lock(), stdout.lock()).run()
    }
}

/// Top-level menu entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Encode,
    Decode,
    Exit,
}

impl FromStr for MenuChoice {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "1" => Ok(MenuChoice::Encode),
            "2" => Ok(MenuChoice::Decode),
            "3" => Ok(MenuChoice::Exit),
            _ => Err(()),
        }
    }
}

/// A menu loop over any line-based input and output.
pub struct Session<'a, R, W> {
    ctx: &'a AppContext,
    input: R,
    output: W,
}

impl<'a, R: BufRead, W: Write> Session<'a, R, W> {
    pub fn new(ctx: &'a AppContext, input: R, output: W) -> Self {
        Self { ctx, input, output }
    }

    /// Runs until the user exits or input ends.
    pub fn run(&mut self) -> Result<()> {
        writeln!(
            self.output,
            "Ghostink: write with invisible ink. Nothing to see here."
        )?;

        loop {
            writeln!(self.output)?;
            writeln!(self.output, "What would you like to do?")?;
            writeln!(self.output, "  1. Encode a message")?;
            writeln!(self.output, "  2. Decode a message")?;
            writeln!(self.output, "  3. Exit")?;

            let Some(line) = self.prompt("Enter your choice (1/2/3): ")? else {
                break;
            };

            match line.parse::<MenuChoice>() {
                Ok(MenuChoice::Encode) => self.encode_flow()?,
                Ok(MenuChoice::Decode) => self.decode_flow()?,
                Ok(MenuChoice::Exit) => {
                    writeln!(self.output, "Goodbye. The ink dries invisible.")?;
                    break;
                }
                Err(()) => writeln!(self.output, "Please pick 1, 2 or 3.")?,
            }
        }

        Ok(())
    }

    fn encode_flow(&mut self) -> Result<()> {
        let Some(cipher_name) = self.choose_cipher()? else {
            writeln!(self.output, "Cipher selection cancelled.")?;
            return Ok(());
        };
        let Some(prefix) = self.choose_prefix()? else {
            return Ok(());
        };
        let Some(message) = self.prompt("Enter the message to encode: ")? else {
            return Ok(());
        };

        if message.is_empty() {
            writeln!(self.output, "Nothing to encode.")?;
            return Ok(());
        }

        debug!(cipher = %cipher_name, bytes = message.len(), "interactive encode");
        let concealed = conceal(&self.ctx.registry, &message, prefix, &cipher_name)?;

        writeln!(self.output)?;
        writeln!(self.output, "Encoded message (copy everything on the next line):")?;
        writeln!(self.output, "{}", concealed)?;
        Ok(())
    }

    fn decode_flow(&mut self) -> Result<()> {
        let Some(cipher_name) = self.choose_cipher()? else {
            writeln!(self.output, "Cipher selection cancelled.")?;
            return Ok(());
        };
        let Some(encoded) =
            self.prompt("Enter the entire encoded string (including prefix and boundaries): ")?
        else {
            return Ok(());
        };

        if encoded.is_empty() {
            writeln!(self.output, "Nothing to decode.")?;
            return Ok(());
        }

        debug!(cipher = %cipher_name, chars = encoded.chars().count(), "interactive decode");
        let decoded = reveal(&self.ctx.registry, &encoded, &cipher_name)
            .and_then(|revealed| revealed.into_text());

        writeln!(self.output)?;
        match decoded {
            Ok(text) => {
                writeln!(self.output, "Decoded message:")?;
                writeln!(self.output, "{}", text)?;
            }
            Err(e) => writeln!(self.output, "Could not decode: {}", e)?,
        }
        Ok(())
    }

    /// Asks for a cipher by number. `None` on `q` or end of input.
    fn choose_cipher(&mut self) -> Result<Option<String>> {
        writeln!(self.output)?;
        writeln!(self.output, "Available ciphers:")?;
        for (idx, name) in self.ctx.registry.names().enumerate() {
            writeln!(self.output, "  {}. {}", idx + 1, name)?;
        }

        loop {
            let Some(choice) = self.prompt("Pick a cipher by number (or 'q' to cancel): ")? else {
                return Ok(None);
            };
            let choice = choice.trim();

            if choice.to_lowercase().starts_with('q') {
                return Ok(None);
            }

            let picked = choice
                .parse::<usize>()
                .ok()
                .and_then(|n| n.checked_sub(1))
                .and_then(|idx| self.ctx.registry.get(idx));
            match picked {
                Some(cipher) => return Ok(Some(cipher.name().to_string())),
                None => writeln!(self.output, "Invalid selection, try again.")?,
            }
        }
    }

    /// Asks for the prefix. Empty input falls back to the configured default.
    fn choose_prefix(&mut self) -> Result<Option<char>> {
        let default = self
            .ctx
            .config
            .default_prefix_char()
            .context("Invalid default_prefix in config")?;

        loop {
            let Some(raw) = self.prompt(
                "Enter a visible character or code point (e.g. U+2764) for the prefix: ",
            )?
            else {
                return Ok(None);
            };

            match (parse_prefix(&raw), default) {
                (Ok(prefix), _) => return Ok(Some(prefix)),
                (Err(CipherError::EmptyPrefix), Some(default)) => return Ok(Some(default)),
                (Err(CipherError::EmptyPrefix), None) => {
                    writeln!(self.output, "You didn't type anything. Try again.")?
                }
                (Err(e), _) => writeln!(self.output, "{}. Try again.", e)?,
            }
        }
    }

    /// Prints `text`, reads one line. `None` at end of input.
    fn prompt(&mut self, text: &str) -> Result<Option<String>> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;

        let mut line = Vec::new();
        if self.input.read_until(b'\n', &mut line)? == 0 {
            return Ok(None);
        }

        strip_line_ending(&mut line);
        let line = String::from_utf8(line).context("Input is not valid UTF-8")?;
        Ok(Some(line))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    use ghostink::GhostinkConfig;

    fn run_session(ctx: &AppContext, input: &str) -> String {
        let mut output = Vec::new();
        Session::new(ctx, Cursor::new(input.as_bytes()), &mut output)
            .run()
            .unwrap();
        String::from_utf8(output).unwrap()
    }

    fn ctx() -> AppContext {
        AppContext::new(GhostinkConfig::default()).unwrap()
    }

    #[test]
    fn test_menu_choice_parse() {
        assert_eq!("1".parse::<MenuChoice>(), Ok(MenuChoice::Encode));
        assert_eq!(" 2 ".parse::<MenuChoice>(), Ok(MenuChoice::Decode));
        assert_eq!("3".parse::<MenuChoice>(), Ok(MenuChoice::Exit));
        assert_eq!("4".parse::<MenuChoice>(), Err(()));
        assert_eq!("encode".parse::<MenuChoice>(), Err(()));
    }

    #[test]
    fn test_exit_immediately() {
        let out = run_session(&ctx(), "3\n");
        assert!(out.contains("Goodbye"));
    }

    #[test]
    fn test_end_of_input_exits() {
        let out = run_session(&ctx(), "");
        assert!(out.contains("Enter your choice"));
    }

    #[test]
    fn test_invalid_menu_choice() {
        let out = run_session(&ctx(), "9\n3\n");
        assert!(out.contains("Please pick 1, 2 or 3."));
    }

    #[test]
    fn test_encode_then_decode() {
        let ctx = ctx();
        let out = run_session(&ctx, "1\n1\nX\nhello there\n3\n");
        let encoded = out
            .lines()
            .skip_while(|l| !l.starts_with("Encoded message"))
            .nth(1)
            .unwrap()
            .to_string();
        assert!(encoded.starts_with('X'));

        let out = run_session(&ctx, &format!("2\n1\n{}\n3\n", encoded));
        assert!(out.contains("Decoded message:\nhello there\n"));
    }

    #[test]
    fn test_prefix_codepoint_input() {
        let out = run_session(&ctx(), "1\n4\nU+2605\nhi\n3\n");
        assert!(out.contains("\n\u{2605}\u{2060}\u{2060}\u{2060}"));
    }

    #[test]
    fn test_prefix_retry_on_empty() {
        let out = run_session(&ctx(), "1\n2\n\n*\nhi\n3\n");
        assert!(out.contains("You didn't type anything"));
        assert!(out.contains("\n*\u{2060}\u{2060}\u{2060}"));
    }

    #[test]
    fn test_prefix_default_from_config() {
        let config = GhostinkConfig {
            default_prefix: Some("~".to_string()),
            ..Default::default()
        };
        let ctx = AppContext::new(config).unwrap();
        let out = run_session(&ctx, "1\n2\n\nhi\n3\n");
        assert!(out.contains("\n~\u{2060}\u{2060}\u{2060}"));
    }

    #[test]
    fn test_crlf_input_lines() {
        let ctx = ctx();
        let out = run_session(&ctx, "1\r\n4\r\nX\r\nhi\r\n3\r\n");
        let encoded = out
            .lines()
            .skip_while(|l| !l.starts_with("Encoded message"))
            .nth(1)
            .unwrap()
            .to_string();
        let revealed = reveal(&ctx.registry, &encoded, "Binary Breath (base2)").unwrap();
        assert_eq!(revealed.into_text().unwrap(), "hi");
    }

    #[test]
    fn test_invalid_utf8_input_is_error() {
        let ctx = ctx();
        let mut output = Vec::new();
        let input: &[u8] = b"1\n1\n\xFF\n";
        let result = Session::new(&ctx, input, &mut output).run();
        assert!(result.is_err());
    }

    #[test]
    fn test_cancel_cipher_selection() {
        let out = run_session(&ctx(), "1\nq\n3\n");
        assert!(out.contains("Cipher selection cancelled."));
    }

    #[test]
    fn test_invalid_cipher_number_retries() {
        let out = run_session(&ctx(), "1\n7\nq\n3\n");
        assert!(out.contains("Invalid selection"));
    }

    #[test]
    fn test_decode_error_is_reported() {
        let out = run_session(&ctx(), "2\n1\njust text\n3\n");
        assert!(out.contains("Could not decode: No boundary found after prefix"));
        assert!(out.contains("Goodbye"));
    }

    #[test]
    fn test_empty_message_not_encoded() {
        let out = run_session(&ctx(), "1\n1\nX\n\n3\n");
        assert!(out.contains("Nothing to encode."));
    }
}
