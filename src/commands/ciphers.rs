//! Ciphers command - list available alphabets.

use anyhow::Result;
use clap::Args;

use ghostink::cipher::format_codepoint;
use ghostink::Cipher;

use super::{AppContext, CommandExecutor};

/// List the available ciphers in menu order.
///
/// Custom ciphers from the config file appear after the built-in ones.
#[derive(Args, Debug)]
pub struct CiphersCommand {
    /// Also show each alphabet as U+XXXX code points
    #[arg(long)]
    pub codepoints: bool,
}

impl CommandExecutor for CiphersCommand {
    fn execute(&self, ctx: &AppContext) -> Result<()> {
        println!("Available ciphers:");
        for (idx, cipher) in ctx.registry.iter().enumerate() {
            println!("{}", describe(idx + 1, cipher));
            if self.codepoints {
                println!("       {}", alphabet_line(cipher));
            }
        }
        Ok(())
    }
}

fn describe(number: usize, cipher: &Cipher) -> String {
    format!(
        "  {}. {} (base {}, {} chars per byte)",
        number,
        cipher.name(),
        cipher.base(),
        cipher.digits_per_byte()
    )
}

fn alphabet_line(cipher: &Cipher) -> String {
    cipher
        .alphabet()
        .iter()
        .map(|&ch| format_codepoint(ch))
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use ghostink::CipherRegistry;

    #[test]
    fn test_describe() {
        let registry = CipherRegistry::builtin();
        let cipher = registry.resolve("Octal Poetry (base8)").unwrap();
        assert_eq!(
            describe(2, cipher),
            "  2. Octal Poetry (base8) (base 8, 3 chars per byte)"
        );
    }

    #[test]
    fn test_alphabet_line() {
        let registry = CipherRegistry::builtin();
        let cipher = registry.resolve("Quaternary Verse (base4)").unwrap();
        assert_eq!(alphabet_line(cipher), "U+200B U+200C U+200D U+2060");
    }
}
