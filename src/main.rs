//! Ghostink - invisible ink for plain text
//!
//! A CLI for hiding messages in runs of invisible Unicode characters.

mod commands;

use std::path::PathBuf;

use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{
    AppContext, CiphersCommand, CommandExecutor, DecodeCommand, EncodeCommand,
    InteractiveCommand,
};

/// Ghostink - invisible ink for plain text
///
/// Encodes text (or any bytes) as zero-width and thin-space characters,
/// framed by word joiners behind one visible prefix character.
/// This hides text from the eye, not from software: it is not encryption.
#[derive(Parser)]
#[command(name = "ghostink")]
#[command(version)]
#[command(about = "Hide messages in plain sight with invisible Unicode characters")]
#[command(long_about = None)]
struct Cli {
    /// Config file (default: ~/.ghostink/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// More log output on stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Encode a message into invisible characters
    Encode(EncodeCommand),

    /// Decode a hidden message
    Decode(DecodeCommand),

    /// List the available ciphers
    Ciphers(CiphersCommand),

    /// Menu-driven session (default)
    Interactive(InteractiveCommand),
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let ctx = AppContext::load(cli.config.as_deref())?;

    match cli.command {
        Some(Commands::Encode(cmd)) => cmd.execute(&ctx),
        Some(Commands::Decode(cmd)) => cmd.execute(&ctx),
        Some(Commands::Ciphers(cmd)) => cmd.execute(&ctx),
        Some(Commands::Interactive(cmd)) => cmd.execute(&ctx),
        None => InteractiveCommand::default().execute(&ctx),
    }
}

/// Logs go to stderr so stdout stays clean for encoded output.
///
/// `RUST_LOG` wins over `-v` when set.
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
