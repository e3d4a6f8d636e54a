//! Command module - Strategy pattern for CLI commands.
//!
//! Each command is a separate module implementing the `CommandExecutor` trait.
//! Commands share an [`AppContext`] holding the loaded config and the cipher
//! registry built from it.

mod ciphers;
mod decode;
mod encode;
mod input;
mod interactive;

pub use ciphers::CiphersCommand;
pub use decode::DecodeCommand;
pub use encode::EncodeCommand;
pub use interactive::InteractiveCommand;

use std::path::Path;

use anyhow::{Context, Result};
use tracing::{debug, warn};

use ghostink::cipher::DEFAULT_CIPHER;
use ghostink::{parse_prefix, CipherRegistry, ConfigError, GhostinkConfig};

/// Prefix used when neither the command line nor the config sets one.
pub const DEFAULT_PREFIX: char = '\u{2764}';

/// Trait for command execution - Strategy pattern.
///
/// Each command struct holds its parsed arguments and implements
/// this trait to define its execution logic.
pub trait CommandExecutor {
    /// Executes the command with its parsed arguments.
    fn execute(&self, ctx: &AppContext) -> Result<()>;
}

/// Configuration and registry shared by every command.
#[derive(Debug)]
pub struct AppContext {
    pub config: GhostinkConfig,
    pub registry: CipherRegistry,
}

impl AppContext {
    /// Builds the context from an already loaded config.
    ///
    /// Fails on a bad `default_prefix` as well as on bad ciphers.
    pub fn new(config: GhostinkConfig) -> Result<Self> {
        let registry = config
            .build_registry()
            .context("Failed to build cipher registry from config")?;
        config
            .default_prefix_char()
            .context("Invalid default_prefix in config")?;
        Ok(Self { config, registry })
    }

    /// Loads `path`, or `~/.ghostink/config.toml` when no path is given.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config = match path {
            Some(path) => {
                debug!(path = %path.display(), "loading config");
                GhostinkConfig::load_from(path)
                    .with_context(|| format!("Failed to load config from {}", path.display()))?
            }
            None => match GhostinkConfig::load() {
                Ok(config) => config,
                Err(ConfigError::NoConfigDir) => {
                    warn!("no home directory found, using built-in defaults");
                    GhostinkConfig::default()
                }
                Err(e) => return Err(e).context("Failed to load config"),
            },
        };

        Self::new(config)
    }

    /// Picks the cipher name for a command.
    ///
    /// `requested` may be a cipher name or its 1-based number in the list.
    /// Without it, the configured default is used, then the built-in default,
    /// then the first registered cipher.
    pub fn resolve_cipher_name(&self, requested: Option<&str>) -> Result<String> {
        if let Some(requested) = requested {
            if let Ok(cipher) = self.registry.resolve(requested) {
                return Ok(cipher.name().to_string());
            }
            if let Some(cipher) = requested
                .parse::<usize>()
                .ok()
                .and_then(|n| n.checked_sub(1))
                .and_then(|idx| self.registry.get(idx))
            {
                return Ok(cipher.name().to_string());
            }
            anyhow::bail!(
                "Unknown cipher: '{}'. Run `ghostink ciphers` to list them.",
                requested
            );
        }

        let name = self
            .config
            .default_cipher
            .as_deref()
            .or_else(|| self.registry.resolve(DEFAULT_CIPHER).ok().map(|c| c.name()))
            .or_else(|| self.registry.names().next())
            .context("No ciphers registered")?;
        Ok(name.to_string())
    }

    /// Picks the prefix character for an encode.
    pub fn resolve_prefix(&self, requested: Option<&str>) -> Result<char> {
        if let Some(requested) = requested {
            return parse_prefix(requested)
                .with_context(|| format!("Invalid prefix '{}'", requested));
        }

        let configured = self
            .config
            .default_prefix_char()
            .context("Invalid default_prefix in config")?;
        Ok(configured.unwrap_or(DEFAULT_PREFIX))
    }
}
