//! User configuration stored in `~/.ghostink/config.toml`.
//!
//! The file is optional. It can pick a default cipher and prefix, and add
//! custom alphabets on top of the built-in ones:
//!
//! ```toml
//! default_cipher = "Ternary Hush (base3)"
//! default_prefix = "U+2764"
//!
//! [[cipher]]
//! name = "Ternary Hush (base3)"
//! codepoints = ["U+200B", "U+200C", "U+200D"]
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::cipher::{parse_prefix, Cipher, CipherError, CipherRegistry};

/// Name of the config file inside the config directory.
pub const CONFIG_FILE: &str = "config.toml";

/// Errors that can occur when loading or saving configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Config directory not found. Unable to determine home directory.")]
    NoConfigDir,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("TOML serialize error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("Invalid cipher configuration: {0}")]
    Cipher(#[from] CipherError),
}

/// A custom alphabet as written in the config file.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct CipherSpec {
    /// Unique cipher name shown in menus.
    pub name: String,

    /// Alphabet in `U+XXXX` notation; position is the digit value.
    pub codepoints: Vec<String>,
}

impl CipherSpec {
    pub fn new(name: impl Into<String>, codepoints: &[&str]) -> Self {
        Self {
            name: name.into(),
            codepoints: codepoints.iter().map(|cp| cp.to_string()).collect(),
        }
    }

    /// Validates the spec and builds the cipher.
    pub fn to_cipher(&self) -> Result<Cipher, CipherError> {
        Cipher::from_codepoints(self.name.clone(), &self.codepoints)
    }
}

/// Contents of `config.toml`.
#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq, Eq)]
pub struct GhostinkConfig {
    /// Cipher used when none is given on the command line.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_cipher: Option<String>,

    /// Prefix used when none is given (`U+XXXX` or a literal character).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_prefix: Option<String>,

    /// Extra ciphers, registered after the built-in ones in file order.
    #[serde(default, rename = "cipher", skip_serializing_if = "Vec::is_empty")]
    pub ciphers: Vec<CipherSpec>,
}

impl GhostinkConfig {
    /// Loads the configuration from the default location.
    ///
    /// A missing file yields the default configuration.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path()?)
    }

    /// Loads the configuration from `path`, or defaults if it does not exist.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        let config: GhostinkConfig = toml::from_str(&content)?;
        Ok(config)
    }

    /// Writes the configuration to `path`, creating parent directories.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mut perms = fs::metadata(path)?.permissions();
            perms.set_mode(0o600);
            fs::set_permissions(path, perms)?;
        }

        Ok(())
    }

    /// Path of the default config file.
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        Ok(get_config_dir()?.join(CONFIG_FILE))
    }

    /// Builds the registry: built-in ciphers first, then the custom ones.
    ///
    /// Also checks that `default_cipher`, if set, names a registered cipher.
    pub fn build_registry(&self) -> Result<CipherRegistry, ConfigError> {
        let mut registry = CipherRegistry::builtin();
        for spec in &self.ciphers {
            registry.register(spec.to_cipher()?)?;
        }

        if let Some(name) = &self.default_cipher {
            registry.resolve(name)?;
        }

        Ok(registry)
    }

    /// Parsed `default_prefix`, if one is configured.
    pub fn default_prefix_char(&self) -> Result<Option<char>, ConfigError> {
        self.default_prefix
            .as_deref()
            .map(parse_prefix)
            .transpose()
            .map_err(ConfigError::from)
    }
}

/// Returns `~/.ghostink`.
pub fn get_config_dir() -> Result<PathBuf, ConfigError> {
    dirs::home_dir()
        .map(|home| home.join(".ghostink"))
        .ok_or(ConfigError::NoConfigDir)
}
