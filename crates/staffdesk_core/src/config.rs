//! External storage configuration.
//!
//! # Responsibility
//! - Define the recognized storage options `{endpoint, user, password}`.
//! - Load them from an optional TOML file with strict key checking.
//!
//! # Invariants
//! - Unknown configuration keys are rejected, never silently ignored.
//! - A missing configuration file falls back to defaults; a malformed one
//!   is an error.

use serde::Deserialize;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

const APP_DIR_NAME: &str = "staffdesk";
const DEFAULT_DB_FILE: &str = "staffdesk.sqlite3";
const CONFIG_FILE_NAME: &str = "config.toml";

/// Storage connection options supplied from outside the process.
///
/// `user` and `password` are recognized for credentialed engines; the
/// embedded engine accepts and ignores them (a warning is logged on open).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StorageConfig {
    /// Database location: a file path, or `:memory:` for an ephemeral store.
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    #[serde(default)]
    pub user: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            user: None,
            password: None,
        }
    }
}

impl StorageConfig {
    /// Config selecting an ephemeral in-memory database.
    pub fn in_memory() -> Self {
        Self {
            endpoint: crate::db::MEMORY_ENDPOINT.to_string(),
            user: None,
            password: None,
        }
    }

    /// Reads and parses the TOML file at `path`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Like [`StorageConfig::load`], but an absent file yields the defaults.
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }
}

/// Conventional location of the user's configuration file.
///
/// Returns `None` when the platform config directory cannot be determined.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR_NAME).join(CONFIG_FILE_NAME))
}

fn default_endpoint() -> String {
    let base = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    base.join(APP_DIR_NAME)
        .join(DEFAULT_DB_FILE)
        .to_string_lossy()
        .into_owned()
}

#[derive(Debug)]
pub enum ConfigError {
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Read { path, source } => write!(
                f,
                "failed to read configuration file `{}`: {source}",
                path.display()
            ),
            Self::Parse { path, source } => write!(
                f,
                "failed to parse configuration file `{}`: {source}",
                path.display()
            ),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Read { source, .. } => Some(source),
            Self::Parse { source, .. } => Some(source),
        }
    }
}
