use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid console settings: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("I/O error reading {path}: {error}")]
    Io {
        path: PathBuf,
        error: std::io::Error,
    },
}

/// Console preferences read from a TOML file.
///
/// ```toml
/// polling = true
/// history_limit = 500
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConsoleSettings {
    /// Refresh autocomplete data after every successful run.
    pub polling: bool,
    /// Maximum number of requests kept in history.
    pub history_limit: usize,
}

impl Default for ConsoleSettings {
    fn default() -> Self {
        Self {
            polling: true,
            history_limit: 500,
        }
    }
}

impl ConsoleSettings {
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|error| ConfigError::Io {
            path: path.to_path_buf(),
            error,
        })?;
        Self::from_toml_str(&text)
    }
}
