//! Application path layout and persisted settings.
//!
//! # Responsibility
//! - Describe where the store, backups and logos live.
//! - Load/save settings as pretty JSON, falling back to defaults.
//!
//! # Invariants
//! - All paths are derived from `data_dir`; nothing reads process globals
//!   after construction.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

const DEFAULT_DATA_DIR_NAME: &str = "NumerologyDashboard";

/// Paths and settings passed explicitly to startup, backup and logo code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Root directory for user data.
    pub data_dir: PathBuf,

    #[serde(default = "default_db_file_name")]
    pub db_file_name: String,

    #[serde(default = "default_backup_dir_name")]
    pub backup_dir_name: String,

    #[serde(default = "default_user_logo_file_name")]
    pub user_logo_file_name: String,

    #[serde(default = "default_log_dir_name")]
    pub log_dir_name: String,

    /// Logo shipped with the application, used when no user logo exists.
    #[serde(default)]
    pub default_logo_path: Option<PathBuf>,

    /// Pre-filled store copied into `data_dir` when the user store is missing.
    #[serde(default)]
    pub shipped_db_path: Option<PathBuf>,

    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_db_file_name() -> String {
    "numerology_remedies.db".to_string()
}
fn default_backup_dir_name() -> String {
    "backups".to_string()
}
fn default_user_logo_file_name() -> String {
    "user_logo.png".to_string()
}
fn default_log_dir_name() -> String {
    "logs".to_string()
}
fn default_log_level() -> String {
    crate::logging::default_log_level().to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::for_data_dir(default_data_dir())
    }
}

impl AppConfig {
    /// Builds a configuration rooted at `data_dir` with default file names.
    pub fn for_data_dir(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            db_file_name: default_db_file_name(),
            backup_dir_name: default_backup_dir_name(),
            user_logo_file_name: default_user_logo_file_name(),
            log_dir_name: default_log_dir_name(),
            default_logo_path: None,
            shipped_db_path: None,
            log_level: default_log_level(),
        }
    }

    /// Loads settings from `path`; a missing file yields defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path).map_err(|err| ConfigError::Io {
            path: path.to_path_buf(),
            source: err,
        })?;
        serde_json::from_str(&content).map_err(|err| ConfigError::Parse {
            path: path.to_path_buf(),
            source: err,
        })
    }

    /// Writes settings to `path` as pretty JSON.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let content = serde_json::to_string_pretty(self).map_err(|err| ConfigError::Parse {
            path: path.to_path_buf(),
            source: err,
        })?;
        std::fs::write(path, content).map_err(|err| ConfigError::Io {
            path: path.to_path_buf(),
            source: err,
        })
    }

    pub fn db_path(&self) -> PathBuf {
        self.data_dir.join(&self.db_file_name)
    }

    pub fn backup_dir(&self) -> PathBuf {
        self.data_dir.join(&self.backup_dir_name)
    }

    pub fn user_logo_path(&self) -> PathBuf {
        self.data_dir.join(&self.user_logo_file_name)
    }

    pub fn log_dir(&self) -> PathBuf {
        self.data_dir.join(&self.log_dir_name)
    }

    /// Logo to display: the user logo when present, else the shipped default.
    pub fn active_logo_path(&self) -> Option<PathBuf> {
        let user_logo = self.user_logo_path();
        if user_logo.exists() {
            Some(user_logo)
        } else {
            self.default_logo_path.clone()
        }
    }
}

/// `$HOME/NumerologyDashboard`, or `./NumerologyDashboard` without a home.
pub fn default_data_dir() -> PathBuf {
    std::env::var_os("HOME")
        .or_else(|| std::env::var_os("USERPROFILE"))
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."))
        .join(DEFAULT_DATA_DIR_NAME)
}

/// Failure to read, parse or write a settings file.
#[derive(Debug)]
pub enum ConfigError {
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "config file `{}` io error: {source}", path.display())
            }
            Self::Parse { path, source } => {
                write!(f, "config file `{}` is invalid: {source}", path.display())
            }
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Parse { source, .. } => Some(source),
        }
    }
}
