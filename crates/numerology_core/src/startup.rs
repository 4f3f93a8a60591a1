//! Process startup sequence.
//!
//! # Responsibility
//! - Prepare the data directory and seed the store from a shipped copy.
//! - Run the best-effort startup backup.
//! - Open the remedy store with migrations applied, with or without the
//!   backup step.
//!
//! # Invariants
//! - Backup failures are logged and never abort startup.
//! - An existing user store is never replaced by the shipped copy.

use crate::backup::{backup_assets, BackupReport};
use crate::config::AppConfig;
use crate::db::{open_db, DbError};
use chrono::NaiveDateTime;
use log::{info, warn};
use rusqlite::Connection;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

/// Open store plus what the startup backup produced.
#[derive(Debug)]
pub struct Started {
    pub conn: Connection,
    /// `None` when the backup failed.
    pub backup: Option<BackupReport>,
    /// Whether the store was seeded from the shipped copy in this run.
    pub seeded: bool,
}

#[derive(Debug)]
pub enum StartupError {
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    Db(DbError),
}

impl Display for StartupError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "startup io error at `{}`: {source}", path.display())
            }
            Self::Db(err) => write!(f, "{err}"),
        }
    }
}

impl Error for StartupError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Db(err) => Some(err),
        }
    }
}

impl From<DbError> for StartupError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

/// Runs the startup sequence; `now` stamps backup file names.
pub fn start(config: &AppConfig, now: NaiveDateTime) -> Result<Started, StartupError> {
    let seeded = prepare_data_dir(config)?;

    let backup = match backup_assets(config, now) {
        Ok(report) => Some(report),
        Err(err) => {
            warn!("event=backup module=startup status=error error={err}");
            None
        }
    };

    let conn = open_db(config.db_path())?;
    info!(
        "event=startup module=startup status=ok seeded={} backup_ok={}",
        seeded,
        backup.is_some()
    );

    Ok(Started {
        conn,
        backup,
        seeded,
    })
}

/// Opens the store for read-only use cases without writing a backup.
///
/// The data directory is still prepared and seeded so a later `start`
/// sees the same store.
pub fn open_store(config: &AppConfig) -> Result<Connection, StartupError> {
    let seeded = prepare_data_dir(config)?;
    let conn = open_db(config.db_path())?;
    info!("event=store_open module=startup status=ok seeded={seeded}");
    Ok(conn)
}

fn prepare_data_dir(config: &AppConfig) -> Result<bool, StartupError> {
    std::fs::create_dir_all(&config.data_dir).map_err(|err| StartupError::Io {
        path: config.data_dir.clone(),
        source: err,
    })?;
    seed_from_shipped(config)
}

fn seed_from_shipped(config: &AppConfig) -> Result<bool, StartupError> {
    let db_path = config.db_path();
    let Some(shipped) = config.shipped_db_path.as_ref() else {
        return Ok(false);
    };
    if db_path.exists() || !shipped.exists() {
        return Ok(false);
    }

    std::fs::copy(shipped, &db_path).map_err(|err| StartupError::Io {
        path: shipped.clone(),
        source: err,
    })?;
    info!("event=db_seed module=startup status=ok");
    Ok(true)
}
