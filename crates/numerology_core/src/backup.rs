//! Timestamped copies of the remedy store and the user logo.
//!
//! # Responsibility
//! - Copy the current store file and user logo into the backup directory,
//!   suffixed with a `YYYYMMDD_HHMMSS` timestamp.
//!
//! # Invariants
//! - Existing backups are never overwritten and never pruned.
//! - Missing source files are skipped, not treated as errors.
//! - The store is copied before the logo.

use crate::config::AppConfig;
use chrono::NaiveDateTime;
use log::info;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

const BACKUP_TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S";
const LOGO_BACKUP_STEM: &str = "user_logo";

/// Files written by one backup run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BackupReport {
    pub database: Option<PathBuf>,
    pub logo: Option<PathBuf>,
}

/// IO failure while backing up one file.
#[derive(Debug)]
pub struct BackupError {
    pub path: PathBuf,
    pub source: std::io::Error,
}

impl Display for BackupError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "backup of `{}` failed: {}", self.path.display(), self.source)
    }
}

impl Error for BackupError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(&self.source)
    }
}

/// Backs up the store and user logo, stamping file names with `now`.
///
/// # Side effects
/// - Creates the backup directory when absent.
/// - Emits a `backup` logging event on success.
pub fn backup_assets(config: &AppConfig, now: NaiveDateTime) -> Result<BackupReport, BackupError> {
    let backup_dir = config.backup_dir();
    std::fs::create_dir_all(&backup_dir).map_err(|err| BackupError {
        path: backup_dir.clone(),
        source: err,
    })?;

    let stamp = now.format(BACKUP_TIMESTAMP_FORMAT).to_string();
    let mut report = BackupReport::default();

    let db = config.db_path();
    if db.exists() {
        let stem = file_stem(&db);
        report.database = Some(copy_stamped(&db, &backup_dir, &stem, &stamp)?);
    }

    let logo = config.user_logo_path();
    if logo.exists() {
        report.logo = Some(copy_stamped(&logo, &backup_dir, LOGO_BACKUP_STEM, &stamp)?);
    }

    info!(
        "event=backup module=backup status=ok database={} logo={}",
        report.database.is_some(),
        report.logo.is_some()
    );
    Ok(report)
}

fn copy_stamped(
    source: &Path,
    backup_dir: &Path,
    stem: &str,
    stamp: &str,
) -> Result<PathBuf, BackupError> {
    let extension = source
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| format!(".{ext}"))
        .unwrap_or_default();

    let target = unused_path(backup_dir, &format!("{stem}_{stamp}"), &extension);
    std::fs::copy(source, &target).map_err(|err| BackupError {
        path: source.to_path_buf(),
        source: err,
    })?;
    Ok(target)
}

/// Picks `{base}{ext}`, or `{base}_{n}{ext}` when earlier runs used the name.
fn unused_path(dir: &Path, base: &str, extension: &str) -> PathBuf {
    let first = dir.join(format!("{base}{extension}"));
    if !first.exists() {
        return first;
    }

    (1u32..)
        .map(|n| dir.join(format!("{base}_{n}{extension}")))
        .find(|candidate| !candidate.exists())
        .unwrap_or(first)
}

fn file_stem(path: &Path) -> String {
    path.file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or("backup")
        .to_string()
}
