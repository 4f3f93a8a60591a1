//! Core domain logic for the numerology dashboard.
//! Numerology computation, remedy persistence and report assembly live here;
//! presentation layers only call into this crate.

pub mod backup;
pub mod config;
pub mod db;
pub mod logging;
pub mod logo;
pub mod model;
pub mod numerology;
pub mod repo;
pub mod service;
pub mod startup;

pub use backup::{backup_assets, BackupError, BackupReport};
pub use config::{AppConfig, ConfigError};
pub use logging::{default_log_level, init_logging, logging_status};
pub use logo::{set_user_logo, LogoError};
pub use model::remedy::{
    parse_remedy_number, GridType, NewRemedy, RemedyId, RemedyRecord, RemedyValidationError,
};
pub use numerology::daily::{daily_insight, DailyInsight};
pub use numerology::digits::{birth_number, letter_to_digit, name_number, reduce_digits};
pub use numerology::grid::{
    analyze, primary_grid, secondary_grid, AnalysisResult, CellStatus, PrimaryGrid,
    SecondaryGrid,
};
pub use numerology::profile::NumerologyProfile;
pub use numerology::remedy_table::default_remedy;
pub use repo::remedy_repo::{RemedyRepository, RepoError, RepoResult, SqliteRemedyRepository};
pub use service::remedy_service::RemedyService;
pub use service::report_service::{CellRemedy, ReportDocument, ReportError, ReportService};
pub use startup::{open_store, start, Started, StartupError};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::{core_version, ping};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
