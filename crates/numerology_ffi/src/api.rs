//! FFI use-case API for Flutter-facing calls.
//!
//! # Responsibility
//! - Expose request/response functions for the dashboard UI via FRB.
//! - Keep error semantics simple: every call returns an envelope.
//!
//! # Invariants
//! - Exported functions must not panic across the FFI boundary.
//! - Data-touching calls receive the data directory explicitly; no process
//!   globals besides the logger.

use chrono::Local;
use log::warn;
use numerology_core::db::open_db;
use numerology_core::{
    core_version as core_version_inner, daily_insight as daily_insight_inner,
    init_logging as init_logging_inner, parse_remedy_number, ping as ping_inner,
    set_user_logo, start, AppConfig, GridType, RemedyRecord, RemedyService, ReportService,
    SqliteRemedyRepository,
};
use std::path::PathBuf;

/// Characters of remedy text shown in list rows.
const LIST_PREVIEW_CHARS: usize = 30;

/// Minimal health-check API for FRB smoke integration.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Returns an empty string on success and the error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), PathBuf::from(log_dir.trim())) {
        Ok(()) => String::new(),
        Err(err) => err,
    }
}

/// Generic action response envelope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionResponse {
    /// Whether the operation succeeded.
    pub ok: bool,
    /// Created remedy id, when applicable.
    pub remedy_id: Option<i64>,
    /// Human-readable message for UI display.
    pub message: String,
}

impl ActionResponse {
    fn success(message: impl Into<String>, remedy_id: Option<i64>) -> Self {
        Self {
            ok: true,
            remedy_id,
            message: message.into(),
        }
    }

    fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            remedy_id: None,
            message: message.into(),
        }
    }
}

/// One row of the remedy management list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemedyListItem {
    pub id: i64,
    pub number: u8,
    /// Persisted grid label (`LoShu|Vedic`).
    pub grid_type: String,
    pub category: String,
    pub text: String,
    /// `ID:{id} | Num:{n} | {grid} | {category} | {first 30 chars}...`
    pub summary: String,
}

/// Remedy list envelope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemedyListResponse {
    pub items: Vec<RemedyListItem>,
    pub message: String,
}

/// One grid cell of a generated report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportCell {
    pub number: u8,
    /// Primary grid occurrence count or secondary grid value.
    pub value: u32,
    /// Analysis status label; empty for secondary cells.
    pub status: String,
    /// Composed remedy text.
    pub text: String,
}

/// Report envelope consumed by the UI renderer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportResponse {
    pub ok: bool,
    pub message: String,
    pub birth_number: u32,
    pub name_number: u32,
    pub primary: Vec<ReportCell>,
    pub secondary: Vec<ReportCell>,
}

impl ReportResponse {
    fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            message: message.into(),
            birth_number: 0,
            name_number: 0,
            primary: Vec::new(),
            secondary: Vec::new(),
        }
    }
}

/// Daily insight envelope; `ok=false` when no birth date was given.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DailyInsightResponse {
    pub ok: bool,
    pub lucky_number: u8,
    pub lucky_color: String,
    pub message: String,
}

/// Runs the startup sequence: seed, best-effort backup, store open.
#[flutter_rust_bridge::frb(sync)]
pub fn app_start(data_dir: String) -> ActionResponse {
    let config = config_for(&data_dir);
    match start(&config, Local::now().naive_local()) {
        Ok(started) if started.backup.is_some() => ActionResponse::success("Started.", None),
        Ok(_) => ActionResponse::success("Started; backup skipped, see logs.", None),
        Err(err) => ActionResponse::failure(format!("app_start failed: {err}")),
    }
}

/// Adds a remedy from raw form fields.
///
/// `number` is the text typed by the user; non-numeric input is rejected.
#[flutter_rust_bridge::frb(sync)]
pub fn remedy_create(
    data_dir: String,
    number: String,
    grid_type: String,
    category: String,
    text: String,
) -> ActionResponse {
    let number = match parse_remedy_number(&number) {
        Ok(number) => number,
        Err(err) => return ActionResponse::failure(err.to_string()),
    };
    let grid_type = match GridType::parse(&grid_type) {
        Ok(grid_type) => grid_type,
        Err(err) => return ActionResponse::failure(err.to_string()),
    };

    match with_remedy_service(&data_dir, |service| {
        service.create(number, grid_type, &category, &text)
    }) {
        Ok(id) => ActionResponse::success("Remedy added", Some(id)),
        Err(err) => ActionResponse::failure(format!("remedy_create failed: {err}")),
    }
}

/// Lists every remedy ordered by grid type, number, then id.
#[flutter_rust_bridge::frb(sync)]
pub fn remedy_list_all(data_dir: String) -> RemedyListResponse {
    match with_remedy_service(&data_dir, |service| service.list_all()) {
        Ok(records) => {
            let items = records.into_iter().map(to_list_item).collect::<Vec<_>>();
            let message = format!("{} remedy(ies).", items.len());
            RemedyListResponse { items, message }
        }
        Err(err) => RemedyListResponse {
            items: Vec::new(),
            message: format!("remedy_list_all failed: {err}"),
        },
    }
}

/// Replaces the text of a remedy; absent ids are reported, not ignored.
#[flutter_rust_bridge::frb(sync)]
pub fn remedy_update_text(data_dir: String, id: i64, text: String) -> ActionResponse {
    match with_remedy_service(&data_dir, |service| service.update_text(id, &text)) {
        Ok(()) => ActionResponse::success("Remedy updated", Some(id)),
        Err(err) => ActionResponse::failure(format!("remedy_update_text failed: {err}")),
    }
}

/// Deletes a remedy; absent ids are reported, not ignored.
#[flutter_rust_bridge::frb(sync)]
pub fn remedy_delete(data_dir: String, id: i64) -> ActionResponse {
    match with_remedy_service(&data_dir, |service| service.delete(id)) {
        Ok(()) => ActionResponse::success("Remedy deleted", Some(id)),
        Err(err) => ActionResponse::failure(format!("remedy_delete failed: {err}")),
    }
}

/// Computes the report for a name and date of birth.
#[flutter_rust_bridge::frb(sync)]
pub fn report_generate(data_dir: String, name: String, date_of_birth: String) -> ReportResponse {
    let built = with_remedy_service(&data_dir, |service| {
        ReportService::new(service)
            .build(&name, &date_of_birth)
            .map_err(|err| err.to_string())
    });

    let report = match built {
        Ok(report) => report,
        Err(err) => return ReportResponse::failure(format!("report_generate failed: {err}")),
    };

    let profile = &report.profile;
    let primary = report
        .primary_remedies
        .iter()
        .zip(profile.primary_grid.iter())
        .map(|(cell, (_, count))| ReportCell {
            number: cell.number,
            value: count,
            status: cell
                .status
                .map(|status| status.label().to_string())
                .unwrap_or_default(),
            text: cell.text.clone(),
        })
        .collect();
    let secondary = report
        .secondary_remedies
        .iter()
        .zip(profile.secondary_grid.iter())
        .map(|(cell, (_, value))| ReportCell {
            number: cell.number,
            value,
            status: String::new(),
            text: cell.text.clone(),
        })
        .collect();

    ReportResponse {
        ok: true,
        message: "Report generated.".to_string(),
        birth_number: profile.birth_number,
        name_number: profile.name_number,
        primary,
        secondary,
    }
}

/// Today's lucky number and color for a date of birth.
#[flutter_rust_bridge::frb(sync)]
pub fn daily_insight(date_of_birth: String) -> DailyInsightResponse {
    match daily_insight_inner(&date_of_birth, Local::now().date_naive()) {
        Some(insight) => DailyInsightResponse {
            ok: true,
            message: format!(
                "Today's Lucky Number: {}\nLucky Color: {}",
                insight.lucky_number, insight.lucky_color
            ),
            lucky_number: insight.lucky_number,
            lucky_color: insight.lucky_color,
        },
        None => DailyInsightResponse {
            ok: false,
            lucky_number: 0,
            lucky_color: String::new(),
            message: "Enter a date of birth.".to_string(),
        },
    }
}

/// Replaces the user logo with the image at `source_path`.
#[flutter_rust_bridge::frb(sync)]
pub fn logo_set(data_dir: String, source_path: String) -> ActionResponse {
    let config = config_for(&data_dir);
    match set_user_logo(&config, PathBuf::from(source_path.trim()).as_path()) {
        Ok(_) => ActionResponse::success("Logo updated successfully!", None),
        Err(err) => {
            warn!("event=logo_set module=ffi status=error error={err}");
            ActionResponse::failure(format!("logo_set failed: {err}"))
        }
    }
}

fn config_for(data_dir: &str) -> AppConfig {
    AppConfig::for_data_dir(data_dir.trim())
}

fn with_remedy_service<T, E: std::fmt::Display>(
    data_dir: &str,
    f: impl FnOnce(&RemedyService<SqliteRemedyRepository<'_>>) -> Result<T, E>,
) -> Result<T, String> {
    let config = config_for(data_dir);
    std::fs::create_dir_all(&config.data_dir)
        .map_err(|err| format!("data dir create failed: {err}"))?;
    let conn = open_db(config.db_path()).map_err(|err| format!("store open failed: {err}"))?;
    let service = RemedyService::new(SqliteRemedyRepository::new(&conn));
    f(&service).map_err(|err| err.to_string())
}

fn to_list_item(record: RemedyRecord) -> RemedyListItem {
    let preview: String = record.text.chars().take(LIST_PREVIEW_CHARS).collect();
    let summary = format!(
        "ID:{} | Num:{} | {} | {} | {}...",
        record.id, record.number, record.grid_type, record.category, preview
    );
    RemedyListItem {
        id: record.id,
        number: record.number,
        grid_type: record.grid_type.as_db_str().to_string(),
        category: record.category,
        text: record.text,
        summary,
    }
}

#[cfg(test)]
mod tests {
    use super::{
        app_start, core_version, daily_insight, init_logging, logo_set, ping, remedy_create,
        remedy_delete, remedy_list_all, remedy_update_text, report_generate,
    };

    fn data_dir() -> (tempfile::TempDir, String) {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir
            .path()
            .to_str()
            .expect("temp dir should be valid UTF-8")
            .to_string();
        (dir, path)
    }

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }

    #[test]
    fn init_logging_rejects_empty_log_dir() {
        let error = init_logging("info".to_string(), String::new());
        assert!(!error.is_empty());
    }

    #[test]
    fn init_logging_rejects_unsupported_level() {
        let error = init_logging("verbose".to_string(), "/tmp/logs".to_string());
        assert!(!error.is_empty());
    }

    #[test]
    fn app_start_creates_store() {
        let (_guard, dir) = data_dir();
        let response = app_start(dir.clone());
        assert!(response.ok, "{}", response.message);
        assert!(std::path::Path::new(&dir)
            .join("numerology_remedies.db")
            .exists());
    }

    #[test]
    fn remedy_crud_flow_through_envelopes() {
        let (_guard, dir) = data_dir();

        let created = remedy_create(
            dir.clone(),
            " 3 ".to_string(),
            "LoShu".to_string(),
            "Color".to_string(),
            "Wear yellow on Thursdays for luck".to_string(),
        );
        assert!(created.ok, "{}", created.message);
        let id = created.remedy_id.expect("created id");

        let listed = remedy_list_all(dir.clone());
        assert_eq!(listed.items.len(), 1);
        assert_eq!(listed.items[0].grid_type, "LoShu");
        assert_eq!(
            listed.items[0].summary,
            format!("ID:{id} | Num:3 | LoShu | Color | Wear yellow on Thursdays for l...")
        );

        let updated = remedy_update_text(dir.clone(), id, "Wear gold".to_string());
        assert!(updated.ok, "{}", updated.message);
        assert_eq!(remedy_list_all(dir.clone()).items[0].text, "Wear gold");

        let deleted = remedy_delete(dir.clone(), id);
        assert!(deleted.ok, "{}", deleted.message);
        assert!(remedy_list_all(dir.clone()).items.is_empty());

        let missing = remedy_delete(dir, id);
        assert!(!missing.ok);
        assert!(missing.message.contains("not found"));
    }

    #[test]
    fn remedy_create_rejects_non_numeric_number_and_blank_text() {
        let (_guard, dir) = data_dir();

        let not_number = remedy_create(
            dir.clone(),
            "seven".to_string(),
            "Vedic".to_string(),
            String::new(),
            "text".to_string(),
        );
        assert!(!not_number.ok);
        assert!(not_number.message.contains("valid number"));

        let blank = remedy_create(
            dir.clone(),
            "7".to_string(),
            "Vedic".to_string(),
            String::new(),
            "   ".to_string(),
        );
        assert!(!blank.ok);
        assert!(remedy_list_all(dir).items.is_empty());
    }

    #[test]
    fn report_generate_returns_all_cells() {
        let (_guard, dir) = data_dir();
        let report = report_generate(dir.clone(), "Asha".to_string(), "01011990".to_string());
        assert!(report.ok, "{}", report.message);
        assert_eq!(report.birth_number, 3);
        assert_eq!(report.name_number, 2);
        assert_eq!(report.primary.len(), 9);
        assert_eq!(report.primary[0].value, 3);
        assert_eq!(report.primary[0].status, "Repeated number – strong influence");
        assert_eq!(report.secondary[0].value, 7);
        assert!(report.secondary[0].status.is_empty());

        let missing = report_generate(dir, String::new(), "01011990".to_string());
        assert!(!missing.ok);
    }

    #[test]
    fn daily_insight_requires_birth_date() {
        assert!(!daily_insight(String::new()).ok);
        let insight = daily_insight("01011990".to_string());
        assert!(insight.ok);
        assert!((1..=9).contains(&insight.lucky_number));
        assert!(!insight.lucky_color.is_empty());
    }

    #[test]
    fn logo_set_rejects_unsupported_files() {
        let (_guard, dir) = data_dir();
        let response = logo_set(dir, "/tmp/logo.gif".to_string());
        assert!(!response.ok);
    }
}
