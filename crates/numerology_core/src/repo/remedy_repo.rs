//! Remedy repository contracts and SQLite implementation.
//!
//! # Responsibility
//! - Provide CRUD APIs over the `remedies` table.
//! - Keep SQL details inside the core persistence boundary.
//!
//! # Invariants
//! - Write paths validate input before any SQL mutation.
//! - `update_text`/`delete` on an absent id return `NotFound` and change nothing.
//! - `get` rejects invalid persisted state instead of masking it.
//! - `list_all` skips invalid persisted rows with a `warn` event naming the id,
//!   so legacy rows never hide the valid ones and stay deletable.
//! - `list_all` orders by grid type, number, then id; `list_for` by id.

use crate::db::DbError;
use crate::model::remedy::{
    validate_number, validate_text, GridType, NewRemedy, RemedyId, RemedyRecord,
    RemedyValidationError,
};
use log::{info, warn};
use rusqlite::{params, Connection, Row};
use std::error::Error;
use std::fmt::{Display, Formatter};

const REMEDY_SELECT_SQL: &str = "SELECT
    id,
    number,
    grid_type,
    category,
    text
FROM remedies";

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for remedy persistence and query operations.
#[derive(Debug)]
pub enum RepoError {
    Validation(RemedyValidationError),
    Db(DbError),
    NotFound(RemedyId),
    InvalidData(String),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::Db(err) => write!(f, "{err}"),
            Self::NotFound(id) => write!(f, "remedy not found: {id}"),
            Self::InvalidData(message) => write!(f, "invalid persisted remedy data: {message}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Db(err) => Some(err),
            Self::NotFound(_) => None,
            Self::InvalidData(_) => None,
        }
    }
}

impl From<RemedyValidationError> for RepoError {
    fn from(value: RemedyValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Repository interface for remedy CRUD operations.
pub trait RemedyRepository {
    fn create(&self, remedy: &NewRemedy) -> RepoResult<RemedyId>;
    fn get(&self, id: RemedyId) -> RepoResult<Option<RemedyRecord>>;
    fn list_all(&self) -> RepoResult<Vec<RemedyRecord>>;
    fn list_for(&self, number: u8, grid_type: GridType) -> RepoResult<Vec<RemedyRecord>>;
    fn update_text(&self, id: RemedyId, text: &str) -> RepoResult<()>;
    fn delete(&self, id: RemedyId) -> RepoResult<()>;
}

/// SQLite-backed remedy repository borrowing an open connection.
pub struct SqliteRemedyRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteRemedyRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }

    fn query_records(
        &self,
        sql: &str,
        params: impl rusqlite::Params,
    ) -> RepoResult<Vec<RemedyRecord>> {
        let mut stmt = self.conn.prepare(sql)?;
        let mut rows = stmt.query(params)?;
        let mut records = Vec::new();

        while let Some(row) = rows.next()? {
            records.push(parse_remedy_row(row)?);
        }

        Ok(records)
    }
}

impl RemedyRepository for SqliteRemedyRepository<'_> {
    fn create(&self, remedy: &NewRemedy) -> RepoResult<RemedyId> {
        remedy.validate()?;

        self.conn.execute(
            "INSERT INTO remedies (number, grid_type, category, text)
             VALUES (?1, ?2, ?3, ?4);",
            params![
                i64::from(remedy.number),
                remedy.grid_type.as_db_str(),
                remedy.category.as_str(),
                remedy.text.as_str(),
            ],
        )?;

        let id = self.conn.last_insert_rowid();
        info!(
            "event=remedy_create module=repo status=ok id={} number={} grid_type={}",
            id, remedy.number, remedy.grid_type
        );
        Ok(id)
    }

    fn get(&self, id: RemedyId) -> RepoResult<Option<RemedyRecord>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{REMEDY_SELECT_SQL} WHERE id = ?1;"))?;
        let mut rows = stmt.query([id])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_remedy_row(row)?));
        }

        Ok(None)
    }

    fn list_all(&self) -> RepoResult<Vec<RemedyRecord>> {
        let mut stmt = self.conn.prepare(&format!(
            "{REMEDY_SELECT_SQL} ORDER BY grid_type ASC, number ASC, id ASC;"
        ))?;
        let mut rows = stmt.query(params![])?;
        let mut records = Vec::new();

        while let Some(row) = rows.next()? {
            match parse_remedy_row(row) {
                Ok(record) => records.push(record),
                Err(RepoError::InvalidData(message)) => {
                    warn!("event=remedy_list module=repo status=skipped_invalid {message}");
                }
                Err(err) => return Err(err),
            }
        }

        Ok(records)
    }

    fn list_for(&self, number: u8, grid_type: GridType) -> RepoResult<Vec<RemedyRecord>> {
        self.query_records(
            &format!(
                "{REMEDY_SELECT_SQL}
                 WHERE number = ?1 AND grid_type = ?2
                 ORDER BY id ASC;"
            ),
            params![i64::from(number), grid_type.as_db_str()],
        )
    }

    fn update_text(&self, id: RemedyId, text: &str) -> RepoResult<()> {
        let text = text.trim();
        validate_text(text)?;

        let changed = self.conn.execute(
            "UPDATE remedies SET text = ?1 WHERE id = ?2;",
            params![text, id],
        )?;

        if changed == 0 {
            warn!("event=remedy_update module=repo status=not_found id={id}");
            return Err(RepoError::NotFound(id));
        }

        info!("event=remedy_update module=repo status=ok id={id}");
        Ok(())
    }

    fn delete(&self, id: RemedyId) -> RepoResult<()> {
        let changed = self
            .conn
            .execute("DELETE FROM remedies WHERE id = ?1;", [id])?;

        if changed == 0 {
            warn!("event=remedy_delete module=repo status=not_found id={id}");
            return Err(RepoError::NotFound(id));
        }

        info!("event=remedy_delete module=repo status=ok id={id}");
        Ok(())
    }
}

fn parse_remedy_row(row: &Row<'_>) -> RepoResult<RemedyRecord> {
    let id: RemedyId = row.get("id")?;

    let raw_number: i64 = row.get("number")?;
    validate_number(raw_number).map_err(|_| {
        RepoError::InvalidData(format!(
            "invalid number `{raw_number}` in remedies.number for id {id}"
        ))
    })?;

    let grid_text: String = row.get("grid_type")?;
    let grid_type = parse_grid_type(&grid_text).ok_or_else(|| {
        RepoError::InvalidData(format!(
            "invalid grid type `{grid_text}` in remedies.grid_type for id {id}"
        ))
    })?;

    Ok(RemedyRecord {
        id,
        // Range checked above.
        number: raw_number as u8,
        grid_type,
        category: row.get("category")?,
        text: row.get("text")?,
    })
}

fn parse_grid_type(value: &str) -> Option<GridType> {
    GridType::ALL
        .into_iter()
        .find(|grid_type| grid_type.as_db_str() == value)
}
