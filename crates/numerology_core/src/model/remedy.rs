//! Remedy domain model.
//!
//! # Responsibility
//! - Define the user-authored remedy record and its grid type.
//! - Validate user input before it reaches persistence.
//!
//! # Invariants
//! - `number` is always in `1..=9`.
//! - `text` is non-blank on every write; `category` is never validated.
//! - `id` is assigned by the store and never reused.
//!
//! # See also
//! - `repo::remedy_repo` for persistence.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Store-assigned identifier of a remedy row.
pub type RemedyId = i64;

/// Lowest remedy number.
pub const MIN_REMEDY_NUMBER: u8 = 1;
/// Highest remedy number.
pub const MAX_REMEDY_NUMBER: u8 = 9;

/// Which grid a remedy is attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GridType {
    /// Birth date digit occurrence grid ("Lo Shu").
    Primary,
    /// Derived grid from birth and name numbers ("Vedic").
    Secondary,
}

impl GridType {
    /// All grid types in store sort order.
    pub const ALL: [GridType; 2] = [GridType::Primary, GridType::Secondary];

    /// Label persisted in `remedies.grid_type`.
    ///
    /// Matches rows written by earlier dashboard releases.
    pub fn as_db_str(self) -> &'static str {
        match self {
            Self::Primary => "LoShu",
            Self::Secondary => "Vedic",
        }
    }

    /// Parses persisted labels as well as user-facing names.
    pub fn parse(value: &str) -> Result<Self, RemedyValidationError> {
        match value.trim().to_ascii_lowercase().as_str() {
            "loshu" | "lo_shu" | "lo-shu" | "primary" => Ok(Self::Primary),
            "vedic" | "secondary" => Ok(Self::Secondary),
            _ => Err(RemedyValidationError::UnknownGridType(value.to_string())),
        }
    }
}

impl Display for GridType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_db_str())
    }
}

/// Persisted remedy row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemedyRecord {
    pub id: RemedyId,
    pub number: u8,
    pub grid_type: GridType,
    /// Short label, may be empty.
    pub category: String,
    pub text: String,
}

impl RemedyRecord {
    /// Validates invariants shared by persisted and new rows.
    pub fn validate(&self) -> Result<(), RemedyValidationError> {
        validate_number(i64::from(self.number))?;
        validate_text(&self.text)
    }
}

/// Input for creating a remedy; the store assigns the id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewRemedy {
    pub number: u8,
    pub grid_type: GridType,
    pub category: String,
    pub text: String,
}

impl NewRemedy {
    /// Builds a new remedy, trimming `category` and `text`.
    pub fn new(
        number: u8,
        grid_type: GridType,
        category: impl Into<String>,
        text: impl Into<String>,
    ) -> Self {
        Self {
            number,
            grid_type,
            category: category.into().trim().to_string(),
            text: text.into().trim().to_string(),
        }
    }

    /// Checks number range and required text.
    pub fn validate(&self) -> Result<(), RemedyValidationError> {
        validate_number(i64::from(self.number))?;
        validate_text(&self.text)
    }
}

/// Parses raw user input into a remedy number in `1..=9`.
pub fn parse_remedy_number(input: &str) -> Result<u8, RemedyValidationError> {
    let trimmed = input.trim();
    let value = trimmed
        .parse::<i64>()
        .map_err(|_| RemedyValidationError::NotANumber(trimmed.to_string()))?;
    validate_number(value)?;
    // In range 1..=9 after validation.
    Ok(value as u8)
}

/// Ensures `value` is in `1..=9`.
pub fn validate_number(value: i64) -> Result<(), RemedyValidationError> {
    if (i64::from(MIN_REMEDY_NUMBER)..=i64::from(MAX_REMEDY_NUMBER)).contains(&value) {
        Ok(())
    } else {
        Err(RemedyValidationError::NumberOutOfRange(value))
    }
}

/// Ensures remedy text is not blank.
pub fn validate_text(text: &str) -> Result<(), RemedyValidationError> {
    if text.trim().is_empty() {
        Err(RemedyValidationError::EmptyText)
    } else {
        Ok(())
    }
}

/// Input validation failure; never accompanied by a state change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RemedyValidationError {
    NumberOutOfRange(i64),
    NotANumber(String),
    EmptyText,
    UnknownGridType(String),
}

impl Display for RemedyValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NumberOutOfRange(value) => {
                write!(f, "remedy number {value} is outside 1..=9")
            }
            Self::NotANumber(value) => write!(f, "enter a valid number, got `{value}`"),
            Self::EmptyText => write!(f, "remedy text is required"),
            Self::UnknownGridType(value) => {
                write!(f, "unknown grid type `{value}`; expected LoShu|Vedic")
            }
        }
    }
}

impl Error for RemedyValidationError {}
