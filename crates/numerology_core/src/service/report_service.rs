//! Report document assembly.
//!
//! # Responsibility
//! - Compute the numerology profile for a name and date of birth.
//! - Compose remedy text for every primary and secondary grid cell.
//!
//! # Invariants
//! - Output contains no presentation state (timestamps, layout); identical
//!   inputs and store contents produce identical documents.
//! - Primary cells carry their analysis status label; secondary cells do not.

use crate::model::remedy::GridType;
use crate::numerology::grid::CellStatus;
use crate::numerology::profile::NumerologyProfile;
use crate::repo::remedy_repo::{RemedyRepository, RepoError};
use crate::service::remedy_service::RemedyService;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Composed remedy text for one grid cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellRemedy {
    pub number: u8,
    /// Analysis status; only set for primary grid cells.
    pub status: Option<CellStatus>,
    pub text: String,
}

/// Everything a renderer needs, without layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportDocument {
    pub profile: NumerologyProfile,
    pub primary_remedies: Vec<CellRemedy>,
    pub secondary_remedies: Vec<CellRemedy>,
}

/// Report assembly failure.
#[derive(Debug)]
pub enum ReportError {
    /// Name or date of birth was blank.
    MissingInput(&'static str),
    Repo(RepoError),
}

impl Display for ReportError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingInput(field) => write!(f, "{field} is required"),
            Self::Repo(err) => write!(f, "{err}"),
        }
    }
}

impl Error for ReportError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Repo(err) => Some(err),
            Self::MissingInput(_) => None,
        }
    }
}

impl From<RepoError> for ReportError {
    fn from(value: RepoError) -> Self {
        Self::Repo(value)
    }
}

/// Builds report documents on top of the remedy service.
pub struct ReportService<'svc, R: RemedyRepository> {
    remedies: &'svc RemedyService<R>,
}

impl<'svc, R: RemedyRepository> ReportService<'svc, R> {
    pub fn new(remedies: &'svc RemedyService<R>) -> Self {
        Self { remedies }
    }

    /// Builds the report for trimmed `name` and `date_of_birth`.
    pub fn build(&self, name: &str, date_of_birth: &str) -> Result<ReportDocument, ReportError> {
        let name = name.trim();
        let date_of_birth = date_of_birth.trim();
        if name.is_empty() {
            return Err(ReportError::MissingInput("name"));
        }
        if date_of_birth.is_empty() {
            return Err(ReportError::MissingInput("date of birth"));
        }

        let profile = NumerologyProfile::compute(name, date_of_birth);

        let primary_remedies = profile
            .analysis
            .iter()
            .map(|(number, status)| -> Result<CellRemedy, RepoError> {
                let text = self.remedies.compose_text(
                    number,
                    GridType::Primary,
                    Some(status.label()),
                )?;
                Ok(CellRemedy {
                    number,
                    status: Some(status),
                    text,
                })
            })
            .collect::<Result<Vec<_>, RepoError>>()?;

        let secondary_remedies = (1..=9u8)
            .map(|number| -> Result<CellRemedy, RepoError> {
                let text = self
                    .remedies
                    .compose_text(number, GridType::Secondary, None)?;
                Ok(CellRemedy {
                    number,
                    status: None,
                    text,
                })
            })
            .collect::<Result<Vec<_>, RepoError>>()?;

        Ok(ReportDocument {
            profile,
            primary_remedies,
            secondary_remedies,
        })
    }
}
