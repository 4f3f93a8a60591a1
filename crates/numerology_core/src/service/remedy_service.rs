//! Remedy use-case service.
//!
//! # Responsibility
//! - Provide stable CRUD entry points for presentation callers.
//! - Compose default remedy text with user-authored entries.
//!
//! # Invariants
//! - Service APIs never bypass repository validation.
//! - Composed text lists user entries in store order, one per line.

use crate::model::remedy::{validate_number, GridType, NewRemedy, RemedyId, RemedyRecord};
use crate::numerology::remedy_table::default_remedy;
use crate::repo::remedy_repo::{RemedyRepository, RepoResult};

/// Use-case service wrapper over a remedy repository.
pub struct RemedyService<R: RemedyRepository> {
    repo: R,
}

impl<R: RemedyRepository> RemedyService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Creates a remedy from raw user fields.
    ///
    /// # Contract
    /// - `category` and `text` are trimmed.
    /// - Blank `text` or `number` outside `1..=9` fails without inserting.
    /// - Returns the store-assigned id.
    pub fn create(
        &self,
        number: u8,
        grid_type: GridType,
        category: &str,
        text: &str,
    ) -> RepoResult<RemedyId> {
        self.repo
            .create(&NewRemedy::new(number, grid_type, category, text))
    }

    /// Gets one remedy by id.
    pub fn get(&self, id: RemedyId) -> RepoResult<Option<RemedyRecord>> {
        self.repo.get(id)
    }

    /// Lists every remedy ordered by grid type, number, then id.
    pub fn list_all(&self) -> RepoResult<Vec<RemedyRecord>> {
        self.repo.list_all()
    }

    /// Lists remedies for one `(number, grid_type)` cell in store order.
    pub fn list_for(&self, number: u8, grid_type: GridType) -> RepoResult<Vec<RemedyRecord>> {
        self.repo.list_for(number, grid_type)
    }

    /// Replaces the text of an existing remedy.
    ///
    /// Returns `NotFound` for an absent id; the store is left unchanged.
    pub fn update_text(&self, id: RemedyId, text: &str) -> RepoResult<()> {
        self.repo.update_text(id, text)
    }

    /// Deletes a remedy; returns `NotFound` for an absent id.
    pub fn delete(&self, id: RemedyId) -> RepoResult<()> {
        self.repo.delete(id)
    }

    /// Builds the display text for one grid cell.
    ///
    /// Starts from the built-in default remedy, prefixes
    /// `"{status} | Recommended: "` when a status label is given, then
    /// appends `"[{category}] {text}"` per stored remedy on its own line.
    pub fn compose_text(
        &self,
        number: u8,
        grid_type: GridType,
        status_label: Option<&str>,
    ) -> RepoResult<String> {
        validate_number(i64::from(number))?;
        let default = default_remedy(number).unwrap_or_default();

        let mut text = match status_label {
            Some(status) => format!("{status} | Recommended: {default}"),
            None => default.to_string(),
        };

        for remedy in self.repo.list_for(number, grid_type)? {
            text.push('\n');
            text.push_str(&format!("[{}] {}", remedy.category, remedy.text));
        }

        Ok(text)
    }
}
