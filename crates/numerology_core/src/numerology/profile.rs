//! All computed numerology values for one (name, date of birth) pair.

use super::digits::{birth_number, name_number};
use super::grid::{
    analyze, primary_grid, secondary_grid_from_numbers, AnalysisResult, PrimaryGrid,
    SecondaryGrid,
};
use serde::{Deserialize, Serialize};

/// Read-only bundle consumed by report renderers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NumerologyProfile {
    pub name: String,
    pub date_of_birth: String,
    pub primary_grid: PrimaryGrid,
    pub analysis: AnalysisResult,
    pub birth_number: u32,
    pub name_number: u32,
    pub secondary_grid: SecondaryGrid,
}

impl NumerologyProfile {
    /// Computes every derived value; pure and deterministic.
    pub fn compute(name: impl Into<String>, date_of_birth: impl Into<String>) -> Self {
        let name = name.into();
        let date_of_birth = date_of_birth.into();

        let primary_grid = primary_grid(&date_of_birth);
        let analysis = analyze(&primary_grid);
        let birth_number = birth_number(&date_of_birth);
        let name_number = name_number(&name);
        let secondary_grid = secondary_grid_from_numbers(birth_number, name_number);

        Self {
            name,
            date_of_birth,
            primary_grid,
            analysis,
            birth_number,
            name_number,
            secondary_grid,
        }
    }
}
