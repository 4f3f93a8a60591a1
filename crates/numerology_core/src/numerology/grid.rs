//! Primary/secondary grid generation and primary grid analysis.
//!
//! # Responsibility
//! - Count digit occurrences of a birth date (primary, "Lo Shu" grid).
//! - Derive the nine secondary ("Vedic") grid cells from birth/name numbers.
//! - Classify every primary cell as missing, repeated or balanced.
//!
//! # Invariants
//! - Grid domain is exactly digits `1..=9`; digit `0` is never tracked.
//! - Secondary cell values always land in `[1, 9]`.

use super::digits::{birth_number, date_digits, name_number};
use serde::{Deserialize, Serialize};

/// Number of cells in every grid.
pub const GRID_CELLS: usize = 9;

/// Occurrence count per digit `1..=9` within a birth date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrimaryGrid {
    counts: [u32; GRID_CELLS],
}

impl PrimaryGrid {
    /// Returns the count for `digit`, or `None` outside `1..=9`.
    pub fn count(&self, digit: u8) -> Option<u32> {
        cell_index(digit).map(|index| self.counts[index])
    }

    /// Iterates `(digit, count)` pairs in ascending digit order.
    pub fn iter(&self) -> impl Iterator<Item = (u8, u32)> + '_ {
        digits().zip(self.counts.iter().copied())
    }

    /// Sum of all counts; equals the number of `1..=9` digits in the input.
    pub fn total(&self) -> u32 {
        self.counts.iter().sum()
    }
}

/// Derived value per cell `1..=9`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SecondaryGrid {
    values: [u32; GRID_CELLS],
}

impl SecondaryGrid {
    /// Returns the value of cell `digit`, or `None` outside `1..=9`.
    pub fn value(&self, digit: u8) -> Option<u32> {
        cell_index(digit).map(|index| self.values[index])
    }

    /// Iterates `(cell, value)` pairs in ascending cell order.
    pub fn iter(&self) -> impl Iterator<Item = (u8, u32)> + '_ {
        digits().zip(self.values.iter().copied())
    }
}

/// Classification of one primary grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CellStatus {
    /// Digit does not occur in the date.
    Missing,
    /// Digit occurs more than once.
    Repeated,
    /// Digit occurs exactly once.
    Balanced,
}

impl CellStatus {
    /// Classifies an occurrence count.
    pub fn from_count(count: u32) -> Self {
        match count {
            0 => Self::Missing,
            1 => Self::Balanced,
            _ => Self::Repeated,
        }
    }

    /// Display label used as the composer status prefix.
    pub fn label(self) -> &'static str {
        match self {
            Self::Missing => "Missing number – work on this trait",
            Self::Repeated => "Repeated number – strong influence",
            Self::Balanced => "Balanced number",
        }
    }
}

/// Per-digit classification of a [`PrimaryGrid`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisResult {
    cells: [CellStatus; GRID_CELLS],
}

impl AnalysisResult {
    /// Returns the status of `digit`, or `None` outside `1..=9`.
    pub fn status(&self, digit: u8) -> Option<CellStatus> {
        cell_index(digit).map(|index| self.cells[index])
    }

    /// Iterates `(digit, status)` pairs in ascending digit order.
    pub fn iter(&self) -> impl Iterator<Item = (u8, CellStatus)> + '_ {
        digits().zip(self.cells.iter().copied())
    }
}

/// Counts occurrences of digits `1..=9` among the digit characters of `date`.
pub fn primary_grid(date: &str) -> PrimaryGrid {
    let mut counts = [0u32; GRID_CELLS];
    for digit in date_digits(date) {
        if digit > 0 {
            counts[(digit - 1) as usize] += 1;
        }
    }
    PrimaryGrid { counts }
}

/// Builds the secondary grid from the birth and name numbers of the inputs.
pub fn secondary_grid(date: &str, name: &str) -> SecondaryGrid {
    secondary_grid_from_numbers(birth_number(date), name_number(name))
}

/// Secondary grid formula: cell `i` holds `((birth + name + i) mod 9) + 1`.
pub fn secondary_grid_from_numbers(birth: u32, name: u32) -> SecondaryGrid {
    let mut values = [0u32; GRID_CELLS];
    for (index, value) in values.iter_mut().enumerate() {
        let cell = index as u64 + 1;
        *value = ((u64::from(birth) + u64::from(name) + cell) % 9) as u32 + 1;
    }
    SecondaryGrid { values }
}

/// Classifies every cell of `grid`.
pub fn analyze(grid: &PrimaryGrid) -> AnalysisResult {
    let mut cells = [CellStatus::Missing; GRID_CELLS];
    for (cell, count) in cells.iter_mut().zip(grid.counts.iter()) {
        *cell = CellStatus::from_count(*count);
    }
    AnalysisResult { cells }
}

fn digits() -> impl Iterator<Item = u8> {
    1..=GRID_CELLS as u8
}

fn cell_index(digit: u8) -> Option<usize> {
    if (1..=GRID_CELLS as u8).contains(&digit) {
        Some(usize::from(digit - 1))
    } else {
        None
    }
}
