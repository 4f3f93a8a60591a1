//! Pure numerology computations.
//!
//! # Responsibility
//! - Reduce numbers, derive name/birth numbers, build and analyze grids.
//! - Hold the immutable default remedy table.
//!
//! # Invariants
//! - Nothing in this module touches storage or performs IO.
//! - Lookup tables are static constants, never runtime-mutable.

pub mod daily;
pub mod digits;
pub mod grid;
pub mod profile;
pub mod remedy_table;
