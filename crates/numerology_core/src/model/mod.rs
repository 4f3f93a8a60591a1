//! Domain model for user-authored remedies.
//!
//! # Responsibility
//! - Define canonical data structures shared by repository and services.
//! - Own input validation rules for remedy writes.
//!
//! # Invariants
//! - Every persisted remedy is identified by a store-assigned `RemedyId`.
//! - Deletion is a hard delete; there are no tombstones.

pub mod remedy;
