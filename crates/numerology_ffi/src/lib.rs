//! Flutter-facing bindings over `numerology_core`.

pub mod api;
