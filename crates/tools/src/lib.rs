//! Developer Tooling: read-only world inspection.
//!
//! # Invariants
//! - Tools never mutate the world.

pub mod inspector;

pub use inspector::{CellInfo, WorldInspector, WorldSummary};
