//! Shared types for the blockfield workspace: block kinds, cells, seeds.
//!
//! # Invariants
//! - The block table is fixed at compile time.
//! - Every cell is either empty or a known `BlockKind`.

mod types;

pub use types::{BlockInfo, BlockKind, Cell, ParseBlockError, Rgb, Seed};
