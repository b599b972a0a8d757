//! Authoring: block selection, place/erase editing and the session controller.
//!
//! # Invariants
//! - Every edit funnels through `World::set_cell`.
//! - Only placeable kinds can be selected.
//! - No edit history is kept.

pub mod editor;
pub mod session;

pub use editor::{EditError, EditMode, Editor};
pub use session::{FixedSeed, RandomSeeds, SeedSource, Session};
