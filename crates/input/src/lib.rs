//! Input: pointer, keyboard and scripted triggers mapped to shared actions.
//!
//! # Invariants
//! - The core consumes actions, never raw input events.
//! - Translating screen positions into grid coordinates happens before an
//!   action is built.

pub mod action;

pub use action::{Action, ParseActionError};
