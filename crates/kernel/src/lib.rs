//! World Kernel: authoritative tile grid, seeded generation, editing primitives.
//!
//! # Invariants
//! - Generation is a pure function of (width, height, seed, params).
//! - Grid dimensions never change after creation.
//! - All cell mutations flow through `Grid::set`.

pub mod config;
pub mod generate;
pub mod grid;
pub mod rng;
pub mod world;

pub use config::{ConfigError, WorldConfig};
pub use generate::{GenParams, generate, generate_with};
pub use grid::Grid;
pub use rng::ParkMiller;
pub use world::World;
