use blockfield_common::{Cell, Seed};
use serde::Serialize;

use crate::config::WorldConfig;
use crate::generate::{GenParams, generate_with};
use crate::grid::Grid;

/// The authoritative world state: the active seed and the live grid.
///
/// Exactly one grid is live per world. Regeneration replaces it wholesale;
/// edits mutate it in place through `set_cell`. Given the same config and
/// seed, generation produces an identical grid on every platform.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct World {
    seed: Seed,
    params: GenParams,
    grid: Grid,
}

impl World {
    /// Generate a fresh world.
    pub fn generate(config: &WorldConfig, seed: Seed) -> Self {
        Self {
            seed,
            params: config.generation,
            grid: generate_with(&config.generation, config.width, config.height, seed),
        }
    }

    /// Default-sized world for `seed`.
    pub fn with_seed(seed: Seed) -> Self {
        Self::generate(&WorldConfig::default(), seed)
    }

    /// Seed that produced the current grid.
    pub fn seed(&self) -> Seed {
        self.seed
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn width(&self) -> usize {
        self.grid.width()
    }

    pub fn height(&self) -> usize {
        self.grid.height()
    }

    /// Discard the grid and generate a new one with the same dimensions.
    pub fn regenerate(&mut self, seed: Seed) {
        tracing::info!(seed, "regenerating world");
        self.seed = seed;
        self.grid = generate_with(&self.params, self.grid.width(), self.grid.height(), seed);
    }

    pub fn get(&self, x: i64, y: i64) -> Option<Cell> {
        self.grid.get(x, y)
    }

    /// Write one cell. Off-grid positions are ignored.
    pub fn set_cell(&mut self, x: i64, y: i64, value: Cell) -> bool {
        let landed = self.grid.set(x, y, value);
        if landed {
            tracing::trace!(x, y, ?value, "cell set");
        } else {
            tracing::trace!(x, y, "edit outside grid dropped");
        }
        landed
    }

    /// Number of non-empty cells, clouds included.
    pub fn count_filled(&self) -> usize {
        self.grid.count_filled()
    }

    /// Reset to bare hills: everything but grass is removed.
    pub fn clear_non_grass(&mut self) {
        self.grid.retain_grass();
        tracing::debug!(remaining = self.grid.count_filled(), "cleared non-grass blocks");
    }

    /// Deterministic FNV-1a hash over seed, dimensions and cells.
    pub fn state_hash(&self) -> u64 {
        let mut h: u64 = 0xcbf2_9ce4_8422_2325; // FNV offset basis
        let mix = |h: &mut u64, bytes: &[u8]| {
            for &b in bytes {
                *h ^= b as u64;
                *h = h.wrapping_mul(0x0100_0000_01b3);
            }
        };
        mix(&mut h, &self.seed.to_le_bytes());
        mix(&mut h, &(self.grid.width() as u64).to_le_bytes());
        mix(&mut h, &(self.grid.height() as u64).to_le_bytes());
        for (_, _, cell) in self.grid.iter() {
            let tag = match cell {
                None => 0u8,
                Some(kind) => kind as u8 + 1,
            };
            mix(&mut h, &[tag]);
        }
        h
    }
}
