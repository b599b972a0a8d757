use blockfield_common::{BlockKind, Seed};
use serde::{Deserialize, Serialize};

use crate::grid::Grid;
use crate::rng::ParkMiller;

/// Tuning constants for terrain synthesis.
///
/// `Default` reproduces the stock world shape; `generate` always uses it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenParams {
    /// Fraction of the height at which the flattest column's surface sits.
    pub ground_ratio: f64,
    /// Column heights vary by `0..hill_range` rows below the base ground row.
    pub hill_range: u32,
    /// Underground cells become stone when a draw exceeds this.
    pub stone_threshold: f64,
    /// Number of decoration draws.
    pub decoration_attempts: u32,
    /// Decorations land in the top `sky_ratio` of the grid.
    pub sky_ratio: f64,
    /// An empty decoration target becomes a cloud when a draw exceeds this.
    pub cloud_threshold: f64,
}

impl Default for GenParams {
    fn default() -> Self {
        Self {
            ground_ratio: 0.55,
            hill_range: 5,
            stone_threshold: 0.8,
            decoration_attempts: 60,
            sky_ratio: 0.5,
            cloud_threshold: 0.7,
        }
    }
}

/// Generate a world with the default parameters.
///
/// Equal `(width, height, seed)` always produce identical grids.
pub fn generate(width: usize, height: usize, seed: Seed) -> Grid {
    generate_with(&GenParams::default(), width, height, seed)
}

/// Generate a world with explicit parameters.
pub fn generate_with(params: &GenParams, width: usize, height: usize, seed: Seed) -> Grid {
    let _span = tracing::info_span!("generate", seed, width, height).entered();
    let mut grid = Grid::new(width, height);
    if width == 0 || height == 0 {
        tracing::debug!("zero-sized grid, skipping terrain");
        return grid;
    }

    let mut rng = ParkMiller::from(seed);
    terrain_pass(params, &mut grid, &mut rng);
    decoration_pass(params, &mut grid, &mut rng);

    tracing::debug!(filled = grid.count_filled(), "world generated");
    grid
}

/// One independently-heighted column per x: grass on top, then dirt with
/// scattered stone down to the bottom row.
fn terrain_pass(params: &GenParams, grid: &mut Grid, rng: &mut ParkMiller) {
    let height = grid.height();
    let base = (height as f64 * params.ground_ratio).floor() as usize;

    for x in 0..grid.width() {
        let hill = (rng.next_f64() * f64::from(params.hill_range)).floor() as usize;
        let ground = base.saturating_add(hill);
        for y in ground..height {
            let block = if y == ground {
                BlockKind::Grass
            } else if rng.next_f64() > params.stone_threshold {
                BlockKind::Stone
            } else {
                BlockKind::Dirt
            };
            grid.set(x as i64, y as i64, Some(block));
        }
    }
}

/// Sparse clouds in the sky. Targets that already hold terrain are skipped
/// without consuming the cloud draw.
fn decoration_pass(params: &GenParams, grid: &mut Grid, rng: &mut ParkMiller) {
    let width = grid.width() as f64;
    let height = grid.height() as f64;

    for _ in 0..params.decoration_attempts {
        let x = (rng.next_f64() * width).floor() as i64;
        let y = (rng.next_f64() * height * params.sky_ratio).floor() as i64;
        if grid.get(x, y) == Some(None) {
            let cell = (rng.next_f64() > params.cloud_threshold).then_some(BlockKind::Cloud);
            grid.set(x, y, cell);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Row of the first filled non-cloud cell in a column.
    fn surface(grid: &Grid, x: usize) -> Option<usize> {
        (0..grid.height()).find(|&y| {
            matches!(grid.get(x as i64, y as i64), Some(Some(k)) if k != BlockKind::Cloud)
        })
    }

    #[test]
    fn generation_is_deterministic() {
        for seed in [0, 1, 42, 999_999, -17] {
            let a = generate(45, 27, seed);
            let b = generate(45, 27, seed);
            assert_eq!(a, b, "seed {seed}");
        }
    }

    #[test]
    fn different_seeds_produce_different_worlds() {
        assert_ne!(generate(45, 27, 1), generate(45, 27, 2));
    }

    #[test]
    fn small_world_seed_42_layers() {
        let grid = generate(4, 10, 42);
        assert_eq!(grid, generate(4, 10, 42));

        for x in 0..4 {
            let ground = surface(&grid, x).expect("every column has terrain");
            assert!((5..=9).contains(&ground), "column {x} ground at {ground}");
            assert_eq!(grid.get(x as i64, ground as i64), Some(Some(BlockKind::Grass)));

            for y in ground + 1..10 {
                let cell = grid.get(x as i64, y as i64).unwrap();
                assert!(
                    matches!(cell, Some(BlockKind::Dirt) | Some(BlockKind::Stone)),
                    "({x},{y}) holds {cell:?}"
                );
            }
            for y in 0..ground {
                let cell = grid.get(x as i64, y as i64).unwrap();
                assert!(matches!(cell, None | Some(BlockKind::Cloud)));
                if cell.is_some() {
                    assert!(y < 5, "cloud below the sky band at ({x},{y})");
                }
            }
        }
    }

    #[test]
    fn default_world_shape() {
        let grid = generate(45, 27, 123_456);
        for x in 0..45 {
            let ground = surface(&grid, x).unwrap();
            // floor(27 * 0.55) = 14, hills add 0..=4
            assert!((14..=18).contains(&ground));
        }
        let clouds = grid.count_kind(BlockKind::Cloud);
        assert!(clouds <= 60);
        for (_, y, cell) in grid.iter() {
            if cell == Some(BlockKind::Cloud) {
                // floor(rng * 27 * 0.5) <= 13
                assert!(y <= 13);
            }
        }
        assert_eq!(grid.count_kind(BlockKind::Wood), 0);
        assert_eq!(grid.count_kind(BlockKind::Water), 0);
        assert_eq!(grid.count_kind(BlockKind::Sand), 0);
    }

    #[test]
    fn ground_below_grid_leaves_column_empty() {
        let params = GenParams {
            ground_ratio: 2.0,
            decoration_attempts: 0,
            ..GenParams::default()
        };
        let grid = generate_with(&params, 3, 4, 7);
        assert_eq!(grid.count_filled(), 0);
    }

    #[test]
    fn huge_ground_ratio_leaves_columns_empty() {
        let params = GenParams {
            ground_ratio: 1e30,
            decoration_attempts: 0,
            ..GenParams::default()
        };
        let grid = generate_with(&params, 3, 4, 7);
        assert_eq!(grid.count_filled(), 0);
    }

    /// Rows top to bottom, `/`-separated: c cloud, g grass, d dirt, s stone.
    fn layout(grid: &Grid) -> String {
        grid.rows()
            .map(|row| {
                row.iter()
                    .map(|cell| match cell {
                        None => '.',
                        Some(BlockKind::Cloud) => 'c',
                        Some(BlockKind::Grass) => 'g',
                        Some(BlockKind::Dirt) => 'd',
                        Some(BlockKind::Stone) => 's',
                        Some(other) => other.glyph(),
                    })
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("/")
    }

    #[test]
    fn seed_42_small_world_layout_is_pinned() {
        assert_eq!(
            layout(&generate(4, 10, 42)),
            "ccc./c..c/.c.c/c.c./c..c/ggg./dssg/ddsd/dddd/dddd"
        );
    }

    #[test]
    fn seed_minus_modulus_minus_one_is_not_degenerate() {
        let grid = generate(45, 27, -2_147_483_646);
        assert_eq!(grid, generate(45, 27, 0));
        assert!(grid.count_kind(BlockKind::Stone) > 0);
        assert!(grid.count_kind(BlockKind::Cloud) > 0);
    }

    #[test]
    fn zero_dimensions_yield_empty_grid() {
        assert_eq!(generate(0, 10, 5).count_filled(), 0);
        assert_eq!(generate(10, 0, 5).count_filled(), 0);
    }

    #[test]
    fn single_row_world_does_not_panic() {
        let grid = generate(8, 1, 3);
        assert_eq!(grid.height(), 1);
    }

    #[test]
    fn default_params_match_generate() {
        assert_eq!(
            generate(20, 12, 77),
            generate_with(&GenParams::default(), 20, 12, 77)
        );
    }

    #[test]
    fn params_deserialize_with_defaults() {
        let params: GenParams = serde_json::from_str(r#"{"hill_range": 3}"#).unwrap();
        assert_eq!(params.hill_range, 3);
        assert_eq!(params.decoration_attempts, 60);
    }
}
