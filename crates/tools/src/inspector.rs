use blockfield_common::{BlockKind, Cell, Seed};
use blockfield_kernel::World;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

/// World inspector for developer tooling.
///
/// Read-only queries against the world for debugging and CLI output.
pub struct WorldInspector;

impl WorldInspector {
    /// Produce a summary of the world state.
    pub fn summary(world: &World) -> WorldSummary {
        let mut per_kind = BTreeMap::new();
        for (_, _, cell) in world.grid().iter() {
            if let Some(kind) = cell {
                *per_kind.entry(kind).or_insert(0) += 1;
            }
        }
        WorldSummary {
            seed: world.seed(),
            width: world.width(),
            height: world.height(),
            filled: world.count_filled(),
            per_kind,
        }
    }

    /// Describe the cell at `(x, y)`, or `None` when off the grid.
    pub fn inspect_cell(world: &World, x: i64, y: i64) -> Option<CellInfo> {
        world.get(x, y).map(|cell| CellInfo {
            x,
            y,
            cell,
            label: cell.and_then(BlockKind::info).map(|info| info.name),
        })
    }

    /// Row of the grass surface in column `x`, if the column has one.
    pub fn column_surface(world: &World, x: i64) -> Option<usize> {
        (0..world.height()).find(|&y| world.get(x, y as i64) == Some(Some(BlockKind::Grass)))
    }
}

/// Summary of world state for the inspector.
#[derive(Debug, Clone, Serialize)]
pub struct WorldSummary {
    pub seed: Seed,
    pub width: usize,
    pub height: usize,
    pub filled: usize,
    /// Cell count per kind present in the grid.
    pub per_kind: BTreeMap<BlockKind, usize>,
}

impl fmt::Display for WorldSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "World: seed={} size={}x{} blocks={}",
            self.seed, self.width, self.height, self.filled
        )?;
        for (kind, count) in &self.per_kind {
            write!(f, " {kind}={count}")?;
        }
        Ok(())
    }
}

/// Detailed info about a single cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellInfo {
    pub x: i64,
    pub y: i64,
    pub cell: Cell,
    /// Display label, absent for empty and decorative cells.
    pub label: Option<&'static str>,
}

impl fmt::Display for CellInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.cell, self.label) {
            (None, _) => write!(f, "({}, {}) empty", self.x, self.y),
            (Some(kind), Some(label)) => write!(f, "({}, {}) {kind} \"{label}\"", self.x, self.y),
            (Some(kind), None) => write!(f, "({}, {}) {kind}", self.x, self.y),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_matches_world() {
        let world = World::with_seed(42);
        let summary = WorldInspector::summary(&world);
        assert_eq!(summary.seed, 42);
        assert_eq!((summary.width, summary.height), (45, 27));
        assert_eq!(summary.filled, world.count_filled());
        assert_eq!(summary.per_kind.values().sum::<usize>(), summary.filled);
        assert_eq!(summary.per_kind.get(&BlockKind::Grass), Some(&45));
    }

    #[test]
    fn summary_after_clear() {
        let mut world = World::with_seed(42);
        world.clear_non_grass();
        let summary = WorldInspector::summary(&world);
        assert_eq!(summary.per_kind.len(), 1);
        assert_eq!(summary.filled, 45);
    }

    #[test]
    fn summary_display() {
        let world = World::with_seed(7);
        let s = WorldInspector::summary(&world).to_string();
        assert!(s.starts_with("World: seed=7 size=45x27"));
        assert!(s.contains("grass=45"));
    }

    #[test]
    fn summary_serializes_kind_ids() {
        let world = World::with_seed(7);
        let json = serde_json::to_string(&WorldInspector::summary(&world)).unwrap();
        assert!(json.contains("\"grass\":45"));
    }

    #[test]
    fn inspect_cell_found() {
        let mut world = World::with_seed(1);
        world.set_cell(2, 2, Some(BlockKind::Wood));
        let info = WorldInspector::inspect_cell(&world, 2, 2).unwrap();
        assert_eq!(info.cell, Some(BlockKind::Wood));
        assert_eq!(info.label, Some("Madera"));
        assert_eq!(info.to_string(), "(2, 2) wood \"Madera\"");
    }

    #[test]
    fn inspect_cloud_has_no_label() {
        let mut world = World::with_seed(1);
        world.set_cell(0, 0, Some(BlockKind::Cloud));
        let info = WorldInspector::inspect_cell(&world, 0, 0).unwrap();
        assert_eq!(info.label, None);
    }

    #[test]
    fn inspect_cell_off_grid() {
        let world = World::with_seed(1);
        assert!(WorldInspector::inspect_cell(&world, -1, 0).is_none());
    }

    #[test]
    fn column_surface_in_hill_band() {
        let world = World::with_seed(99);
        for x in 0..45 {
            let row = WorldInspector::column_surface(&world, x).unwrap();
            assert!((14..=18).contains(&row));
        }
        assert_eq!(WorldInspector::column_surface(&world, 45), None);
    }
}
