use blockfield_common::{BlockKind, Cell};
use serde::Serialize;

/// Fixed-size 2D tile grid, stored row-major.
///
/// `x` is the column (0 at the left), `y` the row (0 at the top). The
/// dimensions are set at construction and never change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// A grid with every cell empty.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![None; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    fn index(&self, x: i64, y: i64) -> Option<usize> {
        let (x, y) = (usize::try_from(x).ok()?, usize::try_from(y).ok()?);
        (x < self.width && y < self.height).then(|| y * self.width + x)
    }

    pub fn in_bounds(&self, x: i64, y: i64) -> bool {
        self.index(x, y).is_some()
    }

    /// Cell at `(x, y)`, or `None` when the position is off the grid.
    pub fn get(&self, x: i64, y: i64) -> Option<Cell> {
        self.index(x, y).map(|i| self.cells[i])
    }

    /// Overwrite the cell at `(x, y)`. Off-grid writes are dropped.
    /// Returns whether the write landed.
    pub fn set(&mut self, x: i64, y: i64, value: Cell) -> bool {
        match self.index(x, y) {
            Some(i) => {
                self.cells[i] = value;
                true
            }
            None => false,
        }
    }

    /// Number of non-empty cells, decorative clouds included.
    pub fn count_filled(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// Number of cells holding `kind`.
    pub fn count_kind(&self, kind: BlockKind) -> usize {
        self.cells.iter().filter(|c| **c == Some(kind)).count()
    }

    /// Copy of this grid with everything except grass removed.
    pub fn clear_non_grass(&self) -> Grid {
        let mut out = self.clone();
        out.retain_grass();
        out
    }

    /// In-place form of [`Grid::clear_non_grass`].
    pub fn retain_grass(&mut self) {
        for cell in &mut self.cells {
            if cell.is_some_and(|kind| kind != BlockKind::Grass) {
                *cell = None;
            }
        }
    }

    /// All cells as `(x, y, cell)`, row by row.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, Cell)> + '_ {
        let width = self.width.max(1);
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, cell)| (i % width, i / width, *cell))
    }

    /// Rows from top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.width.max(1)).take(self.height)
    }
}
