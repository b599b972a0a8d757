use blockfield_common::BlockKind;
use blockfield_kernel::World;
use std::fmt;

/// What the primary button does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditMode {
    #[default]
    Place,
    Erase,
}

impl EditMode {
    pub fn toggled(self) -> Self {
        match self {
            EditMode::Place => EditMode::Erase,
            EditMode::Erase => EditMode::Place,
        }
    }

    /// Status-bar label.
    pub fn label(self) -> &'static str {
        match self {
            EditMode::Place => "Colocar",
            EditMode::Erase => "Eliminar",
        }
    }
}

impl fmt::Display for EditMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.label())
    }
}

/// Errors from editor operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EditError {
    #[error("{0} cannot be placed")]
    NotPlaceable(BlockKind),
    #[error("no block bound to slot {0}")]
    NoSuchSlot(usize),
}

/// Editor state: the selected block and the place/erase mode.
///
/// Holds no reference to the world; every operation takes the world it
/// edits, so one editor can outlive any number of regenerations.
#[derive(Debug, Clone)]
pub struct Editor {
    selected: BlockKind,
    mode: EditMode,
}

impl Editor {
    /// Grass selected, place mode.
    pub fn new() -> Self {
        Self {
            selected: BlockKind::PLACEABLE[0],
            mode: EditMode::Place,
        }
    }

    pub fn selected(&self) -> BlockKind {
        self.selected
    }

    pub fn mode(&self) -> EditMode {
        self.mode
    }

    /// Select a block for placement. Decorative kinds are refused.
    pub fn select(&mut self, kind: BlockKind) -> Result<(), EditError> {
        if !kind.is_placeable() {
            return Err(EditError::NotPlaceable(kind));
        }
        self.selected = kind;
        tracing::debug!(block = %kind, "block selected");
        Ok(())
    }

    /// Select by 1-based toolbar slot.
    pub fn select_slot(&mut self, slot: usize) -> Result<(), EditError> {
        let kind = BlockKind::from_slot(slot).ok_or(EditError::NoSuchSlot(slot))?;
        self.select(kind)
    }

    pub fn set_mode(&mut self, mode: EditMode) {
        self.mode = mode;
    }

    pub fn toggle_mode(&mut self) -> EditMode {
        self.mode = self.mode.toggled();
        tracing::debug!(mode = %self.mode, "mode toggled");
        self.mode
    }

    /// Primary action at a grid position: place the selected block, or
    /// erase in erase mode. Returns whether the position was on the grid.
    pub fn click(&self, world: &mut World, x: i64, y: i64) -> bool {
        match self.mode {
            EditMode::Place => world.set_cell(x, y, Some(self.selected)),
            EditMode::Erase => world.set_cell(x, y, None),
        }
    }

    /// Erase regardless of mode.
    pub fn erase(&self, world: &mut World, x: i64, y: i64) -> bool {
        world.set_cell(x, y, None)
    }
}

impl Default for Editor {
    fn default() -> Self {
        Self::new()
    }
}
