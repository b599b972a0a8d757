//! Rendering Adapter: renderer-agnostic interface over the tile grid.
//!
//! # Invariants
//! - Renderers never mutate the world.
//! - Cells without display metadata (empty, cloud) produce no tiles.
//!
//! The tile renderer hands colored quads to whatever surface draws them;
//! the debug text renderer backs CLI output and tests.

mod renderer;

pub use renderer::{DebugTextRenderer, RenderView, Renderer, TileQuad, TileRenderer};
