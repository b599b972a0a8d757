use blockfield_common::{BlockKind, Rgb};
use blockfield_kernel::World;
use glam::IVec2;
use std::fmt::Write;

/// Screen mapping for rendering: tile size in pixels and a pan offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderView {
    pub tile_size: i32,
    /// Pixel offset added to every tile origin.
    pub offset: IVec2,
}

impl Default for RenderView {
    fn default() -> Self {
        Self {
            tile_size: 20,
            offset: IVec2::ZERO,
        }
    }
}

impl RenderView {
    /// Top-left pixel of the tile at grid position `cell`.
    pub fn tile_origin(&self, cell: IVec2) -> IVec2 {
        cell * self.tile_size + self.offset
    }
}

/// Renderer-agnostic interface. All renderers implement this trait.
///
/// A renderer reads the world and a view, then produces output. It never
/// mutates the world.
pub trait Renderer {
    /// The output type produced by this renderer.
    type Output;

    fn render(&self, world: &World, view: &RenderView) -> Self::Output;
}

/// One filled square to draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileQuad {
    /// Grid position.
    pub cell: IVec2,
    /// Top-left corner in pixels.
    pub origin: IVec2,
    pub size: i32,
    pub kind: BlockKind,
    pub color: Rgb,
    pub label: &'static str,
}

/// Grid position as an `IVec2`, or `None` when it does not fit in `i32`.
fn grid_position(x: usize, y: usize) -> Option<IVec2> {
    Some(IVec2::new(i32::try_from(x).ok()?, i32::try_from(y).ok()?))
}

/// Produces a draw list of colored quads, row by row.
#[derive(Debug, Default)]
pub struct TileRenderer;

impl Renderer for TileRenderer {
    type Output = Vec<TileQuad>;

    fn render(&self, world: &World, view: &RenderView) -> Vec<TileQuad> {
        world
            .grid()
            .iter()
            .filter_map(|(x, y, cell)| {
                let info = cell?.info()?;
                let cell = grid_position(x, y)?;
                Some(TileQuad {
                    cell,
                    origin: view.tile_origin(cell),
                    size: view.tile_size,
                    kind: info.kind,
                    color: info.color,
                    label: info.name,
                })
            })
            .collect()
    }
}

/// Text dump of the world: a header line, then one glyph per cell.
///
/// Unlike the tile renderer this shows decorative cells too, since it mirrors
/// storage rather than what a player sees.
#[derive(Debug, Default)]
pub struct DebugTextRenderer;

impl DebugTextRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl Renderer for DebugTextRenderer {
    type Output = String;

    fn render(&self, world: &World, _view: &RenderView) -> String {
        let mut out = String::new();
        let _ = writeln!(
            out,
            "=== World (seed={}, size={}x{}, blocks={}) ===",
            world.seed(),
            world.width(),
            world.height(),
            world.count_filled()
        );
        for row in world.grid().rows() {
            out.extend(row.iter().map(|cell| cell.map_or('.', BlockKind::glyph)));
            out.push('\n');
        }
        out
    }
}
