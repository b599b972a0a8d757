use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// World seed. Everything downstream of the seed is deterministic.
pub type Seed = i32;

/// Contents of one grid position: `None` is empty.
pub type Cell = Option<BlockKind>;

/// A block material.
///
/// The first six kinds are placeable and carry display metadata. `Cloud` is
/// decorative: the generator stamps it into the sky, but it has no table
/// entry, is never selectable, and renderers skip it. It still occupies a
/// cell and counts as filled.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum BlockKind {
    Grass,
    Dirt,
    Stone,
    Wood,
    Water,
    Sand,
    Cloud,
}

/// Display metadata for a placeable block kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockInfo {
    pub kind: BlockKind,
    /// Human-facing label shown in the toolbar.
    pub name: &'static str,
    pub color: Rgb,
}

const BLOCK_TABLE: [BlockInfo; 6] = [
    BlockInfo {
        kind: BlockKind::Grass,
        name: "Hierba",
        color: Rgb(0x6b, 0xcb, 0x3c),
    },
    BlockInfo {
        kind: BlockKind::Dirt,
        name: "Tierra",
        color: Rgb(0xa0, 0x62, 0x3b),
    },
    BlockInfo {
        kind: BlockKind::Stone,
        name: "Piedra",
        color: Rgb(0x8d, 0x99, 0xae),
    },
    BlockInfo {
        kind: BlockKind::Wood,
        name: "Madera",
        color: Rgb(0xc9, 0x7c, 0x5d),
    },
    BlockInfo {
        kind: BlockKind::Water,
        name: "Agua",
        color: Rgb(0x4e, 0xa8, 0xde),
    },
    BlockInfo {
        kind: BlockKind::Sand,
        name: "Arena",
        color: Rgb(0xf1, 0xdc, 0xa7),
    },
];

impl BlockKind {
    /// Every kind, decorative ones included.
    pub const ALL: [BlockKind; 7] = [
        BlockKind::Grass,
        BlockKind::Dirt,
        BlockKind::Stone,
        BlockKind::Wood,
        BlockKind::Water,
        BlockKind::Sand,
        BlockKind::Cloud,
    ];

    /// Kinds a user may place, in toolbar order (slot 1 first).
    pub const PLACEABLE: [BlockKind; 6] = [
        BlockKind::Grass,
        BlockKind::Dirt,
        BlockKind::Stone,
        BlockKind::Wood,
        BlockKind::Water,
        BlockKind::Sand,
    ];

    /// Stable lowercase identifier.
    pub const fn id(self) -> &'static str {
        match self {
            BlockKind::Grass => "grass",
            BlockKind::Dirt => "dirt",
            BlockKind::Stone => "stone",
            BlockKind::Wood => "wood",
            BlockKind::Water => "water",
            BlockKind::Sand => "sand",
            BlockKind::Cloud => "cloud",
        }
    }

    /// Display metadata, or `None` for kinds that are never drawn.
    pub fn info(self) -> Option<&'static BlockInfo> {
        BLOCK_TABLE.iter().find(|info| info.kind == self)
    }

    pub fn is_placeable(self) -> bool {
        self.info().is_some()
    }

    /// Kind bound to a 1-based toolbar slot.
    pub fn from_slot(slot: usize) -> Option<BlockKind> {
        slot.checked_sub(1)
            .and_then(|i| Self::PLACEABLE.get(i))
            .copied()
    }

    /// Single-character glyph for text dumps.
    pub const fn glyph(self) -> char {
        match self {
            BlockKind::Grass => '"',
            BlockKind::Dirt => '#',
            BlockKind::Stone => 'o',
            BlockKind::Wood => 'W',
            BlockKind::Water => '=',
            BlockKind::Sand => ':',
            BlockKind::Cloud => '~',
        }
    }

    /// The full metadata table, toolbar order.
    pub fn table() -> &'static [BlockInfo] {
        &BLOCK_TABLE
    }
}

impl fmt::Display for BlockKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.id())
    }
}

/// Error returned when a string does not name a block kind.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown block id {0:?}")]
pub struct ParseBlockError(pub String);

impl FromStr for BlockKind {
    type Err = ParseBlockError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|kind| kind.id().eq_ignore_ascii_case(s))
            .ok_or_else(|| ParseBlockError(s.to_string()))
    }
}

/// 8-bit sRGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    /// `#rrggbb` form.
    pub fn hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.hex())
    }
}
