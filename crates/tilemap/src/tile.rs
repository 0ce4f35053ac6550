//! The concrete tile used by games and tests.

use crate::TileTrait;

/// A tile is a kind (an index into whatever the game uses to draw it) plus the two flags the engine cares about.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Tile {
    pub kind: u16,
    #[serde(default)]
    pub blocking: bool,
    #[serde(default)]
    pub opaque: bool,
}

impl Tile {
    /// Open floor.
    pub const EMPTY: Tile = Tile::new(0, false, false);

    /// A solid wall, and the edge of every [crate::Tilemap] built by [crate::Tilemap::walled].
    pub const WALL: Tile = Tile::new(1, true, true);

    pub const fn new(kind: u16, blocking: bool, opaque: bool) -> Tile {
        Tile {
            kind,
            blocking,
            opaque,
        }
    }

    /// A blocking, opaque tile of the given kind.
    pub const fn wall(kind: u16) -> Tile {
        Tile::new(kind, true, true)
    }
}

impl TileTrait for Tile {
    fn is_blocking(&self) -> bool {
        self.blocking
    }

    fn is_opaque(&self) -> bool {
        self.opaque
    }
}
