#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum TilemapError {
    #[error("Tile ({x}, {y}) is outside of the {width}x{height} map")]
    OutOfBounds { x: u16, y: u16, width: u16, height: u16 },

    #[error("Map has {0} rows or columns, but at most 65535 are supported")]
    TooLarge(usize),

    #[error("Row {row} has {found} cells, but the first row has {expected}")]
    RaggedRows {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("Unknown tile character {0:?}")]
    UnknownTile(char),
}

pub type Result<T, E = TilemapError> = std::result::Result<T, E>;
