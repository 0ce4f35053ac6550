use crate::TileTrait;

/// Something which can be asked for the tile at any integer cell.
///
/// Implementations must answer for every coordinate, including ones far outside whatever area they store, and must
/// not have side effects: callers query the same cell repeatedly and in any order.
pub trait TileMap {
    type Tile: TileTrait;

    fn get_tile(&self, x: i64, y: i64) -> &Self::Tile;
}

impl<M: TileMap + ?Sized> TileMap for &M {
    type Tile = M::Tile;

    fn get_tile(&self, x: i64, y: i64) -> &Self::Tile {
        (**self).get_tile(x, y)
    }
}
