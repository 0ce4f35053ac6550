//! Tiles and the maps which hold them.
//!
//! Consumers such as the raycaster only see the [TileMap] trait, which must answer for every cell.  [Tilemap] is the
//! bounded implementation: cells outside it answer with an edge tile, so a ray can never walk off into nothing.
mod errors;
mod tile;
mod tile_map;
mod tile_trait;
mod tilemap;

pub use errors::*;
pub use tile::*;
pub use tile_map::*;
pub use tile_trait::*;
pub use tilemap::*;
