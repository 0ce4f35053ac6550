use std::collections::HashMap;
use std::convert::TryFrom;

use tilecast_physics::V2;

use crate::errors::*;
use crate::{Tile, TileMap, TileTrait};

/// A bounded map of `width` by `height` tiles, with cell `(0, 0)` at one corner.
///
/// Cells which were never set hold the default tile.  Every cell outside the bounds holds the edge tile.  Storage is
/// sparse: only cells which differ from the default take memory.
pub struct Tilemap<T: TileTrait> {
    width: u16,
    height: u16,
    tiles: HashMap<V2<u16>, T>,
    default_tile: T,
    edge_tile: T,
}

impl<T: TileTrait> Tilemap<T> {
    pub fn new(width: u16, height: u16, default_tile: T, edge_tile: T) -> Tilemap<T> {
        Tilemap {
            width,
            height,
            tiles: HashMap::new(),
            default_tile,
            edge_tile,
        }
    }

    pub fn get_width(&self) -> u16 {
        self.width
    }

    pub fn get_height(&self) -> u16 {
        self.height
    }

    pub fn get_default_tile(&self) -> &T {
        &self.default_tile
    }

    pub fn get_edge_tile(&self) -> &T {
        &self.edge_tile
    }

    /// Is this cell inside the map?
    pub fn contains(&self, x: i64, y: i64) -> bool {
        (0..self.width as i64).contains(&x) && (0..self.height as i64).contains(&y)
    }

    /// Get a tile from this tilemap, returning the default tile if no value was set and the edge tile if the
    /// coordinate is out of bounds.
    pub fn get(&self, coordinate: V2<u16>) -> &T {
        self.get_tile(coordinate.x as i64, coordinate.y as i64)
    }

    /// Set a tile in this tilemap.
    pub fn set(&mut self, coordinate: V2<u16>, tile: T) -> Result<()> {
        if coordinate.x >= self.width || coordinate.y >= self.height {
            return Err(TilemapError::OutOfBounds {
                x: coordinate.x,
                y: coordinate.y,
                width: self.width,
                height: self.height,
            });
        }

        if tile == self.default_tile {
            self.tiles.remove(&coordinate);
        } else {
            self.tiles.insert(coordinate, tile);
        }
        Ok(())
    }

    /// Iterate over all non-default tiles in this tilemap in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (V2<u16>, &T)> {
        self.tiles.iter().map(|(c, t)| (*c, t))
    }

    /// How many tiles differ from the default?
    pub fn stored_tiles(&self) -> usize {
        self.tiles.len()
    }
}

impl Tilemap<Tile> {
    /// An empty map surrounded by walls.
    pub fn walled(width: u16, height: u16) -> Tilemap<Tile> {
        Tilemap::new(width, height, Tile::EMPTY, Tile::WALL)
    }

    /// Parse a map drawn as text, one string per row with `y = 0` first.
    ///
    /// `.` and space are empty, `#` is [Tile::WALL], and a digit `n` is a wall of kind `n`.  Outside the drawing
    /// is walls.
    pub fn from_ascii(rows: &[&str]) -> Result<Tilemap<Tile>> {
        let height = u16::try_from(rows.len()).map_err(|_| TilemapError::TooLarge(rows.len()))?;
        let expected = rows.first().map(|r| r.chars().count()).unwrap_or(0);
        let width = u16::try_from(expected).map_err(|_| TilemapError::TooLarge(expected))?;

        let mut map = Tilemap::walled(width, height);
        for (y, row) in rows.iter().enumerate() {
            let found = row.chars().count();
            if found != expected {
                return Err(TilemapError::RaggedRows {
                    row: y,
                    expected,
                    found,
                });
            }

            for (x, c) in row.chars().enumerate() {
                let tile = match c {
                    '.' | ' ' => Tile::EMPTY,
                    '#' => Tile::WALL,
                    d => match d.to_digit(10) {
                        Some(kind) => Tile::wall(kind as u16),
                        None => return Err(TilemapError::UnknownTile(d)),
                    },
                };
                // Both fit: they were checked against the u16 dimensions above.
                map.set(V2::new(x as u16, y as u16), tile)?;
            }
        }

        Ok(map)
    }
}

impl<T: TileTrait> TileMap for Tilemap<T> {
    type Tile = T;

    fn get_tile(&self, x: i64, y: i64) -> &T {
        if !self.contains(x, y) {
            return &self.edge_tile;
        }

        self.tiles
            .get(&V2::new(x as u16, y as u16))
            .unwrap_or(&self.default_tile)
    }
}
