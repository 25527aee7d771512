use glam::DVec3;

use crate::{
    grid::{HexGrid, OffsetCoordinate},
    tile_component::TileType,
    tile_map::{CellClass, TileMap},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
/// `Tile` represents a tile on the map, where the `usize` is the index of the current tile.
///
/// The index is `y * width + x` for the tile at offset coordinate `(x, y)`.
pub struct Tile(usize);

impl Tile {
    #[inline]
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    /// Get the index of the tile.
    #[inline(always)]
    pub const fn index(&self) -> usize {
        self.0
    }

    /// Converts a tile to the corresponding offset coordinate based on grid parameters.
    pub fn to_offset(&self, grid: HexGrid) -> OffsetCoordinate {
        grid.tile_to_offset(*self)
    }

    /// World position of the tile's center.
    pub fn world_position(&self, grid: HexGrid) -> DVec3 {
        grid.world_position(self.to_offset(grid))
    }

    /// Returns the tile type placed on the tile, `None` if the tile was excluded or skipped.
    #[inline]
    pub fn tile_type<I>(&self, tile_map: &TileMap<I>) -> Option<TileType> {
        tile_map.placement_grid[self.0]
    }

    /// Returns how the tile was classified during generation.
    #[inline]
    pub fn cell_class<I>(&self, tile_map: &TileMap<I>) -> CellClass {
        tile_map.cell_class_list[self.0]
    }
}
