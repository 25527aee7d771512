use glam::{DVec2, DVec3};
use hex::{Hex, HexLayout};

use crate::{grid::offset_coordinate::OffsetCoordinate, map_parameters::MapParameters, tile::Tile};

use super::Size;

pub mod hex;

/// The hexagonal grid a map is generated on.
///
/// Cells are addressed by [`OffsetCoordinate`] and laid out as flat-topped hexagons in
/// "odd-q" offset order: every odd column is pushed half a cell further along the row axis.
#[derive(Clone, Copy, Debug)]
pub struct HexGrid {
    pub size: Size,
    pub layout: HexLayout,
}

impl HexGrid {
    /// Creates the grid described by `map_parameters`.
    ///
    /// `tile_size` is the corner-to-corner width of one hexagon, so the layout's hex size
    /// (center to corner) is half of it. With that, neighbouring columns are `0.75 * tile_size`
    /// apart and neighbouring rows `tile_size * √3 / 2` apart.
    pub fn from_parameters(map_parameters: &MapParameters) -> Self {
        let hex_size = map_parameters.tile_size / 2.;
        Self {
            size: map_parameters.size,
            layout: HexLayout::new(DVec2::splat(hex_size), DVec2::ZERO),
        }
    }

    #[inline]
    pub const fn width(&self) -> i32 {
        self.size.width
    }

    #[inline]
    pub const fn height(&self) -> i32 {
        self.size.height
    }

    /// Returns `true` if `offset_coordinate` lies inside the grid.
    pub fn contains(&self, offset_coordinate: OffsetCoordinate) -> bool {
        let [x, y] = offset_coordinate.to_array();
        (0..self.width()).contains(&x) && (0..self.height()).contains(&y)
    }

    /// Returns `true` if the cell lies on the outermost ring of columns or rows.
    pub fn is_edge(&self, offset_coordinate: OffsetCoordinate) -> bool {
        let [x, y] = offset_coordinate.to_array();
        x == 0 || y == 0 || x == self.width() - 1 || y == self.height() - 1
    }

    /// The center of the circular map mask, in grid units.
    pub fn map_center(&self) -> DVec2 {
        DVec2::new(self.width() as f64 / 2., self.height() as f64 / 2.)
    }

    /// The radius of the circular map mask, in grid units.
    pub fn map_radius(&self) -> f64 {
        self.width().min(self.height()) as f64 / 2.
    }

    /// Converts an offset coordinate to a tile, or `None` if it lies outside the grid.
    pub fn offset_to_tile(&self, offset_coordinate: OffsetCoordinate) -> Option<Tile> {
        if !self.contains(offset_coordinate) {
            return None;
        }
        let [x, y] = offset_coordinate.to_array();
        Some(Tile::new((y * self.width() + x) as usize))
    }

    pub fn tile_to_offset(&self, tile: Tile) -> OffsetCoordinate {
        let width = self.width() as usize;
        OffsetCoordinate::new((tile.index() % width) as i32, (tile.index() / width) as i32)
    }

    /// Iterates over every cell in generation order: columns from left to right, and inside
    /// each column rows from bottom to top.
    ///
    /// Both the west `(x - 1, y)` and the south `(x, y - 1)` neighbours of a cell are yielded
    /// before the cell itself.
    pub fn traversal_order(&self) -> impl Iterator<Item = OffsetCoordinate> + use<> {
        let (width, height) = (self.width(), self.height());
        (0..width).flat_map(move |x| (0..height).map(move |y| OffsetCoordinate::new(x, y)))
    }

    /// World position of a cell's center. The map lies in the `x`/`z` plane with `y = 0`.
    pub fn world_position(&self, offset_coordinate: OffsetCoordinate) -> DVec3 {
        let hex = Hex::from_offset(offset_coordinate);
        let pixel = self.layout.hex_to_pixel(hex);
        DVec3::new(pixel.x, 0., pixel.y)
    }

    /// Returns the tile whose hexagon contains the world position, ignoring its `y` component.
    pub fn tile_at_world_position(&self, world_position: DVec3) -> Option<Tile> {
        let hex = self
            .layout
            .pixel_to_hex(DVec2::new(world_position.x, world_position.z));
        self.offset_to_tile(hex.to_offset())
    }
}
