//! This module defines the [`TileMap`] struct and its associated methods.
//! It holds the complete state of one generation run: the islands, the classification and the
//! tile type of every cell, and the visual instances created for placed tiles.
//! Its method contains 2 parts:
//! 1. The common methods for querying and tearing down a map, included in the `mod.rs` file.
//! 2. The map generating methods are defined in the [`impls`] module (which is the submodule of
//!    this module).

use log::info;
use rand::Rng;

use crate::{
    error::TileError,
    grid::{HexGrid, OffsetCoordinate},
    map_parameters::{MapParameters, TileConfigs},
    renderer::TileRenderer,
    tile::Tile,
    tile_component::TileType,
};

mod impls;

pub use impls::*;

/// How a cell was treated during generation.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum CellClass {
    /// On the map edge or outside the circular map mask. Nothing is placed.
    #[default]
    Excluded,
    /// Outside every island, or inside an island's fade band.
    Water,
    /// Inside an island; its tile type is sampled from the neighbour-biased weight table.
    Eligible,
}

/// The state of one generation run.
///
/// `I` is the renderer's handle to an instantiated tile. Every per-cell list is indexed by
/// [`Tile::index()`].
#[derive(Debug)]
pub struct TileMap<I> {
    /// The grid the map is generated on.
    pub grid: HexGrid,
    /// Islands in the order they were laid out.
    pub island_list: Vec<IslandRegion>,
    /// Tile type of each tile. `None` means the tile was excluded or skipped.
    pub placement_grid: Vec<Option<TileType>>,
    /// Classification of each tile.
    pub cell_class_list: Vec<CellClass>,
    /// Visual instance of each tile, if one was created.
    pub spawned_instance_list: Vec<Option<I>>,
    /// Cells that could not be placed or instantiated, in generation order.
    pub skipped_cell_list: Vec<(OffsetCoordinate, TileError)>,
}

impl<I> TileMap<I> {
    /// Creates an empty tile map with the given parameters.
    pub fn new(map_parameters: &MapParameters) -> Self {
        let grid = HexGrid::from_parameters(map_parameters);
        let size = grid.size.area();

        Self {
            grid,
            island_list: Vec::new(),
            placement_grid: vec![None; size],
            cell_class_list: vec![CellClass::Excluded; size],
            spawned_instance_list: std::iter::repeat_with(|| None).take(size).collect(),
            skipped_cell_list: Vec::new(),
        }
    }

    /// Runs a full generation: lays out the islands, then classifies, samples and
    /// instantiates every cell in traversal order.
    ///
    /// The parameters and tile configs are expected to be validated already.
    pub fn generate<R, G>(
        map_parameters: &MapParameters,
        tile_configs: &TileConfigs<R::Prefab>,
        renderer: &mut R,
        random_number_generator: &mut G,
    ) -> Self
    where
        R: TileRenderer<Instance = I>,
        G: Rng + ?Sized,
    {
        info!(
            "Generating {}x{} island map",
            map_parameters.size.width, map_parameters.size.height
        );

        let mut tile_map = Self::new(map_parameters);
        tile_map.generate_islands(map_parameters, random_number_generator);
        tile_map.place_tiles(map_parameters, tile_configs, renderer, random_number_generator);

        info!(
            "Map complete: {} islands, {} tiles placed, {} cells skipped",
            tile_map.island_list.len(),
            tile_map.placed_tiles().count(),
            tile_map.skipped_cell_list.len()
        );
        tile_map
    }

    /// Returns an iterator over all tiles in the map.
    #[must_use = "iterators are lazy and do nothing unless consumed"]
    pub fn all_tiles(&self) -> impl Iterator<Item = Tile> + use<I> {
        (0..self.grid.size.area()).map(Tile::new)
    }

    /// Returns the tile type at the offset coordinate, `None` if nothing was placed there or
    /// the coordinate lies outside the grid.
    pub fn tile_type_at(&self, offset_coordinate: OffsetCoordinate) -> Option<TileType> {
        self.grid
            .offset_to_tile(offset_coordinate)
            .and_then(|tile| tile.tile_type(self))
    }

    /// Returns an iterator over every placed tile and its tile type.
    pub fn placed_tiles(&self) -> impl Iterator<Item = (Tile, TileType)> + '_ {
        self.placement_grid
            .iter()
            .enumerate()
            .filter_map(|(index, tile_type)| {
                tile_type.map(|tile_type| (Tile::new(index), tile_type))
            })
    }

    /// Counts the tiles of the given type.
    pub fn count_of(&self, tile_type: TileType) -> usize {
        self.placed_tiles()
            .filter(|&(_, placed)| placed == tile_type)
            .count()
    }

    /// Returns the visual instance created for the tile, if any.
    pub fn instance(&self, tile: Tile) -> Option<&I> {
        self.spawned_instance_list
            .get(tile.index())
            .and_then(Option::as_ref)
    }

    /// Hands every visual instance of the map back to `renderer` for destruction.
    ///
    /// The logical placement is kept.
    pub fn despawn_all<R>(&mut self, renderer: &mut R)
    where
        R: TileRenderer<Instance = I>,
    {
        self.spawned_instance_list
            .iter_mut()
            .filter_map(Option::take)
            .for_each(|instance| renderer.destroy(instance));
    }
}
