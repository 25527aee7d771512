use log::error;
use rand::Rng;

use crate::{
    error::TileError,
    map_parameters::{MapParameters, TileConfigs},
    renderer::TileRenderer,
    tile_component::TileType,
    tile_map::{CellClass, TileMap},
};

impl<I> TileMap<I> {
    /// Classifies, samples and instantiates every cell of the map.
    ///
    /// Cells are visited in [`HexGrid::traversal_order`](crate::grid::HexGrid::traversal_order),
    /// so the west and south neighbours of a cell are final before the cell itself is sampled.
    /// Each cell is written once.
    ///
    /// A cell whose weights add up to zero stays unplaced. A cell whose tile type has no prefab
    /// keeps its tile type but gets no instance. Both are logged and recorded in
    /// [`TileMap::skipped_cell_list`].
    pub fn place_tiles<R, G>(
        &mut self,
        map_parameters: &MapParameters,
        tile_configs: &TileConfigs<R::Prefab>,
        renderer: &mut R,
        random_number_generator: &mut G,
    ) where
        R: TileRenderer<Instance = I>,
        G: Rng + ?Sized,
    {
        let grid = self.grid;

        for offset_coordinate in grid.traversal_order() {
            let Some(tile) = grid.offset_to_tile(offset_coordinate) else {
                continue;
            };

            let cell_class = self.classify_cell(offset_coordinate, map_parameters.fade_band);
            self.cell_class_list[tile.index()] = cell_class;

            let chosen = match cell_class {
                CellClass::Excluded => continue,
                CellClass::Water => Ok(TileType::Water),
                CellClass::Eligible => {
                    self.choose_tile(offset_coordinate, tile_configs, random_number_generator)
                }
            };

            let tile_type = match chosen {
                Ok(tile_type) => tile_type,
                Err(tile_error) => {
                    error!("Invalid tile at {offset_coordinate}: {tile_error}");
                    self.skipped_cell_list.push((offset_coordinate, tile_error));
                    continue;
                }
            };

            self.placement_grid[tile.index()] = Some(tile_type);

            match &tile_configs[tile_type].prefab {
                Some(prefab) => {
                    let world_position = grid.world_position(offset_coordinate);
                    let instance = renderer.instantiate(tile_type, world_position, prefab);
                    self.spawned_instance_list[tile.index()] = Some(instance);
                }
                None => {
                    let tile_error = TileError::MissingPrefab { tile_type };
                    error!("Invalid tile at {offset_coordinate}: {tile_error}");
                    self.skipped_cell_list.push((offset_coordinate, tile_error));
                }
            }
        }
    }
}
