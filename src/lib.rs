pub mod error;
pub mod grid;
pub mod map_generator;
pub mod map_parameters;
pub mod renderer;
pub mod tile;
pub mod tile_component;
pub mod tile_map;

pub use error::{GenerationError, TileError};
pub use grid::*;
pub use map_generator::IslandMapGenerator;
use map_parameters::tile_configs;
pub use map_parameters::{MapParameters, TileConfig, TileConfigs};
use rand::{SeedableRng, rngs::StdRng};
pub use renderer::{NullRenderer, TileRenderer};
pub use tile::Tile;
pub use tile_component::TileType;
pub use tile_map::{CellClass, TileMap};

/// Generates the placement grid of a map with the default tile weights and no rendering.
pub fn generate_map(map_parameters: &MapParameters) -> Result<TileMap<()>, GenerationError> {
    map_parameters.validate()?;

    let tile_configs = tile_configs(|_| Some(()));
    let mut random_number_generator = StdRng::seed_from_u64(map_parameters.seed);
    Ok(TileMap::generate(
        map_parameters,
        &tile_configs,
        &mut NullRenderer,
        &mut random_number_generator,
    ))
}
