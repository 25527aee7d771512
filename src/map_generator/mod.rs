//! This module defines [`IslandMapGenerator`], which owns the renderer and the map of the
//! current run, and replaces the whole run on every regeneration.

use log::{info, warn};
use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::{
    error::GenerationError,
    map_parameters::{MapParameters, TileConfigs, validate_tile_configs},
    renderer::TileRenderer,
    tile_map::TileMap,
};

/// Generates island maps and hands their tiles to a [`TileRenderer`].
///
/// Only one map exists at a time. Generating again first destroys every instance of the
/// previous map, then builds a new [`TileMap`] from scratch.
pub struct IslandMapGenerator<R: TileRenderer> {
    renderer: R,
    tile_configs: TileConfigs<R::Prefab>,
    tile_map: Option<TileMap<R::Instance>>,
}

impl<R: TileRenderer> IslandMapGenerator<R> {
    pub fn new(renderer: R, tile_configs: TileConfigs<R::Prefab>) -> Self {
        Self {
            renderer,
            tile_configs,
            tile_map: None,
        }
    }

    /// Generates a map with a random number generator seeded from [`MapParameters::seed`].
    ///
    /// Equal parameters and tile configs always give the same map.
    pub fn generate(
        &mut self,
        map_parameters: &MapParameters,
    ) -> Result<&TileMap<R::Instance>, GenerationError> {
        let mut random_number_generator = StdRng::seed_from_u64(map_parameters.seed);
        self.generate_with_rng(map_parameters, &mut random_number_generator)
    }

    /// Generates a map, drawing every random number from `random_number_generator`.
    ///
    /// The parameters and tile configs are validated first; on error the previous map is left
    /// untouched.
    pub fn generate_with_rng<G: Rng + ?Sized>(
        &mut self,
        map_parameters: &MapParameters,
        random_number_generator: &mut G,
    ) -> Result<&TileMap<R::Instance>, GenerationError> {
        map_parameters.validate()?;
        validate_tile_configs(&self.tile_configs)?;

        if self.tile_map.is_some() {
            self.clear();
        }

        let tile_map = TileMap::generate(
            map_parameters,
            &self.tile_configs,
            &mut self.renderer,
            random_number_generator,
        );
        Ok(self.tile_map.insert(tile_map))
    }

    /// Destroys every instance of the current map and forgets the map.
    pub fn clear(&mut self) {
        match self.tile_map.take() {
            Some(mut tile_map) => {
                tile_map.despawn_all(&mut self.renderer);
                info!("Cleared previous map");
            }
            None => warn!("Clear requested, but no map has been generated"),
        }
    }

    /// The map of the last successful run, if it has not been cleared.
    pub fn tile_map(&self) -> Option<&TileMap<R::Instance>> {
        self.tile_map.as_ref()
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    pub fn tile_configs(&self) -> &TileConfigs<R::Prefab> {
        &self.tile_configs
    }

    /// Tile configs can be changed between runs. The current map is not affected.
    pub fn tile_configs_mut(&mut self) -> &mut TileConfigs<R::Prefab> {
        &mut self.tile_configs
    }
}
