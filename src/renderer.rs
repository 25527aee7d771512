//! The rendering layer the generator hands placed tiles to.

use glam::DVec3;

use crate::tile_component::TileType;

/// Creates and destroys the visual object of a placed tile.
///
/// The generator never looks inside a prefab or an instance; it only passes prefabs from the
/// tile configuration to [`TileRenderer::instantiate`] and hands the returned instances back
/// to [`TileRenderer::destroy`] when the map is cleared.
pub trait TileRenderer {
    /// Template a tile is instantiated from.
    type Prefab;
    /// Handle to an instantiated tile.
    type Instance;

    fn instantiate(
        &mut self,
        tile_type: TileType,
        world_position: DVec3,
        prefab: &Self::Prefab,
    ) -> Self::Instance;

    fn destroy(&mut self, instance: Self::Instance);
}

/// A renderer that draws nothing, for callers that only need the placement grid.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullRenderer;

impl TileRenderer for NullRenderer {
    type Prefab = ();
    type Instance = ();

    fn instantiate(
        &mut self,
        _tile_type: TileType,
        _world_position: DVec3,
        _prefab: &Self::Prefab,
    ) -> Self::Instance {
    }

    fn destroy(&mut self, _instance: Self::Instance) {}
}
