use glam::DVec2;
use log::debug;
use rand::Rng;

use crate::{
    grid::Size,
    map_parameters::{IslandLattice, MapParameters, RadiusRange},
    tile_map::TileMap,
};

/// A circular island, in grid units.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct IslandRegion {
    pub center: DVec2,
    pub radius: f64,
}

impl IslandRegion {
    pub const fn new(center: DVec2, radius: f64) -> Self {
        Self { center, radius }
    }

    /// Returns `true` if `point` lies strictly inside the island.
    #[inline]
    pub fn contains(&self, point: DVec2) -> bool {
        self.center.distance(point) < self.radius
    }
}

impl<I> TileMap<I> {
    /// Lays out the islands of the map. See [`island_layout`].
    pub fn generate_islands<R: Rng + ?Sized>(
        &mut self,
        map_parameters: &MapParameters,
        random_number_generator: &mut R,
    ) {
        self.island_list = island_layout(map_parameters, random_number_generator);
    }
}

/// Scatters `lattice.x * lattice.y` islands over the map.
///
/// Slot `(gx, gy)`, with `gx` in `1..=lattice.x` and `gy` in `1..=lattice.y`, is nominally
/// centered at `(gx * spacing_x, gy * spacing_y)` where `spacing = dimension / (lattice + 1)`
/// in whole cells. Each coordinate is then jittered by a uniform offset in
/// `[-island_jitter, island_jitter]` and the radius is drawn uniformly from `island_radius`.
///
/// Islands are returned in slot order, `gx` outer and `gy` inner.
pub fn island_layout<R: Rng + ?Sized>(
    map_parameters: &MapParameters,
    random_number_generator: &mut R,
) -> Vec<IslandRegion> {
    let Size { width, height } = map_parameters.size;
    let IslandLattice {
        x: lattice_x,
        y: lattice_y,
    } = map_parameters.island_lattice;
    let RadiusRange { min, max } = map_parameters.island_radius;
    let jitter = map_parameters.island_jitter;

    let spacing_x = (width / (lattice_x as i32).saturating_add(1)) as f64;
    let spacing_y = (height / (lattice_y as i32).saturating_add(1)) as f64;

    let mut island_list = Vec::with_capacity(lattice_x as usize * lattice_y as usize);
    for gx in 1..=lattice_x {
        for gy in 1..=lattice_y {
            let center = DVec2::new(
                gx as f64 * spacing_x + random_number_generator.random_range(-jitter..=jitter),
                gy as f64 * spacing_y + random_number_generator.random_range(-jitter..=jitter),
            );
            let radius = random_number_generator.random_range(min..=max);
            debug!(
                "Island {} at ({:.2}, {:.2}) with radius {:.2}",
                island_list.len(),
                center.x,
                center.y,
                radius
            );
            island_list.push(IslandRegion::new(center, radius));
        }
    }
    island_list
}
