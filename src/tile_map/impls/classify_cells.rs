use glam::DVec2;

use crate::{
    grid::{HexGrid, OffsetCoordinate},
    tile_map::{CellClass, IslandRegion, TileMap},
};

impl<I> TileMap<I> {
    /// Classifies the cell against this map's grid and islands. See [`classify_cell`].
    pub fn classify_cell(&self, offset_coordinate: OffsetCoordinate, fade_band: f64) -> CellClass {
        classify_cell(offset_coordinate, &self.grid, &self.island_list, fade_band)
    }
}

/// Decides whether a cell is excluded, forced to water, or eligible for tile sampling.
///
/// 1. Cells on the grid edge, and cells whose distance to the map center is at least the map
///    radius, are [`CellClass::Excluded`].
/// 2. Cells outside every island are [`CellClass::Water`].
/// 3. Cells inside an island but farther than `radius - fade_band` from its center are
///    [`CellClass::Water`] too.
/// 4. Everything else is [`CellClass::Eligible`].
///
/// Only the first island in `island_list` that contains the cell is considered in step 3,
/// even if a later island would put the cell further from its rim.
pub fn classify_cell(
    offset_coordinate: OffsetCoordinate,
    grid: &HexGrid,
    island_list: &[IslandRegion],
    fade_band: f64,
) -> CellClass {
    let position = offset_coordinate.into_inner().as_dvec2();

    let in_map_circle = position.distance(grid.map_center()) < grid.map_radius();
    if !in_map_circle || grid.is_edge(offset_coordinate) {
        return CellClass::Excluded;
    }

    match first_island_containing(position, island_list) {
        None => CellClass::Water,
        Some(island) if island.center.distance(position) > island.radius - fade_band => {
            CellClass::Water
        }
        Some(_) => CellClass::Eligible,
    }
}

/// Returns the first island, in layout order, that contains `position`.
pub fn first_island_containing(
    position: DVec2,
    island_list: &[IslandRegion],
) -> Option<&IslandRegion> {
    island_list.iter().find(|island| island.contains(position))
}

#[cfg(test)]
mod tests {
    use glam::DVec2;

    use super::classify_cell;
    use crate::{
        grid::{HexGrid, OffsetCoordinate, Size},
        map_parameters::MapParameters,
        tile_map::{CellClass, IslandRegion},
    };

    fn grid(width: i32, height: i32) -> HexGrid {
        HexGrid::from_parameters(&MapParameters {
            size: Size::new(width, height),
            ..Default::default()
        })
    }

    #[test]
    fn edge_cells_are_always_excluded() {
        for (width, height) in [(3, 3), (4, 7), (10, 5), (20, 20)] {
            let grid = grid(width, height);
            // An island covering the whole map must not rescue the edge.
            let island_list = [IslandRegion::new(grid.map_center(), 1000.)];
            for offset_coordinate in grid.traversal_order() {
                if grid.is_edge(offset_coordinate) {
                    assert_eq!(
                        classify_cell(offset_coordinate, &grid, &island_list, 1.),
                        CellClass::Excluded,
                        "{offset_coordinate} in {width}x{height}"
                    );
                }
            }
        }
    }

    #[test]
    fn cells_outside_map_circle_are_excluded() {
        let grid = grid(20, 20);
        let island_list = [IslandRegion::new(grid.map_center(), 1000.)];
        // Distance from (2, 2) to (10, 10) is about 11.3, beyond the radius of 10.
        assert_eq!(
            classify_cell(OffsetCoordinate::new(2, 2), &grid, &island_list, 1.),
            CellClass::Excluded
        );
        // (5, 10) lies exactly on the circle of radius 10 around (15, 10).
        let wide = self::grid(30, 20);
        let island_list = [IslandRegion::new(wide.map_center(), 1000.)];
        assert_eq!(
            classify_cell(OffsetCoordinate::new(5, 10), &wide, &island_list, 1.),
            CellClass::Excluded
        );
        assert_eq!(
            classify_cell(OffsetCoordinate::new(6, 10), &wide, &island_list, 1.),
            CellClass::Eligible
        );
    }

    #[test]
    fn cells_outside_islands_are_water() {
        let grid = grid(20, 20);
        let island_list = [IslandRegion::new(DVec2::new(5., 5.), 2.)];
        assert_eq!(
            classify_cell(OffsetCoordinate::new(10, 10), &grid, &island_list, 1.),
            CellClass::Water
        );
        assert_eq!(
            classify_cell(OffsetCoordinate::new(10, 10), &grid, &[], 1.),
            CellClass::Water
        );
    }

    #[test]
    fn fade_band_turns_island_rim_into_water() {
        let grid = grid(20, 20);
        let island_list = [IslandRegion::new(DVec2::new(10., 10.), 4.5)];
        // Distance 3 <= 3.5: inland.
        assert_eq!(
            classify_cell(OffsetCoordinate::new(13, 10), &grid, &island_list, 1.),
            CellClass::Eligible
        );
        // Distance 4 > 3.5: rim.
        assert_eq!(
            classify_cell(OffsetCoordinate::new(14, 10), &grid, &island_list, 1.),
            CellClass::Water
        );
        // Without a fade band the rim stays land.
        assert_eq!(
            classify_cell(OffsetCoordinate::new(14, 10), &grid, &island_list, 0.),
            CellClass::Eligible
        );
    }

    #[test]
    fn first_listed_island_decides_the_fade_band() {
        let grid = grid(11, 11);
        let point = OffsetCoordinate::new(5, 5);
        // Island A holds the point 4.2 away from its center, inside its 1-unit rim.
        let island_a = IslandRegion::new(DVec2::new(5., 0.8), 5.);
        // Island B holds the point at its very center.
        let island_b = IslandRegion::new(DVec2::new(5., 5.), 3.);

        assert_eq!(
            classify_cell(point, &grid, &[island_a, island_b], 1.),
            CellClass::Water
        );
        assert_eq!(
            classify_cell(point, &grid, &[island_b, island_a], 1.),
            CellClass::Eligible
        );
    }

    #[test]
    fn single_island_covering_small_map() {
        let grid = grid(5, 5);
        let island_list = [IslandRegion::new(DVec2::new(2., 2.), 6.)];
        for offset_coordinate in grid.traversal_order() {
            let class = classify_cell(offset_coordinate, &grid, &island_list, 1.);
            if grid.is_edge(offset_coordinate) {
                assert_eq!(class, CellClass::Excluded);
            } else {
                assert_eq!(class, CellClass::Eligible, "{offset_coordinate}");
            }
        }
    }
}
