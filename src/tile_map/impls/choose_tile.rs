use enum_map::EnumMap;
use rand::Rng;

use crate::{
    error::TileError,
    grid::OffsetCoordinate,
    map_parameters::TileConfigs,
    tile_component::TileType,
    tile_map::TileMap,
};

/// Sampling weights for a single cell, iterated in [`TileType`] declaration order.
#[derive(Clone, Debug, PartialEq)]
pub struct WeightTable(EnumMap<TileType, f64>);

impl WeightTable {
    /// Seeds the table with the base weight of every tile type.
    pub fn from_base_weights<P>(tile_configs: &TileConfigs<P>) -> Self {
        Self(EnumMap::from_fn(|tile_type| tile_configs[tile_type].base_weight))
    }

    #[inline]
    pub fn weight(&self, tile_type: TileType) -> f64 {
        self.0[tile_type]
    }

    /// Multiplies every weight by its bias against `neighbor`. See [`neighbor_bias`].
    pub fn apply_neighbor_bias(&mut self, neighbor: TileType) {
        for (candidate, weight) in self.0.iter_mut() {
            *weight *= neighbor_bias(neighbor, candidate);
        }
    }

    pub fn total(&self) -> f64 {
        self.0.values().fold(0., |total, weight| total + weight)
    }

    /// Draws a tile type with probability `weight / total`.
    ///
    /// `[0, total)` is split into consecutive intervals, one per tile type in declaration order,
    /// and the interval containing a uniform roll wins. Tile types with zero weight own an
    /// empty interval and are never drawn. A roll landing exactly on a running sum belongs to the
    /// next type, not to the one whose interval ends there (an inclusive `roll <= sum` would hand
    /// a roll of `0` to a leading zero-weight type).
    ///
    /// Finite weights can still add up to infinity. That total is reported as
    /// [`TileError::NonFiniteWeightTotal`] instead of being drawn from.
    pub fn sample<R: Rng + ?Sized>(
        &self,
        random_number_generator: &mut R,
    ) -> Result<TileType, TileError> {
        let total = self.total();
        if !total.is_finite() {
            return Err(TileError::NonFiniteWeightTotal { total });
        }
        if total <= 0. {
            return Err(TileError::ZeroWeightTotal { total });
        }

        let roll = random_number_generator.random_range(0.0..total);
        let mut sum = 0.;
        for (tile_type, weight) in self.0.iter() {
            sum += weight;
            if roll < sum {
                return Ok(tile_type);
            }
        }

        Err(TileError::ZeroWeightTotal { total })
    }
}

/// The factor applied to `candidate`'s weight when `neighbor` was placed west or south of the
/// current cell.
///
/// | Neighbor       | Candidates                     | Factor |
/// |----------------|--------------------------------|--------|
/// | Water or River | Water, River, Lake, Pasture    | 1.6    |
/// | Water or River | Desert, Wasteland              | 0.5    |
/// | Stone          | Iron, Gold, Diamond, Coal      | 1.5    |
/// | Desert         | Clay, Wasteland                | 1.4    |
/// | Desert         | Water                          | 0.4    |
/// | Pasture        | Lake, River, Water             | 1.2    |
///
/// Any other pair keeps its weight.
pub const fn neighbor_bias(neighbor: TileType, candidate: TileType) -> f64 {
    use TileType::*;

    match (neighbor, candidate) {
        (Water | River, Water | River | Lake | Pasture) => 1.6,
        (Water | River, Desert | Wasteland) => 0.5,
        (Stone, Iron | Gold | Diamond | Coal) => 1.5,
        (Desert, Clay | Wasteland) => 1.4,
        (Desert, Water) => 0.4,
        (Pasture, Lake | River | Water) => 1.2,
        _ => 1.,
    }
}

impl<I> TileMap<I> {
    /// Builds the weight table of the cell, biased by the tiles already placed to its west
    /// `(x - 1, y)` and then to its south `(x, y - 1)`.
    ///
    /// A missing, excluded or skipped neighbour adds no bias.
    pub fn biased_weight_table<P>(
        &self,
        offset_coordinate: OffsetCoordinate,
        tile_configs: &TileConfigs<P>,
    ) -> WeightTable {
        let mut weight_table = WeightTable::from_base_weights(tile_configs);
        for neighbor in [offset_coordinate.west(), offset_coordinate.south()] {
            if let Some(tile_type) = self.tile_type_at(neighbor) {
                weight_table.apply_neighbor_bias(tile_type);
            }
        }
        weight_table
    }

    /// Chooses the tile type of an eligible cell.
    pub fn choose_tile<P, R: Rng + ?Sized>(
        &self,
        offset_coordinate: OffsetCoordinate,
        tile_configs: &TileConfigs<P>,
        random_number_generator: &mut R,
    ) -> Result<TileType, TileError> {
        self.biased_weight_table(offset_coordinate, tile_configs)
            .sample(random_number_generator)
    }
}

#[cfg(test)]
mod tests {
    use enum_map::Enum;
    use rand::{SeedableRng, rngs::StdRng};

    use super::{WeightTable, neighbor_bias};
    use crate::{
        error::TileError,
        grid::{OffsetCoordinate, Size},
        map_parameters::{MapParameters, TileConfigs, tile_configs},
        tile_component::TileType,
        tile_map::TileMap,
    };

    fn default_configs() -> TileConfigs<()> {
        tile_configs(|_| Some(()))
    }

    fn empty_map() -> TileMap<()> {
        TileMap::new(&MapParameters {
            size: Size::new(6, 6),
            ..Default::default()
        })
    }

    fn place(tile_map: &mut TileMap<()>, x: i32, y: i32, tile_type: TileType) {
        let tile = tile_map
            .grid
            .offset_to_tile(OffsetCoordinate::new(x, y))
            .unwrap();
        tile_map.placement_grid[tile.index()] = Some(tile_type);
    }

    #[test]
    fn water_west_neighbor_halves_wasteland() {
        let configs = default_configs();
        let mut tile_map = empty_map();
        place(&mut tile_map, 0, 0, TileType::Water);

        let weight_table = tile_map.biased_weight_table(OffsetCoordinate::new(1, 0), &configs);
        assert_eq!(
            weight_table.weight(TileType::Wasteland),
            TileType::Wasteland.default_base_weight() * 0.5
        );
        assert_eq!(
            weight_table.weight(TileType::Stone),
            TileType::Stone.default_base_weight()
        );
    }

    #[test]
    fn west_and_south_bias_compound() {
        let configs = default_configs();
        let mut tile_map = empty_map();
        place(&mut tile_map, 1, 2, TileType::Water);
        place(&mut tile_map, 2, 1, TileType::Water);

        let weight_table = tile_map.biased_weight_table(OffsetCoordinate::new(2, 2), &configs);
        assert_eq!(
            weight_table.weight(TileType::Pasture),
            TileType::Pasture.default_base_weight() * 1.6 * 1.6
        );
    }

    #[test]
    fn unplaced_neighbors_add_no_bias() {
        let configs = default_configs();
        let tile_map = empty_map();
        assert_eq!(
            tile_map.biased_weight_table(OffsetCoordinate::new(0, 0), &configs),
            WeightTable::from_base_weights(&configs)
        );
        assert_eq!(
            tile_map.biased_weight_table(OffsetCoordinate::new(3, 3), &configs),
            WeightTable::from_base_weights(&configs)
        );
    }

    #[test]
    fn bias_table() {
        use TileType::*;

        assert_eq!(neighbor_bias(River, Lake), 1.6);
        assert_eq!(neighbor_bias(River, Desert), 0.5);
        assert_eq!(neighbor_bias(Stone, Diamond), 1.5);
        assert_eq!(neighbor_bias(Stone, Stone), 1.);
        assert_eq!(neighbor_bias(Desert, Clay), 1.4);
        assert_eq!(neighbor_bias(Desert, Water), 0.4);
        assert_eq!(neighbor_bias(Pasture, River), 1.2);
        assert_eq!(neighbor_bias(Pasture, Pasture), 1.);
        assert_eq!(neighbor_bias(Gold, Water), 1.);
        for neighbor in (0..TileType::LENGTH).map(TileType::from_usize) {
            for candidate in (0..TileType::LENGTH).map(TileType::from_usize) {
                assert!(neighbor_bias(neighbor, candidate) > 0.);
            }
        }
    }

    #[test]
    fn zero_total_weight_is_rejected() {
        let mut configs = default_configs();
        for (_, config) in configs.iter_mut() {
            config.base_weight = 0.;
        }
        let weight_table = WeightTable::from_base_weights(&configs);
        let mut random = StdRng::seed_from_u64(3);
        assert_eq!(
            weight_table.sample(&mut random),
            Err(TileError::ZeroWeightTotal { total: 0. })
        );
    }

    #[test]
    fn overflowing_total_weight_is_rejected() {
        let mut configs = default_configs();
        for (_, config) in configs.iter_mut() {
            config.base_weight = f64::MAX / 4.;
        }
        let weight_table = WeightTable::from_base_weights(&configs);
        let mut random = StdRng::seed_from_u64(3);
        assert_eq!(
            weight_table.sample(&mut random),
            Err(TileError::NonFiniteWeightTotal {
                total: f64::INFINITY
            })
        );
    }

    #[test]
    fn biased_weights_can_overflow_a_finite_total() {
        let mut configs = default_configs();
        for (_, config) in configs.iter_mut() {
            config.base_weight = 0.;
        }
        configs[TileType::Pasture].base_weight = f64::MAX * 0.9;
        let mut tile_map = empty_map();
        place(&mut tile_map, 1, 2, TileType::Water);
        let mut random = StdRng::seed_from_u64(3);
        assert_eq!(
            tile_map.choose_tile(OffsetCoordinate::new(2, 2), &configs, &mut random),
            Err(TileError::NonFiniteWeightTotal {
                total: f64::INFINITY
            })
        );
    }

    #[test]
    fn zero_weight_types_are_never_drawn() {
        let mut configs = default_configs();
        for (tile_type, config) in configs.iter_mut() {
            if tile_type != TileType::Gold {
                config.base_weight = 0.;
            }
        }
        let weight_table = WeightTable::from_base_weights(&configs);
        let mut random = StdRng::seed_from_u64(5);
        for _ in 0..1000 {
            assert_eq!(weight_table.sample(&mut random), Ok(TileType::Gold));
        }
    }

    #[test]
    fn draws_follow_the_weights() {
        let weight_table = WeightTable::from_base_weights(&default_configs());
        let total = weight_table.total();
        let mut random = StdRng::seed_from_u64(20240611);

        let trials = 120_000;
        let mut counts = [0_u32; TileType::LENGTH];
        for _ in 0..trials {
            let tile_type = weight_table.sample(&mut random).unwrap();
            counts[tile_type.into_usize()] += 1;
        }

        let chi_square: f64 = (0..TileType::LENGTH)
            .map(|index| {
                let expected =
                    trials as f64 * weight_table.weight(TileType::from_usize(index)) / total;
                let difference = counts[index] as f64 - expected;
                difference * difference / expected
            })
            .sum();

        // 11 degrees of freedom: the 0.1% critical value is 31.26.
        assert!(chi_square < 31.26, "chi-square {chi_square} with counts {counts:?}");
    }
}
