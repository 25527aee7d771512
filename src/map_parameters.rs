use std::{
    fs,
    path::Path,
    time::{SystemTime, UNIX_EPOCH},
};

use enum_map::EnumMap;
use serde::{Deserialize, Serialize};

use crate::{error::GenerationError, grid::Size, tile_component::TileType};

/// Parameters of one generation run.
///
/// Any field missing from a JSON document falls back to its [`Default`] value.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MapParameters {
    pub size: Size,
    /// Corner-to-corner width of one hexagon in world units.
    pub tile_size: f64,
    /// How many islands are scattered along each axis.
    pub island_lattice: IslandLattice,
    /// Island radii are drawn uniformly from this range, in grid units.
    pub island_radius: RadiusRange,
    /// Each island center is moved by up to this distance along each axis.
    pub island_jitter: f64,
    /// Width of the band along an island's rim that is turned into water.
    pub fade_band: f64,
    pub seed: u64,
}

impl MapParameters {
    pub const DEFAULT_WIDTH: i32 = 20;
    pub const DEFAULT_HEIGHT: i32 = 20;
    pub const ISLAND_MIN_RADIUS: f64 = 4.;
    pub const ISLAND_MAX_RADIUS: f64 = 6.;
    pub const ISLAND_JITTER: f64 = 1.;
    pub const FADE_BAND: f64 = 1.;

    /// Parses map parameters from a JSON string.
    pub fn from_json_str(json: &str) -> Result<Self, GenerationError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads map parameters from a JSON file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, GenerationError> {
        let json = fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Checks that the parameters describe a map that can be generated.
    pub fn validate(&self) -> Result<(), GenerationError> {
        let Size { width, height } = self.size;
        if width <= 0 || height <= 0 || !self.tile_size.is_finite() || self.tile_size <= 0. {
            return Err(GenerationError::InvalidDimensions {
                width,
                height,
                tile_size: self.tile_size,
            });
        }

        let IslandLattice { x, y } = self.island_lattice;
        if x == 0 || y == 0 || x > width as u32 || y > height as u32 {
            return Err(GenerationError::InvalidIslandLattice { x, y });
        }

        let RadiusRange { min, max } = self.island_radius;
        if !(min.is_finite() && max.is_finite())
            || min <= 0.
            || max < min
            || !sampled_width_is_finite(max - min)
        {
            return Err(GenerationError::InvalidIslandRadius { min, max });
        }

        for (name, value) in [
            ("island_jitter", self.island_jitter),
            ("fade_band", self.fade_band),
        ] {
            if !value.is_finite() || value < 0. {
                return Err(GenerationError::InvalidParameter { name, value });
            }
        }
        if !sampled_width_is_finite(2. * self.island_jitter) {
            return Err(GenerationError::InvalidParameter {
                name: "island_jitter",
                value: self.island_jitter,
            });
        }

        Ok(())
    }
}

/// Uniform float sampling scales the range width up slightly before drawing, so the width needs
/// headroom below `f64::MAX`.
fn sampled_width_is_finite(width: f64) -> bool {
    (2. * width).is_finite()
}

impl Default for MapParameters {
    fn default() -> Self {
        Self {
            size: Size::new(Self::DEFAULT_WIDTH, Self::DEFAULT_HEIGHT),
            tile_size: 1.,
            island_lattice: IslandLattice { x: 2, y: 2 },
            island_radius: RadiusRange {
                min: Self::ISLAND_MIN_RADIUS,
                max: Self::ISLAND_MAX_RADIUS,
            },
            island_jitter: Self::ISLAND_JITTER,
            fade_band: Self::FADE_BAND,
            seed: SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|duration| duration.as_millis() as u64)
                .unwrap_or_default(),
        }
    }
}

/// The number of island slots along each axis. The map holds `x * y` islands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct IslandLattice {
    pub x: u32,
    pub y: u32,
}

/// An inclusive range of radii.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct RadiusRange {
    pub min: f64,
    pub max: f64,
}

/// Sampling weight and visual prefab of one tile type.
///
/// `P` is the renderer's prefab handle. A tile whose prefab is `None` is still classified and
/// recorded, but nothing is instantiated for it.
#[derive(Clone, Debug, PartialEq)]
pub struct TileConfig<P> {
    pub base_weight: f64,
    pub prefab: Option<P>,
}

pub type TileConfigs<P> = EnumMap<TileType, TileConfig<P>>;

/// Builds the configuration of every tile type with its default base weight, asking `prefab`
/// for the prefab handle.
pub fn tile_configs<P>(mut prefab: impl FnMut(TileType) -> Option<P>) -> TileConfigs<P> {
    EnumMap::from_fn(|tile_type: TileType| TileConfig {
        base_weight: tile_type.default_base_weight(),
        prefab: prefab(tile_type),
    })
}

/// Checks that every base weight is a finite, non-negative number.
///
/// A zero weight is allowed. When all weights add up to zero, every sampled cell is skipped
/// instead of failing the whole run.
pub fn validate_tile_configs<P>(tile_configs: &TileConfigs<P>) -> Result<(), GenerationError> {
    match tile_configs
        .iter()
        .find(|(_, config)| !config.base_weight.is_finite() || config.base_weight < 0.)
    {
        Some((tile_type, config)) => Err(GenerationError::InvalidTileWeight {
            tile_type,
            weight: config.base_weight,
        }),
        None => Ok(()),
    }
}
