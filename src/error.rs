//! Errors raised while generating a map.
//!
//! [`GenerationError`] rejects a generation call before anything is mutated.
//! [`TileError`] only affects a single cell: the cell is skipped, reported, and the run goes on.

use thiserror::Error;

use crate::tile_component::TileType;

#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("invalid map dimensions {width}x{height} with tile size {tile_size}")]
    InvalidDimensions {
        width: i32,
        height: i32,
        tile_size: f64,
    },
    #[error("island lattice {x}x{y} must be at least 1x1 and no larger than the map")]
    InvalidIslandLattice { x: u32, y: u32 },
    #[error("island radius range [{min}, {max}] is invalid")]
    InvalidIslandRadius { min: f64, max: f64 },
    #[error("{name} = {value} is out of range")]
    InvalidParameter { name: &'static str, value: f64 },
    #[error("base weight {weight} of {tile_type} must be finite and not negative")]
    InvalidTileWeight { tile_type: TileType, weight: f64 },
    #[error("failed to read map parameters: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse map parameters: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum TileError {
    #[error("no prefab configured for {tile_type}")]
    MissingPrefab { tile_type: TileType },
    #[error("total weight {total} leaves no tile to choose")]
    ZeroWeightTotal { total: f64 },
    #[error("total weight overflowed to {total}")]
    NonFiniteWeightTotal { total: f64 },
}
