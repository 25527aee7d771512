use enum_map::Enum;
use serde::{Deserialize, Serialize};

/// The terrain placed on a tile.
///
/// The declaration order is significant: weight tables iterate in this order, so it decides
/// which tile type a weighted roll lands on.
#[derive(Enum, PartialEq, Eq, Clone, Copy, Hash, Serialize, Deserialize, Debug)]
pub enum TileType {
    Clay,
    Coal,
    Desert,
    Diamond,
    Gold,
    Iron,
    Lake,
    Pasture,
    River,
    Stone,
    Wasteland,
    Water,
}

impl TileType {
    pub fn name(&self) -> &str {
        match self {
            TileType::Clay => "Clay",
            TileType::Coal => "Coal",
            TileType::Desert => "Desert",
            TileType::Diamond => "Diamond",
            TileType::Gold => "Gold",
            TileType::Iron => "Iron",
            TileType::Lake => "Lake",
            TileType::Pasture => "Pasture",
            TileType::River => "River",
            TileType::Stone => "Stone",
            TileType::Wasteland => "Wasteland",
            TileType::Water => "Water",
        }
    }

    /// The sampling weight of the tile type before any neighbour bias is applied.
    pub const fn default_base_weight(&self) -> f64 {
        match self {
            TileType::Clay => 1.0,
            TileType::Coal => 0.7,
            TileType::Desert => 1.0,
            TileType::Diamond => 0.3,
            TileType::Gold => 0.5,
            TileType::Iron => 0.8,
            TileType::Lake => 0.6,
            TileType::Pasture => 1.2,
            TileType::River => 0.7,
            TileType::Stone => 1.0,
            TileType::Wasteland => 0.8,
            TileType::Water => 0.8,
        }
    }
}

impl core::fmt::Display for TileType {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}
