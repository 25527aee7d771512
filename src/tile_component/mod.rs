//! This module contains the components of the tile in the map.
//! For now this is only the tile's [`TileType`].

pub mod tile_type;

pub use tile_type::TileType;
