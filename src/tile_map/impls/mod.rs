mod choose_tile;
mod classify_cells;
mod generate_islands;
mod place_tiles;

pub use choose_tile::*;
pub use classify_cells::*;
pub use generate_islands::*;
