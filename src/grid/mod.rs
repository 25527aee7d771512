mod hex_grid;
mod offset_coordinate;

pub use hex_grid::{HexGrid, hex};
pub use offset_coordinate::OffsetCoordinate;
use serde::{Deserialize, Serialize};

/// Represents the size of a grid or map with a specified width and height.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct Size {
    pub width: i32,
    pub height: i32,
}

impl Size {
    pub fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    /// The number of cells of a grid with this size, `0` if either dimension is not positive.
    pub fn area(&self) -> usize {
        if self.width <= 0 || self.height <= 0 {
            return 0;
        }
        self.width as usize * self.height as usize
    }
}
