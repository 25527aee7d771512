use glam::IVec2;

/// A coordinate in the offset coordinate system.
///
/// Offset coordinates address a cell by its column `x` and row `y`, with the grid's
/// left-bottom corner as origin. For a grid of `width` by `height` cells the valid ranges are
/// `x ∈ [0, width)` and `y ∈ [0, height)`.
///
/// In the generated map, odd columns are shifted by half a cell along the row axis
/// (see [`HexGrid::world_position`](super::HexGrid::world_position)).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OffsetCoordinate(pub IVec2);

impl OffsetCoordinate {
    pub const fn new(x: i32, y: i32) -> Self {
        Self(IVec2::new(x, y))
    }

    pub const fn into_inner(self) -> IVec2 {
        self.0
    }

    pub const fn to_array(self) -> [i32; 2] {
        [self.0.x, self.0.y]
    }

    /// The cell one column to the left, which is visited before `self` during generation.
    pub const fn west(self) -> Self {
        Self::new(self.0.x - 1, self.0.y)
    }

    /// The cell one row below, which is visited before `self` during generation.
    pub const fn south(self) -> Self {
        Self::new(self.0.x, self.0.y - 1)
    }
}

impl core::fmt::Display for OffsetCoordinate {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "({},{})", self.0.x, self.0.y)
    }
}
