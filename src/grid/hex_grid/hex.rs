use glam::{DMat2, DVec2, IVec2};

use crate::grid::offset_coordinate::OffsetCoordinate;

pub const SQRT_3: f64 = 1.732_050_807_568_877_2_f64;

/// Axial hexagon coordinate `(q, r)` of a flat-topped hexagon. The implicit third cube
/// coordinate is `-q - r`.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Hex(IVec2);
impl Hex {
    pub const fn new(q: i32, r: i32) -> Self {
        Self(IVec2::new(q, r))
    }

    /// Creates a new [`Hex`] from an "odd-q" [`OffsetCoordinate`].
    pub const fn from_offset(offset_coordinate: OffsetCoordinate) -> Self {
        let [x, y] = offset_coordinate.to_array();
        Hex::new(x, y - (x - (x & 1)) / 2)
    }

    /// Converts to the "odd-q" [`OffsetCoordinate`] of the same cell.
    pub const fn to_offset(self) -> OffsetCoordinate {
        let IVec2 { x: q, y: r } = self.0;
        OffsetCoordinate::new(q, r + (q - (q & 1)) / 2)
    }

    /// Rounds floating point coordinates to [`Hex`].
    pub fn round(fractional_hex: DVec2) -> Self {
        let mut rounded = fractional_hex.round();

        let diff = fractional_hex - rounded;

        if diff.x.abs() >= diff.y.abs() {
            rounded.x += 0.5_f64.mul_add(diff.y, diff.x).round();
        } else {
            rounded.y += 0.5_f64.mul_add(diff.x, diff.y).round();
        }

        Self(rounded.as_ivec2())
    }
}

/// Places flat-topped hexagons on the plane.
#[derive(PartialEq, Clone, Copy, Debug)]
pub struct HexLayout {
    /// Distance from the hex center to a corner, per axis.
    pub size: DVec2,
    pub origin: DVec2,
}
impl HexLayout {
    /// Hex to pixel, in units of `size`.
    const FORWARD_MATRIX: DMat2 = DMat2::from_cols_array(&[3.0 / 2.0, SQRT_3 / 2.0, 0.0, SQRT_3]);
    /// Pixel to fractional hex, the inverse of [`Self::FORWARD_MATRIX`].
    const INVERSE_MATRIX: DMat2 =
        DMat2::from_cols_array(&[2.0 / 3.0, -1.0 / 3.0, 0.0, SQRT_3 / 3.0]);

    pub fn new(size: DVec2, origin: DVec2) -> Self {
        Self { size, origin }
    }

    pub fn hex_to_pixel(self, hex: Hex) -> DVec2 {
        Self::FORWARD_MATRIX * hex.0.as_dvec2() * self.size + self.origin
    }

    pub fn pixel_to_hex(self, pixel_position: DVec2) -> Hex {
        let pt = (pixel_position - self.origin) / self.size;
        Hex::round(Self::INVERSE_MATRIX * pt)
    }
}
