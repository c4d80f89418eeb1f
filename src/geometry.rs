//! Geometric primitives for rasterization.
//!
//! Integer pixel coordinates and the line segments built from them.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A pixel with integer coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Pixel {
    /// X coordinate.
    pub x: i32,
    /// Y coordinate.
    pub y: i32,
}

impl Pixel {
    /// Origin pixel (0, 0).
    pub const ORIGIN: Self = Self::new(0, 0);

    /// Create a new pixel.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Swap the x and y coordinates.
    #[must_use]
    pub const fn transposed(self) -> Self {
        Self::new(self.y, self.x)
    }

    /// Coordinate along the given axis.
    #[must_use]
    pub const fn along(self, axis: DominantAxis) -> i32 {
        match axis {
            DominantAxis::X => self.x,
            DominantAxis::Y => self.y,
        }
    }
}

impl From<(i32, i32)> for Pixel {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

impl From<Pixel> for (i32, i32) {
    fn from(p: Pixel) -> Self {
        (p.x, p.y)
    }
}

impl fmt::Display for Pixel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// The axis a line advances along by exactly one pixel per step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum DominantAxis {
    /// More horizontal than vertical travel.
    X,
    /// At least as much vertical as horizontal travel (exact diagonals included).
    Y,
}

impl DominantAxis {
    /// The minor axis for this dominant axis.
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Self::X => Self::Y,
            Self::Y => Self::X,
        }
    }
}

/// A line segment between two pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LineSegment {
    /// Start pixel.
    pub start: Pixel,
    /// Stop pixel.
    pub stop: Pixel,
}

impl LineSegment {
    /// Create a new line segment.
    #[must_use]
    pub const fn new(start: Pixel, stop: Pixel) -> Self {
        Self { start, stop }
    }

    /// Create a segment from coordinates.
    #[must_use]
    pub const fn from_coords(x1: i32, y1: i32, x2: i32, y2: i32) -> Self {
        Self::new(Pixel::new(x1, y1), Pixel::new(x2, y2))
    }

    /// The same segment walked in the opposite direction.
    #[must_use]
    pub const fn reversed(self) -> Self {
        Self::new(self.stop, self.start)
    }

    /// The segment mirrored across the `x == y` diagonal.
    #[must_use]
    pub const fn transposed(self) -> Self {
        Self::new(self.start.transposed(), self.stop.transposed())
    }

    /// True if both endpoints are the same pixel.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.start == self.stop
    }

    /// Signed deltas `(stop - start)`, widened so they never overflow.
    #[must_use]
    pub fn deltas(&self) -> (i64, i64) {
        (
            i64::from(self.stop.x) - i64::from(self.start.x),
            i64::from(self.stop.y) - i64::from(self.start.y),
        )
    }

    /// Axis spanning more pixels. Ties go to [`DominantAxis::Y`].
    #[must_use]
    pub fn dominant_axis(&self) -> DominantAxis {
        let (dx, dy) = self.deltas();
        if dx.abs() > dy.abs() {
            DominantAxis::X
        } else {
            DominantAxis::Y
        }
    }

    /// Number of unit steps along the dominant axis.
    #[must_use]
    pub fn span(&self) -> u32 {
        let (dx, dy) = self.deltas();
        dx.unsigned_abs().max(dy.unsigned_abs()) as u32
    }
}

impl fmt::Display for LineSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.start, self.stop)
    }
}
