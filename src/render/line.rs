//! Incremental line rasterization.
//!
//! [`LineRasterizer`] walks a [`LineSegment`] one pixel at a time using a
//! generalized Bresenham decision variable. Only integer additions and
//! comparisons happen per step; the dominant axis is chosen once when the
//! line is set up.
//!
//! The stream starts at the start endpoint and ends once the stop
//! coordinate on the dominant axis has been emitted.
//! [`LineRasterizer::full_path`] brackets that stream with both endpoints.
//!
//! # Example
//!
//! ```
//! use line_raster::render::LineRasterizer;
//! use line_raster::geometry::Pixel;
//!
//! let mut raster = LineRasterizer::new(0, 0, 5, 2);
//! let path = raster.full_path();
//! assert_eq!(path.first(), Some(&Pixel::new(0, 0)));
//! assert_eq!(path.last(), Some(&Pixel::new(5, 2)));
//! ```

use std::iter::FusedIterator;

use tracing::{debug, trace};

use crate::error::{Error, Result};
use crate::geometry::{DominantAxis, LineSegment, Pixel};

/// Lifecycle state of a [`LineRasterizer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RasterState {
    /// Pixels remain; the current pixel may be read.
    Active,
    /// The pixel at the stop coordinate on the dominant axis was emitted.
    Exhausted,
}

/// Stateful generator of the pixels approximating a straight line.
///
/// Deltas and the decision variable are kept in `i64`, so every pair of
/// `i32` endpoints is accepted without overflow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineRasterizer {
    segment: LineSegment,
    x_current: i32,
    y_current: i32,
    abs_2dx: i64,
    abs_2dy: i64,
    x_step: i32,
    y_step: i32,
    /// Decision variable.
    d: i64,
    axis: DominantAxis,
    /// Travel on the dominant axis is in the positive direction.
    left_right: bool,
    valid: bool,
}

impl LineRasterizer {
    /// Create a rasterizer for the line from `(x1, y1)` to `(x2, y2)`.
    #[must_use]
    pub fn new(x1: i32, y1: i32, x2: i32, y2: i32) -> Self {
        Self::from_segment(LineSegment::from_coords(x1, y1, x2, y2))
    }

    /// Create a rasterizer for a segment.
    #[must_use]
    pub fn from_segment(segment: LineSegment) -> Self {
        let (dx, dy) = segment.deltas();

        let abs_2dx = dx.abs() << 1;
        let x_step = if dx < 0 { -1 } else { 1 };

        let abs_2dy = dy.abs() << 1;
        let y_step = if dy < 0 { -1 } else { 1 };

        let (axis, left_right, d, valid) = if abs_2dx > abs_2dy {
            (
                DominantAxis::X,
                x_step > 0,
                abs_2dy - (abs_2dx >> 1),
                segment.start.x != segment.stop.x,
            )
        } else {
            (
                DominantAxis::Y,
                y_step > 0,
                abs_2dx - (abs_2dy >> 1),
                segment.start.y != segment.stop.y,
            )
        };

        let raster = Self {
            segment,
            x_current: segment.start.x,
            y_current: segment.start.y,
            abs_2dx,
            abs_2dy,
            x_step,
            y_step,
            d,
            axis,
            left_right,
            valid,
        };

        trace!(
            start = %segment.start,
            stop = %segment.stop,
            axis = ?axis,
            d,
            "line rasterizer initialized"
        );

        raster
    }

    /// Reset the rasterizer onto a new line.
    ///
    /// All previous state is discarded.
    pub fn initialize(&mut self, x1: i32, y1: i32, x2: i32, y2: i32) {
        *self = Self::new(x1, y1, x2, y2);
    }

    /// Reset the rasterizer onto a new segment.
    pub fn initialize_segment(&mut self, segment: LineSegment) {
        *self = Self::from_segment(segment);
    }

    /// True while there are pixels left to read.
    #[inline]
    #[must_use]
    pub const fn has_more(&self) -> bool {
        self.valid
    }

    /// Current lifecycle state.
    #[must_use]
    pub const fn state(&self) -> RasterState {
        if self.valid {
            RasterState::Active
        } else {
            RasterState::Exhausted
        }
    }

    /// The current pixel.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidState`] when [`has_more`](Self::has_more) is false.
    pub fn current_pixel(&self) -> Result<Pixel> {
        self.check("current_pixel")?;
        Ok(Pixel::new(self.x_current, self.y_current))
    }

    /// X coordinate of the current pixel.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidState`] when [`has_more`](Self::has_more) is false.
    pub fn x(&self) -> Result<i32> {
        self.check("x")?;
        Ok(self.x_current)
    }

    /// Y coordinate of the current pixel.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidState`] when [`has_more`](Self::has_more) is false.
    pub fn y(&self) -> Result<i32> {
        self.check("y")?;
        Ok(self.y_current)
    }

    /// Move to the next pixel. Does nothing once exhausted.
    #[inline]
    pub fn advance(&mut self) {
        if !self.valid {
            return;
        }
        match self.axis {
            DominantAxis::X => self.x_dominant_step(),
            DominantAxis::Y => self.y_dominant_step(),
        }
    }

    /// The whole line: start endpoint, every remaining pixel, stop endpoint.
    ///
    /// Drives the generator to exhaustion. The endpoints are emitted on top of
    /// the stream, so a fresh generator yields each endpoint twice and a
    /// degenerate line yields its single pixel twice.
    pub fn full_path(&mut self) -> Vec<Pixel> {
        let mut points = Vec::with_capacity(self.remaining().saturating_add(2));
        points.push(self.segment.start);
        points.extend(self.by_ref());
        points.push(self.segment.stop);
        points
    }

    /// Number of pixels the stream will still yield.
    #[must_use]
    pub fn remaining(&self) -> usize {
        if !self.valid {
            return 0;
        }
        let current = Pixel::new(self.x_current, self.y_current).along(self.axis);
        let stop = self.segment.stop.along(self.axis);
        let left = (i64::from(stop) - i64::from(current)).unsigned_abs() + 1;
        usize::try_from(left).unwrap_or(usize::MAX)
    }

    /// The segment being rasterized.
    #[must_use]
    pub const fn segment(&self) -> LineSegment {
        self.segment
    }

    /// Start endpoint.
    #[must_use]
    pub const fn start(&self) -> Pixel {
        self.segment.start
    }

    /// Stop endpoint.
    #[must_use]
    pub const fn stop(&self) -> Pixel {
        self.segment.stop
    }

    /// Axis advanced by exactly one pixel per step.
    #[must_use]
    pub const fn dominant_axis(&self) -> DominantAxis {
        self.axis
    }

    fn check(&self, accessor: &'static str) -> Result<()> {
        if self.valid {
            Ok(())
        } else {
            debug!(accessor, segment = %self.segment, "rejected read from exhausted rasterizer");
            Err(Error::InvalidState { accessor })
        }
    }

    fn x_dominant_step(&mut self) {
        if self.x_current == self.segment.stop.x {
            self.valid = false;
        } else {
            if (self.d > 0) || (self.d == 0 && self.left_right) {
                self.y_current += self.y_step;
                self.d -= self.abs_2dx;
            }
            self.x_current += self.x_step;
            self.d += self.abs_2dy;
        }
    }

    fn y_dominant_step(&mut self) {
        if self.y_current == self.segment.stop.y {
            self.valid = false;
        } else {
            if (self.d > 0) || (self.d == 0 && self.left_right) {
                self.x_current += self.x_step;
                self.d -= self.abs_2dy;
            }
            self.y_current += self.y_step;
            self.d += self.abs_2dx;
        }
    }
}

impl Iterator for LineRasterizer {
    type Item = Pixel;

    fn next(&mut self) -> Option<Pixel> {
        if !self.valid {
            return None;
        }
        let pixel = Pixel::new(self.x_current, self.y_current);
        self.advance();
        Some(pixel)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.remaining();
        (n, Some(n))
    }
}

impl ExactSizeIterator for LineRasterizer {}

impl FusedIterator for LineRasterizer {}

impl From<LineSegment> for LineRasterizer {
    fn from(segment: LineSegment) -> Self {
        Self::from_segment(segment)
    }
}

/// Rasterize the line from `(x1, y1)` to `(x2, y2)` in one call.
///
/// Equivalent to `LineRasterizer::new(x1, y1, x2, y2).full_path()`.
#[must_use]
pub fn rasterize_line(x1: i32, y1: i32, x2: i32, y2: i32) -> Vec<Pixel> {
    LineRasterizer::new(x1, y1, x2, y2).full_path()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pixels(coords: &[(i32, i32)]) -> Vec<Pixel> {
        coords.iter().copied().map(Pixel::from).collect()
    }

    /// Drive the has_more / current_pixel / advance protocol to exhaustion.
    fn drive(raster: &mut LineRasterizer) -> Vec<Pixel> {
        let mut seen = Vec::new();
        while raster.has_more() {
            seen.push(raster.current_pixel().unwrap());
            raster.advance();
        }
        seen
    }

    #[test]
    fn test_golden_x_dominant_stream() {
        let mut raster = LineRasterizer::new(0, 0, 5, 2);
        assert_eq!(raster.dominant_axis(), DominantAxis::X);
        assert_eq!(
            drive(&mut raster),
            pixels(&[(0, 0), (1, 0), (2, 1), (3, 1), (4, 2), (5, 2)])
        );
    }

    #[test]
    fn test_golden_full_path_brackets_stream() {
        assert_eq!(
            rasterize_line(0, 0, 5, 2),
            pixels(&[(0, 0), (0, 0), (1, 0), (2, 1), (3, 1), (4, 2), (5, 2), (5, 2)])
        );
    }

    #[test]
    fn test_current_pixel_starts_at_start_endpoint() {
        let raster = LineRasterizer::new(0, 0, 5, 2);
        assert!(raster.has_more());
        assert_eq!(raster.current_pixel(), Ok(Pixel::new(0, 0)));

        let raster = LineRasterizer::new(-4, 7, 3, -9);
        assert_eq!(raster.current_pixel(), Ok(Pixel::new(-4, 7)));
    }

    #[test]
    fn test_golden_y_dominant_is_transpose() {
        let mut raster = LineRasterizer::new(0, 0, 2, 5);
        assert_eq!(raster.dominant_axis(), DominantAxis::Y);
        assert_eq!(
            drive(&mut raster),
            pixels(&[(0, 0), (0, 1), (1, 2), (1, 3), (2, 4), (2, 5)])
        );
    }

    #[test]
    fn test_golden_reversed() {
        let mut raster = LineRasterizer::new(5, 2, 0, 0);
        assert_eq!(
            drive(&mut raster),
            pixels(&[(5, 2), (4, 2), (3, 1), (2, 1), (1, 0), (0, 0)])
        );
    }

    #[test]
    fn test_degenerate_line() {
        let mut raster = LineRasterizer::new(5, 5, 5, 5);
        assert!(!raster.has_more());
        assert_eq!(raster.state(), RasterState::Exhausted);
        assert_eq!(raster.remaining(), 0);
        assert_eq!(raster.full_path(), pixels(&[(5, 5), (5, 5)]));
    }

    #[test]
    fn test_adjacent_pixels_stream_both_endpoints() {
        let mut raster = LineRasterizer::new(0, 0, 1, 0);
        assert!(raster.has_more());
        assert_eq!(raster.remaining(), 2);
        assert_eq!(drive(&mut raster), pixels(&[(0, 0), (1, 0)]));

        raster.initialize(0, 0, 1, 0);
        assert_eq!(raster.full_path(), pixels(&[(0, 0), (0, 0), (1, 0), (1, 0)]));
    }

    #[test]
    fn test_horizontal_line() {
        let mut raster = LineRasterizer::new(-2, 3, 2, 3);
        assert_eq!(
            drive(&mut raster),
            pixels(&[(-2, 3), (-1, 3), (0, 3), (1, 3), (2, 3)])
        );
    }

    #[test]
    fn test_vertical_line() {
        let mut raster = LineRasterizer::new(4, 2, 4, -1);
        assert_eq!(raster.dominant_axis(), DominantAxis::Y);
        assert_eq!(drive(&mut raster), pixels(&[(4, 2), (4, 1), (4, 0), (4, -1)]));
    }

    #[test]
    fn test_exact_diagonal_uses_y_dominant() {
        let mut raster = LineRasterizer::new(0, 0, 3, 3);
        assert_eq!(raster.dominant_axis(), DominantAxis::Y);
        assert_eq!(drive(&mut raster), pixels(&[(0, 0), (1, 1), (2, 2), (3, 3)]));
    }

    #[test]
    fn test_tie_break_is_direction_symmetric() {
        // d == 0 on the first step in both directions.
        assert_eq!(drive(&mut LineRasterizer::new(0, 0, 2, 1)), pixels(&[(0, 0), (1, 1), (2, 1)]));
        assert_eq!(drive(&mut LineRasterizer::new(2, 1, 0, 0)), pixels(&[(2, 1), (1, 1), (0, 0)]));

        assert_eq!(drive(&mut LineRasterizer::new(0, 1, 2, 0)), pixels(&[(0, 1), (1, 0), (2, 0)]));
        assert_eq!(drive(&mut LineRasterizer::new(2, 0, 0, 1)), pixels(&[(2, 0), (1, 0), (0, 1)]));
    }

    #[test]
    fn test_iterator_matches_protocol() {
        let streamed: Vec<Pixel> = LineRasterizer::new(0, 0, 5, 2).collect();
        assert_eq!(streamed, drive(&mut LineRasterizer::new(0, 0, 5, 2)));
    }

    #[test]
    fn test_axis_accessors_match_current_pixel() {
        let mut raster = LineRasterizer::new(0, 0, 2, 5);
        raster.advance();
        raster.advance();
        let p = raster.current_pixel().unwrap();
        assert_eq!(p, Pixel::new(1, 2));
        assert_eq!(raster.x().unwrap(), p.x);
        assert_eq!(raster.y().unwrap(), p.y);
    }

    #[test]
    fn test_invalid_state_after_exhaustion() {
        let mut raster = LineRasterizer::new(0, 0, 3, 1);
        raster.by_ref().for_each(drop);

        for _ in 0..3 {
            assert_eq!(
                raster.current_pixel(),
                Err(Error::InvalidState { accessor: "current_pixel" })
            );
            assert_eq!(raster.x(), Err(Error::InvalidState { accessor: "x" }));
            assert_eq!(raster.y(), Err(Error::InvalidState { accessor: "y" }));
            raster.advance();
        }
    }

    #[test]
    fn test_initialize_resets_everything() {
        let mut raster = LineRasterizer::new(0, 0, 10, 1);
        raster.advance();
        raster.advance();

        raster.initialize(0, 0, 5, 2);
        assert_eq!(raster, LineRasterizer::new(0, 0, 5, 2));

        raster.by_ref().for_each(drop);
        raster.initialize_segment(LineSegment::from_coords(0, 0, 0, 4));
        assert!(raster.has_more());
        assert_eq!(raster.current_pixel(), Ok(Pixel::new(0, 0)));
    }

    #[test]
    fn test_full_path_after_partial_consumption() {
        let mut raster = LineRasterizer::new(0, 0, 5, 2);
        assert_eq!(raster.next(), Some(Pixel::new(0, 0)));
        assert_eq!(
            raster.full_path(),
            pixels(&[(0, 0), (1, 0), (2, 1), (3, 1), (4, 2), (5, 2), (5, 2)])
        );
        assert!(!raster.has_more());
    }

    #[test]
    fn test_exact_size() {
        let mut raster = LineRasterizer::new(0, 0, -7, 3);
        assert_eq!(raster.len(), 8);
        raster.next();
        assert_eq!(raster.len(), 7);
        assert_eq!(raster.count(), 7);
    }

    #[test]
    fn test_fused_after_exhaustion() {
        let mut raster = LineRasterizer::new(0, 0, 1, 0);
        assert_eq!(raster.next(), Some(Pixel::new(0, 0)));
        assert_eq!(raster.next(), Some(Pixel::new(1, 0)));
        assert_eq!(raster.next(), None);
        assert_eq!(raster.next(), None);
    }

    #[test]
    fn test_extreme_coordinates_do_not_overflow() {
        let mut raster = LineRasterizer::new(i32::MIN, i32::MIN, i32::MAX, i32::MAX - 1);
        assert_eq!(raster.dominant_axis(), DominantAxis::X);
        let expected = usize::try_from(u64::from(u32::MAX) + 1).unwrap_or(usize::MAX);
        assert_eq!(raster.remaining(), expected);

        let first: Vec<Pixel> = raster.by_ref().take(3).collect();
        assert_eq!(first[0], Pixel::new(i32::MIN, i32::MIN));
        for w in first.windows(2) {
            assert_eq!(w[1].x - w[0].x, 1);
            assert!((w[1].y - w[0].y) == 0 || (w[1].y - w[0].y) == 1);
        }
    }

    #[test]
    fn test_from_segment() {
        let seg = LineSegment::from_coords(1, 1, 4, 2);
        let raster = LineRasterizer::from(seg);
        assert_eq!(raster.segment(), seg);
        assert_eq!(raster.start(), Pixel::new(1, 1));
        assert_eq!(raster.stop(), Pixel::new(4, 2));
    }

    #[test]
    fn test_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<LineRasterizer>();
    }
}

// ============================================================================
// Property-based tests with proptest
// ============================================================================
