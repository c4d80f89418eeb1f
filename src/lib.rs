//! # Line-Raster
//!
//! Incremental, integer-only line rasterization.
//!
//! Given two integer endpoints, line-raster produces the exact sequence of pixels
//! that best approximates the ideal straight line between them. No floating point
//! and no division is involved, so there is no error accumulation on long lines.
//!
//! ## Features
//!
//! - **Generalized Bresenham**: dominant axis chosen once per line, one add and
//!   one compare per pixel
//! - **Direction symmetric**: a line and its reverse cover the same pixels
//! - **Streaming or whole-path**: pull pixels through an `Iterator`, or take
//!   the full path as a `Vec`
//! - **Total**: every pair of `i32` endpoints is accepted, including
//!   single-pixel lines and the full `i32` range
//!
//! ## Quick Start
//!
//! ```
//! use line_raster::prelude::*;
//!
//! let mut raster = LineRasterizer::new(0, 0, 5, 2);
//! while raster.has_more() {
//!     let p = raster.current_pixel()?;
//!     // plot p.x, p.y
//!     raster.advance();
//! }
//!
//! // start endpoint, the three streamed pixels, stop endpoint
//! assert_eq!(rasterize_line(0, 0, 2, 0).len(), 5);
//! # Ok::<(), line_raster::Error>(())
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Serialize/Deserialize for [`geometry`] value types
//!
//! ## Academic References
//!
//! - Bresenham, J. E. (1965). "Algorithm for computer control of a digital plotter."
//!   *IBM Systems Journal*, 4(1), 25-30.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]
// Allow unwrap() in tests only
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::similar_names)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Core Modules
// ============================================================================

/// Pixel, segment and axis value types.
pub mod geometry;

/// Rasterization of geometric primitives.
pub mod render;

// ============================================================================
// Error Types
// ============================================================================

/// Error types for line-raster operations.
pub mod error;

pub use error::{Error, Result};

// ============================================================================
// Prelude
// ============================================================================

/// Commonly used types for convenient imports.
///
/// ```
/// use line_raster::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::geometry::{DominantAxis, LineSegment, Pixel};
    pub use crate::render::{rasterize_line, LineRasterizer, RasterState};
}
