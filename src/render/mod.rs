//! Rendering and rasterization.
//!
//! Converts geometric primitives into the integer pixels that cover them.
//! Plotting those pixels (colour, blending, surfaces) belongs to the caller.
//!
//! # Algorithms
//!
//! - **Bresenham's Line**: integer-only incremental line walk with a
//!   direction-symmetric tie-break
//!
//! # References
//!
//! - Bresenham, J. E. (1965). "Algorithm for computer control of a digital plotter."

mod line;

pub use line::{rasterize_line, LineRasterizer, RasterState};
