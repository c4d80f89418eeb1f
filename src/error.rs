//! Error types for line-raster operations.

use thiserror::Error;

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while consuming a rasterized line.
///
/// Every integer endpoint pair is a valid input, so the only failure is
/// reading from a generator that has no fragment to give.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// A fragment accessor was called after the generator was exhausted.
    #[error("LineRasterizer::{accessor}(): invalid state, no fragments remain")]
    InvalidState {
        /// Name of the accessor that was rejected (`x`, `y` or `current_pixel`).
        accessor: &'static str,
    },
}
