//! Unified error type for the rgba-filter public API.
//!
//! [`FilterError`] covers the codec boundary and wraps [`BufferError`] for
//! convenient `?` propagation in application code.

use thiserror::Error;

use crate::pixel::BufferError;

/// Unified error type for the rgba-filter public API.
///
/// Filters themselves cannot fail; every variant comes from converting an
/// image into or out of a [`PixelBuffer`](crate::PixelBuffer).
///
/// # Example
///
/// ```
/// use rgba_filter::{FilterError, PixelBuffer};
///
/// fn blank(width: usize, height: usize) -> Result<PixelBuffer, FilterError> {
///     Ok(PixelBuffer::new(width, height)?)
/// }
///
/// assert!(blank(0, 3).is_err());
/// ```
#[derive(Debug, Error)]
pub enum FilterError {
    /// The external image could not be turned into an RGBA buffer
    #[error("decode error: {0}")]
    Decode(String),

    /// The buffer could not be turned back into the external representation
    #[error("encode error: {0}")]
    Encode(String),

    /// Invalid buffer construction or access
    #[error("buffer error: {0}")]
    Buffer(#[from] BufferError),
}
