//! Error types for pixel buffer construction and access

use thiserror::Error;

/// Error type for [`PixelBuffer`](super::PixelBuffer) operations.
///
/// `IndexOutOfRange` signals a programming defect: correct traversal never
/// produces it. The other variants are returned when a buffer is built from
/// untrusted dimensions or data.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BufferError {
    /// Coordinate outside the buffer
    #[error("pixel ({x}, {y}) is outside a {width}x{height} buffer")]
    IndexOutOfRange {
        /// Requested x coordinate
        x: usize,
        /// Requested y coordinate
        y: usize,
        /// Buffer width
        width: usize,
        /// Buffer height
        height: usize,
    },

    /// Width or height is zero (or their product overflows)
    #[error("invalid buffer dimensions: {width}x{height}")]
    InvalidDimensions {
        /// Requested width
        width: usize,
        /// Requested height
        height: usize,
    },

    /// Supplied pixel data does not cover width * height pixels
    #[error("pixel data length mismatch: expected {expected}, got {actual}")]
    LengthMismatch {
        /// Expected number of elements
        expected: usize,
        /// Number of elements supplied
        actual: usize,
    },
}
