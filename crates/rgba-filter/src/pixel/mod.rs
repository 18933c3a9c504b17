//! Pixel types and the pixel buffer
//!
//! This module provides the [`Pixel`] value type, the [`Channel`] selector
//! and the [`PixelBuffer`] grid that every filter operates on.
//!
//! # Example
//!
//! ```
//! use rgba_filter::{Pixel, PixelBuffer};
//!
//! let mut buffer = PixelBuffer::new(2, 2).unwrap();
//! buffer.set(1, 0, Pixel::new(10, 20, 30, 255)).unwrap();
//!
//! // Brighten every pixel's red channel by one step
//! buffer.for_each_pixel(|mut pixel| {
//!     pixel.red = pixel.red.saturating_add(1);
//!     pixel
//! });
//!
//! assert_eq!(buffer.get(1, 0).unwrap().red, 11);
//! ```

mod buffer;
mod error;
mod pixel;

pub use buffer::PixelBuffer;
pub use error::BufferError;
pub use pixel::{saturate, Channel, Pixel};
