//! Conversion boundary between host images and [`PixelBuffer`].
//!
//! The core never parses image formats itself. A host supplies an
//! [`ImageCodec`] for its own image type; [`RawRgbaCodec`] covers the
//! common case of an in-memory row-major RGBA8 bitmap.

use crate::pixel::PixelBuffer;

use super::error::FilterError;

/// Converts a host image type into a [`PixelBuffer`] and back.
///
/// For the empty-filter round trip to be lossless, `encode(decode(x))` must
/// reproduce every RGBA value of `x`.
pub trait ImageCodec {
    /// The host's image representation.
    type Image;

    /// Parse `image` into an RGBA buffer.
    ///
    /// # Errors
    ///
    /// Returns [`FilterError::Decode`] if the image cannot be represented as RGBA.
    fn decode(&self, image: &Self::Image) -> Result<PixelBuffer, FilterError>;

    /// Serialize `buffer` back into the host representation.
    ///
    /// # Errors
    ///
    /// Returns [`FilterError::Encode`] on failure.
    fn encode(&self, buffer: &PixelBuffer) -> Result<Self::Image, FilterError>;
}

/// An in-memory RGBA8 bitmap in conventional row-major order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawImage {
    /// Width in pixels.
    pub width: usize,
    /// Height in pixels.
    pub height: usize,
    /// `[R, G, B, A, ...]`, `width * height * 4` bytes, row by row.
    pub data: Vec<u8>,
}

impl RawImage {
    /// Create an image, without validating the data length.
    pub fn new(width: usize, height: usize, data: Vec<u8>) -> Self {
        Self {
            width,
            height,
            data,
        }
    }
}

/// Lossless codec for [`RawImage`].
#[derive(Debug, Clone, Copy, Default)]
pub struct RawRgbaCodec;

impl ImageCodec for RawRgbaCodec {
    type Image = RawImage;

    fn decode(&self, image: &RawImage) -> Result<PixelBuffer, FilterError> {
        PixelBuffer::from_rgba_rows(image.width, image.height, &image.data)
            .map_err(|e| FilterError::Decode(e.to_string()))
    }

    fn encode(&self, buffer: &PixelBuffer) -> Result<RawImage, FilterError> {
        Ok(RawImage::new(
            buffer.width(),
            buffer.height(),
            buffer.to_rgba_rows(),
        ))
    }
}
