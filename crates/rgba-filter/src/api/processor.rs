//! ImageProcessor -- the primary entry point for the crate.
//!
//! [`ImageProcessor`] wraps the filter pipeline (decode, filter, encode)
//! around a host-supplied [`ImageCodec`].

use crate::filter::{apply_filters, Filter};
use crate::pixel::PixelBuffer;

use super::codec::ImageCodec;
use super::error::FilterError;

/// Runs an ordered list of filters over a host image.
///
/// # Design
///
/// - Constructor takes the codec (the only state the processor holds)
/// - [`apply()`](Self::apply) takes `&self`, so one processor is
///   **reusable** across images and may be shared between threads when the
///   codec allows it
/// - Each call decodes into a fresh [`PixelBuffer`] that it owns
///   exclusively until it is encoded again
///
/// # Example
///
/// ```
/// use rgba_filter::presets;
/// use rgba_filter::{ImageProcessor, RawImage, RawRgbaCodec};
///
/// let processor = ImageProcessor::new(RawRgbaCodec);
/// let image = RawImage::new(1, 1, vec![10, 200, 255, 255]);
///
/// let inverted = processor.apply(&image, &[&presets::INVERT_0]).unwrap();
/// assert_eq!(inverted.data, vec![245, 55, 0, 255]);
///
/// // No filters: the image comes back unchanged
/// let same = processor.apply(&image, &[]).unwrap();
/// assert_eq!(same, image);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ImageProcessor<C> {
    codec: C,
}

impl<C: ImageCodec> ImageProcessor<C> {
    /// Create a processor around `codec`.
    pub fn new(codec: C) -> Self {
        Self { codec }
    }

    /// The codec used at the pipeline boundary.
    #[inline]
    pub fn codec(&self) -> &C {
        &self.codec
    }

    /// Decode `image`, apply `filters` in order, and encode the result.
    ///
    /// An empty filter list is legal and returns the decoded image re-encoded.
    ///
    /// # Errors
    ///
    /// Returns [`FilterError::Decode`] or [`FilterError::Encode`] from the
    /// codec. Either aborts the call; no partial result is produced.
    pub fn apply(&self, image: &C::Image, filters: &[&dyn Filter]) -> Result<C::Image, FilterError> {
        let mut buffer = self.codec.decode(image)?;

        tracing::debug!(
            width = buffer.width(),
            height = buffer.height(),
            filters = filters.len(),
            "Running filter pipeline"
        );

        self.apply_buffer(&mut buffer, filters);
        self.codec.encode(&buffer)
    }

    /// Apply `filters` in order to an already decoded buffer.
    ///
    /// The buffer keeps its dimensions.
    pub fn apply_buffer(&self, buffer: &mut PixelBuffer, filters: &[&dyn Filter]) {
        apply_filters(buffer, filters);
    }
}
