//! Greyscale filter.

use crate::pixel::{saturate, Pixel, PixelBuffer};

use super::Filter;

/// Replaces red, green and blue with their mean plus `depth`.
///
/// `grey = (red + green + blue) / 3 + depth`, truncating division, then
/// saturated into 0..=255. A positive depth lightens the result, a negative
/// one darkens it. Alpha is unchanged.
///
/// # Example
///
/// ```
/// use rgba_filter::{Greyscale, Pixel};
///
/// let grey = Greyscale::new(0);
/// assert_eq!(grey.transform(Pixel::opaque(30, 60, 90)), Pixel::opaque(60, 60, 60));
///
/// let lighter = Greyscale::new(50);
/// assert_eq!(lighter.transform(Pixel::opaque(30, 60, 90)), Pixel::opaque(110, 110, 110));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Greyscale {
    depth: i32,
}

impl Greyscale {
    /// Create a greyscale filter with the given brightness offset.
    #[inline]
    pub const fn new(depth: i32) -> Self {
        Self { depth }
    }

    /// Brightness offset added to the channel mean.
    #[inline]
    pub fn depth(&self) -> i32 {
        self.depth
    }

    /// Apply the filter to a single pixel.
    #[inline]
    pub fn transform(&self, pixel: Pixel) -> Pixel {
        let grey = saturate(pixel.grey() + self.depth as i64);
        Pixel::new(grey, grey, grey, pixel.alpha)
    }
}

impl Filter for Greyscale {
    fn apply(&self, buffer: &mut PixelBuffer) {
        buffer.for_each_pixel(|pixel| self.transform(pixel));
    }

    fn name(&self) -> &'static str {
        "greyscale"
    }
}
