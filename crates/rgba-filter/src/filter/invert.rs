//! Colour inversion filter.

use crate::pixel::{saturate, Pixel, PixelBuffer};

use super::Filter;

/// Colour negative with an optional brightness offset.
///
/// For each of red, green and blue: `255 - value + depth`, saturated into
/// 0..=255. Alpha is unchanged.
///
/// # Example
///
/// ```
/// use rgba_filter::{Invert, Pixel};
///
/// let invert = Invert::new(0);
/// assert_eq!(invert.transform(Pixel::opaque(10, 200, 255)), Pixel::opaque(245, 55, 0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Invert {
    depth: i32,
}

impl Invert {
    /// Create an inversion filter with the given brightness offset.
    #[inline]
    pub const fn new(depth: i32) -> Self {
        Self { depth }
    }

    /// Brightness offset added after inversion.
    #[inline]
    pub fn depth(&self) -> i32 {
        self.depth
    }

    /// Apply the filter to a single pixel.
    #[inline]
    pub fn transform(&self, pixel: Pixel) -> Pixel {
        let depth = self.depth as i64;
        let invert = |value: u8| saturate(u8::MAX as i64 - value as i64 + depth);
        Pixel::new(
            invert(pixel.red),
            invert(pixel.green),
            invert(pixel.blue),
            pixel.alpha,
        )
    }
}

impl Filter for Invert {
    fn apply(&self, buffer: &mut PixelBuffer) {
        buffer.for_each_pixel(|pixel| self.transform(pixel));
    }

    fn name(&self) -> &'static str {
        "invert"
    }
}
