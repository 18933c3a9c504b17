//! Sepia filter.

use crate::pixel::{saturate, Pixel, PixelBuffer};

use super::Filter;

/// Warm-toned greyscale.
///
/// Starting from `grey = (red + green + blue) / 3`:
///
/// ```text
/// red   = grey + 2 * depth
/// green = grey + depth
/// blue  = grey - depth
/// ```
///
/// each saturated into 0..=255. Useful depths are roughly 0..=100; a
/// negative depth gives a cold tint instead. Alpha is unchanged.
///
/// # Example
///
/// ```
/// use rgba_filter::{Pixel, Sepia};
///
/// let sepia = Sepia::new(50);
/// assert_eq!(sepia.transform(Pixel::opaque(60, 60, 60)), Pixel::opaque(160, 110, 10));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sepia {
    depth: i32,
}

impl Sepia {
    /// Create a sepia filter. Larger depths look older.
    #[inline]
    pub const fn new(depth: i32) -> Self {
        Self { depth }
    }

    /// Tint strength.
    #[inline]
    pub fn depth(&self) -> i32 {
        self.depth
    }

    /// Apply the filter to a single pixel.
    #[inline]
    pub fn transform(&self, pixel: Pixel) -> Pixel {
        let grey = pixel.grey();
        let depth = self.depth as i64;
        Pixel::new(
            saturate(grey + 2 * depth),
            saturate(grey + depth),
            saturate(grey - depth),
            pixel.alpha,
        )
    }
}

impl Filter for Sepia {
    fn apply(&self, buffer: &mut PixelBuffer) {
        buffer.for_each_pixel(|pixel| self.transform(pixel));
    }

    fn name(&self) -> &'static str {
        "sepia"
    }
}
