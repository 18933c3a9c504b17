//! Global contrast enhancement ("sharpen").

use crate::pixel::{saturate, Pixel, PixelBuffer};

use super::Filter;

/// Pushes every colour channel away from the image mean.
///
/// This is a coarse, global contrast boost, not a convolution sharpen.
///
/// # Algorithm
///
/// 1. One read-only pass sums red, green and blue over all pixels and
///    derives truncated per-channel averages.
/// 2. One mutating pass moves each channel value:
///    - above its average: `value + depth`
///    - below its average: `value - depth`
///    - equal: unchanged
///
///    saturated into 0..=255.
///
/// Averages are recomputed on every call. Alpha is unchanged.
///
/// # Example
///
/// ```
/// use rgba_filter::{Filter, Pixel, PixelBuffer, Sharpen};
///
/// let pixels = vec![Pixel::opaque(100, 0, 0), Pixel::opaque(200, 0, 0)];
/// let mut buffer = PixelBuffer::from_pixels(1, 2, pixels).unwrap();
///
/// Sharpen::new(80).apply(&mut buffer);
///
/// assert_eq!(buffer.get(0, 0).unwrap().red, 20);
/// assert_eq!(buffer.get(0, 1).unwrap().red, 255);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sharpen {
    depth: i32,
}

/// Truncated per-channel averages of red, green and blue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct ChannelAverages {
    red: i64,
    green: i64,
    blue: i64,
}

impl ChannelAverages {
    /// Measure `buffer` in a single read-only traversal.
    pub(crate) fn measure(buffer: &PixelBuffer) -> Self {
        let (mut red, mut green, mut blue) = (0u64, 0u64, 0u64);
        buffer.visit_pixels(|pixel| {
            red += pixel.red as u64;
            green += pixel.green as u64;
            blue += pixel.blue as u64;
        });

        // buffers are never empty
        let count = buffer.len() as u64;
        Self {
            red: (red / count) as i64,
            green: (green / count) as i64,
            blue: (blue / count) as i64,
        }
    }
}

impl Sharpen {
    /// Create a sharpen filter with the given push distance.
    #[inline]
    pub const fn new(depth: i32) -> Self {
        Self { depth }
    }

    /// Distance each channel is pushed away from its average.
    #[inline]
    pub fn depth(&self) -> i32 {
        self.depth
    }

    fn enhance(&self, value: u8, average: i64) -> u8 {
        let value = value as i64;
        let depth = self.depth as i64;
        if value > average {
            saturate(value + depth)
        } else if value < average {
            saturate(value - depth)
        } else {
            value as u8
        }
    }

    fn transform(&self, pixel: Pixel, averages: ChannelAverages) -> Pixel {
        Pixel::new(
            self.enhance(pixel.red, averages.red),
            self.enhance(pixel.green, averages.green),
            self.enhance(pixel.blue, averages.blue),
            pixel.alpha,
        )
    }
}

impl Filter for Sharpen {
    fn apply(&self, buffer: &mut PixelBuffer) {
        let averages = ChannelAverages::measure(buffer);
        tracing::trace!(
            red = averages.red,
            green = averages.green,
            blue = averages.blue,
            "Sharpen channel averages"
        );
        buffer.for_each_pixel(|pixel| self.transform(pixel, averages));
    }

    fn name(&self) -> &'static str {
        "sharpen"
    }
}
