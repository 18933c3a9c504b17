//! Channel clearing filter.

use crate::pixel::{Channel, Pixel, PixelBuffer};

use super::Filter;

/// Sets one channel of every pixel to zero.
///
/// All other channels are left as they are. Clearing [`Channel::Alpha`]
/// makes the image fully transparent while keeping its colours.
///
/// # Example
///
/// ```
/// use rgba_filter::{Channel, ChannelClear, Pixel};
///
/// let clear_red = ChannelClear::new(Channel::Red);
/// assert_eq!(
///     clear_red.transform(Pixel::new(200, 100, 50, 255)),
///     Pixel::new(0, 100, 50, 255)
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChannelClear {
    channel: Channel,
}

impl ChannelClear {
    /// Create a filter clearing `channel`.
    #[inline]
    pub const fn new(channel: Channel) -> Self {
        Self { channel }
    }

    /// The channel this filter clears.
    #[inline]
    pub fn channel(&self) -> Channel {
        self.channel
    }

    /// Apply the filter to a single pixel.
    #[inline]
    pub fn transform(&self, pixel: Pixel) -> Pixel {
        pixel.with_channel(self.channel, 0)
    }
}

impl Filter for ChannelClear {
    fn apply(&self, buffer: &mut PixelBuffer) {
        buffer.for_each_pixel(|pixel| self.transform(pixel));
    }

    fn name(&self) -> &'static str {
        match self.channel {
            Channel::Red => "clear-red",
            Channel::Green => "clear-green",
            Channel::Blue => "clear-blue",
            Channel::Alpha => "clear-alpha",
        }
    }
}
