//! RGBA pixel value type
//!
//! A [`Pixel`] is four independent 8-bit channels. Filters compute in wider
//! signed integers and narrow back through [`saturate`].

use std::fmt;

/// One colour channel of a [`Pixel`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    /// Red colour channel
    Red,
    /// Green colour channel
    Green,
    /// Blue colour channel
    Blue,
    /// Alpha (opacity) channel
    Alpha,
}

impl Channel {
    /// The three colour channels, in storage order.
    pub const COLORS: [Channel; 3] = [Channel::Red, Channel::Green, Channel::Blue];

    /// Lowercase channel name, as used in textual filter descriptions.
    pub fn as_str(self) -> &'static str {
        match self {
            Channel::Red => "red",
            Channel::Green => "green",
            Channel::Blue => "blue",
            Channel::Alpha => "alpha",
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An RGBA colour sample with 8 bits per channel.
///
/// # Example
/// ```
/// use rgba_filter::{Channel, Pixel};
///
/// let pixel = Pixel::new(30, 60, 90, 255);
/// assert_eq!(pixel.channel(Channel::Green), 60);
/// assert_eq!(pixel.grey(), 60);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Pixel {
    /// Red channel (0..=255)
    pub red: u8,
    /// Green channel (0..=255)
    pub green: u8,
    /// Blue channel (0..=255)
    pub blue: u8,
    /// Alpha channel (0..=255, 255 = opaque)
    pub alpha: u8,
}

impl Pixel {
    /// Fully transparent black.
    pub const TRANSPARENT: Pixel = Pixel::new(0, 0, 0, 0);

    /// Create a pixel from its four channel values.
    #[inline]
    pub const fn new(red: u8, green: u8, blue: u8, alpha: u8) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    /// Create an opaque pixel (alpha = 255).
    #[inline]
    pub const fn opaque(red: u8, green: u8, blue: u8) -> Self {
        Self::new(red, green, blue, 255)
    }

    /// Create a pixel from a byte array `[R, G, B, A]`.
    #[inline]
    pub const fn from_bytes(bytes: [u8; 4]) -> Self {
        Self::new(bytes[0], bytes[1], bytes[2], bytes[3])
    }

    /// Convert to a byte array `[R, G, B, A]`.
    #[inline]
    pub const fn to_bytes(self) -> [u8; 4] {
        [self.red, self.green, self.blue, self.alpha]
    }

    /// Read a single channel.
    #[inline]
    pub fn channel(self, channel: Channel) -> u8 {
        match channel {
            Channel::Red => self.red,
            Channel::Green => self.green,
            Channel::Blue => self.blue,
            Channel::Alpha => self.alpha,
        }
    }

    /// Return a copy with one channel replaced.
    #[inline]
    pub fn with_channel(mut self, channel: Channel, value: u8) -> Self {
        match channel {
            Channel::Red => self.red = value,
            Channel::Green => self.green = value,
            Channel::Blue => self.blue = value,
            Channel::Alpha => self.alpha = value,
        }
        self
    }

    /// Unweighted mean of red, green and blue, truncated.
    #[inline]
    pub fn grey(self) -> i64 {
        (self.red as i64 + self.green as i64 + self.blue as i64) / 3
    }
}

/// Saturate a wide intermediate value into the 0..=255 channel range.
///
/// Every filter narrows through this function; values are never wrapped.
///
/// # Example
/// ```
/// use rgba_filter::saturate;
///
/// assert_eq!(saturate(-40), 0);
/// assert_eq!(saturate(128), 128);
/// assert_eq!(saturate(300), 255);
/// ```
#[inline]
pub fn saturate(value: i64) -> u8 {
    value.clamp(0, u8::MAX as i64) as u8
}
