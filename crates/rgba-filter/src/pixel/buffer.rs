//! The mutable pixel grid filters operate on.
//!
//! [`PixelBuffer`] owns exactly `width * height` pixels addressed by
//! `(x, y)` with `x` in `0..width` and `y` in `0..height`.
//!
//! # Layout
//!
//! `x` is the major axis: the pixel at `(x, y)` lives at `x * height + y`.
//! For square buffers this is the same as `x * width + y`. Traversal walks
//! `x` in the outer loop and `y` in the inner loop, which is exactly
//! storage order.
//!
//! External images are normally row-major (`y * width + x`).
//! [`PixelBuffer::from_rgba_rows`] and [`PixelBuffer::to_rgba_rows`] convert
//! between the two layouts.

use super::error::BufferError;
use super::pixel::Pixel;

/// A fixed-size 2D grid of RGBA pixels.
///
/// Dimensions are fixed at construction; no operation resizes the buffer.
///
/// # Example
///
/// ```
/// use rgba_filter::{Pixel, PixelBuffer};
///
/// // 3 pixels wide, 1 pixel high, row-major RGBA bytes
/// let bytes = [
///     255, 0, 0, 255, //
///     0, 255, 0, 255, //
///     0, 0, 255, 255,
/// ];
/// let buffer = PixelBuffer::from_rgba_rows(3, 1, &bytes).unwrap();
///
/// assert_eq!(buffer.get(2, 0).unwrap(), Pixel::opaque(0, 0, 255));
/// assert_eq!(buffer.to_rgba_rows(), bytes);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    /// Pixels in x-major order (see module docs).
    pixels: Vec<Pixel>,
    width: usize,
    height: usize,
}

impl PixelBuffer {
    /// Create a buffer filled with [`Pixel::TRANSPARENT`].
    ///
    /// # Errors
    ///
    /// Returns [`BufferError::InvalidDimensions`] if either dimension is zero.
    pub fn new(width: usize, height: usize) -> Result<Self, BufferError> {
        Self::filled(width, height, Pixel::TRANSPARENT)
    }

    /// Create a buffer with every pixel set to `pixel`.
    pub fn filled(width: usize, height: usize, pixel: Pixel) -> Result<Self, BufferError> {
        let len = pixel_count(width, height)?;
        Ok(Self {
            pixels: vec![pixel; len],
            width,
            height,
        })
    }

    /// Wrap pixels that are already in x-major order.
    ///
    /// # Errors
    ///
    /// Returns [`BufferError::InvalidDimensions`] for a zero dimension and
    /// [`BufferError::LengthMismatch`] unless `pixels.len() == width * height`.
    pub fn from_pixels(
        width: usize,
        height: usize,
        pixels: Vec<Pixel>,
    ) -> Result<Self, BufferError> {
        let expected = pixel_count(width, height)?;
        if pixels.len() != expected {
            return Err(BufferError::LengthMismatch {
                expected,
                actual: pixels.len(),
            });
        }
        Ok(Self {
            pixels,
            width,
            height,
        })
    }

    /// Build a buffer from row-major RGBA8 bytes (`[R, G, B, A, ...]`).
    ///
    /// # Errors
    ///
    /// Returns [`BufferError::LengthMismatch`] unless
    /// `bytes.len() == width * height * 4`.
    pub fn from_rgba_rows(width: usize, height: usize, bytes: &[u8]) -> Result<Self, BufferError> {
        let count = pixel_count(width, height)?;
        let expected = count * 4;
        if bytes.len() != expected {
            return Err(BufferError::LengthMismatch {
                expected,
                actual: bytes.len(),
            });
        }

        let mut pixels = vec![Pixel::TRANSPARENT; count];
        for (row_index, row) in bytes.chunks_exact(width * 4).enumerate() {
            for (x, rgba) in row.chunks_exact(4).enumerate() {
                pixels[x * height + row_index] = Pixel::new(rgba[0], rgba[1], rgba[2], rgba[3]);
            }
        }

        Ok(Self {
            pixels,
            width,
            height,
        })
    }

    /// Export as row-major RGBA8 bytes, `width * height * 4` long.
    pub fn to_rgba_rows(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.pixels.len() * 4);
        for y in 0..self.height {
            for x in 0..self.width {
                bytes.extend_from_slice(&self.pixels[x * self.height + y].to_bytes());
            }
        }
        bytes
    }

    /// Buffer width in pixels.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Buffer height in pixels.
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of pixels (`width * height`, never zero).
    #[inline]
    pub fn len(&self) -> usize {
        self.pixels.len()
    }

    /// Always `false`: a buffer holds at least one pixel.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    /// Pixels in x-major storage order.
    #[inline]
    pub fn pixels(&self) -> &[Pixel] {
        &self.pixels
    }

    /// Storage index of `(x, y)`.
    ///
    /// # Errors
    ///
    /// Returns [`BufferError::IndexOutOfRange`] if `x >= width` or `y >= height`.
    #[inline]
    pub fn index(&self, x: usize, y: usize) -> Result<usize, BufferError> {
        if x >= self.width || y >= self.height {
            return Err(BufferError::IndexOutOfRange {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }
        Ok(x * self.height + y)
    }

    /// Read the pixel at `(x, y)`.
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> Result<Pixel, BufferError> {
        let index = self.index(x, y)?;
        Ok(self.pixels[index])
    }

    /// Overwrite the pixel at `(x, y)`.
    #[inline]
    pub fn set(&mut self, x: usize, y: usize, pixel: Pixel) -> Result<(), BufferError> {
        let index = self.index(x, y)?;
        self.pixels[index] = pixel;
        Ok(())
    }

    /// Replace every pixel with `visit(old)`.
    ///
    /// Visits `x` in `0..width` and, for each `x`, `y` in `0..height`.
    /// Each result is written back before the next pixel is read, and every
    /// pixel is visited exactly once.
    pub fn for_each_pixel<F>(&mut self, mut visit: F)
    where
        F: FnMut(Pixel) -> Pixel,
    {
        // storage order is the traversal order
        for pixel in self.pixels.iter_mut() {
            *pixel = visit(*pixel);
        }
    }

    /// Read-only traversal in the same order as [`for_each_pixel`](Self::for_each_pixel).
    pub fn visit_pixels<F>(&self, mut visit: F)
    where
        F: FnMut(Pixel),
    {
        for &pixel in &self.pixels {
            visit(pixel);
        }
    }
}

/// Validate dimensions and return `width * height`.
fn pixel_count(width: usize, height: usize) -> Result<usize, BufferError> {
    match width.checked_mul(height) {
        Some(count) if count > 0 && count.checked_mul(4).is_some() => Ok(count),
        _ => Err(BufferError::InvalidDimensions { width, height }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numbered(width: usize, height: usize) -> PixelBuffer {
        let mut buffer = PixelBuffer::new(width, height).unwrap();
        for x in 0..width {
            for y in 0..height {
                buffer
                    .set(x, y, Pixel::new(x as u8, y as u8, 0, 255))
                    .unwrap();
            }
        }
        buffer
    }

    #[test]
    fn test_new_rejects_zero_dimensions() {
        assert_eq!(
            PixelBuffer::new(0, 4),
            Err(BufferError::InvalidDimensions {
                width: 0,
                height: 4
            })
        );
        assert!(PixelBuffer::new(4, 0).is_err());
        assert!(PixelBuffer::new(usize::MAX, 2).is_err());
    }

    #[test]
    fn test_from_pixels_length_checked() {
        let result = PixelBuffer::from_pixels(2, 2, vec![Pixel::TRANSPARENT; 3]);
        assert_eq!(
            result,
            Err(BufferError::LengthMismatch {
                expected: 4,
                actual: 3
            })
        );
    }

    #[test]
    fn test_get_set_out_of_range() {
        let mut buffer = PixelBuffer::new(3, 2).unwrap();
        assert!(buffer.get(2, 1).is_ok());
        assert_eq!(
            buffer.get(3, 0),
            Err(BufferError::IndexOutOfRange {
                x: 3,
                y: 0,
                width: 3,
                height: 2
            })
        );
        assert!(buffer.get(0, 2).is_err());
        assert!(buffer.set(0, 2, Pixel::TRANSPARENT).is_err());
    }

    #[test]
    fn test_square_index_matches_x_times_width() {
        let buffer = PixelBuffer::new(4, 4).unwrap();
        for x in 0..4 {
            for y in 0..4 {
                assert_eq!(buffer.index(x, y).unwrap(), x * 4 + y);
            }
        }
    }

    #[test]
    fn test_non_square_index_is_a_bijection() {
        let buffer = PixelBuffer::new(2, 3).unwrap();
        let mut seen = vec![false; buffer.len()];
        for x in 0..2 {
            for y in 0..3 {
                let index = buffer.index(x, y).unwrap();
                assert!(!seen[index], "index {index} produced twice");
                seen[index] = true;
            }
        }
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn test_for_each_pixel_visits_in_x_major_order() {
        let mut buffer = numbered(3, 2);
        let mut order = Vec::new();
        buffer.for_each_pixel(|pixel| {
            order.push((pixel.red, pixel.green));
            pixel
        });
        assert_eq!(order, vec![(0, 0), (0, 1), (1, 0), (1, 1), (2, 0), (2, 1)]);
    }

    #[test]
    fn test_for_each_pixel_writes_back() {
        let mut buffer = numbered(3, 2);
        buffer.for_each_pixel(|pixel| Pixel { blue: 7, ..pixel });
        assert!(buffer.pixels().iter().all(|p| p.blue == 7));
        assert_eq!(buffer.get(2, 1).unwrap(), Pixel::new(2, 1, 7, 255));
    }

    #[test]
    fn test_visit_pixels_counts_every_pixel_once() {
        let buffer = numbered(5, 3);
        let mut count = 0;
        buffer.visit_pixels(|_| count += 1);
        assert_eq!(count, 15);
    }

    #[test]
    fn test_rgba_rows_transposes_layout() {
        // 2 wide, 3 high; each pixel encodes its own (x, y)
        let mut bytes = Vec::new();
        for y in 0..3u8 {
            for x in 0..2u8 {
                bytes.extend_from_slice(&[x, y, 0, 255]);
            }
        }
        let buffer = PixelBuffer::from_rgba_rows(2, 3, &bytes).unwrap();

        for x in 0..2 {
            for y in 0..3 {
                let pixel = buffer.get(x, y).unwrap();
                assert_eq!((pixel.red as usize, pixel.green as usize), (x, y));
            }
        }
        assert_eq!(buffer.to_rgba_rows(), bytes);
    }

    #[test]
    fn test_rgba_rows_length_checked() {
        let result = PixelBuffer::from_rgba_rows(2, 2, &[0; 15]);
        assert_eq!(
            result,
            Err(BufferError::LengthMismatch {
                expected: 16,
                actual: 15
            })
        );
    }
}
