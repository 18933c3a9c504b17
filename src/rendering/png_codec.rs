use rgba_filter::{FilterError, ImageCodec, PixelBuffer};
use std::io::Cursor;

use crate::error::CodecError;
use crate::models::{AppConfig, CompressionLevel};

/// PNG codec for the filter pipeline.
///
/// Decoding accepts every PNG colour type and bit depth: palette and
/// sub-byte images are expanded, 16-bit samples are stripped to 8 bits,
/// grey is replicated into red, green and blue, and a missing alpha channel
/// becomes fully opaque. Encoding always writes 8-bit RGBA, so an image
/// that was already 8-bit RGBA round-trips byte for byte.
#[derive(Debug, Clone)]
pub struct PngCodec {
    compression: CompressionLevel,
    max_pixels: u64,
}

impl PngCodec {
    pub fn new(compression: CompressionLevel, max_pixels: u64) -> Self {
        Self {
            compression,
            max_pixels,
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(config.output.compression, config.limits.max_pixels)
    }

    /// Decode PNG bytes into width, height and row-major RGBA8 data
    fn decode_rgba(&self, data: &[u8]) -> Result<(u32, u32, Vec<u8>), CodecError> {
        // 16-bit RGBA is the widest decoded sample; never go below the decoder's own default
        let limit_bytes = usize::try_from(self.max_pixels.saturating_mul(8))
            .unwrap_or(usize::MAX)
            .max(png::Limits::default().bytes);
        let mut decoder =
            png::Decoder::new_with_limits(Cursor::new(data), png::Limits { bytes: limit_bytes });
        decoder.set_transformations(png::Transformations::EXPAND | png::Transformations::STRIP_16);

        let mut reader = decoder
            .read_info()
            .map_err(|e| CodecError::PngDecode(e.to_string()))?;

        let (width, height) = {
            let info = reader.info();
            (info.width, info.height)
        };
        if width as u64 * height as u64 > self.max_pixels {
            return Err(CodecError::ImageTooLarge {
                width,
                height,
                max: self.max_pixels,
            });
        }

        let mut buf = vec![0; reader.output_buffer_size()];
        let frame = reader
            .next_frame(&mut buf)
            .map_err(|e| CodecError::PngDecode(e.to_string()))?;
        let bytes = &buf[..frame.buffer_size()];

        let rgba = match (frame.color_type, frame.bit_depth) {
            (png::ColorType::Rgba, png::BitDepth::Eight) => bytes.to_vec(),
            (png::ColorType::Rgb, png::BitDepth::Eight) => bytes
                .chunks_exact(3)
                .flat_map(|p| [p[0], p[1], p[2], 255])
                .collect(),
            (png::ColorType::GrayscaleAlpha, png::BitDepth::Eight) => bytes
                .chunks_exact(2)
                .flat_map(|p| [p[0], p[0], p[0], p[1]])
                .collect(),
            (png::ColorType::Grayscale, png::BitDepth::Eight) => {
                bytes.iter().flat_map(|&g| [g, g, g, 255]).collect()
            }
            (color_type, bit_depth) => {
                return Err(CodecError::UnsupportedFormat(color_type, bit_depth))
            }
        };

        tracing::debug!(
            width,
            height,
            color_type = ?frame.color_type,
            "Decoded PNG"
        );

        Ok((width, height, rgba))
    }

    /// Encode row-major RGBA8 data as PNG
    fn encode_rgba(&self, width: u32, height: u32, rgba: &[u8]) -> Result<Vec<u8>, CodecError> {
        let mut buf = Cursor::new(Vec::new());
        {
            let mut encoder = png::Encoder::new(&mut buf, width, height);
            encoder.set_color(png::ColorType::Rgba);
            encoder.set_depth(png::BitDepth::Eight);
            encoder.set_compression(self.compression.into());
            let mut writer = encoder
                .write_header()
                .map_err(|e| CodecError::PngEncode(e.to_string()))?;
            writer
                .write_image_data(rgba)
                .map_err(|e| CodecError::PngEncode(e.to_string()))?;
            writer
                .finish()
                .map_err(|e| CodecError::PngEncode(e.to_string()))?;
        }
        Ok(buf.into_inner())
    }
}

impl Default for PngCodec {
    fn default() -> Self {
        Self::from_config(&AppConfig::default())
    }
}

impl ImageCodec for PngCodec {
    type Image = Vec<u8>;

    fn decode(&self, image: &Vec<u8>) -> Result<PixelBuffer, FilterError> {
        let (width, height, rgba) = self.decode_rgba(image)?;
        PixelBuffer::from_rgba_rows(width as usize, height as usize, &rgba)
            .map_err(|e| FilterError::Decode(e.to_string()))
    }

    fn encode(&self, buffer: &PixelBuffer) -> Result<Vec<u8>, FilterError> {
        let width = u32::try_from(buffer.width())
            .map_err(|_| CodecError::PngEncode(format!("width {} exceeds PNG limits", buffer.width())))?;
        let height = u32::try_from(buffer.height()).map_err(|_| {
            CodecError::PngEncode(format!("height {} exceeds PNG limits", buffer.height()))
        })?;
        Ok(self.encode_rgba(width, height, &buffer.to_rgba_rows())?)
    }
}
