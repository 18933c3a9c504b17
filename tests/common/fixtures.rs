//! Test fixtures: PNG generation and inspection independent of the crate's codec.

use std::path::{Path, PathBuf};

/// A decoded 8-bit RGBA PNG
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedPng {
    pub width: u32,
    pub height: u32,
    pub color_type: png::ColorType,
    pub bit_depth: png::BitDepth,
    /// Row-major samples as stored in the file
    pub data: Vec<u8>,
}

impl DecodedPng {
    /// RGBA of the pixel at column `x`, row `y`
    pub fn rgba_at(&self, x: u32, y: u32) -> [u8; 4] {
        let i = ((y * self.width + x) * 4) as usize;
        [
            self.data[i],
            self.data[i + 1],
            self.data[i + 2],
            self.data[i + 3],
        ]
    }
}

/// Encode raw samples as a PNG
pub fn encode_png(
    width: u32,
    height: u32,
    color_type: png::ColorType,
    bit_depth: png::BitDepth,
    data: &[u8],
) -> Vec<u8> {
    let mut out = Vec::new();
    {
        let mut encoder = png::Encoder::new(&mut out, width, height);
        encoder.set_color(color_type);
        encoder.set_depth(bit_depth);
        let mut writer = encoder.write_header().expect("Should write PNG header");
        writer
            .write_image_data(data)
            .expect("Should write PNG data");
    }
    out
}

/// 8-bit RGBA PNG with every pixel produced by `f(x, y)`
pub fn rgba_png(width: u32, height: u32, f: impl Fn(u32, u32) -> [u8; 4]) -> Vec<u8> {
    let data: Vec<u8> = (0..height)
        .flat_map(|y| (0..width).map(move |x| (x, y)))
        .flat_map(|(x, y)| f(x, y))
        .collect();
    encode_png(width, height, png::ColorType::Rgba, png::BitDepth::Eight, &data)
}

/// 8-bit RGBA PNG filled with one colour
pub fn solid_png(width: u32, height: u32, rgba: [u8; 4]) -> Vec<u8> {
    rgba_png(width, height, |_, _| rgba)
}

/// 8-bit RGBA PNG where every pixel differs from its neighbours
pub fn gradient_png(width: u32, height: u32) -> Vec<u8> {
    rgba_png(width, height, |x, y| {
        [
            (x * 37 % 256) as u8,
            (y * 53 % 256) as u8,
            ((x + y) * 11 % 256) as u8,
            (255 - (x * y) % 256) as u8,
        ]
    })
}

/// Decode a PNG without any transformation
pub fn decode_png(bytes: &[u8]) -> DecodedPng {
    let decoder = png::Decoder::new(bytes);
    let mut reader = decoder.read_info().expect("Should be a valid PNG");
    let mut data = vec![0; reader.output_buffer_size()];
    let frame = reader.next_frame(&mut data).expect("Should decode PNG frame");
    data.truncate(frame.buffer_size());
    DecodedPng {
        width: frame.width,
        height: frame.height,
        color_type: frame.color_type,
        bit_depth: frame.bit_depth,
        data,
    }
}

/// Write `bytes` to `name` inside `dir`
pub fn write_file(dir: &Path, name: &str, bytes: &[u8]) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, bytes).expect("Should write fixture file");
    path
}
