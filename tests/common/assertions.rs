//! Assertion helpers for tests.

use pretty_assertions::assert_eq;

use super::fixtures::{decode_png, DecodedPng};

const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

/// Assert bytes are an 8-bit RGBA PNG and decode them
pub fn assert_rgba_png(bytes: &[u8]) -> DecodedPng {
    assert!(
        bytes.starts_with(&PNG_SIGNATURE),
        "Expected PNG image, got {} bytes starting with {:?}",
        bytes.len(),
        &bytes[..8.min(bytes.len())]
    );

    let decoded = decode_png(bytes);
    assert_eq!(decoded.color_type, png::ColorType::Rgba, "Expected RGBA output");
    assert_eq!(decoded.bit_depth, png::BitDepth::Eight, "Expected 8-bit output");
    decoded
}

/// Assert every pixel of an RGBA PNG equals `expected`
pub fn assert_all_pixels(decoded: &DecodedPng, expected: [u8; 4]) {
    for y in 0..decoded.height {
        for x in 0..decoded.width {
            assert_eq!(
                decoded.rgba_at(x, y),
                expected,
                "Unexpected pixel at ({x}, {y})"
            );
        }
    }
}
