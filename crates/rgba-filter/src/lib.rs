#![allow(clippy::module_inception)]

//! rgba-filter: composable filters for RGBA bitmaps
//!
//! This library applies ordered lists of simple, saturating per-pixel and
//! whole-image filters to a decoded RGBA bitmap.
//!
//! # Quick Start
//!
//! The [`ImageProcessor`] is the primary entry point:
//!
//! ```
//! use rgba_filter::presets;
//! use rgba_filter::{ImageProcessor, RawImage, RawRgbaCodec};
//!
//! let processor = ImageProcessor::new(RawRgbaCodec);
//! let image = RawImage::new(2, 1, vec![30, 60, 90, 255, 60, 60, 60, 255]);
//!
//! let result = processor
//!     .apply(&image, &[&presets::CLEAR_RED, &presets::SHARPEN_80, &presets::SEPIA_50])
//!     .unwrap();
//!
//! assert_eq!((result.width, result.height), (2, 1));
//! ```
//!
//! # Direct Buffer API
//!
//! For pixels already in memory, build a [`PixelBuffer`] and call
//! [`apply_filters()`] or a single [`Filter::apply()`]:
//!
//! ```
//! use rgba_filter::{Filter, Pixel, PixelBuffer, Sepia};
//!
//! let mut buffer = PixelBuffer::filled(2, 2, Pixel::opaque(60, 60, 60)).unwrap();
//! Sepia::new(50).apply(&mut buffer);
//!
//! assert_eq!(buffer.get(1, 1).unwrap(), Pixel::opaque(160, 110, 10));
//! ```
//!
//! # Filters
//!
//! | Filter | Parameter | Effect on red, green, blue |
//! |--------|-----------|----------------------------|
//! | [`ChannelClear`] | channel | selected channel set to 0 |
//! | [`Greyscale`] | depth | all = mean + depth |
//! | [`Sepia`] | depth | mean + 2·depth, mean + depth, mean − depth |
//! | [`Invert`] | depth | 255 − value + depth |
//! | [`Sharpen`] | depth | value ± depth, away from the image mean |
//!
//! All arithmetic is done in `i64` and saturated into 0..=255 by
//! [`saturate`] before narrowing; nothing wraps. Alpha is only ever touched
//! by `ChannelClear(Alpha)`.
//!
//! ## Pipeline Overview
//!
//! ```text
//! host image             (PNG bytes, platform bitmap, raw RGBA ...)
//!     |
//!     v
//! ImageCodec::decode     (DecodeError aborts the call)
//!     |
//!     v
//! PixelBuffer            (owned exclusively by this call)
//!     |
//!     +---> filter 1 .apply(&mut buffer)
//!     +---> filter 2 .apply(&mut buffer)
//!     |     ...        in list order, in place, same dimensions
//!     v
//! ImageCodec::encode     (EncodeError aborts the call)
//!     |
//!     v
//! host image
//! ```
//!
//! ## Concurrency
//!
//! A call owns its buffer through `&mut`, so no other code can observe it
//! between Sharpen's measuring pass and its adjusting pass. Filters are
//! `Send + Sync` and carry only immutable configuration, and the
//! [`presets`] are plain `static` items: independent pipelines on different
//! buffers can run on different threads without locks.

pub mod api;
pub mod filter;
pub mod pixel;
pub mod presets;


pub use api::{FilterError, ImageCodec, ImageProcessor, RawImage, RawRgbaCodec};
pub use filter::{apply_filters, ChannelClear, Filter, Greyscale, Invert, Sepia, Sharpen};
pub use pixel::{saturate, BufferError, Channel, Pixel, PixelBuffer};
pub use presets::Preset;
