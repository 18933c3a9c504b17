//! Public API for the rgba-filter crate.
//!
//! This module provides the high-level API: the [`ImageProcessor`] pipeline,
//! the [`ImageCodec`] boundary and the [`FilterError`] unified error type.

mod codec;
mod error;
mod processor;

pub use codec::{ImageCodec, RawImage, RawRgbaCodec};
pub use error::FilterError;
pub use processor::ImageProcessor;
