//! Image filters.
//!
//! Every filter implements the [`Filter`] trait: a single in-place
//! [`apply`](Filter::apply) over a whole [`PixelBuffer`]. Filters never
//! resize the buffer and keep no state between calls, so applying
//! `[a, b]` is the same as applying `a` and then `b`.
//!
//! # Filters
//!
//! - [`ChannelClear`]: zero one channel
//! - [`Greyscale`]: channel mean plus an offset
//! - [`Sepia`]: warm-toned greyscale
//! - [`Invert`]: colour negative plus an offset
//! - [`Sharpen`]: push channels away from the image mean
//!
//! The first four are per-pixel filters built on
//! [`PixelBuffer::for_each_pixel`] and expose a pure `transform` method.
//! [`Sharpen`] makes two full traversals: one to measure, one to adjust.
//!
//! # Example
//!
//! ```
//! use rgba_filter::{apply_filters, Filter, Greyscale, Invert, Pixel, PixelBuffer};
//!
//! let mut buffer = PixelBuffer::filled(2, 2, Pixel::opaque(30, 60, 90)).unwrap();
//! apply_filters(&mut buffer, &[&Greyscale::new(0), &Invert::new(0)]);
//!
//! assert_eq!(buffer.get(0, 0).unwrap(), Pixel::opaque(195, 195, 195));
//! ```

mod channel_clear;
mod greyscale;
mod invert;
mod sepia;
mod sharpen;

use std::fmt;

use crate::pixel::PixelBuffer;

pub use channel_clear::ChannelClear;
pub use greyscale::Greyscale;
pub use invert::Invert;
pub use sepia::Sepia;
pub use sharpen::Sharpen;

/// A composable whole-image transformation.
///
/// Implementations hold immutable configuration only. `Send + Sync` lets a
/// single instance (for example a preset) serve concurrent pipelines that
/// each own a different buffer.
pub trait Filter: Send + Sync + fmt::Debug {
    /// Transform `buffer` in place.
    fn apply(&self, buffer: &mut PixelBuffer);

    /// Short name used in logs.
    fn name(&self) -> &'static str;
}

impl<F: Filter + ?Sized> Filter for &F {
    fn apply(&self, buffer: &mut PixelBuffer) {
        (**self).apply(buffer)
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }
}

/// Apply `filters` to `buffer` in order.
///
/// An empty slice leaves the buffer untouched.
pub fn apply_filters(buffer: &mut PixelBuffer, filters: &[&dyn Filter]) {
    for filter in filters {
        tracing::trace!(
            filter = filter.name(),
            width = buffer.width(),
            height = buffer.height(),
            "Applying filter"
        );
        filter.apply(buffer);
    }
}
