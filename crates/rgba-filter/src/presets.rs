//! Ready-made filter instances.
//!
//! Every preset is an immutable `static`, so a reference to one can be
//! shared freely between threads and pipeline calls. The [`Preset`] enum
//! names each of them and converts between names and filters.
//!
//! # Example
//!
//! ```
//! use rgba_filter::presets::{self, Preset};
//! use rgba_filter::{apply_filters, Pixel, PixelBuffer};
//!
//! let mut buffer = PixelBuffer::filled(2, 2, Pixel::opaque(60, 60, 60)).unwrap();
//! apply_filters(&mut buffer, &[&presets::SEPIA_50]);
//! assert_eq!(buffer.get(0, 0).unwrap(), Pixel::opaque(160, 110, 10));
//!
//! let preset: Preset = "invert_20".parse().unwrap();
//! assert_eq!(preset, Preset::Invert20);
//! assert_eq!(preset.name(), "INVERT_20");
//! ```

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::filter::{ChannelClear, Filter, Greyscale, Invert, Sepia, Sharpen};
use crate::pixel::Channel;

/// Plain greyscale.
pub static GREY_SCALE_0: Greyscale = Greyscale::new(0);
/// Greyscale lightened by 50.
pub static GREY_SCALE_50: Greyscale = Greyscale::new(50);
/// Greyscale lightened by 100.
pub static GREY_SCALE_100: Greyscale = Greyscale::new(100);

/// Clears the red channel.
pub static CLEAR_RED: ChannelClear = ChannelClear::new(Channel::Red);
/// Clears the green channel.
pub static CLEAR_GREEN: ChannelClear = ChannelClear::new(Channel::Green);
/// Clears the blue channel.
pub static CLEAR_BLUE: ChannelClear = ChannelClear::new(Channel::Blue);

/// Sepia with depth 30.
pub static SEPIA_30: Sepia = Sepia::new(30);
/// Sepia with depth 50.
pub static SEPIA_50: Sepia = Sepia::new(50);
/// Sepia with depth 100.
pub static SEPIA_100: Sepia = Sepia::new(100);

/// Plain colour negative.
pub static INVERT_0: Invert = Invert::new(0);
/// Colour negative lightened by 20.
pub static INVERT_20: Invert = Invert::new(20);
/// Colour negative lightened by 50.
pub static INVERT_50: Invert = Invert::new(50);

/// Contrast push of 30.
pub static SHARPEN_30: Sharpen = Sharpen::new(30);
/// Contrast push of 80.
pub static SHARPEN_80: Sharpen = Sharpen::new(80);

/// Symbolic name of a preset filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Preset {
    /// [`GREY_SCALE_0`]
    GreyScale0,
    /// [`GREY_SCALE_50`]
    GreyScale50,
    /// [`GREY_SCALE_100`]
    GreyScale100,
    /// [`CLEAR_RED`]
    ClearRed,
    /// [`CLEAR_GREEN`]
    ClearGreen,
    /// [`CLEAR_BLUE`]
    ClearBlue,
    /// [`SEPIA_30`]
    Sepia30,
    /// [`SEPIA_50`]
    Sepia50,
    /// [`SEPIA_100`]
    Sepia100,
    /// [`INVERT_0`]
    Invert0,
    /// [`INVERT_20`]
    Invert20,
    /// [`INVERT_50`]
    Invert50,
    /// [`SHARPEN_30`]
    Sharpen30,
    /// [`SHARPEN_80`]
    Sharpen80,
}

impl Preset {
    /// Every preset, in catalogue order.
    pub const ALL: [Preset; 14] = [
        Preset::GreyScale0,
        Preset::GreyScale50,
        Preset::GreyScale100,
        Preset::ClearRed,
        Preset::ClearGreen,
        Preset::ClearBlue,
        Preset::Sepia30,
        Preset::Sepia50,
        Preset::Sepia100,
        Preset::Invert0,
        Preset::Invert20,
        Preset::Invert50,
        Preset::Sharpen30,
        Preset::Sharpen80,
    ];

    /// Canonical upper-case name, e.g. `"SEPIA_50"`.
    pub fn name(self) -> &'static str {
        match self {
            Preset::GreyScale0 => "GREY_SCALE_0",
            Preset::GreyScale50 => "GREY_SCALE_50",
            Preset::GreyScale100 => "GREY_SCALE_100",
            Preset::ClearRed => "CLEAR_RED",
            Preset::ClearGreen => "CLEAR_GREEN",
            Preset::ClearBlue => "CLEAR_BLUE",
            Preset::Sepia30 => "SEPIA_30",
            Preset::Sepia50 => "SEPIA_50",
            Preset::Sepia100 => "SEPIA_100",
            Preset::Invert0 => "INVERT_0",
            Preset::Invert20 => "INVERT_20",
            Preset::Invert50 => "INVERT_50",
            Preset::Sharpen30 => "SHARPEN_30",
            Preset::Sharpen80 => "SHARPEN_80",
        }
    }

    /// One-line human description.
    pub fn description(self) -> &'static str {
        match self {
            Preset::GreyScale0 => "Grey scale",
            Preset::GreyScale50 => "Grey scale, lightened by 50",
            Preset::GreyScale100 => "Grey scale, lightened by 100",
            Preset::ClearRed => "Clear the red channel",
            Preset::ClearGreen => "Clear the green channel",
            Preset::ClearBlue => "Clear the blue channel",
            Preset::Sepia30 => "Sepia, depth 30",
            Preset::Sepia50 => "Sepia, depth 50",
            Preset::Sepia100 => "Sepia, depth 100",
            Preset::Invert0 => "Invert colours",
            Preset::Invert20 => "Invert colours, lightened by 20",
            Preset::Invert50 => "Invert colours, lightened by 50",
            Preset::Sharpen30 => "Enhance contrast by 30",
            Preset::Sharpen80 => "Enhance contrast by 80",
        }
    }

    /// The shared filter instance behind this name.
    pub fn filter(self) -> &'static dyn Filter {
        match self {
            Preset::GreyScale0 => &GREY_SCALE_0,
            Preset::GreyScale50 => &GREY_SCALE_50,
            Preset::GreyScale100 => &GREY_SCALE_100,
            Preset::ClearRed => &CLEAR_RED,
            Preset::ClearGreen => &CLEAR_GREEN,
            Preset::ClearBlue => &CLEAR_BLUE,
            Preset::Sepia30 => &SEPIA_30,
            Preset::Sepia50 => &SEPIA_50,
            Preset::Sepia100 => &SEPIA_100,
            Preset::Invert0 => &INVERT_0,
            Preset::Invert20 => &INVERT_20,
            Preset::Invert50 => &INVERT_50,
            Preset::Sharpen30 => &SHARPEN_30,
            Preset::Sharpen80 => &SHARPEN_80,
        }
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when a string names no preset.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown preset: {0}")]
pub struct UnknownPresetError(pub String);

impl FromStr for Preset {
    type Err = UnknownPresetError;

    /// Case-insensitive; `-` is accepted in place of `_`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_uppercase().replace('-', "_");
        Preset::ALL
            .into_iter()
            .find(|preset| preset.name() == normalized)
            .ok_or_else(|| UnknownPresetError(s.to_string()))
    }
}
