use rgba_filter::{Channel, ChannelClear, Filter, Greyscale, Invert, Preset, Sepia, Sharpen};
use std::fmt;
use std::str::FromStr;

use crate::error::AppError;

/// A filter described on the command line
///
/// Accepted forms (case-insensitive):
/// - a preset name, e.g. `SEPIA_50` or `sepia-50`
/// - `grey[:depth]` / `greyscale[:depth]` / `gray[:depth]`
/// - `sepia:depth`
/// - `invert[:depth]`
/// - `sharpen:depth`
/// - `clear:red|green|blue|alpha`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterSpec {
    Preset(Preset),
    Greyscale(i32),
    Sepia(i32),
    Invert(i32),
    Sharpen(i32),
    Clear(Channel),
}

impl FilterSpec {
    /// Build the filter this spec describes
    pub fn build(self) -> Box<dyn Filter> {
        match self {
            FilterSpec::Preset(preset) => Box::new(preset.filter()),
            FilterSpec::Greyscale(depth) => Box::new(Greyscale::new(depth)),
            FilterSpec::Sepia(depth) => Box::new(Sepia::new(depth)),
            FilterSpec::Invert(depth) => Box::new(Invert::new(depth)),
            FilterSpec::Sharpen(depth) => Box::new(Sharpen::new(depth)),
            FilterSpec::Clear(channel) => Box::new(ChannelClear::new(channel)),
        }
    }
}

impl fmt::Display for FilterSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FilterSpec::Preset(preset) => write!(f, "{preset}"),
            FilterSpec::Greyscale(depth) => write!(f, "grey:{depth}"),
            FilterSpec::Sepia(depth) => write!(f, "sepia:{depth}"),
            FilterSpec::Invert(depth) => write!(f, "invert:{depth}"),
            FilterSpec::Sharpen(depth) => write!(f, "sharpen:{depth}"),
            FilterSpec::Clear(channel) => write!(f, "clear:{channel}"),
        }
    }
}

impl FromStr for FilterSpec {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = |reason: &str| AppError::InvalidFilter {
            spec: s.to_string(),
            reason: reason.to_string(),
        };

        if let Ok(preset) = s.parse::<Preset>() {
            return Ok(FilterSpec::Preset(preset));
        }

        let lowered = s.trim().to_ascii_lowercase();
        let (kind, param) = match lowered.split_once(':') {
            Some((kind, param)) => (kind.trim(), Some(param.trim())),
            None => (lowered.as_str(), None),
        };

        let depth = |required: bool| -> Result<i32, AppError> {
            match param {
                Some(value) => value
                    .parse::<i32>()
                    .map_err(|e| invalid(&format!("depth must be an integer ({e})"))),
                None if required => Err(invalid("a depth is required, e.g. sepia:50")),
                None => Ok(0),
            }
        };

        match kind {
            "grey" | "gray" | "greyscale" | "grayscale" => Ok(FilterSpec::Greyscale(depth(false)?)),
            "sepia" => Ok(FilterSpec::Sepia(depth(true)?)),
            "invert" => Ok(FilterSpec::Invert(depth(false)?)),
            "sharpen" => Ok(FilterSpec::Sharpen(depth(true)?)),
            "clear" => match param {
                Some("red") => Ok(FilterSpec::Clear(Channel::Red)),
                Some("green") => Ok(FilterSpec::Clear(Channel::Green)),
                Some("blue") => Ok(FilterSpec::Clear(Channel::Blue)),
                Some("alpha") => Ok(FilterSpec::Clear(Channel::Alpha)),
                Some(_) => Err(invalid("channel must be red, green, blue or alpha")),
                None => Err(invalid("a channel is required, e.g. clear:red")),
            },
            _ => Err(invalid("unknown filter kind or preset")),
        }
    }
}
