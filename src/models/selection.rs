use rgba_filter::Preset;

/// The four quick-filter toggles
///
/// Whatever order the toggles were switched on in, enabled filters run in
/// the fixed order sharpen, sepia, grey scale, invert.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FilterSelection {
    pub sharpen: bool,
    pub sepia: bool,
    pub grey_scale: bool,
    pub invert: bool,
}

impl FilterSelection {
    /// Presets for the enabled toggles, in application order
    pub fn presets(&self) -> Vec<Preset> {
        [
            (self.sharpen, Preset::Sharpen80),
            (self.sepia, Preset::Sepia50),
            (self.grey_scale, Preset::GreyScale50),
            (self.invert, Preset::Invert50),
        ]
        .into_iter()
        .filter_map(|(enabled, preset)| enabled.then_some(preset))
        .collect()
    }

    /// True when no toggle is on
    pub fn is_empty(&self) -> bool {
        !(self.sharpen || self.sepia || self.grey_scale || self.invert)
    }
}
