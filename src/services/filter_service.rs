use rgba_filter::{Filter, ImageProcessor, Preset};
use std::path::Path;

use crate::error::AppError;
use crate::models::{AppConfig, FilterSelection, FilterSpec};
use crate::rendering::PngCodec;

/// The filters requested for one run, in the order they were collected
///
/// Toggles run first (in their fixed order), then named presets, then
/// custom filter specs, each group in the order given.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterPlan {
    pub selection: FilterSelection,
    pub presets: Vec<Preset>,
    pub custom: Vec<FilterSpec>,
}

impl FilterPlan {
    /// Every step of the plan as a [`FilterSpec`], in application order
    pub fn specs(&self) -> Vec<FilterSpec> {
        self.selection
            .presets()
            .into_iter()
            .chain(self.presets.iter().copied())
            .map(FilterSpec::Preset)
            .chain(self.custom.iter().copied())
            .collect()
    }

    /// Instantiate the filters, in application order
    pub fn build(&self) -> Vec<Box<dyn Filter>> {
        self.specs().into_iter().map(FilterSpec::build).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.selection.is_empty() && self.presets.is_empty() && self.custom.is_empty()
    }
}

/// Runs filter plans over PNG images
#[derive(Debug, Clone, Default)]
pub struct FilterService {
    processor: ImageProcessor<PngCodec>,
}

impl FilterService {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            processor: ImageProcessor::new(PngCodec::from_config(config)),
        }
    }

    /// Filter an in-memory PNG and return the re-encoded PNG
    pub fn apply_bytes(&self, png: Vec<u8>, plan: &FilterPlan) -> Result<Vec<u8>, AppError> {
        let filters = plan.build();
        let filters: Vec<&dyn Filter> = filters.iter().map(|f| f.as_ref()).collect();
        Ok(self.processor.apply(&png, &filters)?)
    }

    /// Read `input`, filter it and write the result to `output`
    ///
    /// Returns the number of bytes written.
    pub fn apply_file(
        &self,
        input: &Path,
        output: &Path,
        plan: &FilterPlan,
    ) -> Result<usize, AppError> {
        let png = std::fs::read(input)?;
        let steps: Vec<String> = plan.specs().iter().map(ToString::to_string).collect();
        tracing::info!(
            input = %input.display(),
            steps = ?steps,
            "Filtering image"
        );

        let filtered = self.apply_bytes(png, plan)?;
        std::fs::write(output, &filtered)?;

        tracing::info!(
            output = %output.display(),
            bytes = filtered.len(),
            "Wrote filtered image"
        );
        Ok(filtered.len())
    }
}
