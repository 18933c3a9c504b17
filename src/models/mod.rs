pub mod config;
pub mod filter_spec;
pub mod selection;

pub use config::{AppConfig, CompressionLevel, LimitsConfig, OutputConfig};
pub use filter_spec::FilterSpec;
pub use selection::FilterSelection;
