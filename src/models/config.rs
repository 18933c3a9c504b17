use serde::Deserialize;
use std::path::Path;

use crate::error::AppError;

/// Application configuration loaded from a YAML file
#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
pub struct AppConfig {
    /// PNG output settings
    #[serde(default)]
    pub output: OutputConfig,

    /// Safety limits applied while decoding
    #[serde(default)]
    pub limits: LimitsConfig,
}

/// PNG output settings
#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
pub struct OutputConfig {
    /// zlib effort used when writing PNGs
    #[serde(default)]
    pub compression: CompressionLevel,
}

/// zlib effort used when writing PNGs
#[derive(Debug, Deserialize, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum CompressionLevel {
    Fast,
    #[default]
    Default,
    Best,
}

impl From<CompressionLevel> for png::Compression {
    fn from(level: CompressionLevel) -> Self {
        match level {
            CompressionLevel::Fast => png::Compression::Fast,
            CompressionLevel::Default => png::Compression::Default,
            CompressionLevel::Best => png::Compression::Best,
        }
    }
}

/// Safety limits applied while decoding
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct LimitsConfig {
    /// Largest accepted image, in pixels (width * height)
    #[serde(default = "default_max_pixels")]
    pub max_pixels: u64,
}

fn default_max_pixels() -> u64 {
    64 * 1024 * 1024
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            max_pixels: default_max_pixels(),
        }
    }
}

impl AppConfig {
    /// Parse configuration from a YAML string
    pub fn from_yaml(content: &str) -> Result<Self, AppError> {
        serde_yaml::from_str(content).map_err(|e| AppError::Config(e.to_string()))
    }

    /// Load configuration from an optional file path
    ///
    /// A missing path, unreadable file or invalid YAML falls back to the
    /// defaults with a warning.
    pub fn load(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            tracing::debug!("No config file configured, using defaults");
            return Self::default();
        };

        match std::fs::read_to_string(path) {
            Ok(content) => match Self::from_yaml(&content) {
                Ok(config) => {
                    tracing::info!(
                        path = %path.display(),
                        compression = ?config.output.compression,
                        max_pixels = config.limits.max_pixels,
                        "Loaded configuration"
                    );
                    config
                }
                Err(e) => {
                    tracing::warn!(%e, "Failed to parse config, using defaults");
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!(%e, path = %path.display(), "Failed to read config, using defaults");
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();

        assert_eq!(config.output.compression, CompressionLevel::Default);
        assert_eq!(config.limits.max_pixels, 64 * 1024 * 1024);
    }

    #[test]
    fn test_parse_full_config() {
        let yaml = r#"
output:
  compression: best
limits:
  max_pixels: 1000
"#;
        let config = AppConfig::from_yaml(yaml).unwrap();

        assert_eq!(config.output.compression, CompressionLevel::Best);
        assert_eq!(config.limits.max_pixels, 1000);
    }

    #[test]
    fn test_parse_partial_config_keeps_defaults() {
        let config = AppConfig::from_yaml("output:\n  compression: fast\n").unwrap();

        assert_eq!(config.output.compression, CompressionLevel::Fast);
        assert_eq!(config.limits, LimitsConfig::default());
    }

    #[test]
    fn test_parse_rejects_unknown_compression() {
        let result = AppConfig::from_yaml("output:\n  compression: ultra\n");
        assert!(matches!(result, Err(AppError::Config(_))));
    }

    #[test]
    fn test_load_missing_file_falls_back() {
        let config = AppConfig::load(Some(Path::new("/nonexistent/filterer.yaml")));
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "limits:\n  max_pixels: 42").unwrap();

        let config = AppConfig::load(Some(file.path()));
        assert_eq!(config.limits.max_pixels, 42);
        assert_eq!(config.output.compression, CompressionLevel::Default);
    }

    #[test]
    fn test_load_invalid_yaml_falls_back() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "limits: [not, a, map").unwrap();

        assert_eq!(AppConfig::load(Some(file.path())), AppConfig::default());
    }
}
