use rgba_filter::FilterError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Filter error: {0}")]
    Filter(#[from] FilterError),

    #[error("Invalid filter '{spec}': {reason}")]
    InvalidFilter { spec: String, reason: String },

    #[error("Config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Error)]
pub enum CodecError {
    #[error("PNG decode error: {0}")]
    PngDecode(String),

    #[error("PNG encode error: {0}")]
    PngEncode(String),

    #[error("Unsupported PNG format: {0:?} at {1:?}")]
    UnsupportedFormat(png::ColorType, png::BitDepth),

    #[error("Image too large: {width}x{height} (max {max} pixels)")]
    ImageTooLarge {
        width: u32,
        height: u32,
        max: u64,
    },
}

impl From<CodecError> for FilterError {
    fn from(e: CodecError) -> Self {
        match e {
            CodecError::PngEncode(_) => FilterError::Encode(e.to_string()),
            _ => FilterError::Decode(e.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_error_invalid_filter() {
        let error = AppError::InvalidFilter {
            spec: "blur:3".to_string(),
            reason: "unknown filter kind".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid filter 'blur:3': unknown filter kind"
        );
    }

    #[test]
    fn test_app_error_config() {
        let error = AppError::Config("bad yaml".to_string());
        assert_eq!(error.to_string(), "Config error: bad yaml");
    }

    #[test]
    fn test_app_error_from_filter_error() {
        let filter_error = FilterError::Decode("not a PNG".to_string());
        let app_error: AppError = filter_error.into();
        match app_error {
            AppError::Filter(_) => {}
            _ => panic!("Expected Filter variant"),
        }
        assert_eq!(app_error.to_string(), "Filter error: decode error: not a PNG");
    }

    #[test]
    fn test_codec_error_image_too_large() {
        let error = CodecError::ImageTooLarge {
            width: 10_000,
            height: 10_000,
            max: 1_000_000,
        };
        assert_eq!(
            error.to_string(),
            "Image too large: 10000x10000 (max 1000000 pixels)"
        );
    }

    #[test]
    fn test_codec_error_maps_to_filter_error() {
        let decode: FilterError = CodecError::PngDecode("bad signature".to_string()).into();
        assert!(matches!(decode, FilterError::Decode(_)));

        let encode: FilterError = CodecError::PngEncode("writer failed".to_string()).into();
        assert!(matches!(encode, FilterError::Encode(_)));
        assert_eq!(encode.to_string(), "encode error: PNG encode error: writer failed");
    }
}
