//! Error types for the contrast_scan library

use thiserror::Error;

/// Result type alias for contrast_scan operations
pub type Result<T> = std::result::Result<T, AnalysisError>;

/// Error types for color extraction and contrast analysis
///
/// An image whose colors are all neutral is not an error: it produces an
/// [`crate::AnalysisResult`] for which `is_no_data()` is true.
#[derive(Error, Debug)]
pub enum AnalysisError {
    /// Image file could not be opened or decoded
    #[error("Failed to load image: {message}")]
    ImageLoadError {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// File extension does not map to a decoder we ship
    #[error("Unsupported image format: {path}")]
    UnsupportedFormat { path: String },

    /// Preview thumbnail could not be encoded as PNG
    #[error("Failed to encode thumbnail: {message}")]
    ThumbnailEncodeError {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Configuration file could not be read, written or parsed
    #[error("Configuration error: {message}")]
    ConfigError {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Invalid input parameters
    #[error("Invalid parameter: {parameter} = {value}")]
    InvalidParameter { parameter: String, value: String },
}

impl AnalysisError {
    /// Create an image load error with context
    pub fn image_load<E>(message: impl Into<String>, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::ImageLoadError {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a thumbnail encoding error with context
    pub fn thumbnail<E>(message: impl Into<String>, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::ThumbnailEncodeError {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a configuration error with context
    pub fn config<E>(message: impl Into<String>, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::ConfigError {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create an invalid parameter error
    pub fn invalid_parameter(parameter: impl Into<String>, value: impl ToString) -> Self {
        Self::InvalidParameter {
            parameter: parameter.into(),
            value: value.to_string(),
        }
    }

    /// Check if this error can be fixed by the caller supplying different input
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            AnalysisError::UnsupportedFormat { .. }
                | AnalysisError::ConfigError { .. }
                | AnalysisError::InvalidParameter { .. }
        )
    }

    /// Get user-friendly error description for application display
    pub fn user_message(&self) -> String {
        match self {
            AnalysisError::ImageLoadError { .. } => {
                "Could not load the image. Please check the file and try again.".to_string()
            }
            AnalysisError::UnsupportedFormat { path } => {
                format!("'{}' is not a supported image format.", path)
            }
            AnalysisError::ConfigError { .. } => {
                "Could not read the configuration. Please check the JSON file.".to_string()
            }
            AnalysisError::InvalidParameter { parameter, value } => {
                format!("The setting '{}' cannot be {}.", parameter, value)
            }
            AnalysisError::ThumbnailEncodeError { .. } => {
                "Color analysis failed. Please try with a different image.".to_string()
            }
        }
    }
}
