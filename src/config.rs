//! Configuration for the contrast_scan analysis pipeline.
//!
//! Only the neutral filter and the preview thumbnail are tunable. The WCAG
//! threshold and the white background are fixed.
//!
//! # Configuration Loading
//!
//! ```no_run
//! use contrast_scan::AnalysisConfig;
//! use std::path::Path;
//!
//! // Load from file
//! let config = AnalysisConfig::from_json_file(Path::new("config.json"))?;
//!
//! // Or use defaults
//! let config = AnalysisConfig::default();
//! # Ok::<(), contrast_scan::AnalysisError>(())
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::color::NeutralFilter;
use crate::constants::{filtering, thumbnail};
use crate::error::{AnalysisError, Result};

/// Complete pipeline configuration.
///
/// Can be serialized to/from JSON for reproducible runs. Missing sections
/// fall back to their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Neutral filter configuration
    #[serde(default)]
    pub neutral_filter: NeutralFilterConfig,

    /// Preview thumbnail configuration
    #[serde(default)]
    pub thumbnail: ThumbnailConfig,
}

/// Neutral filter parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NeutralFilterConfig {
    /// Pairwise channel difference below which a color is grey
    pub grey_threshold: u8,

    /// Maximum number of prominent colors reported
    pub max_colors: usize,
}

impl Default for NeutralFilterConfig {
    fn default() -> Self {
        Self {
            grey_threshold: filtering::DEFAULT_GREY_THRESHOLD,
            max_colors: filtering::DEFAULT_MAX_COLORS,
        }
    }
}

/// Solid color preview parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThumbnailConfig {
    /// Edge length in pixels, 1 to `constants::thumbnail::MAX_SIZE`
    pub size: u32,
}

impl Default for ThumbnailConfig {
    fn default() -> Self {
        Self {
            size: thumbnail::DEFAULT_SIZE,
        }
    }
}

impl AnalysisConfig {
    /// Reject values that would make the pipeline produce nothing
    pub fn validate(&self) -> Result<()> {
        if self.neutral_filter.max_colors == 0 {
            return Err(AnalysisError::invalid_parameter("neutral_filter.max_colors", 0));
        }
        if self.thumbnail.size == 0 || self.thumbnail.size > thumbnail::MAX_SIZE {
            return Err(AnalysisError::invalid_parameter(
                "thumbnail.size",
                self.thumbnail.size,
            ));
        }
        Ok(())
    }

    /// Neutral filter described by this configuration
    pub fn neutral_filter(&self) -> NeutralFilter {
        NeutralFilter::with_params(
            self.neutral_filter.grey_threshold,
            self.neutral_filter.max_colors,
        )
    }

    /// Load configuration from JSON file
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            AnalysisError::config(format!("Failed to read {}", path.display()), e)
        })?;
        let config: Self = serde_json::from_str(&content).map_err(|e| {
            AnalysisError::config(format!("Failed to parse {}", path.display()), e)
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to JSON file
    pub fn to_json_file(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| AnalysisError::config("Failed to serialize configuration", e))?;
        std::fs::write(path, json).map_err(|e| {
            AnalysisError::config(format!("Failed to write {}", path.display()), e)
        })?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_constants() {
        let config = AnalysisConfig::default();
        assert_eq!(config.neutral_filter.grey_threshold, 30);
        assert_eq!(config.neutral_filter.max_colors, 15);
        assert_eq!(config.thumbnail.size, 15);
        assert!(config.validate().is_ok());
        assert_eq!(config.neutral_filter(), NeutralFilter::new());
    }

    #[test]
    fn test_validate_rejects_zero() {
        let mut config = AnalysisConfig::default();
        config.neutral_filter.max_colors = 0;
        assert!(matches!(
            config.validate(),
            Err(AnalysisError::InvalidParameter { .. })
        ));

        let mut config = AnalysisConfig::default();
        config.thumbnail.size = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let json = r#"{ "neutral_filter": { "grey_threshold": 10, "max_colors": 5 } }"#;
        let config: AnalysisConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.neutral_filter.grey_threshold, 10);
        assert_eq!(config.neutral_filter.max_colors, 5);
        assert_eq!(config.thumbnail, ThumbnailConfig::default());
    }

    #[test]
    fn test_validate_rejects_oversized_thumbnail() {
        let config: AnalysisConfig =
            serde_json::from_str(r#"{ "thumbnail": { "size": 4000000000 } }"#).unwrap();
        assert!(matches!(
            config.validate(),
            Err(AnalysisError::InvalidParameter { .. })
        ));

        let mut config = AnalysisConfig::default();
        config.thumbnail.size = thumbnail::MAX_SIZE;
        assert!(config.validate().is_ok());
        config.thumbnail.size = thumbnail::MAX_SIZE + 1;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_partial_section_uses_field_defaults() {
        let json = r#"{ "neutral_filter": { "grey_threshold": 10 }, "thumbnail": {} }"#;
        let config: AnalysisConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.neutral_filter.grey_threshold, 10);
        assert_eq!(config.neutral_filter.max_colors, filtering::DEFAULT_MAX_COLORS);
        assert_eq!(config.thumbnail.size, thumbnail::DEFAULT_SIZE);
    }

    #[test]
    fn test_json_file_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");

        let mut config = AnalysisConfig::default();
        config.neutral_filter.grey_threshold = 12;
        config.to_json_file(&path).unwrap();

        let loaded = AnalysisConfig::from_json_file(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_missing_file_is_config_error() {
        let err = AnalysisConfig::from_json_file(Path::new("does/not/exist.json")).unwrap_err();
        assert!(matches!(err, AnalysisError::ConfigError { .. }));
    }
}
