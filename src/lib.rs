//! # Contrast Scan
//!
//! A Rust crate for finding the prominent colors of an image and checking
//! them against WCAG Success Criterion 1.4.3 on a white background.
//!
//! The analysis is a linear pipeline:
//! - Count every pixel under its exact RGB triple
//! - Rank colors by frequency and drop black, white and near-grey colors
//! - Keep the 15 most frequent survivors and compute their dominance
//! - Compute each color's contrast ratio against white (AA pass at 4.5:1)
//!
//! Every call is stateless and owns its intermediate data.
//!
//! ## Example
//!
//! ```rust,no_run
//! use contrast_scan::{analyze_file, AnalysisConfig};
//! use std::path::Path;
//!
//! let result = analyze_file(Path::new("logo.png"), &AnalysisConfig::default())?;
//! for record in &result.contrast {
//!     println!("{} {:.2}:1 {}", record.hex, record.ratio, record.verdict);
//! }
//! # Ok::<(), contrast_scan::AnalysisError>(())
//! ```

use std::path::Path;

use image::{DynamicImage, RgbImage};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

pub mod error;
pub mod constants;
pub mod config;
pub mod color;
pub mod report;
pub mod image_loader;
pub mod logging;

pub use color::{ColorCount, ColorHistogram, ContrastEvaluator, NeutralFilter, Pixel, Verdict};
pub use config::AnalysisConfig;
pub use error::{AnalysisError, Result};
pub use report::{ColorEntry, ContrastRecord};

/// Outcome of analyzing one image
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub width: u32,
    pub height: u32,
    /// Pixels counted; always `width * height`
    pub total_pixels: u64,
    /// Distinct RGB triples in the image, neutral ones included
    pub distinct_colors: usize,
    /// Most frequent non-neutral colors, count descending
    pub prominent_colors: Vec<ColorEntry>,
    /// The same colors evaluated on white, ratio descending
    pub contrast: Vec<ContrastRecord>,
}

impl AnalysisResult {
    /// True when no color survived the neutral filter
    pub fn is_no_data(&self) -> bool {
        self.prominent_colors.is_empty()
    }

    /// Number of prominent colors passing AA on white
    pub fn passing_count(&self) -> usize {
        self.contrast
            .iter()
            .filter(|record| record.verdict.is_pass())
            .count()
    }
}

/// Analyze a decoded RGB image with the default configuration
pub fn analyze(image: &RgbImage) -> Result<AnalysisResult> {
    analyze_with_config(image, &AnalysisConfig::default())
}

/// Analyze a decoded RGB image
///
/// # Errors
///
/// Returns `AnalysisError::InvalidParameter` for an invalid configuration,
/// or `AnalysisError::ThumbnailEncodeError` if a preview cannot be encoded.
/// An image without prominent colors is not an error; see
/// [`AnalysisResult::is_no_data`].
pub fn analyze_with_config(image: &RgbImage, config: &AnalysisConfig) -> Result<AnalysisResult> {
    config.validate()?;
    let (width, height) = image.dimensions();

    let histogram = ColorHistogram::from_image(image);
    debug!(
        width,
        height,
        distinct = histogram.distinct_colors(),
        "built color histogram"
    );

    let ranked = histogram.ranked();
    let filtered = config.neutral_filter().apply(&ranked);
    debug!(
        ranked = ranked.len(),
        kept = filtered.len(),
        grey_threshold = config.neutral_filter.grey_threshold,
        "filtered neutral colors"
    );

    let mut result = AnalysisResult {
        width,
        height,
        total_pixels: histogram.total_pixels(),
        distinct_colors: histogram.distinct_colors(),
        prominent_colors: Vec::new(),
        contrast: Vec::new(),
    };

    if filtered.is_empty() {
        info!(width, height, "no prominent colors found");
        return Ok(result);
    }

    result.prominent_colors = report::color_entries(&filtered);
    result.contrast = report::contrast_table(
        &result.prominent_colors,
        &ContrastEvaluator::new(),
        config.thumbnail.size,
    )?;

    info!(
        colors = result.prominent_colors.len(),
        passing = result.passing_count(),
        "contrast analysis complete"
    );
    Ok(result)
}

/// Analyze an image of any pixel layout; alpha is dropped first
pub fn analyze_dynamic(image: &DynamicImage, config: &AnalysisConfig) -> Result<AnalysisResult> {
    analyze_with_config(&image_loader::to_rgb_pixels(image), config)
}

/// Decode an image file and analyze it
pub fn analyze_file(image_path: &Path, config: &AnalysisConfig) -> Result<AnalysisResult> {
    let image = image_loader::load_image(image_path)?;
    analyze_dynamic(&image, config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_analysis_result_serialization() {
        let image = RgbImage::from_pixel(2, 2, image::Rgb([200, 50, 50]));
        let result = analyze(&image).unwrap();

        let json = serde_json::to_string(&result).unwrap();
        let deserialized: AnalysisResult = serde_json::from_str(&json).unwrap();

        assert_eq!(deserialized.total_pixels, 4);
        assert_eq!(deserialized.prominent_colors[0].pixel, Pixel::new(200, 50, 50));
        assert_eq!(deserialized.contrast[0].verdict, Verdict::Pass);
        assert!((deserialized.contrast[0].ratio - result.contrast[0].ratio).abs() < 1e-9);
        assert!(json.contains("\"verdict\":\"Pass\""));
        assert!(json.contains("\"hex\":\"#c83232\""));
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let image = RgbImage::from_pixel(1, 1, image::Rgb([200, 50, 50]));
        let mut config = AnalysisConfig::default();
        config.neutral_filter.max_colors = 0;

        assert!(matches!(
            analyze_with_config(&image, &config),
            Err(AnalysisError::InvalidParameter { .. })
        ));
    }
}
