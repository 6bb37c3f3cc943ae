//! Named constants for color extraction and contrast evaluation
//!
//! Defaults for the neutral filter live here so that they can be overridden
//! through [`crate::config::AnalysisConfig`] without changing behavior when
//! no configuration is given.

use crate::color::Pixel;

/// Neutral filter defaults
pub mod filtering {
    /// Channel difference below which a color counts as grey.
    ///
    /// A pixel is grey when every pairwise channel difference is strictly
    /// less than this value.
    pub const DEFAULT_GREY_THRESHOLD: u8 = 30;

    /// Number of prominent colors kept after filtering
    pub const DEFAULT_MAX_COLORS: usize = 15;
}

/// WCAG 2.1 relative luminance and contrast parameters
pub mod wcag {
    /// Minimum contrast for normal text, Success Criterion 1.4.3 (AA)
    pub const AA_NORMAL_TEXT_RATIO: f64 = 4.5;

    /// Flare term added to both luminances in the contrast ratio
    pub const LUMINANCE_OFFSET: f64 = 0.05;

    /// sRGB linearization breakpoint on the normalized channel value
    pub const SRGB_LINEAR_THRESHOLD: f64 = 0.04045;

    /// Slope of the linear segment below the breakpoint
    pub const SRGB_LINEAR_DIVISOR: f64 = 12.92;

    /// Offset and scale of the power segment: ((v + a) / (1 + a)) ^ gamma
    pub const SRGB_GAMMA_OFFSET: f64 = 0.055;
    pub const SRGB_GAMMA_SCALE: f64 = 1.055;
    pub const SRGB_GAMMA: f64 = 2.4;

    /// Rec. 709 luminance weights for linear R, G, B
    pub const RED_WEIGHT: f64 = 0.2126;
    pub const GREEN_WEIGHT: f64 = 0.7152;
    pub const BLUE_WEIGHT: f64 = 0.0722;
}

/// Preview thumbnail parameters
pub mod thumbnail {
    /// Edge length in pixels of the solid color preview
    pub const DEFAULT_SIZE: u32 = 15;

    /// Largest preview edge accepted from configuration
    pub const MAX_SIZE: u32 = 256;
}

/// Background every color is evaluated against
pub const BACKGROUND: Pixel = Pixel::WHITE;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_luminance_weights_sum_to_one() {
        let sum = wcag::RED_WEIGHT + wcag::GREEN_WEIGHT + wcag::BLUE_WEIGHT;
        assert!((sum - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_defaults() {
        assert_eq!(filtering::DEFAULT_GREY_THRESHOLD, 30);
        assert_eq!(filtering::DEFAULT_MAX_COLORS, 15);
        assert_eq!(thumbnail::DEFAULT_SIZE, 15);
        assert!(thumbnail::DEFAULT_SIZE <= thumbnail::MAX_SIZE);
        assert_eq!(BACKGROUND, Pixel::new(255, 255, 255));
    }
}
