//! Neutral color removal
//!
//! Drops pure black, pure white and near-grey colors from a ranked list,
//! then keeps the leading entries. The list is never re-ranked.

use crate::constants::filtering::{DEFAULT_GREY_THRESHOLD, DEFAULT_MAX_COLORS};

use super::{ColorCount, Pixel};

/// True when every pairwise channel difference is strictly below `threshold`.
///
/// A threshold of zero therefore classifies nothing as grey.
pub fn is_grey(pixel: Pixel, threshold: u8) -> bool {
    let [r, g, b] = pixel.channels();
    r.abs_diff(g) < threshold && g.abs_diff(b) < threshold && b.abs_diff(r) < threshold
}

/// Filter that removes neutral colors and truncates to the most frequent
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NeutralFilter {
    grey_threshold: u8,
    max_colors: usize,
}

impl Default for NeutralFilter {
    fn default() -> Self {
        Self::new()
    }
}

impl NeutralFilter {
    /// Create a filter with the default threshold (30) and limit (15)
    pub fn new() -> Self {
        Self {
            grey_threshold: DEFAULT_GREY_THRESHOLD,
            max_colors: DEFAULT_MAX_COLORS,
        }
    }

    /// Create a filter with custom parameters
    pub fn with_params(grey_threshold: u8, max_colors: usize) -> Self {
        Self {
            grey_threshold,
            max_colors,
        }
    }

    pub fn grey_threshold(&self) -> u8 {
        self.grey_threshold
    }

    pub fn max_colors(&self) -> usize {
        self.max_colors
    }

    pub fn is_grey(&self, pixel: Pixel) -> bool {
        is_grey(pixel, self.grey_threshold)
    }

    /// Whether `pixel` is removed: black, white or grey
    pub fn is_excluded(&self, pixel: Pixel) -> bool {
        pixel == Pixel::BLACK || pixel == Pixel::WHITE || self.is_grey(pixel)
    }

    /// Remove neutral entries from a count-descending list and truncate
    pub fn apply(&self, ranked: &[ColorCount]) -> Vec<ColorCount> {
        ranked
            .iter()
            .filter(|entry| !self.is_excluded(entry.pixel))
            .take(self.max_colors)
            .copied()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(r: u8, g: u8, b: u8, count: u64) -> ColorCount {
        ColorCount {
            pixel: Pixel::new(r, g, b),
            count,
        }
    }

    #[test]
    fn test_equal_channels_are_grey() {
        for v in [0u8, 1, 100, 128, 254, 255] {
            assert!(is_grey(Pixel::new(v, v, v), DEFAULT_GREY_THRESHOLD));
        }
    }

    #[test]
    fn test_saturated_blue_is_not_grey() {
        assert!(!is_grey(Pixel::new(0, 0, 255), 30));
    }

    #[test]
    fn test_threshold_is_strict() {
        // |R-G| = 29 is grey, 30 is not
        assert!(is_grey(Pixel::new(129, 100, 110), 30));
        assert!(!is_grey(Pixel::new(130, 100, 110), 30));
        // any channel may be the highest
        assert!(is_grey(Pixel::new(100, 110, 129), 30));
        assert!(!is_grey(Pixel::new(100, 100, 100), 0));
    }

    #[test]
    fn test_excludes_black_and_white_exactly() {
        // zero threshold disables grey detection, extremes still go
        let filter = NeutralFilter::with_params(0, 15);
        assert!(filter.is_excluded(Pixel::BLACK));
        assert!(filter.is_excluded(Pixel::WHITE));
        assert!(!filter.is_excluded(Pixel::new(1, 1, 1)));
    }

    #[test]
    fn test_apply_filters_and_preserves_order() {
        let ranked = vec![
            entry(10, 10, 10, 5),
            entry(200, 50, 50, 3),
            entry(0, 0, 0, 2),
            entry(20, 40, 200, 2),
            entry(255, 255, 255, 1),
        ];
        let filtered = NeutralFilter::new().apply(&ranked);

        assert_eq!(filtered, vec![entry(200, 50, 50, 3), entry(20, 40, 200, 2)]);
    }

    #[test]
    fn test_apply_truncates_without_reranking() {
        let ranked: Vec<ColorCount> = (0..40u8)
            .map(|i| entry(200, i, 0, 100 - i as u64))
            .collect();
        let filtered = NeutralFilter::new().apply(&ranked);

        assert_eq!(filtered.len(), DEFAULT_MAX_COLORS);
        assert_eq!(filtered[..], ranked[..DEFAULT_MAX_COLORS]);
    }

    #[test]
    fn test_apply_all_neutral_is_empty() {
        let ranked = vec![entry(0, 0, 0, 4), entry(128, 128, 128, 2), entry(255, 255, 255, 1)];
        assert!(NeutralFilter::new().apply(&ranked).is_empty());
        assert!(NeutralFilter::new().apply(&[]).is_empty());
    }
}
