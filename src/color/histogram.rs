//! Exact-match color histogram
//!
//! Counts every pixel under its exact RGB triple. There is no quantization:
//! colors that differ by a single channel unit are separate entries.

use std::collections::HashMap;

use image::RgbImage;
use serde::{Deserialize, Serialize};

use super::Pixel;

/// A color together with the number of pixels that carry it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorCount {
    pub pixel: Pixel,
    pub count: u64,
}

/// Per-color pixel counts for one image.
///
/// Entries are kept in first-encounter order so that [`ColorHistogram::ranked`]
/// can break count ties by that order.
#[derive(Debug, Clone, Default)]
pub struct ColorHistogram {
    index: HashMap<Pixel, usize>,
    entries: Vec<ColorCount>,
    total: u64,
}

impl ColorHistogram {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count pixels supplied in row-major order
    pub fn from_pixels<I>(pixels: I) -> Self
    where
        I: IntoIterator<Item = Pixel>,
    {
        let mut histogram = Self::new();
        for pixel in pixels {
            histogram.add(pixel);
        }
        histogram
    }

    /// Count every pixel of a decoded RGB image
    pub fn from_image(image: &RgbImage) -> Self {
        Self::from_pixels(image.pixels().map(|p| Pixel::from(*p)))
    }

    /// Record one occurrence of `pixel`
    pub fn add(&mut self, pixel: Pixel) {
        match self.index.get(&pixel) {
            Some(&slot) => self.entries[slot].count += 1,
            None => {
                self.index.insert(pixel, self.entries.len());
                self.entries.push(ColorCount { pixel, count: 1 });
            }
        }
        self.total += 1;
    }

    /// Number of occurrences of `pixel` (zero if never seen)
    pub fn count(&self, pixel: Pixel) -> u64 {
        self.index
            .get(&pixel)
            .map_or(0, |&slot| self.entries[slot].count)
    }

    /// Total number of pixels consumed
    pub fn total_pixels(&self) -> u64 {
        self.total
    }

    /// Number of distinct RGB triples seen
    pub fn distinct_colors(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries sorted by count descending, ties in first-encounter order
    pub fn ranked(&self) -> Vec<ColorCount> {
        let mut ranked = self.entries.clone();
        // sort_by is stable
        ranked.sort_by(|a, b| b.count.cmp(&a.count));
        ranked
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_histogram() {
        let histogram = ColorHistogram::from_pixels(Vec::new());
        assert!(histogram.is_empty());
        assert_eq!(histogram.total_pixels(), 0);
        assert!(histogram.ranked().is_empty());
    }

    #[test]
    fn test_exact_counting() {
        let pixels = vec![
            Pixel::new(10, 10, 10),
            Pixel::new(10, 10, 11),
            Pixel::new(10, 10, 10),
        ];
        let histogram = ColorHistogram::from_pixels(pixels);

        assert_eq!(histogram.distinct_colors(), 2);
        assert_eq!(histogram.count(Pixel::new(10, 10, 10)), 2);
        assert_eq!(histogram.count(Pixel::new(10, 10, 11)), 1);
        assert_eq!(histogram.count(Pixel::new(0, 0, 0)), 0);
    }

    #[test]
    fn test_ranked_descending_with_stable_ties() {
        let a = Pixel::new(1, 0, 0);
        let b = Pixel::new(2, 0, 0);
        let c = Pixel::new(3, 0, 0);
        let histogram = ColorHistogram::from_pixels(vec![a, b, c, c, b, c]);

        let order: Vec<Pixel> = histogram.ranked().iter().map(|e| e.pixel).collect();
        assert_eq!(order, vec![c, b, a]);

        // a and b tie at one each; a was seen first
        let histogram = ColorHistogram::from_pixels(vec![a, c, b, c]);
        let order: Vec<Pixel> = histogram.ranked().iter().map(|e| e.pixel).collect();
        assert_eq!(order, vec![c, a, b]);
    }

    #[test]
    fn test_from_image_counts_sum_to_area() {
        let image = RgbImage::from_fn(7, 5, |x, y| image::Rgb([(x * 30) as u8, (y * 40) as u8, 0]));
        let histogram = ColorHistogram::from_image(&image);

        let sum: u64 = histogram.ranked().iter().map(|e| e.count).sum();
        assert_eq!(sum, 35);
        assert_eq!(histogram.total_pixels(), 35);
        assert_eq!(histogram.distinct_colors(), 35);
    }
}
