//! Presentation-ready records
//!
//! Turns the filtered color list into the rows a display layer needs:
//! hex codes, pixel counts and dominance ratios for the color summary, and
//! contrast records with embedded previews for the WCAG table.

pub mod thumbnail;

use palette::Srgb;
use serde::{Deserialize, Serialize};

use crate::color::{ColorCount, ContrastEvaluator, Pixel, Verdict};
use crate::error::Result;

/// One prominent color in the summary
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorEntry {
    pub pixel: Pixel,
    /// `#rrggbb`, lowercase
    pub hex: String,
    /// Normalized sRGB for display
    pub srgb: Srgb,
    /// Number of pixels with exactly this color
    pub count: u64,
    /// Share of this color among the prominent colors (not the whole image)
    pub dominance: f64,
}

/// Build summary entries from the filtered list.
///
/// Dominance is relative to the filtered total. An empty list yields no
/// entries.
pub fn color_entries(filtered: &[ColorCount]) -> Vec<ColorEntry> {
    let total: u64 = filtered.iter().map(|entry| entry.count).sum();
    if total == 0 {
        return Vec::new();
    }

    filtered
        .iter()
        .map(|entry| ColorEntry {
            pixel: entry.pixel,
            hex: entry.pixel.to_hex(),
            srgb: entry.pixel.to_srgb(),
            count: entry.count,
            dominance: entry.count as f64 / total as f64,
        })
        .collect()
}

/// WCAG 1.4.3 evaluation of one prominent color on white
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContrastRecord {
    pub pixel: Pixel,
    pub hex: String,
    pub ratio: f64,
    pub verdict: Verdict,
    /// Solid color PNG, standard base64
    pub thumbnail_png_base64: String,
}

impl ContrastRecord {
    /// `data:` URI for use as an `<img src>`
    pub fn preview_data_uri(&self) -> String {
        format!("data:image/png;base64,{}", self.thumbnail_png_base64)
    }
}

/// Evaluate every entry and sort by descending contrast ratio.
///
/// Equal ratios keep the order of `entries`.
pub fn contrast_table(
    entries: &[ColorEntry],
    evaluator: &ContrastEvaluator,
    thumbnail_size: u32,
) -> Result<Vec<ContrastRecord>> {
    let mut records = entries
        .iter()
        .map(|entry| {
            let contrast = evaluator.evaluate(entry.pixel);
            Ok(ContrastRecord {
                pixel: entry.pixel,
                hex: entry.hex.clone(),
                ratio: contrast.ratio,
                verdict: contrast.verdict,
                thumbnail_png_base64: thumbnail::solid_png_base64(entry.pixel, thumbnail_size)?,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    records.sort_by(|a, b| b.ratio.total_cmp(&a.ratio));
    Ok(records)
}
