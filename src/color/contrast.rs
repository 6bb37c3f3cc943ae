//! WCAG 2.1 relative luminance and contrast ratio
//!
//! Implements the formulas behind Success Criterion 1.4.3:
//! - each sRGB channel is normalized to [0, 1] and linearized
//! - luminance is the Rec. 709 weighted sum of the linear channels
//! - contrast is `(L_brighter + 0.05) / (L_darker + 0.05)`, in [1, 21]
//!
//! Only the AA normal-text threshold (4.5:1) is supported.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::{wcag, BACKGROUND};

use super::Pixel;

/// Linearize one sRGB channel value
pub fn linearize_channel(channel: u8) -> f64 {
    let v = channel as f64 / 255.0;
    if v <= wcag::SRGB_LINEAR_THRESHOLD {
        v / wcag::SRGB_LINEAR_DIVISOR
    } else {
        ((v + wcag::SRGB_GAMMA_OFFSET) / wcag::SRGB_GAMMA_SCALE).powf(wcag::SRGB_GAMMA)
    }
}

/// Relative luminance in [0, 1]; 0 for black, 1 for white
pub fn relative_luminance(pixel: Pixel) -> f64 {
    wcag::RED_WEIGHT * linearize_channel(pixel.r)
        + wcag::GREEN_WEIGHT * linearize_channel(pixel.g)
        + wcag::BLUE_WEIGHT * linearize_channel(pixel.b)
}

/// Contrast ratio between two colors, independent of argument order
pub fn contrast_ratio(a: Pixel, b: Pixel) -> f64 {
    let la = relative_luminance(a);
    let lb = relative_luminance(b);
    let brighter = la.max(lb);
    let darker = la.min(lb);
    (brighter + wcag::LUMINANCE_OFFSET) / (darker + wcag::LUMINANCE_OFFSET)
}

/// Compliance with the AA normal-text threshold
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Verdict {
    Pass,
    Fail,
}

impl Verdict {
    /// `Pass` when `ratio >= 4.5`
    pub fn from_ratio(ratio: f64) -> Self {
        if ratio >= wcag::AA_NORMAL_TEXT_RATIO {
            Verdict::Pass
        } else {
            Verdict::Fail
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Verdict::Pass => "Pass",
            Verdict::Fail => "Fail",
        }
    }

    pub fn is_pass(self) -> bool {
        self == Verdict::Pass
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ratio and verdict for one foreground color
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Contrast {
    pub ratio: f64,
    pub verdict: Verdict,
}

/// Evaluates foreground colors against a fixed background
#[derive(Debug, Clone, Copy)]
pub struct ContrastEvaluator {
    background: Pixel,
    background_luminance: f64,
}

impl Default for ContrastEvaluator {
    fn default() -> Self {
        Self::new()
    }
}

impl ContrastEvaluator {
    /// Evaluator against a white background
    pub fn new() -> Self {
        Self {
            background: BACKGROUND,
            background_luminance: relative_luminance(BACKGROUND),
        }
    }

    pub fn background(&self) -> Pixel {
        self.background
    }

    /// Contrast of `foreground` on the background
    pub fn evaluate(&self, foreground: Pixel) -> Contrast {
        let fg = relative_luminance(foreground);
        let brighter = fg.max(self.background_luminance);
        let darker = fg.min(self.background_luminance);
        let ratio = (brighter + wcag::LUMINANCE_OFFSET) / (darker + wcag::LUMINANCE_OFFSET);

        Contrast {
            ratio,
            verdict: Verdict::from_ratio(ratio),
        }
    }
}
