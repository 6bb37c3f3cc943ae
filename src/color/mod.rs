//! Color extraction and contrast module
//!
//! This module counts exact pixel colors, removes neutral colors from the
//! ranking and evaluates WCAG contrast against a white background.

pub mod pixel;
pub mod histogram;
pub mod filter;
pub mod contrast;

pub use pixel::Pixel;
pub use histogram::{ColorCount, ColorHistogram};
pub use filter::{is_grey, NeutralFilter};
pub use contrast::{contrast_ratio, relative_luminance, Contrast, ContrastEvaluator, Verdict};
