//! Solid color preview images
//!
//! Each reported color gets a small square PNG, base64-encoded so it can be
//! embedded directly in an HTML `<img>` tag.

use std::io::Cursor;

use base64::{engine::general_purpose::STANDARD, Engine as _};
use image::{ImageFormat, RgbImage};

use crate::color::Pixel;
use crate::constants::thumbnail::MAX_SIZE;
use crate::error::{AnalysisError, Result};

/// Encode a `size`×`size` image filled with `pixel` as PNG bytes
///
/// `size` must be between 1 and [`MAX_SIZE`].
pub fn solid_png(pixel: Pixel, size: u32) -> Result<Vec<u8>> {
    if size == 0 || size > MAX_SIZE {
        return Err(AnalysisError::invalid_parameter("thumbnail.size", size));
    }

    let image = RgbImage::from_pixel(size, size, pixel.into());
    let mut bytes = Vec::new();
    image
        .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
        .map_err(|e| AnalysisError::thumbnail(format!("PNG encoding failed for {}", pixel), e))?;

    Ok(bytes)
}

/// Same as [`solid_png`], encoded with the standard base64 alphabet
pub fn solid_png_base64(pixel: Pixel, size: u32) -> Result<String> {
    Ok(STANDARD.encode(solid_png(pixel, size)?))
}
