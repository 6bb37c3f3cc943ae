//! Image loading and the RGB boundary
//!
//! This module provides a single entry point for decoding images from disk
//! and the conversion that every image goes through before its pixels are
//! counted.
//!
//! ## Supported Formats
//!
//! Via the `image` crate:
//! - JPEG, PNG, GIF (first frame), WebP, TIFF, BMP, ICO, TGA, PNM, QOI
//!
//! ## Design
//!
//! Decoded images keep whatever layout the file had. [`to_rgb_pixels`] is
//! the one place where alpha is dropped and 16-bit or float channels are
//! reduced to 8-bit RGB; the histogram only ever sees its output.

use std::path::Path;

use image::{DynamicImage, ImageReader, RgbImage};
use tracing::debug;

use crate::error::{AnalysisError, Result};

/// Supported image formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormat {
    /// JPEG image
    Jpeg,
    /// PNG image
    Png,
    /// GIF image (first frame only)
    Gif,
    /// WebP image
    WebP,
    /// TIFF image
    Tiff,
    /// BMP image
    Bmp,
    /// ICO image
    Ico,
    /// TGA image
    Tga,
    /// PNM image (PBM, PGM, PPM)
    Pnm,
    /// QOI image
    Qoi,
}

impl ImageFormat {
    /// Detect format from file extension
    pub fn from_extension(path: &Path) -> Option<ImageFormat> {
        let ext = path.extension()?.to_str()?.to_lowercase();
        match ext.as_str() {
            "jpg" | "jpeg" => Some(ImageFormat::Jpeg),
            "png" => Some(ImageFormat::Png),
            "gif" => Some(ImageFormat::Gif),
            "webp" => Some(ImageFormat::WebP),
            "tiff" | "tif" => Some(ImageFormat::Tiff),
            "bmp" => Some(ImageFormat::Bmp),
            "ico" => Some(ImageFormat::Ico),
            "tga" => Some(ImageFormat::Tga),
            "pbm" | "pgm" | "ppm" | "pnm" => Some(ImageFormat::Pnm),
            "qoi" => Some(ImageFormat::Qoi),
            _ => None,
        }
    }

    /// Supported counterpart of a format detected by the `image` crate
    pub fn from_image_format(format: image::ImageFormat) -> Option<ImageFormat> {
        match format {
            image::ImageFormat::Jpeg => Some(ImageFormat::Jpeg),
            image::ImageFormat::Png => Some(ImageFormat::Png),
            image::ImageFormat::Gif => Some(ImageFormat::Gif),
            image::ImageFormat::WebP => Some(ImageFormat::WebP),
            image::ImageFormat::Tiff => Some(ImageFormat::Tiff),
            image::ImageFormat::Bmp => Some(ImageFormat::Bmp),
            image::ImageFormat::Ico => Some(ImageFormat::Ico),
            image::ImageFormat::Tga => Some(ImageFormat::Tga),
            image::ImageFormat::Pnm => Some(ImageFormat::Pnm),
            image::ImageFormat::Qoi => Some(ImageFormat::Qoi),
            _ => None,
        }
    }

    /// Matching decoder format in the `image` crate
    pub fn to_image_format(self) -> image::ImageFormat {
        match self {
            ImageFormat::Jpeg => image::ImageFormat::Jpeg,
            ImageFormat::Png => image::ImageFormat::Png,
            ImageFormat::Gif => image::ImageFormat::Gif,
            ImageFormat::WebP => image::ImageFormat::WebP,
            ImageFormat::Tiff => image::ImageFormat::Tiff,
            ImageFormat::Bmp => image::ImageFormat::Bmp,
            ImageFormat::Ico => image::ImageFormat::Ico,
            ImageFormat::Tga => image::ImageFormat::Tga,
            ImageFormat::Pnm => image::ImageFormat::Pnm,
            ImageFormat::Qoi => image::ImageFormat::Qoi,
        }
    }
}

/// Load and decode an image from disk
///
/// The format is detected from the file contents; the extension is only
/// consulted when the contents are not recognized.
///
/// # Errors
///
/// Returns `AnalysisError::UnsupportedFormat` if neither the contents nor
/// the extension identify a supported format, and
/// `AnalysisError::ImageLoadError` if the file cannot be opened or decoded.
///
/// # Example
///
/// ```rust,no_run
/// use contrast_scan::image_loader::{load_image, to_rgb_pixels};
/// use std::path::Path;
///
/// let image = load_image(Path::new("photo.png"))?;
/// let rgb = to_rgb_pixels(&image);
/// println!("Loaded image: {}x{}", rgb.width(), rgb.height());
/// # Ok::<(), contrast_scan::AnalysisError>(())
/// ```
pub fn load_image(path: &Path) -> Result<DynamicImage> {
    let mut reader = ImageReader::open(path)
        .and_then(|reader| reader.with_guessed_format())
        .map_err(|e| {
            AnalysisError::image_load(format!("Failed to open image file: {}", path.display()), e)
        })?;

    let format = reader
        .format()
        .and_then(ImageFormat::from_image_format)
        .or_else(|| ImageFormat::from_extension(path))
        .ok_or_else(|| AnalysisError::UnsupportedFormat {
            path: path.display().to_string(),
        })?;
    reader.set_format(format.to_image_format());

    let image = reader.decode().map_err(|e| {
        AnalysisError::image_load(format!("Failed to decode image: {}", path.display()), e)
    })?;

    debug!(
        path = %path.display(),
        ?format,
        width = image.width(),
        height = image.height(),
        color = ?image.color(),
        "decoded image"
    );
    Ok(image)
}

/// Reduce any decoded image to 8-bit RGB, discarding alpha
pub fn to_rgb_pixels(image: &DynamicImage) -> RgbImage {
    if image.color().has_alpha() {
        debug!(color = ?image.color(), "stripping alpha channel");
    }
    image.to_rgb8()
}

/// Get list of all supported file extensions
pub fn supported_extensions() -> &'static [&'static str] {
    &[
        "jpg", "jpeg", "png", "gif", "webp", "tiff", "tif", "bmp", "ico", "tga", "pbm", "pgm",
        "ppm", "pnm", "qoi",
    ]
}

/// Check if a file extension is supported
pub fn is_supported_extension(ext: &str) -> bool {
    let ext_lower = ext.to_lowercase();
    supported_extensions().contains(&ext_lower.as_str())
}
