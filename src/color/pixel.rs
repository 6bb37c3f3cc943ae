//! 8-bit RGB pixel value used as histogram key and report color

use std::fmt;

use palette::Srgb;
use serde::{Deserialize, Serialize};

/// A triple of 8-bit red, green and blue intensities.
///
/// Alpha is never represented; images are reduced to three channels before
/// any pixel reaches the histogram.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Pixel {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Pixel {
    pub const BLACK: Pixel = Pixel::new(0, 0, 0);
    pub const WHITE: Pixel = Pixel::new(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Channels as an array in R, G, B order
    pub fn channels(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// Lowercase, zero-padded `#rrggbb`
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Normalized sRGB color for display and serialization
    pub fn to_srgb(self) -> Srgb {
        Srgb::<u8>::from(self).into_format()
    }
}

impl fmt::Display for Pixel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl From<image::Rgb<u8>> for Pixel {
    fn from(rgb: image::Rgb<u8>) -> Self {
        let [r, g, b] = rgb.0;
        Self { r, g, b }
    }
}

impl From<Pixel> for image::Rgb<u8> {
    fn from(pixel: Pixel) -> Self {
        image::Rgb(pixel.channels())
    }
}

impl From<Srgb<u8>> for Pixel {
    fn from(srgb: Srgb<u8>) -> Self {
        Self::new(srgb.red, srgb.green, srgb.blue)
    }
}

impl From<Pixel> for Srgb<u8> {
    fn from(pixel: Pixel) -> Self {
        Srgb::new(pixel.r, pixel.g, pixel.b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_is_lowercase_and_padded() {
        assert_eq!(Pixel::new(200, 50, 50).to_hex(), "#c83232");
        assert_eq!(Pixel::new(0, 10, 255).to_hex(), "#000aff");
        assert_eq!(Pixel::BLACK.to_hex(), "#000000");
        assert_eq!(Pixel::WHITE.to_string(), "#ffffff");
    }

    #[test]
    fn test_image_rgb_conversion() {
        let pixel = Pixel::from(image::Rgb([1, 2, 3]));
        assert_eq!(pixel, Pixel::new(1, 2, 3));
        assert_eq!(image::Rgb::<u8>::from(pixel).0, [1, 2, 3]);
    }

    #[test]
    fn test_srgb_conversion() {
        let srgb = Pixel::new(255, 0, 51).to_srgb();
        assert!((srgb.red - 1.0).abs() < 1e-6);
        assert!(srgb.green.abs() < 1e-6);
        assert!((srgb.blue - 0.2).abs() < 1e-6);

        let back = Pixel::from(Srgb::new(9u8, 8, 7));
        assert_eq!(back, Pixel::new(9, 8, 7));
    }
}
