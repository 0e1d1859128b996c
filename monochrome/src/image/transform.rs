//! Thresholding to pure black and white

use imageproc::image::{Rgb, RgbImage};

/// Channel means strictly above this become white
pub const DEFAULT_THRESHOLD: u8 = 128;

const WHITE: Rgb<u8> = Rgb([255, 255, 255]);
const BLACK: Rgb<u8> = Rgb([0, 0, 0]);

/// Truncating mean of the three channels
#[inline]
pub fn channel_mean(Rgb([r, g, b]): Rgb<u8>) -> u8 {
    ((r as u16 + g as u16 + b as u16) / 3) as u8
}

#[inline]
pub fn is_white(pixel: Rgb<u8>, threshold: u8) -> bool {
    channel_mean(pixel) > threshold
}

/// Map every pixel to black or white, leaving the source untouched
pub fn to_monochrome(img: &RgbImage, threshold: u8) -> RgbImage {
    imageproc::map::map_colors(img, |pixel| {
        if is_white(pixel, threshold) {
            WHITE
        } else {
            BLACK
        }
    })
}

/// Pixel counts of a thresholded image
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stats {
    pub dimensions: (u32, u32),
    pub white: u64,
    pub black: u64,
}

impl Stats {
    pub fn of(img: &RgbImage) -> Self {
        let white = img.pixels().filter(|&&pixel| pixel == WHITE).count() as u64;
        let total = img.width() as u64 * img.height() as u64;

        Stats {
            dimensions: img.dimensions(),
            white,
            black: total - white,
        }
    }

    /// Share of white pixels in 0.0..=1.0, zero for an empty image
    pub fn white_ratio(&self) -> f64 {
        let total = self.white + self.black;
        if total == 0 {
            0.0
        } else {
            self.white as f64 / total as f64
        }
    }
}
