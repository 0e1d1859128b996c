//! Image decoding

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use imageproc::image::{ImageFormat, ImageReader, RgbImage};

use crate::error::{Error, Result};

/// Decode a PNG file into an 8-bit RGB grid
///
/// The format is fixed to PNG regardless of extension or content sniffing.
/// Gray, palette, alpha and 16-bit inputs are normalized to 8-bit RGB; alpha is dropped.
pub fn load(path: &Path) -> Result<RgbImage> {
    let file = File::open(path).map_err(|source| Error::Open {
        path: path.to_path_buf(),
        source,
    })?;

    let img = ImageReader::with_format(BufReader::new(file), ImageFormat::Png)
        .decode()
        .map_err(|source| Error::Decode {
            path: path.to_path_buf(),
            source,
        })?;

    log::debug!(
        "Decoded {} ({}x{}, {:?})",
        path.display(),
        img.width(),
        img.height(),
        img.color()
    );

    Ok(img.into_rgb8())
}
