//! Image encoding: PNG

use std::fs;
use std::io::Write;
use std::path::Path;

use imageproc::image::codecs::png::{CompressionType, FilterType, PngEncoder};
use imageproc::image::{
    ColorType, DynamicImage, GenericImageView, ImageEncoder, ImageResult, Luma, RgbImage,
};

use crate::error::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum PngCompression {
    Fast,
    Default,
    Best,
}

/// Channel layout of the written PNG
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum OutputColor {
    /// 8-bit RGB with three equal channels
    Rgb,
    /// 8-bit single-channel grayscale
    Luma,
}

/// Compress an image to PNG format with the specified compression level
pub fn compress_to_png<W>(
    img: &DynamicImage,
    writer: &mut W,
    compression: PngCompression,
) -> ImageResult<()>
where
    W: Write,
{
    let compression_type = match compression {
        PngCompression::Fast => CompressionType::Fast,
        PngCompression::Default => CompressionType::Default,
        PngCompression::Best => CompressionType::Best,
    };

    let is_grayscale = img.color() == ColorType::L8 || img.color() == ColorType::La8;

    let encoder = PngEncoder::new_with_quality(
        writer,
        compression_type,
        if is_grayscale {
            FilterType::NoFilter
        } else {
            FilterType::Adaptive
        },
    );

    encoder.write_image(
        img.as_bytes(),
        img.width(),
        img.height(),
        img.color().into(),
    )
}

/// Write a thresholded image to `path` as a non-interlaced 8-bit PNG
pub fn save(
    img: &RgbImage,
    path: &Path,
    compression: PngCompression,
    color: OutputColor,
) -> Result<()> {
    let img = match color {
        OutputColor::Rgb => DynamicImage::ImageRgb8(img.clone()),
        // channels are equal after thresholding, so red alone is the gray level
        OutputColor::Luma => {
            DynamicImage::ImageLuma8(imageproc::map::map_colors(img, |pixel| Luma([pixel[0]])))
        }
    };

    let (width, height) = img.dimensions();
    let mut buffer = Vec::with_capacity((width * height) as usize);

    compress_to_png(&img, &mut buffer, compression).map_err(|source| Error::Encode {
        path: path.to_path_buf(),
        source,
    })?;

    write_output(path, &buffer).map_err(|source| Error::Write {
        path: path.to_path_buf(),
        source,
    })?;

    log::debug!(
        "Encoded {} ({:?}, {:?} compression)",
        path.display(),
        color,
        compression
    );
    Ok(())
}

/// Replace `path` with `data` in one step when it is (or will be) a regular file
///
/// Special files such as pipes and devices can't be renamed over, so they get written directly.
fn write_output(path: &Path, data: &[u8]) -> std::io::Result<()> {
    let existing = fs::metadata(path).ok();
    if existing.as_ref().is_some_and(|meta| !meta.is_file()) {
        return fs::write(path, data);
    }

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut tmp = tempfile::NamedTempFile::new_in(dir)?;
    tmp.write_all(data)?;
    // temp files are created owner-only
    match existing {
        Some(meta) => tmp.as_file().set_permissions(meta.permissions())?,
        #[cfg(unix)]
        None => {
            use std::os::unix::fs::PermissionsExt;
            tmp.as_file()
                .set_permissions(fs::Permissions::from_mode(0o644))?
        }
        #[cfg(not(unix))]
        None => {}
    }
    tmp.as_file().sync_all()?;
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use imageproc::image::Rgb;

    fn checkerboard() -> RgbImage {
        RgbImage::from_fn(32, 32, |x, y| {
            if (x + y) % 2 == 0 {
                Rgb([255, 255, 255])
            } else {
                Rgb([0, 0, 0])
            }
        })
    }

    #[cfg(unix)]
    #[test]
    fn full_device_is_a_write_error() {
        let path = Path::new("/dev/full");
        if !path.exists() {
            return;
        }

        let err = save(&checkerboard(), path, PngCompression::Fast, OutputColor::Rgb).unwrap_err();

        assert!(matches!(err, Error::Write { .. }), "{err:?}");
    }

    #[test]
    fn failed_save_keeps_existing_output() {
        let dir = tempfile::tempdir().unwrap();
        // a directory where the file should go
        let path = dir.path().join("out.png");
        fs::create_dir(&path).unwrap();
        fs::write(path.join("keep"), b"old").unwrap();

        let err = save(&checkerboard(), &path, PngCompression::Fast, OutputColor::Rgb).unwrap_err();

        assert!(matches!(err, Error::Write { .. }), "{err:?}");
        assert_eq!(fs::read(path.join("keep")).unwrap(), b"old");
    }

    #[test]
    fn overwrite_leaves_no_temp_files() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.png");
        fs::write(&path, b"previous contents").unwrap();

        save(&checkerboard(), &path, PngCompression::Default, OutputColor::Luma).unwrap();

        let written = imageproc::image::open(&path).unwrap();
        assert_eq!(written.dimensions(), (32, 32));
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 1);
    }
}
