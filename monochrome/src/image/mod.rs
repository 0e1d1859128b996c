//! Decode, threshold and re-encode a single PNG

mod decode;
mod encode;
mod transform;

// Re-export public API
pub use decode::load;
pub use encode::{compress_to_png, save, OutputColor, PngCompression};
pub use transform::{channel_mean, is_white, to_monochrome, Stats, DEFAULT_THRESHOLD};

use std::path::Path;

use crate::config::MonochromeConfig;
use crate::error::Result;

/// Run the whole pipeline: load `input`, threshold it, write `output`
pub fn convert(input: &Path, output: &Path, config: &MonochromeConfig) -> Result<Stats> {
    log::debug!(
        "Converting {} -> {} (threshold {})",
        input.display(),
        output.display(),
        config.threshold
    );

    let img = load(input)?;
    let mono = to_monochrome(&img, config.threshold);
    let stats = Stats::of(&mono);

    save(&mono, output, config.png_compression, config.color)?;

    log::info!(
        "Wrote {} ({}x{}, {:.1}% white)",
        output.display(),
        stats.dimensions.0,
        stats.dimensions.1,
        stats.white_ratio() * 100.0
    );

    Ok(stats)
}
