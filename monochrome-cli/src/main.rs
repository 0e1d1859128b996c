use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};

use std::path::PathBuf;

use monochrome::{ImageFile, MonochromeConfig, OutputColor, PngCompression};

#[derive(Parser)]
#[command(name = "monochrome")]
#[command(about = "Convert a PNG image to pure black and white", long_about = None)]
#[command(version)]
struct Args {
    /// Input PNG file
    #[arg(value_name = "INPUT")]
    input: PathBuf,

    /// Output PNG file (defaults to <INPUT stem>_mono.png next to the input)
    #[arg(short, long, value_name = "PATH")]
    output: Option<PathBuf>,

    /// Channel averages above this become white (0-255)
    #[arg(short, long, value_name = "VALUE")]
    threshold: Option<u8>,

    /// PNG compression level
    #[arg(long, value_enum)]
    png_compression: Option<PngCompressionArg>,

    /// Channel layout of the written PNG
    #[arg(long, value_enum)]
    color: Option<OutputColorArg>,

    /// Save the effective settings as the new defaults
    #[arg(long, default_value_t)]
    save_config: bool,

    /// Verbose output
    #[arg(short, long, default_value_t)]
    verbose: bool,

    /// Quiet mode (no log output)
    #[arg(short, long, default_value_t, conflicts_with = "verbose")]
    quiet: bool,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum PngCompressionArg {
    Fast,
    Default,
    Best,
}

impl From<PngCompressionArg> for PngCompression {
    fn from(arg: PngCompressionArg) -> Self {
        match arg {
            PngCompressionArg::Fast => PngCompression::Fast,
            PngCompressionArg::Default => PngCompression::Default,
            PngCompressionArg::Best => PngCompression::Best,
        }
    }
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum OutputColorArg {
    Rgb,
    Luma,
}

impl From<OutputColorArg> for OutputColor {
    fn from(arg: OutputColorArg) -> Self {
        match arg {
            OutputColorArg::Rgb => OutputColor::Rgb,
            OutputColorArg::Luma => OutputColor::Luma,
        }
    }
}

fn main() -> Result<()> {
    let args = parse_args();

    setup_logging(args.verbose, args.quiet);

    let config = build_config(&args);

    let file = match &args.output {
        Some(output) => ImageFile::with_output(args.input.clone(), output.clone()),
        None => ImageFile::new(args.input.clone()),
    };

    log::info!("Converting: `{}`", file.input().display());

    let stats = monochrome::convert(file.input(), file.output(), &config)
        .with_context(|| format!("Failed to convert {}", file.input().display()))?;

    log::debug!("{} white, {} black pixels", stats.white, stats.black);

    // only a successful run updates the saved defaults
    if args.save_config {
        match config.save() {
            Some(path) => log::info!("Saved defaults to {}", path.display()),
            None => log::warn!("Could not save config"),
        }
    }

    Ok(())
}

/// Usage errors exit with status 1, help and version with 0
fn parse_args() -> Args {
    Args::try_parse().unwrap_or_else(|e| {
        let _ = e.print();
        std::process::exit(if e.use_stderr() { 1 } else { 0 });
    })
}

fn setup_logging(verbose: bool, quiet: bool) {
    if quiet {
        return;
    }

    let level = if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_timestamp(None)
        .format_target(false)
        .init();
}

/// Saved defaults, overridden by whatever was given on the command line
fn build_config(args: &Args) -> MonochromeConfig {
    let mut config = MonochromeConfig::load().unwrap_or_default();

    if let Some(threshold) = args.threshold {
        config.threshold = threshold;
    }
    if let Some(compression) = args.png_compression {
        config.png_compression = compression.into();
    }
    if let Some(color) = args.color {
        config.color = color.into();
    }

    log::debug!("Using {config:?}");
    config
}
