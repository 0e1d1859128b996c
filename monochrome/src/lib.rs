pub mod config;
pub mod error;
pub mod image;
pub mod source;

// Re-export commonly used types
pub use config::MonochromeConfig;
pub use error::{Error, Result};
pub use image::{convert, OutputColor, PngCompression, Stats, DEFAULT_THRESHOLD};
pub use source::ImageFile;
