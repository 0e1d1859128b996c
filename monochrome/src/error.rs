use std::path::PathBuf;

use imageproc::image::ImageError;

/// Everything that can go wrong between reading the input and writing the output.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to open {}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to decode PNG {}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: ImageError,
    },

    #[error("failed to write {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to encode PNG {}", path.display())]
    Encode {
        path: PathBuf,
        #[source]
        source: ImageError,
    },
}

impl Error {
    /// The file the failing operation was working on
    pub fn path(&self) -> &std::path::Path {
        match self {
            Error::Open { path, .. }
            | Error::Decode { path, .. }
            | Error::Write { path, .. }
            | Error::Encode { path, .. } => path,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[test]
fn message_names_the_file() {
    let err = Error::Open {
        path: PathBuf::from("scans/page 1.png"),
        source: std::io::Error::from(std::io::ErrorKind::NotFound),
    };

    assert_eq!(err.to_string(), "failed to open scans/page 1.png");
    assert_eq!(err.path(), std::path::Path::new("scans/page 1.png"));
    assert!(std::error::Error::source(&err).is_some());
}
