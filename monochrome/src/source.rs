use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};

const OUTPUT_SUFFIX: &str = "_mono";
const OUTPUT_EXTENSION: &str = "png";

/// An input image and where its converted counterpart goes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageFile {
    input: PathBuf,
    output: PathBuf,
}

impl ImageFile {
    /// Output defaults to `<stem>_mono.png` beside the input
    pub fn new(input: PathBuf) -> Self {
        let output = default_output(&input);
        ImageFile { input, output }
    }

    pub fn with_output(input: PathBuf, output: PathBuf) -> Self {
        ImageFile { input, output }
    }

    pub fn input(&self) -> &Path {
        &self.input
    }

    pub fn output(&self) -> &Path {
        &self.output
    }
}

fn default_output(input: &Path) -> PathBuf {
    // kept as OsString so non-UTF-8 names survive byte for byte
    let mut file_name = input
        .file_stem()
        .map(OsStr::to_os_string)
        .unwrap_or_else(|| OsString::from("image"));

    // don't use .with_extension() on the stem bc it replaces everything after the last dot
    file_name.push(OUTPUT_SUFFIX);
    file_name.push(".");
    file_name.push(OUTPUT_EXTENSION);

    match input.parent() {
        Some(parent) => parent.join(file_name),
        None => PathBuf::from(file_name),
    }
}

#[test]
fn output_path_with_dots() {
    let file = ImageFile::new(PathBuf::from("scans/Dr. STONE p.01 (2018).png"));

    assert_eq!(
        file.output(),
        Path::new("scans/Dr. STONE p.01 (2018)_mono.png")
    );
}

#[test]
fn output_path_never_matches_input() {
    for input in ["photo.png", "photo", "a/b/photo_mono.png", ".png"] {
        let file = ImageFile::new(PathBuf::from(input));
        assert_ne!(file.input(), file.output(), "{input}");
    }
}

#[test]
fn explicit_output_is_kept() {
    let file = ImageFile::with_output("in.png".into(), "out/result.png".into());
    assert_eq!(file.output(), Path::new("out/result.png"));
}

#[cfg(unix)]
#[test]
fn non_utf8_stems_keep_distinct_outputs() {
    use std::os::unix::ffi::OsStrExt;

    let first = ImageFile::new(PathBuf::from(OsStr::from_bytes(b"dir/\xFFscan.png")));
    let second = ImageFile::new(PathBuf::from(OsStr::from_bytes(b"dir/\xFEscan.png")));

    assert_ne!(first.output(), second.output());
    assert_eq!(
        first.output().as_os_str().as_bytes(),
        b"dir/\xFFscan_mono.png"
    );
}
