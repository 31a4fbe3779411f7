use std::ffi::OsStr;
use std::path::{Path, PathBuf};

pub const SUFFIX: &str = ".disabled";

/// A file whose name ends in [`SUFFIX`], paired with the path it should be renamed to.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Candidate {
    pub source: PathBuf,
    pub target: PathBuf,
}

impl Candidate {
    /// Matches on the raw name bytes, so names that are not valid UTF-8 still qualify.
    pub fn from_path(path: &Path) -> Option<Self> {
        let name = path.file_name()?;
        let stripped = name
            .as_encoded_bytes()
            .strip_suffix(SUFFIX.as_bytes())
            .filter(|rest| !rest.is_empty())?;
        // SAFETY: `stripped` ends right before a non-empty UTF-8 substring of `name`.
        let stripped = unsafe { OsStr::from_encoded_bytes_unchecked(stripped) };
        Some(Self {
            source: path.to_owned(),
            target: path.with_file_name(stripped),
        })
    }
}
