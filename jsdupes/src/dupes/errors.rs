//! Scan error type.

use std::path::PathBuf;

/// Fatal scan failures. Expected no-match outcomes (unmatched delimiters,
/// files without units) are represented as empty results, not errors.
#[derive(Debug)]
pub enum ScanError {
    /// The scan root does not exist or is not a directory.
    InvalidRoot(PathBuf),
    /// Threshold outside the 0-100 percent range.
    InvalidThreshold(u8),
    /// IO error
    Io(std::io::Error),
}

impl std::fmt::Display for ScanError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidRoot(path) => {
                write!(f, "scan root {} does not exist", path.display())
            }
            Self::InvalidThreshold(value) => {
                write!(f, "similarity threshold {value} is out of range (0-100)")
            }
            Self::Io(e) => write!(f, "IO error: {e}"),
        }
    }
}

impl std::error::Error for ScanError {}

impl From<std::io::Error> for ScanError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
