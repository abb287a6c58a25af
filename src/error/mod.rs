//! Error types for keyfrag.
//!
//! The scanner itself never fails: malformed content is simply not reported.
//! Everything here belongs to the layers around it (loading inputs, writing
//! output, validating configuration).

use std::fmt;
use std::path::PathBuf;

/// Errors that can occur while loading inputs or rendering findings.
#[derive(Debug)]
pub enum ScanError {
    /// An I/O error occurred while writing output.
    Io(std::io::Error),

    /// An input file could not be opened.
    Open {
        /// The path that failed to open.
        path: PathBuf,
        /// The underlying error.
        source: std::io::Error,
    },

    /// An input file was opened but could not be mapped into memory.
    Map {
        /// The path that failed to map.
        path: PathBuf,
        /// The underlying error.
        source: std::io::Error,
    },

    /// Invalid configuration parameter.
    InvalidConfig {
        /// Description of what was invalid.
        message: &'static str,
    },
}

impl ScanError {
    /// Returns true if the error concerns a single input and the caller may
    /// carry on with the next one.
    ///
    /// Output failures and configuration errors are fatal to a whole run.
    pub fn is_input_error(&self) -> bool {
        matches!(self, ScanError::Open { .. } | ScanError::Map { .. })
    }
}

impl fmt::Display for ScanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScanError::Io(e) => write!(f, "io error: {}", e),
            ScanError::Open { path, source } => {
                write!(f, "open({}): {}", path.display(), source)
            }
            ScanError::Map { path, source } => {
                write!(f, "mmap({}): {}", path.display(), source)
            }
            ScanError::InvalidConfig { message } => {
                write!(f, "invalid config: {}", message)
            }
        }
    }
}

impl std::error::Error for ScanError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ScanError::Io(e) => Some(e),
            ScanError::Open { source, .. } | ScanError::Map { source, .. } => Some(source),
            ScanError::InvalidConfig { .. } => None,
        }
    }
}

impl From<std::io::Error> for ScanError {
    fn from(e: std::io::Error) -> Self {
        ScanError::Io(e)
    }
}
