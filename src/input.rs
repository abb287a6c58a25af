//! Loading inputs into read-only buffers.
//!
//! Files are memory-mapped and handed out as [`Bytes`], so fragments cut
//! from them keep the mapping alive and no file content is copied. Stdin
//! cannot be mapped and is read into memory instead.

use std::ffi::OsStr;
use std::fmt;
use std::fs::File;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use bytes::Bytes;
use log::debug;
use memmap2::Mmap;

use crate::error::ScanError;

/// Where a buffer comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    /// Standard input, spelled `-` on the command line.
    Stdin,
    /// A file on disk.
    Path(PathBuf),
}

impl Input {
    /// Interprets a command-line argument.
    pub fn parse(arg: &OsStr) -> Self {
        if arg == "-" {
            Input::Stdin
        } else {
            Input::Path(PathBuf::from(arg))
        }
    }

    /// Loads the whole input as one buffer.
    pub fn load(&self) -> Result<Bytes, ScanError> {
        match self {
            Input::Stdin => read_all(io::stdin().lock(), Path::new("-")),
            Input::Path(path) => map_file(path),
        }
    }
}

impl fmt::Display for Input {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Input::Stdin => f.write_str("-"),
            Input::Path(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Maps `path` read-only into memory.
///
/// Zero-length files are not mapped; they yield an empty buffer.
///
/// # Errors
///
/// [`ScanError::Open`] if the file cannot be opened, [`ScanError::Map`] if
/// it is a directory or the mapping fails.
pub fn map_file(path: &Path) -> Result<Bytes, ScanError> {
    let map_err = |source: io::Error| ScanError::Map {
        path: path.to_path_buf(),
        source,
    };

    let file = File::open(path).map_err(|source| ScanError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    let metadata = file.metadata().map_err(map_err)?;

    if metadata.is_dir() {
        return Err(map_err(io::Error::new(
            io::ErrorKind::IsADirectory,
            "is a directory",
        )));
    }
    if metadata.len() == 0 {
        debug!("{}: empty, not mapping", path.display());
        return Ok(Bytes::new());
    }

    // SAFETY: the mapping is read-only and the scanner never writes through
    // it. Inputs are evidence images expected to stay unchanged while they
    // are scanned; a concurrent truncation is outside what we can guard.
    #[allow(unsafe_code)]
    let mmap = unsafe { Mmap::map(&file) }.map_err(map_err)?;

    debug!("{}: mapped {} bytes", path.display(), mmap.len());
    Ok(Bytes::from_owner(mmap))
}

/// Reads `reader` to the end into an owned buffer.
///
/// `name` is only used to label a failure.
pub fn read_all<R: Read>(mut reader: R, name: &Path) -> Result<Bytes, ScanError> {
    let mut buf = Vec::new();
    reader
        .read_to_end(&mut buf)
        .map_err(|source| ScanError::Open {
            path: name.to_path_buf(),
            source,
        })?;
    Ok(Bytes::from(buf))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_parse() {
        assert_eq!(Input::parse(OsStr::new("-")), Input::Stdin);
        assert_eq!(
            Input::parse(OsStr::new("disk.img")),
            Input::Path(PathBuf::from("disk.img"))
        );
        assert_eq!(Input::Stdin.to_string(), "-");
    }

    #[test]
    fn test_map_file_contents() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"\x00\nQUJD\n").unwrap();
        file.flush().unwrap();

        let data = map_file(file.path()).unwrap();
        assert_eq!(&data[..], b"\x00\nQUJD\n");
    }

    #[test]
    fn test_map_empty_file() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let data = map_file(file.path()).unwrap();
        assert!(data.is_empty());
    }

    #[test]
    fn test_missing_file_is_open_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = map_file(&dir.path().join("missing")).unwrap_err();
        assert!(matches!(err, ScanError::Open { .. }));
        assert!(err.is_input_error());
    }

    #[test]
    fn test_directory_is_map_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = map_file(dir.path()).unwrap_err();
        assert!(matches!(err, ScanError::Map { .. }));
    }

    #[test]
    fn test_read_all() {
        let data = read_all(&b"\nQUJD\n"[..], Path::new("-")).unwrap();
        assert_eq!(&data[..], b"\nQUJD\n");
    }
}
