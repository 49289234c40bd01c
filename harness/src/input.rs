//! Input loading.
//!
//! Reading and parsing are separate steps so the text report can print the
//! byte length before a parse failure aborts the run.

use std::io;
use std::path::{Path, PathBuf};

use hashprobe_kernel::document::{Document, DocumentError};
use thiserror::Error;

/// Fatal input failure. Nothing downstream runs after one of these.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The file could not be read.
    #[error("cannot read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// The bytes are not a UTF-8 JSON document.
    #[error("{}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: DocumentError,
    },
}

/// Read the whole file at `path`.
///
/// # Errors
///
/// Returns [`LoadError::Read`] if the file cannot be opened or read.
pub fn read_input(path: &Path) -> Result<Vec<u8>, LoadError> {
    std::fs::read(path).map_err(|source| LoadError::Read {
        path: path.to_path_buf(),
        source,
    })
}

/// Parse bytes previously read from `path`.
///
/// # Errors
///
/// Returns [`LoadError::Parse`] if the bytes are not valid UTF-8 JSON.
pub fn parse_input(path: &Path, raw: Vec<u8>) -> Result<Document, LoadError> {
    Document::parse(raw).map_err(|source| LoadError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// [`read_input`] followed by [`parse_input`].
///
/// # Errors
///
/// Propagates either step's [`LoadError`].
pub fn load_document(path: &Path) -> Result<Document, LoadError> {
    let raw = read_input(path)?;
    parse_input(path, raw)
}
