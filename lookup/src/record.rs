//! Distribution document loading.
//!
//! The document is read fully into memory before parsing, so the file handle
//! is released on every exit path, including a parse failure.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::LookupError;

/// One entry of a distribution document.
///
/// Only `address` is interpreted, and it must appear exactly once per
/// object; a repeated key is a parse error. Any other fields (`amount`, for
/// instance) are kept verbatim in `extra` and never validated.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Record {
    pub address: String,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// An ordered sequence of [`Record`]s loaded from one file.
///
/// Record order is the file order; it determines lookup indices.
#[derive(Debug, Clone)]
pub struct Document {
    path: PathBuf,
    records: Vec<Record>,
}

impl Document {
    /// Read and parse the document at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`LookupError::FileAccess`] if the file cannot be read and
    /// [`LookupError::Parse`] if its content is not a JSON array of objects
    /// each carrying a string `address`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, LookupError> {
        let path = path.as_ref();
        let bytes = std::fs::read(path).map_err(|source| LookupError::FileAccess {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), bytes = bytes.len(), "read document");
        Self::from_slice(&bytes, path)
    }

    /// Parse a document from an in-memory buffer. `path` is only recorded
    /// for diagnostics.
    ///
    /// # Errors
    ///
    /// Returns [`LookupError::Parse`] on malformed content.
    pub fn from_slice(bytes: &[u8], path: impl AsRef<Path>) -> Result<Self, LookupError> {
        let path = path.as_ref().to_path_buf();
        let records: Vec<Record> = match serde_json::from_slice(bytes) {
            Ok(records) => records,
            Err(source) => return Err(LookupError::Parse { path, source }),
        };
        tracing::debug!(path = %path.display(), records = records.len(), "parsed document");
        Ok(Self { path, records })
    }

    /// Records in file order.
    #[must_use]
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Path the document was loaded from.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}
