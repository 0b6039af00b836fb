//! Typed lookup errors.
//!
//! `LookupError` covers the two ways a lookup can fail before a result is
//! computed. An absent target is not an error: it is reported through
//! [`crate::lookup::LookupOutcome::NotFound`].

use std::path::PathBuf;

use thiserror::Error;

/// Failure to load the distribution document.
#[derive(Debug, Error)]
pub enum LookupError {
    /// The file is missing, unreadable, or permission was denied.
    #[error("cannot read {}: {source}", .path.display())]
    FileAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The content is not a JSON array of objects with a string `address`.
    #[error("cannot parse {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl LookupError {
    /// Path of the document that failed to load.
    #[must_use]
    pub fn path(&self) -> &std::path::Path {
        match self {
            Self::FileAccess { path, .. } | Self::Parse { path, .. } => path,
        }
    }
}
