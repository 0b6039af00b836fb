//! First-match address lookup.
//!
//! [`find_address_index`] is a single forward pass over the document that
//! stops at the first record whose address matches the target. The target
//! is folded once; each record address is folded as it is visited.

use std::path::Path;

use crate::address::fold_case;
use crate::error::LookupError;
use crate::record::Document;

/// Reserved index value meaning "not found".
pub const NOT_FOUND_SENTINEL: i64 = -1;

/// Result of a completed lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupOutcome {
    /// Zero-based position of the first matching record.
    Found { index: usize },
    /// No record matched.
    NotFound,
}

impl LookupOutcome {
    /// The matching position, or `None` for a miss.
    #[must_use]
    pub fn index(self) -> Option<usize> {
        match self {
            Self::Found { index } => Some(index),
            Self::NotFound => None,
        }
    }

    /// Whether some record matched.
    #[must_use]
    pub fn is_found(self) -> bool {
        matches!(self, Self::Found { .. })
    }

    /// The index as a signed value, with [`NOT_FOUND_SENTINEL`] for a miss.
    #[must_use]
    pub fn sentinel(self) -> i64 {
        match self {
            // A Vec cannot hold more than isize::MAX elements.
            Self::Found { index } => i64::try_from(index).unwrap_or(i64::MAX),
            Self::NotFound => NOT_FOUND_SENTINEL,
        }
    }
}

/// Position of the first record in `document` whose address equals `target`,
/// ignoring case.
#[must_use]
pub fn find_address_index(document: &Document, target: &str) -> LookupOutcome {
    let folded_target = fold_case(target);
    let position = document
        .records()
        .iter()
        .position(|record| {
            record.address == target || fold_case(&record.address) == folded_target
        });

    match position {
        Some(index) => {
            tracing::debug!(address = target, index, "address matched");
            LookupOutcome::Found { index }
        }
        None => {
            tracing::debug!(
                address = target,
                scanned = document.len(),
                "address not present"
            );
            LookupOutcome::NotFound
        }
    }
}

/// Load the document at `path` and look up `target` in it.
///
/// # Errors
///
/// Returns [`LookupError`] if the document cannot be read or parsed.
pub fn lookup_address_index(
    path: impl AsRef<Path>,
    target: &str,
) -> Result<LookupOutcome, LookupError> {
    let document = Document::load(path)?;
    Ok(find_address_index(&document, target))
}
