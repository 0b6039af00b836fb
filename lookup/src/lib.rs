//! Address Index: locate an account address inside a distribution fixture.
//!
//! A distribution fixture is a JSON array of objects, each carrying at least
//! an `address` string (typically alongside an `amount`). This crate loads
//! such a document and reports the zero-based position of the first entry
//! whose address matches a target, ignoring letter case.
//!
//! # Pipeline
//!
//! ```text
//! Document::load(path)  →  find_address_index(doc, target)  →  render_outcome
//! (read + parse)           (first match, linear)               (one stdout line)
//! ```
//!
//! # Key types
//!
//! - [`Document`] — ordered records, insertion order is significant
//! - [`Record`] — one entry; only `address` is interpreted
//! - [`LookupOutcome`] — `Found { index }` or `NotFound` (sentinel `-1`)
//! - [`LookupError`] — file-access or parse failure

#![forbid(unsafe_code)]

pub mod address;
pub mod config;
pub mod error;
pub mod lookup;
pub mod record;
pub mod report;

pub use error::LookupError;
pub use lookup::{find_address_index, lookup_address_index, LookupOutcome, NOT_FOUND_SENTINEL};
pub use record::{Document, Record};
