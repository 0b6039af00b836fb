//! The single human-readable result line.

use crate::lookup::LookupOutcome;

/// Render the result line for `target`, exactly as the caller spelled it.
#[must_use]
pub fn render_outcome(target: &str, outcome: LookupOutcome) -> String {
    match outcome {
        LookupOutcome::Found { index } => format!("The index of address {target} is: {index}"),
        LookupOutcome::NotFound => format!("Address {target} not found in the JSON file."),
    }
}
