//! Shared helpers for address-index benchmark suites.

use address_index::record::Document;

/// Deterministic 20-byte account address for position `i`.
#[must_use]
pub fn synthetic_address(i: usize) -> String {
    let mut bytes = [0u8; 20];
    bytes[12..].copy_from_slice(&(i as u64).to_be_bytes());
    // Mixed case so every comparison has to fold.
    let digits: String = hex::encode(bytes)
        .chars()
        .enumerate()
        .map(|(k, c)| if k % 2 == 0 { c.to_ascii_uppercase() } else { c })
        .collect();
    format!("0x{digits}")
}

/// JSON bytes of a distribution with `n` entries, shaped like the audit
/// fixtures (`address` + `amount`).
///
/// # Panics
///
/// Panics if serialization fails. Benchmark setup failures are fatal.
#[must_use]
pub fn synthetic_distribution_json(n: usize) -> Vec<u8> {
    let entries: Vec<serde_json::Value> = (0..n)
        .map(|i| {
            serde_json::json!({
                "address": synthetic_address(i),
                "amount": (i as u64 * 1_000_003).to_string(),
            })
        })
        .collect();
    serde_json::to_vec(&entries).expect("serialize synthetic distribution")
}

/// Parsed document with `n` synthetic entries.
///
/// # Panics
///
/// Panics if the synthetic JSON fails to parse.
#[must_use]
pub fn synthetic_document(n: usize) -> Document {
    Document::from_slice(&synthetic_distribution_json(n), "synthetic.json")
        .expect("parse synthetic distribution")
}
