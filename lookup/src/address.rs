//! Address comparison and account-address shape checks.
//!
//! Comparison folds both sides to lower case with Unicode rules
//! ([`str::to_lowercase`]). Folding is locale-independent.

use thiserror::Error;

/// Byte length of an Ethereum account address.
pub const ACCOUNT_ADDRESS_LEN: usize = 20;

/// Fold an address to the common case used for comparison.
#[must_use]
pub fn fold_case(address: &str) -> String {
    address.to_lowercase()
}

/// Case-insensitive address equality.
#[must_use]
pub fn addresses_match(a: &str, b: &str) -> bool {
    a == b || fold_case(a) == fold_case(b)
}

/// A target rejected by [`validate_account_address`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AddressFormatError {
    #[error("address {address:?} must start with 0x")]
    MissingPrefix { address: String },

    #[error("address {address:?} has {found} hex digits, expected {expected}")]
    WrongLength {
        address: String,
        found: usize,
        expected: usize,
    },

    #[error("address {address:?} is not hex: {detail}")]
    NotHex { address: String, detail: String },
}

/// Check that `address` is `0x` followed by 40 hex digits.
///
/// Letter case is not inspected; mixed-case checksum encodings are accepted
/// without verifying the checksum.
///
/// # Errors
///
/// Returns [`AddressFormatError`] describing the first violation found.
pub fn validate_account_address(address: &str) -> Result<(), AddressFormatError> {
    let digits = address
        .strip_prefix("0x")
        .or_else(|| address.strip_prefix("0X"))
        .ok_or_else(|| AddressFormatError::MissingPrefix {
            address: address.to_string(),
        })?;

    let expected = ACCOUNT_ADDRESS_LEN * 2;
    if digits.len() != expected {
        return Err(AddressFormatError::WrongLength {
            address: address.to_string(),
            found: digits.len(),
            expected,
        });
    }

    let mut bytes = [0u8; ACCOUNT_ADDRESS_LEN];
    hex::decode_to_slice(digits, &mut bytes).map_err(|e| AddressFormatError::NotHex {
        address: address.to_string(),
        detail: e.to_string(),
    })
}
