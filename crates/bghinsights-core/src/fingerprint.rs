//! Deterministic document identifiers.
//!
//! The id is the first 15 hex digits (60 bits) of the SHA-256 digest of the
//! normalized text. It identifies documents within a corpus; it is not a
//! security primitive.

use sha2::{Digest, Sha256};

const ID_HEX_DIGITS: usize = 15;

/// Content fingerprint of normalized document text.
pub fn document_id(text: &str) -> u64 {
    let digest = Sha256::digest(text.as_bytes());
    let hex = format!("{digest:x}");
    // 15 hex digits always fit in a u64.
    u64::from_str_radix(&hex[..ID_HEX_DIGITS], 16).unwrap_or_default()
}

/// Last path component of a filename, accepting `/` and `\` separators.
///
/// Returns `None` for names that are empty or end in a separator.
pub fn base_name(filename: &str) -> Option<String> {
    let base = filename
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or(filename)
        .trim();
    if base.is_empty() {
        None
    } else {
        Some(base.to_string())
    }
}
