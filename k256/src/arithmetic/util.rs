//! Helper functions.

use crate::FieldBytes;
use num_bigint::BigUint;

/// Serialize an integer below 2²⁵⁶ as 32 big endian bytes, left-padded with
/// zeroes.
pub(crate) fn uint_to_field_bytes(n: &BigUint) -> FieldBytes {
    let bytes = n.to_bytes_be();
    debug_assert!(bytes.len() <= 32);

    let mut out = FieldBytes::default();
    out[32 - bytes.len()..].copy_from_slice(&bytes);
    out
}
