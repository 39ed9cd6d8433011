//! Base58 and Base58Check encodings.

use crate::hash::hash256;
use alloc::{string::String, vec::Vec};
use num_bigint::BigUint;

/// Base58 alphabet: alphanumerics without `0`, `O`, `I` and `l`.
pub const BASE58_ALPHABET: &[u8; 58] =
    b"123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";

/// Encode bytes as Base58.
///
/// Each leading zero byte becomes a leading `'1'`; the remaining bytes are
/// read as a big endian integer and written in base 58.
pub fn encode_base58(data: &[u8]) -> String {
    let zeros = data.iter().take_while(|&&byte| byte == 0).count();
    let rest = &data[zeros..];

    let mut out = String::with_capacity(zeros + rest.len() * 138 / 100 + 1);
    out.extend(core::iter::repeat_n(char::from(BASE58_ALPHABET[0]), zeros));

    // An all-zero input has no digits beyond the prefix
    if !rest.is_empty() {
        let digits = BigUint::from_bytes_be(rest).to_radix_be(58);
        out.extend(digits.iter().map(|&d| char::from(BASE58_ALPHABET[usize::from(d)])));
    }

    out
}

/// Encode bytes as Base58Check: Base58 of `data ‖ hash256(data)[..4]`.
pub fn encode_base58_check(data: &[u8]) -> String {
    let mut payload = Vec::with_capacity(data.len() + 4);
    payload.extend_from_slice(data);
    payload.extend_from_slice(&hash256(data)[..4]);
    encode_base58(&payload)
}
