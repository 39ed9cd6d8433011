//! Fixed-width conversions between integers and byte strings.

use crate::{Error, Result};
use alloc::vec::Vec;
use num_bigint::BigUint;
use num_traits::Zero;

/// Byte order of an encoded integer.
#[derive(Copy, Clone, Debug, Default, Eq, Hash, PartialEq)]
pub enum ByteOrder {
    /// Most significant byte first.
    #[default]
    BigEndian,

    /// Least significant byte first.
    LittleEndian,
}

/// Encode `n` as exactly `length` bytes in the given byte order, padding
/// with zeroes.
///
/// Returns [`Error::IntegerOverflow`] if `n` needs more than `length` bytes.
pub fn int_to_bytes(n: &BigUint, length: usize, order: ByteOrder) -> Result<Vec<u8>> {
    let mut bytes = if n.is_zero() {
        Vec::new()
    } else {
        n.to_bytes_le()
    };

    if bytes.len() > length {
        return Err(Error::IntegerOverflow { length });
    }

    bytes.resize(length, 0);

    if order == ByteOrder::BigEndian {
        bytes.reverse();
    }

    Ok(bytes)
}

/// Decode an unsigned integer from bytes in the given byte order.
pub fn bytes_to_int(bytes: &[u8], order: ByteOrder) -> BigUint {
    match order {
        ByteOrder::BigEndian => BigUint::from_bytes_be(bytes),
        ByteOrder::LittleEndian => BigUint::from_bytes_le(bytes),
    }
}

/// Decode a little endian unsigned integer.
pub fn little_endian_to_int(bytes: &[u8]) -> BigUint {
    bytes_to_int(bytes, ByteOrder::LittleEndian)
}

/// Encode `n` as exactly `length` little endian bytes.
pub fn int_to_little_endian(n: &BigUint, length: usize) -> Result<Vec<u8>> {
    int_to_bytes(n, length, ByteOrder::LittleEndian)
}
