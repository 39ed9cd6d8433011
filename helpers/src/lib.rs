#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![doc = include_str!("../README.md")]
#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms, unused_qualifications)]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

mod base58;
mod bytes;
mod error;
mod hash;

pub use crate::{
    base58::{BASE58_ALPHABET, encode_base58, encode_base58_check},
    bytes::{ByteOrder, bytes_to_int, int_to_bytes, int_to_little_endian, little_endian_to_int},
    error::{Error, Result},
    hash::{hash160, hash256},
};
pub use num_bigint::BigUint;
