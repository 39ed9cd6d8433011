//! Composite digests.

use ripemd::Ripemd160;
use sha2::{Digest, Sha256};

/// SHA-256 applied twice.
pub fn hash256(data: &[u8]) -> [u8; 32] {
    let mut out = [0u8; 32];
    out.copy_from_slice(&Sha256::digest(Sha256::digest(data)));
    out
}

/// SHA-256 followed by RIPEMD-160.
pub fn hash160(data: &[u8]) -> [u8; 20] {
    let mut out = [0u8; 20];
    out.copy_from_slice(&Ripemd160::digest(Sha256::digest(data)));
    out
}
