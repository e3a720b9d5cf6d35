//!
//! Hashing primitives shared by the key derivation engine: `hash160`,
//! double-SHA256 checksums, BIP32 key fingerprints and BIP340 tagged hashes.
//!

mod hashers;
mod tagged;

use ripemd::Ripemd160;
use sha2::{Digest, Sha256};

pub use hashers::HasherExt;
pub use tagged::{tagged_hash, TaggedHash};

pub const SHA256_SIZE: usize = 32;
pub const HASH160_SIZE: usize = 20;
pub const CHECKSUM_SIZE: usize = 4;

/// Size of a SEC1 compressed public key.
pub const COMPRESSED_KEY_SIZE: usize = 33;

pub fn sha256(data: &[u8]) -> [u8; SHA256_SIZE] {
    Sha256::digest(data).into()
}

/// `SHA256(SHA256(data))`
pub fn sha256d(data: &[u8]) -> [u8; SHA256_SIZE] {
    Sha256::digest(Sha256::digest(data)).into()
}

pub fn ripemd160(data: &[u8]) -> [u8; HASH160_SIZE] {
    Ripemd160::digest(data).into()
}

/// `RIPEMD160(SHA256(data))`
pub fn hash160(data: &[u8]) -> [u8; HASH160_SIZE] {
    Ripemd160::digest(Sha256::digest(data)).into()
}

/// First four bytes of `SHA256(SHA256(data))`, as appended by base58check.
pub fn checksum(data: &[u8]) -> [u8; CHECKSUM_SIZE] {
    let hash = sha256d(data);
    let mut out = [0u8; CHECKSUM_SIZE];
    out.copy_from_slice(&hash[..CHECKSUM_SIZE]);
    out
}

/// BIP32 fingerprint of a compressed public key: the first four bytes of its
/// `hash160`, read as a big-endian integer.
pub fn key_fingerprint(compressed_key: &[u8; COMPRESSED_KEY_SIZE]) -> u32 {
    let hash = hash160(compressed_key);
    u32::from_be_bytes([hash[0], hash[1], hash[2], hash[3]])
}
