use hmac::Hmac;
use sha2::Sha512;

/// Size of a private key, a chain code and an x-only public key.
pub const KEY_SIZE: usize = 32;

/// Size of a SEC1 uncompressed public key (`0x04 || x || y`).
pub const UNCOMPRESSED_KEY_SIZE: usize = 65;

pub type HmacSha512 = Hmac<Sha512>;

/// Chain code: 32 bytes of entropy keying the HMAC of child derivation.
pub type ChainCode = [u8; KEY_SIZE];

/// Derivation depth, 0 at the master key.
pub type Depth = u8;

/// First four bytes of `hash160` of a compressed public key.
pub type KeyFingerprint = [u8; 4];

/// Big-endian scalar bytes of a secp256k1 private key.
pub type PrivateKeyBytes = [u8; KEY_SIZE];

/// SEC1 compressed public key bytes.
pub type PublicKeyBytes = [u8; KEY_SIZE + 1];

pub type UncompressedPublicKeyBytes = [u8; UNCOMPRESSED_KEY_SIZE];

/// BIP340 x-only public key bytes.
pub type XOnlyPublicKeyBytes = [u8; KEY_SIZE];

/// Four-byte version prefix of a serialized extended key.
pub type Version = u32;
