//! Fixed 78-byte layout shared by serialized extended keys.

use crate::{ChildNumber, ExtendedKeyAttrs, PublicKeyBytes, Result, Version};
use keycore_hashes::CHECKSUM_SIZE;

/// Size of a serialized extended key.
pub(crate) const BYTE_SIZE: usize = 78;

/// Serialized extended key followed by its 4-byte checksum.
pub(crate) const CHECKED_SIZE: usize = BYTE_SIZE + CHECKSUM_SIZE;

/// Maximum length of a base58check-encoded extended public key, with room
/// for a terminator.
///
/// Encoded keys are 111 characters.
pub const MAX_SERIALIZED_PUBKEY_LENGTH: usize = 112;

/// Pack `version || depth || parent fingerprint || child number || chain code || key`.
pub(crate) fn write_layout(version: Version, attrs: &ExtendedKeyAttrs, key_bytes: &PublicKeyBytes) -> [u8; BYTE_SIZE] {
    let mut bytes = [0u8; BYTE_SIZE];
    bytes[..4].copy_from_slice(&version.to_be_bytes());
    bytes[4] = attrs.depth;
    bytes[5..9].copy_from_slice(&attrs.parent_fingerprint);
    bytes[9..13].copy_from_slice(&attrs.child_number.to_bytes());
    bytes[13..45].copy_from_slice(&attrs.chain_code);
    bytes[45..78].copy_from_slice(key_bytes);
    bytes
}

/// Inverse of [`write_layout`].
pub(crate) fn read_layout(bytes: &[u8; BYTE_SIZE]) -> Result<(Version, ExtendedKeyAttrs, PublicKeyBytes)> {
    let version = Version::from_be_bytes(bytes[..4].try_into()?);
    let attrs = ExtendedKeyAttrs {
        depth: bytes[4],
        parent_fingerprint: bytes[5..9].try_into()?,
        child_number: ChildNumber::from_bytes(bytes[9..13].try_into()?),
        chain_code: bytes[13..45].try_into()?,
    };
    let key_bytes = bytes[45..78].try_into()?;
    Ok((version, attrs, key_bytes))
}
