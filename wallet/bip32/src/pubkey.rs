//! SEC1 compressed and uncompressed public key conversion.
//!
//! Decompression recovers `y` from `y² = x³ + 7` via the curve library's
//! point parser and keeps the root whose parity matches the prefix byte.

use crate::{Error, PublicKeyBytes, Result, UncompressedPublicKeyBytes, KEY_SIZE};
use secp256k1::PublicKey;

/// SEC1 tag of an uncompressed key.
const UNCOMPRESSED_TAG: u8 = 0x04;

/// Parse a 65-byte key, accepting only the `0x04` tag. The curve library
/// would also take the hybrid `0x06`/`0x07` forms.
fn parse_uncompressed(uncompressed: &UncompressedPublicKeyBytes) -> Result<PublicKey> {
    if uncompressed[0] != UNCOMPRESSED_TAG {
        return Err(Error::InvalidKeyMaterial);
    }
    Ok(PublicKey::from_slice(uncompressed)?)
}

pub fn compress(uncompressed: &UncompressedPublicKeyBytes) -> Result<PublicKeyBytes> {
    Ok(parse_uncompressed(uncompressed)?.serialize())
}

pub fn decompress(compressed: &PublicKeyBytes) -> Result<UncompressedPublicKeyBytes> {
    Ok(PublicKey::from_slice(compressed)?.serialize_uncompressed())
}

/// Compress the 65-byte key held in `buffer`; the result occupies the first
/// 33 bytes.
pub fn compress_in_place(buffer: &mut UncompressedPublicKeyBytes) -> Result<()> {
    let point = parse_uncompressed(buffer)?;
    buffer[..KEY_SIZE + 1].copy_from_slice(&point.serialize());
    Ok(())
}

/// Decompress the 33-byte key held in the first bytes of `buffer`.
pub fn decompress_in_place(buffer: &mut UncompressedPublicKeyBytes) -> Result<()> {
    let point = PublicKey::from_slice(&buffer[..KEY_SIZE + 1])?;
    *buffer = point.serialize_uncompressed();
    Ok(())
}
