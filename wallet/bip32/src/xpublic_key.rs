//! Extended public keys and public child derivation (CKDpub).

use crate::{
    base58::{self, MAX_ENCODE_INPUT_SIZE},
    mac::hmac_sha512,
    xkey::{read_layout, write_layout, BYTE_SIZE, CHECKED_SIZE, MAX_SERIALIZED_PUBKEY_LENGTH},
    ChildNumber, DerivationPath, Error, ExtendedKeyAttrs, PublicKeyBytes, Result, Version, KEY_SIZE,
};
use core::{
    fmt::{self, Display},
    str::{self, FromStr},
};
use keycore_hashes::{checksum, key_fingerprint};
use secp256k1::{PublicKey, Scalar, SECP256K1};

/// Serialized extended public key: version, attributes and a SEC1
/// compressed public key.
#[derive(Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
pub struct ExtendedPublicKey {
    /// Version prefix (`xpub`, `tpub`, or any SLIP-0132 value).
    pub version: Version,

    /// Extended key attributes.
    pub attrs: ExtendedKeyAttrs,

    /// Compressed public key.
    pub public_key: PublicKeyBytes,
}

impl ExtendedPublicKey {
    pub fn attrs(&self) -> &ExtendedKeyAttrs {
        &self.attrs
    }

    pub fn public_key(&self) -> &PublicKeyBytes {
        &self.public_key
    }

    /// Fingerprint of this key, as stored in its children.
    pub fn fingerprint(&self) -> u32 {
        key_fingerprint(&self.public_key)
    }

    /// Replace this key with its non-hardened child.
    ///
    /// Every parent field is read before the first write, and nothing is
    /// written unless the whole step succeeds.
    pub fn ckd_pub(&mut self, child_number: ChildNumber) -> Result<()> {
        if child_number.is_hardened() {
            return Err(Error::InvalidArgument("hardened derivation requires a private key"));
        }

        let parent_key = self.public_key;
        let parent_chain_code = self.attrs.chain_code;
        let depth = self.attrs.depth.checked_add(1).ok_or(Error::DEPTH)?;

        let node = hmac_sha512(&parent_chain_code, &[&parent_key[..], &child_number.to_bytes()[..]])?;
        let (tweak, chain_code) = node.split_at(KEY_SIZE);
        let tweak = Scalar::from_be_bytes(tweak.try_into()?)?;

        // t·G + P
        let child_key = PublicKey::from_slice(&parent_key)?.add_exp_tweak(SECP256K1, &tweak)?;

        let attrs = ExtendedKeyAttrs {
            depth,
            parent_fingerprint: key_fingerprint(&parent_key).to_be_bytes(),
            child_number,
            chain_code: chain_code.try_into()?,
        };

        self.attrs = attrs;
        self.public_key = child_key.serialize();
        Ok(())
    }

    /// Derive a non-hardened child into a new key.
    pub fn derive_child(&self, child_number: ChildNumber) -> Result<Self> {
        let mut child = self.clone();
        child.ckd_pub(child_number)?;
        Ok(child)
    }

    pub fn derive_path(self, path: &DerivationPath) -> Result<Self> {
        path.iter().try_fold(self, |key, child_number| key.derive_child(child_number))
    }

    /// Serialize into the 78-byte layout.
    pub fn to_bytes(&self) -> [u8; BYTE_SIZE] {
        write_layout(self.version, &self.attrs, &self.public_key)
    }

    /// The 78-byte layout followed by its checksum.
    pub fn to_checked_bytes(&self) -> [u8; CHECKED_SIZE] {
        let payload = self.to_bytes();
        let mut bytes = [0u8; CHECKED_SIZE];
        bytes[..BYTE_SIZE].copy_from_slice(&payload);
        bytes[BYTE_SIZE..].copy_from_slice(&checksum(&payload));
        bytes
    }

    /// Parse the 78-byte layout, checking that the key is a curve point.
    pub fn from_bytes(bytes: &[u8; BYTE_SIZE]) -> Result<Self> {
        let (version, attrs, public_key) = read_layout(bytes)?;
        PublicKey::from_slice(&public_key)?;
        Ok(ExtendedPublicKey { version, attrs, public_key })
    }

    /// Write the base58check text of this key into `out`, returning its
    /// length. No terminator is written.
    pub fn write_base58(&self, out: &mut [u8]) -> Result<usize> {
        base58::encode_check(&self.to_bytes(), out)
    }
}

impl Display for ExtendedPublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut buf = [0u8; MAX_SERIALIZED_PUBKEY_LENGTH];
        let len = self.write_base58(&mut buf).map_err(|_| fmt::Error)?;
        str::from_utf8(&buf[..len]).map_err(|_| fmt::Error).and_then(|base58| f.write_str(base58))
    }
}

impl FromStr for ExtendedPublicKey {
    type Err = Error;

    fn from_str(base58: &str) -> Result<Self> {
        let mut bytes = [0u8; MAX_ENCODE_INPUT_SIZE];
        let len = base58::decode_check(base58, &mut bytes)?;
        let payload: &[u8; BYTE_SIZE] =
            bytes.get(..len).and_then(|bytes| bytes.try_into().ok()).ok_or(Error::InvalidArgument("extended key length"))?;
        Self::from_bytes(payload)
    }
}
