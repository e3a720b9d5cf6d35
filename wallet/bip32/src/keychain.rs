//! Request facade over the derivation engine.
//!
//! Each method walks its path from the master key, produces the requested
//! output, and lets every intermediate secret drop (and wipe) before it
//! returns.

use crate::{
    base58,
    slip21::{self, SymmetricKey},
    taproot::{self, TweakedPublicKey},
    ChainCode, DerivationPath, ExtendedPrivateKey, ExtendedPublicKey, FingerprintCache, PrivateKeyBytes, PublicKeyBytes, Result,
    SeedSource, Version,
};
use keycore_hashes::{hash160, key_fingerprint};
use log::debug;
use zeroize::Zeroizing;

/// Derives keys, extended public keys, addresses and tweaked keys from one
/// seed source.
pub struct Keychain<S: SeedSource> {
    seed: S,
}

impl<S: SeedSource> Keychain<S> {
    pub fn new(seed: S) -> Self {
        Keychain { seed }
    }

    pub fn master_key(&self) -> Result<ExtendedPrivateKey> {
        ExtendedPrivateKey::new(&self.seed)
    }

    /// Private key and chain code at `path`; the empty path is the master key.
    pub fn derive_private_key(&self, path: &DerivationPath) -> Result<ExtendedPrivateKey> {
        debug!("deriving {path}");
        self.master_key()?.derive_path(path)
    }

    /// Compressed public key and chain code at `path`.
    pub fn public_key_at_path(&self, path: &DerivationPath) -> Result<(PublicKeyBytes, ChainCode)> {
        let key = self.derive_private_key(path)?;
        Ok((key.public_key()?, *key.chain_code()))
    }

    pub fn master_fingerprint(&self) -> Result<u32> {
        Ok(key_fingerprint(&self.master_key()?.public_key()?))
    }

    /// [`Keychain::master_fingerprint`] through a caller-owned cache.
    pub fn cached_master_fingerprint(&self, cache: &mut FingerprintCache) -> Result<u32> {
        cache.master_fingerprint(&self.seed)
    }

    /// Extended public key at `path` under `version`.
    pub fn extended_pubkey_at_path(&self, path: &DerivationPath, version: Version) -> Result<ExtendedPublicKey> {
        self.derive_private_key(path)?.to_extended_public_key(version)
    }

    /// Write the base58check text of the extended public key at `path` into
    /// `out` and return its length.
    ///
    /// An `out` of [`MAX_SERIALIZED_PUBKEY_LENGTH`](crate::MAX_SERIALIZED_PUBKEY_LENGTH)
    /// bytes always suffices.
    pub fn write_extended_pubkey_at_path(&self, path: &DerivationPath, version: Version, out: &mut [u8]) -> Result<usize> {
        self.extended_pubkey_at_path(path, version)?.write_base58(out)
    }

    pub fn extended_pubkey_string_at_path(&self, path: &DerivationPath, version: Version) -> Result<String> {
        Ok(self.extended_pubkey_at_path(path, version)?.to_string())
    }

    /// Legacy address `base58check(version || hash160(pubkey))` at `path`.
    pub fn legacy_address_at_path(&self, path: &DerivationPath, version: u32, out: &mut [u8]) -> Result<usize> {
        let (public_key, _) = self.public_key_at_path(path)?;
        base58::encode_address(&hash160(&public_key), version, out)
    }

    /// BIP86 key-path output key for the key at `path`.
    pub fn taproot_output_key_at_path(&self, path: &DerivationPath) -> Result<TweakedPublicKey> {
        let (public_key, _) = self.public_key_at_path(path)?;
        taproot::tweak_pubkey(public_key[1..].try_into()?)
    }

    /// Taproot-tweaked private key at `path`.
    pub fn tweaked_private_key_at_path(&self, path: &DerivationPath) -> Result<Zeroizing<PrivateKeyBytes>> {
        let mut private_key = self.derive_private_key(path)?.to_private_key();
        taproot::tweak_seckey(&mut private_key)?;
        Ok(private_key)
    }

    /// SLIP-0021 key under `labels`, each starting with `0x00`.
    pub fn symmetric_key(&self, labels: &[&[u8]]) -> Result<SymmetricKey> {
        slip21::derive_symmetric_key_path(&self.seed, labels)
    }
}

impl<S: SeedSource> core::fmt::Debug for Keychain<S> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Keychain").finish_non_exhaustive()
    }
}
