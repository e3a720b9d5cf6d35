//! Path Derivation Engine: private BIP32 derivation.

use crate::{
    mac::hmac_sha512, seed::BIP32_SEED_DOMAIN, ChainCode, ChildNumber, DerivationPath, Depth, Error, ExtendedKeyAttrs,
    ExtendedPublicKey, PrivateKeyBytes, PublicKeyBytes, Result, SeedSource, Version, KEY_SIZE,
};
use keycore_hashes::key_fingerprint;
use log::trace;
use secp256k1::{PublicKey, Scalar, SecretKey, SECP256K1};
use std::fmt::{self, Debug};
use subtle::{Choice, ConstantTimeEq};
use zeroize::{Zeroize, Zeroizing};

/// Private key and chain code reached by walking a path from the master key.
///
/// Exclusively owned by the call that produced it and wiped on drop. It is
/// deliberately not `Clone`.
pub struct ExtendedPrivateKey {
    /// Derived private key
    private_key: Zeroizing<PrivateKeyBytes>,

    /// Extended key attributes.
    attrs: ExtendedKeyAttrs,
}

impl ExtendedPrivateKey {
    /// Maximum derivation depth.
    pub const MAX_DEPTH: Depth = u8::MAX;

    /// Create the root extended key from the device seed.
    pub fn new<S>(seed: &S) -> Result<Self>
    where
        S: SeedSource + ?Sized,
    {
        let node = seed.seed_node(BIP32_SEED_DOMAIN)?;
        Self::from_node(&node)
    }

    /// Root extended key from a 64-byte `IL || IR` master node.
    pub fn from_node(node: &[u8; 64]) -> Result<Self> {
        let (secret, chain_code) = node.split_at(KEY_SIZE);

        // IL must lie in [1, n)
        let mut secret_key = SecretKey::from_slice(secret).map_err(|_| Error::InvalidKeyMaterial)?;
        secret_key.non_secure_erase();

        let mut private_key = Zeroizing::new([0u8; KEY_SIZE]);
        private_key.copy_from_slice(secret);
        let attrs = ExtendedKeyAttrs { chain_code: chain_code.try_into()?, ..Default::default() };

        Ok(ExtendedPrivateKey { private_key, attrs })
    }

    /// Replace this key with its child at `child_number`.
    ///
    /// On failure the key is left as it was; dropping it still wipes it.
    pub fn derive_child(&mut self, child_number: ChildNumber) -> Result<()> {
        let depth = self.attrs.depth.checked_add(1).ok_or(Error::DEPTH)?;
        let public_key = self.public_key()?;
        let index = child_number.to_bytes();

        let node = if child_number.is_hardened() {
            hmac_sha512(&self.attrs.chain_code, &[&[0u8][..], &self.private_key[..], &index[..]])?
        } else {
            hmac_sha512(&self.attrs.chain_code, &[&public_key[..], &index[..]])?
        };
        let (tweak, chain_code) = node.split_at(KEY_SIZE);

        // BIP32 would retry with the next index when IL >= n or the child key
        // is zero (probability below 2^-127). Here both are fatal to the call.
        tweak_add(&mut self.private_key, tweak.try_into()?)?;

        self.attrs = ExtendedKeyAttrs {
            depth,
            parent_fingerprint: key_fingerprint(&public_key).to_be_bytes(),
            child_number,
            chain_code: chain_code.try_into()?,
        };

        Ok(())
    }

    /// Walk `path` from this key, consuming it.
    pub fn derive_path(mut self, path: &DerivationPath) -> Result<Self> {
        if path.len() > usize::from(Self::MAX_DEPTH - self.attrs.depth) {
            return Err(Error::DEPTH);
        }
        for child_number in path.iter() {
            self.derive_child(child_number)?;
        }
        trace!("derived private key at depth {}", self.attrs.depth);
        Ok(self)
    }

    /// Borrow the derived private key value.
    pub fn private_key(&self) -> &PrivateKeyBytes {
        &self.private_key
    }

    /// Copy of the private key in its own wiped-on-drop buffer.
    pub fn to_private_key(&self) -> Zeroizing<PrivateKeyBytes> {
        Zeroizing::new(*self.private_key)
    }

    pub fn chain_code(&self) -> &ChainCode {
        &self.attrs.chain_code
    }

    /// Get attributes for this key such as depth, parent fingerprint,
    /// child number, and chain code.
    pub fn attrs(&self) -> &ExtendedKeyAttrs {
        &self.attrs
    }

    /// Compressed public key `d·G`.
    pub fn public_key(&self) -> Result<PublicKeyBytes> {
        let mut secret_key = SecretKey::from_slice(&self.private_key[..])?;
        let public_key = PublicKey::from_secret_key(SECP256K1, &secret_key);
        secret_key.non_secure_erase();
        Ok(public_key.serialize())
    }

    /// Serialize the public half of this key under `version`.
    pub fn to_extended_public_key(&self, version: Version) -> Result<ExtendedPublicKey> {
        Ok(ExtendedPublicKey { version, attrs: self.attrs.clone(), public_key: self.public_key()? })
    }
}

/// `private_key = (private_key + tweak) mod n`.
///
/// Fails with [`Error::InvalidKeyMaterial`] when `tweak >= n` or the sum is
/// zero; `private_key` is only written on success.
pub(crate) fn tweak_add(private_key: &mut PrivateKeyBytes, tweak: &[u8; KEY_SIZE]) -> Result<()> {
    let mut parent = SecretKey::from_slice(&private_key[..])?;
    let result = {
        // `Scalar` has no erase method, so this copy of the tweak stays on the
        // stack until overwritten. Everything else here is wiped.
        let scalar = Scalar::from_be_bytes(*tweak);
        scalar.map_err(Error::from).and_then(|scalar| Ok(parent.add_tweak(&scalar)?))
    };
    parent.non_secure_erase();

    let mut child = result?;
    let bytes = Zeroizing::new(child.secret_bytes());
    child.non_secure_erase();
    private_key.copy_from_slice(&bytes[..]);

    Ok(())
}

impl Drop for ExtendedPrivateKey {
    fn drop(&mut self) {
        self.attrs.zeroize();
    }
}

impl ConstantTimeEq for ExtendedPrivateKey {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.private_key[..].ct_eq(&other.private_key[..])
            & self.attrs.depth.ct_eq(&other.attrs.depth)
            & self.attrs.parent_fingerprint[..].ct_eq(&other.attrs.parent_fingerprint[..])
            & self.attrs.child_number.0.ct_eq(&other.attrs.child_number.0)
            & self.attrs.chain_code[..].ct_eq(&other.attrs.chain_code[..])
    }
}

/// NOTE: uses [`ConstantTimeEq`] internally
impl Eq for ExtendedPrivateKey {}

/// NOTE: uses [`ConstantTimeEq`] internally
impl PartialEq for ExtendedPrivateKey {
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).into()
    }
}

impl Debug for ExtendedPrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExtendedPrivateKey")
            .field("private_key", &"...")
            .field("depth", &self.attrs.depth)
            .field("child_number", &self.attrs.child_number)
            .finish_non_exhaustive()
    }
}
