//! Seed source

use crate::{
    mac::{hmac_sha512, NODE_SIZE},
    Error, Result,
};
use zeroize::{Zeroize, Zeroizing};

/// HMAC key of the BIP32 master node.
pub const BIP32_SEED_DOMAIN: &[u8] = b"Bitcoin seed";

/// Entry point into the device seed.
///
/// The seed itself never leaves the implementor; callers only ever receive
/// `HMAC-SHA512(key = domain, data = seed)`. BIP32 uses
/// [`BIP32_SEED_DOMAIN`], SLIP-0021 uses
/// [`SLIP21_SEED_DOMAIN`](crate::slip21::SLIP21_SEED_DOMAIN).
pub trait SeedSource {
    fn seed_node(&self, domain: &[u8]) -> Result<Zeroizing<[u8; NODE_SIZE]>>;
}

impl<S: SeedSource + ?Sized> SeedSource for &S {
    fn seed_node(&self, domain: &[u8]) -> Result<Zeroizing<[u8; NODE_SIZE]>> {
        (**self).seed_node(domain)
    }
}

/// In-memory seed, wiped on drop.
pub struct Seed(Zeroizing<Vec<u8>>);

impl Seed {
    /// Shortest seed accepted by BIP32 (128 bits).
    pub const MIN_SIZE: usize = 16;

    /// Longest seed accepted by BIP32 (512 bits).
    pub const MAX_SIZE: usize = 64;

    /// Create a new seed from the given bytes.
    pub fn new(bytes: impl AsRef<[u8]>) -> Result<Self> {
        let bytes = bytes.as_ref();
        if !(Self::MIN_SIZE..=Self::MAX_SIZE).contains(&bytes.len()) {
            return Err(Error::InvalidArgument("seed length invalid"));
        }
        Ok(Seed(Zeroizing::new(bytes.to_vec())))
    }

    /// Take ownership of an existing buffer; the source is wiped.
    pub fn from_array<const N: usize>(mut bytes: [u8; N]) -> Result<Self> {
        let seed = Self::new(bytes);
        bytes.zeroize();
        seed
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl SeedSource for Seed {
    fn seed_node(&self, domain: &[u8]) -> Result<Zeroizing<[u8; NODE_SIZE]>> {
        hmac_sha512(domain, &[self.0.as_slice()])
    }
}

impl core::fmt::Debug for Seed {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Seed").field("len", &self.0.len()).finish_non_exhaustive()
    }
}
