//! Master fingerprint cache.

use crate::{ExtendedPrivateKey, Result, SeedSource};
use keycore_hashes::key_fingerprint;
use log::debug;

/// Caller-owned cache of the master key fingerprint.
///
/// The fingerprint is a pure function of the seed, so one cache serves one
/// seed for one session. Call [`FingerprintCache::invalidate`] whenever the
/// seed changes (device lock, new passphrase) or the session ends.
#[derive(Clone, Copy, Debug, Default)]
pub struct FingerprintCache {
    master: Option<u32>,
}

impl FingerprintCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self) -> Option<u32> {
        self.master
    }

    /// Return the cached master fingerprint, computing it from `seed` on a miss.
    pub fn master_fingerprint<S>(&mut self, seed: &S) -> Result<u32>
    where
        S: SeedSource + ?Sized,
    {
        if let Some(fingerprint) = self.master {
            return Ok(fingerprint);
        }

        debug!("master fingerprint cache miss");
        let fingerprint = key_fingerprint(&ExtendedPrivateKey::new(seed)?.public_key()?);
        self.master = Some(fingerprint);
        Ok(fingerprint)
    }

    pub fn invalidate(&mut self) {
        self.master = None;
    }
}
