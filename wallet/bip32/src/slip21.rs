//! SLIP-0021 symmetric key derivation.
//!
//! A node is 64 bytes: the left half keys the HMAC of the next level, the
//! right half is the symmetric key of the node. Labels are byte strings that
//! start with `0x00`; that byte is the domain prefix of the HMAC input.

use crate::{
    mac::{hmac_sha512, NODE_SIZE},
    Error, Result, SeedSource, KEY_SIZE,
};
use log::trace;
use zeroize::Zeroizing;

/// HMAC key of the SLIP-0021 master node.
pub const SLIP21_SEED_DOMAIN: &[u8] = b"Symmetric key seed";

/// Symmetric key, wiped on drop.
pub type SymmetricKey = Zeroizing<[u8; KEY_SIZE]>;

/// One SLIP-0021 node, wiped on drop.
pub struct SymmetricNode(Zeroizing<[u8; NODE_SIZE]>);

impl SymmetricNode {
    pub fn master<S>(seed: &S) -> Result<Self>
    where
        S: SeedSource + ?Sized,
    {
        Ok(SymmetricNode(seed.seed_node(SLIP21_SEED_DOMAIN)?))
    }

    /// Replace this node with its child under `label`.
    pub fn derive_child(&mut self, label: &[u8]) -> Result<()> {
        if label.first() != Some(&0) {
            return Err(Error::InvalidArgument("symmetric key label must start with 0x00"));
        }
        self.0 = hmac_sha512(&self.0[..KEY_SIZE], &[label])?;
        Ok(())
    }

    /// Right half of the node.
    pub fn key(&self) -> SymmetricKey {
        let mut key = Zeroizing::new([0u8; KEY_SIZE]);
        key.copy_from_slice(&self.0[KEY_SIZE..]);
        key
    }
}

impl core::fmt::Debug for SymmetricNode {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("SymmetricNode(..)")
    }
}

/// Key of the node one `label` below the master node.
pub fn derive_symmetric_key<S>(seed: &S, label: &[u8]) -> Result<SymmetricKey>
where
    S: SeedSource + ?Sized,
{
    derive_symmetric_key_path(seed, &[label])
}

/// Key of the node reached by applying `labels` in order.
pub fn derive_symmetric_key_path<S>(seed: &S, labels: &[&[u8]]) -> Result<SymmetricKey>
where
    S: SeedSource + ?Sized,
{
    let mut node = SymmetricNode::master(seed)?;
    for label in labels {
        node.derive_child(label)?;
    }
    trace!("derived symmetric key {} levels deep", labels.len());
    Ok(node.key())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Seed;
    use faster_hex::{hex_decode, hex_string};

    // "all all all all all all all all all all all all", empty passphrase
    fn all_seed() -> Seed {
        let mut seed = [0u8; 64];
        hex_decode(
            b"c76c4ac4f4e4a00d6b274d5c39c700bb4a7ddc04fbc6f78e85ca75007b5b495f74a9043eeb77bdd53aa6fc3a0e31462270316fa04b8c19114c8798706cd02ac8",
            &mut seed,
        )
        .unwrap();
        Seed::from_array(seed).unwrap()
    }

    #[test]
    fn test_master_node() {
        let node = SymmetricNode::master(&all_seed()).unwrap();
        assert_eq!(
            hex_string(&node.0[..]),
            "8f8c33732530a0417dd446097edb6f6617d52d627c6db28581d74d11b385d25adbf12b44133eaab506a740f6565cc117228cbf1dd70635cfa8ddfdc9af734756"
        );
    }

    #[test]
    fn test_published_vectors() {
        let seed = all_seed();
        assert_eq!(
            hex_string(&derive_symmetric_key(&seed, b"\0SLIP-0021").unwrap()[..]),
            "1d065e3ac1bbe5c7fad32cf2305f7d709dc070d672044a19e610c77cdf33de0d"
        );
        assert_eq!(
            hex_string(&derive_symmetric_key_path(&seed, &[&b"\0SLIP-0021"[..], &b"\0Master encryption key"[..]]).unwrap()[..]),
            "ea163130e35bbafdf5ddee97a17b39cef2be4b4f390180d65b54cf05c6a82fde"
        );
        assert_eq!(
            hex_string(&derive_symmetric_key_path(&seed, &[&b"\0SLIP-0021"[..], &b"\0Authentication key"[..]]).unwrap()[..]),
            "47194e938ab24cc82bfa25f6486ed54bebe79c40ae2a5a32ea6db294d81861a6"
        );
    }

    #[test]
    fn test_label_prefix_is_required() {
        let seed = all_seed();
        assert!(matches!(derive_symmetric_key(&seed, b"SLIP-0021"), Err(Error::InvalidArgument(_))));
        assert!(matches!(derive_symmetric_key(&seed, b""), Err(Error::InvalidArgument(_))));
    }

    #[test]
    fn test_debug_is_redacted() {
        let node = SymmetricNode::master(&all_seed()).unwrap();
        assert_eq!(format!("{node:?}"), "SymmetricNode(..)");
    }
}
