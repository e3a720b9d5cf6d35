use sha2::{Digest, Sha256};

/// BIP340 tagged hash engine.
///
/// Holds the SHA-256 state after absorbing `SHA256(tag) || SHA256(tag)`, so
/// each hash under the same tag only pays for its own data.
#[derive(Clone)]
pub struct TaggedHash {
    midstate: Sha256,
}

impl TaggedHash {
    pub fn new(tag: &[u8]) -> Self {
        let tag_hash = Sha256::digest(tag);
        let mut midstate = Sha256::new();
        midstate.update(tag_hash);
        midstate.update(tag_hash);
        Self { midstate }
    }

    /// A fresh engine primed with the tag prefix, for multi-part input.
    pub fn engine(&self) -> Sha256 {
        self.midstate.clone()
    }

    pub fn hash(&self, data: &[u8]) -> [u8; 32] {
        let mut engine = self.engine();
        engine.update(data);
        engine.finalize().into()
    }
}

/// `SHA256(SHA256(tag) || SHA256(tag) || data)`
pub fn tagged_hash(tag: &[u8], data: &[u8]) -> [u8; 32] {
    TaggedHash::new(tag).hash(data)
}
