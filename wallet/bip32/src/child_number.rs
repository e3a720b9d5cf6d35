//! Child numbers

use crate::{Error, Result};
use core::fmt::{self, Display};

/// Index of a key within a level of the BIP32 hierarchy.
///
/// The high bit marks hardened derivation.
#[derive(Copy, Clone, Debug, Default, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub struct ChildNumber(pub u32);

impl ChildNumber {
    /// Hardened child keys use indices `2^31` through `2^32-1`.
    pub const HARDENED_FLAG: u32 = 1 << 31;

    /// Create a new [`ChildNumber`] from an index below `2^31`.
    pub fn new(index: u32, hardened: bool) -> Result<Self> {
        if index & Self::HARDENED_FLAG != 0 {
            return Err(Error::InvalidArgument("child index out of range"));
        }
        Ok(if hardened { Self(index | Self::HARDENED_FLAG) } else { Self(index) })
    }

    /// Index without the hardened flag.
    pub fn index(&self) -> u32 {
        self.0 & !Self::HARDENED_FLAG
    }

    pub fn is_hardened(&self) -> bool {
        self.0 & Self::HARDENED_FLAG != 0
    }

    /// Big-endian encoding used both in the CKD HMAC input and in the
    /// serialized extended key.
    pub fn to_bytes(&self) -> [u8; 4] {
        self.0.to_be_bytes()
    }

    pub fn from_bytes(bytes: [u8; 4]) -> Self {
        Self(u32::from_be_bytes(bytes))
    }
}

impl From<u32> for ChildNumber {
    fn from(n: u32) -> ChildNumber {
        ChildNumber(n)
    }
}

impl From<ChildNumber> for u32 {
    fn from(n: ChildNumber) -> u32 {
        n.0
    }
}

impl Display for ChildNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.index())?;
        if self.is_hardened() {
            f.write_str("'")?;
        }
        Ok(())
    }
}
