//! Derivation paths

use crate::ChildNumber;
use core::fmt::{self, Display};

/// Prefix for all derivation paths.
const PREFIX: &str = "m";

/// Ordered indices from the master key to a descendant; insertion order is
/// derivation order.
///
/// Text parsing is left to the caller; [`Display`] renders the conventional
/// `m/44'/0'/0'` form for logs.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct DerivationPath {
    path: Vec<ChildNumber>,
}

impl DerivationPath {
    /// Iterate over the [`ChildNumber`] values in this derivation path.
    pub fn iter(&self) -> impl Iterator<Item = ChildNumber> + '_ {
        self.path.iter().cloned()
    }

    /// Is this derivation path empty? (i.e. the root)
    pub fn is_empty(&self) -> bool {
        self.path.is_empty()
    }

    /// Get the count of [`ChildNumber`] values in this derivation path.
    pub fn len(&self) -> usize {
        self.path.len()
    }

    /// Last index of the path, `None` at the root.
    pub fn last(&self) -> Option<ChildNumber> {
        self.path.last().copied()
    }

    /// Get the parent [`DerivationPath`] for the current one.
    ///
    /// Returns `None` if this is already the root path.
    pub fn parent(&self) -> Option<Self> {
        self.path.len().checked_sub(1).map(|n| {
            let mut parent = self.clone();
            parent.path.truncate(n);
            parent
        })
    }

    /// Push a [`ChildNumber`] onto an existing derivation path.
    pub fn push(&mut self, child_number: ChildNumber) {
        self.path.push(child_number)
    }
}

impl AsRef<[ChildNumber]> for DerivationPath {
    fn as_ref(&self) -> &[ChildNumber] {
        &self.path
    }
}

impl From<&[u32]> for DerivationPath {
    fn from(indices: &[u32]) -> Self {
        DerivationPath { path: indices.iter().copied().map(ChildNumber).collect() }
    }
}

impl<const N: usize> From<[u32; N]> for DerivationPath {
    fn from(indices: [u32; N]) -> Self {
        DerivationPath::from(&indices[..])
    }
}

impl FromIterator<ChildNumber> for DerivationPath {
    fn from_iter<T: IntoIterator<Item = ChildNumber>>(iter: T) -> Self {
        DerivationPath { path: iter.into_iter().collect() }
    }
}

impl Display for DerivationPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(PREFIX)?;

        for child_number in self.iter() {
            write!(f, "/{}", child_number)?;
        }

        Ok(())
    }
}

impl Extend<ChildNumber> for DerivationPath {
    fn extend<T>(&mut self, iter: T)
    where
        T: IntoIterator<Item = ChildNumber>,
    {
        self.path.extend(iter);
    }
}

impl IntoIterator for DerivationPath {
    type Item = ChildNumber;
    type IntoIter = std::vec::IntoIter<ChildNumber>;

    fn into_iter(self) -> std::vec::IntoIter<ChildNumber> {
        self.path.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::DerivationPath;
    use crate::ChildNumber;

    const H: u32 = ChildNumber::HARDENED_FLAG;

    #[test]
    fn display() {
        assert_eq!(DerivationPath::default().to_string(), "m");
        assert_eq!(DerivationPath::from([0]).to_string(), "m/0");
        assert_eq!(DerivationPath::from([H, 1, 2 | H]).to_string(), "m/0'/1/2'");
        assert_eq!(DerivationPath::from([0, 2147483647 | H, 1]).to_string(), "m/0/2147483647'/1");
    }

    #[test]
    fn parent() {
        let path = DerivationPath::from([0, 2147483647 | H]);
        let path_m_0 = path.parent().unwrap();
        assert_eq!("m/0", path_m_0.to_string());

        let path_m = path_m_0.parent().unwrap();
        assert_eq!("m", path_m.to_string());
        assert_eq!(path_m.parent(), None);
        assert_eq!(path_m.last(), None);
        assert_eq!(path.last(), Some(ChildNumber(2147483647 | H)));
    }

    #[test]
    fn extend_preserves_order() {
        let mut path = DerivationPath::from([86 | H]);
        path.push(ChildNumber(H));
        path.extend([ChildNumber(H), ChildNumber(0), ChildNumber(7)]);
        assert_eq!(path.len(), 5);
        let raw: Vec<u32> = path.into_iter().map(u32::from).collect();
        assert_eq!(raw, vec![86 | H, H, H, 0, 7]);
    }
}
