use crate::{types::HmacSha512, Result};
use hmac::Mac;
use zeroize::{Zeroize, Zeroizing};

/// Size of an HMAC-SHA512 output: a secret half and a chain-code half.
pub(crate) const NODE_SIZE: usize = 64;

/// HMAC-SHA512 over the concatenation of `parts`, landed in storage that is
/// wiped when dropped.
pub(crate) fn hmac_sha512(key: &[u8], parts: &[&[u8]]) -> Result<Zeroizing<[u8; NODE_SIZE]>> {
    let mut hmac = HmacSha512::new_from_slice(key)?;
    for part in parts {
        hmac.update(part);
    }

    let mut output = hmac.finalize().into_bytes();
    let mut node = Zeroizing::new([0u8; NODE_SIZE]);
    node.copy_from_slice(&output);
    output.as_mut_slice().zeroize();

    Ok(node)
}
