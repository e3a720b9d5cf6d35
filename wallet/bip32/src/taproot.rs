//! BIP340/341 taproot tweaks.
//!
//! Both tweaks use `t = tagged_hash("TapTweak", x_only(P))` with no script
//! tree, i.e. the BIP86 key-path-only output.

use crate::{PrivateKeyBytes, Result, XOnlyPublicKeyBytes};
use keycore_hashes::TaggedHash;
use once_cell::sync::Lazy;
use secp256k1::{Parity, PublicKey, Scalar, SecretKey, XOnlyPublicKey, SECP256K1};
use zeroize::Zeroizing;

static TAP_TWEAK: Lazy<TaggedHash> = Lazy::new(|| TaggedHash::new(b"TapTweak"));

/// Taproot output key: x-coordinate plus the parity of `y` (1 if odd).
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct TweakedPublicKey {
    pub x_only: XOnlyPublicKeyBytes,
    pub parity: u8,
}

fn tap_tweak(x_only: &XOnlyPublicKeyBytes) -> Result<Scalar> {
    Ok(Scalar::from_be_bytes(TAP_TWEAK.hash(x_only))?)
}

/// `Q = lift_x(P) + t·G`.
pub fn tweak_pubkey(x_only: &XOnlyPublicKeyBytes) -> Result<TweakedPublicKey> {
    let internal = XOnlyPublicKey::from_slice(x_only)?;
    let tweaked = PublicKey::from_x_only_public_key(internal, Parity::Even).add_exp_tweak(SECP256K1, &tap_tweak(x_only)?)?;

    let (output, parity) = tweaked.x_only_public_key();
    Ok(TweakedPublicKey { x_only: output.serialize(), parity: parity.to_u8() })
}

/// `d = d' + t`, where `d'` is `d` negated when `d·G` has odd `y`.
///
/// `private_key` is only written on success; wiping it stays with the caller.
pub fn tweak_seckey(private_key: &mut PrivateKeyBytes) -> Result<()> {
    let mut secret_key = SecretKey::from_slice(&private_key[..])?;
    let (x_only, parity) = secret_key.x_only_public_key(SECP256K1);
    if parity == Parity::Odd {
        secret_key = secret_key.negate();
    }

    let result = tap_tweak(&x_only.serialize()).and_then(|tweak| Ok(secret_key.add_tweak(&tweak)?));
    secret_key.non_secure_erase();

    let mut tweaked = result?;
    let bytes = Zeroizing::new(tweaked.secret_bytes());
    tweaked.non_secure_erase();
    private_key.copy_from_slice(&bytes[..]);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;
    use faster_hex::{hex_decode, hex_string};

    fn bytes32(hex: &str) -> [u8; 32] {
        let mut bytes = [0u8; 32];
        hex_decode(hex.as_bytes(), &mut bytes).unwrap();
        bytes
    }

    #[test]
    fn test_bip341_key_path_vector() {
        let tweaked = tweak_pubkey(&bytes32("d6889cb081036e0faefa3a35157ad71086b123b2b144b649798b494c300a961d")).unwrap();
        assert_eq!(hex_string(&tweaked.x_only), "53a1f6e454df1aa2776a2814a721372d6258050de330b3c6d10ee8f4e0dda343");
        assert_eq!(tweaked.parity, 1);
    }

    #[test]
    fn test_bip86_private_tweak() {
        let mut private_key = bytes32("41f41d69260df4cf277826a9b65a3717e4eeddbeedf637f212ca096576479361");
        tweak_seckey(&mut private_key).unwrap();
        assert_eq!(hex_string(&private_key), "eaac016f36e8c18347fbacf05ab7966708fbfce7ce3bf1dc32a09dd0645db038");
    }

    #[test]
    fn test_private_and_public_tweaks_agree() {
        for byte in 1u8..=8 {
            let mut private_key = [byte; 32];
            let secret_key = SecretKey::from_slice(&private_key).unwrap();
            let (x_only, _) = secret_key.x_only_public_key(SECP256K1);
            let expected = tweak_pubkey(&x_only.serialize()).unwrap();

            tweak_seckey(&mut private_key).unwrap();
            let tweaked = SecretKey::from_slice(&private_key).unwrap();
            let (output, parity) = tweaked.x_only_public_key(SECP256K1);
            assert_eq!(output.serialize(), expected.x_only);
            assert_eq!(parity.to_u8(), expected.parity);
        }
    }

    #[test]
    fn test_off_curve_internal_key() {
        let mut x = [0u8; 32];
        x[31] = 5;
        assert_eq!(tweak_pubkey(&x), Err(Error::InvalidKeyMaterial));
    }

    #[test]
    fn test_zero_private_key() {
        let mut private_key = [0u8; 32];
        assert_eq!(tweak_seckey(&mut private_key), Err(Error::InvalidKeyMaterial));
    }
}
