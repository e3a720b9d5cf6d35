//! Error type.

use thiserror::Error;

/// Failure kinds reported by every derivation, tweak and encoding operation.
///
/// None of them is retried: an invalid child key during path derivation is
/// fatal to that call rather than skipped to the next index.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum Error {
    /// Malformed index, path too long or too deep, bad label, malformed text.
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),

    /// Scalar outside `[1, n)`, tweak `>= n`, point at infinity or an
    /// x-coordinate that is not on the curve.
    #[error("invalid key material")]
    InvalidKeyMaterial,

    /// The elliptic-curve or hash backend reported a failure.
    #[error("cryptographic primitive failure: {0}")]
    CryptoPrimitiveFailure(secp256k1::Error),

    /// Encoded output would not fit in the caller's buffer.
    #[error("output buffer too small")]
    BufferTooSmall,
}

impl Error {
    pub(crate) const DEPTH: Error = Error::InvalidArgument("maximum derivation depth exceeded");
}

impl From<secp256k1::Error> for Error {
    fn from(err: secp256k1::Error) -> Error {
        match err {
            secp256k1::Error::InvalidTweak | secp256k1::Error::InvalidSecretKey | secp256k1::Error::InvalidPublicKey => {
                Error::InvalidKeyMaterial
            }
            err => Error::CryptoPrimitiveFailure(err),
        }
    }
}

impl From<secp256k1::scalar::OutOfRangeError> for Error {
    fn from(_: secp256k1::scalar::OutOfRangeError) -> Error {
        Error::InvalidKeyMaterial
    }
}

/// HMAC-SHA512 accepts keys of any length, so this only guards the
/// constructor's signature.
impl From<hmac::digest::InvalidLength> for Error {
    fn from(_: hmac::digest::InvalidLength) -> Error {
        Error::CryptoPrimitiveFailure(secp256k1::Error::InvalidMessage)
    }
}

impl From<core::array::TryFromSliceError> for Error {
    fn from(_: core::array::TryFromSliceError) -> Error {
        Error::InvalidArgument("unexpected length")
    }
}

impl From<bs58::encode::Error> for Error {
    fn from(err: bs58::encode::Error) -> Error {
        match err {
            bs58::encode::Error::BufferTooSmall => Error::BufferTooSmall,
            _ => Error::InvalidArgument("base58 encoding failed"),
        }
    }
}

impl From<bs58::decode::Error> for Error {
    fn from(err: bs58::decode::Error) -> Error {
        match err {
            bs58::decode::Error::BufferTooSmall => Error::BufferTooSmall,
            bs58::decode::Error::InvalidChecksum { .. } => Error::InvalidArgument("base58 checksum mismatch"),
            _ => Error::InvalidArgument("invalid base58 string"),
        }
    }
}
