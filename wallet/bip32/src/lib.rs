//!
//! Hierarchical key derivation core of a Bitcoin signing device.
//!
//! Turns a seed plus a BIP32 path into private and public key material,
//! serializes extended public keys and legacy addresses with base58check,
//! applies BIP341 taproot tweaks and derives SLIP-0021 symmetric keys.
//!
//! Every buffer that holds a private key, a chain code derived from one, or an
//! HMAC output is kept in [`zeroize::Zeroizing`] storage (or a type that wipes
//! itself on drop), so secrets are erased on success and error paths alike.
//! The one exception is the `secp256k1::Scalar` built from a private
//! derivation tweak, which the curve library gives no way to wipe.
//!
//! ```rust,ignore
//! use keycore_bip32::{DerivationPath, Keychain, Network, Seed, ChildNumber};
//!
//! let keychain = Keychain::new(Seed::new(&seed_bytes)?);
//! let path = DerivationPath::from([84 | ChildNumber::HARDENED_FLAG, ChildNumber::HARDENED_FLAG, ChildNumber::HARDENED_FLAG]);
//! let xpub = keychain.extended_pubkey_string_at_path(&path, Network::Mainnet.xpub_version())?;
//! ```
//!

mod attrs;
pub mod base58;
mod cache;
mod child_number;
mod derivation_path;
mod error;
mod mac;
mod keychain;
mod network;
pub mod pubkey;
mod result;
mod seed;
pub mod slip21;
pub mod taproot;
pub mod types;
mod xkey;
mod xprivate_key;
mod xpublic_key;

pub use attrs::ExtendedKeyAttrs;
pub use cache::FingerprintCache;
pub use child_number::ChildNumber;
pub use derivation_path::DerivationPath;
pub use error::Error;
pub use keychain::Keychain;
pub use network::Network;
pub use result::Result;
pub use seed::{Seed, SeedSource, BIP32_SEED_DOMAIN};
pub use slip21::SymmetricNode;
pub use taproot::TweakedPublicKey;
pub use types::*;
pub use xkey::MAX_SERIALIZED_PUBKEY_LENGTH;
pub use xprivate_key::ExtendedPrivateKey;
pub use xpublic_key::ExtendedPublicKey;
