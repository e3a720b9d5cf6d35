use crate::{Error, Version};
use serde::{Deserialize, Serialize};
use std::{
    fmt::{Display, Formatter},
    str::FromStr,
};

/// Bitcoin network whose version bytes are used for extended public keys
/// and legacy addresses.
#[derive(PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Debug, Default, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Network {
    #[default]
    Mainnet,
    Testnet,
}

impl Network {
    fn as_str(&self) -> &'static str {
        match self {
            Network::Mainnet => "mainnet",
            Network::Testnet => "testnet",
        }
    }

    /// BIP32 extended public key version (`xpub` / `tpub`).
    pub const fn xpub_version(&self) -> Version {
        match self {
            Network::Mainnet => 0x0488_b21e,
            Network::Testnet => 0x0435_87cf,
        }
    }

    /// P2PKH address version.
    pub const fn p2pkh_version(&self) -> u32 {
        match self {
            Network::Mainnet => 0x00,
            Network::Testnet => 0x6f,
        }
    }
}

impl Display for Network {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Network {
    type Err = Error;

    fn from_str(network: &str) -> Result<Self, Self::Err> {
        match network {
            "mainnet" => Ok(Network::Mainnet),
            "testnet" => Ok(Network::Testnet),
            _ => Err(Error::InvalidArgument("unknown network")),
        }
    }
}
