use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Clone, Debug, Error)]
pub enum NetworkError {
    #[error("Invalid network name: {0}")]
    InvalidNetwork(String),
}

/// Identifies one of the four supported parameter sets.
///
/// Exactly one bundle exists per variant; the string forms returned by
/// [`Network::as_str`] are the ones external callers persist in config files.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Network {
    /// CBN main network.
    #[serde(rename = "main")]
    Mainnet,
    /// CBN test network.
    #[serde(rename = "test")]
    Testnet,
    /// CBN regression test network.
    #[serde(rename = "regtest")]
    Regtest,
    /// Unit-test network; the only variant whose bundle accepts overrides.
    #[serde(rename = "unittest")]
    UnitTest,
}

impl Network {
    /// All variants, in registry order.
    pub const ALL: [Network; 4] = [
        Network::Mainnet,
        Network::Testnet,
        Network::Regtest,
        Network::UnitTest,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Network::Mainnet => "main",
            Network::Testnet => "test",
            Network::Regtest => "regtest",
            Network::UnitTest => "unittest",
        }
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Network {
    type Err = NetworkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "main" => Ok(Network::Mainnet),
            "test" => Ok(Network::Testnet),
            "regtest" => Ok(Network::Regtest),
            "unittest" => Ok(Network::UnitTest),
            other => Err(NetworkError::InvalidNetwork(other.to_owned())),
        }
    }
}
