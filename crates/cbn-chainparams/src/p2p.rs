use thiserror::Error;

use crate::network::Network;

/// Network magic bytes to identify the network a wire message was intended
/// for.
///
/// The message start string is designed to be unlikely to occur in normal
/// data: rarely used upper ASCII, not valid as UTF-8, and a large 4-byte int
/// at any alignment. Every network carries a distinct value so a node never
/// misinterprets another network's traffic as its own.
#[derive(Debug, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Clone)]
pub struct Magic([u8; 4]);

impl Magic {
    /// CBN main network magic bytes.
    pub const MAINNET: Self = Self([0x34, 0xd3, 0x22, 0xcc]);
    /// CBN regression test network magic bytes.
    pub const REGTEST: Self = Self([0x20, 0xee, 0x32, 0xbc]);
    /// CBN test network magic bytes.
    pub const TESTNET: Self = Self([0x4b, 0x2e, 0x33, 0xbd]);
    /// Unit-test network magic bytes. Never used on a real wire, but kept
    /// distinct so the uniqueness invariant holds across all four bundles.
    pub const UNITTEST: Self = Self([0xf1, 0xd3, 0x5c, 0xa2]);

    /// Returns the magic bytes as a 4-byte array.
    pub fn to_bytes(&self) -> [u8; 4] {
        self.0
    }
}

impl From<Network> for Magic {
    fn from(network: Network) -> Self {
        match network {
            Network::Mainnet => Magic::MAINNET,
            Network::Testnet => Magic::TESTNET,
            Network::Regtest => Magic::REGTEST,
            Network::UnitTest => Magic::UNITTEST,
        }
    }
}

impl std::fmt::Display for Magic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        hex::encode(self.0).fmt(f)
    }
}

/// Errors that can occur when working with magic bytes.
#[derive(Debug, PartialEq, Clone, Copy, Error)]
pub enum MagicError {
    /// The magic bytes don't correspond to any known network.
    #[error("unknown network magic: {0}")]
    UnknownMagic(Magic),
}

impl TryFrom<Magic> for Network {
    type Error = MagicError;

    fn try_from(magic: Magic) -> Result<Self, Self::Error> {
        match magic {
            Magic::MAINNET => Ok(Network::Mainnet),
            Magic::TESTNET => Ok(Network::Testnet),
            Magic::REGTEST => Ok(Network::Regtest),
            Magic::UNITTEST => Ok(Network::UnitTest),
            _ => Err(MagicError::UnknownMagic(magic)),
        }
    }
}
