//! Manually curated trust-anchor checkpoints.
//!
//! A checkpoint pins the expected block hash at a given height so deep
//! alternate histories can be rejected cheaply. The summary statistics feed
//! chain-sync progress estimation.

use std::collections::BTreeMap;

use crate::blockdata::genesis::GenesisInfo;
use crate::hashes::BlockHash;
use crate::network::Network;

/// The checkpoint set for one network plus its summary statistics.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CheckpointData {
    /// Height to expected block hash.
    pub checkpoints: BTreeMap<u32, BlockHash>,
    /// UNIX timestamp of the last checkpointed block.
    pub last_checkpoint_time: u64,
    /// Total transactions between genesis and the last checkpoint.
    pub total_transactions: u64,
    /// Estimated transactions per day after the last checkpoint.
    pub transactions_per_day: u64,
}

impl CheckpointData {
    /// Checkpoint data for the given network.
    ///
    /// The unittest network shares the main network's checkpoints, as the
    /// original client did.
    pub fn for_network(network: Network) -> Self {
        let genesis_hash = GenesisInfo::for_network(network).hash;
        let checkpoints: BTreeMap<u32, BlockHash> = [(0, genesis_hash)].into_iter().collect();
        match network {
            Network::Mainnet | Network::Testnet | Network::UnitTest => Self {
                checkpoints,
                last_checkpoint_time: 1566556888,
                total_transactions: 0,
                transactions_per_day: 1440,
            },
            Network::Regtest => Self {
                checkpoints,
                last_checkpoint_time: 1550524693,
                total_transactions: 0,
                transactions_per_day: 1440,
            },
        }
    }

    /// Returns the expected hash at `height`, if that height is
    /// checkpointed.
    pub fn hash_at(&self, height: u32) -> Option<&BlockHash> {
        self.checkpoints.get(&height)
    }

    /// Whether `hash` is acceptable at `height`: either the height is not
    /// checkpointed, or the hash matches the anchor.
    pub fn verify_block(&self, height: u32, hash: &BlockHash) -> bool {
        match self.hash_at(height) {
            Some(expected) => expected == hash,
            None => true,
        }
    }

    /// The highest checkpointed height.
    pub fn last_checkpoint_height(&self) -> u32 {
        self.checkpoints.keys().next_back().copied().unwrap_or(0)
    }
}
