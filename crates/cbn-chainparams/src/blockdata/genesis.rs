//! Genesis block construction and reference hashes.
//!
//! Every network variant shares the same genesis block. The reference hashes
//! here are the values a freshly constructed genesis block must recompute to;
//! a mismatch means the constant tables were corrupted and startup must
//! abort.

use serde::{Deserialize, Serialize};

use crate::blockdata::block::{Block, BlockHeader};
use crate::blockdata::script::{ScriptBuilder, OP_CHECKSIG};
use crate::blockdata::transaction::{OutPoint, Transaction, TxIn, TxOut};
use crate::hashes::{BlockHash, Hash, TxMerkleNode};
use crate::network::Network;

/// The human-readable timestamp embedded in the genesis coinbase.
pub const GENESIS_TIMESTAMP_TEXT: &[u8] = b"20190823 CBN by ZioFabry";

/// The public key the genesis coinbase output pays to.
const GENESIS_OUTPUT_KEY: [u8; 65] = [
    0x04, 0x67, 0x8a, 0xfd, 0xb0, 0xfe, 0x55, 0x48, 0x27, 0x19, 0x67, 0xf1,
    0xa6, 0x71, 0x30, 0xb7, 0x10, 0x5c, 0xd6, 0xa8, 0x28, 0xe0, 0x39, 0x09,
    0xa6, 0x79, 0x62, 0xe0, 0xea, 0x1f, 0x61, 0xde, 0xb6, 0x49, 0xf6, 0xbc,
    0x3f, 0x4c, 0xef, 0x38, 0xc4, 0xf3, 0x55, 0x04, 0xe5, 0x1e, 0xc1, 0x12,
    0xde, 0x5c, 0x38, 0x4d, 0xf7, 0xba, 0x0b, 0x8d, 0x57, 0x8a, 0x4c, 0x70,
    0x2b, 0x6b, 0xf1, 0x1d, 0x5f,
];

const GENESIS_VERSION: i32 = 1;
const GENESIS_TIME: u32 = 1566556888;
const GENESIS_BITS: u32 = 0x1e0ffff0;
const GENESIS_NONCE: u32 = 350780;

/// Genesis reference values for one network.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenesisInfo {
    /// The expected hash of the genesis block.
    pub hash: BlockHash,
    /// The expected merkle root of the genesis block.
    pub merkle_root: TxMerkleNode,
    /// The timestamp of the genesis block.
    pub timestamp: u32,
    /// The nonce of the genesis block.
    pub nonce: u32,
    /// The bits (difficulty) of the genesis block.
    pub bits: u32,
    /// The version of the genesis block.
    pub version: i32,
}

impl GenesisInfo {
    /// Returns the genesis reference values for the given network.
    ///
    /// All four variants launched from the same genesis block, so the values
    /// are currently identical; the per-network seam is kept so a future
    /// testnet reset only has to touch this table.
    pub fn for_network(network: Network) -> Self {
        match network {
            Network::Mainnet | Network::Testnet | Network::Regtest | Network::UnitTest => Self {
                hash: BlockHash::from_byte_array([
                    0xde, 0x3e, 0xb3, 0x87, 0xd4, 0xd7, 0xa9, 0xa8, 0xf0, 0x2b, 0xee, 0x6d,
                    0xe5, 0x0a, 0xda, 0x87, 0x78, 0x42, 0xa6, 0x2c, 0xa8, 0x4c, 0x07, 0x4d,
                    0xcb, 0x3d, 0xf8, 0x43, 0x72, 0x1c, 0xa8, 0xba,
                ]),
                merkle_root: TxMerkleNode::from_byte_array([
                    0x1d, 0xb9, 0x91, 0x22, 0x5f, 0x45, 0x44, 0x65, 0x2d, 0x87, 0xe5, 0x00,
                    0x1c, 0x8f, 0x38, 0x5b, 0xbb, 0x9e, 0xb8, 0xdf, 0xc3, 0x13, 0xeb, 0xd8,
                    0xad, 0x2b, 0x15, 0x36, 0xc4, 0xe7, 0xe5, 0xbd,
                ]),
                timestamp: GENESIS_TIME,
                nonce: GENESIS_NONCE,
                bits: GENESIS_BITS,
                version: GENESIS_VERSION,
            },
        }
    }
}

/// Builds the genesis block for the given network from its constant parts.
///
/// The coinbase scriptSig pushes the historical difficulty constant, a
/// script number 4, and the timestamp text; the single output pays the
/// genesis key via `OP_CHECKSIG` and carries no value.
pub fn genesis_block(network: Network) -> Block {
    let info = GenesisInfo::for_network(network);

    let script_sig = ScriptBuilder::new()
        .push_scriptnum(486604799)
        .push_scriptnum(4)
        .push_slice(GENESIS_TIMESTAMP_TEXT)
        .into_bytes();

    let script_pubkey = ScriptBuilder::new()
        .push_slice(&GENESIS_OUTPUT_KEY)
        .push_opcode(OP_CHECKSIG)
        .into_bytes();

    let coinbase = Transaction {
        version: 1,
        inputs: vec![TxIn {
            previous_output: OutPoint::null(),
            script_sig,
            sequence: u32::MAX,
        }],
        outputs: vec![TxOut {
            value: 0,
            script_pubkey,
        }],
        lock_time: 0,
    };

    let merkle_root = TxMerkleNode::from(coinbase.txid());

    Block {
        header: BlockHeader {
            version: info.version,
            prev_block_hash: BlockHash::from_byte_array([0u8; 32]),
            merkle_root,
            time: info.timestamp,
            bits: info.bits,
            nonce: info.nonce,
        },
        transactions: vec![coinbase],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_genesis_info() {
        let info = GenesisInfo::for_network(Network::Mainnet);
        assert_eq!(
            info.hash.to_string(),
            "baa81c7243f83dcb4d074ca82ca6427887da0ae56dee2bf0a8a9d7d487b33ede"
        );
        assert_eq!(
            info.merkle_root.to_string(),
            "bde5e7c436152badd8eb13c3dfb89ebb5b388f1c00e5872d6544455f2291b91d"
        );
        assert_eq!(info.timestamp, 1566556888);
        assert_eq!(info.nonce, 350780);
        assert_eq!(info.bits, 0x1e0ffff0);
        assert_eq!(info.version, 1);
    }

    #[test]
    fn test_genesis_block_matches_references() {
        for network in Network::ALL {
            let info = GenesisInfo::for_network(network);
            let block = genesis_block(network);
            assert_eq!(block.block_hash(), info.hash, "{network}");
            assert_eq!(block.compute_merkle_root().unwrap(), info.merkle_root, "{network}");
            assert_eq!(block.header.merkle_root, info.merkle_root, "{network}");
        }
    }

    #[test]
    fn test_genesis_coinbase_script_layout() {
        let block = genesis_block(Network::Mainnet);
        let coinbase = &block.transactions[0];
        // 4-byte number push, 1-byte number push, 24-byte text push.
        let mut expected = vec![0x04, 0xff, 0xff, 0x00, 0x1d, 0x01, 0x04, 0x18];
        expected.extend_from_slice(GENESIS_TIMESTAMP_TEXT);
        assert_eq!(coinbase.inputs[0].script_sig, expected);
        assert_eq!(coinbase.outputs[0].script_pubkey.len(), 67);
        assert_eq!(coinbase.outputs[0].value, 0);
    }

    #[test]
    fn test_corrupted_payload_breaks_references() {
        let mut block = genesis_block(Network::Mainnet);
        block.transactions[0].inputs[0].script_sig[8] ^= 0x01;
        let info = GenesisInfo::for_network(Network::Mainnet);
        assert_ne!(block.compute_merkle_root().unwrap(), info.merkle_root);
    }
}
