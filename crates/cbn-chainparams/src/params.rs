//! Per-network parameter bundles.
//!
//! One [`ChainParams`] value exists per [`Network`] variant. Bundles are
//! plain data: the main bundle is built from literals, and the derived
//! bundles clone an existing bundle and override only the fields that
//! differ, so there is no live coupling between them after construction.
//! Every constructor ends in genesis validation; a corrupted constant table
//! is a fatal configuration error, not something to run with.

use thiserror::Error;

use crate::blockdata::block::Block;
use crate::blockdata::genesis::{genesis_block, GenesisInfo};
use crate::checkpoints::CheckpointData;
use crate::hashes::{BlockHash, Hash, TxMerkleNode};
use crate::network::Network;
use crate::p2p::Magic;
use crate::pow::Target;
use crate::seeds::{self, DnsSeed, SeedAddress};

/// One coin in base units.
pub const COIN: u64 = 100_000_000;

const MAINNET_ALERT_KEY: &str = "04224483a67480210035aa0921f58737bc08ed0867782832653590d5398acdc8a3415bf9d2e8496919ae44c10785ae99ac1587543d1ed98c1f6d1da30d74a86d55";
const TESTNET_ALERT_KEY: &str = "048933f84c80766e9eb1c2388042c51a74786e0d5db146cff2b60ab3bff05a2d30c824c69c1b45e7527a0d5ea1c8069c5043c91692501206a8d8f4db67b07e4793";

const MAINNET_SPORK_KEY: &str = "0442ecc9fca281ba331d036e08db81b42c82a27f4912dfc4e38a010ed59fb5b60c91e864eef4999d8d7b4ba47b1a3482672df1edb0d0b1125ce5c9ce03c34d4984";
const TESTNET_SPORK_KEY: &str = "04a26ac821499207a8efcc279a8340b35102af41754570789a7be835bc0cb7426c9d9825abf9110fdb812dc278295ed075e8d52b825996fc5325351b0c5dfc43ba";

/// Errors raised while constructing a parameter bundle.
///
/// All of these are fatal configuration-integrity failures: the process must
/// not start with a bundle that fails validation.
#[derive(Debug, Error)]
pub enum ParamsError {
    #[error("{network} genesis block hash mismatch: expected {expected}, computed {computed}")]
    GenesisHashMismatch {
        network: Network,
        expected: BlockHash,
        computed: BlockHash,
    },
    #[error("{network} genesis merkle root mismatch: expected {expected}, computed {computed}")]
    GenesisMerkleRootMismatch {
        network: Network,
        expected: TxMerkleNode,
        computed: TxMerkleNode,
    },
    #[error("{network} genesis bits 0x{bits:08x} do not expand to a target within the proof-of-work limit")]
    GenesisBitsOutOfRange { network: Network, bits: u32 },
    #[error("invalid alert key for {network}")]
    InvalidAlertKey {
        network: Network,
        #[source]
        source: hex::FromHexError,
    },
}

/// Which address-prefix slot to look up.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AddressType {
    PubkeyAddress,
    ScriptAddress,
    SecretKey,
    ExtPublicKey,
    ExtSecretKey,
    ExtCoinType,
}

/// The base58/BIP32 prefix bytes that textually distinguish this network's
/// encoded addresses and keys.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AddressPrefixes {
    pub pubkey_address: &'static [u8],
    pub script_address: &'static [u8],
    pub secret_key: &'static [u8],
    pub ext_public_key: &'static [u8],
    pub ext_secret_key: &'static [u8],
    pub ext_coin_type: &'static [u8],
}

impl AddressPrefixes {
    pub fn prefix(&self, ty: AddressType) -> &'static [u8] {
        match ty {
            AddressType::PubkeyAddress => self.pubkey_address,
            AddressType::ScriptAddress => self.script_address,
            AddressType::SecretKey => self.secret_key,
            AddressType::ExtPublicKey => self.ext_public_key,
            AddressType::ExtSecretKey => self.ext_secret_key,
            AddressType::ExtCoinType => self.ext_coin_type,
        }
    }
}

/// Version-voting thresholds for soft-fork activation, counted over the last
/// `upgrade_window` blocks.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MajorityThresholds {
    /// Blocks with the upgraded version required to enforce the new rules.
    pub enforce_block_upgrade: u32,
    /// Blocks with the upgraded version required to reject outdated blocks.
    pub reject_block_outdated: u32,
    /// Size of the counting window.
    pub upgrade_window: u32,
}

/// The complete protocol constant bundle for one network variant.
///
/// Immutable after construction; the unittest bundle alone accepts overrides
/// through [`crate::registry::UnitTestParamsMut`].
#[derive(Clone, Debug, PartialEq)]
pub struct ChainParams {
    pub network: Network,
    /// Short label, serialized into config files by external callers.
    pub name: &'static str,
    /// Leading magic of every wire message on this network.
    pub magic: Magic,
    /// Verification key for the deprecated signed-alert mechanism. Opaque.
    pub alert_key: Vec<u8>,
    /// Port peers listen on.
    pub default_port: u16,

    pub subsidy_halving_interval: u64,
    pub max_reorg_depth: u32,
    pub majority: MajorityThresholds,
    pub miner_threads: u32,

    /// Maximum-difficulty target for proof-of-work headers.
    pub pow_limit: Target,
    pub pow_target_timespan: u64,
    pub pow_target_spacing: u64,
    /// Maximum-difficulty target for proof-of-stake headers.
    pub pos_limit: Target,
    pub pos_target_timespan: u64,
    pub pos_target_spacing: u64,

    /// Confirmation depth before a coinbase/stake output is spendable.
    pub coinbase_maturity: u32,
    pub masternode_count_drift: u32,
    pub max_money: u64,
    pub last_pow_block: u32,
    pub modifier_update_block: u32,

    /// The fully constructed genesis block.
    pub genesis: Block,
    /// The validated genesis block hash.
    pub genesis_hash: BlockHash,

    pub address_prefixes: AddressPrefixes,
    pub fixed_seeds: Vec<SeedAddress>,
    pub dns_seeds: Vec<DnsSeed>,

    pub mining_requires_peers: bool,
    pub allow_min_difficulty_blocks: bool,
    pub default_consistency_checks: bool,
    pub require_standard: bool,
    pub mine_blocks_on_demand: bool,
    pub skip_pow_check: bool,
    pub testnet_deprecated_rpc_field: bool,
    pub headers_first_syncing: bool,

    pub pool_max_transactions: u32,
    pub spork_key: &'static str,
    pub masternode_pool_dummy_address: &'static str,
    pub start_masternode_payments: u64,
    pub budget_fee_confirmations: u32,
    pub treasury_address: &'static str,

    pub checkpoints: CheckpointData,
}

impl ChainParams {
    /// Builds the main network bundle.
    pub fn mainnet() -> Result<Self, ParamsError> {
        let network = Network::Mainnet;
        let genesis = genesis_block(network);
        let mut params = ChainParams {
            network,
            name: "main",
            magic: Magic::MAINNET,
            alert_key: decode_alert_key(network, MAINNET_ALERT_KEY)?,
            default_port: 9538,

            subsidy_halving_interval: 1_050_000,
            max_reorg_depth: 100,
            majority: MajorityThresholds {
                enforce_block_upgrade: 750,
                reject_block_outdated: 950,
                upgrade_window: 1000,
            },
            miner_threads: 0,

            pow_limit: Target::default_pow_limit(),
            pow_target_timespan: 60,
            pow_target_spacing: 60, // 1 minute blocks during PoW (blocks 1-200)
            pos_limit: Target::default_pow_limit(),
            pos_target_timespan: 40 * 60,
            pos_target_spacing: 60, // 1 minute blocks during PoS

            coinbase_maturity: 5, // 6 block maturity (+1 elsewhere)
            masternode_count_drift: 20,
            max_money: 1_000_000 * COIN,
            last_pow_block: 1000,
            modifier_update_block: 1,

            genesis_hash: GenesisInfo::for_network(network).hash,
            genesis,

            address_prefixes: AddressPrefixes {
                pubkey_address: &[28], // addresses start with 'C'
                script_address: &[63], // script addresses start with 'S'
                secret_key: &[193],
                ext_public_key: &[0x04, 0x88, 0xb2, 0x1e], // BIP32 'xpub'
                ext_secret_key: &[0x04, 0x88, 0xad, 0xe4], // BIP32 'xprv'
                ext_coin_type: &[0x80, 0x00, 0x92, 0xf1],  // SLIP-44
            },
            fixed_seeds: seeds::mainnet_fixed_seeds(),
            dns_seeds: seeds::mainnet_dns_seeds(),

            mining_requires_peers: true,
            allow_min_difficulty_blocks: false,
            default_consistency_checks: false,
            require_standard: true,
            mine_blocks_on_demand: false,
            skip_pow_check: false,
            testnet_deprecated_rpc_field: false,
            headers_first_syncing: false,

            pool_max_transactions: 3,
            spork_key: MAINNET_SPORK_KEY,
            masternode_pool_dummy_address: "CdoAbRJs8rKsge9R9qEWoAamrBgatAU8JC",
            start_masternode_payments: 1525192183,
            budget_fee_confirmations: 6,
            treasury_address: "",

            checkpoints: CheckpointData::for_network(network),
        };
        params.validate_genesis()?;
        params.genesis_hash = params.genesis.block_hash();
        Ok(params)
    }

    /// Builds the test network bundle: a copy of main with overrides.
    pub fn testnet() -> Result<Self, ParamsError> {
        let network = Network::Testnet;
        let mut params = Self::mainnet()?;
        params.network = network;
        params.name = "test";
        params.magic = Magic::TESTNET;
        params.alert_key = decode_alert_key(network, TESTNET_ALERT_KEY)?;
        params.default_port = 19538;
        params.majority = MajorityThresholds {
            enforce_block_upgrade: 51,
            reject_block_outdated: 75,
            upgrade_window: 100,
        };
        params.masternode_count_drift = 4;

        params.genesis = genesis_block(network);

        params.address_prefixes.pubkey_address = &[88]; // addresses start with 'c'
        params.address_prefixes.script_address = &[125]; // script addresses start with 's'
        params.address_prefixes.ext_coin_type = &[0x80, 0x00, 0x00, 0x01]; // testnet coin type

        params.fixed_seeds = seeds::testnet_fixed_seeds();

        params.require_standard = false;
        params.testnet_deprecated_rpc_field = true;

        params.pool_max_transactions = 2;
        params.spork_key = TESTNET_SPORK_KEY;
        params.masternode_pool_dummy_address = "cU3MyatPLSVQQ96WAtxB5gstgW2qSxGzxs";
        // 24 hours after genesis.
        params.start_masternode_payments = u64::from(params.genesis.header.time) + 86400;
        // Short finalization window on testnet, so few confirmations.
        params.budget_fee_confirmations = 3;

        params.checkpoints = CheckpointData::for_network(network);

        params.validate_genesis()?;
        params.genesis_hash = params.genesis.block_hash();
        Ok(params)
    }

    /// Builds the regression test bundle: a copy of testnet with overrides.
    pub fn regtest() -> Result<Self, ParamsError> {
        let network = Network::Regtest;
        let mut params = Self::testnet()?;
        params.network = network;
        params.name = "regtest";
        params.magic = Magic::REGTEST;
        params.default_port = 14034;

        params.subsidy_halving_interval = 150;
        params.majority = MajorityThresholds {
            enforce_block_upgrade: 750,
            reject_block_outdated: 950,
            upgrade_window: 1000,
        };
        params.miner_threads = 1;
        params.pow_target_timespan = 24 * 60 * 60; // 1 day
        params.pow_target_spacing = 2 * 60;
        params.pow_limit = Target::regtest_pow_limit();

        params.genesis = genesis_block(network);

        // Regtest mode has neither fixed nor DNS seeds.
        params.fixed_seeds = Vec::new();
        params.dns_seeds = Vec::new();

        params.mining_requires_peers = false;
        params.allow_min_difficulty_blocks = true;
        params.default_consistency_checks = true;
        params.require_standard = false;
        params.mine_blocks_on_demand = true;
        params.testnet_deprecated_rpc_field = false;

        params.checkpoints = CheckpointData::for_network(network);

        params.validate_genesis()?;
        params.genesis_hash = params.genesis.block_hash();
        Ok(params)
    }

    /// Builds the unittest bundle: a copy of main with overrides.
    ///
    /// This is the only bundle whose fields may later be mutated, via
    /// [`crate::registry::ChainParamsRegistry::unit_test_overrides`].
    pub fn unit_test() -> Result<Self, ParamsError> {
        let network = Network::UnitTest;
        let mut params = Self::mainnet()?;
        params.network = network;
        params.name = "unittest";
        params.magic = Magic::UNITTEST;
        params.default_port = 51478;

        params.genesis = genesis_block(network);

        // Unit test mode has neither fixed nor DNS seeds.
        params.fixed_seeds = Vec::new();
        params.dns_seeds = Vec::new();

        params.mining_requires_peers = false;
        params.default_consistency_checks = true;
        params.allow_min_difficulty_blocks = false;
        params.mine_blocks_on_demand = true;

        // Checkpoints are shared with main.
        params.checkpoints = CheckpointData::for_network(network);

        params.validate_genesis()?;
        params.genesis_hash = params.genesis.block_hash();
        Ok(params)
    }

    /// Builds the bundle for the given network identifier.
    pub fn for_network(network: Network) -> Result<Self, ParamsError> {
        match network {
            Network::Mainnet => Self::mainnet(),
            Network::Testnet => Self::testnet(),
            Network::Regtest => Self::regtest(),
            Network::UnitTest => Self::unit_test(),
        }
    }

    /// Recomputes the genesis block's merkle root and hash and compares them
    /// against the hardcoded references, and checks the genesis difficulty
    /// bits against this bundle's work limit.
    fn validate_genesis(&self) -> Result<(), ParamsError> {
        let info = GenesisInfo::for_network(self.network);

        let computed_root = self
            .genesis
            .compute_merkle_root()
            .unwrap_or_else(|| TxMerkleNode::from_byte_array([0u8; 32]));
        if computed_root != info.merkle_root || self.genesis.header.merkle_root != info.merkle_root
        {
            return Err(ParamsError::GenesisMerkleRootMismatch {
                network: self.network,
                expected: info.merkle_root,
                computed: computed_root,
            });
        }

        let computed_hash = self.genesis.block_hash();
        if computed_hash != info.hash {
            return Err(ParamsError::GenesisHashMismatch {
                network: self.network,
                expected: info.hash,
                computed: computed_hash,
            });
        }

        let bits = self.genesis.header.bits;
        match Target::from_compact(bits) {
            Some(target) if target <= self.pow_limit => Ok(()),
            _ => Err(ParamsError::GenesisBitsOutOfRange {
                network: self.network,
                bits,
            }),
        }
    }
}

fn decode_alert_key(network: Network, hex_key: &str) -> Result<Vec<u8>, ParamsError> {
    hex::decode(hex_key).map_err(|source| ParamsError::InvalidAlertKey { network, source })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_bundles_construct_and_validate() {
        for network in Network::ALL {
            let params = ChainParams::for_network(network).unwrap();
            assert_eq!(params.network, network);
            assert_eq!(params.genesis_hash, params.genesis.block_hash());
        }
    }

    #[test]
    fn test_default_ports() {
        assert_eq!(ChainParams::mainnet().unwrap().default_port, 9538);
        assert_eq!(ChainParams::testnet().unwrap().default_port, 19538);
        assert_eq!(ChainParams::regtest().unwrap().default_port, 14034);
        assert_eq!(ChainParams::unit_test().unwrap().default_port, 51478);
    }

    #[test]
    fn test_networks_textually_distinguishable() {
        let main = ChainParams::mainnet().unwrap();
        let test = ChainParams::testnet().unwrap();
        assert_ne!(
            main.address_prefixes.prefix(AddressType::PubkeyAddress),
            test.address_prefixes.prefix(AddressType::PubkeyAddress)
        );
        assert_ne!(
            main.address_prefixes.prefix(AddressType::ExtCoinType),
            test.address_prefixes.prefix(AddressType::ExtCoinType)
        );
    }

    #[test]
    fn test_non_overridden_testnet_fields_inherit_main() {
        let main = ChainParams::mainnet().unwrap();
        let test = ChainParams::testnet().unwrap();
        assert_eq!(test.subsidy_halving_interval, main.subsidy_halving_interval);
        assert_eq!(test.max_reorg_depth, main.max_reorg_depth);
        assert_eq!(test.coinbase_maturity, main.coinbase_maturity);
        assert_eq!(test.max_money, main.max_money);
        assert_eq!(test.last_pow_block, main.last_pow_block);
        // DNS seeds were never overridden for testnet in the original.
        assert_eq!(test.dns_seeds, main.dns_seeds);
        assert_eq!(
            test.address_prefixes.secret_key,
            main.address_prefixes.secret_key
        );
    }

    #[test]
    fn test_regtest_has_no_peer_discovery() {
        let regtest = ChainParams::regtest().unwrap();
        assert!(regtest.fixed_seeds.is_empty());
        assert!(regtest.dns_seeds.is_empty());
    }

    #[test]
    fn test_regtest_inherits_testnet_values() {
        let test = ChainParams::testnet().unwrap();
        let regtest = ChainParams::regtest().unwrap();
        assert_eq!(regtest.spork_key, test.spork_key);
        assert_eq!(regtest.alert_key, test.alert_key);
        assert_eq!(regtest.pool_max_transactions, test.pool_max_transactions);
        assert_eq!(regtest.masternode_count_drift, test.masternode_count_drift);
        assert_eq!(regtest.address_prefixes, test.address_prefixes);
    }

    #[test]
    fn test_behavior_flags() {
        let main = ChainParams::mainnet().unwrap();
        assert!(main.mining_requires_peers);
        assert!(main.require_standard);
        assert!(!main.mine_blocks_on_demand);

        let regtest = ChainParams::regtest().unwrap();
        assert!(!regtest.mining_requires_peers);
        assert!(regtest.allow_min_difficulty_blocks);
        assert!(regtest.default_consistency_checks);
        assert!(regtest.mine_blocks_on_demand);

        let unit = ChainParams::unit_test().unwrap();
        assert!(!unit.mining_requires_peers);
        assert!(unit.default_consistency_checks);
        assert!(!unit.allow_min_difficulty_blocks);
        assert!(unit.mine_blocks_on_demand);
    }

    #[test]
    fn test_economic_constants() {
        let main = ChainParams::mainnet().unwrap();
        assert_eq!(main.max_money, 1_000_000 * COIN);
        assert_eq!(main.subsidy_halving_interval, 1_050_000);
        assert_eq!(ChainParams::regtest().unwrap().subsidy_halving_interval, 150);
    }

    #[test]
    fn test_testnet_masternode_payments_follow_genesis() {
        let test = ChainParams::testnet().unwrap();
        assert_eq!(
            test.start_masternode_payments,
            u64::from(test.genesis.header.time) + 86400
        );
    }

    #[test]
    fn test_corrupted_genesis_payload_fails_validation() {
        let mut params = ChainParams::mainnet().unwrap();
        params.genesis.transactions[0].inputs[0].script_sig[10] ^= 0x01;
        assert!(matches!(
            params.validate_genesis(),
            Err(ParamsError::GenesisMerkleRootMismatch { .. })
        ));
    }

    #[test]
    fn test_corrupted_nonce_fails_hash_check() {
        let mut params = ChainParams::mainnet().unwrap();
        params.genesis.header.nonce += 1;
        assert!(matches!(
            params.validate_genesis(),
            Err(ParamsError::GenesisHashMismatch { .. })
        ));
    }
}
