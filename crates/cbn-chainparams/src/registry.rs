//! The select-once registry over the four parameter bundles.
//!
//! The registry replaces the original client's process-global "current
//! params" pointer with an explicit, single-owner handle: build it once
//! during bootstrap, call [`ChainParamsRegistry::select`] exactly once, then
//! share it read-only with every collaborator that needs chain parameters.
//! After selection the bundles are immutable shared data; the sole exception
//! is the unittest bundle, which test harnesses may mutate through
//! [`UnitTestParamsMut`] while it is the active bundle. That path is meant
//! for single-threaded test setup only; mutating while another thread reads
//! is undefined and is ruled out in safe code by the `&mut self` receiver.

use tracing::info;

use crate::network::Network;
use crate::params::{ChainParams, ParamsError};

/// Owns the four parameter bundles and the active-network selection.
#[derive(Debug)]
pub struct ChainParamsRegistry {
    mainnet: ChainParams,
    testnet: ChainParams,
    regtest: ChainParams,
    unit_test: ChainParams,
    active: Option<Network>,
}

impl ChainParamsRegistry {
    /// Builds and validates all four bundles eagerly.
    ///
    /// A genesis mismatch in any bundle is a fatal configuration error and
    /// fails construction; the process must not start.
    pub fn new() -> Result<Self, ParamsError> {
        Ok(ChainParamsRegistry {
            mainnet: ChainParams::mainnet()?,
            testnet: ChainParams::testnet()?,
            regtest: ChainParams::regtest()?,
            unit_test: ChainParams::unit_test()?,
            active: None,
        })
    }

    /// Sets the process-wide active bundle. Call exactly once.
    ///
    /// # Panics
    ///
    /// Panics if a network has already been selected, including selecting
    /// the same network twice. Re-selection has no defined teardown
    /// semantics, so it fails fast.
    pub fn select(&mut self, network: Network) {
        if let Some(active) = self.active {
            panic!("network already selected: {active} (attempted to select {network})");
        }
        self.active = Some(network);
        info!(network = %network, "selected chain parameters");
    }

    /// Returns the active bundle.
    ///
    /// # Panics
    ///
    /// Panics if called before [`select`](Self::select); reading chain
    /// parameters before selection is a programmer error.
    pub fn current(&self) -> &ChainParams {
        match self.active {
            Some(network) => self.params_for(network),
            None => panic!("chain parameters read before a network was selected"),
        }
    }

    /// Returns the bundle for an explicit identifier, regardless of which
    /// network is active. Used by code that must reason about a non-active
    /// network, such as cross-network address-format detection.
    pub fn params_for(&self, network: Network) -> &ChainParams {
        match network {
            Network::Mainnet => &self.mainnet,
            Network::Testnet => &self.testnet,
            Network::Regtest => &self.regtest,
            Network::UnitTest => &self.unit_test,
        }
    }

    /// The selected network, if any.
    pub fn active_network(&self) -> Option<Network> {
        self.active
    }

    /// Returns the mutable override view of the unittest bundle.
    ///
    /// # Panics
    ///
    /// Panics unless the active network is [`Network::UnitTest`], preventing
    /// test code from silently mutating production parameter sets.
    pub fn unit_test_overrides(&mut self) -> UnitTestParamsMut<'_> {
        match self.active {
            Some(Network::UnitTest) => UnitTestParamsMut {
                params: &mut self.unit_test,
            },
            other => panic!(
                "unittest parameter overrides requested while active network is {}",
                other.map(|n| n.as_str()).unwrap_or("unselected")
            ),
        }
    }
}

/// Mutable view over the override-able fields of the unittest bundle.
///
/// Only obtainable while the unittest network is active; the set of setters
/// mirrors exactly the fields the original client let unit tests adjust.
#[derive(Debug)]
pub struct UnitTestParamsMut<'a> {
    params: &'a mut ChainParams,
}

impl UnitTestParamsMut<'_> {
    pub fn set_subsidy_halving_interval(&mut self, interval: u64) {
        self.params.subsidy_halving_interval = interval;
    }

    pub fn set_enforce_block_upgrade_majority(&mut self, blocks: u32) {
        self.params.majority.enforce_block_upgrade = blocks;
    }

    pub fn set_reject_block_outdated_majority(&mut self, blocks: u32) {
        self.params.majority.reject_block_outdated = blocks;
    }

    pub fn set_upgrade_window(&mut self, blocks: u32) {
        self.params.majority.upgrade_window = blocks;
    }

    pub fn set_default_consistency_checks(&mut self, enabled: bool) {
        self.params.default_consistency_checks = enabled;
    }

    pub fn set_allow_min_difficulty_blocks(&mut self, allowed: bool) {
        self.params.allow_min_difficulty_blocks = allowed;
    }

    pub fn set_skip_pow_check(&mut self, skip: bool) {
        self.params.skip_pow_check = skip;
    }
}
