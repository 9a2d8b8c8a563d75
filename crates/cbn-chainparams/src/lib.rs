//! Chain parameter registry for the CBN network.
//!
//! This library owns the per-network protocol constant bundles (main, test,
//! regtest, unittest): message-start magic, genesis block, difficulty limits,
//! address prefixes, seed nodes and checkpoints. Bundles are built eagerly at
//! startup, validated against hardcoded genesis references, and handed out
//! through a select-once [`registry::ChainParamsRegistry`].

#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]
#![cfg_attr(test, allow(clippy::indexing_slicing))]
#![cfg_attr(test, allow(clippy::panic))]

/// Block, transaction and genesis data structures.
pub mod blockdata;
/// Manually curated trust-anchor checkpoints.
pub mod checkpoints;
/// Consensus encoding functionality.
pub mod consensus;
/// Hash functions and types used on the wire.
pub mod hashes;
/// I/O utilities for reading and writing data.
pub mod io;
/// Network identifiers.
pub mod network;
/// Wire-level network constants.
pub mod p2p;
/// Per-network parameter bundles.
pub mod params;
/// Difficulty target representation.
pub mod pow;
/// The select-once registry over the four bundles.
pub mod registry;
/// Seed node tables for peer discovery.
pub mod seeds;

pub use network::Network;
pub use params::{ChainParams, ParamsError};
pub use registry::ChainParamsRegistry;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
