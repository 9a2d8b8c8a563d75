/// Block and header types.
pub mod block;
/// Genesis block construction and reference hashes.
pub mod genesis;
/// Minimal script building for the genesis coinbase.
pub mod script;
/// Transaction types.
pub mod transaction;
