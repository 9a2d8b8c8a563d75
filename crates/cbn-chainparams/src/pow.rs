//! Difficulty target representation.
//!
//! A [`Target`] is a 256-bit threshold a block's hash must fall below. Block
//! headers carry targets in the 4-byte compact form (`nBits`); the parameter
//! bundles carry the per-network maximum targets (the inverse of the minimum
//! difficulty) in expanded form.

use primitive_types::U256;
use serde::{Deserialize, Serialize};

/// A difficulty target expressed as an unsigned 256-bit integer.
///
/// The lower the target, the higher the difficulty. Per-network work limits
/// bound the targets acceptable in block headers.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Target(U256);

impl Target {
    /// The work limit shared by main, test and unittest: `~0 >> 20`.
    pub fn default_pow_limit() -> Self {
        Target(U256::MAX >> 20)
    }

    /// The permissive regtest work limit: `~0 >> 1`.
    pub fn regtest_pow_limit() -> Self {
        Target(U256::MAX >> 1)
    }

    /// Expands a compact `nBits` value into a full target.
    ///
    /// The compact form stores a 1-byte exponent and a 3-byte mantissa; the
    /// target is `mantissa * 256^(exponent - 3)`. Returns `None` for a zero
    /// or sign-flagged mantissa, or when the exponent would overflow 256
    /// bits.
    pub fn from_compact(bits: u32) -> Option<Self> {
        let exponent = bits >> 24;
        let mantissa = bits & 0x007f_ffff;

        if bits & 0x0080_0000 != 0 {
            return None; // Sign bit set, negative targets are invalid.
        }
        if mantissa == 0 {
            return None;
        }
        if exponent > 32 {
            return None; // Would not fit a 256-bit target.
        }

        let base = U256::from(mantissa);
        let target = if exponent <= 3 {
            base >> ((3 - exponent) * 8)
        } else {
            base << ((exponent - 3) * 8)
        };

        Some(Target(target))
    }
}
