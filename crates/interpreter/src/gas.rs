//! Gas accounting for opcode execution.

use primitives::Word256;

/// Gas cost for operations that consume zero gas.
pub const ZERO: u64 = 0;
/// Base gas cost for basic operations.
pub const BASE: u64 = 2;
/// Gas cost for very low-cost operations.
pub const VERYLOW: u64 = 3;
/// Gas cost for low-cost operations.
pub const LOW: u64 = 5;
/// Gas cost for medium-cost operations.
pub const MID: u64 = 8;
/// Gas cost for high-cost operations.
pub const HIGH: u64 = 10;
/// Base gas cost for EXP.
pub const EXP: u64 = 10;
/// Gas cost per significant byte of the EXP exponent.
pub const EXP_BYTE: u64 = 50;
/// Gas cost for EOFCREATE.
pub const EOF_CREATE_GAS: u64 = 32000;

/// `EXP` cost: a base charge plus a per-byte charge over the significant
/// bytes of the exponent.
#[inline]
pub fn exp_cost(power: Word256) -> Option<u64> {
    if power.is_zero() {
        Some(EXP)
    } else {
        EXP.checked_add(EXP_BYTE.checked_mul(power.byte_len() as u64)?)
    }
}

/// Remaining-gas counter for one frame.
///
/// The limit is fixed at frame creation; running out of gas is the only
/// cooperative cancellation the stack machine observes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Gas {
    /// The initial gas limit. Constant throughout execution.
    limit: u64,
    /// The remaining gas.
    remaining: u64,
}

impl Gas {
    /// Creates a new counter with the given limit, all of it remaining.
    #[inline]
    pub const fn new(limit: u64) -> Self {
        Self {
            limit,
            remaining: limit,
        }
    }

    /// Returns the gas limit.
    #[inline]
    pub const fn limit(&self) -> u64 {
        self.limit
    }

    /// Returns the amount of gas remaining.
    #[inline]
    pub const fn remaining(&self) -> u64 {
        self.remaining
    }

    /// Returns the total amount of gas spent.
    #[inline]
    pub const fn spent(&self) -> u64 {
        self.limit - self.remaining
    }

    /// Records a cost, returning `false` without spending anything if the
    /// remaining gas does not cover it.
    #[inline]
    #[must_use]
    pub fn record_cost(&mut self, cost: u64) -> bool {
        let (remaining, underflow) = self.remaining.overflowing_sub(cost);
        if underflow {
            return false;
        }
        self.remaining = remaining;
        true
    }

    /// Spends all remaining gas. Used when a frame halts on a gas deficit:
    /// the EVM forfeits whatever was left.
    #[inline]
    pub fn spend_all(&mut self) {
        self.remaining = 0;
    }
}
