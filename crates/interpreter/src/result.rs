//! Frame lifecycle and per-opcode outcomes.

use crate::stack::StackError;
use core::fmt;

/// Reason a frame was terminated at a specific opcode.
///
/// These are the only terminal failures the stack machine itself produces.
/// Value-level failures such as division by zero are defined results, not
/// halts.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HaltReason {
    /// The opcode is undefined, or not valid for the current code version.
    InvalidOperation,
    /// The remaining gas does not cover the opcode's cost.
    InsufficientGas,
    /// A push on a stack already holding [`STACK_LIMIT`](crate::STACK_LIMIT)
    /// words.
    StackOverflow,
    /// A pop or indexed access past the bottom of the stack.
    StackUnderflow,
}

impl fmt::Display for HaltReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::InvalidOperation => "invalid operation",
            Self::InsufficientGas => "insufficient gas",
            Self::StackOverflow => "stack overflow",
            Self::StackUnderflow => "stack underflow",
        };
        f.write_str(s)
    }
}

impl From<StackError> for HaltReason {
    #[inline]
    fn from(err: StackError) -> Self {
        match err {
            StackError::Overflow => Self::StackOverflow,
            StackError::Underflow => Self::StackUnderflow,
        }
    }
}

/// Lifecycle of one execution frame.
///
/// A frame starts `Running` and moves exactly once to one of the terminal
/// states. The stack machine only ever produces `CompletedSuccess` (via
/// `STOP` or running off the end of code) and `Halted`; `CompletedRevert`
/// belongs to the outer call layers.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FrameState {
    /// Executing opcodes.
    #[default]
    Running,
    /// Terminated normally.
    CompletedSuccess,
    /// Terminated with state rolled back by the caller.
    CompletedRevert,
    /// Terminated abnormally.
    Halted(HaltReason),
}

impl FrameState {
    /// Returns whether the frame is still executing.
    #[inline]
    pub const fn is_running(&self) -> bool {
        matches!(self, Self::Running)
    }

    /// Returns the halt reason, if the frame halted.
    #[inline]
    pub const fn halt_reason(&self) -> Option<HaltReason> {
        match self {
            Self::Halted(reason) => Some(*reason),
            _ => None,
        }
    }
}

/// Outcome of executing a single opcode: the gas it consumed and the halt
/// it caused, if any.
///
/// On an [`InsufficientGas`](HaltReason::InsufficientGas) halt the cost is
/// the entire remaining gas, which the frame forfeits.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OperationResult {
    /// Gas consumed by the opcode.
    pub gas_cost: u64,
    /// Set when the opcode terminated the frame abnormally.
    pub halt: Option<HaltReason>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn state_accessors() {
        assert!(FrameState::Running.is_running());
        assert!(!FrameState::CompletedSuccess.is_running());
        assert_eq!(FrameState::Running.halt_reason(), None);
        assert_eq!(FrameState::CompletedSuccess.halt_reason(), None);
        assert_eq!(
            FrameState::Halted(HaltReason::StackOverflow).halt_reason(),
            Some(HaltReason::StackOverflow)
        );
    }
}
