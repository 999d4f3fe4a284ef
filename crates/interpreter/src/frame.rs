//! One execution frame: stack, gas, code and the step loop.

use crate::{
    code::Code,
    gas::Gas,
    opcode,
    result::{FrameState, HaltReason, OperationResult},
    stack::{Stack, StackError},
};
use bytes::Bytes;

/// A single execution frame.
///
/// Owns the operand stack and the gas counter for one code object; nothing
/// here is shared or persisted across frames. Execution is strictly
/// synchronous: [`step`](Self::step) dispatches one opcode,
/// [`run`](Self::run) drives until the frame leaves
/// [`FrameState::Running`].
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Frame {
    /// Code being executed.
    pub code: Code,
    /// Gas remaining for this frame.
    pub gas: Gas,
    /// The operand stack.
    pub stack: Stack,
    /// Call data for the current execution context.
    pub input: Bytes,
    /// Return data of the most recent sub-call.
    pub return_data: Bytes,
    /// Lifecycle state.
    pub state: FrameState,
    /// Program counter into `code`.
    pc: usize,
}

impl Frame {
    /// Creates a frame over `code` with the given call data and gas limit.
    pub fn new(code: Code, input: Bytes, gas_limit: u64) -> Self {
        Self {
            code,
            gas: Gas::new(gas_limit),
            stack: Stack::new(),
            input,
            return_data: Bytes::new(),
            state: FrameState::Running,
            pc: 0,
        }
    }

    /// Returns the current program counter.
    #[inline]
    pub fn pc(&self) -> usize {
        self.pc
    }

    /// Advances the program counter past `n` immediate bytes.
    #[inline]
    pub fn advance(&mut self, n: usize) {
        self.pc += n;
    }

    /// Terminates the frame abnormally.
    #[inline]
    pub fn halt(&mut self, reason: HaltReason) {
        self.state = FrameState::Halted(reason);
    }

    /// Terminates the frame with the halt reason for a stack condition.
    #[inline]
    pub fn halt_stack(&mut self, err: StackError) {
        self.halt(err.into());
    }

    /// Terminates the frame on a gas deficit, forfeiting the remaining
    /// gas.
    #[inline]
    pub fn halt_insufficient_gas(&mut self) {
        self.gas.spend_all();
        self.halt(HaltReason::InsufficientGas);
    }

    /// Terminates the frame successfully.
    #[inline]
    pub fn complete_success(&mut self) {
        self.state = FrameState::CompletedSuccess;
    }

    /// Executes the opcode at the current program counter.
    ///
    /// Reads past the end of code yield zero, which is `STOP`; a frame
    /// that runs off its code completes successfully.
    pub fn step(&mut self) -> OperationResult {
        let spent_before = self.gas.spent();
        let opcode = self.code.read_u8(self.pc);
        self.pc += 1;
        opcode::instruction(opcode)(self);
        OperationResult {
            gas_cost: self.gas.spent() - spent_before,
            halt: self.state.halt_reason(),
        }
    }

    /// Runs until the frame terminates, returning the result of the last
    /// opcode executed.
    pub fn run(&mut self) -> OperationResult {
        let mut result = OperationResult::default();
        while self.state.is_running() {
            result = self.step();
        }
        result
    }
}
