use crate::{frame::Frame, gas};
use primitives::Word256;

/// Implements the POP instruction.
pub(crate) fn pop(frame: &mut Frame) {
    gas!(frame, gas::BASE);
    popn!([_value], frame);
}

/// Implements the PUSH0 instruction.
pub(crate) fn push0(frame: &mut Frame) {
    gas!(frame, gas::BASE);
    push!(frame, Word256::ZERO);
}

/// Implements the PUSH1..=PUSH32 instructions.
///
/// Reads an `N`-byte big-endian immediate. Immediates truncated by the end
/// of code are zero-padded on the right, per EVM convention.
pub(crate) fn push<const N: usize>(frame: &mut Frame) {
    gas!(frame, gas::VERYLOW);
    let immediate = frame.code.read_slice(frame.pc(), N);
    let mut word = [0u8; 32];
    word[32 - N..32 - N + immediate.len()].copy_from_slice(immediate);
    push!(frame, Word256::from_be_bytes(word));
    frame.advance(N);
}

/// Implements the DUP1..=DUP16 instructions.
pub(crate) fn dup<const N: usize>(frame: &mut Frame) {
    gas!(frame, gas::VERYLOW);
    if let Err(err) = frame.stack.dup(N) {
        frame.halt_stack(err);
    }
}

/// Implements the SWAP1..=SWAP16 instructions.
pub(crate) fn swap<const N: usize>(frame: &mut Frame) {
    gas!(frame, gas::VERYLOW);
    if let Err(err) = frame.stack.swap(N) {
        frame.halt_stack(err);
    }
}
