//! Call-family opcodes.
//!
//! Deployment and calling are the outer layers' business; what matters
//! here is the stack contract. Both opcodes pop their declared inputs and
//! push the single zero word that stands for the failure output, which is
//! what a frame with no call host observes.

use crate::{frame::Frame, gas, HaltReason};
use primitives::Word256;

/// Implements the stack interaction of the EOFCREATE instruction.
///
/// The immediate byte names a sub-container of the current EOF code;
/// naming a missing container is invalid. Pops value, salt, input offset
/// and input length, pushes the zero (failure) address.
pub(crate) fn eofcreate(frame: &mut Frame) {
    require_eof!(frame);
    gas!(frame, gas::EOF_CREATE_GAS);
    let index = frame.code.read_u8(frame.pc()) as usize;
    frame.advance(1);
    if frame.code.sub_container(index).is_none() {
        frame.halt(HaltReason::InvalidOperation);
        return;
    }
    popn!([_value, _salt, _input_offset, _input_len], frame);
    push!(frame, Word256::ZERO);
}

/// Implements the stack interaction of the EXTCALL instruction.
///
/// Pops target address, input offset, input length and value, pushes the
/// zero (failure) status. Account and memory costs belong to the call
/// layer.
pub(crate) fn extcall(frame: &mut Frame) {
    require_eof!(frame);
    popn!([_target, _input_offset, _input_len, _value], frame);
    push!(frame, Word256::ZERO);
}
