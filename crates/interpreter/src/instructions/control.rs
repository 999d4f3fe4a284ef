use crate::{frame::Frame, HaltReason};

/// Implements the STOP instruction, terminating the frame successfully.
pub(crate) fn stop(frame: &mut Frame) {
    frame.complete_success();
}

/// Implements the INVALID instruction.
pub(crate) fn invalid(frame: &mut Frame) {
    frame.halt(HaltReason::InvalidOperation);
}

/// Fallback for unassigned opcode bytes.
pub(crate) fn unknown(frame: &mut Frame) {
    frame.halt(HaltReason::InvalidOperation);
}
