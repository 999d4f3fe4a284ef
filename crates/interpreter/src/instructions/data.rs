use crate::{frame::Frame, gas};
use primitives::Word256;

/// Reads a 32-byte word from `data` at `offset`, zero-padding on the right
/// when the data is shorter. Offsets past the end read as all zeros.
fn read_word(data: &[u8], offset: usize) -> Word256 {
    let mut word = [0u8; 32];
    if offset < data.len() {
        let count = 32.min(data.len() - offset);
        word[..count].copy_from_slice(&data[offset..offset + count]);
    }
    Word256::from_be_bytes(word)
}

/// Implements the CALLDATALOAD instruction.
///
/// Loads 32 bytes of input data from the popped offset. Oversized offsets
/// saturate and read as zero.
pub(crate) fn calldataload(frame: &mut Frame) {
    gas!(frame, gas::VERYLOW);
    popn_top!([], offset_ptr, frame);
    let offset = as_usize_saturated!(offset_ptr);
    *offset_ptr = read_word(&frame.input, offset);
}

/// Implements the RETURNDATASIZE instruction.
pub(crate) fn returndatasize(frame: &mut Frame) {
    gas!(frame, gas::BASE);
    push!(frame, Word256::from(frame.return_data.len() as u64));
}

/// Implements the RETURNDATALOAD instruction.
///
/// Valid only inside an EOF container; behaves as CALLDATALOAD against the
/// return data buffer, with out-of-range offsets reading as zero.
pub(crate) fn returndataload(frame: &mut Frame) {
    require_eof!(frame);
    gas!(frame, gas::VERYLOW);
    popn_top!([], offset_ptr, frame);
    let offset = as_usize_saturated!(offset_ptr);
    *offset_ptr = read_word(&frame.return_data, offset);
}
