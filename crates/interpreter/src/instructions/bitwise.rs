use crate::{frame::Frame, gas};
use core::cmp::Ordering;
use primitives::Word256;

/// Implements the LT instruction - unsigned less-than comparison.
pub(crate) fn lt(frame: &mut Frame) {
    gas!(frame, gas::VERYLOW);
    popn_top!([op1], op2, frame);
    *op2 = Word256::from(op1 < *op2);
}

/// Implements the GT instruction - unsigned greater-than comparison.
pub(crate) fn gt(frame: &mut Frame) {
    gas!(frame, gas::VERYLOW);
    popn_top!([op1], op2, frame);
    *op2 = Word256::from(op1 > *op2);
}

/// Implements the SLT instruction - signed less-than comparison.
pub(crate) fn slt(frame: &mut Frame) {
    gas!(frame, gas::VERYLOW);
    popn_top!([op1], op2, frame);
    *op2 = Word256::from(op1.cmp_signed(op2) == Ordering::Less);
}

/// Implements the SGT instruction - signed greater-than comparison.
pub(crate) fn sgt(frame: &mut Frame) {
    gas!(frame, gas::VERYLOW);
    popn_top!([op1], op2, frame);
    *op2 = Word256::from(op1.cmp_signed(op2) == Ordering::Greater);
}

/// Implements the EQ instruction.
pub(crate) fn eq(frame: &mut Frame) {
    gas!(frame, gas::VERYLOW);
    popn_top!([op1], op2, frame);
    *op2 = Word256::from(op1 == *op2);
}

/// Implements the ISZERO instruction.
pub(crate) fn iszero(frame: &mut Frame) {
    gas!(frame, gas::VERYLOW);
    popn_top!([], op1, frame);
    *op1 = Word256::from(op1.is_zero());
}

/// Implements the AND instruction.
pub(crate) fn bitand(frame: &mut Frame) {
    gas!(frame, gas::VERYLOW);
    popn_top!([op1], op2, frame);
    *op2 = op1 & *op2;
}

/// Implements the OR instruction.
pub(crate) fn bitor(frame: &mut Frame) {
    gas!(frame, gas::VERYLOW);
    popn_top!([op1], op2, frame);
    *op2 = op1 | *op2;
}

/// Implements the XOR instruction.
pub(crate) fn bitxor(frame: &mut Frame) {
    gas!(frame, gas::VERYLOW);
    popn_top!([op1], op2, frame);
    *op2 = op1 ^ *op2;
}

/// Implements the NOT instruction.
pub(crate) fn not(frame: &mut Frame) {
    gas!(frame, gas::VERYLOW);
    popn_top!([], op1, frame);
    *op1 = !*op1;
}

/// Implements the CLZ instruction - count leading zeros.
pub(crate) fn clz(frame: &mut Frame) {
    gas!(frame, gas::LOW);
    popn_top!([], op1, frame);
    *op1 = Word256::from(op1.leading_zeros() as u64);
}

/// Implements the BYTE instruction.
///
/// Extracts the big-endian byte at the given index into the least
/// significant byte of the result; indices past 31 yield zero.
pub(crate) fn byte(frame: &mut Frame) {
    gas!(frame, gas::VERYLOW);
    popn_top!([op1], op2, frame);
    let index = as_usize_saturated!(op1);
    *op2 = match op2.byte(index) {
        Ok(byte) => Word256::from(byte),
        Err(_) => Word256::ZERO,
    };
}

/// Implements the SHL instruction. Shifts of 256 or more yield zero.
pub(crate) fn shl(frame: &mut Frame) {
    gas!(frame, gas::VERYLOW);
    popn_top!([op1], op2, frame);
    let shift = as_usize_saturated!(op1);
    *op2 = op2.wrapping_shl(shift);
}

/// Implements the SHR instruction. Shifts of 256 or more yield zero.
pub(crate) fn shr(frame: &mut Frame) {
    gas!(frame, gas::VERYLOW);
    popn_top!([op1], op2, frame);
    let shift = as_usize_saturated!(op1);
    *op2 = op2.wrapping_shr(shift);
}

/// Implements the SAR instruction - arithmetic shift, vacated bits take
/// the sign.
pub(crate) fn sar(frame: &mut Frame) {
    gas!(frame, gas::VERYLOW);
    popn_top!([op1], op2, frame);
    let shift = as_usize_saturated!(op1);
    *op2 = op2.arithmetic_shr(shift);
}
