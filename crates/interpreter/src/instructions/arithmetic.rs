use crate::{frame::Frame, gas};

/// Implements the ADD instruction - wrapping 256-bit addition.
pub(crate) fn add(frame: &mut Frame) {
    gas!(frame, gas::VERYLOW);
    popn_top!([op1], op2, frame);
    *op2 = op1.wrapping_add(*op2);
}

/// Implements the MUL instruction - wrapping 256-bit multiplication.
pub(crate) fn mul(frame: &mut Frame) {
    gas!(frame, gas::LOW);
    popn_top!([op1], op2, frame);
    *op2 = op1.wrapping_mul(*op2);
}

/// Implements the SUB instruction - wrapping 256-bit subtraction.
pub(crate) fn sub(frame: &mut Frame) {
    gas!(frame, gas::VERYLOW);
    popn_top!([op1], op2, frame);
    *op2 = op1.wrapping_sub(*op2);
}

/// Implements the DIV instruction. A zero divisor yields zero, never a
/// halt.
pub(crate) fn div(frame: &mut Frame) {
    gas!(frame, gas::LOW);
    popn_top!([op1], op2, frame);
    *op2 = op1.div(*op2);
}

/// Implements the SDIV instruction - signed division over the same bit
/// patterns.
pub(crate) fn sdiv(frame: &mut Frame) {
    gas!(frame, gas::LOW);
    popn_top!([op1], op2, frame);
    *op2 = op1.sdiv(*op2);
}

/// Implements the MOD instruction. A zero modulus yields zero.
pub(crate) fn rem(frame: &mut Frame) {
    gas!(frame, gas::LOW);
    popn_top!([op1], op2, frame);
    *op2 = op1.rem(*op2);
}

/// Implements the SMOD instruction - signed remainder, sign of the
/// dividend.
pub(crate) fn smod(frame: &mut Frame) {
    gas!(frame, gas::LOW);
    popn_top!([op1], op2, frame);
    *op2 = op1.smod(*op2);
}

/// Implements the ADDMOD instruction - addition over the integers reduced
/// by the third operand.
pub(crate) fn addmod(frame: &mut Frame) {
    gas!(frame, gas::MID);
    popn_top!([op1, op2], op3, frame);
    *op3 = op1.add_mod(op2, *op3);
}

/// Implements the MULMOD instruction - multiplication over the integers
/// reduced by the third operand.
pub(crate) fn mulmod(frame: &mut Frame) {
    gas!(frame, gas::MID);
    popn_top!([op1, op2], op3, frame);
    *op3 = op1.mul_mod(op2, *op3);
}

/// Implements the EXP instruction.
///
/// The cost scales with the significant bytes of the exponent and is
/// charged before the computation; a deficit halts without pushing.
pub(crate) fn exp(frame: &mut Frame) {
    popn_top!([op1], op2, frame);
    gas_or_fail!(frame, gas::exp_cost(*op2));
    *op2 = op1.pow(*op2);
}

/// Implements the SIGNEXTEND instruction, extending the sign of the low
/// `k + 1` bytes across the whole word.
pub(crate) fn signextend(frame: &mut Frame) {
    gas!(frame, gas::LOW);
    popn_top!([ext], x, frame);
    *x = x.sign_extend(ext);
}
