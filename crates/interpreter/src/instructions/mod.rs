//! Per-opcode instruction implementations.
//!
//! Every instruction follows the same recipe: charge gas, pop the declared
//! inputs, compute a [`Word256`](primitives::Word256) result, push it.
//! Failures are signalled by halting the frame, never by panicking.

#[macro_use]
pub(crate) mod macros;

pub(crate) mod arithmetic;
pub(crate) mod bitwise;
pub(crate) mod contract;
pub(crate) mod control;
pub(crate) mod data;
pub(crate) mod stack_ops;
