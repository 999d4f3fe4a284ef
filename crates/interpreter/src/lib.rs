//! # wordvm-interpreter
//!
//! Operand stack and opcode dispatch over [`primitives::Word256`].
//!
//! A [`Frame`] owns the bounded operand stack, the gas counter and the
//! code object for one execution context. Opcodes are pure transformers
//! keyed by byte: each pops its declared inputs, applies a word operation
//! or an input-data read, pushes the result and reports an
//! [`OperationResult`]. Structural failures (stack bounds, gas deficit,
//! invalid opcode) become [`HaltReason`]s; arithmetic failures the EVM
//! swallows (division by zero, oversized shifts) are the value zero and
//! never halt.
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]

extern crate alloc;

pub mod code;
pub mod frame;
pub mod gas;
mod instructions;
pub mod opcode;
pub mod result;
pub mod stack;

pub use bytes::Bytes;
pub use code::Code;
pub use frame::Frame;
pub use gas::Gas;
pub use opcode::{OpCode, OpCodeInfo, OPCODE_INFO};
pub use primitives::{Word256, WordError};
pub use result::{FrameState, HaltReason, OperationResult};
pub use stack::{Stack, StackError, STACK_LIMIT};
