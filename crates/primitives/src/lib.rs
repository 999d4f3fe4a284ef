//! # wordvm-primitives
//!
//! 256-bit machine word for EVM-style execution.
//!
//! The only value type exported here is [`Word256`], an immutable 256-bit
//! unsigned integer with the signed reinterpretations the EVM opcodes need
//! layered on top as explicit operations. Division by zero and friends are
//! defined values, never errors, matching EVM semantics.
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]

mod error;
mod word256;

pub use error::WordError;
pub use word256::Word256;
