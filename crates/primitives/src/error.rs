use core::fmt;

/// Errors returned by the fallible [`Word256`](crate::Word256) accessors.
///
/// Arithmetic never produces these: division and modulus by zero are the
/// defined value zero, and oversized shifts saturate. Only out-of-range
/// indexing and malformed byte input are reported to the caller.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum WordError {
    /// More than 32 bytes were passed to a byte-slice constructor.
    InvalidLength(usize),
    /// Byte index outside `0..=31`.
    IndexOutOfRange(usize),
    /// Bit index outside `0..=255`.
    BitIndexOutOfRange(usize),
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength(len) => {
                write!(f, "byte input of length {len} exceeds 32 bytes")
            }
            Self::IndexOutOfRange(index) => {
                write!(f, "byte index {index} out of range, expected 0..=31")
            }
            Self::BitIndexOutOfRange(index) => {
                write!(f, "bit index {index} out of range, expected 0..=255")
            }
        }
    }
}

impl core::error::Error for WordError {}
