//! The code object executed by a frame.

use alloc::vec::Vec;
use bytes::Bytes;

/// Executable code plus the container metadata the dispatch layer needs.
///
/// Legacy code has `eof_version == 0`; EOF containers carry their version
/// and the sub-containers that `EOFCREATE` deploys from. Reads past the
/// end of code yield zero bytes, which is how the implicit trailing `STOP`
/// and zero-padded `PUSH` immediates fall out.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Code {
    bytes: Bytes,
    eof_version: u8,
    sub_containers: Vec<Bytes>,
}

impl Code {
    /// Creates a legacy (non-EOF) code object.
    pub fn new_legacy(bytes: Bytes) -> Self {
        Self {
            bytes,
            eof_version: 0,
            sub_containers: Vec::new(),
        }
    }

    /// Creates an EOF code object with the given container version and
    /// sub-containers.
    pub fn new_eof(bytes: Bytes, eof_version: u8, sub_containers: Vec<Bytes>) -> Self {
        debug_assert!(eof_version != 0, "EOF version 0 denotes legacy code");
        Self {
            bytes,
            eof_version,
            sub_containers,
        }
    }

    /// Returns the EOF container version, 0 for legacy code.
    #[inline]
    pub fn eof_version(&self) -> u8 {
        self.eof_version
    }

    /// Returns whether this code is an EOF container.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.eof_version != 0
    }

    /// Returns the raw code bytes.
    #[inline]
    pub fn bytes(&self) -> &Bytes {
        &self.bytes
    }

    /// Returns the code length in bytes.
    #[inline]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Returns whether the code is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Reads the byte at `pc`, yielding zero past the end of code.
    #[inline]
    pub fn read_u8(&self, pc: usize) -> u8 {
        self.bytes.get(pc).copied().unwrap_or(0)
    }

    /// Reads up to `len` bytes starting at `pc`, truncated at the end of
    /// code. Callers zero-pad when they need a fixed width.
    #[inline]
    pub fn read_slice(&self, pc: usize, len: usize) -> &[u8] {
        let start = pc.min(self.bytes.len());
        let end = pc.saturating_add(len).min(self.bytes.len());
        &self.bytes[start..end]
    }

    /// Returns the EOF sub-container at `index`, if present.
    #[inline]
    pub fn sub_container(&self, index: usize) -> Option<&Bytes> {
        self.sub_containers.get(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_past_the_end_are_zero() {
        let code = Code::new_legacy(Bytes::from_static(&[0x60, 0x01]));
        assert_eq!(code.read_u8(0), 0x60);
        assert_eq!(code.read_u8(1), 0x01);
        assert_eq!(code.read_u8(2), 0x00);
        assert_eq!(code.read_u8(usize::MAX), 0x00);
    }

    #[test]
    fn read_slice_truncates() {
        let code = Code::new_legacy(Bytes::from_static(&[1, 2, 3]));
        assert_eq!(code.read_slice(0, 3), &[1, 2, 3]);
        assert_eq!(code.read_slice(1, 10), &[2, 3]);
        assert_eq!(code.read_slice(3, 2), &[] as &[u8]);
        assert_eq!(code.read_slice(usize::MAX, 2), &[] as &[u8]);
    }

    #[test]
    fn eof_metadata() {
        let legacy = Code::new_legacy(Bytes::new());
        assert!(!legacy.is_eof());
        assert_eq!(legacy.eof_version(), 0);
        assert_eq!(legacy.sub_container(0), None);

        let sub = Bytes::from_static(&[0xfe]);
        let eof = Code::new_eof(Bytes::new(), 1, alloc::vec![sub.clone()]);
        assert!(eof.is_eof());
        assert_eq!(eof.eof_version(), 1);
        assert_eq!(eof.sub_container(0), Some(&sub));
        assert_eq!(eof.sub_container(1), None);
    }
}
