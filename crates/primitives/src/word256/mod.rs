//! The 256-bit machine word.

mod arith;
mod bits;
mod cmp;
mod modular;

use crate::WordError;
use core::fmt;

/// Fixed 256-bit unsigned machine word.
///
/// Stored as four 64-bit limbs in little-endian limb order: limb 0 holds
/// bits 0–63, limb 3 holds bits 192–255. The public byte view is always
/// 32 bytes big-endian. Values are immutable; every operation consumes its
/// operands by value and returns a new word.
///
/// Arithmetic wraps modulo 2^256. Signed semantics (two's complement over
/// the same bit pattern) are available through explicit operations such as
/// [`sdiv`](Self::sdiv) and [`cmp_signed`](Self::cmp_signed).
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(transparent)]
pub struct Word256([u64; 4]);

impl Word256 {
    /// The number of bits in a word.
    pub const BITS: usize = 256;
    /// The number of bytes in the canonical byte view.
    pub const BYTES: usize = 32;
    /// The number of 64-bit limbs.
    pub const LIMBS: usize = 4;

    /// The value `0`.
    pub const ZERO: Self = Self([0; 4]);
    /// The value `1`.
    pub const ONE: Self = Self([1, 0, 0, 0]);
    /// The unsigned maximum, `2^256 - 1`. All bits set.
    pub const MAX: Self = Self([u64::MAX; 4]);
    /// Two's-complement `-1`. Same bit pattern as [`MAX`](Self::MAX),
    /// differing interpretation.
    pub const MINUS_ONE: Self = Self::MAX;
    /// The most negative signed value, `-2^255`. Only the top bit set.
    pub const SIGNED_MIN: Self = Self([0, 0, 0, 0x8000_0000_0000_0000]);

    /// Creates a word from four limbs in little-endian limb order.
    #[inline]
    pub const fn from_limbs(limbs: [u64; 4]) -> Self {
        Self(limbs)
    }

    /// Returns the limbs in little-endian limb order.
    #[inline]
    pub const fn as_limbs(&self) -> &[u64; 4] {
        &self.0
    }

    /// Consumes the word and returns its limbs.
    #[inline]
    pub const fn into_limbs(self) -> [u64; 4] {
        self.0
    }

    /// Creates a word from a `u64`, zero-extending into the upper limbs.
    #[inline]
    pub const fn from_u64(value: u64) -> Self {
        Self([value, 0, 0, 0])
    }

    /// Creates a word from a `u32`, zero-extending into the upper limbs.
    #[inline]
    pub const fn from_u32(value: u32) -> Self {
        Self::from_u64(value as u64)
    }

    /// Creates a word from a single byte, zero-extending.
    #[inline]
    pub const fn from_u8(value: u8) -> Self {
        Self::from_u64(value as u64)
    }

    /// Unpacks a 32-byte big-endian array.
    #[inline]
    pub fn from_be_bytes(bytes: [u8; 32]) -> Self {
        let mut limbs = [0u64; 4];
        for (limb, chunk) in limbs.iter_mut().zip(bytes.rchunks_exact(8)) {
            *limb = u64::from_be_bytes(chunk.try_into().unwrap());
        }
        Self(limbs)
    }

    /// Unpacks up to 32 big-endian bytes, zero-padding on the high side.
    ///
    /// This is the canonical wire decoder: calldata words, storage keys and
    /// RLP scalars all arrive as at most 32 big-endian bytes. Inputs longer
    /// than 32 bytes fail with [`WordError::InvalidLength`].
    pub fn from_be_slice(slice: &[u8]) -> Result<Self, WordError> {
        if slice.len() > Self::BYTES {
            return Err(WordError::InvalidLength(slice.len()));
        }
        let mut bytes = [0u8; 32];
        bytes[Self::BYTES - slice.len()..].copy_from_slice(slice);
        Ok(Self::from_be_bytes(bytes))
    }

    /// Packs the word into its canonical 32-byte big-endian form.
    ///
    /// Always exactly 32 bytes, zero-padded on the high side for small
    /// magnitudes.
    #[inline]
    pub fn to_be_bytes(self) -> [u8; 32] {
        let mut bytes = [0u8; 32];
        for (chunk, limb) in bytes.chunks_exact_mut(8).zip(self.0.iter().rev()) {
            chunk.copy_from_slice(&limb.to_be_bytes());
        }
        bytes
    }

    /// Returns the big-endian byte at `index`, where index 0 is the most
    /// significant byte. Fails with [`WordError::IndexOutOfRange`] outside
    /// `0..=31`.
    #[inline]
    pub const fn byte(&self, index: usize) -> Result<u8, WordError> {
        if index >= Self::BYTES {
            return Err(WordError::IndexOutOfRange(index));
        }
        // Big-endian byte 0 lives in the top of limb 3.
        let limb = self.0[3 - index / 8];
        let shift = 56 - 8 * (index % 8);
        Ok((limb >> shift) as u8)
    }

    /// Returns whether the word is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        let limbs = &self.0;
        limbs[0] == 0 && limbs[1] == 0 && limbs[2] == 0 && limbs[3] == 0
    }

    /// Returns whether the value fits in a `u64`.
    #[inline]
    pub const fn fits_u64(&self) -> bool {
        self.0[1] == 0 && self.0[2] == 0 && self.0[3] == 0
    }

    /// Returns whether the value fits in a `u32`.
    #[inline]
    pub const fn fits_u32(&self) -> bool {
        self.fits_u64() && self.0[0] >> 32 == 0
    }

    /// Converts to `u64`, saturating to `u64::MAX` when the value does not
    /// fit. Used by opcodes that take an offset or length which must fit a
    /// native index.
    #[inline]
    pub const fn to_u64_saturating(self) -> u64 {
        if self.fits_u64() {
            self.0[0]
        } else {
            u64::MAX
        }
    }

    /// Converts to `u32`, saturating to `u32::MAX` when the value does not
    /// fit.
    #[inline]
    pub const fn to_u32_saturating(self) -> u32 {
        if self.fits_u32() {
            self.0[0] as u32
        } else {
            u32::MAX
        }
    }
}

impl From<bool> for Word256 {
    #[inline]
    fn from(value: bool) -> Self {
        Self::from_u64(value as u64)
    }
}

impl From<u8> for Word256 {
    #[inline]
    fn from(value: u8) -> Self {
        Self::from_u8(value)
    }
}

impl From<u32> for Word256 {
    #[inline]
    fn from(value: u32) -> Self {
        Self::from_u32(value)
    }
}

impl From<u64> for Word256 {
    #[inline]
    fn from(value: u64) -> Self {
        Self::from_u64(value)
    }
}

impl From<u128> for Word256 {
    #[inline]
    fn from(value: u128) -> Self {
        Self([value as u64, (value >> 64) as u64, 0, 0])
    }
}

impl fmt::LowerHex for Word256 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            f.write_str("0x")?;
        }
        for limb in self.0.iter().rev() {
            write!(f, "{limb:016x}")?;
        }
        Ok(())
    }
}

impl fmt::Display for Word256 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#x}", self)
    }
}

impl fmt::Debug for Word256 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

// The 32-byte big-endian view is the canonical wire representation, so
// serde round-trips through it rather than exposing the limb layout.
#[cfg(feature = "serde")]
impl serde::Serialize for Word256 {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serde::Serialize::serialize(&self.to_be_bytes(), serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Word256 {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        <[u8; 32] as serde::Deserialize>::deserialize(deserializer).map(Self::from_be_bytes)
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn constants() {
        assert!(Word256::ZERO.is_zero());
        assert_eq!(Word256::ONE.to_u64_saturating(), 1);
        assert_eq!(Word256::MAX, Word256::MINUS_ONE);
        assert_eq!(Word256::MAX.to_be_bytes(), [0xff; 32]);
        assert_eq!(
            Word256::SIGNED_MIN.to_be_bytes()[0], 0x80,
            "only the top bit of the most significant byte is set"
        );
    }

    #[test]
    fn be_bytes_layout() {
        let w = Word256::from_u64(0x1122_3344_5566_7788);
        let bytes = w.to_be_bytes();
        assert_eq!(&bytes[..24], &[0u8; 24][..]);
        assert_eq!(
            &bytes[24..],
            &[0x11, 0x22, 0x33, 0x44, 0x55, 0x66, 0x77, 0x88]
        );
    }

    #[test]
    fn from_be_slice_pads_on_the_high_side() {
        let w = Word256::from_be_slice(&[0x7f]).unwrap();
        assert_eq!(w, Word256::from_u8(0x7f));

        let w = Word256::from_be_slice(&[0x01, 0x00]).unwrap();
        assert_eq!(w, Word256::from_u64(0x100));

        assert_eq!(Word256::from_be_slice(&[]).unwrap(), Word256::ZERO);
        assert_eq!(
            Word256::from_be_slice(&[0u8; 33]),
            Err(WordError::InvalidLength(33))
        );
    }

    #[test]
    fn byte_indexing_is_big_endian() {
        let mut bytes = [0u8; 32];
        for (i, b) in bytes.iter_mut().enumerate() {
            *b = i as u8;
        }
        let w = Word256::from_be_bytes(bytes);
        for i in 0..32 {
            assert_eq!(w.byte(i), Ok(i as u8));
        }
        assert_eq!(w.byte(32), Err(WordError::IndexOutOfRange(32)));
    }

    #[test]
    fn saturating_conversions() {
        assert_eq!(Word256::from_u64(7).to_u64_saturating(), 7);
        assert_eq!(Word256::MAX.to_u64_saturating(), u64::MAX);
        assert_eq!(Word256::from_u64(u64::MAX).to_u32_saturating(), u32::MAX);
        assert_eq!(Word256::from_u32(7).to_u32_saturating(), 7);
        assert!(!Word256::from_u64(1 << 32).fits_u32());
        assert!(Word256::from_u64(1 << 32).fits_u64());
        assert!(!Word256::from_limbs([0, 1, 0, 0]).fits_u64());
    }

    #[test]
    fn hex_formatting() {
        assert_eq!(
            Word256::from_u64(0xdead_beef).to_string(),
            "0x00000000000000000000000000000000000000000000000000000000deadbeef"
        );
    }

    proptest! {
        #[test]
        fn bytes_round_trip(w in super::test_util::word()) {
            prop_assert_eq!(Word256::from_be_bytes(w.to_be_bytes()), w);
            prop_assert_eq!(Word256::from_be_slice(&w.to_be_bytes()).unwrap(), w);
        }

        #[test]
        fn byte_matches_byte_view(w in super::test_util::word(), index in 0usize..32) {
            prop_assert_eq!(w.byte(index).unwrap(), w.to_be_bytes()[index]);
        }
    }
}
