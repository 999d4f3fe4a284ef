//! Unsigned and signed comparison.

use super::Word256;
use core::cmp::Ordering;

impl Word256 {
    /// Returns whether the high bit is set, i.e. the value is negative
    /// under two's-complement interpretation.
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0[3] >> 63 == 1
    }

    /// Compares two words as two's-complement signed integers.
    ///
    /// When the signs differ the negative operand is smaller; otherwise the
    /// raw bit patterns compare identically to the signed values.
    #[inline]
    pub fn cmp_signed(&self, other: &Self) -> Ordering {
        match (self.is_negative(), other.is_negative()) {
            (true, false) => Ordering::Less,
            (false, true) => Ordering::Greater,
            _ => self.cmp(other),
        }
    }
}

impl Ord for Word256 {
    /// Unsigned comparison, most significant limb first.
    fn cmp(&self, other: &Self) -> Ordering {
        for i in (0..Self::LIMBS).rev() {
            match self.0[i].cmp(&other.0[i]) {
                Ordering::Equal => {}
                ord => return ord,
            }
        }
        Ordering::Equal
    }
}

impl PartialOrd for Word256 {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_util::{to_ruint, word};
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn unsigned_ordering_ignores_sign() {
        // -1 is the unsigned maximum.
        assert!(Word256::MINUS_ONE > Word256::ONE);
        assert!(Word256::SIGNED_MIN > Word256::from_u64(u64::MAX));
    }

    #[test]
    fn signed_ordering() {
        let minus_two = Word256::from_u64(2).wrapping_neg();
        assert_eq!(
            Word256::MINUS_ONE.cmp_signed(&Word256::ONE),
            Ordering::Less
        );
        assert_eq!(
            Word256::ONE.cmp_signed(&Word256::MINUS_ONE),
            Ordering::Greater
        );
        assert_eq!(minus_two.cmp_signed(&Word256::MINUS_ONE), Ordering::Less);
        assert_eq!(
            Word256::SIGNED_MIN.cmp_signed(&Word256::MINUS_ONE),
            Ordering::Less
        );
        assert_eq!(Word256::ZERO.cmp_signed(&Word256::ZERO), Ordering::Equal);
    }

    proptest! {
        #[test]
        fn ordering_matches_reference(a in word(), b in word()) {
            prop_assert_eq!(a.cmp(&b), to_ruint(a).cmp(&to_ruint(b)));
        }

        #[test]
        fn signed_ordering_is_antisymmetric(a in word(), b in word()) {
            prop_assert_eq!(a.cmp_signed(&b), b.cmp_signed(&a).reverse());
        }
    }
}
