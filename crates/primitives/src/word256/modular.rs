//! Modular arithmetic over a wide intermediate.
//!
//! `ADDMOD` and `MULMOD` are defined on the true integer sum and product,
//! not on their 256-bit truncations, so both run through an intermediate
//! wider than a word: a carry-aware 5-limb accumulator for addition and a
//! full 512-bit product for multiplication.

use super::arith::{div_rem_knuth, rem_by_limb, widening_mul_limbs};
use super::Word256;

impl Word256 {
    /// `(self + rhs) % modulus` over the integers. Zero modulus yields
    /// zero.
    ///
    /// Both operands are reduced first, so the sum fits one extra carry
    /// bit; the carry takes part in the final comparison rather than being
    /// truncated away.
    pub fn add_mod(self, rhs: Self, modulus: Self) -> Self {
        if modulus.is_zero() {
            return Self::ZERO;
        }
        let a = self.rem(modulus);
        let b = rhs.rem(modulus);
        let (sum, carry) = a.overflowing_add(b);
        // a + b < 2m, so at most one subtraction is needed. With the carry
        // set the true sum is 2^256 + sum > m, and the wrapping difference
        // is exactly the reduced value.
        if carry || sum >= modulus {
            sum.wrapping_sub(modulus)
        } else {
            sum
        }
    }

    /// `(self * rhs) % modulus` over the integers. Zero modulus or a zero
    /// factor yields zero.
    ///
    /// Computes the full 512-bit product, then reduces it with the same
    /// normalized long division used by [`div_rem`](Self::div_rem),
    /// extended to the wide dividend.
    pub fn mul_mod(self, rhs: Self, modulus: Self) -> Self {
        if modulus.is_zero() || self.is_zero() || rhs.is_zero() {
            return Self::ZERO;
        }
        let product = widening_mul_limbs(self.as_limbs(), rhs.as_limbs());
        if modulus.fits_u64() {
            Self::from_u64(rem_by_limb(&product, modulus.as_limbs()[0]))
        } else {
            let (_, remainder) = div_rem_knuth(&product, modulus.as_limbs());
            Self(remainder)
        }
    }

    /// `self ^ exp` modulo 2^256 by square-and-multiply.
    ///
    /// Only the significant bits of the exponent are visited. `exp = 0`
    /// yields one for every base, including zero.
    pub fn pow(self, exp: Self) -> Self {
        if exp.is_zero() {
            return Self::ONE;
        }
        if self.is_zero() {
            return Self::ZERO;
        }
        let mut result = Self::ONE;
        for i in (0..exp.bit_len()).rev() {
            result = result.wrapping_mul(result);
            if exp.as_limbs()[i / 64] >> (i % 64) & 1 == 1 {
                result = result.wrapping_mul(self);
            }
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_util::{to_ruint, to_ruint_wide, word};
    use super::*;
    use proptest::prelude::*;
    use ruint::aliases::U512;

    #[test]
    fn add_mod_basics() {
        let ten = Word256::from_u64(10);
        let seven = Word256::from_u64(7);
        let three = Word256::from_u64(3);
        assert_eq!(ten.add_mod(seven, three), Word256::from_u64(2));
        assert_eq!(ten.add_mod(seven, Word256::ZERO), Word256::ZERO);
        // The true sum exceeds 2^256; the carry must not be lost.
        // (2^256 - 1) mod 10 = 5, so the sum reduces to 10 mod 10 = 0.
        assert_eq!(
            Word256::MAX.add_mod(Word256::MAX, Word256::from_u64(10)),
            Word256::ZERO
        );
    }

    #[test]
    fn add_mod_carry_limb_participates() {
        // Reduced operands close to a huge modulus overflow 256 bits when
        // summed: (2 * (2^256 - 2)) mod (2^256 - 1) = 2^256 - 3.
        let a = Word256::MAX.wrapping_sub(Word256::ONE);
        assert_eq!(
            a.add_mod(a, Word256::MAX),
            Word256::MAX.wrapping_sub(Word256::from_u64(2))
        );
    }

    #[test]
    fn mul_mod_max_times_max() {
        assert_eq!(
            Word256::MAX.mul_mod(Word256::MAX, Word256::MAX),
            Word256::ZERO
        );
    }

    #[test]
    fn mul_mod_zero_cases() {
        let a = Word256::from_u64(123);
        assert_eq!(a.mul_mod(a, Word256::ZERO), Word256::ZERO);
        assert_eq!(Word256::ZERO.mul_mod(a, a), Word256::ZERO);
        assert_eq!(a.mul_mod(Word256::ZERO, a), Word256::ZERO);
    }

    #[test]
    fn pow_basics() {
        let two = Word256::from_u64(2);
        assert_eq!(two.pow(Word256::from_u64(10)), Word256::from_u64(1024));
        assert_eq!(
            two.pow(Word256::from_u64(255)),
            Word256::SIGNED_MIN,
            "2^255 is the top bit"
        );
        assert_eq!(two.pow(Word256::from_u64(256)), Word256::ZERO);
    }

    proptest! {
        #[test]
        fn add_mod_matches_reference(a in word(), b in word(), m in word()) {
            prop_assume!(!m.is_zero());
            let expected = (to_ruint_wide(a) + to_ruint_wide(b)) % to_ruint_wide(m);
            prop_assert_eq!(to_ruint_wide(a.add_mod(b, m)), expected);
        }

        #[test]
        fn mul_mod_matches_reference(a in word(), b in word(), m in word()) {
            prop_assume!(!m.is_zero());
            let wide: U512 = to_ruint(a).widening_mul(to_ruint(b));
            let expected = wide % to_ruint_wide(m);
            prop_assert_eq!(to_ruint_wide(a.mul_mod(b, m)), expected);
        }

        #[test]
        fn pow_laws(a in word(), e in word()) {
            prop_assert_eq!(a.pow(Word256::ZERO), Word256::ONE);
            prop_assert_eq!(a.pow(Word256::ONE), a);
            if !e.is_zero() {
                prop_assert_eq!(Word256::ZERO.pow(e), Word256::ZERO);
            }
        }

        #[test]
        fn pow_matches_reference(a in word(), e in 0u64..512) {
            prop_assert_eq!(
                to_ruint(a.pow(Word256::from_u64(e))),
                to_ruint(a).pow(ruint::aliases::U256::from(e))
            );
        }
    }
}
