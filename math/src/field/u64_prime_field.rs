use super::element::FieldElement;
use super::errors::FieldError;
use super::traits::IsField;

/// A prime field with a compile-time 64-bit modulus. Arithmetic goes through
/// `u128` intermediates, so any odd prime below 2^64 works without overflow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct U64PrimeField<const MODULUS: u64>;
pub type U64FieldElement<const MODULUS: u64> = FieldElement<U64PrimeField<MODULUS>>;

impl<const MODULUS: u64> IsField for U64PrimeField<MODULUS> {
    type BaseType = u64;

    fn add(a: &u64, b: &u64) -> u64 {
        ((*a as u128 + *b as u128) % MODULUS as u128) as u64
    }

    fn sub(a: &u64, b: &u64) -> u64 {
        (((*a as u128 + MODULUS as u128) - *b as u128) % MODULUS as u128) as u64
    }

    fn neg(a: &u64) -> u64 {
        (MODULUS - a % MODULUS) % MODULUS
    }

    fn mul(a: &u64, b: &u64) -> u64 {
        ((*a as u128 * *b as u128) % MODULUS as u128) as u64
    }

    fn inv(a: &u64) -> Result<u64, FieldError> {
        if a % MODULUS == 0 {
            return Err(FieldError::Inverse);
        }
        // Fermat's little theorem: a^(p - 2) = a^(-1) mod p.
        Ok(Self::pow(a, MODULUS - 2))
    }

    fn eq(a: &u64, b: &u64) -> bool {
        Self::representative(a) == Self::representative(b)
    }

    fn zero() -> u64 {
        0
    }

    fn one() -> u64 {
        1
    }

    fn from_u64(x: u64) -> u64 {
        x % MODULUS
    }

    fn representative(a: &u64) -> u64 {
        a % MODULUS
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ORDER: u64 = 13;
    type FE = FieldElement<U64PrimeField<ORDER>>;

    #[test]
    fn two_plus_one_is_three() {
        assert_eq!(FE::from(2) + FE::from(1), FE::from(3));
    }

    #[test]
    fn order_minus_1_plus_1_is_0() {
        assert_eq!(FE::from(ORDER - 1) + FE::from(1), FE::from(0));
    }

    #[test]
    fn mul_order_minus_1() {
        let a = FE::from(ORDER - 1);
        assert_eq!(&a * &a, FE::from(1));
    }

    #[test]
    fn inv_zero_returns_error() {
        assert_eq!(FE::zero().inv(), Err(FieldError::Inverse));
    }

    #[test]
    fn inv_2_times_2_is_1() {
        let two = FE::from(2);
        assert_eq!(two.inv().unwrap() * two, FE::one());
    }

    #[test]
    fn pow_2_3_is_8() {
        assert_eq!(FE::from(2).pow(3), FE::from(8));
    }

    #[test]
    fn div_4_2_is_2() {
        assert_eq!(FE::from(4) / FE::from(2), FE::from(2));
    }

    #[test]
    fn div_4_3_times_3_is_4() {
        assert_eq!(FE::from(4) / FE::from(3) * FE::from(3), FE::from(4));
    }

    #[test]
    fn two_plus_its_additive_inv_is_0() {
        let two = FE::from(2);
        assert_eq!(&two + (-&two), FE::zero());
    }

    #[test]
    fn neg_zero_is_zero() {
        assert_eq!(-FE::zero(), FE::zero());
    }

    #[test]
    fn new_reduces_the_value() {
        assert_eq!(FE::new(ORDER + 4), FE::from(4));
    }
}
