use crate::field::traits::IsTwoAdicField;
use crate::field::u64_prime_field::U64PrimeField;

/// The STARK-friendly 32-bit prime `p = 3 * 2^30 + 1`. Since `p - 1` is
/// divisible by `2^30`, the multiplicative group has subgroups of every
/// power-of-two order up to `2^30`, which is what the trace and evaluation
/// domains are built from.
pub const STARK101_PRIME: u64 = 3221225473;

pub type Stark101PrimeField = U64PrimeField<STARK101_PRIME>;

impl IsTwoAdicField for Stark101PrimeField {
    const MODULUS: u64 = STARK101_PRIME;
    // 5 generates the whole multiplicative group of order 3 * 2^30.
    const GENERATOR: u64 = 5;
    const TWO_ADICITY: u64 = 30;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::element::FieldElement;
    use crate::field::errors::FieldError;

    type FE = FieldElement<Stark101PrimeField>;

    #[test]
    fn modulus_is_3_times_2_pow_30_plus_1() {
        assert_eq!(STARK101_PRIME, 3 * (1 << 30) + 1);
    }

    #[test]
    fn generator_has_full_order() {
        let g = FE::from(Stark101PrimeField::GENERATOR);
        assert_eq!(g.pow(STARK101_PRIME - 1), FE::one());
        // The group order is 3 * 2^30, so g cannot have order dividing either
        // maximal proper divisor.
        assert_ne!(g.pow((STARK101_PRIME - 1) / 2), FE::one());
        assert_ne!(g.pow((STARK101_PRIME - 1) / 3), FE::one());
    }

    #[test]
    fn generator_of_order_8_has_order_8() {
        let g = Stark101PrimeField::generator_of_order(8).unwrap();
        assert_eq!(g.pow(8), FE::one());
        assert_ne!(g.pow(4), FE::one());
    }

    #[test]
    fn generator_of_order_1_is_the_identity() {
        let g = Stark101PrimeField::generator_of_order(1).unwrap();
        assert_eq!(g, FE::one());
    }

    #[test]
    fn no_subgroup_of_order_7() {
        assert_eq!(
            Stark101PrimeField::generator_of_order(7),
            Err(FieldError::NoSubgroup(7))
        );
    }

    #[test]
    fn no_subgroup_of_order_0() {
        assert_eq!(
            Stark101PrimeField::generator_of_order(0),
            Err(FieldError::NoSubgroup(0))
        );
    }

    #[test]
    fn fermat_inverse_matches_division() {
        let a = FE::from(123456789);
        assert_eq!(a.pow(STARK101_PRIME - 1), FE::one());
        assert_eq!(&a * &a.inv().unwrap(), FE::one());
    }

    mod field_laws {
        use super::*;
        use proptest::prelude::*;

        fn any_element() -> impl Strategy<Value = FE> {
            (0u64..STARK101_PRIME).prop_map(FE::from)
        }

        proptest! {
            #[test]
            fn addition_is_commutative(a in any_element(), b in any_element()) {
                prop_assert_eq!(&a + &b, &b + &a);
            }

            #[test]
            fn multiplication_is_commutative(a in any_element(), b in any_element()) {
                prop_assert_eq!(&a * &b, &b * &a);
            }

            #[test]
            fn addition_is_associative(
                a in any_element(),
                b in any_element(),
                c in any_element()
            ) {
                prop_assert_eq!((&a + &b) + &c, &a + (&b + &c));
            }

            #[test]
            fn multiplication_is_associative(
                a in any_element(),
                b in any_element(),
                c in any_element()
            ) {
                prop_assert_eq!((&a * &b) * &c, &a * (&b * &c));
            }

            #[test]
            fn multiplication_distributes_over_addition(
                a in any_element(),
                b in any_element(),
                c in any_element()
            ) {
                prop_assert_eq!(&a * (&b + &c), &a * &b + &a * &c);
            }

            #[test]
            fn additive_inverse_cancels(a in any_element()) {
                prop_assert_eq!(&a + (-&a), FE::zero());
            }

            #[test]
            fn multiplicative_inverse_cancels(a in any_element()) {
                prop_assume!(a != FE::zero());
                prop_assert_eq!(&a * &a.inv().unwrap(), FE::one());
            }

            #[test]
            fn nonzero_elements_have_order_dividing_group_order(a in any_element()) {
                prop_assume!(a != FE::zero());
                prop_assert_eq!(a.pow(STARK101_PRIME - 1), FE::one());
            }
        }
    }
}
