use std::fmt::Debug;

use super::{element::FieldElement, errors::FieldError};

/// Trait to add field behaviour to a struct.
pub trait IsField: Debug + Clone + PartialEq + Eq {
    /// The underlying base type for representing elements from the field.
    type BaseType: Clone + Debug + PartialEq + Eq;

    /// Returns the sum of `a` and `b`.
    fn add(a: &Self::BaseType, b: &Self::BaseType) -> Self::BaseType;

    /// Returns the subtraction of `a` and `b`.
    fn sub(a: &Self::BaseType, b: &Self::BaseType) -> Self::BaseType;

    /// Returns the additive inverse of `a`.
    fn neg(a: &Self::BaseType) -> Self::BaseType;

    /// Returns the multiplication of `a` and `b`.
    fn mul(a: &Self::BaseType, b: &Self::BaseType) -> Self::BaseType;

    /// Returns `a * a`.
    fn square(a: &Self::BaseType) -> Self::BaseType {
        Self::mul(a, a)
    }

    /// Returns `a` raised to the power of `exponent`.
    fn pow(a: &Self::BaseType, mut exponent: u64) -> Self::BaseType {
        let mut result = Self::one();
        let mut base = a.clone();

        while exponent > 0 {
            if exponent & 1 == 1 {
                result = Self::mul(&result, &base);
            }
            exponent >>= 1;
            base = Self::square(&base);
        }
        result
    }

    /// Returns the multiplicative inverse of `a`. The zero element has none.
    fn inv(a: &Self::BaseType) -> Result<Self::BaseType, FieldError>;

    /// Returns the division of `a` and `b`.
    fn div(a: &Self::BaseType, b: &Self::BaseType) -> Result<Self::BaseType, FieldError> {
        Ok(Self::mul(a, &Self::inv(b)?))
    }

    /// Returns a boolean indicating whether `a` and `b` are equal or not.
    fn eq(a: &Self::BaseType, b: &Self::BaseType) -> bool;

    /// Returns the additive neutral element.
    fn zero() -> Self::BaseType;

    /// Returns the multiplicative neutral element.
    fn one() -> Self::BaseType;

    /// Returns the element `x * 1` where 1 is the multiplicative neutral element.
    fn from_u64(x: u64) -> Self::BaseType;

    /// Returns the canonical representative of `a`, i.e. the remainder of its
    /// internal representation modulo the field order.
    fn representative(a: &Self::BaseType) -> Self::BaseType;
}

/// A prime field whose multiplicative group order is divisible by a large
/// power of two, together with a fixed generator of the whole group. These
/// are the fields where evaluation domains for FFTs and low degree
/// extensions exist at every power-of-two size up to `2^TWO_ADICITY`.
pub trait IsTwoAdicField: IsField<BaseType = u64> {
    /// The prime modulus `p`.
    const MODULUS: u64;

    /// A fixed generator of the multiplicative group of the field.
    const GENERATOR: u64;

    /// The largest `k` such that `2^k` divides `p - 1`.
    const TWO_ADICITY: u64;

    /// Returns an element of multiplicative order exactly `order`, computed as
    /// `GENERATOR^((p - 1) / order)`. Fails when `order` is zero or does not
    /// divide `p - 1`.
    fn generator_of_order(order: u64) -> Result<FieldElement<Self>, FieldError>
    where
        Self: Sized,
    {
        if order == 0 || (Self::MODULUS - 1) % order != 0 {
            return Err(FieldError::NoSubgroup(order));
        }
        let generator = FieldElement::<Self>::from(Self::GENERATOR);
        Ok(generator.pow((Self::MODULUS - 1) / order))
    }
}
