use std::fmt;
use std::ops;

use super::errors::FieldError;
use super::traits::IsField;

/// A field element, wrapping a value of the field's base type. All operations
/// keep the internal value reduced.
#[derive(Debug, Clone)]
pub struct FieldElement<F: IsField> {
    value: F::BaseType,
}

impl<F: IsField> Copy for FieldElement<F> where F::BaseType: Copy {}

impl<F: IsField> FieldElement<F> {
    /// Creates a field element from a value of the base type, reducing it.
    pub fn new(value: F::BaseType) -> Self {
        Self {
            value: F::representative(&value),
        }
    }

    /// Returns a reference to the internal representation.
    pub fn value(&self) -> &F::BaseType {
        &self.value
    }

    /// Returns the canonical representative of the element.
    pub fn representative(&self) -> F::BaseType {
        F::representative(&self.value)
    }

    pub fn zero() -> Self {
        Self { value: F::zero() }
    }

    pub fn one() -> Self {
        Self { value: F::one() }
    }

    pub fn square(&self) -> Self {
        Self {
            value: F::square(&self.value),
        }
    }

    pub fn pow(&self, exponent: u64) -> Self {
        Self {
            value: F::pow(&self.value, exponent),
        }
    }

    /// Returns the multiplicative inverse, or `FieldError::Inverse` for zero.
    pub fn inv(&self) -> Result<Self, FieldError> {
        Ok(Self {
            value: F::inv(&self.value)?,
        })
    }
}

impl<F: IsField> From<u64> for FieldElement<F> {
    fn from(value: u64) -> Self {
        Self {
            value: F::from_u64(value),
        }
    }
}

impl<F: IsField> Default for FieldElement<F> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<F: IsField> PartialEq for FieldElement<F> {
    fn eq(&self, other: &Self) -> bool {
        <F as IsField>::eq(&self.value, &other.value)
    }
}

impl<F: IsField> Eq for FieldElement<F> {}

impl<F: IsField> fmt::Display for FieldElement<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.representative())
    }
}

impl<F: IsField> ops::Add<&FieldElement<F>> for &FieldElement<F> {
    type Output = FieldElement<F>;

    fn add(self, rhs: &FieldElement<F>) -> Self::Output {
        FieldElement {
            value: F::add(&self.value, &rhs.value),
        }
    }
}

impl<F: IsField> ops::Add<FieldElement<F>> for FieldElement<F> {
    type Output = FieldElement<F>;

    fn add(self, rhs: FieldElement<F>) -> Self::Output {
        &self + &rhs
    }
}

impl<F: IsField> ops::Add<&FieldElement<F>> for FieldElement<F> {
    type Output = FieldElement<F>;

    fn add(self, rhs: &FieldElement<F>) -> Self::Output {
        &self + rhs
    }
}

impl<F: IsField> ops::Add<FieldElement<F>> for &FieldElement<F> {
    type Output = FieldElement<F>;

    fn add(self, rhs: FieldElement<F>) -> Self::Output {
        self + &rhs
    }
}

impl<F: IsField> ops::AddAssign<FieldElement<F>> for FieldElement<F> {
    fn add_assign(&mut self, rhs: FieldElement<F>) {
        self.value = F::add(&self.value, &rhs.value);
    }
}

impl<F: IsField> ops::AddAssign<&FieldElement<F>> for FieldElement<F> {
    fn add_assign(&mut self, rhs: &FieldElement<F>) {
        self.value = F::add(&self.value, &rhs.value);
    }
}

impl<F: IsField> ops::Sub<&FieldElement<F>> for &FieldElement<F> {
    type Output = FieldElement<F>;

    fn sub(self, rhs: &FieldElement<F>) -> Self::Output {
        FieldElement {
            value: F::sub(&self.value, &rhs.value),
        }
    }
}

impl<F: IsField> ops::Sub<FieldElement<F>> for FieldElement<F> {
    type Output = FieldElement<F>;

    fn sub(self, rhs: FieldElement<F>) -> Self::Output {
        &self - &rhs
    }
}

impl<F: IsField> ops::Sub<&FieldElement<F>> for FieldElement<F> {
    type Output = FieldElement<F>;

    fn sub(self, rhs: &FieldElement<F>) -> Self::Output {
        &self - rhs
    }
}

impl<F: IsField> ops::Sub<FieldElement<F>> for &FieldElement<F> {
    type Output = FieldElement<F>;

    fn sub(self, rhs: FieldElement<F>) -> Self::Output {
        self - &rhs
    }
}

impl<F: IsField> ops::Mul<&FieldElement<F>> for &FieldElement<F> {
    type Output = FieldElement<F>;

    fn mul(self, rhs: &FieldElement<F>) -> Self::Output {
        FieldElement {
            value: F::mul(&self.value, &rhs.value),
        }
    }
}

impl<F: IsField> ops::Mul<FieldElement<F>> for FieldElement<F> {
    type Output = FieldElement<F>;

    fn mul(self, rhs: FieldElement<F>) -> Self::Output {
        &self * &rhs
    }
}

impl<F: IsField> ops::Mul<&FieldElement<F>> for FieldElement<F> {
    type Output = FieldElement<F>;

    fn mul(self, rhs: &FieldElement<F>) -> Self::Output {
        &self * rhs
    }
}

impl<F: IsField> ops::Mul<FieldElement<F>> for &FieldElement<F> {
    type Output = FieldElement<F>;

    fn mul(self, rhs: FieldElement<F>) -> Self::Output {
        self * &rhs
    }
}

impl<F: IsField> ops::Div<&FieldElement<F>> for &FieldElement<F> {
    type Output = FieldElement<F>;

    /// Division is multiplication by the inverse. Panics when dividing by
    /// zero; use [`FieldElement::inv`] when the divisor is not known to be
    /// non-zero.
    fn div(self, rhs: &FieldElement<F>) -> Self::Output {
        self * rhs.inv().expect("division by zero")
    }
}

impl<F: IsField> ops::Div<FieldElement<F>> for FieldElement<F> {
    type Output = FieldElement<F>;

    fn div(self, rhs: FieldElement<F>) -> Self::Output {
        &self / &rhs
    }
}

impl<F: IsField> ops::Div<&FieldElement<F>> for FieldElement<F> {
    type Output = FieldElement<F>;

    fn div(self, rhs: &FieldElement<F>) -> Self::Output {
        &self / rhs
    }
}

impl<F: IsField> ops::Div<FieldElement<F>> for &FieldElement<F> {
    type Output = FieldElement<F>;

    fn div(self, rhs: FieldElement<F>) -> Self::Output {
        self / &rhs
    }
}

impl<F: IsField> ops::Neg for &FieldElement<F> {
    type Output = FieldElement<F>;

    fn neg(self) -> Self::Output {
        FieldElement {
            value: F::neg(&self.value),
        }
    }
}

impl<F: IsField> ops::Neg for FieldElement<F> {
    type Output = FieldElement<F>;

    fn neg(self) -> Self::Output {
        -&self
    }
}
