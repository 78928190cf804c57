use std::ops;

use crate::errors::AlgebraError;
use crate::field::{element::FieldElement, traits::IsField};

/// Represents the polynomial c_0 + c_1 * X + c_2 * X^2 + ... + c_n * X^n
/// as a vector of coefficients `[c_0, c_1, ... , c_n]`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Polynomial<FE> {
    coefficients: Vec<FE>,
}

impl<F: IsField> Polynomial<FieldElement<F>> {
    /// Creates a new polynomial with the given coefficients, dropping
    /// trailing zeros so the degree is canonical.
    pub fn new(coefficients: &[FieldElement<F>]) -> Self {
        let mut unpadded_coefficients = coefficients
            .iter()
            .rev()
            .skip_while(|x| **x == FieldElement::zero())
            .cloned()
            .collect::<Vec<FieldElement<F>>>();
        unpadded_coefficients.reverse();
        if unpadded_coefficients.is_empty() {
            unpadded_coefficients.push(FieldElement::zero());
        }
        Polynomial {
            coefficients: unpadded_coefficients,
        }
    }

    pub fn new_monomial(coefficient: FieldElement<F>, degree: usize) -> Self {
        let mut coefficients = vec![FieldElement::zero(); degree];
        coefficients.push(coefficient);
        Self::new(&coefficients)
    }

    pub fn zero() -> Self {
        Self::new(&[])
    }

    /// Evaluates the polynomial at `x` by Horner's rule.
    pub fn evaluate(&self, x: &FieldElement<F>) -> FieldElement<F> {
        self.coefficients
            .iter()
            .rev()
            .fold(FieldElement::zero(), |acc, coefficient| {
                acc * x + coefficient
            })
    }

    pub fn evaluate_slice(&self, input: &[FieldElement<F>]) -> Vec<FieldElement<F>> {
        input.iter().map(|x| self.evaluate(x)).collect()
    }

    /// The degree of the canonical representation. The zero polynomial is
    /// represented as `[0]` and reported as degree 0.
    pub fn degree(&self) -> usize {
        self.coefficients.len() - 1
    }

    pub fn coeff_len(&self) -> usize {
        self.coefficients.len()
    }

    /// Returns coefficients of the polynomial as an array
    /// \[c_0, c_1, c_2, ..., c_n\]
    pub fn coefficients(&self) -> &[FieldElement<F>] {
        &self.coefficients
    }

    /// Returns the composition P(factor * X), i.e. the i-th coefficient gets
    /// multiplied by `factor^i`. This is how evaluations over a coset are
    /// reduced to evaluations over the plain subgroup and back.
    pub fn scale(&self, factor: &FieldElement<F>) -> Self {
        let mut power = FieldElement::one();
        let scaled_coefficients = self
            .coefficients
            .iter()
            .map(|coefficient| {
                let scaled = coefficient * &power;
                power = &power * factor;
                scaled
            })
            .collect::<Vec<FieldElement<F>>>();
        Self::new(&scaled_coefficients)
    }

    /// Lagrange interpolation: returns the unique polynomial of degree less
    /// than `xs.len()` with P(xs\[i\]) = ys\[i\]. The nodes must be pairwise
    /// distinct.
    pub fn interpolate(
        xs: &[FieldElement<F>],
        ys: &[FieldElement<F>],
    ) -> Result<Self, AlgebraError> {
        if xs.len() != ys.len() {
            return Err(AlgebraError::LengthMismatch(xs.len(), ys.len()));
        }
        for (i, xi) in xs.iter().enumerate() {
            if xs.iter().skip(i + 1).any(|xj| xi == xj) {
                return Err(AlgebraError::DuplicateNodes);
            }
        }

        let mut result = Polynomial::zero();
        for (i, (xi, yi)) in xs.iter().zip(ys).enumerate() {
            let mut numerator = Polynomial::new(&[FieldElement::one()]);
            let mut denominator = FieldElement::one();
            for (j, xj) in xs.iter().enumerate() {
                if i == j {
                    continue;
                }
                numerator = numerator.mul_with_ref(&Polynomial::new(&[-xj, FieldElement::one()]));
                denominator = denominator * (xi - xj);
            }
            let basis = numerator * (yi * &denominator.inv()?);
            result = result + basis;
        }
        Ok(result)
    }

    /// Pads polynomial representations with minimum number of zeros to match lengths.
    pub fn pad_with_zero_coefficients(pa: &Self, pb: &Self) -> (Self, Self) {
        let mut pa = pa.clone();
        let mut pb = pb.clone();

        if pa.coefficients.len() > pb.coefficients.len() {
            pb.coefficients
                .resize(pa.coefficients.len(), FieldElement::zero());
        } else {
            pa.coefficients
                .resize(pb.coefficients.len(), FieldElement::zero());
        }
        (pa, pb)
    }

    pub fn mul_with_ref(&self, factor: &Self) -> Self {
        let degree = self.degree() + factor.degree();
        let mut coefficients = vec![FieldElement::zero(); degree + 1];

        for i in 0..=factor.degree() {
            for j in 0..=self.degree() {
                coefficients[i + j] += &factor.coefficients[i] * &self.coefficients[j];
            }
        }
        Polynomial::new(&coefficients)
    }
}

impl<F: IsField> ops::Add<&Polynomial<FieldElement<F>>> for &Polynomial<FieldElement<F>> {
    type Output = Polynomial<FieldElement<F>>;

    fn add(self, a_polynomial: &Polynomial<FieldElement<F>>) -> Self::Output {
        let (pa, pb) = Polynomial::pad_with_zero_coefficients(self, a_polynomial);
        let new_coefficients = pa
            .coefficients
            .iter()
            .zip(pb.coefficients.iter())
            .map(|(x, y)| x + y)
            .collect::<Vec<FieldElement<F>>>();
        Polynomial::new(&new_coefficients)
    }
}

impl<F: IsField> ops::Add<Polynomial<FieldElement<F>>> for Polynomial<FieldElement<F>> {
    type Output = Polynomial<FieldElement<F>>;

    fn add(self, a_polynomial: Polynomial<FieldElement<F>>) -> Self::Output {
        &self + &a_polynomial
    }
}

impl<F: IsField> ops::Add<&Polynomial<FieldElement<F>>> for Polynomial<FieldElement<F>> {
    type Output = Polynomial<FieldElement<F>>;

    fn add(self, a_polynomial: &Polynomial<FieldElement<F>>) -> Self::Output {
        &self + a_polynomial
    }
}

impl<F: IsField> ops::Add<Polynomial<FieldElement<F>>> for &Polynomial<FieldElement<F>> {
    type Output = Polynomial<FieldElement<F>>;

    fn add(self, a_polynomial: Polynomial<FieldElement<F>>) -> Self::Output {
        self + &a_polynomial
    }
}

impl<F: IsField> ops::Neg for Polynomial<FieldElement<F>> {
    type Output = Polynomial<FieldElement<F>>;

    fn neg(self) -> Self::Output {
        let negated = self
            .coefficients
            .iter()
            .map(|x| -x)
            .collect::<Vec<FieldElement<F>>>();
        Polynomial::new(&negated)
    }
}

impl<F: IsField> ops::Sub<Polynomial<FieldElement<F>>> for Polynomial<FieldElement<F>> {
    type Output = Polynomial<FieldElement<F>>;

    fn sub(self, substrahend: Polynomial<FieldElement<F>>) -> Self::Output {
        self + (-substrahend)
    }
}

impl<F: IsField> ops::Sub<&Polynomial<FieldElement<F>>> for &Polynomial<FieldElement<F>> {
    type Output = Polynomial<FieldElement<F>>;

    fn sub(self, substrahend: &Polynomial<FieldElement<F>>) -> Self::Output {
        self.clone() + (-substrahend.clone())
    }
}

impl<F: IsField> ops::Mul<Polynomial<FieldElement<F>>> for Polynomial<FieldElement<F>> {
    type Output = Polynomial<FieldElement<F>>;

    fn mul(self, factor: Polynomial<FieldElement<F>>) -> Self::Output {
        self.mul_with_ref(&factor)
    }
}

impl<F: IsField> ops::Mul<FieldElement<F>> for Polynomial<FieldElement<F>> {
    type Output = Polynomial<FieldElement<F>>;

    fn mul(self, scalar: FieldElement<F>) -> Self::Output {
        let scaled = self
            .coefficients
            .iter()
            .map(|coefficient| coefficient * &scalar)
            .collect::<Vec<FieldElement<F>>>();
        Polynomial::new(&scaled)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::fields::stark101_prime_field::{Stark101PrimeField, STARK101_PRIME};

    use proptest::collection::vec;
    use proptest::prelude::*;

    type F = Stark101PrimeField;
    type FE = FieldElement<F>;

    fn polynomial(coefficients: &[u64]) -> Polynomial<FE> {
        let coefficients = coefficients.iter().map(|c| FE::from(*c)).collect::<Vec<_>>();
        Polynomial::new(&coefficients)
    }

    #[test]
    fn constructor_removes_trailing_zeros() {
        let p = polynomial(&[3, 4, 0]);
        assert_eq!(p.coefficients(), &[FE::from(3), FE::from(4)]);
        assert_eq!(p.degree(), 1);
    }

    #[test]
    fn zero_polynomial_is_the_zero_coefficient() {
        let p = Polynomial::<FE>::zero();
        assert_eq!(p.coefficients(), &[FE::zero()]);
        assert_eq!(p.degree(), 0);
    }

    #[test]
    fn evaluate_3_term_polynomial() {
        // 3 + 2x + 4x^2 at x = 2 is 23.
        let p = polynomial(&[3, 2, 4]);
        assert_eq!(p.evaluate(&FE::from(2)), FE::from(23));
    }

    #[test]
    fn adding_distributes_over_evaluation() {
        let p = polynomial(&[1, 2, 3]);
        let q = polynomial(&[5, 7]);
        let x = FE::from(11);
        assert_eq!(
            (&p + &q).evaluate(&x),
            p.evaluate(&x) + q.evaluate(&x)
        );
    }

    #[test]
    fn multiplying_distributes_over_evaluation() {
        let p = polynomial(&[1, 2, 3]);
        let q = polynomial(&[5, 7]);
        let x = FE::from(11);
        assert_eq!(
            p.mul_with_ref(&q).evaluate(&x),
            p.evaluate(&x) * q.evaluate(&x)
        );
    }

    #[test]
    fn multiply_2xx_3x_3_times_x_4() {
        let p1 = polynomial(&[3, 3, 2]);
        let p2 = polynomial(&[4, 1]);
        assert_eq!(p1 * p2, polynomial(&[12, 15, 11, 2]));
    }

    #[test]
    fn scalar_multiplication() {
        let p = polynomial(&[1, 2, 3]);
        assert_eq!(p * FE::from(5), polynomial(&[5, 10, 15]));
    }

    #[test]
    fn scale_shifts_the_argument() {
        let p = polynomial(&[5, 1, 3]);
        let factor = FE::from(7);
        let x = FE::from(13);
        assert_eq!(p.scale(&factor).evaluate(&x), p.evaluate(&(factor * x)));
    }

    #[test]
    fn interpolate_parabola_through_1_2_3() {
        // (1, 3), (2, 7), (3, 13) lie on 1 + x + x^2.
        let xs = [FE::from(1), FE::from(2), FE::from(3)];
        let ys = [FE::from(3), FE::from(7), FE::from(13)];
        let p = Polynomial::interpolate(&xs, &ys).unwrap();
        assert_eq!(p.coefficients(), &[FE::from(1), FE::from(1), FE::from(1)]);
    }

    #[test]
    fn interpolate_rejects_duplicate_nodes() {
        let xs = [FE::from(2), FE::from(2)];
        let ys = [FE::from(1), FE::from(5)];
        assert_eq!(
            Polynomial::interpolate(&xs, &ys),
            Err(AlgebraError::DuplicateNodes)
        );
    }

    #[test]
    fn interpolate_rejects_mismatched_lengths() {
        let xs = [FE::from(1), FE::from(2)];
        let ys = [FE::from(1)];
        assert_eq!(
            Polynomial::interpolate(&xs, &ys),
            Err(AlgebraError::LengthMismatch(2, 1))
        );
    }

    proptest! {
        #[test]
        fn interpolated_polynomial_passes_through_the_nodes(
            raw in vec(0u64..STARK101_PRIME, 1..8)
        ) {
            let mut xs: Vec<u64> = raw.clone();
            xs.sort_unstable();
            xs.dedup();
            let xs: Vec<FE> = xs.into_iter().map(FE::from).collect();
            // Reuse the raw values as ys, truncated to the deduplicated length.
            let ys: Vec<FE> = raw.iter().take(xs.len()).map(|y| FE::from(*y)).collect();

            let p = Polynomial::interpolate(&xs, &ys).unwrap();
            for (x, y) in xs.iter().zip(&ys) {
                prop_assert_eq!(p.evaluate(x), y.clone());
            }
        }
    }
}
