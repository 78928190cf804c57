pub mod errors;

use crate::field::{element::FieldElement, traits::IsField};
use crate::polynomial::Polynomial;

use self::errors::FFTError;

/// Radix-2 decimation-in-time Cooley-Tukey transform. Takes `n` coefficients
/// and a primitive `n`-th root of unity `omega` and returns the evaluations
/// of the polynomial on the subgroup generated by `omega`. Feeding it
/// evaluations together with `omega^(-1)` runs the transform in the inverse
/// direction (up to the `1/n` factor applied by [`inverse_fft`]).
pub fn fft<F: IsField>(
    input: &[FieldElement<F>],
    omega: &FieldElement<F>,
) -> Result<Vec<FieldElement<F>>, FFTError> {
    let length = input.len();
    if !length.is_power_of_two() {
        return Err(FFTError::InputSizeNotPowerOfTwo(length));
    }
    if omega.pow(length as u64) != FieldElement::one()
        || (length > 1 && omega.pow((length / 2) as u64) == FieldElement::one())
    {
        return Err(FFTError::RootOfUnityOrderMismatch(length));
    }
    Ok(fft_recursive(input, omega))
}

fn fft_recursive<F: IsField>(
    input: &[FieldElement<F>],
    omega: &FieldElement<F>,
) -> Vec<FieldElement<F>> {
    let length = input.len();
    if length == 1 {
        return input.to_vec();
    }

    let evens: Vec<FieldElement<F>> = input.iter().step_by(2).cloned().collect();
    let odds: Vec<FieldElement<F>> = input.iter().skip(1).step_by(2).cloned().collect();

    let omega_squared = omega.square();
    let left = fft_recursive(&evens, &omega_squared);
    let right = fft_recursive(&odds, &omega_squared);

    let half = length / 2;
    let mut result = vec![FieldElement::zero(); length];
    let mut power = FieldElement::one();
    for i in 0..half {
        // A(w^i) = A_even(w^2i) + w^i * A_odd(w^2i), and w^(i + n/2) = -w^i.
        let term = &power * &right[i];
        result[i] = &left[i] + &term;
        result[i + half] = &left[i] - &term;
        power = &power * omega;
    }
    result
}

/// Inverse transform: recovers the coefficients from `n` evaluations on the
/// subgroup generated by `omega`.
pub fn inverse_fft<F: IsField>(
    input: &[FieldElement<F>],
    omega: &FieldElement<F>,
) -> Result<Vec<FieldElement<F>>, FFTError> {
    let coefficients = fft(input, &omega.inv()?)?;
    let length_inv = FieldElement::<F>::from(input.len() as u64).inv()?;
    Ok(coefficients
        .into_iter()
        .map(|coefficient| coefficient * &length_inv)
        .collect())
}

/// Interpolates the polynomial taking the value `evaluations[i]` at the point
/// `offset * omega^i`. The inverse transform yields Q(z) = P(offset * z), so
/// the i-th recovered coefficient is unscaled by `offset^(-i)`.
pub fn interpolate_offset_fft<F: IsField>(
    evaluations: &[FieldElement<F>],
    omega: &FieldElement<F>,
    offset: &FieldElement<F>,
) -> Result<Polynomial<FieldElement<F>>, FFTError> {
    let scaled_coefficients = inverse_fft(evaluations, omega)?;
    let offset_inv = offset.inv()?;
    Ok(Polynomial::new(&scaled_coefficients).scale(&offset_inv))
}

/// Evaluates `polynomial` on the coset `{offset * omega^i}` of size
/// `domain_size` by scaling the coefficients and running a forward transform.
pub fn evaluate_offset_fft<F: IsField>(
    polynomial: &Polynomial<FieldElement<F>>,
    omega: &FieldElement<F>,
    domain_size: usize,
    offset: &FieldElement<F>,
) -> Result<Vec<FieldElement<F>>, FFTError> {
    if polynomial.coeff_len() > domain_size {
        return Err(FFTError::DomainSizeTooSmall(
            polynomial.coeff_len(),
            domain_size,
        ));
    }
    let scaled = polynomial.scale(offset);
    let mut coefficients = scaled.coefficients().to_vec();
    coefficients.resize(domain_size, FieldElement::zero());
    fft(&coefficients, omega)
}
