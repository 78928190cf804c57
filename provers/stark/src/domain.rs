use starklite_math::field::{element::FieldElement, traits::IsTwoAdicField};

use crate::errors::{ProvingError, TraceError};
use crate::proof::options::ProofOptions;
use crate::traits::AIR;

/// The two evaluation domains of the protocol: the trace domain `{g^i}` of
/// size N and the blown-up coset `{s * h^i}` of size k * N. The offset keeps
/// the two disjoint, so the constraint divisors never vanish on the larger
/// domain.
#[derive(Debug, Clone)]
pub struct Domain<F: IsTwoAdicField> {
    pub trace_length: usize,
    pub blowup_factor: usize,
    pub lde_length: usize,
    pub trace_primitive_root: FieldElement<F>,
    pub lde_primitive_root: FieldElement<F>,
    pub coset_offset: FieldElement<F>,
    pub trace_roots_of_unity: Vec<FieldElement<F>>,
    pub lde_coset: Vec<FieldElement<F>>,
}

impl<F: IsTwoAdicField> Domain<F> {
    pub fn new<A>(air: &A, options: &ProofOptions) -> Result<Self, ProvingError>
    where
        A: AIR<Field = F>,
    {
        let trace_length = air.trace_length();
        if !trace_length.is_power_of_two() {
            return Err(TraceError::LengthNotPowerOfTwo(trace_length).into());
        }
        let blowup_factor = air.blowup_factor();
        let lde_length = trace_length * blowup_factor;

        let trace_primitive_root = F::generator_of_order(trace_length as u64)?;
        let lde_primitive_root = F::generator_of_order(lde_length as u64)?;
        let coset_offset = FieldElement::from(options.coset_offset);

        let mut trace_roots_of_unity = Vec::with_capacity(trace_length);
        let mut power = FieldElement::one();
        for _ in 0..trace_length {
            trace_roots_of_unity.push(power.clone());
            power = &power * &trace_primitive_root;
        }

        let mut lde_coset = Vec::with_capacity(lde_length);
        let mut power = coset_offset.clone();
        for _ in 0..lde_length {
            lde_coset.push(power.clone());
            power = &power * &lde_primitive_root;
        }

        Ok(Self {
            trace_length,
            blowup_factor,
            lde_length,
            trace_primitive_root,
            lde_primitive_root,
            coset_offset,
            trace_roots_of_unity,
            lde_coset,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::examples::fibonacci::{FibonacciAIR, FibonacciPublicInputs};
    use crate::FE;

    #[test]
    fn the_two_domains_are_disjoint() {
        let air = FibonacciAIR::new(8, FE::from(34));
        let domain = Domain::new(&air, &ProofOptions::default()).unwrap();

        assert_eq!(domain.trace_roots_of_unity.len(), 8);
        assert_eq!(domain.lde_coset.len(), 32);
        for lde_point in &domain.lde_coset {
            assert!(!domain.trace_roots_of_unity.contains(lde_point));
        }
    }

    #[test]
    fn lde_generator_to_the_blowup_is_the_trace_generator() {
        let air = FibonacciAIR::new(8, FE::from(34));
        let domain = Domain::new(&air, &ProofOptions::default()).unwrap();
        assert_eq!(
            domain.lde_primitive_root.pow(domain.blowup_factor as u64),
            domain.trace_primitive_root
        );
    }

    #[test]
    fn public_inputs_type_is_shared() {
        // Constructing the AIR from its public inputs record must describe the
        // same instance.
        let air = FibonacciAIR::new(8, FE::from(34));
        let FibonacciPublicInputs { length, result } = *air.pub_inputs();
        assert_eq!(length, 8);
        assert_eq!(result, 34);
    }
}
