use log::error;
use starklite_math::field::element::FieldElement;
use starklite_math::polynomial::Polynomial;

use crate::domain::Domain;
use crate::trace::TraceTable;
use crate::traits::AIR;

/// Checks a witness trace against every boundary and transition constraint of
/// the AIR. The prover runs this in debug builds so an inconsistent witness
/// fails fast with a readable message instead of producing a proof that no
/// verifier accepts.
pub fn validate_trace<A: AIR>(air: &A, trace: &TraceTable<A::Field>) -> bool {
    for constraint in &air.boundary_constraints().constraints {
        if trace.get_row(constraint.step)[constraint.register] != constraint.value {
            error!(
                "boundary constraint on register {} at step {} does not hold",
                constraint.register, constraint.step
            );
            return false;
        }
    }

    for step in 0..trace.n_rows() - 1 {
        let evaluations = air.evaluate_transition(trace.get_row(step), trace.get_row(step + 1));
        for (constraint_idx, evaluation) in evaluations.iter().enumerate() {
            if *evaluation != FieldElement::zero() {
                error!("transition constraint {constraint_idx} does not hold at step {step}");
                return false;
            }
        }
    }
    true
}

/// Spot-checks the recovered composition polynomial against the pointwise
/// evaluations, including positions that were not part of the interpolation
/// subset.
pub fn validate_composition_poly<F>(
    poly: &Polynomial<FieldElement<F>>,
    domain: &Domain<F>,
    evaluations: &[FieldElement<F>],
) -> bool
where
    F: starklite_math::field::traits::IsTwoAdicField,
{
    domain
        .lde_coset
        .iter()
        .zip(evaluations)
        .take(8)
        .all(|(x, evaluation)| poly.evaluate(x) == *evaluation)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::examples::fibonacci::{fibonacci_trace, FibonacciAIR};
    use crate::FE;

    #[test]
    fn a_valid_trace_validates() {
        let trace = fibonacci_trace(8).unwrap();
        let air = FibonacciAIR::new(8, FE::from(34));
        assert!(validate_trace(&air, &trace));
    }

    #[test]
    fn a_wrong_boundary_value_fails() {
        let trace = fibonacci_trace(8).unwrap();
        let air = FibonacciAIR::new(8, FE::from(35));
        assert!(!validate_trace(&air, &trace));
    }

    #[test]
    fn a_broken_transition_fails() {
        let mut rows = fibonacci_trace(8).unwrap().rows();
        rows[4][0] = &rows[4][0] + FE::from(1);
        let trace = TraceTable::from_rows(rows).unwrap();
        let air = FibonacciAIR::new(8, FE::from(34));
        assert!(!validate_trace(&air, &trace));
    }
}
