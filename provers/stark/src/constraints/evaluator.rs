use starklite_math::field::element::FieldElement;

use crate::constraints::boundary::BoundaryConstraints;
use crate::domain::Domain;
use crate::trace::TraceTable;
use crate::traits::AIR;

/// Evaluates the composition polynomial
///
/// ```text
/// Q(x) = (sum_j alpha_j * C_j(x)) / Z_T(x)
///      + sum_k beta_k * (T_r(x) - v_k) / (x - g^(s_k))
/// ```
///
/// pointwise on the LDE coset. The same per-point formula is reused by the
/// verifier to recompute Q at the queried positions from the opened rows.
pub struct ConstraintEvaluator<'a, A: AIR> {
    air: &'a A,
    boundary_constraints: BoundaryConstraints<A::Field>,
}

impl<'a, A: AIR> ConstraintEvaluator<'a, A> {
    pub fn new(air: &'a A) -> Self {
        Self {
            air,
            boundary_constraints: air.boundary_constraints(),
        }
    }

    /// Evaluates Q on every point of the LDE coset. The row of the next step
    /// sits `blowup_factor` positions further in the extended trace, wrapping
    /// around at the end.
    pub fn evaluate(
        &self,
        lde_trace: &TraceTable<A::Field>,
        domain: &Domain<A::Field>,
        transition_coeffs: &[FieldElement<A::Field>],
        boundary_coeffs: &[FieldElement<A::Field>],
    ) -> Vec<FieldElement<A::Field>> {
        (0..domain.lde_length)
            .map(|i| {
                let current = lde_trace.get_row(i);
                let next = lde_trace.get_row((i + domain.blowup_factor) % domain.lde_length);
                self.evaluate_at(
                    &domain.lde_coset[i],
                    current,
                    next,
                    domain,
                    transition_coeffs,
                    boundary_coeffs,
                )
            })
            .collect()
    }

    /// Evaluates Q at a single out-of-trace point given the two trace rows
    /// involved in the transition there.
    pub fn evaluate_at(
        &self,
        x: &FieldElement<A::Field>,
        current: &[FieldElement<A::Field>],
        next: &[FieldElement<A::Field>],
        domain: &Domain<A::Field>,
        transition_coeffs: &[FieldElement<A::Field>],
        boundary_coeffs: &[FieldElement<A::Field>],
    ) -> FieldElement<A::Field> {
        let transition_evaluations = self.air.evaluate_transition(current, next);

        // Z_T(x) = (x^N - 1) / (x - g^(N-1)) vanishes on every trace step but
        // the last, where the transition constraint does not apply. It has no
        // roots on the shifted evaluation domain.
        let last_step = domain
            .trace_primitive_root
            .pow((domain.trace_length - 1) as u64);
        let zerofier =
            (x.pow(domain.trace_length as u64) - FieldElement::one()) / (x - &last_step);

        let mut combined = FieldElement::zero();
        for (coeff, evaluation) in transition_coeffs.iter().zip(&transition_evaluations) {
            combined += coeff * evaluation;
        }
        let mut result = combined / zerofier;

        for (coeff, constraint) in boundary_coeffs
            .iter()
            .zip(&self.boundary_constraints.constraints)
        {
            let numerator = &current[constraint.register] - &constraint.value;
            let denominator = x - &domain.trace_primitive_root.pow(constraint.step as u64);
            result += coeff * &(numerator / denominator);
        }
        result
    }
}
