use serde::Serialize;
use starklite_math::field::{element::FieldElement, traits::IsTwoAdicField};

use crate::constraints::boundary::BoundaryConstraints;

/// AIR is a representation of the constraints of a computation: the shape of
/// its execution trace, the relation every pair of consecutive rows must
/// satisfy, and the boundary values tied to the public inputs. The prover and
/// verifier treat implementations as opaque constraint providers.
pub trait AIR {
    type Field: IsTwoAdicField;
    type PublicInputs: Serialize;

    /// Number of registers per trace row.
    fn trace_width(&self) -> usize;

    /// Number of steps of the computation. Must be a power of two.
    fn trace_length(&self) -> usize;

    /// Algebraic degree of the transition constraints in the trace
    /// variables. Linear constraints have degree 1.
    fn constraint_degree(&self) -> usize {
        1
    }

    fn boundary_constraints(&self) -> BoundaryConstraints<Self::Field>;

    /// Evaluates the transition constraints on a pair of consecutive rows.
    /// Each returned value is zero exactly when the constraint holds. The
    /// number of returned values must not depend on the row contents.
    fn evaluate_transition(
        &self,
        current: &[FieldElement<Self::Field>],
        next: &[FieldElement<Self::Field>],
    ) -> Vec<FieldElement<Self::Field>>;

    fn pub_inputs(&self) -> &Self::PublicInputs;

    /// The number of transition constraints, probed on a pair of zero rows.
    fn num_transition_constraints(&self) -> usize {
        let zeroes = vec![FieldElement::zero(); self.trace_width()];
        self.evaluate_transition(&zeroes, &zeroes).len()
    }

    /// Blowup factor of the low degree extension: the smallest power of two
    /// at least `constraint_degree + 1`, never below 4. Prover and verifier
    /// must derive it from this same rule.
    fn blowup_factor(&self) -> usize {
        (self.constraint_degree() + 1).next_power_of_two().max(4)
    }
}
