use serde::{Deserialize, Serialize};
use starklite_math::field::element::FieldElement;

use crate::constraints::boundary::{BoundaryConstraint, BoundaryConstraints};
use crate::errors::TraceError;
use crate::trace::TraceTable;
use crate::traits::AIR;
use crate::{FE, PrimeField};

/// Proves a Fibonacci run: each step maps `[a, b]` to `[b, a + b]`, starting
/// from `[1, 1]`, with the claimed result pinned at the last step.
#[derive(Clone, Debug)]
pub struct FibonacciAIR {
    pub_inputs: FibonacciPublicInputs,
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct FibonacciPublicInputs {
    pub length: usize,
    pub result: u64,
}

impl FibonacciAIR {
    pub fn new(trace_length: usize, result: FE) -> Self {
        Self {
            pub_inputs: FibonacciPublicInputs {
                length: trace_length,
                result: result.representative(),
            },
        }
    }
}

impl AIR for FibonacciAIR {
    type Field = PrimeField;
    type PublicInputs = FibonacciPublicInputs;

    fn trace_width(&self) -> usize {
        2
    }

    fn trace_length(&self) -> usize {
        self.pub_inputs.length
    }

    fn boundary_constraints(&self) -> BoundaryConstraints<Self::Field> {
        BoundaryConstraints::from_constraints(vec![
            BoundaryConstraint::new(0, 0, FieldElement::one()),
            BoundaryConstraint::new(0, 1, FieldElement::one()),
            BoundaryConstraint::new(
                self.pub_inputs.length - 1,
                1,
                FE::from(self.pub_inputs.result),
            ),
        ])
    }

    fn evaluate_transition(&self, current: &[FE], next: &[FE]) -> Vec<FE> {
        vec![
            &next[0] - &current[1],
            &next[1] - &(&current[0] + &current[1]),
        ]
    }

    fn pub_inputs(&self) -> &Self::PublicInputs {
        &self.pub_inputs
    }
}

/// Runs the recurrence from `[1, 1]` for `trace_length` steps.
pub fn fibonacci_trace(trace_length: usize) -> Result<TraceTable<PrimeField>, TraceError> {
    let mut rows = Vec::with_capacity(trace_length);
    let mut state = [FE::one(), FE::one()];
    rows.push(state.to_vec());
    for _ in 1..trace_length {
        state = [state[1].clone(), &state[0] + &state[1]];
        rows.push(state.to_vec());
    }
    TraceTable::from_rows(rows)
}
