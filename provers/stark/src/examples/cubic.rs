use serde::{Deserialize, Serialize};

use crate::constraints::boundary::{BoundaryConstraint, BoundaryConstraints};
use crate::errors::TraceError;
use crate::trace::TraceTable;
use crate::traits::AIR;
use crate::{FE, PrimeField};

/// Proves the iteration `x_{i+1} = x_i^3 + x_i + 5`. The cubic transition
/// makes the composition polynomial three times as large as the trace, so
/// this is the smallest example that exercises the degree-driven blowup.
#[derive(Clone, Debug)]
pub struct CubicAIR {
    pub_inputs: CubicPublicInputs,
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct CubicPublicInputs {
    pub length: usize,
    pub start_value: u64,
    pub result: u64,
}

impl CubicAIR {
    pub fn new(trace_length: usize, start_value: FE, result: FE) -> Self {
        Self {
            pub_inputs: CubicPublicInputs {
                length: trace_length,
                start_value: start_value.representative(),
                result: result.representative(),
            },
        }
    }
}

impl AIR for CubicAIR {
    type Field = PrimeField;
    type PublicInputs = CubicPublicInputs;

    fn trace_width(&self) -> usize {
        1
    }

    fn trace_length(&self) -> usize {
        self.pub_inputs.length
    }

    fn constraint_degree(&self) -> usize {
        3
    }

    fn boundary_constraints(&self) -> BoundaryConstraints<Self::Field> {
        BoundaryConstraints::from_constraints(vec![
            BoundaryConstraint::new(0, 0, FE::from(self.pub_inputs.start_value)),
            BoundaryConstraint::new(
                self.pub_inputs.length - 1,
                0,
                FE::from(self.pub_inputs.result),
            ),
        ])
    }

    fn evaluate_transition(&self, current: &[FE], next: &[FE]) -> Vec<FE> {
        let x = &current[0];
        vec![&next[0] - &(x.pow(3) + x + FE::from(5))]
    }

    fn pub_inputs(&self) -> &Self::PublicInputs {
        &self.pub_inputs
    }
}

/// Iterates the map from `start_value` for `trace_length` steps.
pub fn cubic_trace(
    trace_length: usize,
    start_value: FE,
) -> Result<TraceTable<PrimeField>, TraceError> {
    let mut rows = Vec::with_capacity(trace_length);
    let mut current = start_value;
    rows.push(vec![current.clone()]);
    for _ in 1..trace_length {
        current = current.pow(3) + &current + FE::from(5);
        rows.push(vec![current.clone()]);
    }
    TraceTable::from_rows(rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn the_cubic_degree_forces_a_blowup_of_4() {
        let air = CubicAIR::new(8, FE::from(1), FE::from(0));
        assert_eq!(air.blowup_factor(), 4);
        assert_eq!(air.num_transition_constraints(), 1);
    }

    #[test]
    fn the_trace_follows_the_map() {
        let trace = cubic_trace(8, FE::from(1)).unwrap();
        // 1 -> 1 + 1 + 5 = 7 -> 343 + 7 + 5 = 355 -> ...
        assert_eq!(trace.get_row(1)[0], FE::from(7));
        assert_eq!(trace.get_row(2)[0], FE::from(355));

        let air = CubicAIR::new(8, FE::from(1), trace.get_row(7)[0].clone());
        for step in 0..7 {
            for value in air.evaluate_transition(trace.get_row(step), trace.get_row(step + 1)) {
                assert_eq!(value, FE::zero());
            }
        }
    }
}
