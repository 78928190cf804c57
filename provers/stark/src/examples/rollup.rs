use serde::{Deserialize, Serialize};

use crate::constraints::boundary::{BoundaryConstraint, BoundaryConstraints};
use crate::errors::TraceError;
use crate::trace::TraceTable;
use crate::traits::AIR;
use crate::{FE, PrimeField};

/// A transfer between two of the rollup's accounts.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct Transaction {
    pub from: usize,
    pub to: usize,
    pub amount: u64,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RollupPublicInputs {
    pub length: usize,
    pub num_users: usize,
    pub initial_balances: Vec<u64>,
    pub final_balances: Vec<u64>,
}

/// Proves that a batch of transfers takes a set of account balances from a
/// public initial state to a public final state.
///
/// Each trace row holds the balances of all users followed by the sender
/// index, receiver index and amount of the transfer applied at that step. The
/// per-account transition uses Lagrange selectors over the user indices, so
/// `sender == k` is the degree-(U-1) polynomial that is 1 at k and 0 at every
/// other index, which puts the constraint degree at `num_users`.
#[derive(Clone, Debug)]
pub struct RollupAIR {
    pub_inputs: RollupPublicInputs,
}

impl RollupAIR {
    pub fn new(trace_length: usize, initial_balances: &[u64], final_balances: &[u64]) -> Self {
        Self {
            pub_inputs: RollupPublicInputs {
                length: trace_length,
                num_users: initial_balances.len(),
                initial_balances: initial_balances.to_vec(),
                final_balances: final_balances.to_vec(),
            },
        }
    }

    /// The Lagrange basis polynomial over `{0, .., num_users - 1}` that is 1
    /// at `target` and 0 at every other index, evaluated at `variable`.
    fn selector(&self, target: usize, variable: &FE) -> FE {
        let mut numerator = FE::one();
        let mut denominator = FE::one();
        for other in 0..self.pub_inputs.num_users {
            if other == target {
                continue;
            }
            numerator = numerator * (variable - &FE::from(other as u64));
            denominator = denominator * (FE::from(target as u64) - FE::from(other as u64));
        }
        numerator / denominator
    }

    /// Applies the transfers in order, padding short batches with no-op
    /// transfers (`0 -> 0` of amount 0, which every constraint accepts), and
    /// closes with a row holding the final balances.
    pub fn generate_trace(
        &self,
        transactions: &[Transaction],
    ) -> Result<TraceTable<PrimeField>, TraceError> {
        let noop = Transaction {
            from: 0,
            to: 0,
            amount: 0,
        };
        let mut balances: Vec<FE> = self
            .pub_inputs
            .initial_balances
            .iter()
            .map(|balance| FE::from(*balance))
            .collect();

        let mut rows = Vec::with_capacity(self.pub_inputs.length);
        for step in 0..self.pub_inputs.length - 1 {
            let transaction = transactions.get(step).copied().unwrap_or(noop);
            let mut row = balances.clone();
            row.push(FE::from(transaction.from as u64));
            row.push(FE::from(transaction.to as u64));
            row.push(FE::from(transaction.amount));
            rows.push(row);

            let amount = FE::from(transaction.amount);
            balances[transaction.from] = &balances[transaction.from] - &amount;
            balances[transaction.to] = &balances[transaction.to] + &amount;
        }

        let mut last_row = balances;
        last_row.extend([FE::zero(), FE::zero(), FE::zero()]);
        rows.push(last_row);

        TraceTable::from_rows(rows)
    }
}

impl AIR for RollupAIR {
    type Field = PrimeField;
    type PublicInputs = RollupPublicInputs;

    fn trace_width(&self) -> usize {
        self.pub_inputs.num_users + 3
    }

    fn trace_length(&self) -> usize {
        self.pub_inputs.length
    }

    fn constraint_degree(&self) -> usize {
        self.pub_inputs.num_users
    }

    fn boundary_constraints(&self) -> BoundaryConstraints<Self::Field> {
        let mut constraints = Vec::with_capacity(2 * self.pub_inputs.num_users);
        for (user, balance) in self.pub_inputs.initial_balances.iter().enumerate() {
            constraints.push(BoundaryConstraint::new(0, user, FE::from(*balance)));
        }
        for (user, balance) in self.pub_inputs.final_balances.iter().enumerate() {
            constraints.push(BoundaryConstraint::new(
                self.pub_inputs.length - 1,
                user,
                FE::from(*balance),
            ));
        }
        BoundaryConstraints::from_constraints(constraints)
    }

    fn evaluate_transition(&self, current: &[FE], next: &[FE]) -> Vec<FE> {
        let num_users = self.pub_inputs.num_users;
        let sender = &current[num_users];
        let receiver = &current[num_users + 1];
        let amount = &current[num_users + 2];

        (0..num_users)
            .map(|user| {
                let is_sender = self.selector(user, sender);
                let is_receiver = self.selector(user, receiver);
                let delta = amount * &(&is_receiver - &is_sender);
                &next[user] - &(&current[user] + &delta)
            })
            .collect()
    }

    fn pub_inputs(&self) -> &Self::PublicInputs {
        &self.pub_inputs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_air() -> RollupAIR {
        RollupAIR::new(8, &[100, 50, 25], &[90, 55, 30])
    }

    fn sample_transactions() -> Vec<Transaction> {
        vec![
            Transaction {
                from: 0,
                to: 1,
                amount: 10,
            },
            Transaction {
                from: 1,
                to: 2,
                amount: 5,
            },
        ]
    }

    #[test]
    fn selectors_pick_out_their_index() {
        let air = sample_air();
        assert_eq!(air.selector(1, &FE::from(1)), FE::one());
        assert_eq!(air.selector(1, &FE::from(2)), FE::zero());
        assert_eq!(air.selector(0, &FE::from(2)), FE::zero());
    }

    #[test]
    fn the_trace_reaches_the_final_balances() {
        let air = sample_air();
        let trace = air.generate_trace(&sample_transactions()).unwrap();

        assert_eq!(trace.n_rows(), 8);
        assert_eq!(trace.n_cols(), 6);
        let last = trace.get_row(7);
        assert_eq!(last[0], FE::from(90));
        assert_eq!(last[1], FE::from(55));
        assert_eq!(last[2], FE::from(30));
    }

    #[test]
    fn transitions_vanish_on_the_trace() {
        let air = sample_air();
        let trace = air.generate_trace(&sample_transactions()).unwrap();
        for step in 0..7 {
            for value in air.evaluate_transition(trace.get_row(step), trace.get_row(step + 1)) {
                assert_eq!(value, FE::zero());
            }
        }
    }

    #[test]
    fn the_constraint_degree_tracks_the_number_of_users() {
        let air = sample_air();
        assert_eq!(air.constraint_degree(), 3);
        assert_eq!(air.blowup_factor(), 4);
        assert_eq!(air.num_transition_constraints(), 3);
    }
}
