use starklite_math::field::{element::FieldElement, traits::IsField};

/// Pins one register at one step of the trace to a publicly known value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoundaryConstraint<F: IsField> {
    pub step: usize,
    pub register: usize,
    pub value: FieldElement<F>,
}

impl<F: IsField> BoundaryConstraint<F> {
    pub fn new(step: usize, register: usize, value: FieldElement<F>) -> Self {
        Self {
            step,
            register,
            value,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoundaryConstraints<F: IsField> {
    pub constraints: Vec<BoundaryConstraint<F>>,
}

impl<F: IsField> BoundaryConstraints<F> {
    pub fn from_constraints(constraints: Vec<BoundaryConstraint<F>>) -> Self {
        Self { constraints }
    }

    pub fn len(&self) -> usize {
        self.constraints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.constraints.is_empty()
    }
}
