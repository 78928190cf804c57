use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FieldError {
    /// The zero element has no multiplicative inverse.
    #[error("tried to invert the zero element")]
    Inverse,
    /// The multiplicative group has no subgroup of the requested order.
    #[error("the field has no multiplicative subgroup of order {0}")]
    NoSubgroup(u64),
}
