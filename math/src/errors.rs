use thiserror::Error;

use crate::field::errors::FieldError;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AlgebraError {
    /// Interpolation nodes must be pairwise distinct.
    #[error("duplicate interpolation nodes")]
    DuplicateNodes,
    #[error("mismatched interpolation input lengths: {0} nodes, {1} values")]
    LengthMismatch(usize, usize),
    #[error(transparent)]
    Field(#[from] FieldError),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ByteConversionError {
    #[error("expected {expected} bytes, got {got}")]
    InvalidLength { expected: usize, got: usize },
}
