use thiserror::Error;

use crate::field::errors::FieldError;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FFTError {
    #[error("input length {0} is not a power of two")]
    InputSizeNotPowerOfTwo(usize),
    #[error("the given root of unity does not have order {0}")]
    RootOfUnityOrderMismatch(usize),
    #[error("{0} coefficients do not fit in an evaluation domain of size {1}")]
    DomainSizeTooSmall(usize, usize),
    #[error(transparent)]
    Field(#[from] FieldError),
}
