use starklite_math::{errors::AlgebraError, fft::errors::FFTError, field::errors::FieldError};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TraceError {
    #[error("trace length {0} is not a power of two")]
    LengthNotPowerOfTwo(usize),
    #[error("row {row} has {got} registers, expected {expected}")]
    InconsistentRowWidth {
        row: usize,
        expected: usize,
        got: usize,
    },
}

/// Errors the prover surfaces to its caller. They indicate a bad witness or
/// configuration, never a soundness failure.
#[derive(Debug, Error)]
pub enum ProvingError {
    #[error(transparent)]
    InvalidTrace(#[from] TraceError),
    #[error(transparent)]
    Algebra(#[from] AlgebraError),
    #[error(transparent)]
    Field(#[from] FieldError),
    #[error(transparent)]
    Fft(#[from] FFTError),
    #[error(
        "composition polynomial of degree {degree} does not fit in the evaluation domain of size {domain_size}"
    )]
    CompositionDegreeTooLarge { degree: usize, domain_size: usize },
    #[error("could not encode public inputs: {0}")]
    PublicInputs(#[from] serde_json::Error),
}

/// Errors reading or writing serialized proofs. Distinct from verification
/// failures: a malformed file is reported here, a well-formed but false proof
/// is reported by the verifier's verdict.
#[derive(Debug, Error)]
pub enum ProofError {
    #[error("malformed proof: {0}")]
    Format(#[from] serde_json::Error),
    #[error("could not access proof file: {0}")]
    Io(#[from] std::io::Error),
}
