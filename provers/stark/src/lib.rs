pub mod config;
pub mod constraints;
pub mod debug;
pub mod domain;
pub mod errors;
pub mod examples;
pub mod fri;
pub mod proof;
pub mod prover;
pub mod trace;
pub mod traits;
pub mod verifier;

use starklite_math::field::element::FieldElement;
use starklite_math::field::fields::stark101_prime_field::Stark101PrimeField;

/// The field the engine proves over.
pub type PrimeField = Stark101PrimeField;
pub type FE = FieldElement<PrimeField>;
