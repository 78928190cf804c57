use std::marker::PhantomData;

use sha2::{Digest, Sha256};
use starklite_math::field::{element::FieldElement, traits::IsField};

/// The non-interactive channel between prover and verifier. The prover
/// absorbs every commitment it emits; challenges are then deterministic
/// functions of everything absorbed so far, and the verifier recovers them
/// by replaying the same sequence of operations in the same order.
pub trait IsStarkTranscript<F: IsField> {
    /// Absorbs prover-sent bytes: `state <- H(state || bytes)`.
    fn append_bytes(&mut self, new_bytes: &[u8]);

    /// Draws a field challenge and advances the state: `state <- H(state)`,
    /// challenge = first 8 bytes of the new state, big endian, reduced
    /// modulo the field order.
    fn sample_field_element(&mut self) -> FieldElement<F>;

    /// Draws an integer in `[0, upper_bound)` from a field challenge.
    fn sample_u64(&mut self, upper_bound: u64) -> u64;
}

/// SHA-256 chaining transcript, starting from the empty state.
#[derive(Debug, Clone, Default)]
pub struct DefaultTranscript<F: IsField> {
    state: Vec<u8>,
    phantom: PhantomData<F>,
}

impl<F: IsField> DefaultTranscript<F> {
    pub fn new() -> Self {
        Self {
            state: Vec::new(),
            phantom: PhantomData,
        }
    }
}

impl<F> IsStarkTranscript<F> for DefaultTranscript<F>
where
    F: IsField<BaseType = u64>,
{
    fn append_bytes(&mut self, new_bytes: &[u8]) {
        let mut hasher = Sha256::new();
        hasher.update(&self.state);
        hasher.update(new_bytes);
        self.state = hasher.finalize().to_vec();
    }

    fn sample_field_element(&mut self) -> FieldElement<F> {
        let mut hasher = Sha256::new();
        hasher.update(&self.state);
        self.state = hasher.finalize().to_vec();
        let raw = u64::from_be_bytes(self.state[..8].try_into().unwrap());
        FieldElement::from(raw)
    }

    fn sample_u64(&mut self, upper_bound: u64) -> u64 {
        // Reduction modulo the range; prover and verifier apply the same rule.
        self.sample_field_element().representative() % upper_bound
    }
}

#[cfg(test)]
mod tests {
    use starklite_math::field::fields::stark101_prime_field::Stark101PrimeField;

    use super::*;

    type F = Stark101PrimeField;

    #[test]
    fn equal_transcripts_produce_equal_challenge_streams() {
        let mut a = DefaultTranscript::<F>::new();
        let mut b = DefaultTranscript::<F>::new();

        for transcript in [&mut a, &mut b] {
            transcript.append_bytes(b"first message");
            transcript.append_bytes(b"second message");
        }

        for _ in 0..10 {
            assert_eq!(a.sample_field_element(), b.sample_field_element());
        }
    }

    #[test]
    fn diverging_prefixes_diverge_forever() {
        let mut a = DefaultTranscript::<F>::new();
        let mut b = DefaultTranscript::<F>::new();

        a.append_bytes(b"first message");
        b.append_bytes(b"first messagf");

        for _ in 0..10 {
            assert_ne!(a.sample_field_element(), b.sample_field_element());
        }
    }

    #[test]
    fn challenges_depend_on_every_prior_message() {
        let mut a = DefaultTranscript::<F>::new();
        let mut b = DefaultTranscript::<F>::new();

        a.append_bytes(b"shared");
        b.append_bytes(b"shared");
        assert_eq!(a.sample_field_element(), b.sample_field_element());

        a.append_bytes(b"only a");
        assert_ne!(a.sample_field_element(), b.sample_field_element());
    }

    #[test]
    fn sampled_integers_stay_in_range() {
        let mut transcript = DefaultTranscript::<F>::new();
        transcript.append_bytes(b"seed");
        for _ in 0..100 {
            assert!(transcript.sample_u64(32) < 32);
        }
    }
}
