use std::path::Path;

use serde::{Deserialize, Serialize};
use starklite_math::field::{element::FieldElement, traits::IsTwoAdicField};

use crate::config::Commitment;
use crate::errors::ProofError;
use crate::fri::fri_decommit::FriQueryOpening;
use crate::proof::serialization;

/// The opening of the extended trace at one queried position: the row there,
/// the row of the next step (`blowup_factor` positions further, wrapping
/// around) and the authentication paths of both against the trace root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(bound(serialize = "", deserialize = ""))]
pub struct TraceOpening<F: IsTwoAdicField> {
    pub idx: usize,
    #[serde(with = "serialization::field_element_vec")]
    pub val: Vec<FieldElement<F>>,
    #[serde(with = "serialization::hex_digest_vec")]
    pub path: Vec<Commitment>,
    pub next_idx: usize,
    #[serde(with = "serialization::field_element_vec")]
    pub next_val: Vec<FieldElement<F>>,
    #[serde(with = "serialization::hex_digest_vec")]
    pub next_path: Vec<Commitment>,
}

/// A serialized STARK proof. The JSON rendering is canonical: hex strings are
/// lowercase without a prefix, field elements are plain integers below the
/// modulus.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(bound(serialize = "", deserialize = ""))]
pub struct StarkProof<F: IsTwoAdicField> {
    #[serde(with = "serialization::hex_digest")]
    pub trace_root: Commitment,
    #[serde(with = "serialization::hex_digest_vec")]
    pub fri_commitments: Vec<Commitment>,
    #[serde(with = "serialization::field_element")]
    pub fri_final: FieldElement<F>,
    pub fri_layer_proofs: Vec<Vec<FriQueryOpening<F>>>,
    pub trace_queries: Vec<TraceOpening<F>>,
    pub public_inputs: serde_json::Value,
    /// Accepted when present in serialized proofs for compatibility, but
    /// never produced and never consulted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub boundary_proofs: Option<serde_json::Value>,
}

impl<F: IsTwoAdicField> StarkProof<F> {
    pub fn to_json(&self) -> Result<String, ProofError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(raw: &str) -> Result<Self, ProofError> {
        Ok(serde_json::from_str(raw)?)
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ProofError> {
        std::fs::write(path, self.to_json()?)?;
        Ok(())
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ProofError> {
        Self::from_json(&std::fs::read_to_string(path)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{FE, PrimeField};

    fn sample_proof() -> StarkProof<PrimeField> {
        StarkProof {
            trace_root: [7; 32],
            fri_commitments: vec![[1; 32], [2; 32]],
            fri_final: FE::from(11),
            fri_layer_proofs: vec![vec![FriQueryOpening {
                idx: 3,
                val: FE::from(5),
                path: vec![[9; 32]],
                partner_idx: 1,
                partner_val: FE::from(8),
                partner_path: vec![[4; 32]],
            }]],
            trace_queries: vec![TraceOpening {
                idx: 3,
                val: vec![FE::from(1), FE::from(2)],
                path: vec![[3; 32]],
                next_idx: 7,
                next_val: vec![FE::from(2), FE::from(3)],
                next_path: vec![[5; 32]],
            }],
            public_inputs: serde_json::json!({ "length": 8, "result": 34 }),
            boundary_proofs: None,
        }
    }

    #[test]
    fn json_round_trip_preserves_the_proof() {
        let proof = sample_proof();
        let raw = proof.to_json().unwrap();
        assert_eq!(StarkProof::from_json(&raw).unwrap(), proof);
    }

    #[test]
    fn digests_render_as_lowercase_hex() {
        let raw = sample_proof().to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(
            value["trace_root"].as_str().unwrap(),
            "07".repeat(32)
        );
        assert_eq!(value["fri_final"].as_u64().unwrap(), 11);
        assert_eq!(value["trace_queries"][0]["val"][1].as_u64().unwrap(), 2);
    }

    #[test]
    fn out_of_range_field_elements_are_rejected() {
        let raw = sample_proof().to_json().unwrap();
        let tampered = raw.replace("\"fri_final\": 11", "\"fri_final\": 3221225473");
        assert!(StarkProof::<PrimeField>::from_json(&tampered).is_err());
    }

    #[test]
    fn malformed_hex_is_rejected() {
        let raw = sample_proof().to_json().unwrap();
        let tampered = raw.replace(&"07".repeat(32), "zz");
        assert!(StarkProof::<PrimeField>::from_json(&tampered).is_err());
    }

    #[test]
    fn unused_boundary_proofs_are_accepted() {
        let raw = sample_proof().to_json().unwrap();
        let mut value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        value["boundary_proofs"] = serde_json::json!([]);
        let proof = StarkProof::<PrimeField>::from_json(&value.to_string()).unwrap();
        assert!(proof.boundary_proofs.is_some());
    }
}
