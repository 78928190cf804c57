use serde::{Deserialize, Serialize};
use starklite_math::field::{element::FieldElement, traits::IsTwoAdicField};

use crate::config::Commitment;
use crate::proof::serialization;

/// The opening of one FRI layer at one queried index: the value there, the
/// value at the folding partner index `(idx + len/2) mod len`, and the
/// authentication paths of both.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(bound(serialize = "", deserialize = ""))]
pub struct FriQueryOpening<F: IsTwoAdicField> {
    pub idx: usize,
    #[serde(with = "serialization::field_element")]
    pub val: FieldElement<F>,
    #[serde(with = "serialization::hex_digest_vec")]
    pub path: Vec<Commitment>,
    pub partner_idx: usize,
    #[serde(with = "serialization::field_element")]
    pub partner_val: FieldElement<F>,
    #[serde(with = "serialization::hex_digest_vec")]
    pub partner_path: Vec<Commitment>,
}
