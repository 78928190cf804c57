use starklite_math::field::{element::FieldElement, traits::IsTwoAdicField};

use crate::config::FriMerkleTree;

/// One layer of the FRI folding: its evaluations, the domain they live on and
/// the Merkle tree committing to them.
#[derive(Debug, Clone)]
pub struct FriLayer<F: IsTwoAdicField> {
    pub evaluation: Vec<FieldElement<F>>,
    pub domain: Vec<FieldElement<F>>,
    pub merkle_tree: FriMerkleTree<F>,
}

impl<F: IsTwoAdicField> FriLayer<F> {
    pub fn new(evaluation: Vec<FieldElement<F>>, domain: Vec<FieldElement<F>>) -> Self {
        let merkle_tree = FriMerkleTree::build(&evaluation);
        Self {
            evaluation,
            domain,
            merkle_tree,
        }
    }
}
