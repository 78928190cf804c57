use std::marker::PhantomData;

use sha2::Digest;
use starklite_math::{
    field::{element::FieldElement, traits::IsField},
    traits::ByteConversion,
};

use crate::merkle_tree::traits::IsMerkleTreeBackend;

/// A Merkle tree backend whose leaves are rows of field elements. The row is
/// hashed as the concatenation of the big-endian bytes of its elements.
#[derive(Debug, Clone)]
pub struct FieldElementVectorBackend<F, D: Digest> {
    phantom1: PhantomData<F>,
    phantom2: PhantomData<D>,
}

impl<F, D: Digest> IsMerkleTreeBackend for FieldElementVectorBackend<F, D>
where
    F: IsField,
    FieldElement<F>: ByteConversion,
{
    type Node = [u8; 32];
    type Data = Vec<FieldElement<F>>;

    fn hash_data(leaf: &Vec<FieldElement<F>>) -> [u8; 32] {
        let mut hasher = D::new();
        for element in leaf {
            hasher.update(element.to_bytes_be());
        }
        let mut node = [0_u8; 32];
        node.copy_from_slice(&hasher.finalize());
        node
    }

    fn hash_new_parent(left: &[u8; 32], right: &[u8; 32]) -> [u8; 32] {
        let mut hasher = D::new();
        hasher.update(left);
        hasher.update(right);
        let mut node = [0_u8; 32];
        node.copy_from_slice(&hasher.finalize());
        node
    }
}

#[cfg(test)]
mod tests {
    use sha2::Sha256;
    use starklite_math::field::fields::stark101_prime_field::Stark101PrimeField;

    use super::*;
    use crate::merkle_tree::merkle::MerkleTree;

    type F = Stark101PrimeField;
    type FE = FieldElement<F>;

    #[test]
    fn rows_commit_and_verify() {
        let rows: Vec<Vec<FE>> = (0..8)
            .map(|i| vec![FE::from(i), FE::from(i * i)])
            .collect();
        let tree = MerkleTree::<FieldElementVectorBackend<F, Sha256>>::build(&rows);
        let proof = tree.get_proof(2).unwrap();
        assert!(proof.verify::<FieldElementVectorBackend<F, Sha256>>(&tree.root, 2, &rows[2]));
        assert!(!proof.verify::<FieldElementVectorBackend<F, Sha256>>(&tree.root, 2, &rows[3]));
    }
}
