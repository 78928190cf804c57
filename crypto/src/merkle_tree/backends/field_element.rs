use std::marker::PhantomData;

use sha2::Digest;
use starklite_math::{
    field::{element::FieldElement, traits::IsField},
    traits::ByteConversion,
};

use crate::merkle_tree::traits::IsMerkleTreeBackend;

/// A Merkle tree backend whose leaves are single field elements, hashed
/// through their big-endian byte rendering. The digest must produce 32-byte
/// outputs.
#[derive(Debug, Clone)]
pub struct FieldElementBackend<F, D: Digest> {
    phantom1: PhantomData<F>,
    phantom2: PhantomData<D>,
}

impl<F, D: Digest> IsMerkleTreeBackend for FieldElementBackend<F, D>
where
    F: IsField,
    FieldElement<F>: ByteConversion,
{
    type Node = [u8; 32];
    type Data = FieldElement<F>;

    fn hash_data(leaf: &FieldElement<F>) -> [u8; 32] {
        let mut hasher = D::new();
        hasher.update(leaf.to_bytes_be());
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
