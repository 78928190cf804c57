use sha2::Sha256;
use starklite_crypto::merkle_tree::{
    backends::{field_element::FieldElementBackend, field_element_vector::FieldElementVectorBackend},
    merkle::MerkleTree,
};

/// A 32-byte Merkle root.
pub type Commitment = [u8; 32];

/// Tree committing to one field element per leaf, used for the FRI layers.
pub type FriMerkleTree<F> = MerkleTree<FieldElementBackend<F, Sha256>>;
pub type FriMerkleBackend<F> = FieldElementBackend<F, Sha256>;

/// Tree committing to one trace row per leaf.
pub type BatchedMerkleTree<F> = MerkleTree<FieldElementVectorBackend<F, Sha256>>;
pub type BatchedMerkleBackend<F> = FieldElementVectorBackend<F, Sha256>;
