/// A backend fixes the digest and the leaf data type of a Merkle tree.
pub trait IsMerkleTreeBackend {
    type Node: Clone + PartialEq + Eq + Default;
    type Data;

    /// Hashes a single leaf into a node.
    fn hash_data(leaf: &Self::Data) -> Self::Node;

    /// Hashes the concatenation of two child nodes into their parent.
    fn hash_new_parent(left: &Self::Node, right: &Self::Node) -> Self::Node;
}
