use super::traits::IsMerkleTreeBackend;

/// An inclusion proof: the sibling nodes on the way from a leaf up to the
/// root, bottom first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Proof<T> {
    pub merkle_path: Vec<T>,
}

impl<T> Proof<T>
where
    T: Clone + PartialEq + Eq,
{
    /// Rehashes the leaf up the path and compares against `root`. At every
    /// level the parity of the index decides whether the sibling goes on the
    /// left or on the right.
    pub fn verify<B>(&self, root: &B::Node, mut index: usize, data: &B::Data) -> bool
    where
        B: IsMerkleTreeBackend<Node = T>,
    {
        let mut node = B::hash_data(data);
        for sibling in &self.merkle_path {
            node = if index % 2 == 1 {
                B::hash_new_parent(sibling, &node)
            } else {
                B::hash_new_parent(&node, sibling)
            };
            index /= 2;
        }
        node == *root
    }
}
