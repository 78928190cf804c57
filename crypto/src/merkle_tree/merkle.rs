use super::{proof::Proof, traits::IsMerkleTreeBackend};

/// A binary Merkle tree stored layer by layer, leaves first. A layer with an
/// odd number of nodes duplicates its last node, so every node has a sibling
/// and authentication paths have length `ceil(log2(leaves))`.
#[derive(Debug, Clone)]
pub struct MerkleTree<B: IsMerkleTreeBackend> {
    pub root: B::Node,
    layers: Vec<Vec<B::Node>>,
}

impl<B> MerkleTree<B>
where
    B: IsMerkleTreeBackend,
{
    pub fn build(unhashed_leaves: &[B::Data]) -> Self {
        let hashed_leaves: Vec<B::Node> = unhashed_leaves.iter().map(B::hash_data).collect();
        if hashed_leaves.is_empty() {
            // An empty input commits to the zeroed node.
            return Self {
                root: B::Node::default(),
                layers: Vec::new(),
            };
        }

        let mut layers = vec![hashed_leaves];
        while layers.last().unwrap().len() > 1 {
            let current_layer = layers.last().unwrap();
            let mut next_layer = Vec::with_capacity((current_layer.len() + 1) / 2);
            for pair in current_layer.chunks(2) {
                let left = &pair[0];
                let right = pair.get(1).unwrap_or(left);
                next_layer.push(B::hash_new_parent(left, right));
            }
            layers.push(next_layer);
        }

        let root = layers.last().unwrap()[0].clone();
        MerkleTree { root, layers }
    }

    pub fn leaf_count(&self) -> usize {
        self.layers.first().map_or(0, Vec::len)
    }

    /// Builds the authentication path for the leaf at `leaf_index`: the
    /// sibling of the leaf, then the sibling of its parent, and so on up to
    /// the children of the root. A node at the odd end of a layer is its own
    /// sibling.
    pub fn get_proof(&self, leaf_index: usize) -> Option<Proof<B::Node>> {
        if leaf_index >= self.leaf_count() {
            return None;
        }

        let mut merkle_path = Vec::with_capacity(self.layers.len().saturating_sub(1));
        let mut index = leaf_index;
        for layer in &self.layers[..self.layers.len() - 1] {
            let sibling_index = if index % 2 == 1 { index - 1 } else { index + 1 };
            let sibling_index = if sibling_index < layer.len() {
                sibling_index
            } else {
                index
            };
            merkle_path.push(layer[sibling_index].clone());
            index /= 2;
        }

        Some(Proof { merkle_path })
    }
}
