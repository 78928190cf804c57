pub mod fri_commitment;
pub mod fri_decommit;

use starklite_crypto::fiat_shamir::transcript::IsStarkTranscript;
use starklite_math::field::{element::FieldElement, traits::IsTwoAdicField};

use self::fri_commitment::FriLayer;
use self::fri_decommit::FriQueryOpening;

/// FRI commit phase. Starting from the evaluations of the composition
/// polynomial on the LDE coset, each round commits to the current layer,
/// draws a folding challenge and halves the evaluation table:
///
/// ```text
/// even = (v[i] + v[i + L/2]) / 2
/// odd  = (v[i] - v[i + L/2]) / (2 * x)
/// next[i] = even + zeta * odd
/// ```
///
/// with `x = domain[i]`, the next domain being the squares of the first half
/// of the current one. The value surviving the last fold is the final
/// constant.
pub fn fri_commit_phase<F, T>(
    evaluations: Vec<FieldElement<F>>,
    domain: &[FieldElement<F>],
    transcript: &mut T,
) -> (Vec<FriLayer<F>>, FieldElement<F>)
where
    F: IsTwoAdicField,
    T: IsStarkTranscript<F>,
{
    let mut layers = Vec::new();
    let first_layer = FriLayer::new(evaluations, domain.to_vec());
    transcript.append_bytes(&first_layer.merkle_tree.root);
    layers.push(first_layer);

    let two = FieldElement::<F>::from(2);
    while layers.last().unwrap().evaluation.len() > 1 {
        let zeta = transcript.sample_field_element();

        let current = layers.last().unwrap();
        let half = current.evaluation.len() / 2;
        let mut next_evaluation = Vec::with_capacity(half);
        let mut next_domain = Vec::with_capacity(half);
        for i in 0..half {
            let x = &current.domain[i];
            let v = &current.evaluation[i];
            let v_sym = &current.evaluation[i + half];

            let even = (v + v_sym) / &two;
            let odd = (v - v_sym) / &(&two * x);
            next_evaluation.push(&even + &zeta * &odd);
            next_domain.push(x.square());
        }

        let layer = FriLayer::new(next_evaluation, next_domain);
        transcript.append_bytes(&layer.merkle_tree.root);
        layers.push(layer);
    }

    let final_value = layers.last().unwrap().evaluation[0].clone();
    (layers, final_value)
}

/// FRI query phase: for every queried top-layer index, reveals the value and
/// its folding partner (with their authentication paths) at every layer but
/// the final constant one. Walking down the layers the index folds as
/// `idx mod (len / 2)`.
pub fn fri_query_phase<F>(
    layers: &[FriLayer<F>],
    indices: &[usize],
) -> Vec<Vec<FriQueryOpening<F>>>
where
    F: IsTwoAdicField,
{
    let mut layer_openings = Vec::with_capacity(layers.len().saturating_sub(1));
    let mut current_indices: Vec<usize> = indices.to_vec();

    for layer in &layers[..layers.len() - 1] {
        let length = layer.evaluation.len();
        let half = length / 2;

        let openings = current_indices
            .iter()
            .map(|&idx| {
                let partner_idx = (idx + half) % length;
                FriQueryOpening {
                    idx,
                    val: layer.evaluation[idx].clone(),
                    path: layer.merkle_tree.get_proof(idx).unwrap().merkle_path,
                    partner_idx,
                    partner_val: layer.evaluation[partner_idx].clone(),
                    partner_path: layer.merkle_tree.get_proof(partner_idx).unwrap().merkle_path,
                }
            })
            .collect();
        layer_openings.push(openings);

        current_indices = current_indices.iter().map(|idx| idx % half).collect();
    }

    layer_openings
}
