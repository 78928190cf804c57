use log::error;
use starklite_crypto::fiat_shamir::transcript::{DefaultTranscript, IsStarkTranscript};
use starklite_crypto::merkle_tree::proof::Proof;
use starklite_math::field::{element::FieldElement, traits::IsTwoAdicField};

use crate::config::{BatchedMerkleBackend, Commitment, FriMerkleBackend};
use crate::constraints::evaluator::ConstraintEvaluator;
use crate::domain::Domain;
use crate::fri::fri_decommit::FriQueryOpening;
use crate::proof::options::ProofOptions;
use crate::proof::stark::StarkProof;
use crate::traits::AIR;

struct Challenges<F: IsTwoAdicField> {
    transition_coeffs: Vec<FieldElement<F>>,
    boundary_coeffs: Vec<FieldElement<F>>,
    betas: Vec<FieldElement<F>>,
    iotas: Vec<usize>,
}

/// Checks a proof against the AIR and its public inputs. Every soundness
/// failure collapses into a `false` verdict; the failing check is only
/// reported through the log.
pub fn verify<A>(proof: &StarkProof<A::Field>, air: &A, options: &ProofOptions) -> bool
where
    A: AIR,
{
    let domain = match Domain::new(air, options) {
        Ok(domain) => domain,
        Err(cause) => {
            error!("verification parameters are invalid: {cause}");
            return false;
        }
    };

    if !has_expected_shape(proof, air, &domain, options) {
        error!("proof shape does not match the instance");
        return false;
    }

    let mut transcript = DefaultTranscript::<A::Field>::new();
    let challenges = replay_challenges(air, proof, &domain, options, &mut transcript);

    if !verify_fri_openings(
        &proof.fri_commitments,
        &proof.fri_final,
        &proof.fri_layer_proofs,
        &challenges.betas,
        &challenges.iotas,
        domain.lde_length,
        &domain.coset_offset,
    ) {
        error!("FRI verification failed");
        return false;
    }

    if !verify_trace_openings(air, proof, &domain, &challenges) {
        error!("trace opening verification failed");
        return false;
    }

    true
}

fn has_expected_shape<A: AIR>(
    proof: &StarkProof<A::Field>,
    air: &A,
    domain: &Domain<A::Field>,
    options: &ProofOptions,
) -> bool {
    let expected_layers = domain.lde_length.trailing_zeros() as usize + 1;
    proof.fri_commitments.len() == expected_layers
        && proof.fri_layer_proofs.len() == expected_layers - 1
        && proof
            .fri_layer_proofs
            .iter()
            .all(|layer| layer.len() == options.num_queries)
        && proof.trace_queries.len() == options.num_queries
        && proof.trace_queries.iter().all(|opening| {
            opening.val.len() == air.trace_width() && opening.next_val.len() == air.trace_width()
        })
}

/// Replays the prover's transcript from the commitments in the proof and
/// recovers every challenge in the order they were drawn. The query positions
/// come after the whole FRI commit phase, so the ordering here is
/// load-bearing.
fn replay_challenges<A, T>(
    air: &A,
    proof: &StarkProof<A::Field>,
    domain: &Domain<A::Field>,
    options: &ProofOptions,
    transcript: &mut T,
) -> Challenges<A::Field>
where
    A: AIR,
    T: IsStarkTranscript<A::Field>,
{
    transcript.append_bytes(&proof.trace_root);

    let transition_coeffs = (0..air.num_transition_constraints())
        .map(|_| transcript.sample_field_element())
        .collect();
    let boundary_coeffs = (0..air.boundary_constraints().len())
        .map(|_| transcript.sample_field_element())
        .collect();

    let betas = replay_fri_commit_phase(&proof.fri_commitments, transcript);

    let iotas = (0..options.num_queries)
        .map(|_| transcript.sample_u64(domain.lde_length as u64) as usize)
        .collect();

    Challenges {
        transition_coeffs,
        boundary_coeffs,
        betas,
        iotas,
    }
}

/// Absorbs every FRI layer root, drawing one folding challenge per fold. The
/// final layer's root is absorbed too, with no challenge after it, keeping
/// the transcript identical to the prover's.
pub fn replay_fri_commit_phase<F, T>(
    commitments: &[Commitment],
    transcript: &mut T,
) -> Vec<FieldElement<F>>
where
    F: IsTwoAdicField,
    T: IsStarkTranscript<F>,
{
    if commitments.is_empty() {
        return Vec::new();
    }

    let mut betas = Vec::with_capacity(commitments.len() - 1);
    for root in &commitments[..commitments.len() - 1] {
        transcript.append_bytes(root);
        betas.push(transcript.sample_field_element());
    }
    transcript.append_bytes(&commitments[commitments.len() - 1]);
    betas
}

/// Checks the FRI query openings against the layer commitments: both Merkle
/// paths per layer, the folding relation between consecutive layers, and the
/// final constant. The evaluation point of layer zero is `offset * h^idx`;
/// each fold squares both the generator and the offset and halves the domain.
pub fn verify_fri_openings<F: IsTwoAdicField>(
    commitments: &[Commitment],
    final_value: &FieldElement<F>,
    layer_proofs: &[Vec<FriQueryOpening<F>>],
    betas: &[FieldElement<F>],
    iotas: &[usize],
    domain_length: usize,
    domain_offset: &FieldElement<F>,
) -> bool {
    if !domain_length.is_power_of_two()
        || commitments.len() != domain_length.trailing_zeros() as usize + 1
        || layer_proofs.len() != commitments.len() - 1
        || betas.len() != layer_proofs.len()
        || layer_proofs.iter().any(|layer| layer.len() != iotas.len())
    {
        return false;
    }

    let generator = match F::generator_of_order(domain_length as u64) {
        Ok(generator) => generator,
        Err(_) => return false,
    };

    // The final constant must be the single leaf behind the last commitment.
    let empty_path: Proof<Commitment> = Proof {
        merkle_path: Vec::new(),
    };
    if !empty_path.verify::<FriMerkleBackend<F>>(
        &commitments[commitments.len() - 1],
        0,
        final_value,
    ) {
        return false;
    }

    iotas.iter().enumerate().all(|(query_pos, &iota)| {
        verify_fri_query(
            commitments,
            final_value,
            layer_proofs,
            betas,
            query_pos,
            iota,
            domain_length,
            &generator,
            domain_offset,
        )
    })
}

#[allow(clippy::too_many_arguments)]
fn verify_fri_query<F: IsTwoAdicField>(
    commitments: &[Commitment],
    final_value: &FieldElement<F>,
    layer_proofs: &[Vec<FriQueryOpening<F>>],
    betas: &[FieldElement<F>],
    query_pos: usize,
    iota: usize,
    domain_length: usize,
    generator: &FieldElement<F>,
    domain_offset: &FieldElement<F>,
) -> bool {
    let two = FieldElement::<F>::from(2);
    let mut index = iota;
    let mut length = domain_length;
    let mut generator = generator.clone();
    let mut offset = domain_offset.clone();
    let mut folded: Option<FieldElement<F>> = None;

    for (layer_number, openings) in layer_proofs.iter().enumerate() {
        let opening = &openings[query_pos];
        let half = length / 2;

        if opening.idx != index || opening.partner_idx != (index + half) % length {
            return false;
        }

        let root = &commitments[layer_number];
        let path = Proof {
            merkle_path: opening.path.clone(),
        };
        if !path.verify::<FriMerkleBackend<F>>(root, opening.idx, &opening.val) {
            return false;
        }
        let partner_path = Proof {
            merkle_path: opening.partner_path.clone(),
        };
        if !partner_path.verify::<FriMerkleBackend<F>>(
            root,
            opening.partner_idx,
            &opening.partner_val,
        ) {
            return false;
        }

        // The value opened here must be the one folded from the previous
        // layer.
        if let Some(expected) = &folded {
            if opening.val != *expected {
                return false;
            }
        }

        let x = &offset * &generator.pow(index as u64);
        let even = (&opening.val + &opening.partner_val) / &two;
        let odd = (&opening.val - &opening.partner_val) / &(&two * &x);
        folded = Some(&even + &betas[layer_number] * &odd);

        index %= half;
        length = half;
        generator = generator.square();
        offset = offset.square();
    }

    match folded {
        Some(value) => value == *final_value,
        None => false,
    }
}

/// Checks the trace openings: positions, Merkle paths, and consistency of the
/// opened rows with the FRI top layer through the composition formula.
fn verify_trace_openings<A: AIR>(
    air: &A,
    proof: &StarkProof<A::Field>,
    domain: &Domain<A::Field>,
    challenges: &Challenges<A::Field>,
) -> bool {
    let evaluator = ConstraintEvaluator::new(air);

    proof
        .trace_queries
        .iter()
        .enumerate()
        .all(|(query_pos, opening)| {
            let iota = challenges.iotas[query_pos];
            if opening.idx != iota
                || opening.next_idx != (iota + domain.blowup_factor) % domain.lde_length
            {
                return false;
            }

            let path = Proof {
                merkle_path: opening.path.clone(),
            };
            if !path.verify::<BatchedMerkleBackend<A::Field>>(
                &proof.trace_root,
                opening.idx,
                &opening.val,
            ) {
                return false;
            }
            let next_path = Proof {
                merkle_path: opening.next_path.clone(),
            };
            if !next_path.verify::<BatchedMerkleBackend<A::Field>>(
                &proof.trace_root,
                opening.next_idx,
                &opening.next_val,
            ) {
                return false;
            }

            // The composition value recomputed from the opened rows must be
            // exactly the value the FRI top layer opened at this position.
            let expected = evaluator.evaluate_at(
                &domain.lde_coset[iota],
                &opening.val,
                &opening.next_val,
                domain,
                &challenges.transition_coeffs,
                &challenges.boundary_coeffs,
            );
            let fri_opening = &proof.fri_layer_proofs[0][query_pos];
            fri_opening.idx == iota && fri_opening.val == expected
        })
}
