use log::info;
use starklite_crypto::fiat_shamir::transcript::{DefaultTranscript, IsStarkTranscript};
use starklite_math::fft::{evaluate_offset_fft, interpolate_offset_fft};
use starklite_math::field::element::FieldElement;
use starklite_math::polynomial::Polynomial;

use crate::config::{BatchedMerkleTree, Commitment};
use crate::constraints::evaluator::ConstraintEvaluator;
use crate::domain::Domain;
use crate::errors::ProvingError;
use crate::fri::{fri_commit_phase, fri_query_phase};
use crate::proof::options::ProofOptions;
use crate::proof::stark::{StarkProof, TraceOpening};
use crate::trace::TraceTable;
use crate::traits::AIR;

/// Produces a proof that `trace` satisfies every constraint of `air`.
///
/// The protocol rounds, in transcript order:
/// 1. commit to the rows of the low degree extension of the trace,
/// 2. draw one combination challenge per transition and boundary constraint,
/// 3. evaluate the composition polynomial on the extended domain and recover
///    its coefficients (a degree sanity check on the way),
/// 4. run the FRI commit phase on those evaluations,
/// 5. draw the query positions and open trace and FRI layers at them.
pub fn prove<A>(
    trace: &TraceTable<A::Field>,
    air: &A,
    options: &ProofOptions,
) -> Result<StarkProof<A::Field>, ProvingError>
where
    A: AIR,
{
    let mut transcript = DefaultTranscript::<A::Field>::new();
    let domain = Domain::new(air, options)?;

    debug_assert!(
        crate::debug::validate_trace(air, trace),
        "the witness trace does not satisfy the AIR constraints"
    );

    // Round 1: extend the trace to the evaluation coset and commit to its rows.
    info!(
        "extending {} trace columns of length {} with blowup {}",
        trace.n_cols(),
        domain.trace_length,
        domain.blowup_factor
    );
    let trace_polys = trace.compute_trace_polys()?;
    let lde_columns = trace_polys
        .iter()
        .map(|poly| {
            evaluate_offset_fft(
                poly,
                &domain.lde_primitive_root,
                domain.lde_length,
                &domain.coset_offset,
            )
        })
        .collect::<Result<Vec<_>, _>>()?;
    let lde_trace = TraceTable::from_columns(lde_columns)?;
    let trace_tree = BatchedMerkleTree::<A::Field>::build(&lde_trace.rows());
    let trace_root = trace_tree.root;
    transcript.append_bytes(&trace_root);

    // Round 2: one challenge per transition constraint, then one per boundary
    // constraint.
    let transition_coeffs: Vec<FieldElement<A::Field>> = (0..air.num_transition_constraints())
        .map(|_| transcript.sample_field_element())
        .collect();
    let boundary_coeffs: Vec<FieldElement<A::Field>> = (0..air.boundary_constraints().len())
        .map(|_| transcript.sample_field_element())
        .collect();

    // Round 3: the composition polynomial on the coset.
    let evaluator = ConstraintEvaluator::new(air);
    let composition_evaluations = evaluator.evaluate(
        &lde_trace,
        &domain,
        &transition_coeffs,
        &boundary_coeffs,
    );
    let composition_poly =
        interpolate_composition_poly(air, &domain, &composition_evaluations)?;
    debug_assert!(
        crate::debug::validate_composition_poly(&composition_poly, &domain, &composition_evaluations),
        "the composition evaluations are not those of a low degree polynomial"
    );

    // Round 4: FRI commit phase over the composition evaluations.
    let (fri_layers, fri_final) =
        fri_commit_phase(composition_evaluations, &domain.lde_coset, &mut transcript);
    let fri_commitments: Vec<Commitment> = fri_layers
        .iter()
        .map(|layer| layer.merkle_tree.root)
        .collect();

    // Round 5: query positions come after the whole FRI transcript.
    let indices: Vec<usize> = (0..options.num_queries)
        .map(|_| transcript.sample_u64(domain.lde_length as u64) as usize)
        .collect();
    let fri_layer_proofs = fri_query_phase(&fri_layers, &indices);
    let trace_queries = open_trace_queries(&lde_trace, &trace_tree, &domain, &indices);

    info!(
        "proved {} steps with {} queries over a domain of size {}",
        domain.trace_length, options.num_queries, domain.lde_length
    );

    Ok(StarkProof {
        trace_root,
        fri_commitments,
        fri_final,
        fri_layer_proofs,
        trace_queries,
        public_inputs: serde_json::to_value(air.pub_inputs())?,
        boundary_proofs: None,
    })
}

/// Recovers the coefficients of the composition polynomial from its coset
/// evaluations, using the smallest power-of-two stride that still covers the
/// expected degree `(d - 1) * N + (N - 1)`. Fails when even the full domain
/// is too small for the constraint degree.
fn interpolate_composition_poly<A: AIR>(
    air: &A,
    domain: &Domain<A::Field>,
    evaluations: &[FieldElement<A::Field>],
) -> Result<Polynomial<FieldElement<A::Field>>, ProvingError> {
    let trace_length = domain.trace_length;
    let expected_degree = (air.constraint_degree() - 1) * trace_length + (trace_length - 1);

    let mut needed_length = trace_length;
    while needed_length <= expected_degree {
        needed_length *= 2;
    }
    if needed_length > domain.lde_length {
        return Err(ProvingError::CompositionDegreeTooLarge {
            degree: expected_degree,
            domain_size: domain.lde_length,
        });
    }

    // The strided points form a coset of the subgroup of order
    // `needed_length` with the same offset.
    let stride = domain.lde_length / needed_length;
    let subset: Vec<FieldElement<A::Field>> = evaluations.iter().step_by(stride).cloned().collect();
    let sub_generator = domain.lde_primitive_root.pow(stride as u64);
    Ok(interpolate_offset_fft(
        &subset,
        &sub_generator,
        &domain.coset_offset,
    )?)
}

fn open_trace_queries<F>(
    lde_trace: &TraceTable<F>,
    trace_tree: &BatchedMerkleTree<F>,
    domain: &Domain<F>,
    indices: &[usize],
) -> Vec<TraceOpening<F>>
where
    F: starklite_math::field::traits::IsTwoAdicField,
{
    indices
        .iter()
        .map(|&idx| {
            let next_idx = (idx + domain.blowup_factor) % domain.lde_length;
            TraceOpening {
                idx,
                val: lde_trace.get_row(idx).to_vec(),
                path: trace_tree.get_proof(idx).unwrap().merkle_path,
                next_idx,
                next_val: lde_trace.get_row(next_idx).to_vec(),
                next_path: trace_tree.get_proof(next_idx).unwrap().merkle_path,
            }
        })
        .collect()
}
