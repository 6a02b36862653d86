//! Lattice assembly
//!
//! Turns a neighbor-linked concept sequence into a [`Lattice`]:
//! 1. extent → position map
//! 2. `index` = shortlex rank (input position)
//! 3. `dindex` = longlex rank
//! 4. upper covers sorted by shortlex, lower covers by longlex
//! 5. atoms (upper covers of the infimum) recorded below every concept
//! 6. object and property concepts annotated with their labels

use std::sync::Arc;

use rustc_hash::FxHashMap;
use tracing::{debug, info, warn};

use crate::config::{LatticeConfig, Validatable};
use crate::errors::Result;
use crate::features::bitset::BitVector;
use crate::features::context::Context;
use crate::features::enumeration::{enumerate, RawConcept};
use crate::features::lattice::domain::{Concept, Lattice};

impl Lattice {
    /// Build the concept lattice of `context` with the default configuration
    pub fn new(context: impl Into<Arc<Context>>) -> Lattice {
        let context = context.into();
        let raw = enumerate(context.relation(), &LatticeConfig::default());
        assemble(context, raw)
    }

    /// Build the concept lattice of `context` with a validated configuration
    pub fn with_config(context: impl Into<Arc<Context>>, config: &LatticeConfig) -> Result<Lattice> {
        config.validate().map_err(|err| {
            warn!("invalid {}: {}", config.config_name(), err);
            err
        })?;
        debug!("building lattice: {}", config.describe());
        let context = context.into();
        let raw = enumerate(context.relation(), config);
        Ok(assemble(context, raw))
    }
}

/// Assemble concepts given in ascending shortlex order of their extents
///
/// Neighbor references are positions in `raw`.
pub fn assemble(context: Arc<Context>, raw: Vec<RawConcept>) -> Lattice {
    let n = raw.len();
    let mut concepts: Vec<Concept> = Vec::with_capacity(n);
    let mut mapping: FxHashMap<BitVector, usize> = FxHashMap::default();
    mapping.reserve(n);

    // 1-2. value map and index
    for (index, concept) in raw.into_iter().enumerate() {
        mapping.insert(concept.extent.clone(), index);
        let mut assembled = Concept::new(Arc::clone(&context), concept.extent, concept.intent);
        assembled.index = index;
        assembled.upper = concept.upper;
        assembled.lower = concept.lower;
        concepts.push(assembled);
    }

    // 3. dindex
    let mut by_longlex: Vec<usize> = (0..n).collect();
    by_longlex.sort_by(|&a, &b| concepts[a].extent.cmp_longlex(&concepts[b].extent));
    let mut dindex = vec![0; n];
    for (rank, &position) in by_longlex.iter().enumerate() {
        dindex[position] = rank;
    }

    // 4. neighbor order
    for (concept, &rank) in concepts.iter_mut().zip(&dindex) {
        concept.dindex = rank;
        concept.upper.sort_unstable();
        concept.lower.sort_unstable_by_key(|&lower| dindex[lower]);
    }

    // 5. atoms
    let atoms: Vec<(usize, BitVector)> = concepts
        .first()
        .map(|infimum| {
            infimum
                .upper
                .iter()
                .map(|&a| (a, concepts[a].extent.clone()))
                .collect()
        })
        .unwrap_or_default();
    for concept in &mut concepts {
        concept.atoms = atoms
            .iter()
            .filter(|(_, extent)| extent.is_subset(&concept.extent))
            .map(|&(a, _)| a)
            .collect();
    }

    // 6. annotations
    annotate(&context, &mapping, &mut concepts);

    info!(
        "assembled lattice: {} concepts, {} atoms",
        concepts.len(),
        atoms.len()
    );
    Lattice {
        context,
        concepts,
        mapping,
    }
}

/// Mark object concepts `(g'', g')` and property concepts `(m', m'')`
fn annotate(context: &Context, mapping: &FxHashMap<BitVector, usize>, concepts: &mut [Concept]) {
    let relation = context.relation();
    let (n_objects, _) = context.shape();

    for g in 0..n_objects {
        let extent = relation
            .objects()
            .double(&BitVector::singleton(n_objects, g));
        if let Some(&position) = mapping.get(&extent) {
            concepts[position].objects.push(g);
        }
    }

    for (m, extent) in relation.columns().iter().enumerate() {
        if let Some(&position) = mapping.get(extent) {
            concepts[position].properties.push(m);
        }
    }
    debug!("annotated {} object and property concepts", concepts.len());
}

/// Bring concepts in arbitrary order into shortlex order, remapping neighbors
pub fn into_shortlex_order(raw: Vec<RawConcept>) -> Vec<RawConcept> {
    let mut order: Vec<usize> = (0..raw.len()).collect();
    order.sort_by(|&a, &b| raw[a].extent.cmp_shortlex(&raw[b].extent));

    let mut rank = vec![0; raw.len()];
    for (position, &original) in order.iter().enumerate() {
        rank[original] = position;
    }

    let mut ranked: Vec<(usize, RawConcept)> = raw
        .into_iter()
        .enumerate()
        .map(|(original, concept)| (rank[original], concept))
        .collect();
    ranked.sort_unstable_by_key(|(position, _)| *position);

    ranked
        .into_iter()
        .map(|(_, mut concept)| {
            for neighbor in concept.upper.iter_mut().chain(concept.lower.iter_mut()) {
                *neighbor = rank[*neighbor];
            }
            concept
        })
        .collect()
}
