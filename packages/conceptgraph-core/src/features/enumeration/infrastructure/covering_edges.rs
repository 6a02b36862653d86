//! Covering edges (Carpineto & Romano, "Concept Data Analysis", 2004)
//!
//! For a concept `(A, B)` and each property `m ∉ B`, the candidate `A ∩ m'`
//! is the extent of a smaller concept. The candidate is a lower cover exactly
//! when the number of properties producing it reaches `|B_candidate| - |B|`.
//!
//! The sharded variant stripes concepts over `num_shards` rayon tasks against
//! a read-only extent index and concatenates the per-shard edge lists.

use rustc_hash::FxHashMap;
use tracing::{debug, info};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::config::ParallelConfig;
use crate::features::bitset::BitVector;
use crate::features::context::Relation;
use crate::features::enumeration::infrastructure::fcbo::{Fcbo, Orientation};
use crate::features::enumeration::ports::{ConceptSource, RawConcept};

/// Extent → position in the concept list
pub type ExtentIndex = FxHashMap<BitVector, usize>;

pub fn extent_index(concepts: &[(BitVector, BitVector)]) -> ExtentIndex {
    concepts
        .iter()
        .enumerate()
        .map(|(position, (extent, _))| (extent.clone(), position))
        .collect()
}

/// Lower covers of `concepts[position]`, as positions
///
/// Candidates absent from `index` are skipped; over a complete concept list
/// every candidate is present.
pub fn lower_covers(
    relation: &Relation,
    concepts: &[(BitVector, BitVector)],
    index: &ExtentIndex,
    position: usize,
) -> Vec<usize> {
    let (extent, intent) = &concepts[position];
    let intent_count = intent.count();
    let mut counter: FxHashMap<usize, usize> = FxHashMap::default();
    let mut covers = Vec::new();

    for m in intent.complement().iter() {
        let candidate = extent.intersection(&relation.columns()[m]);
        let Some(&found) = index.get(&candidate) else {
            continue;
        };
        let seen = counter.entry(found).or_insert(0);
        *seen += 1;
        if concepts[found].1.count() - intent_count == *seen {
            covers.push(found);
        }
    }

    covers
}

/// First candidate extent below `concepts[position]` missing from `index`
///
/// Every candidate is the extent of some concept, so a miss proves the list
/// incomplete.
pub fn missing_candidate(
    relation: &Relation,
    concepts: &[(BitVector, BitVector)],
    index: &ExtentIndex,
    position: usize,
) -> Option<BitVector> {
    let (extent, intent) = &concepts[position];
    intent
        .complement()
        .iter()
        .map(|m| extent.intersection(&relation.columns()[m]))
        .find(|candidate| !index.contains_key(candidate))
}

/// `(upper, lower)` position pairs over a complete concept list
pub fn covering_edges(
    relation: &Relation,
    concepts: &[(BitVector, BitVector)],
    index: &ExtentIndex,
) -> Vec<(usize, usize)> {
    (0..concepts.len())
        .flat_map(|position| {
            lower_covers(relation, concepts, index, position)
                .into_iter()
                .map(move |lower| (position, lower))
        })
        .collect()
}

/// Sharded [`covering_edges`]: shard `s` handles positions `s, s + k, s + 2k, ..`
#[cfg(feature = "parallel")]
pub fn covering_edges_sharded(
    relation: &Relation,
    concepts: &[(BitVector, BitVector)],
    index: &ExtentIndex,
    num_shards: usize,
) -> Vec<(usize, usize)> {
    let num_shards = num_shards.max(1);
    let shards: Vec<Vec<(usize, usize)>> = (0..num_shards)
        .into_par_iter()
        .map(|shard| {
            (shard..concepts.len())
                .step_by(num_shards)
                .flat_map(|position| {
                    lower_covers(relation, concepts, index, position)
                        .into_iter()
                        .map(move |lower| (position, lower))
                })
                .collect()
        })
        .collect();
    shards.into_iter().flatten().collect()
}

#[cfg(not(feature = "parallel"))]
pub fn covering_edges_sharded(
    relation: &Relation,
    concepts: &[(BitVector, BitVector)],
    index: &ExtentIndex,
    _num_shards: usize,
) -> Vec<(usize, usize)> {
    covering_edges(relation, concepts, index)
}

/// FCbO enumeration plus covering edges, in shortlex order
pub fn lattice_fcbo(
    relation: &Relation,
    orientation: Orientation,
    parallel: &ParallelConfig,
) -> Vec<RawConcept> {
    let mut concepts: Vec<(BitVector, BitVector)> = Fcbo::new(relation, orientation).collect();
    concepts.sort_by(|a, b| a.0.cmp_shortlex(&b.0));
    let index = extent_index(&concepts);
    debug!("fcbo ({:?}): {} concepts", orientation, concepts.len());

    let edges = if parallel.enabled {
        let shards = parallel.effective_shards();
        debug!("covering edges over {} shards", shards);
        covering_edges_sharded(relation, &concepts, &index, shards)
    } else {
        covering_edges(relation, &concepts, &index)
    };

    let mut result: Vec<RawConcept> = concepts
        .into_iter()
        .map(|(extent, intent)| RawConcept::new(extent, intent))
        .collect();
    for &(upper, lower) in &edges {
        result[upper].lower.push(lower);
        result[lower].upper.push(upper);
    }
    for concept in &mut result {
        concept.upper.sort_unstable();
        concept.lower.sort_unstable();
    }

    info!(
        "lattice_fcbo: {} concepts, {} covering edges",
        result.len(),
        edges.len()
    );
    result
}

/// FCbO (either orientation) with covering edges
#[derive(Debug, Clone)]
pub struct FcboLattice {
    pub orientation: Orientation,
    pub parallel: ParallelConfig,
}

impl ConceptSource for FcboLattice {
    fn name(&self) -> &'static str {
        match self.orientation {
            Orientation::Intents => "fcbo",
            Orientation::Extents => "fcbo_dual",
        }
    }

    fn lattice(&self, relation: &Relation) -> Vec<RawConcept> {
        lattice_fcbo(relation, self.orientation, &self.parallel)
    }
}
