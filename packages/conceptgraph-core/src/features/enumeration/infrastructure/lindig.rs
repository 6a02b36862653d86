//! Frontier enumeration (Lindig, "Fast Concept Analysis", ICCS 2000)
//!
//! Concepts are popped from a min-heap keyed by the shortlex order of their
//! extents. Each pop computes the upper neighbors of the popped extent; new
//! extents are memoized and pushed, known ones only gain a lower link.
//! Because every upper neighbor strictly grows the extent, pops come out in
//! ascending shortlex order and each concept is complete when popped.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use rustc_hash::FxHashMap;
use tracing::debug;

use crate::errors::Result;
use crate::features::bitset::{BitVector, Shortlex};
use crate::features::context::{Context, Derivation, LabeledPair, Relation};
use crate::features::enumeration::ports::{ConceptSource, RawConcept};

/// Upper neighbors of the closed object set `objects`
///
/// A candidate `objects ∪ {i}` is closed; if the closure pulls in another
/// position still marked minimal, `i` is not minimal and is dropped from the
/// mask, otherwise the closure is an upper neighbor.
pub fn neighbors(derivation: Derivation<'_>, objects: &BitVector) -> Vec<(BitVector, BitVector)> {
    let mut result = Vec::new();
    let mut minimal = objects.complement();

    for i in objects.complement().iter() {
        if !minimal.contains(i) {
            continue;
        }
        let objects_and_add = objects.with(i);
        let (extent, intent) = derivation.doubleprime(&objects_and_add);

        if extent.difference(&objects_and_add).intersects(&minimal) {
            minimal = minimal.without(i);
        } else {
            result.push((extent, intent));
        }
    }

    result
}

impl Context {
    /// Upper neighbors of the concept generated by `objects`
    pub fn neighbors<S: AsRef<str>>(&self, objects: &[S]) -> Result<Vec<LabeledPair<'_>>> {
        let extent = self.objects().from_labels(objects)?;
        let derivation = self.relation().objects();
        let extent = derivation.double(&extent);
        Ok(neighbors(derivation, &extent)
            .iter()
            .map(|(extent, intent)| self.labeled(extent, intent))
            .collect())
    }
}

/// All concepts above the closure of `infimum`, in pop (shortlex) order
pub fn lattice(relation: &Relation, infimum: &BitVector) -> Vec<RawConcept> {
    let derivation = relation.objects();
    let (extent, intent) = derivation.doubleprime(infimum);

    let mut created = vec![RawConcept::new(extent.clone(), intent)];
    let mut mapping: FxHashMap<BitVector, usize> = FxHashMap::default();
    let mut heap: BinaryHeap<Reverse<(Shortlex, usize)>> = BinaryHeap::new();
    let mut pop_order = Vec::new();

    heap.push(Reverse((extent.shortlex(), 0)));
    mapping.insert(extent, 0);

    while let Some(Reverse((key, current))) = heap.pop() {
        pop_order.push(current);

        for (n_extent, n_intent) in neighbors(derivation, key.bits()) {
            let neighbor = match mapping.get(&n_extent) {
                Some(&existing) => existing,
                None => {
                    let created_at = created.len();
                    heap.push(Reverse((n_extent.shortlex(), created_at)));
                    mapping.insert(n_extent.clone(), created_at);
                    created.push(RawConcept::new(n_extent, n_intent));
                    created_at
                }
            };
            created[current].upper.push(neighbor);
            created[neighbor].lower.push(current);
        }
    }

    debug!("lindig: {} concepts", created.len());
    reorder(created, &pop_order)
}

/// Renumber concepts from creation order into pop order
fn reorder(created: Vec<RawConcept>, pop_order: &[usize]) -> Vec<RawConcept> {
    let mut rank = vec![0; created.len()];
    for (position, &index) in pop_order.iter().enumerate() {
        rank[index] = position;
    }

    let mut ranked: Vec<(usize, RawConcept)> = created
        .into_iter()
        .enumerate()
        .map(|(index, concept)| (rank[index], concept))
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

/// Frontier enumeration from the empty object set
#[derive(Debug, Clone, Copy, Default)]
pub struct Lindig;

impl ConceptSource for Lindig {
    fn name(&self) -> &'static str {
        "lindig"
    }

    fn lattice(&self, relation: &Relation) -> Vec<RawConcept> {
        lattice(relation, &BitVector::empty(relation.n_objects()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cmp::Ordering;

    fn relation() -> Relation {
        // A:012, B:02345, C:014, D:12
        Relation::from_rows(
            vec![
                BitVector::from_indices(6, [0, 1, 2]),
                BitVector::from_indices(6, [0, 2, 3, 4, 5]),
                BitVector::from_indices(6, [0, 1, 4]),
                BitVector::from_indices(6, [1, 2]),
            ],
            6,
        )
    }

    #[test]
    fn test_neighbors_of_infimum_are_atoms() {
        let relation = relation();
        let atoms: Vec<String> = neighbors(relation.objects(), &BitVector::empty(4))
            .into_iter()
            .map(|(extent, _)| extent.bits())
            .collect();
        assert_eq!(atoms, vec!["1000", "0100", "0010"]);
    }

    #[test]
    fn test_neighbors_of_supremum_is_empty() {
        let relation = relation();
        assert!(neighbors(relation.objects(), &BitVector::full(4)).is_empty());
    }

    #[test]
    fn test_context_neighbors_by_labels() {
        let context = Context::new(
            ["A", "B", "C", "D"],
            ["0", "1", "2", "3", "4", "5"],
            relation().bools(),
        )
        .unwrap();

        // {D} closes to {A, D}
        let upper = context.neighbors(&["D"]).unwrap();
        assert_eq!(
            upper,
            vec![
                (vec!["A", "B", "D"], vec!["2"]),
                (vec!["A", "C", "D"], vec!["1"]),
            ]
        );
        assert!(context.neighbors(&["A", "B", "C", "D"]).unwrap().is_empty());
        assert!(context.neighbors(&["E"]).is_err());
    }

    #[test]
    fn test_lattice_in_shortlex_order() {
        let relation = relation();
        let concepts = Lindig.lattice(&relation);
        assert_eq!(concepts.len(), 12);
        assert!(concepts.first().unwrap().extent.is_empty());
        assert!(concepts.last().unwrap().extent.is_full());
        assert!(concepts
            .windows(2)
            .all(|w| w[0].extent.cmp_shortlex(&w[1].extent) == Ordering::Less));
    }

    #[test]
    fn test_neighbor_positions_are_symmetric() {
        let relation = relation();
        let concepts = Lindig.lattice(&relation);
        for (i, concept) in concepts.iter().enumerate() {
            for &u in &concept.upper {
                assert!(concept.extent.is_proper_subset(&concepts[u].extent));
                assert!(concepts[u].lower.contains(&i));
            }
            for &l in &concept.lower {
                assert!(concepts[l].upper.contains(&i));
            }
        }
    }
}
