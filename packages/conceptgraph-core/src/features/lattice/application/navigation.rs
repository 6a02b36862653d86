//! Up-set and down-set traversal
//!
//! Monotone priority-queue merge: concepts are popped in ascending key order
//! (`index` upwards, `dindex` downwards). Both keys are topological sorts of
//! the lattice order in their direction, so a concept is popped only after
//! every smaller-keyed predecessor and duplicates pop consecutively.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use crate::features::bitset::BitVector;
use crate::features::lattice::domain::{Concept, Lattice};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    /// Follow upper neighbors, keyed by `index`
    Up,
    /// Follow lower neighbors, keyed by `dindex`
    Down,
}

impl Direction {
    fn key(self, concept: &Concept) -> usize {
        match self {
            Direction::Up => concept.index,
            Direction::Down => concept.dindex,
        }
    }

    fn next(self, concept: &Concept) -> &[usize] {
        match self {
            Direction::Up => &concept.upper,
            Direction::Down => &concept.lower,
        }
    }
}

/// Lazy union of the up-sets or down-sets of some seed concepts
pub struct UnionIter<'a> {
    lattice: &'a Lattice,
    direction: Direction,
    heap: BinaryHeap<Reverse<(usize, usize)>>,
    seen: Option<usize>,
}

impl<'a> UnionIter<'a> {
    fn new(lattice: &'a Lattice, direction: Direction, seeds: Vec<&'a Concept>) -> Self {
        let heap = seeds
            .into_iter()
            .map(|c| Reverse((direction.key(c), c.index)))
            .collect();
        Self {
            lattice,
            direction,
            heap,
            seen: None,
        }
    }
}

impl<'a> Iterator for UnionIter<'a> {
    type Item = &'a Concept;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(Reverse((key, position))) = self.heap.pop() {
            if self.seen.is_some_and(|seen| key <= seen) {
                continue;
            }
            self.seen = Some(key);

            let concept = &self.lattice.concepts[position];
            for &neighbor in self.direction.next(concept) {
                let next = &self.lattice.concepts[neighbor];
                self.heap.push(Reverse((self.direction.key(next), neighbor)));
            }
            return Some(concept);
        }
        None
    }
}

/// Concepts above some seed whose extent stays within the seeds' union
///
/// Walks upward in `index` order from the most specific seeds and only
/// expands concepts inside the target extent; ends at the concept whose
/// extent is the target, if the lattice has one.
pub struct Generalization<'a> {
    lattice: &'a Lattice,
    heap: BinaryHeap<Reverse<usize>>,
    target: Option<BitVector>,
    seen: Option<usize>,
}

impl<'a> Iterator for Generalization<'a> {
    type Item = &'a Concept;

    fn next(&mut self) -> Option<Self::Item> {
        let target = self.target.as_ref()?;
        while let Some(Reverse(position)) = self.heap.pop() {
            if self.seen.is_some_and(|seen| position <= seen) {
                continue;
            }
            self.seen = Some(position);

            let concept = &self.lattice.concepts[position];
            if !concept.extent.is_subset(target) {
                continue;
            }
            if &concept.extent == target {
                self.heap.clear();
            } else {
                self.heap.extend(concept.upper.iter().map(|&upper| Reverse(upper)));
            }
            return Some(concept);
        }
        None
    }
}

/// Distinct seeds with no other seed strictly between them and the traversal
fn frontier<'a, F>(seeds: impl IntoIterator<Item = &'a Concept>, redundant: F) -> Vec<&'a Concept>
where
    F: Fn(&Concept, &Concept) -> bool,
{
    let mut distinct: Vec<&Concept> = seeds.into_iter().collect();
    distinct.sort_unstable_by_key(|c| c.index);
    distinct.dedup_by_key(|c| c.index);

    distinct
        .iter()
        .filter(|&&c| !distinct.iter().any(|&other| redundant(c, other)))
        .copied()
        .collect()
}

impl Lattice {
    /// `concept` and everything above it, ascending `index`
    pub fn upset<'a>(&'a self, concept: &'a Concept) -> UnionIter<'a> {
        UnionIter::new(self, Direction::Up, vec![concept])
    }

    /// `concept` and everything below it, ascending `dindex`
    pub fn downset<'a>(&'a self, concept: &'a Concept) -> UnionIter<'a> {
        UnionIter::new(self, Direction::Down, vec![concept])
    }

    /// All concepts subsuming any of the seeds, ascending `index`
    pub fn upset_union<'a>(&'a self, seeds: impl IntoIterator<Item = &'a Concept>) -> UnionIter<'a> {
        let seeds = frontier(seeds, Concept::properly_subsumes);
        UnionIter::new(self, Direction::Up, seeds)
    }

    /// Concepts subsuming the seeds but nothing beyond their union, ascending `index`
    pub fn upset_generalization<'a>(
        &'a self,
        seeds: impl IntoIterator<Item = &'a Concept>,
    ) -> Generalization<'a> {
        let seeds = frontier(seeds, Concept::properly_subsumes);
        let target = seeds
            .iter()
            .map(|c| c.extent.clone())
            .reduce(|acc, extent| acc.union(&extent));
        Generalization {
            lattice: self,
            heap: seeds.iter().map(|c| Reverse(c.index)).collect(),
            target,
            seen: None,
        }
    }

    /// All concepts implying any of the seeds, ascending `dindex`
    pub fn downset_union<'a>(
        &'a self,
        seeds: impl IntoIterator<Item = &'a Concept>,
    ) -> UnionIter<'a> {
        let seeds = frontier(seeds, Concept::properly_implies);
        UnionIter::new(self, Direction::Down, seeds)
    }
}

#[cfg(test)]
mod tests {
    use crate::features::context::Context;
    use crate::features::lattice::domain::Lattice;

    fn lattice() -> Lattice {
        // A:012, B:02345, C:014, D:12
        let context = Context::new(
            ["A", "B", "C", "D"],
            ["0", "1", "2", "3", "4", "5"],
            vec![
                vec![true, true, true, false, false, false],
                vec![true, false, true, true, true, true],
                vec![true, true, false, false, true, false],
                vec![false, true, true, false, false, false],
            ],
        )
        .unwrap();
        Lattice::new(context)
    }

    #[test]
    fn test_upset_of_infimum_is_everything() {
        let lattice = lattice();
        let indices: Vec<usize> = lattice.upset(lattice.infimum()).map(|c| c.index()).collect();
        assert_eq!(indices, (0..lattice.len()).collect::<Vec<_>>());
    }

    #[test]
    fn test_downset_of_supremum_is_everything() {
        let lattice = lattice();
        let dindices: Vec<usize> = lattice
            .downset(lattice.supremum())
            .map(|c| c.dindex())
            .collect();
        assert_eq!(dindices, (0..lattice.len()).collect::<Vec<_>>());
    }

    #[test]
    fn test_upset_matches_subsumption() {
        let lattice = lattice();
        for concept in &lattice {
            let upset: Vec<usize> = lattice.upset(concept).map(|c| c.index()).collect();
            let expected: Vec<usize> = lattice
                .iter()
                .filter(|other| other.subsumes(concept))
                .map(|other| other.index())
                .collect();
            assert_eq!(upset, expected);
        }
    }

    #[test]
    fn test_union_deduplicates_seeds() {
        let lattice = lattice();
        let a = lattice.by_labels(&["A"]).unwrap();
        let c = lattice.by_labels(&["C"]).unwrap();
        let union: Vec<usize> = lattice
            .downset_union([a, c, a, lattice.infimum()])
            .map(|c| c.index())
            .collect();
        let mut sorted = union.clone();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(union.len(), sorted.len());
        assert_eq!(union.len(), 3);
    }

    #[test]
    fn test_empty_union() {
        let lattice = lattice();
        assert_eq!(lattice.upset_union([]).count(), 0);
        assert_eq!(lattice.upset_generalization([]).count(), 0);
    }

    #[test]
    fn test_generalization_stays_inside_target() {
        let lattice = lattice();
        let a = lattice.by_labels(&["A"]).unwrap();
        let c = lattice.by_labels(&["C"]).unwrap();
        let extents: Vec<Vec<&str>> = lattice
            .upset_generalization([a, c])
            .map(|concept| concept.extent_labels())
            .collect();
        assert_eq!(extents, vec![vec!["A"], vec!["C"], vec!["A", "C"]]);
    }

    #[test]
    fn test_generalization_skips_outside_concepts() {
        let lattice = lattice();
        let b = lattice.by_labels(&["B"]).unwrap();
        // {D} closes to {A, D}
        let d = lattice.by_labels(&["D"]).unwrap();
        let extents: Vec<Vec<&str>> = lattice
            .upset_generalization([b, d])
            .map(|concept| concept.extent_labels())
            .collect();
        assert_eq!(
            extents,
            vec![vec!["B"], vec!["A", "B"], vec!["A", "D"], vec!["A", "B", "D"]]
        );
    }
}
