//! Join and meet
//!
//! join = concept of `(⋃ extents)''`, meet = concept of `⋂ extents`. The
//! intersection of extents is already closed, the union is closed with
//! `double` before the extent lookup.

use crate::errors::Result;
use crate::features::bitset::BitVector;
use crate::features::lattice::domain::{Concept, Lattice};

impl Lattice {
    /// Least upper bound; the empty join is the infimum
    pub fn join<'a>(&'a self, concepts: impl IntoIterator<Item = &'a Concept>) -> Result<&'a Concept> {
        let n_objects = self.context.objects().len();
        let union = concepts
            .into_iter()
            .fold(BitVector::empty(n_objects), |acc, c| acc.union(&c.extent));
        let extent = self.context.relation().objects().double(&union);
        self.lookup(&extent)
    }

    /// Greatest lower bound; the empty meet is the supremum
    pub fn meet<'a>(&'a self, concepts: impl IntoIterator<Item = &'a Concept>) -> Result<&'a Concept> {
        let n_objects = self.context.objects().len();
        let intersection = concepts
            .into_iter()
            .fold(BitVector::full(n_objects), |acc, c| acc.intersection(&c.extent));
        let extent = self.context.relation().objects().double(&intersection);
        self.lookup(&extent)
    }
}
