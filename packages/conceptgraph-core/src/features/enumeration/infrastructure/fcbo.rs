//! Canonicity-tested enumeration (Fast Close-by-One)
//!
//! Outrata & Vychodil, "Fast algorithm for computing fixpoints of Galois
//! connections induced by object-attribute relational data", Inf. Sci. 2012.
//!
//! Depth-first with an explicit stack. A frame holds a closed pair, the first
//! position it may still add and the per-position cache of closures that
//! failed the canonicity test. All children of one frame share the cache as
//! it stands after the frame's expansion loop.
//!
//! - **By intents**: grows property sets from the supremum
//! - **By extents** (dual): grows object sets from the infimum

use std::sync::Arc;

use crate::features::bitset::BitVector;
use crate::features::context::{Derivation, Relation};

/// Which side of the closed pair the search grows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// Extend intents by properties
    Intents,
    /// Extend extents by objects
    Extents,
}

struct Frame {
    /// Closed set on the side that shrinks (extent when growing intents)
    other: BitVector,
    /// Closed set on the side being grown
    grown: BitVector,
    start: usize,
    cache: Arc<Vec<BitVector>>,
}

/// Lazy `(extent, intent)` iterator; consumed once
pub struct Fcbo<'a> {
    /// Maps `other`-side sets onto the grown side
    derive: Derivation<'a>,
    /// `generators[j]`: `other`-side set of grown position `j`
    generators: &'a [BitVector],
    orientation: Orientation,
    stack: Vec<Frame>,
}

impl<'a> Fcbo<'a> {
    /// Enumerate by intents, starting from the supremum
    pub fn by_intents(relation: &'a Relation) -> Self {
        let derive = relation.objects();
        let (extent, intent) = derive.doubleprime(&BitVector::full(relation.n_objects()));
        Self::start(derive, extent, intent, Orientation::Intents)
    }

    /// Enumerate by extents, starting from the infimum
    pub fn by_extents(relation: &'a Relation) -> Self {
        let (extent, intent) = relation
            .objects()
            .doubleprime(&BitVector::empty(relation.n_objects()));
        Self::start(relation.properties(), intent, extent, Orientation::Extents)
    }

    pub fn new(relation: &'a Relation, orientation: Orientation) -> Self {
        match orientation {
            Orientation::Intents => Self::by_intents(relation),
            Orientation::Extents => Self::by_extents(relation),
        }
    }

    fn start(derive: Derivation<'a>, other: BitVector, grown: BitVector, orientation: Orientation) -> Self {
        let n = derive.target_len();
        let root = Frame {
            other,
            grown,
            start: 0,
            cache: Arc::new(vec![BitVector::empty(n); n]),
        };
        Self {
            derive,
            generators: derive.dual().generators(),
            orientation,
            stack: vec![root],
        }
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Push the canonical children of `frame`, lowest position on top
    fn expand(&mut self, frame: &Frame) {
        let n = self.derive.target_len();
        if frame.start >= n || frame.other.is_empty() {
            return;
        }

        let mut cache: Vec<BitVector> = frame.cache.as_ref().clone();
        let mut children = Vec::new();

        for j in (frame.start..n).rev() {
            if frame.grown.contains(j) {
                continue;
            }
            if !cache[j].is_subset_below(&frame.grown, j) {
                continue;
            }

            let other = frame.other.intersection(&self.generators[j]);
            let grown = self.derive.prime(&other);

            if grown.is_subset_below(&frame.grown, j) {
                children.push((other, grown, j + 1));
            } else {
                cache[j] = grown;
            }
        }

        let shared = Arc::new(cache);
        self.stack
            .extend(children.into_iter().map(|(other, grown, start)| Frame {
                other,
                grown,
                start,
                cache: Arc::clone(&shared),
            }));
    }
}

impl Iterator for Fcbo<'_> {
    type Item = (BitVector, BitVector);

    fn next(&mut self) -> Option<Self::Item> {
        let frame = self.stack.pop()?;
        self.expand(&frame);
        Some(match self.orientation {
            Orientation::Intents => (frame.other, frame.grown),
            Orientation::Extents => (frame.grown, frame.other),
        })
    }
}

/// `(extent, intent)` pairs by intents
pub fn fast_generate_from(relation: &Relation) -> Fcbo<'_> {
    Fcbo::by_intents(relation)
}

/// `(extent, intent)` pairs by extents
pub fn fcbo_dual(relation: &Relation) -> Fcbo<'_> {
    Fcbo::by_extents(relation)
}
