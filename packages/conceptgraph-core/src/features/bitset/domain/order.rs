//! Total orders on bit-vectors
//!
//! - **Shortlex**: ascending cardinality, ties broken at the lowest differing
//!   position (the set holding it sorts first)
//! - **Longlex**: descending cardinality, same tiebreak
//!
//! Both are collision-free: two vectors over one universe compare equal iff
//! they are equal. Lattice `index` is the shortlex rank of the extent and
//! `dindex` its longlex rank.

use std::cmp::Ordering;

use super::bit_vector::BitVector;

/// Compare two equal-size sets at their lowest differing position
#[inline]
fn lowest_difference(a: &BitVector, b: &BitVector) -> Ordering {
    for (&x, &y) in a.words().iter().zip(b.words()) {
        let diff = x ^ y;
        if diff != 0 {
            let lowest = diff & diff.wrapping_neg();
            return if x & lowest != 0 {
                Ordering::Less
            } else {
                Ordering::Greater
            };
        }
    }
    Ordering::Equal
}

impl BitVector {
    /// Shortlex comparison (cardinality ascending)
    pub fn cmp_shortlex(&self, other: &BitVector) -> Ordering {
        self.count()
            .cmp(&other.count())
            .then_with(|| lowest_difference(self, other))
    }

    /// Longlex comparison (cardinality descending)
    pub fn cmp_longlex(&self, other: &BitVector) -> Ordering {
        other
            .count()
            .cmp(&self.count())
            .then_with(|| lowest_difference(self, other))
    }

    /// Owned shortlex sort key
    pub fn shortlex(&self) -> Shortlex {
        Shortlex {
            count: self.count(),
            bits: self.clone(),
        }
    }

    /// Owned longlex sort key
    pub fn longlex(&self) -> Longlex {
        Longlex {
            count: self.count(),
            bits: self.clone(),
        }
    }
}

/// Sort key ordering bit-vectors by shortlex
///
/// Caches the cardinality so heap comparisons only popcount once.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Shortlex {
    count: usize,
    bits: BitVector,
}

impl Shortlex {
    pub fn bits(&self) -> &BitVector {
        &self.bits
    }

    pub fn into_bits(self) -> BitVector {
        self.bits
    }
}

impl Ord for Shortlex {
    fn cmp(&self, other: &Self) -> Ordering {
        self.count
            .cmp(&other.count)
            .then_with(|| lowest_difference(&self.bits, &other.bits))
    }
}

impl PartialOrd for Shortlex {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Sort key ordering bit-vectors by longlex
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Longlex {
    count: usize,
    bits: BitVector,
}

impl Longlex {
    pub fn bits(&self) -> &BitVector {
        &self.bits
    }
}

impl Ord for Longlex {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .count
            .cmp(&self.count)
            .then_with(|| lowest_difference(&self.bits, &other.bits))
    }
}

impl PartialOrd for Longlex {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
