//! Fixed-capacity bit-vector over a finite universe
//!
//! Word-parallel set representation used for every extent, intent and
//! matrix row/column in the crate:
//! - **Dense**: `u64` words, bit `i` is bit `i % 64` of word `i / 64`
//! - **Immutable API**: set operations return fresh vectors
//! - **Masked tail**: bits at or above the universe size are always zero
//!
//! # Performance Characteristics
//! - Union / Intersection / Complement: O(n / 64)
//! - Contains / With / Without: O(1) + clone
//! - Iteration: O(n / 64 + popcount) via trailing-zero scan

use std::fmt;

const WORD_BITS: usize = 64;

#[inline]
fn word_count(len: usize) -> usize {
    (len + WORD_BITS - 1) / WORD_BITS
}

/// Set of positions `0..len` of a fixed universe
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct BitVector {
    words: Vec<u64>,
    len: usize,
}

impl BitVector {
    /// The empty set over a universe of `len` positions
    #[inline]
    pub fn empty(len: usize) -> Self {
        Self {
            words: vec![0; word_count(len)],
            len,
        }
    }

    /// The universal set over a universe of `len` positions
    pub fn full(len: usize) -> Self {
        let mut result = Self {
            words: vec![u64::MAX; word_count(len)],
            len,
        };
        result.mask_tail();
        result
    }

    /// Single-member set
    pub fn singleton(len: usize, index: usize) -> Self {
        let mut result = Self::empty(len);
        result.set(index);
        result
    }

    /// Create from positions, ignoring positions outside the universe
    pub fn from_indices(len: usize, indices: impl IntoIterator<Item = usize>) -> Self {
        let mut result = Self::empty(len);
        for index in indices {
            result.set(index);
        }
        result
    }

    /// Create from a boolean membership sequence (universe size = sequence length)
    pub fn from_bools(bools: impl IntoIterator<Item = bool>) -> Self {
        let flags: Vec<bool> = bools.into_iter().collect();
        Self::from_indices(
            flags.len(),
            flags
                .iter()
                .enumerate()
                .filter_map(|(i, &flag)| flag.then_some(i)),
        )
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Internal: in-place mutation (construction only)
    // ═══════════════════════════════════════════════════════════════════════

    #[inline]
    fn set(&mut self, index: usize) {
        if index < self.len {
            self.words[index / WORD_BITS] |= 1u64 << (index % WORD_BITS);
        }
    }

    #[inline]
    fn clear(&mut self, index: usize) {
        if index < self.len {
            self.words[index / WORD_BITS] &= !(1u64 << (index % WORD_BITS));
        }
    }

    #[inline]
    fn mask_tail(&mut self) {
        let rem = self.len % WORD_BITS;
        if rem != 0 {
            if let Some(last) = self.words.last_mut() {
                *last &= (1u64 << rem) - 1;
            }
        }
    }

    #[inline]
    fn zip_with(&self, other: &BitVector, op: impl Fn(u64, u64) -> u64) -> BitVector {
        debug_assert_eq!(self.len, other.len, "bit-vectors over different universes");
        BitVector {
            words: self
                .words
                .iter()
                .zip(&other.words)
                .map(|(&a, &b)| op(a, b))
                .collect(),
            len: self.len,
        }
    }

    #[inline]
    pub(crate) fn words(&self) -> &[u64] {
        &self.words
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Basic Queries
    // ═══════════════════════════════════════════════════════════════════════

    /// Size of the universe this vector ranges over
    #[inline]
    pub fn universe_len(&self) -> usize {
        self.len
    }

    /// Number of members (cardinality)
    #[inline]
    pub fn count(&self) -> usize {
        self.words.iter().map(|w| w.count_ones() as usize).sum()
    }

    /// True iff no position is set
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.words.iter().all(|&w| w == 0)
    }

    /// True iff every position of the universe is set
    #[inline]
    pub fn is_full(&self) -> bool {
        self.count() == self.len
    }

    #[inline]
    pub fn contains(&self, index: usize) -> bool {
        index < self.len && (self.words[index / WORD_BITS] >> (index % WORD_BITS)) & 1 != 0
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Set Operations
    // ═══════════════════════════════════════════════════════════════════════

    pub fn union(&self, other: &BitVector) -> BitVector {
        self.zip_with(other, |a, b| a | b)
    }

    pub fn intersection(&self, other: &BitVector) -> BitVector {
        self.zip_with(other, |a, b| a & b)
    }

    pub fn difference(&self, other: &BitVector) -> BitVector {
        self.zip_with(other, |a, b| a & !b)
    }

    /// Complement relative to the universe
    pub fn complement(&self) -> BitVector {
        let mut result = BitVector {
            words: self.words.iter().map(|w| !w).collect(),
            len: self.len,
        };
        result.mask_tail();
        result
    }

    /// Copy with `index` added
    pub fn with(&self, index: usize) -> BitVector {
        let mut result = self.clone();
        result.set(index);
        result
    }

    /// Copy with `index` removed
    pub fn without(&self, index: usize) -> BitVector {
        let mut result = self.clone();
        result.clear(index);
        result
    }

    pub fn is_subset(&self, other: &BitVector) -> bool {
        self.words
            .iter()
            .zip(&other.words)
            .all(|(&a, &b)| a & !b == 0)
    }

    pub fn is_superset(&self, other: &BitVector) -> bool {
        other.is_subset(self)
    }

    pub fn is_proper_subset(&self, other: &BitVector) -> bool {
        self != other && self.is_subset(other)
    }

    pub fn intersects(&self, other: &BitVector) -> bool {
        self.words
            .iter()
            .zip(&other.words)
            .any(|(&a, &b)| a & b != 0)
    }

    /// True iff the members of `self` below position `bound` are all in `other`
    ///
    /// Equivalent to `(self & mask) ⊆ other` with `mask = {0, .., bound - 1}`.
    pub fn is_subset_below(&self, other: &BitVector, bound: usize) -> bool {
        let bound = bound.min(self.len);
        let full_words = bound / WORD_BITS;
        for i in 0..full_words {
            if self.words[i] & !other.words[i] != 0 {
                return false;
            }
        }
        let rem = bound % WORD_BITS;
        if rem != 0 {
            let mask = (1u64 << rem) - 1;
            if self.words[full_words] & !other.words[full_words] & mask != 0 {
                return false;
            }
        }
        true
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Decomposition
    // ═══════════════════════════════════════════════════════════════════════

    /// Iterate over member positions in ascending order
    #[inline]
    pub fn iter(&self) -> Ones<'_> {
        Ones {
            words: &self.words,
            word_idx: 0,
            current: self.words.first().copied().unwrap_or(0),
        }
    }

    /// Singleton decomposition in universe order
    pub fn atoms(&self) -> impl Iterator<Item = BitVector> + '_ {
        self.iter().map(move |i| BitVector::singleton(self.len, i))
    }

    /// Binary membership string, position 0 first (`"100011"`)
    pub fn bits(&self) -> String {
        (0..self.len)
            .map(|i| if self.contains(i) { '1' } else { '0' })
            .collect()
    }
}

impl fmt::Debug for BitVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BitVector({:?})", self.bits())
    }
}

impl<'a> IntoIterator for &'a BitVector {
    type Item = usize;
    type IntoIter = Ones<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over set positions (trailing-zero scan)
pub struct Ones<'a> {
    words: &'a [u64],
    word_idx: usize,
    current: u64,
}

impl<'a> Iterator for Ones<'a> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        loop {
            if self.current != 0 {
                let bit = self.current.trailing_zeros() as usize;
                self.current &= self.current - 1;
                return Some(self.word_idx * WORD_BITS + bit);
            }
            self.word_idx += 1;
            if self.word_idx >= self.words.len() {
                return None;
            }
            self.current = self.words[self.word_idx];
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_operations() {
        let set = BitVector::from_indices(6, [0, 4, 5]);
        assert_eq!(set.bits(), "100011");
        assert_eq!(set.count(), 3);
        assert!(set.contains(4));
        assert!(!set.contains(1));
        assert!(!set.contains(60));

        let elements: Vec<_> = set.iter().collect();
        assert_eq!(elements, vec![0, 4, 5]);
    }

    #[test]
    fn test_from_bools() {
        let set = BitVector::from_bools([true, false, false, false, true, true]);
        assert_eq!(set, BitVector::from_indices(6, [0, 4, 5]));
        assert_eq!(set.universe_len(), 6);
    }

    #[test]
    fn test_complement_respects_universe() {
        let set = BitVector::from_indices(70, [0, 69]);
        let complement = set.complement();
        assert_eq!(complement.count(), 68);
        assert!(!complement.contains(69));
        assert_eq!(complement.complement(), set);
        assert!(BitVector::full(70).is_full());
        assert_eq!(BitVector::full(70).complement(), BitVector::empty(70));
    }

    #[test]
    fn test_set_algebra() {
        let a = BitVector::from_indices(8, [1, 2, 3]);
        let b = BitVector::from_indices(8, [3, 4]);

        assert_eq!(a.union(&b), BitVector::from_indices(8, [1, 2, 3, 4]));
        assert_eq!(a.intersection(&b), BitVector::singleton(8, 3));
        assert_eq!(a.difference(&b), BitVector::from_indices(8, [1, 2]));
        assert!(a.intersects(&b));
        assert!(!a.is_subset(&b));
        assert!(a.intersection(&b).is_proper_subset(&a));
        assert!(a.is_superset(&BitVector::empty(8)));
    }

    #[test]
    fn test_with_without_are_fresh() {
        let a = BitVector::from_indices(4, [1]);
        let b = a.with(2);
        assert_eq!(a.count(), 1);
        assert_eq!(b.count(), 2);
        assert_eq!(b.without(1), BitVector::singleton(4, 2));
    }

    #[test]
    fn test_subset_below() {
        let a = BitVector::from_indices(130, [1, 65, 129]);
        let b = BitVector::from_indices(130, [1, 65]);
        assert!(a.is_subset_below(&b, 129));
        assert!(!a.is_subset_below(&b, 130));
        assert!(a.is_subset_below(&b, 0));
        assert!(!a.is_subset_below(&BitVector::singleton(130, 1), 66));
    }

    #[test]
    fn test_atoms_in_universe_order() {
        let set = BitVector::from_indices(6, [5, 0, 4]);
        let atoms: Vec<String> = set.atoms().map(|a| a.bits()).collect();
        assert_eq!(atoms, vec!["100000", "000010", "000001"]);
    }

    #[test]
    fn test_multi_word_iteration() {
        let indices = [0, 63, 64, 127, 128, 199];
        let set = BitVector::from_indices(200, indices);
        assert_eq!(set.iter().collect::<Vec<_>>(), indices.to_vec());
        assert_eq!(BitVector::empty(0).iter().count(), 0);
    }
}
