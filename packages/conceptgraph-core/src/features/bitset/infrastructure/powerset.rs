//! Shortlex powerset enumeration
//!
//! Breadth-first expansion over the free positions: each queued set is
//! extended only by positions after the last one it added, so every subset is
//! produced once and levels come out by ascending cardinality.

use std::collections::VecDeque;

use crate::features::bitset::domain::BitVector;

/// Iterator over all supersets of `start` within `start ∪ pool`
pub struct Powerset {
    free: Vec<usize>,
    queue: VecDeque<(BitVector, usize)>,
}

impl Powerset {
    fn new(pool: &BitVector, start: &BitVector) -> Self {
        let mut queue = VecDeque::new();
        queue.push_back((start.clone(), 0));
        Self {
            free: pool.difference(start).iter().collect(),
            queue,
        }
    }

    /// Number of sets still to be produced, `None` past `usize::MAX`
    pub fn remaining(&self) -> Option<usize> {
        self.queue.iter().try_fold(0usize, |total, (_, offset)| {
            let exponent = u32::try_from(self.free.len() - offset).ok()?;
            let count = 1usize.checked_shl(exponent)?;
            total.checked_add(count)
        })
    }
}

impl Iterator for Powerset {
    type Item = BitVector;

    fn next(&mut self) -> Option<BitVector> {
        let (current, offset) = self.queue.pop_front()?;
        for (k, &position) in self.free.iter().enumerate().skip(offset) {
            self.queue.push_back((current.with(position), k + 1));
        }
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.remaining() {
            Some(remaining) => (remaining, Some(remaining)),
            None => (usize::MAX, None),
        }
    }
}

impl BitVector {
    /// Supersets of `start` contained in `self ∪ start`, in shortlex order
    ///
    /// Yields exactly `2^|self \ start|` sets; a fresh iterator per call.
    pub fn powerset(&self, start: &BitVector) -> Powerset {
        Powerset::new(self, start)
    }

    /// All subsets of `self`, in shortlex order
    pub fn subsets(&self) -> Powerset {
        Powerset::new(self, &BitVector::empty(self.universe_len()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_subsets_in_shortlex_order() {
        let pool = BitVector::full(3);
        let bits: Vec<String> = pool.subsets().map(|s| s.bits()).collect();
        assert_eq!(
            bits,
            vec!["000", "100", "010", "001", "110", "101", "011", "111"]
        );
    }

    #[test]
    fn test_powerset_from_start() {
        let pool = BitVector::from_indices(5, [1, 3]);
        let start = BitVector::singleton(5, 0);
        let bits: Vec<String> = pool.powerset(&start).map(|s| s.bits()).collect();
        assert_eq!(bits, vec!["10000", "11000", "10010", "11010"]);
    }

    #[test]
    fn test_powerset_size_and_restart() {
        let pool = BitVector::from_indices(10, [0, 2, 4, 6, 8]);
        let start = BitVector::from_indices(10, [2, 9]);
        let first = pool.powerset(&start);
        assert_eq!(first.size_hint(), (16, Some(16)));
        assert_eq!(first.remaining(), Some(16));
        let first: Vec<_> = first.collect();
        let second: Vec<_> = pool.powerset(&start).collect();
        assert_eq!(first.len(), 16);
        assert_eq!(first, second);
        assert!(first.iter().all(|s| start.is_subset(s)));
        assert!(first
            .windows(2)
            .all(|w| w[0].cmp_shortlex(&w[1]) == std::cmp::Ordering::Less));
    }

    #[test]
    fn test_wide_pool_size_hint_saturates() {
        let pool = BitVector::full(70);
        let mut subsets = pool.powerset(&BitVector::empty(70));
        assert_eq!(subsets.remaining(), None);
        assert_eq!(subsets.size_hint(), (usize::MAX, None));

        let first: Vec<BitVector> = subsets.by_ref().take(3).collect();
        assert_eq!(first[0], BitVector::empty(70));
        assert_eq!(first[1], BitVector::singleton(70, 0));
        assert_eq!(first[2], BitVector::singleton(70, 1));
    }

    #[test]
    fn test_remaining_counts_down() {
        let pool = BitVector::full(4);
        let mut subsets = pool.subsets();
        for expected in (0..16).rev() {
            assert!(subsets.next().is_some());
            assert_eq!(subsets.remaining(), Some(expected));
        }
        assert!(subsets.next().is_none());
    }
}
