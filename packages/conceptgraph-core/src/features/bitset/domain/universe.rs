//! Named finite universe of labels
//!
//! A universe fixes the bit positions `0..n` of every [`BitVector`] built over
//! it and translates between labels and positions.

use rustc_hash::FxHashMap;

use super::bit_vector::BitVector;
use crate::errors::{ConceptError, Result};

/// Ordered, duplicate-free label sequence (`"objects"` or `"properties"`)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Universe {
    name: String,
    labels: Vec<String>,
    positions: FxHashMap<String, usize>,
}

impl Universe {
    /// Build a universe, rejecting empty and duplicated label lists
    pub fn new<S: Into<String>>(
        name: impl Into<String>,
        labels: impl IntoIterator<Item = S>,
    ) -> Result<Self> {
        let name = name.into();
        let labels: Vec<String> = labels.into_iter().map(Into::into).collect();
        if labels.is_empty() {
            return Err(ConceptError::EmptyUniverse { universe: name });
        }

        let mut positions = FxHashMap::default();
        positions.reserve(labels.len());
        for (i, label) in labels.iter().enumerate() {
            if positions.insert(label.clone(), i).is_some() {
                return Err(ConceptError::DuplicateLabel {
                    universe: name,
                    label: label.clone(),
                });
            }
        }

        Ok(Self {
            name,
            labels,
            positions,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Always false for a constructed universe
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn label(&self, index: usize) -> Option<&str> {
        self.labels.get(index).map(String::as_str)
    }

    #[inline]
    pub fn position(&self, label: &str) -> Option<usize> {
        self.positions.get(label).copied()
    }

    pub fn contains(&self, label: &str) -> bool {
        self.positions.contains_key(label)
    }

    /// The empty set over this universe
    pub fn infimum(&self) -> BitVector {
        BitVector::empty(self.len())
    }

    /// The full set over this universe
    pub fn supremum(&self) -> BitVector {
        BitVector::full(self.len())
    }

    /// Set of the given labels, failing on the first unknown label
    pub fn from_labels<S: AsRef<str>>(&self, labels: &[S]) -> Result<BitVector> {
        let mut indices = Vec::with_capacity(labels.len());
        for label in labels {
            let label = label.as_ref();
            let index = self
                .position(label)
                .ok_or_else(|| ConceptError::unknown_label(self.name.as_str(), label))?;
            indices.push(index);
        }
        Ok(BitVector::from_indices(self.len(), indices))
    }

    /// Like [`Universe::from_labels`] but `None` if any label is unknown
    pub fn try_from_labels<S: AsRef<str>>(&self, labels: &[S]) -> Option<BitVector> {
        let indices: Option<Vec<usize>> = labels
            .iter()
            .map(|label| self.position(label.as_ref()))
            .collect();
        indices.map(|indices| BitVector::from_indices(self.len(), indices))
    }

    /// Member labels of `bits` in universe order
    pub fn members<'a>(&'a self, bits: &BitVector) -> Vec<&'a str> {
        bits.iter()
            .filter_map(|i| self.labels.get(i).map(String::as_str))
            .collect()
    }
}

impl BitVector {
    /// Member labels in universe order
    pub fn members<'u>(&self, universe: &'u Universe) -> Vec<&'u str> {
        universe.members(self)
    }
}
