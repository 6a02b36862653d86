//! Concept lattice arena
//!
//! All concepts of one context, stored in shortlex order of their extents so
//! that a concept's position is its `index`. Concepts refer to each other only
//! by position; the extent map resolves closed object sets to positions.

use std::fmt;
use std::ops::Index;
use std::sync::Arc;

use rustc_hash::FxHashMap;

use super::concept::Concept;
use crate::errors::{ConceptError, Result};
use crate::features::bitset::BitVector;
use crate::features::context::Context;

/// Indexed, doubly linked concept DAG
pub struct Lattice {
    pub(crate) context: Arc<Context>,
    pub(crate) concepts: Vec<Concept>,
    pub(crate) mapping: FxHashMap<BitVector, usize>,
}

impl Lattice {
    pub fn context(&self) -> &Context {
        &self.context
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.concepts.len()
    }

    /// Always false for an assembled lattice
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.concepts.is_empty()
    }

    /// Concepts in `index` order
    pub fn iter(&self) -> std::slice::Iter<'_, Concept> {
        self.concepts.iter()
    }

    pub fn concepts(&self) -> &[Concept] {
        &self.concepts
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Distinguished concepts
    // ═══════════════════════════════════════════════════════════════════════

    /// Bottom concept (index 0)
    pub fn infimum(&self) -> &Concept {
        &self.concepts[0]
    }

    /// Top concept (dindex 0)
    pub fn supremum(&self) -> &Concept {
        &self.concepts[self.concepts.len() - 1]
    }

    /// Upper covers of the infimum
    pub fn atoms(&self) -> impl Iterator<Item = &Concept> + '_ {
        self.infimum().upper.iter().map(move |&i| &self.concepts[i])
    }

    /// Lower covers of the supremum
    pub fn coatoms(&self) -> impl Iterator<Item = &Concept> + '_ {
        self.supremum().lower.iter().map(move |&i| &self.concepts[i])
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Lookup
    // ═══════════════════════════════════════════════════════════════════════

    /// Concept at `index`
    pub fn get(&self, index: usize) -> Result<&Concept> {
        self.concepts
            .get(index)
            .ok_or(ConceptError::IndexOutOfRange {
                what: "concepts",
                index,
                len: self.concepts.len(),
            })
    }

    /// Concept with exactly this extent
    pub fn by_extent(&self, extent: &BitVector) -> Option<&Concept> {
        self.mapping.get(extent).map(|&i| &self.concepts[i])
    }

    pub(crate) fn lookup(&self, extent: &BitVector) -> Result<&Concept> {
        self.by_extent(extent)
            .ok_or_else(|| ConceptError::ConceptNotFound {
                extent: extent.bits(),
            })
    }

    /// Smallest concept containing all labels (all objects or all properties)
    ///
    /// The empty label list selects the supremum.
    pub fn by_labels<S: AsRef<str>>(&self, items: &[S]) -> Result<&Concept> {
        if items.is_empty() {
            return Ok(self.supremum());
        }
        let (extent, _) = self.context.closure(items)?;
        self.lookup(&extent)
    }

    /// Concept whose extent is the extension of the given properties
    pub fn by_intent<S: AsRef<str>>(&self, properties: &[S]) -> Result<&Concept> {
        let intent = self.context.properties().from_labels(properties)?;
        let extent = self.context.relation().properties().prime(&intent);
        self.lookup(&extent)
    }
}

impl Index<usize> for Lattice {
    type Output = Concept;

    fn index(&self, index: usize) -> &Concept {
        &self.concepts[index]
    }
}

impl<'a> IntoIterator for &'a Lattice {
    type Item = &'a Concept;
    type IntoIter = std::slice::Iter<'a, Concept>;

    fn into_iter(self) -> Self::IntoIter {
        self.concepts.iter()
    }
}

/// Structural equality: same concepts, orders, neighbors, atoms, annotations
impl PartialEq for Lattice {
    fn eq(&self, other: &Self) -> bool {
        self.concepts == other.concepts
    }
}

impl Eq for Lattice {}

impl fmt::Display for Lattice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "<Lattice object of {} atoms {} concepts {} coatoms>",
            self.infimum().upper.len(),
            self.len(),
            self.supremum().lower.len()
        )?;
        if f.alternate() {
            for concept in &self.concepts {
                write!(f, "\n    {}", concept)?;
            }
        }
        Ok(())
    }
}

impl fmt::Debug for Lattice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Lattice")
            .field("context", &self.context.shape())
            .field("concepts", &self.concepts)
            .finish()
    }
}
