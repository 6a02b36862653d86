//! Formal concept: a closed `(extent, intent)` pair inside a lattice
//!
//! Neighbor, atom and annotation fields hold positions (lattice `index`
//! values) and are fixed at assembly. The only lazily computed field is the
//! minimal generator.

use std::fmt;
use std::sync::Arc;

use once_cell::sync::OnceCell;

use crate::features::bitset::BitVector;
use crate::features::context::Context;

/// Concept record owned by a [`Lattice`](super::Lattice)
pub struct Concept {
    pub(crate) context: Arc<Context>,
    pub(crate) index: usize,
    pub(crate) dindex: usize,
    pub(crate) extent: BitVector,
    pub(crate) intent: BitVector,
    /// Upper covers, shortlex (`index`) order
    pub(crate) upper: Vec<usize>,
    /// Lower covers, longlex (`dindex`) order
    pub(crate) lower: Vec<usize>,
    /// Atoms below this concept, in atom order
    pub(crate) atoms: Vec<usize>,
    /// Objects whose object concept this is
    pub(crate) objects: Vec<usize>,
    /// Properties whose property concept this is
    pub(crate) properties: Vec<usize>,
    pub(crate) minimal: OnceCell<BitVector>,
}

impl Concept {
    pub(crate) fn new(context: Arc<Context>, extent: BitVector, intent: BitVector) -> Self {
        Self {
            context,
            index: 0,
            dindex: 0,
            extent,
            intent,
            upper: Vec::new(),
            lower: Vec::new(),
            atoms: Vec::new(),
            objects: Vec::new(),
            properties: Vec::new(),
            minimal: OnceCell::new(),
        }
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Accessors
    // ═══════════════════════════════════════════════════════════════════════

    /// Shortlex rank of the extent (infimum = 0)
    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }

    /// Longlex rank of the extent (supremum = 0)
    #[inline]
    pub fn dindex(&self) -> usize {
        self.dindex
    }

    pub fn extent(&self) -> &BitVector {
        &self.extent
    }

    pub fn intent(&self) -> &BitVector {
        &self.intent
    }

    /// Object labels of the extent
    pub fn extent_labels(&self) -> Vec<&str> {
        self.context.objects().members(&self.extent)
    }

    /// Property labels of the intent
    pub fn intent_labels(&self) -> Vec<&str> {
        self.context.properties().members(&self.intent)
    }

    pub fn upper_neighbors(&self) -> &[usize] {
        &self.upper
    }

    pub fn lower_neighbors(&self) -> &[usize] {
        &self.lower
    }

    pub fn atoms(&self) -> &[usize] {
        &self.atoms
    }

    /// Labels of the objects this concept is the object concept of
    pub fn objects(&self) -> Vec<&str> {
        self.objects
            .iter()
            .filter_map(|&i| self.context.objects().label(i))
            .collect()
    }

    /// Labels of the properties this concept is the property concept of
    pub fn properties(&self) -> Vec<&str> {
        self.properties
            .iter()
            .filter_map(|&i| self.context.properties().label(i))
            .collect()
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Generators
    // ═══════════════════════════════════════════════════════════════════════

    /// Shortlex-minimal property set generating this concept (cached)
    pub fn minimal(&self) -> &BitVector {
        self.minimal
            .get_or_init(|| self.context.minimal(&self.extent, &self.intent))
    }

    pub fn minimal_labels(&self) -> Vec<&str> {
        self.context.properties().members(self.minimal())
    }

    /// All generating property sets in shortlex order
    pub fn generators(&self) -> impl Iterator<Item = BitVector> + '_ {
        self.context.generators(&self.extent, &self.intent)
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Order comparisons
    // ═══════════════════════════════════════════════════════════════════════

    /// `self ≤ other`: the extent is contained in the other extent
    pub fn implies(&self, other: &Concept) -> bool {
        self.extent.is_subset(&other.extent)
    }

    /// `self ≥ other`
    pub fn subsumes(&self, other: &Concept) -> bool {
        other.extent.is_subset(&self.extent)
    }

    pub fn properly_implies(&self, other: &Concept) -> bool {
        self.extent.is_proper_subset(&other.extent)
    }

    pub fn properly_subsumes(&self, other: &Concept) -> bool {
        other.extent.is_proper_subset(&self.extent)
    }

    /// Meet is the empty extent
    pub fn incompatible_with(&self, other: &Concept) -> bool {
        !self.extent.intersects(&other.extent)
    }

    /// Empty meet and full join
    pub fn complement_of(&self, other: &Concept) -> bool {
        self.incompatible_with(other) && self.extent.union(&other.extent).is_full()
    }

    /// Non-empty meet and full join
    pub fn subcontrary_with(&self, other: &Concept) -> bool {
        !self.incompatible_with(other) && self.extent.union(&other.extent).is_full()
    }

    /// Non-empty meet, incomparable, non-full join
    pub fn orthogonal_to(&self, other: &Concept) -> bool {
        let meet = self.extent.intersection(&other.extent);
        !meet.is_empty()
            && meet != self.extent
            && meet != other.extent
            && !self.extent.union(&other.extent).is_full()
    }
}

impl PartialEq for Concept {
    fn eq(&self, other: &Self) -> bool {
        self.index == other.index
            && self.dindex == other.dindex
            && self.extent == other.extent
            && self.intent == other.intent
            && self.upper == other.upper
            && self.lower == other.lower
            && self.atoms == other.atoms
            && self.objects == other.objects
            && self.properties == other.properties
    }
}

impl Eq for Concept {}

impl fmt::Display for Concept {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{{{}}} <-> [{}]",
            self.extent_labels().join(", "),
            self.intent_labels().join(" ")
        )?;
        if !self.objects.is_empty() {
            write!(f, " <=> {}", self.objects().join(" "))?;
        }
        if !self.properties.is_empty() {
            write!(f, " <=> {}", self.properties().join(" "))?;
        }
        Ok(())
    }
}

impl fmt::Debug for Concept {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Concept")
            .field("index", &self.index)
            .field("dindex", &self.dindex)
            .field("extent", &self.extent)
            .field("intent", &self.intent)
            .field("upper", &self.upper)
            .field("lower", &self.lower)
            .finish()
    }
}
