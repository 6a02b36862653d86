//! Ports for concept enumeration
//!
//! Every algorithm hands the lattice builder the same shape: all closed pairs
//! in ascending shortlex order of their extents, each with its covering
//! neighbors given as positions in that same sequence.

use crate::features::bitset::BitVector;
use crate::features::context::Relation;

/// `(extent, intent, upper, lower)` produced by enumeration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawConcept {
    pub extent: BitVector,
    pub intent: BitVector,
    /// Positions of upper covers in the enclosing sequence
    pub upper: Vec<usize>,
    /// Positions of lower covers in the enclosing sequence
    pub lower: Vec<usize>,
}

impl RawConcept {
    pub fn new(extent: BitVector, intent: BitVector) -> Self {
        Self {
            extent,
            intent,
            upper: Vec::new(),
            lower: Vec::new(),
        }
    }
}

/// Algorithm producing the full neighbor-linked concept sequence
///
/// # Example (Trait Object)
/// ```ignore
/// let source: Box<dyn ConceptSource> = Box::new(Lindig);
/// let concepts = source.lattice(context.relation());
/// ```
pub trait ConceptSource: Send + Sync {
    /// Algorithm name for logging
    fn name(&self) -> &'static str;

    /// All concepts with covering edges, ascending shortlex by extent
    fn lattice(&self, relation: &Relation) -> Vec<RawConcept>;
}
