//! Lattice interchange (index records, JSON context documents)

pub mod interchange;

pub use interchange::{ConceptRecord, ContextDocument};
