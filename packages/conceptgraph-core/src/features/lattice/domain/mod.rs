//! Domain models for concept lattices
//!
//! - Concept: closed pair with orders, neighbors, atoms and annotations
//! - Lattice: index-addressed arena of concepts plus the extent map

pub mod concept;
pub mod lattice;

pub use concept::Concept;
pub use lattice::Lattice;
