//! Domain models for formal contexts
//!
//! - Relation: row/column bit-vectors of the incidence matrix
//! - Derivation: `prime` / `double` / `doubleprime` in one direction
//! - Context: validated labels + relation

pub mod context;
pub mod relation;

pub use context::{Context, LabeledPair};
pub use relation::{Derivation, Relation};
