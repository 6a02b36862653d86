//! # Formal Contexts
//!
//! Objects, properties and their incidence relation, with the Galois
//! connection operators every enumeration algorithm is built on.

pub mod application;
pub mod domain;

pub use application::{LogicalRelation, PropertyRelations, RelationKind};
pub use domain::{Context, Derivation, LabeledPair, Relation};
