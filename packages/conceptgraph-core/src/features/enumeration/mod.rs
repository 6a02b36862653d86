//! # Concept Enumeration
//!
//! Generates every closed `(extent, intent)` pair of a relation.
//!
//! ## Algorithms
//! - Lindig, "Fast Concept Analysis" (ICCS 2000)
//! - Outrata & Vychodil, "Fast algorithm for computing fixpoints of Galois
//!   connections induced by object-attribute relational data" (Inf. Sci. 2012)
//! - Carpineto & Romano, "Concept Data Analysis" (2004), covering edges
//!
//! ## Usage
//! ```text
//! use conceptgraph_core::features::enumeration::{enumerate, fast_generate_from};
//!
//! for (extent, intent) in fast_generate_from(context.relation()) { .. }
//! let linked = enumerate(context.relation(), &LatticeConfig::default());
//! ```

pub mod application;
pub mod infrastructure;
pub mod ports;

pub use application::{enumerate, source_for};
pub use infrastructure::{
    fast_generate_from, fcbo_dual, lattice_fcbo, neighbors, Fcbo, FcboLattice, Lindig, Orientation,
};
pub use ports::{ConceptSource, RawConcept};
