//! Lattice use cases
//!
//! - assembly: neighbor-linked concept sequence → [`Lattice`](super::Lattice)
//! - navigation: up-sets and down-sets
//! - aggregation: join and meet

pub mod aggregation;
pub mod assembly;
pub mod navigation;

pub use assembly::{assemble, into_shortlex_order};
pub use navigation::{Generalization, UnionIter};
