//! # Fixed-Universe Bit Sets
//!
//! Every extent, intent and incidence row/column is a [`BitVector`] over a
//! [`Universe`] of object or property labels. Sets are compared with two
//! total orders:
//! - **Shortlex**: cardinality ascending (lattice `index`)
//! - **Longlex**: cardinality descending (lattice `dindex`)

pub mod domain;
pub mod infrastructure;

pub use domain::{BitVector, Longlex, Ones, Shortlex, Universe};
pub use infrastructure::Powerset;
