//! Domain models for bit-vector sets
//!
//! - Universe: named label sequence fixing bit positions
//! - BitVector: word-parallel set over one universe
//! - Shortlex / Longlex: total order keys

pub mod bit_vector;
pub mod order;
pub mod universe;

pub use bit_vector::{BitVector, Ones};
pub use order::{Longlex, Shortlex};
pub use universe::Universe;
