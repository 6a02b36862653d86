//! Enumeration algorithms
//!
//! - **Lindig**: shortlex frontier over a min-heap, emits covers directly
//! - **Fcbo**: canonicity-tested DFS (by intents or by extents)
//! - **Covering edges**: Carpineto-Romano counting test, optionally sharded

pub mod covering_edges;
pub mod fcbo;
pub mod lindig;

pub use covering_edges::{
    covering_edges, covering_edges_sharded, extent_index, lattice_fcbo, lower_covers,
    missing_candidate, ExtentIndex, FcboLattice,
};
pub use fcbo::{fast_generate_from, fcbo_dual, Fcbo, Orientation};
pub use lindig::{lattice, neighbors, Lindig};
