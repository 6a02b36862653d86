/*
 * Conceptgraph Core - Formal Concept Analysis Engine
 *
 * Feature-First Hexagonal Architecture:
 * - errors.rs    : ConceptError taxonomy
 * - config/      : LatticeConfig (algorithm, covering-edge sharding, YAML v1)
 * - features/    : Vertical slices (bitset → context → enumeration → lattice)
 *
 * Algorithms:
 * - Lindig frontier enumeration with direct covering edges
 * - FCbO (by intents / by extents) + Carpineto-Romano covering edges
 * - Rayon-sharded covering edges (feature "parallel")
 */

// Crate-level lint configuration
#![allow(clippy::type_complexity)] // (extent, intent) tuples in enumeration
#![allow(clippy::module_inception)] // lattice::domain::lattice
#![allow(clippy::new_without_default)] // Default impl not always needed
#![allow(clippy::needless_range_loop)] // Range loop for position arithmetic

// ═══════════════════════════════════════════════════════════════════════════
// Module Exports - Feature-First Architecture
// ═══════════════════════════════════════════════════════════════════════════

/// Configuration (algorithm selection, parallelism, YAML)
pub mod config;

/// Error types
pub mod errors;

/// Feature modules (vertical slices)
pub mod features;

pub use config::{Algorithm, ConfigError, LatticeConfig, ParallelConfig, Validatable};
pub use errors::{ConceptError, ErrorKind, Result};
pub use features::bitset::{BitVector, Universe};
pub use features::context::{Context, PropertyRelations, Relation, RelationKind};
pub use features::enumeration::{fast_generate_from, fcbo_dual, neighbors};
pub use features::lattice::{Concept, ConceptRecord, ContextDocument, Lattice};
