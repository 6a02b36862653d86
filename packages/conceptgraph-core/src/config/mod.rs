//! Lattice Construction Configuration
//!
//! Two knobs: which enumeration algorithm builds the lattice, and whether
//! covering edges are computed over rayon shards.
//!
//! # Examples
//!
//! ```rust,ignore
//! use conceptgraph_core::config::{Algorithm, LatticeConfig};
//!
//! // Defaults: Lindig, sequential
//! let config = LatticeConfig::default();
//!
//! // Builder
//! let config = LatticeConfig::default()
//!     .with_algorithm(Algorithm::Fcbo)
//!     .parallel(|p| p.enabled(true).num_shards(8));
//!
//! // YAML v1
//! let config = LatticeConfig::from_yaml("lattice.yaml")?;
//! ```

pub mod error;
pub mod io;
pub mod lattice_config;
pub mod validation;

// Re-exports
pub use error::{ConfigError, ConfigResult};
pub use io::ConfigExportV1;
pub use lattice_config::{Algorithm, LatticeConfig, ParallelConfig};
pub use validation::Validatable;
