//! Configuration I/O (YAML loading)
//!
//! Defines YAML schema types. Loading and export live on
//! [`LatticeConfig`](super::LatticeConfig).

use serde::{Deserialize, Serialize};

use super::lattice_config::{Algorithm, ParallelConfig};

/// Currently supported schema versions
pub const SUPPORTED_VERSIONS: &[u32] = &[1];

/// YAML Schema v1
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigExportV1 {
    /// Schema version (always 1 for v1)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<u32>,

    /// Enumeration algorithm
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub algorithm: Option<Algorithm>,

    /// Covering-edge sharding
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parallel: Option<ParallelConfig>,
}
