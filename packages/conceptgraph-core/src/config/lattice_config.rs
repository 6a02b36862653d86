//! Lattice construction settings
//!
//! `LatticeConfig` selects the enumeration algorithm and the covering-edge
//! sharding. All algorithms produce identical lattices.

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::{ConfigError, ConfigResult};
use super::io::{ConfigExportV1, SUPPORTED_VERSIONS};
use super::validation::Validatable;

// ============================================================================
// Algorithm
// ============================================================================

/// Concept enumeration algorithm
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Algorithm {
    /// Shortlex frontier (Lindig), emits covering edges directly
    #[default]
    Lindig,
    /// FCbO by intents + covering edges
    Fcbo,
    /// FCbO by extents + covering edges
    FcboDual,
}

impl Algorithm {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Lindig => "lindig",
            Self::Fcbo => "fcbo",
            Self::FcboDual => "fcbo_dual",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Algorithm {
    type Err = ConfigError;

    fn from_str(s: &str) -> ConfigResult<Self> {
        match s {
            "lindig" => Ok(Self::Lindig),
            "fcbo" => Ok(Self::Fcbo),
            "fcbo_dual" => Ok(Self::FcboDual),
            other => Err(ConfigError::UnknownAlgorithm(other.to_string())),
        }
    }
}

// ============================================================================
// Parallelism Configuration
// ============================================================================

/// Covering-edge sharding
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParallelConfig {
    /// Compute covering edges on rayon shards
    pub enabled: bool,

    /// Number of shards (0=auto, 1..=1024)
    pub num_shards: usize,
}

impl ParallelConfig {
    const MAX_SHARDS: usize = 1024;

    /// Sequential covering edges
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            num_shards: 0,
        }
    }

    /// Sharded covering edges over `num_shards` shards
    pub fn sharded(num_shards: usize) -> Self {
        Self {
            enabled: true,
            num_shards,
        }
    }

    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    pub fn num_shards(mut self, num_shards: usize) -> Self {
        self.num_shards = num_shards;
        self
    }

    /// Shard count with `0` resolved to the number of CPUs
    pub fn effective_shards(&self) -> usize {
        if self.num_shards == 0 {
            num_cpus::get().max(1)
        } else {
            self.num_shards
        }
    }
}

impl Default for ParallelConfig {
    fn default() -> Self {
        Self::disabled()
    }
}

impl Validatable for ParallelConfig {
    fn validate(&self) -> ConfigResult<()> {
        if self.num_shards > Self::MAX_SHARDS {
            return Err(ConfigError::range_with_hint(
                "num_shards",
                self.num_shards,
                0,
                Self::MAX_SHARDS,
                "Shard count must be reasonable (0=auto)",
            ));
        }
        Ok(())
    }

    fn config_name(&self) -> &'static str {
        "ParallelConfig"
    }
}

// ============================================================================
// Lattice Configuration
// ============================================================================

/// Settings for building a lattice
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LatticeConfig {
    pub algorithm: Algorithm,
    pub parallel: ParallelConfig,
}

impl LatticeConfig {
    pub fn with_algorithm(mut self, algorithm: Algorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    pub fn with_parallel(mut self, parallel: ParallelConfig) -> Self {
        self.parallel = parallel;
        self
    }

    /// Adjust the parallel settings in place
    pub fn parallel(mut self, f: impl FnOnce(ParallelConfig) -> ParallelConfig) -> Self {
        self.parallel = f(self.parallel);
        self
    }

    /// Load and validate a YAML v1 configuration file
    pub fn from_yaml(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&content)
    }

    /// Parse and validate a YAML v1 configuration
    pub fn from_yaml_str(content: &str) -> ConfigResult<Self> {
        let export: ConfigExportV1 = serde_yaml::from_str(content)?;

        // Version check
        let version = export.version.ok_or(ConfigError::MissingVersion)?;
        if !SUPPORTED_VERSIONS.contains(&version) {
            return Err(ConfigError::UnsupportedVersion {
                found: version,
                supported: SUPPORTED_VERSIONS.to_vec(),
            });
        }

        let config = Self {
            algorithm: export.algorithm.unwrap_or_default(),
            parallel: export.parallel.unwrap_or_default(),
        };
        config.validate()?;
        Ok(config)
    }

    /// Export as YAML v1
    pub fn to_yaml(&self) -> ConfigResult<String> {
        let export = ConfigExportV1 {
            version: Some(1),
            algorithm: Some(self.algorithm),
            parallel: Some(self.parallel.clone()),
        };
        serde_yaml::to_string(&export).map_err(ConfigError::Yaml)
    }

    /// Get a human-readable description of the configuration
    pub fn describe(&self) -> String {
        if self.parallel.enabled {
            format!(
                "{} with {} covering-edge shards",
                self.algorithm,
                self.parallel.effective_shards()
            )
        } else {
            format!("{} (sequential)", self.algorithm)
        }
    }
}

impl Validatable for LatticeConfig {
    fn validate(&self) -> ConfigResult<()> {
        self.parallel.validate()
    }

    fn config_name(&self) -> &'static str {
        "LatticeConfig"
    }
}
