//! Property-based tests for lattice configuration
//!
//! Tests invariants that should hold for ALL possible inputs:
//! - Roundtrip: from_yaml(to_yaml(x)) == x
//! - Validity: shard counts within 0..=1024 validate, larger ones do not
//! - Last write wins for builder overrides
//! - A loaded configuration builds the same lattice as the default

mod common;

use std::io::Write;

use common::*;
use conceptgraph_core::config::*;
use conceptgraph_core::Lattice;
use proptest::prelude::*;
use quickcheck::TestResult;
use quickcheck_macros::quickcheck;
use tempfile::NamedTempFile;

fn algorithm_from(index: u8) -> Algorithm {
    match index % 3 {
        0 => Algorithm::Lindig,
        1 => Algorithm::Fcbo,
        _ => Algorithm::FcboDual,
    }
}

// ============================================================================
// QuickCheck Tests (simpler, faster)
// ============================================================================

#[quickcheck]
fn qc_shard_range(num_shards: usize) -> bool {
    let config = LatticeConfig::default().with_parallel(ParallelConfig::sharded(num_shards));
    config.validate().is_ok() == (num_shards <= 1024)
}

#[quickcheck]
fn qc_yaml_file_roundtrip(algorithm: u8, enabled: bool, num_shards: u16) -> TestResult {
    let num_shards = num_shards as usize;
    if num_shards > 1024 {
        return TestResult::discard();
    }
    let config = LatticeConfig::default()
        .with_algorithm(algorithm_from(algorithm))
        .parallel(|p| p.enabled(enabled).num_shards(num_shards));

    let mut file = NamedTempFile::new().unwrap();
    file.write_all(config.to_yaml().unwrap().as_bytes()).unwrap();

    // Invariant: YAML roundtrip through a file preserves every field
    let recovered = LatticeConfig::from_yaml(file.path()).unwrap();
    TestResult::from_bool(recovered == config)
}

#[quickcheck]
fn qc_builder_last_write_wins(first: u8, second: u8, shards1: u8, shards2: u8) -> bool {
    let config = LatticeConfig::default()
        .with_algorithm(algorithm_from(first))
        .parallel(|p| p.num_shards(shards1 as usize))
        .with_algorithm(algorithm_from(second))
        .parallel(|p| p.num_shards(shards2 as usize));

    config.algorithm == algorithm_from(second) && config.parallel.num_shards == shards2 as usize
}

// ============================================================================
// Proptest Tests (more complex, exhaustive)
// ============================================================================

proptest! {
    #[test]
    fn prop_algorithm_names_roundtrip(index in 0u8..3) {
        let algorithm = algorithm_from(index);
        let parsed: Algorithm = algorithm.to_string().parse().unwrap();
        prop_assert_eq!(parsed, algorithm);
    }

    #[test]
    fn prop_out_of_range_is_reported(num_shards in 1025usize..100_000) {
        let yaml = format!("version: 1\nparallel:\n  enabled: true\n  num_shards: {num_shards}\n");
        let err = LatticeConfig::from_yaml_str(&yaml).unwrap_err();
        prop_assert!(err.to_string().contains("num_shards"), "{}", err);
    }

    #[test]
    fn prop_effective_shards_positive(num_shards in 0usize..=1024) {
        prop_assert!(ParallelConfig::sharded(num_shards).effective_shards() >= 1);
    }
}

// ============================================================================
// Config-driven lattice construction
// ============================================================================

#[test]
fn test_loaded_config_builds_lattice() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "version: 1").unwrap();
    writeln!(file, "algorithm: fcbo_dual").unwrap();
    writeln!(file, "parallel:").unwrap();
    writeln!(file, "  enabled: true").unwrap();
    writeln!(file, "  num_shards: 0").unwrap();

    let config = LatticeConfig::from_yaml(file.path()).unwrap();
    assert_eq!(config.algorithm, Algorithm::FcboDual);

    let lattice = Lattice::with_config(example_context(), &config).unwrap();
    assert_eq!(lattice, Lattice::new(example_context()));
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let result = LatticeConfig::from_yaml(dir.path().join("missing.yaml"));
    assert!(matches!(result, Err(ConfigError::Io(_))));
}

#[test]
fn test_invalid_config_is_construction_error() {
    let config = LatticeConfig::default().with_parallel(ParallelConfig::sharded(4096));
    let err = Lattice::with_config(example_context(), &config).unwrap_err();
    assert_eq!(err.kind(), conceptgraph_core::ErrorKind::Construction);
    assert!(matches!(
        err,
        conceptgraph_core::ConceptError::Config(ConfigError::Range { .. })
    ));
}
