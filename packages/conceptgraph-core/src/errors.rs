//! Error types for conceptgraph-core
//!
//! Provides unified error handling across the crate. Every variant carries the
//! label, index or invariant that failed so callers can diagnose without
//! re-running the computation.

use thiserror::Error;

use crate::config::ConfigError;

/// Coarse classification of a [`ConceptError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Malformed objects/properties/matrix, raised before any bit-vector exists
    Construction,
    /// Query naming an unknown label or position
    Lookup,
    /// Malformed or inconsistent serialized lattice
    Interchange,
}

/// Main error type for conceptgraph-core operations
#[derive(Debug, Error)]
pub enum ConceptError {
    // ═══════════════════════════════════════════════════════════════════════
    // Construction
    // ═══════════════════════════════════════════════════════════════════════
    #[error("empty {universe}")]
    EmptyUniverse { universe: String },

    #[error("duplicate {universe}: {label:?}")]
    DuplicateLabel { universe: String, label: String },

    #[error("objects and properties overlap: {labels:?}")]
    OverlappingLabels { labels: Vec<String> },

    #[error("bools is not {expected} items (got {found} rows)")]
    RowCountMismatch { expected: usize, found: usize },

    #[error("bools row {row} has length {found}, expected {expected}")]
    RowLengthMismatch {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("invalid lattice configuration: {0}")]
    Config(#[from] ConfigError),

    // ═══════════════════════════════════════════════════════════════════════
    // Lookup
    // ═══════════════════════════════════════════════════════════════════════
    #[error("unknown {universe} label: {label:?}")]
    UnknownLabel { universe: String, label: String },

    #[error("index {index} out of range for {len} {what}")]
    IndexOutOfRange {
        what: &'static str,
        index: usize,
        len: usize,
    },

    #[error("no concept with extent {extent}")]
    ConceptNotFound { extent: String },

    // ═══════════════════════════════════════════════════════════════════════
    // Interchange
    // ═══════════════════════════════════════════════════════════════════════
    #[error("empty lattice")]
    EmptyLattice,

    #[error("missing lattice in serialized context")]
    MissingLattice,

    #[error("record {record}: {field} contains invalid index {index} (universe size {len})")]
    InvalidMemberIndex {
        record: usize,
        field: &'static str,
        index: usize,
        len: usize,
    },

    #[error("record {record}: {field} contains duplicated index {index}")]
    DuplicateIndex {
        record: usize,
        field: &'static str,
        index: usize,
    },

    #[error("record {record}: {field} references missing concept {target} (lattice size {len})")]
    InvalidReference {
        record: usize,
        field: &'static str,
        target: usize,
        len: usize,
    },

    #[error("records {first} and {second} share the extent {extent}")]
    DuplicateExtent {
        first: usize,
        second: usize,
        extent: String,
    },

    #[error("record {record} is not a closed pair: {reason}")]
    NotClosed { record: usize, reason: String },

    #[error("record {record} is out of shortlex order in ordered mode")]
    NotOrdered { record: usize },

    #[error("record {record} lists {neighbor} as {field} but not vice versa")]
    AsymmetricNeighbors {
        record: usize,
        neighbor: usize,
        field: &'static str,
    },

    #[error("edge {lower} -> {upper} does not strictly grow the extent")]
    NonMonotoneEdge { lower: usize, upper: usize },

    #[error("lattice has no {bound} (expected extent {extent})")]
    MissingBound { bound: &'static str, extent: String },

    #[error("record {record}: concept with extent {extent} below it is missing")]
    IncompleteLattice { record: usize, extent: String },

    #[error("record {record}: lower neighbors {found:?} are not its covers {expected:?}")]
    NotCovering {
        record: usize,
        expected: Vec<usize>,
        found: Vec<usize>,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ConceptError {
    /// Classify the error into construction / lookup / interchange
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::EmptyUniverse { .. }
            | Self::DuplicateLabel { .. }
            | Self::OverlappingLabels { .. }
            | Self::RowCountMismatch { .. }
            | Self::RowLengthMismatch { .. }
            | Self::Config(_) => ErrorKind::Construction,
            Self::UnknownLabel { .. }
            | Self::IndexOutOfRange { .. }
            | Self::ConceptNotFound { .. } => ErrorKind::Lookup,
            _ => ErrorKind::Interchange,
        }
    }

    /// Create an unknown label error
    pub fn unknown_label(universe: impl Into<String>, label: impl Into<String>) -> Self {
        Self::UnknownLabel {
            universe: universe.into(),
            label: label.into(),
        }
    }

    /// Create a not-closed error
    pub fn not_closed(record: usize, reason: impl Into<String>) -> Self {
        Self::NotClosed {
            record,
            reason: reason.into(),
        }
    }
}

/// Result type alias for conceptgraph operations
pub type Result<T> = std::result::Result<T, ConceptError>;
