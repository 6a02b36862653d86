//! Serialized lattice interchange
//!
//! A lattice is exported as one [`ConceptRecord`] per concept in ascending
//! `index` order: `(extent indices, intent indices, upper positions, lower
//! positions)`. Rebuilding accepts the records either in that order or in
//! any order and validates the graph before assembly:
//!
//! - member indices in range and unique
//! - neighbor references in range and unique
//! - every record a closed pair, no extent twice
//! - ordered mode: extents strictly ascending in shortlex order
//! - neighbor lists symmetric
//! - every upper edge strictly grows the extent (rules out cycles)
//! - infimum and supremum present, first and last in ordered mode
//! - no concept missing below any record
//! - lower neighbors exactly the covering relation

use std::sync::Arc;

use rustc_hash::{FxHashMap, FxHashSet};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::errors::{ConceptError, Result};
use crate::features::bitset::BitVector;
use crate::features::context::Context;
use crate::features::enumeration::infrastructure::{extent_index, lower_covers, missing_candidate};
use crate::features::enumeration::RawConcept;
use crate::features::lattice::application::{assemble, into_shortlex_order};
use crate::features::lattice::domain::Lattice;

/// `(extent, intent, upper, lower)` as index lists
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConceptRecord(
    pub Vec<usize>,
    pub Vec<usize>,
    pub Vec<usize>,
    pub Vec<usize>,
);

impl ConceptRecord {
    pub fn extent(&self) -> &[usize] {
        &self.0
    }

    pub fn intent(&self) -> &[usize] {
        &self.1
    }

    pub fn upper(&self) -> &[usize] {
        &self.2
    }

    pub fn lower(&self) -> &[usize] {
        &self.3
    }
}

impl Lattice {
    /// One record per concept, ascending `index`
    pub fn to_records(&self) -> Vec<ConceptRecord> {
        self.concepts
            .iter()
            .map(|c| {
                ConceptRecord(
                    c.extent.iter().collect(),
                    c.intent.iter().collect(),
                    c.upper.clone(),
                    c.lower.clone(),
                )
            })
            .collect()
    }

    /// Rebuild a lattice from records
    ///
    /// With `unordered` the records may come in any order; neighbor positions
    /// always refer to positions in `records`.
    pub fn from_records(
        context: impl Into<Arc<Context>>,
        records: &[ConceptRecord],
        unordered: bool,
    ) -> Result<Lattice> {
        let context = context.into();
        let raw = validate(&context, records, unordered).map_err(|err| {
            warn!("rejected serialized lattice: {}", err);
            err
        })?;
        let raw = if unordered {
            into_shortlex_order(raw)
        } else {
            raw
        };
        debug!("rebuilding lattice from {} records", raw.len());
        Ok(assemble(context, raw))
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Validation
// ═══════════════════════════════════════════════════════════════════════════

fn members(
    record: usize,
    field: &'static str,
    indices: &[usize],
    len: usize,
) -> Result<BitVector> {
    let mut seen = FxHashSet::default();
    for &index in indices {
        if index >= len {
            return Err(ConceptError::InvalidMemberIndex {
                record,
                field,
                index,
                len,
            });
        }
        if !seen.insert(index) {
            return Err(ConceptError::DuplicateIndex {
                record,
                field,
                index,
            });
        }
    }
    Ok(BitVector::from_indices(len, indices.iter().copied()))
}

fn references(record: usize, field: &'static str, targets: &[usize], len: usize) -> Result<()> {
    let mut seen = FxHashSet::default();
    for &target in targets {
        if target >= len {
            return Err(ConceptError::InvalidReference {
                record,
                field,
                target,
                len,
            });
        }
        if !seen.insert(target) {
            return Err(ConceptError::DuplicateIndex {
                record,
                field,
                index: target,
            });
        }
    }
    Ok(())
}

fn validate(context: &Context, records: &[ConceptRecord], unordered: bool) -> Result<Vec<RawConcept>> {
    if records.is_empty() {
        return Err(ConceptError::EmptyLattice);
    }
    let (n_objects, n_properties) = context.shape();
    let n = records.len();

    let mut raw = Vec::with_capacity(n);
    for (i, record) in records.iter().enumerate() {
        let extent = members(i, "extent", record.extent(), n_objects)?;
        let intent = members(i, "intent", record.intent(), n_properties)?;
        references(i, "upper", record.upper(), n)?;
        references(i, "lower", record.lower(), n)?;

        let mut concept = RawConcept::new(extent, intent);
        concept.upper = record.upper().to_vec();
        concept.lower = record.lower().to_vec();
        raw.push(concept);
    }

    let relation = context.relation();
    let mut extents: FxHashMap<&BitVector, usize> = FxHashMap::default();
    extents.reserve(n);
    for (i, concept) in raw.iter().enumerate() {
        if relation.objects().prime(&concept.extent) != concept.intent {
            return Err(ConceptError::not_closed(i, "intent is not the extent's derivation"));
        }
        if relation.properties().prime(&concept.intent) != concept.extent {
            return Err(ConceptError::not_closed(i, "extent is not the intent's derivation"));
        }
        if let Some(first) = extents.insert(&concept.extent, i) {
            return Err(ConceptError::DuplicateExtent {
                first,
                second: i,
                extent: concept.extent.bits(),
            });
        }
    }
    drop(extents);

    if !unordered {
        if let Some(record) = (1..n).find(|&i| {
            raw[i - 1].extent.cmp_shortlex(&raw[i].extent) != std::cmp::Ordering::Less
        }) {
            return Err(ConceptError::NotOrdered { record });
        }
    }

    for (i, concept) in raw.iter().enumerate() {
        for &upper in &concept.upper {
            if !raw[upper].lower.contains(&i) {
                return Err(ConceptError::AsymmetricNeighbors {
                    record: i,
                    neighbor: upper,
                    field: "upper",
                });
            }
            if !concept.extent.is_proper_subset(&raw[upper].extent) {
                return Err(ConceptError::NonMonotoneEdge { lower: i, upper });
            }
        }
        for &lower in &concept.lower {
            if !raw[lower].upper.contains(&i) {
                return Err(ConceptError::AsymmetricNeighbors {
                    record: i,
                    neighbor: lower,
                    field: "lower",
                });
            }
        }
    }

    bounds(context, &raw, unordered)?;
    covers(context, &raw)?;
    Ok(raw)
}

/// Infimum and supremum present; in ordered mode at the ends
fn bounds(context: &Context, raw: &[RawConcept], unordered: bool) -> Result<()> {
    let relation = context.relation();
    let (n_objects, n_properties) = context.shape();
    let bottom = relation.properties().prime(&BitVector::full(n_properties));
    let top = BitVector::full(n_objects);
    let last = raw.len() - 1;

    for (bound, extent, expected) in [("infimum", bottom, 0), ("supremum", top, last)] {
        let position = raw.iter().position(|c| c.extent == extent);
        let placed = match position {
            Some(position) => unordered || position == expected,
            None => false,
        };
        if !placed {
            return Err(ConceptError::MissingBound {
                bound,
                extent: extent.bits(),
            });
        }
    }
    Ok(())
}

/// Concept set complete below every record, lower lists equal to the covers
fn covers(context: &Context, raw: &[RawConcept]) -> Result<()> {
    let relation = context.relation();
    let pairs: Vec<(BitVector, BitVector)> = raw
        .iter()
        .map(|c| (c.extent.clone(), c.intent.clone()))
        .collect();
    let index = extent_index(&pairs);

    for (record, concept) in raw.iter().enumerate() {
        if let Some(missing) = missing_candidate(relation, &pairs, &index, record) {
            return Err(ConceptError::IncompleteLattice {
                record,
                extent: missing.bits(),
            });
        }
        let mut expected = lower_covers(relation, &pairs, &index, record);
        let mut found = concept.lower.clone();
        expected.sort_unstable();
        found.sort_unstable();
        if expected != found {
            return Err(ConceptError::NotCovering {
                record,
                expected,
                found,
            });
        }
    }
    Ok(())
}

// ═══════════════════════════════════════════════════════════════════════════
// Context document
// ═══════════════════════════════════════════════════════════════════════════

/// JSON shape of a context with an optional lattice
///
/// ```text
/// {"objects": [..], "properties": [..], "context": [[0, 3], ..], "lattice": [[[], [0, 1], [1], []], ..]}
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContextDocument {
    pub objects: Vec<String>,
    pub properties: Vec<String>,
    /// Property indices per object
    pub context: Vec<Vec<usize>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lattice: Option<Vec<ConceptRecord>>,
}

impl ContextDocument {
    pub fn from_context(context: &Context, lattice: Option<&Lattice>) -> Self {
        Self {
            objects: context.objects().labels().to_vec(),
            properties: context.properties().labels().to_vec(),
            context: context
                .relation()
                .rows()
                .iter()
                .map(|row| row.iter().collect())
                .collect(),
            lattice: lattice.map(Lattice::to_records),
        }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Validated context of the document
    pub fn to_context(&self) -> Result<Context> {
        let n_properties = self.properties.len();
        let mut bools = Vec::with_capacity(self.context.len());
        for (i, row) in self.context.iter().enumerate() {
            let bits = members(i, "context", row, n_properties)?;
            bools.push((0..n_properties).map(|m| bits.contains(m)).collect());
        }
        Context::new(self.objects.iter().cloned(), self.properties.iter().cloned(), bools)
    }

    /// Context and rebuilt lattice of the document
    pub fn to_lattice(&self, unordered: bool) -> Result<Lattice> {
        let records = self.lattice.as_ref().ok_or(ConceptError::MissingLattice)?;
        let context = self.to_context()?;
        Lattice::from_records(context, records, unordered)
    }
}
