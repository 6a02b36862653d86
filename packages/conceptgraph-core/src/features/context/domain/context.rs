//! Formal context: objects, properties and their incidence
//!
//! `Context::new` is the single validated entry point of the crate. Labels and
//! matrix shape are checked before any bit-vector is built.

use std::fmt;

use rustc_hash::FxHashSet;
use tracing::debug;

use super::relation::Relation;
use crate::errors::{ConceptError, Result};
use crate::features::bitset::{BitVector, Universe};

/// Closed `(extent, intent)` pair as label lists
pub type LabeledPair<'a> = (Vec<&'a str>, Vec<&'a str>);

/// Objects × properties incidence with derivation operators
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Context {
    objects: Universe,
    properties: Universe,
    relation: Relation,
}

impl Context {
    /// Create a context from labels and `len(objects)` rows of
    /// `len(properties)` booleans
    pub fn new<O, P>(
        objects: impl IntoIterator<Item = O>,
        properties: impl IntoIterator<Item = P>,
        bools: Vec<Vec<bool>>,
    ) -> Result<Self>
    where
        O: Into<String>,
        P: Into<String>,
    {
        let objects = Universe::new("objects", objects)?;
        let properties = Universe::new("properties", properties)?;

        let object_labels: FxHashSet<&str> =
            objects.labels().iter().map(String::as_str).collect();
        let mut overlap: Vec<String> = properties
            .labels()
            .iter()
            .filter(|label| object_labels.contains(label.as_str()))
            .cloned()
            .collect();
        if !overlap.is_empty() {
            overlap.sort();
            return Err(ConceptError::OverlappingLabels { labels: overlap });
        }

        if bools.len() != objects.len() {
            return Err(ConceptError::RowCountMismatch {
                expected: objects.len(),
                found: bools.len(),
            });
        }
        if let Some((row, found)) = bools
            .iter()
            .map(Vec::len)
            .enumerate()
            .find(|&(_, len)| len != properties.len())
        {
            return Err(ConceptError::RowLengthMismatch {
                row,
                expected: properties.len(),
                found,
            });
        }

        let relation = Relation::from_bools(&bools, properties.len());
        debug!(
            "context created: {} objects x {} properties",
            objects.len(),
            properties.len()
        );
        Ok(Self {
            objects,
            properties,
            relation,
        })
    }

    pub fn objects(&self) -> &Universe {
        &self.objects
    }

    pub fn properties(&self) -> &Universe {
        &self.properties
    }

    pub fn relation(&self) -> &Relation {
        &self.relation
    }

    /// `(n_objects, n_properties)`
    pub fn shape(&self) -> (usize, usize) {
        (self.objects.len(), self.properties.len())
    }

    pub fn bools(&self) -> Vec<Vec<bool>> {
        self.relation.bools()
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Derivation by labels
    // ═══════════════════════════════════════════════════════════════════════

    /// Properties shared by all given objects
    pub fn intension<S: AsRef<str>>(&self, objects: &[S]) -> Result<Vec<&str>> {
        let extent = self.objects.from_labels(objects)?;
        Ok(self.properties.members(&self.relation.objects().prime(&extent)))
    }

    /// Objects having all given properties
    pub fn extension<S: AsRef<str>>(&self, properties: &[S]) -> Result<Vec<&str>> {
        let intent = self.properties.from_labels(properties)?;
        Ok(self.objects.members(&self.relation.properties().prime(&intent)))
    }

    /// Smallest closed pair containing the labels (all objects or all properties)
    pub fn closure<S: AsRef<str>>(&self, items: &[S]) -> Result<(BitVector, BitVector)> {
        if let Some(extent) = self.objects.try_from_labels(items) {
            return Ok(self.relation.objects().doubleprime(&extent));
        }
        let intent = self.properties.from_labels(items)?;
        let (intent, extent) = self.relation.properties().doubleprime(&intent);
        Ok((extent, intent))
    }

    /// Like [`Context::closure`] with member labels
    pub fn concept_of<S: AsRef<str>>(&self, items: &[S]) -> Result<LabeledPair<'_>> {
        let (extent, intent) = self.closure(items)?;
        Ok(self.labeled(&extent, &intent))
    }

    pub(crate) fn labeled(&self, extent: &BitVector, intent: &BitVector) -> LabeledPair<'_> {
        (self.objects.members(extent), self.properties.members(intent))
    }
}

impl fmt::Display for Context {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "<Context object mapping {} objects to {} properties>",
            self.objects.len(),
            self.properties.len()
        )
    }
}
