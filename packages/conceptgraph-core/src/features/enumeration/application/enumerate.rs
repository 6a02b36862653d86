//! Algorithm dispatch
//!
//! Selects the [`ConceptSource`] named by the configuration. All sources
//! yield the same concept set with the same covering edges, so the choice
//! only affects running time.

use tracing::info;

use crate::config::{Algorithm, LatticeConfig};
use crate::features::context::Relation;
use crate::features::enumeration::infrastructure::covering_edges::FcboLattice;
use crate::features::enumeration::infrastructure::fcbo::Orientation;
use crate::features::enumeration::infrastructure::lindig::Lindig;
use crate::features::enumeration::ports::{ConceptSource, RawConcept};

/// Concept source for the configured algorithm
pub fn source_for(config: &LatticeConfig) -> Box<dyn ConceptSource> {
    match config.algorithm {
        Algorithm::Lindig => Box::new(Lindig),
        Algorithm::Fcbo => Box::new(FcboLattice {
            orientation: Orientation::Intents,
            parallel: config.parallel.clone(),
        }),
        Algorithm::FcboDual => Box::new(FcboLattice {
            orientation: Orientation::Extents,
            parallel: config.parallel.clone(),
        }),
    }
}

/// Enumerate all concepts with covering edges, in shortlex order
pub fn enumerate(relation: &Relation, config: &LatticeConfig) -> Vec<RawConcept> {
    let source = source_for(config);
    info!(
        "enumerating {}x{} context with {}",
        relation.n_objects(),
        relation.n_properties(),
        source.name()
    );
    source.lattice(relation)
}
