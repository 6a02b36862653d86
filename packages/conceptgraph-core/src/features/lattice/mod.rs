//! # Concept Lattice
//!
//! Arena of [`Concept`] records ordered by shortlex (`index`) and longlex
//! (`dindex`), with covering neighbors, atoms and object/property
//! annotations fixed at assembly.
//!
//! ## Usage
//! ```text
//! let lattice = Lattice::new(context);
//! let concept = lattice.by_labels(&["+1"])?;
//! let join = lattice.join([lattice.by_labels(&["1sg"])?, lattice.by_labels(&["2sg"])?])?;
//! let above: Vec<_> = lattice.upset(concept).collect();
//! let records = lattice.to_records();
//! ```

pub mod application;
pub mod domain;
pub mod infrastructure;

pub use application::{assemble, into_shortlex_order, Generalization, UnionIter};
pub use domain::{Concept, Lattice};
pub use infrastructure::{ConceptRecord, ContextDocument};
