//! Context use cases

pub mod logic;
pub mod minimize;

pub use logic::{LogicalRelation, PropertyRelations, RelationKind};
pub use minimize::{generators, minimal};
