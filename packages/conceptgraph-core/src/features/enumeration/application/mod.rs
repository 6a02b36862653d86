//! Enumeration use cases

pub mod enumerate;

pub use enumerate::{enumerate, source_for};
