//! Enumeration helpers over bit-vectors

pub mod powerset;

pub use powerset::Powerset;
