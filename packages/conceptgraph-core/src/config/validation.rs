//! Configuration validation
//!
//! Code that accepts a configuration depends on `Validatable`, not on the
//! concrete config types.

use super::error::ConfigResult;

/// Trait for validatable configuration objects
///
/// # Example
/// ```rust,ignore
/// use conceptgraph_core::config::Validatable;
///
/// fn build<C: Validatable>(config: C) -> Result<Lattice, ConfigError> {
///     config.validate()?;
///     // ... build lattice
/// }
/// ```
pub trait Validatable {
    /// Validate the configuration
    ///
    /// Returns `Ok(())` if valid, `Err(ConfigError)` with details if invalid.
    fn validate(&self) -> ConfigResult<()>;

    /// Get the configuration name for error messages
    fn config_name(&self) -> &'static str {
        "Config"
    }
}
