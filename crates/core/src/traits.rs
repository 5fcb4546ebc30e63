//! Core traits for remarks
//!
//! This module defines the traits that schema types implement so that
//! validation and comment rendering can treat tables and columns uniformly.

use crate::error::EngineResult;

// ============================================================================
// Validatable Trait
// ============================================================================

/// Trait for types that can be validated
///
/// Validation in remarks is advisory: the generator reports problems as
/// warnings and keeps going, because the schema has already been accepted by
/// its own toolchain by the time it reaches us.
///
/// # Example
///
/// ```rust,ignore
/// use remarks_core::{Validatable, EngineResult, EngineError};
///
/// struct Table {
///     name: String,
/// }
///
/// impl Validatable for Table {
///     fn validate(&self) -> EngineResult<()> {
///         if self.name.is_empty() {
///             return Err(EngineError::validation("Table name cannot be empty"));
///         }
///         Ok(())
///     }
/// }
/// ```
pub trait Validatable {
    /// Validate the current state of the object
    ///
    /// Returns `Ok(())` if valid, or an `EngineError` describing the first problem.
    fn validate(&self) -> EngineResult<()>;

    /// Check if the object is valid without returning error details
    fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }

    /// Get all validation errors (for types that can have multiple errors)
    fn validation_errors(&self) -> Vec<String> {
        match self.validate() {
            Ok(()) => vec![],
            Err(e) => vec![e.to_string()],
        }
    }
}

// ============================================================================
// Documented Trait
// ============================================================================

/// A schema object that maps to a named database object and may carry
/// documentation.
pub trait Documented {
    /// Name of the object in the database (table or column)
    fn db_name(&self) -> &str;

    /// Raw documentation text, if any
    fn documentation(&self) -> Option<&str>;

    /// Documentation that should produce a `COMMENT ON` statement.
    ///
    /// Empty strings count as undocumented.
    fn comment(&self) -> Option<&str> {
        self.documentation().filter(|doc| !doc.is_empty())
    }

    /// Whether a comment statement will be emitted for this object
    fn is_documented(&self) -> bool {
        self.comment().is_some()
    }
}

// ============================================================================
// Tests
// ============================================================================
