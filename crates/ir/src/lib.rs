//! # Remarks IR (Intermediate Representation)
//!
//! This crate holds the schema model that comment generation works from:
//! tables, their columns and the documentation attached to each.
//!
//! ## Core Concepts
//!
//! - **Model**: A schema model that maps to a database table (e.g. `users`)
//! - **Field**: A property of a model that maps to a column (e.g. `email`)
//! - **Schema**: The ordered list of models handed to the generator
//!
//! Models and fields are passed through verbatim. Order is preserved and
//! names are never rewritten, since both end up in generated SQL.
//!

// Module declarations
pub mod field;
pub mod model;
pub mod schema;
pub mod serialization;

// Re-export commonly used types at crate root
pub use field::Field;
pub use model::Model;
pub use schema::Schema;
pub use serialization::{load_schema, load_schema_from_string};

// Re-export core types that are commonly used with IR
pub use remarks_core::{Documented, EngineError, EngineResult, Validatable};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// ============================================================================
// Prelude Module
// ============================================================================

/// Convenient re-exports for common usage
pub mod prelude {
    pub use crate::{
        Documented, EngineError, EngineResult, Field, Model, Schema, Validatable, load_schema,
    };
}
