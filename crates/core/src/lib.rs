//! # Remarks Core
//!
//! Core traits and error handling for remarks.
//!
//! This crate provides the foundational building blocks used throughout
//! the workspace:
//!
//! - **Traits**: `Validatable` for advisory schema checks and `Documented`
//!   for anything that can carry a SQL comment
//! - **Errors**: Unified error handling with `EngineError` and `EngineResult`
//!

pub mod error;
pub mod traits;

// Re-export commonly used items at crate root
pub use error::{EngineError, EngineResult};
pub use traits::{Documented, Validatable};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
