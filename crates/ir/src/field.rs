//! Field definitions for model columns
//!
//! This module contains the `Field` struct, one column of a [`Model`](crate::Model)
//! together with its optional documentation.

use remarks_core::{Documented, EngineError, EngineResult, Validatable};
use serde::{Deserialize, Serialize};

// ============================================================================
// Field
// ============================================================================

/// Represents a field within a model (maps to a database column)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Field {
    /// Field name as written in the schema
    #[serde(default)]
    pub name: String,

    /// Mapped column name; `None` means the column is named after the field
    #[serde(default)]
    pub db_name: Option<String>,

    /// Documentation attached to the field in the schema
    #[serde(default)]
    pub documentation: Option<String>,
}

impl Field {
    /// Create a new undocumented field
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            db_name: None,
            documentation: None,
        }
    }

    // ========================================================================
    // Builder methods
    // ========================================================================

    /// Map the field to a differently named column
    pub fn with_db_name(mut self, db_name: impl Into<String>) -> Self {
        self.db_name = Some(db_name.into());
        self
    }

    /// Set the documentation
    pub fn with_documentation(mut self, documentation: impl Into<String>) -> Self {
        self.documentation = Some(documentation.into());
        self
    }

    /// Column name used in SQL
    pub fn column_name(&self) -> &str {
        self.db_name.as_deref().unwrap_or(&self.name)
    }
}

impl Documented for Field {
    fn db_name(&self) -> &str {
        self.column_name()
    }

    fn documentation(&self) -> Option<&str> {
        self.documentation.as_deref()
    }
}

impl Validatable for Field {
    fn validate(&self) -> EngineResult<()> {
        if self.column_name().is_empty() {
            return Err(EngineError::validation("Column name cannot be empty"));
        }
        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================
