//! Model definitions for database tables
//!
//! A `Model` is one table of the schema: its mapped name, optional
//! documentation and its fields in declaration order.

use crate::field::Field;
use remarks_core::{Documented, EngineError, EngineResult, Validatable};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

// ============================================================================
// Model
// ============================================================================

/// Represents a schema model (maps to a database table)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Model {
    /// Model name as written in the schema
    #[serde(default)]
    pub name: String,

    /// Mapped table name; `None` means the table is named after the model
    #[serde(default)]
    pub db_name: Option<String>,

    /// Documentation attached to the model in the schema
    #[serde(default)]
    pub documentation: Option<String>,

    /// Fields (columns) in declaration order
    #[serde(default)]
    pub fields: Vec<Field>,
}

impl Model {
    /// Create a new model with no fields
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            db_name: None,
            documentation: None,
            fields: Vec::new(),
        }
    }

    // ========================================================================
    // Builder methods
    // ========================================================================

    /// Map the model to a differently named table
    pub fn with_db_name(mut self, db_name: impl Into<String>) -> Self {
        self.db_name = Some(db_name.into());
        self
    }

    /// Set the documentation
    pub fn with_documentation(mut self, documentation: impl Into<String>) -> Self {
        self.documentation = Some(documentation.into());
        self
    }

    /// Add a field, keeping declaration order
    pub fn with_field(mut self, field: Field) -> Self {
        self.fields.push(field);
        self
    }

    /// Add a field, keeping declaration order
    pub fn add_field(&mut self, field: Field) {
        self.fields.push(field);
    }

    // ========================================================================
    // Queries
    // ========================================================================

    /// Table name used in SQL
    pub fn table_name(&self) -> &str {
        self.db_name.as_deref().unwrap_or(&self.name)
    }

    /// Look up a field by its schema name
    pub fn get_field(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Fields that will produce a column comment
    pub fn documented_fields(&self) -> impl Iterator<Item = &Field> {
        self.fields.iter().filter(|f| f.is_documented())
    }

    /// Number of `COMMENT ON` statements this model renders to
    pub fn comment_count(&self) -> usize {
        usize::from(self.is_documented()) + self.documented_fields().count()
    }

    pub fn field_count(&self) -> usize {
        self.fields.len()
    }
}

impl Documented for Model {
    fn db_name(&self) -> &str {
        self.table_name()
    }

    fn documentation(&self) -> Option<&str> {
        self.documentation.as_deref()
    }
}

impl Validatable for Model {
    fn validate(&self) -> EngineResult<()> {
        match self.validation_errors().into_iter().next() {
            Some(message) => Err(EngineError::validation(message)),
            None => Ok(()),
        }
    }

    fn validation_errors(&self) -> Vec<String> {
        let mut errors = Vec::new();

        if self.table_name().is_empty() {
            errors.push(
                EngineError::model_validation(&self.name, "Table name cannot be empty").to_string(),
            );
        }

        let mut seen = HashSet::new();
        for field in &self.fields {
            if let Err(e) = field.validate() {
                errors.push(
                    EngineError::field_validation(self.table_name(), &field.name, e.to_string())
                        .to_string(),
                );
            }
            if !field.column_name().is_empty() && !seen.insert(field.column_name()) {
                errors.push(
                    EngineError::field_validation(
                        self.table_name(),
                        field.column_name(),
                        "Duplicate column name",
                    )
                    .to_string(),
                );
            }
        }

        errors
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn users() -> Model {
        Model::new("User")
            .with_db_name("users")
            .with_documentation("User table")
            .with_field(Field::new("id"))
            .with_field(Field::new("name").with_documentation("Full name"))
    }

    #[test]
    fn test_table_name() {
        assert_eq!(users().table_name(), "users");
        assert_eq!(Model::new("Post").table_name(), "Post");
    }

    #[test]
    fn test_field_order_preserved() {
        let model = users();
        let names: Vec<&str> = model.fields.iter().map(|f| f.column_name()).collect();
        assert_eq!(names, vec!["id", "name"]);
    }

    #[test]
    fn test_comment_count() {
        assert_eq!(users().comment_count(), 2);
        assert_eq!(Model::new("Empty").comment_count(), 0);
        assert_eq!(users().documented_fields().count(), 1);
    }

    #[test]
    fn test_get_field() {
        let model = users();
        assert!(model.get_field("name").is_some());
        assert!(model.get_field("missing").is_none());
    }

    #[test]
    fn test_valid_model() {
        assert!(users().is_valid());
    }

    #[test]
    fn test_duplicate_column_reported() {
        let model = users().with_field(Field::new("fullName").with_db_name("name"));
        let errors = model.validation_errors();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("'users.name'"));
        assert!(errors[0].contains("Duplicate column name"));
    }

    #[test]
    fn test_empty_table_name_reported() {
        let model = Model::new("");
        let err = model.validate().unwrap_err();
        assert!(err.is_validation());
        assert!(err.to_string().contains("Table name cannot be empty"));
    }
}
