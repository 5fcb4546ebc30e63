//! The parsed schema: an ordered list of models

use crate::model::Model;
use remarks_core::{EngineError, EngineResult, Validatable};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

// ============================================================================
// Schema
// ============================================================================

/// Root container for every model handed to the generator.
///
/// Model order is significant: rendered comment blocks follow it exactly.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schema {
    /// Models in declaration order
    pub models: Vec<Model>,
}

impl Schema {
    /// Create an empty schema
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a schema from models, keeping their order
    pub fn from_models(models: impl IntoIterator<Item = Model>) -> Self {
        Self {
            models: models.into_iter().collect(),
        }
    }

    /// Add a model at the end
    pub fn add_model(&mut self, model: Model) {
        self.models.push(model);
    }

    /// Add a model at the end
    pub fn with_model(mut self, model: Model) -> Self {
        self.models.push(model);
        self
    }

    /// Look up a model by table name
    pub fn get_model(&self, table_name: &str) -> Option<&Model> {
        self.models.iter().find(|m| m.table_name() == table_name)
    }

    pub fn model_count(&self) -> usize {
        self.models.len()
    }

    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }

    /// Total number of `COMMENT ON` statements the schema renders to
    pub fn comment_count(&self) -> usize {
        self.models.iter().map(Model::comment_count).sum()
    }
}

impl Validatable for Schema {
    fn validate(&self) -> EngineResult<()> {
        match self.validation_errors().into_iter().next() {
            Some(message) => Err(EngineError::validation(message)),
            None => Ok(()),
        }
    }

    fn validation_errors(&self) -> Vec<String> {
        let mut errors = Vec::new();
        let mut seen = HashSet::new();

        for model in &self.models {
            errors.extend(model.validation_errors());

            if !model.table_name().is_empty() && !seen.insert(model.table_name()) {
                errors.push(
                    EngineError::model_validation(model.table_name(), "Duplicate table name")
                        .to_string(),
                );
            }
        }

        errors
    }
}

impl From<Vec<Model>> for Schema {
    fn from(models: Vec<Model>) -> Self {
        Self { models }
    }
}

// ============================================================================
// Tests
// ============================================================================
