//! Loading schemas from JSON documents
//!
//! The schema parser itself lives outside this workspace. What reaches us is
//! its JSON export, in one of three shapes:
//!
//! ```text
//! { "datamodel": { "models": [ ... ] } }   full DMMF document
//! { "models": [ ... ] }                    datamodel section only
//! [ ... ]                                  bare model list
//! ```
//!
//! Unknown keys are ignored so that full exports load without trimming.

use crate::{Model, Schema};
use remarks_core::{EngineError, EngineResult};
use serde::Deserialize;
use std::path::Path;

// ============================================================================
// Document shapes
// ============================================================================

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum SchemaDocument {
    Dmmf { datamodel: Datamodel },
    Datamodel(Datamodel),
    Models(Vec<Model>),
}

#[derive(Debug, Deserialize)]
struct Datamodel {
    models: Vec<Model>,
}

impl From<SchemaDocument> for Schema {
    fn from(doc: SchemaDocument) -> Self {
        match doc {
            SchemaDocument::Dmmf { datamodel } | SchemaDocument::Datamodel(datamodel) => {
                Schema::from(datamodel.models)
            }
            SchemaDocument::Models(models) => Schema::from(models),
        }
    }
}

// ============================================================================
// Load Functions
// ============================================================================

/// Load a schema from a file
///
/// # Example
///
/// ```rust,ignore
/// use remarks_ir::load_schema;
///
/// let schema = load_schema("prisma/dmmf.json")?;
/// println!("Loaded {} models", schema.model_count());
/// ```
pub fn load_schema(path: impl AsRef<Path>) -> EngineResult<Schema> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(EngineError::SchemaNotFound(path.to_path_buf()));
    }

    let json = std::fs::read_to_string(path).map_err(|e| EngineError::read(path, e))?;

    let schema = load_schema_from_string(&json).map_err(|e| match e {
        EngineError::JsonSerialization(je) => EngineError::InvalidSchemaFormat {
            path: path.to_path_buf(),
            message: je.to_string(),
        },
        other => other,
    })?;

    tracing::debug!(
        path = %path.display(),
        models = schema.model_count(),
        "Loaded schema"
    );

    Ok(schema)
}

/// Load a schema from a JSON string
pub fn load_schema_from_string(json: &str) -> EngineResult<Schema> {
    let doc: SchemaDocument = serde_json::from_str(json)?;
    Ok(doc.into())
}

// ============================================================================
// Tests
// ============================================================================
