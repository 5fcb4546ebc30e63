//! Error types for remarks
//!
//! This module provides unified error handling across the workspace:
//! schema loading, configuration, artifact I/O and migration emission.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for remarks
#[derive(Debug, Error)]
pub enum EngineError {
    // ========================================================================
    // Validation Errors
    // ========================================================================
    /// General validation error
    #[error("Validation error: {0}")]
    Validation(String),

    /// Model validation failed
    #[error("Model validation failed for '{model}': {message}")]
    ModelValidation { model: String, message: String },

    /// Field validation failed
    #[error("Field validation failed for '{model}.{field}': {message}")]
    FieldValidation {
        model: String,
        field: String,
        message: String,
    },

    // ========================================================================
    // Schema Input Errors
    // ========================================================================
    /// Schema document not found
    #[error("Schema not found at path: {0}")]
    SchemaNotFound(PathBuf),

    /// Schema document could not be decoded
    #[error("Invalid schema format in '{path}': {message}")]
    InvalidSchemaFormat { path: PathBuf, message: String },

    // ========================================================================
    // Migration Errors
    // ========================================================================
    /// A migration directory with the same timestamped name already exists
    #[error("Migration directory already exists: {0}")]
    MigrationExists(PathBuf),

    // ========================================================================
    // IO Errors
    // ========================================================================
    /// File read error
    #[error("Failed to read file '{path}': {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// File write error
    #[error("Failed to write file '{path}': {source}")]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// File copy error
    #[error("Failed to copy '{from}' to '{to}': {source}")]
    FileCopy {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// File removal error
    #[error("Failed to remove file '{path}': {source}")]
    FileRemove {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Directory creation failed
    #[error("Failed to create directory '{path}': {source}")]
    DirectoryCreate {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // ========================================================================
    // Serialization Errors
    // ========================================================================
    /// JSON serialization error
    #[error("JSON serialization error: {0}")]
    JsonSerialization(#[from] serde_json::Error),

    // ========================================================================
    // Configuration Errors
    // ========================================================================
    /// Configuration file could not be parsed
    #[error("Invalid configuration in '{path}': {message}")]
    InvalidConfig { path: PathBuf, message: String },

    /// Missing required configuration
    #[error("Missing required configuration: {0}")]
    MissingConfig(String),

    // ========================================================================
    // Generic Errors
    // ========================================================================
    /// Internal error (should not happen)
    #[error("Internal error: {0}")]
    Internal(String),
}

impl EngineError {
    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        EngineError::Validation(msg.into())
    }

    /// Create a model validation error
    pub fn model_validation(model: impl Into<String>, msg: impl Into<String>) -> Self {
        EngineError::ModelValidation {
            model: model.into(),
            message: msg.into(),
        }
    }

    /// Create a field validation error
    pub fn field_validation(
        model: impl Into<String>,
        field: impl Into<String>,
        msg: impl Into<String>,
    ) -> Self {
        EngineError::FieldValidation {
            model: model.into(),
            field: field.into(),
            message: msg.into(),
        }
    }

    /// Create a read error for `path`
    pub fn read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        EngineError::FileRead {
            path: path.into(),
            source,
        }
    }

    /// Create a write error for `path`
    pub fn write(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        EngineError::FileWrite {
            path: path.into(),
            source,
        }
    }

    /// Create an internal error
    pub fn internal(msg: impl Into<String>) -> Self {
        EngineError::Internal(msg.into())
    }

    /// Check if this error is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            EngineError::Validation(_)
                | EngineError::ModelValidation { .. }
                | EngineError::FieldValidation { .. }
        )
    }

    /// Check if this error is a not-found error, including I/O errors whose
    /// underlying kind is `NotFound`
    pub fn is_not_found(&self) -> bool {
        match self {
            EngineError::SchemaNotFound(_) => true,
            EngineError::FileRead { source, .. }
            | EngineError::FileWrite { source, .. }
            | EngineError::FileCopy { source, .. }
            | EngineError::FileRemove { source, .. }
            | EngineError::DirectoryCreate { source, .. } => {
                source.kind() == std::io::ErrorKind::NotFound
            }
            _ => false,
        }
    }

    /// Check if this error is an IO error
    pub fn is_io(&self) -> bool {
        matches!(
            self,
            EngineError::FileRead { .. }
                | EngineError::FileWrite { .. }
                | EngineError::FileCopy { .. }
                | EngineError::FileRemove { .. }
                | EngineError::DirectoryCreate { .. }
        )
    }
}

/// Result type alias using EngineError
pub type EngineResult<T> = Result<T, EngineError>;

// ============================================================================
// Tests
// ============================================================================
