//! # Remarks Codegen
//!
//! Generates `COMMENT ON` migrations from schema documentation.
//!
//! This crate takes the models of a [`Schema`](remarks_ir::Schema), renders
//! their documentation as SQL comment statements and writes a new migration
//! whenever that text differs from what was generated last time.
//!
//! ## Features
//!
//! - **Comment Rendering**: `COMMENT ON TABLE` / `COMMENT ON COLUMN` per model
//! - **Lock Files**: SHA-256 change detection against the last accepted text
//! - **Migration Emission**: timestamped `*_update_comments/migration.sql`
//!

// ============================================================================
// Modules
// ============================================================================

pub mod comments;
pub mod emitter;
pub mod generator;
pub mod lockfile;
pub mod migrations;

// ============================================================================
// Re-exports
// ============================================================================

pub use comments::{GENERATOR_VERSION, escape_comment, render_artifact, render_comments};
pub use emitter::{EmitOutcome, Emitter};
pub use generator::{GenerationReport, Generator, generate};
pub use lockfile::{ContentHash, MissingFile, hash_file};

use std::path::PathBuf;

/// Default name of the committed lock file
pub const DEFAULT_LOCK_FILE: &str = ".comments-lock";

/// Extension appended to the lock file name for the staging file
pub const STAGING_EXTENSION: &str = "tmp";

/// Default directory for the lock files
pub const DEFAULT_OUTPUT_DIR: &str = "./comments";

/// Default migrations root
pub const DEFAULT_MIGRATIONS_DIR: &str = "prisma/migrations";

// ============================================================================
// GeneratorConfig
// ============================================================================

/// Configuration for the comment generator
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Directory holding the committed and staging lock files
    pub output_dir: PathBuf,

    /// Directory that receives one subdirectory per comment migration
    pub migrations_dir: PathBuf,

    /// File name of the committed lock file inside `output_dir`
    pub lock_file_name: String,

    /// Suffix of migration directory names
    pub migration_suffix: String,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            migrations_dir: PathBuf::from(DEFAULT_MIGRATIONS_DIR),
            lock_file_name: DEFAULT_LOCK_FILE.to_string(),
            migration_suffix: migrations::DEFAULT_SUFFIX.to_string(),
        }
    }
}

impl GeneratorConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the output directory
    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }

    /// Set the migrations root
    pub fn with_migrations_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.migrations_dir = dir.into();
        self
    }

    /// Set the lock file name
    pub fn with_lock_file_name(mut self, name: impl Into<String>) -> Self {
        self.lock_file_name = name.into();
        self
    }

    /// Set the migration directory suffix
    pub fn with_migration_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.migration_suffix = suffix.into();
        self
    }

    /// Path of the committed lock file
    pub fn lock_path(&self) -> PathBuf {
        self.output_dir.join(&self.lock_file_name)
    }

    /// Path of the staging lock file
    pub fn staging_path(&self) -> PathBuf {
        self.output_dir
            .join(format!("{}.{}", self.lock_file_name, STAGING_EXTENSION))
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generator_config_default() {
        let config = GeneratorConfig::default();
        assert_eq!(config.output_dir, PathBuf::from("./comments"));
        assert_eq!(config.migrations_dir, PathBuf::from("prisma/migrations"));
        assert_eq!(config.migration_suffix, "update_comments");
    }

    #[test]
    fn test_generator_config_builder() {
        let config = GeneratorConfig::new()
            .with_output_dir("/tmp/output")
            .with_migrations_dir("/tmp/migrations")
            .with_migration_suffix("sync_comments");

        assert_eq!(config.output_dir, PathBuf::from("/tmp/output"));
        assert_eq!(config.migrations_dir, PathBuf::from("/tmp/migrations"));
        assert_eq!(config.migration_suffix, "sync_comments");
    }

    #[test]
    fn test_artifact_paths() {
        let config = GeneratorConfig::new().with_output_dir("out");
        assert_eq!(config.lock_path(), PathBuf::from("out/.comments-lock"));
        assert_eq!(config.staging_path(), PathBuf::from("out/.comments-lock.tmp"));

        let config = config.with_lock_file_name("comments.lock");
        assert_eq!(config.staging_path(), PathBuf::from("out/comments.lock.tmp"));
    }
}
