//! # Generator Orchestrator
//!
//! The `Generator` is the top-level entry point. It takes a [`Schema`] and a
//! [`GeneratorConfig`], renders the comment artifact and hands it to the
//! [`Emitter`].
//!
//! ## Pipeline
//!
//! ```text
//! Schema + GeneratorConfig
//!         │
//!         ├──► Validatable::validation_errors()  → warnings (never fatal)
//!         ├──► comments::render_artifact()       → String
//!         │
//!         ▼
//!   Emitter::emit_at()  → EmitOutcome
//!         │
//!         ▼
//!   GenerationReport { outcome, warnings, counts }
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use remarks_codegen::{Generator, GeneratorConfig};
//! use remarks_ir::load_schema;
//!
//! let schema = load_schema("prisma/dmmf.json")?;
//! let config = GeneratorConfig::new().with_output_dir("prisma/comments");
//!
//! let report = Generator::new(config).generate(&schema)?;
//! println!("{}", report);
//! ```

use chrono::{DateTime, Utc};
use remarks_core::{EngineResult, Validatable};
use remarks_ir::Schema;

use crate::comments;
use crate::{EmitOutcome, Emitter, GeneratorConfig};

// ============================================================================
// Generator
// ============================================================================

/// Top-level comment generator.
///
/// Stateless aside from its configuration; every call to
/// [`generate`](Generator::generate) is one complete run.
#[derive(Debug, Clone)]
pub struct Generator {
    config: GeneratorConfig,
}

impl Generator {
    // ====================================================================
    // Construction
    // ====================================================================

    /// Create a new generator with the given configuration.
    pub fn new(config: GeneratorConfig) -> Self {
        Self { config }
    }

    /// Create a generator with default configuration.
    pub fn with_defaults() -> Self {
        Self::new(GeneratorConfig::default())
    }

    /// Get the current configuration.
    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Replace the configuration.
    pub fn set_config(&mut self, config: GeneratorConfig) {
        self.config = config;
    }

    // ====================================================================
    // Generation
    // ====================================================================

    /// Render the full artifact text for `schema` without touching disk.
    pub fn render(&self, schema: &Schema) -> String {
        comments::render_artifact(&schema.models)
    }

    /// Run the generator, naming any new migration after the current time.
    pub fn generate(&self, schema: &Schema) -> EngineResult<GenerationReport> {
        self.generate_at(schema, Utc::now())
    }

    /// Run the generator, naming any new migration after `now`.
    ///
    /// # Steps
    ///
    /// 1. **Validate** the schema. Problems are logged and reported as
    ///    warnings; the schema has already been accepted upstream.
    /// 2. **Render** the artifact text.
    /// 3. **Emit** it through the lock file, creating a migration on change.
    ///
    /// # Errors
    ///
    /// Any filesystem failure other than a missing lock file.
    pub fn generate_at(&self, schema: &Schema, now: DateTime<Utc>) -> EngineResult<GenerationReport> {
        let warnings = schema.validation_errors();
        for warning in &warnings {
            tracing::warn!("Schema validation warning: {}", warning);
        }

        let content = self.render(schema);
        let outcome = Emitter::new(self.config.clone()).emit_at(&content, now)?;

        let report = GenerationReport {
            model_count: schema.model_count(),
            statement_count: schema.comment_count(),
            warnings,
            outcome,
        };

        tracing::info!(
            models = report.model_count,
            statements = report.statement_count,
            changed = report.outcome.is_changed(),
            "comment generation completed",
        );

        Ok(report)
    }

    /// Whether running the generator on `schema` would create a migration.
    pub fn check(&self, schema: &Schema) -> EngineResult<bool> {
        Emitter::new(self.config.clone()).is_stale(&self.render(schema))
    }
}

impl Default for Generator {
    fn default() -> Self {
        Self::with_defaults()
    }
}

// ============================================================================
// Standalone entry point
// ============================================================================

/// Run one generation with explicit configuration.
///
/// This is a shorthand for `Generator::new(config).generate(schema)`.
pub fn generate(config: GeneratorConfig, schema: &Schema) -> EngineResult<GenerationReport> {
    Generator::new(config).generate(schema)
}

// ============================================================================
// GenerationReport
// ============================================================================

/// Result of a completed generation run
#[derive(Debug, Clone)]
pub struct GenerationReport {
    /// Number of models rendered
    pub model_count: usize,
    /// Number of `COMMENT ON` statements in the artifact
    pub statement_count: usize,
    /// Advisory schema problems
    pub warnings: Vec<String>,
    /// What happened on disk
    pub outcome: EmitOutcome,
}

impl GenerationReport {
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// Format the report as a human-readable block.
    pub fn display(&self) -> String {
        let mut out = String::with_capacity(256);

        out.push_str(&format!("Models:     {}\n", self.model_count));
        out.push_str(&format!("Statements: {}\n", self.statement_count));
        out.push_str(&format!("Warnings:   {}\n", self.warnings.len()));
        match &self.outcome {
            EmitOutcome::Changed { migration_dir, .. } => {
                out.push_str(&format!("Migration:  {}\n", migration_dir.display()));
            }
            EmitOutcome::Unchanged { .. } => out.push_str("Migration:  none (unchanged)\n"),
        }
        out.push_str(&format!("Digest:     {}\n", self.outcome.digest()));

        out
    }
}

impl std::fmt::Display for GenerationReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display())
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ContentHash;
    use crate::migrations::list_migrations;
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;
    use remarks_ir::{Field, Model};
    use tempfile::TempDir;

    /// Helper: the `users` table with one documented column.
    fn users_schema() -> Schema {
        Schema::new().with_model(
            Model::new("User")
                .with_db_name("users")
                .with_documentation("User table")
                .with_field(Field::new("id"))
                .with_field(Field::new("name").with_documentation("Full name")),
        )
    }

    fn generator(temp: &TempDir) -> Generator {
        Generator::new(
            GeneratorConfig::new()
                .with_output_dir(temp.path().join("comments"))
                .with_migrations_dir(temp.path().join("prisma").join("migrations")),
        )
    }

    fn at(s: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 30, 23, 59, s).unwrap()
    }

    const USERS_SQL: &str = "-- generator-version: 1.0.0\n\
        \n\
        -- users comments\n\
        COMMENT ON TABLE \"users\" IS 'User table';\n\
        COMMENT ON COLUMN \"users\".\"name\" IS 'Full name';\n";

    #[test]
    fn test_generator_with_defaults() {
        let generator = Generator::default();
        assert_eq!(generator.config(), &GeneratorConfig::default());
    }

    #[test]
    fn test_generator_set_config() {
        let mut generator = Generator::with_defaults();
        generator.set_config(GeneratorConfig::new().with_output_dir("elsewhere"));
        assert_eq!(
            generator.config().output_dir,
            std::path::PathBuf::from("elsewhere")
        );
    }

    #[test]
    fn test_render_users() {
        let generator = Generator::with_defaults();
        assert_eq!(generator.render(&users_schema()), USERS_SQL);
    }

    #[test]
    fn test_first_run_writes_migration() {
        let temp = TempDir::new().unwrap();
        let generator = generator(&temp);

        let report = generator.generate_at(&users_schema(), at(1)).unwrap();
        assert!(report.outcome.is_changed());
        assert_eq!(report.model_count, 1);
        assert_eq!(report.statement_count, 2);
        assert!(!report.has_warnings());

        let dir = report.outcome.migration_dir().unwrap();
        assert!(dir.ends_with("20240630235901_update_comments"));
        assert_eq!(
            std::fs::read_to_string(dir.join("migration.sql")).unwrap(),
            USERS_SQL
        );
        assert_eq!(
            std::fs::read_to_string(generator.config().lock_path()).unwrap(),
            USERS_SQL
        );
    }

    #[test]
    fn test_second_run_is_idempotent() {
        let temp = TempDir::new().unwrap();
        let generator = generator(&temp);

        generator.generate_at(&users_schema(), at(1)).unwrap();
        let report = generator.generate_at(&users_schema(), at(2)).unwrap();

        assert!(!report.outcome.is_changed());
        assert_eq!(report.outcome.digest(), ContentHash::of(USERS_SQL));
        assert_eq!(
            list_migrations(&generator.config().migrations_dir, "update_comments")
                .unwrap()
                .len(),
            1
        );
        assert!(!generator.config().staging_path().exists());
    }

    #[test]
    fn test_documentation_change_triggers_migration() {
        let temp = TempDir::new().unwrap();
        let generator = generator(&temp);

        generator.generate_at(&users_schema(), at(1)).unwrap();

        let mut schema = users_schema();
        schema.models[0].documentation = Some("Registered accounts".to_string());
        let report = generator.generate_at(&schema, at(2)).unwrap();

        assert!(report.outcome.is_changed());
        let lock = std::fs::read_to_string(generator.config().lock_path()).unwrap();
        assert!(lock.contains("IS 'Registered accounts';"));
    }

    #[test]
    fn test_check() {
        let temp = TempDir::new().unwrap();
        let generator = generator(&temp);

        assert!(generator.check(&users_schema()).unwrap());
        generator.generate_at(&users_schema(), at(1)).unwrap();
        assert!(!generator.check(&users_schema()).unwrap());
        assert!(!generator.config().staging_path().exists());
    }

    #[test]
    fn test_warnings_do_not_block_generation() {
        let temp = TempDir::new().unwrap();
        let generator = generator(&temp);
        let schema = users_schema().with_model(Model::new("Account").with_db_name("users"));

        let report = generator.generate_at(&schema, at(1)).unwrap();
        assert_eq!(
            report.warnings,
            vec!["Model validation failed for 'users': Duplicate table name".to_string()]
        );
        assert!(report.outcome.is_changed());
    }

    #[test]
    fn test_empty_schema_still_creates_initial_migration() {
        let temp = TempDir::new().unwrap();
        let report = generator(&temp).generate_at(&Schema::new(), at(1)).unwrap();
        assert!(report.outcome.is_changed());
        assert_eq!(report.statement_count, 0);
    }

    #[test]
    fn test_standalone_generate() {
        let temp = TempDir::new().unwrap();
        let config = GeneratorConfig::new()
            .with_output_dir(temp.path().join("out"))
            .with_migrations_dir(temp.path().join("migrations"));

        let report = generate(config.clone(), &users_schema()).unwrap();
        assert!(report.outcome.is_changed());
        assert!(config.lock_path().exists());
    }

    #[test]
    fn test_report_display() {
        let report = GenerationReport {
            model_count: 3,
            statement_count: 7,
            warnings: vec![],
            outcome: EmitOutcome::Unchanged {
                digest: ContentHash::empty(),
            },
        };
        let text = report.to_string();
        assert!(text.contains("Models:     3"));
        assert!(text.contains("Statements: 7"));
        assert!(text.contains("Migration:  none (unchanged)"));
        assert!(text.contains("e3b0c44298fc1c149afbf4c8996fb924"));
    }
}
