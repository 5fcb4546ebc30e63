//! # Change-Tracked Emitter
//!
//! Persists rendered comment text, but only when it changed.
//!
//! ```text
//! stage  ─► .comments-lock.tmp           (every run)
//! hash   ─► sha256(.comments-lock)       (missing = empty)
//!           sha256(.comments-lock.tmp)   (missing = error)
//! differ ─► <migrations>/<ts>_update_comments/migration.sql
//!           .comments-lock  ◄── staged bytes
//! always ─► remove .comments-lock.tmp
//! ```
//!
//! The migration is written before the lock file is promoted. If the run dies
//! between the two steps the lock still holds the old text, so the next run
//! detects the change again instead of silently losing the migration.
//!
//! There is no locking: two concurrent runs against the same output directory
//! race on the same paths.

use chrono::{DateTime, Utc};
use remarks_core::{EngineError, EngineResult};
use std::fmt;
use std::path::PathBuf;

use crate::GeneratorConfig;
use crate::lockfile::{ContentHash, MissingFile, StagingFile, copy_file, hash_file};
use crate::migrations::{MigrationName, create_migration};

// ============================================================================
// EmitOutcome
// ============================================================================

/// What a run did to the persisted artifacts
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EmitOutcome {
    /// Staged text matched the lock file; nothing was written
    Unchanged { digest: ContentHash },

    /// A new migration was written and the lock file promoted
    Changed {
        migration_dir: PathBuf,
        previous: ContentHash,
        current: ContentHash,
    },
}

impl EmitOutcome {
    pub fn is_changed(&self) -> bool {
        matches!(self, EmitOutcome::Changed { .. })
    }

    /// Directory of the migration created by this run, if any
    pub fn migration_dir(&self) -> Option<&std::path::Path> {
        match self {
            EmitOutcome::Changed { migration_dir, .. } => Some(migration_dir),
            EmitOutcome::Unchanged { .. } => None,
        }
    }

    /// Digest of the lock file after the run
    pub fn digest(&self) -> ContentHash {
        match self {
            EmitOutcome::Unchanged { digest } => *digest,
            EmitOutcome::Changed { current, .. } => *current,
        }
    }
}

impl fmt::Display for EmitOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EmitOutcome::Unchanged { digest } => {
                write!(f, "no changes detected ({})", digest.short())
            }
            EmitOutcome::Changed {
                migration_dir,
                previous,
                current,
            } => write!(
                f,
                "comments changed ({} -> {}), created {}",
                previous.short(),
                current.short(),
                migration_dir.display()
            ),
        }
    }
}

// ============================================================================
// Emitter
// ============================================================================

/// Writes comment text through the lock file and migration directories
/// described by a [`GeneratorConfig`].
#[derive(Debug, Clone)]
pub struct Emitter {
    config: GeneratorConfig,
}

impl Emitter {
    pub fn new(config: GeneratorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Emit `content`, naming any new migration after the current time.
    pub fn emit(&self, content: &str) -> EngineResult<EmitOutcome> {
        self.emit_at(content, Utc::now())
    }

    /// Emit `content`, naming any new migration after `now`.
    ///
    /// The staging file is removed before returning on every path. When both
    /// the run and the removal fail, the run's error is returned.
    pub fn emit_at(&self, content: &str, now: DateTime<Utc>) -> EngineResult<EmitOutcome> {
        let output_dir = &self.config.output_dir;
        std::fs::create_dir_all(output_dir).map_err(|source| EngineError::DirectoryCreate {
            path: output_dir.clone(),
            source,
        })?;

        let staging = StagingFile::create(self.config.staging_path(), content)?;
        let outcome = self.compare_and_promote(&staging, now);
        let cleanup = staging.finish();

        self.settle(outcome, cleanup)
    }

    /// Combine the run result with the staging cleanup result.
    ///
    /// The run's error takes precedence. A completed run is logged before a
    /// cleanup failure is returned.
    fn settle(
        &self,
        outcome: EngineResult<EmitOutcome>,
        cleanup: EngineResult<()>,
    ) -> EngineResult<EmitOutcome> {
        let outcome = outcome?;

        match &outcome {
            EmitOutcome::Changed { migration_dir, .. } => tracing::info!(
                migration = %migration_dir.display(),
                "lock file changed, created a new comment migration",
            ),
            EmitOutcome::Unchanged { .. } => tracing::info!(
                "no changes detected, skipping creating a fresh comment migration",
            ),
        }

        if let Err(e) = cleanup {
            tracing::warn!(
                staging = %self.config.staging_path().display(),
                migration = ?outcome.migration_dir(),
                "comment run completed but the staging lock file was left behind",
            );
            return Err(e);
        }

        Ok(outcome)
    }

    /// Whether emitting `content` would create a new migration.
    ///
    /// Reads the lock file only; nothing is staged or written.
    pub fn is_stale(&self, content: &str) -> EngineResult<bool> {
        let committed = hash_file(self.config.lock_path(), MissingFile::Empty)?;
        Ok(committed != ContentHash::of(content))
    }

    fn compare_and_promote(
        &self,
        staging: &StagingFile,
        now: DateTime<Utc>,
    ) -> EngineResult<EmitOutcome> {
        let lock_path = self.config.lock_path();
        let previous = hash_file(&lock_path, MissingFile::Empty)?;
        let current = staging.hash()?;

        tracing::debug!(
            previous = %previous.short(),
            current = %current.short(),
            "compared lock file digests",
        );

        if previous == current {
            return Ok(EmitOutcome::Unchanged { digest: current });
        }

        let staged = std::fs::read(staging.path()).map_err(|e| EngineError::read(staging.path(), e))?;
        let name = MigrationName::at(now, &self.config.migration_suffix);
        let migration_dir = create_migration(&self.config.migrations_dir, &name, &staged)?;

        copy_file(staging.path(), &lock_path)?;

        Ok(EmitOutcome::Changed {
            migration_dir,
            previous,
            current,
        })
    }
}

// ============================================================================
// Tests
// ============================================================================
