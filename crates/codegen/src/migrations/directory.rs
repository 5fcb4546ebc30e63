//! Naming, creating and listing comment migration directories

use super::{MIGRATION_FILE_NAME, TIMESTAMP_FORMAT};
use chrono::{DateTime, Utc};
use remarks_core::{EngineError, EngineResult};
use std::fmt;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

// ============================================================================
// MigrationName
// ============================================================================

/// Directory name of one comment migration, e.g. `20240102030405_update_comments`
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct MigrationName {
    timestamp: String,
    suffix: String,
}

impl MigrationName {
    /// Name for a migration created at `now`. Sub-second precision is dropped.
    pub fn at(now: DateTime<Utc>, suffix: impl Into<String>) -> Self {
        Self {
            timestamp: now.format(TIMESTAMP_FORMAT).to_string(),
            suffix: suffix.into(),
        }
    }

    /// The `YYYYMMDDHHMMSS` prefix
    pub fn timestamp(&self) -> &str {
        &self.timestamp
    }

    pub fn suffix(&self) -> &str {
        &self.suffix
    }
}

impl fmt::Display for MigrationName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}_{}", self.timestamp, self.suffix)
    }
}

// ============================================================================
// Create
// ============================================================================

/// Create `<root>/<name>/` and write `content` to its `migration.sql`.
///
/// The root is created if needed; the migration directory itself must not
/// exist yet. Returns the path of the new directory.
pub fn create_migration(
    root: impl AsRef<Path>,
    name: &MigrationName,
    content: &[u8],
) -> EngineResult<PathBuf> {
    let root = root.as_ref();
    std::fs::create_dir_all(root).map_err(|source| EngineError::DirectoryCreate {
        path: root.to_path_buf(),
        source,
    })?;

    let dir = root.join(name.to_string());
    match std::fs::create_dir(&dir) {
        Ok(()) => {}
        Err(e) if e.kind() == ErrorKind::AlreadyExists => {
            return Err(EngineError::MigrationExists(dir));
        }
        Err(source) => {
            return Err(EngineError::DirectoryCreate { path: dir, source });
        }
    }

    let file = dir.join(MIGRATION_FILE_NAME);
    std::fs::write(&file, content).map_err(|e| EngineError::write(&file, e))?;

    tracing::debug!(path = %file.display(), bytes = content.len(), "wrote migration");
    Ok(dir)
}

// ============================================================================
// List
// ============================================================================

/// Comment migration directories directly under `root`, oldest first.
///
/// Only directories whose name ends in `_<suffix>` are returned. A missing
/// root yields an empty list.
pub fn list_migrations(root: impl AsRef<Path>, suffix: &str) -> EngineResult<Vec<PathBuf>> {
    let root = root.as_ref();
    if !root.exists() {
        return Ok(Vec::new());
    }

    let tail = format!("_{}", suffix);
    let mut found = Vec::new();

    for entry in WalkDir::new(root)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
    {
        let entry = entry.map_err(|e| {
            let path = e.path().unwrap_or(root).to_path_buf();
            match e.into_io_error() {
                Some(source) => EngineError::read(path, source),
                None => EngineError::internal(format!(
                    "filesystem loop while listing {}",
                    path.display()
                )),
            }
        })?;

        if entry.file_type().is_dir() && entry.file_name().to_string_lossy().ends_with(&tail) {
            found.push(entry.into_path());
        }
    }

    Ok(found)
}

// ============================================================================
// Tests
// ============================================================================
