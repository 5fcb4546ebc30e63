//! # Lock Files
//!
//! Content digests and the staging lock file.
//!
//! The committed lock file (`.comments-lock`) holds the last accepted comment
//! text. Each run stages its own text next to it (`.comments-lock.tmp`) and
//! compares the two by SHA-256 digest. The staging file is owned by a
//! [`StagingFile`] guard so that it is removed on every exit path.

use remarks_core::{EngineError, EngineResult};
use sha2::{Digest, Sha256};
use std::fmt;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

// ============================================================================
// ContentHash
// ============================================================================

/// SHA-256 digest of a file's raw bytes
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct ContentHash([u8; 32]);

impl ContentHash {
    /// Digest of `bytes`
    pub fn of(bytes: impl AsRef<[u8]>) -> Self {
        Self(Sha256::digest(bytes.as_ref()).into())
    }

    /// Digest of the empty byte sequence
    pub fn empty() -> Self {
        Self::of(b"")
    }

    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Lowercase hex rendering
    pub fn to_hex(&self) -> String {
        self.to_string()
    }

    /// First 12 hex characters, for log lines
    pub fn short(&self) -> String {
        let mut hex = self.to_hex();
        hex.truncate(12);
        hex
    }
}

impl fmt::Display for ContentHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in &self.0 {
            write!(f, "{:02x}", byte)?;
        }
        Ok(())
    }
}

impl fmt::Debug for ContentHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ContentHash({})", self.short())
    }
}

// ============================================================================
// Hashing files
// ============================================================================

/// What [`hash_file`] does when the file does not exist
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissingFile {
    /// Hash as the empty byte sequence
    Empty,
    /// Fail with the underlying `NotFound` error
    Error,
}

/// Hash the raw bytes of the file at `path`.
///
/// A missing file is only tolerated with [`MissingFile::Empty`]; every other
/// read failure is returned as [`EngineError::FileRead`].
pub fn hash_file(path: impl AsRef<Path>, missing: MissingFile) -> EngineResult<ContentHash> {
    let path = path.as_ref();
    match std::fs::read(path) {
        Ok(bytes) => Ok(ContentHash::of(bytes)),
        Err(e) if e.kind() == ErrorKind::NotFound && missing == MissingFile::Empty => {
            tracing::debug!(path = %path.display(), "no lock file yet, hashing as empty");
            Ok(ContentHash::empty())
        }
        Err(e) => Err(EngineError::read(path, e)),
    }
}

/// Copy `from` over `to`, creating `to` if needed.
pub(crate) fn copy_file(from: &Path, to: &Path) -> EngineResult<()> {
    std::fs::copy(from, to)
        .map(|_| ())
        .map_err(|source| EngineError::FileCopy {
            from: from.to_path_buf(),
            to: to.to_path_buf(),
            source,
        })
}

// ============================================================================
// StagingFile
// ============================================================================

/// The staging lock file of a single run.
///
/// Created with the run's full text. Call [`finish`](StagingFile::finish) to
/// remove it and observe removal errors; if the guard is dropped first (an
/// early return or a panic) the file is removed on drop and a failure is only
/// logged.
#[derive(Debug)]
pub struct StagingFile {
    path: PathBuf,
    armed: bool,
}

impl StagingFile {
    /// Write `content` to `path`, truncating any leftover from an earlier run.
    pub fn create(path: impl Into<PathBuf>, content: &str) -> EngineResult<Self> {
        let path = path.into();
        std::fs::write(&path, content).map_err(|e| EngineError::write(&path, e))?;
        tracing::debug!(path = %path.display(), bytes = content.len(), "staged comments");
        Ok(Self { path, armed: true })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Digest of the staged bytes as they are on disk
    pub fn hash(&self) -> EngineResult<ContentHash> {
        hash_file(&self.path, MissingFile::Error)
    }

    /// Remove the staging file.
    pub fn finish(mut self) -> EngineResult<()> {
        self.armed = false;
        std::fs::remove_file(&self.path).map_err(|source| EngineError::FileRemove {
            path: self.path.clone(),
            source,
        })
    }
}

impl Drop for StagingFile {
    fn drop(&mut self) {
        if !self.armed {
            return;
        }
        if let Err(e) = std::fs::remove_file(&self.path) {
            if e.kind() != ErrorKind::NotFound {
                tracing::warn!(
                    path = %self.path.display(),
                    error = %e,
                    "failed to remove staging lock file",
                );
            }
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
