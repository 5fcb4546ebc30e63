//! # Migration Directories
//!
//! Every detected change to the comment set produces one migration directory
//! under the migrations root:
//!
//! ```text
//! prisma/migrations/
//! └── 20240102030405_update_comments/
//!     └── migration.sql
//! ```
//!
//! The name is the UTC wall-clock time truncated to whole seconds with all
//! separators removed, followed by a fixed suffix. Two runs inside the same
//! second produce the same name; the second one fails with
//! [`EngineError::MigrationExists`](remarks_core::EngineError::MigrationExists)
//! instead of overwriting the first.

pub mod directory;

pub use directory::{MigrationName, create_migration, list_migrations};

/// Default suffix appended to the timestamp
pub const DEFAULT_SUFFIX: &str = "update_comments";

/// Default name of the SQL file inside each migration directory
pub const MIGRATION_FILE_NAME: &str = "migration.sql";

/// `chrono` format of the timestamp prefix
pub const TIMESTAMP_FORMAT: &str = "%Y%m%d%H%M%S";
