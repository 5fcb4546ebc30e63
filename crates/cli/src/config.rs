//! # Configuration
//!
//! Settings are layered, later layers winning:
//!
//! ```text
//! built-in defaults  <  remarks.toml / --config  <  REMARKS_* env  <  flags
//! ```
//!
//! Environment variables and flags both arrive through `clap`, so by the time
//! [`Settings::resolve`] runs they are a single `Option` per setting.
//!
//! ```toml
//! # remarks.toml
//! schema = "prisma/schema.json"
//! output = "prisma/comments"
//! migrations = "prisma/migrations"
//! ```

use remarks_codegen::GeneratorConfig;
use remarks_core::{EngineError, EngineResult};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Configuration file picked up from the working directory
pub const DEFAULT_CONFIG_FILE: &str = "remarks.toml";

/// Schema document used when nothing else names one
pub const DEFAULT_SCHEMA_PATH: &str = "prisma/schema.json";

// ============================================================================
// ConfigFile
// ============================================================================

/// Contents of a `remarks.toml` file. Every key is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConfigFile {
    pub schema: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub migrations: Option<PathBuf>,
}

impl ConfigFile {
    /// Parse TOML text read from `path`.
    pub fn parse(path: impl AsRef<Path>, text: &str) -> EngineResult<Self> {
        toml::from_str(text).map_err(|e| EngineError::InvalidConfig {
            path: path.as_ref().to_path_buf(),
            message: e.message().to_string(),
        })
    }

    /// Read and parse a configuration file.
    pub fn load(path: impl AsRef<Path>) -> EngineResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| EngineError::read(path, e))?;
        let config = Self::parse(path, &text)?;
        tracing::debug!(path = %path.display(), "Loaded configuration file");
        Ok(config)
    }

    /// Load the explicitly named file, or `remarks.toml` under `dir` if it
    /// exists, or fall back to an empty configuration.
    ///
    /// An explicitly named file that does not exist is an error.
    pub fn discover(explicit: Option<&Path>, dir: impl AsRef<Path>) -> EngineResult<Self> {
        if let Some(path) = explicit {
            if !path.is_file() {
                return Err(EngineError::MissingConfig(format!(
                    "configuration file '{}' does not exist",
                    path.display()
                )));
            }
            return Self::load(path);
        }

        let implicit = dir.as_ref().join(DEFAULT_CONFIG_FILE);
        if implicit.is_file() {
            Self::load(implicit)
        } else {
            Ok(Self::default())
        }
    }
}

// ============================================================================
// Settings
// ============================================================================

/// Fully resolved settings for one command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub schema: PathBuf,
    pub generator: GeneratorConfig,
}

impl Settings {
    /// Merge command-line values (flags or env) over `file` over defaults.
    pub fn resolve(
        file: &ConfigFile,
        schema: Option<&Path>,
        output: Option<&Path>,
        migrations: Option<&Path>,
    ) -> Self {
        let pick = |cli: Option<&Path>, file: &Option<PathBuf>| {
            cli.map(Path::to_path_buf).or_else(|| file.clone())
        };

        let mut generator = GeneratorConfig::default();
        if let Some(dir) = pick(output, &file.output) {
            generator = generator.with_output_dir(dir);
        }
        if let Some(dir) = pick(migrations, &file.migrations) {
            generator = generator.with_migrations_dir(dir);
        }

        Self {
            schema: pick(schema, &file.schema).unwrap_or_else(|| PathBuf::from(DEFAULT_SCHEMA_PATH)),
            generator,
        }
    }
}
