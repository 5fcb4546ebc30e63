//! Subcommand implementations
//!
//! Every command writes its human-facing output to the supplied writer;
//! diagnostics go through `tracing`.

use anyhow::{Context, Result};
use colored::Colorize;
use remarks_codegen::migrations::list_migrations;
use remarks_codegen::{EmitOutcome, Generator};
use remarks_ir::{Schema, load_schema};
use std::io::Write;
use std::path::Path;
use std::process::ExitCode;

use crate::cli::{Cli, Command};
use crate::config::{ConfigFile, Settings};

/// How a successful command finished
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Success,
    /// `check` found that a migration is pending
    Stale,
}

impl From<Status> for ExitCode {
    fn from(status: Status) -> Self {
        match status {
            Status::Success => ExitCode::SUCCESS,
            Status::Stale => ExitCode::from(1),
        }
    }
}

/// Run the parsed command line, resolving relative config lookups against
/// the current directory.
pub fn run(cli: &Cli, out: &mut dyn Write) -> Result<Status> {
    let file = ConfigFile::discover(cli.config.as_deref(), ".")?;

    match &cli.command {
        Command::Generate {
            schema,
            output,
            migrations,
        } => generate(
            &Settings::resolve(
                &file,
                schema.path.as_deref(),
                output.dir.as_deref(),
                migrations.dir.as_deref(),
            ),
            out,
        ),
        Command::Render { schema } => {
            render(&Settings::resolve(&file, schema.path.as_deref(), None, None), out)
        }
        Command::Check { schema, output } => check(
            &Settings::resolve(&file, schema.path.as_deref(), output.dir.as_deref(), None),
            out,
        ),
        Command::Migrations { migrations } => list(
            &Settings::resolve(&file, None, None, migrations.dir.as_deref()),
            out,
        ),
    }
}

fn load(path: &Path) -> Result<Schema> {
    load_schema(path).with_context(|| format!("failed to load schema from {}", path.display()))
}

// ============================================================================
// Commands
// ============================================================================

/// `remarks generate`
pub fn generate(settings: &Settings, out: &mut dyn Write) -> Result<Status> {
    let schema = load(&settings.schema)?;
    let report = Generator::new(settings.generator.clone())
        .generate(&schema)
        .context("comment generation failed")?;

    for warning in &report.warnings {
        writeln!(out, "{} {}", "warning:".yellow().bold(), warning)?;
    }

    match &report.outcome {
        EmitOutcome::Changed { migration_dir, .. } => writeln!(
            out,
            "{} Created migration {}",
            "✓".green().bold(),
            migration_dir.display()
        )?,
        EmitOutcome::Unchanged { .. } => writeln!(
            out,
            "{} No changes detected, skipped creating a migration",
            "✓".green().bold()
        )?,
    }
    write!(out, "{}", report)?;

    Ok(Status::Success)
}

/// `remarks render`
pub fn render(settings: &Settings, out: &mut dyn Write) -> Result<Status> {
    let schema = load(&settings.schema)?;
    write!(out, "{}", Generator::new(settings.generator.clone()).render(&schema))?;
    Ok(Status::Success)
}

/// `remarks check`
pub fn check(settings: &Settings, out: &mut dyn Write) -> Result<Status> {
    let schema = load(&settings.schema)?;
    let stale = Generator::new(settings.generator.clone())
        .check(&schema)
        .context("failed to compare with the lock file")?;

    if stale {
        writeln!(
            out,
            "{} Comments changed since {}; run `remarks generate`",
            "✗".red().bold(),
            settings.generator.lock_path().display()
        )?;
        Ok(Status::Stale)
    } else {
        writeln!(out, "{} Comments are up to date", "✓".green().bold())?;
        Ok(Status::Success)
    }
}

/// `remarks migrations`
pub fn list(settings: &Settings, out: &mut dyn Write) -> Result<Status> {
    let config = &settings.generator;
    let found = list_migrations(&config.migrations_dir, &config.migration_suffix)?;

    if found.is_empty() {
        writeln!(
            out,
            "No comment migrations in {}",
            config.migrations_dir.display()
        )?;
        return Ok(Status::Success);
    }

    for dir in &found {
        if let Some(name) = dir.file_name() {
            writeln!(out, "{}", name.to_string_lossy())?;
        }
    }
    tracing::debug!(count = found.len(), "listed comment migrations");

    Ok(Status::Success)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use remarks_codegen::GeneratorConfig;
    use tempfile::TempDir;

    const SCHEMA_JSON: &str = r#"{
        "datamodel": {
            "models": [
                {
                    "name": "User",
                    "dbName": "users",
                    "documentation": "User table",
                    "fields": [
                        { "name": "id" },
                        { "name": "name", "documentation": "Full name" }
                    ]
                }
            ]
        }
    }"#;

    fn settings(temp: &TempDir) -> Settings {
        let schema = temp.path().join("schema.json");
        std::fs::write(&schema, SCHEMA_JSON).unwrap();
        Settings {
            schema,
            generator: GeneratorConfig::new()
                .with_output_dir(temp.path().join("comments"))
                .with_migrations_dir(temp.path().join("migrations")),
        }
    }

    fn output(buf: Vec<u8>) -> String {
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_render_writes_artifact_only() {
        let temp = TempDir::new().unwrap();
        let settings = settings(&temp);
        let mut buf = Vec::new();

        assert_eq!(render(&settings, &mut buf).unwrap(), Status::Success);
        assert_eq!(
            output(buf),
            "-- generator-version: 1.0.0\n\n-- users comments\n\
             COMMENT ON TABLE \"users\" IS 'User table';\n\
             COMMENT ON COLUMN \"users\".\"name\" IS 'Full name';\n"
        );
        assert!(!settings.generator.output_dir.exists());
    }

    #[test]
    fn test_generate_then_check() {
        let temp = TempDir::new().unwrap();
        let settings = settings(&temp);

        let mut buf = Vec::new();
        assert_eq!(check(&settings, &mut buf).unwrap(), Status::Stale);

        let mut buf = Vec::new();
        generate(&settings, &mut buf).unwrap();
        assert!(output(buf).contains("Created migration"));

        let mut buf = Vec::new();
        assert_eq!(check(&settings, &mut buf).unwrap(), Status::Success);

        let mut buf = Vec::new();
        generate(&settings, &mut buf).unwrap();
        assert!(output(buf).contains("No changes detected"));
    }

    #[test]
    fn test_list_migrations() {
        let temp = TempDir::new().unwrap();
        let settings = settings(&temp);

        let mut buf = Vec::new();
        list(&settings, &mut buf).unwrap();
        assert!(output(buf).starts_with("No comment migrations in"));

        generate(&settings, &mut Vec::new()).unwrap();
        let mut buf = Vec::new();
        list(&settings, &mut buf).unwrap();
        let text = output(buf);
        assert_eq!(text.lines().count(), 1);
        assert!(text.trim_end().ends_with("_update_comments"));
    }

    #[test]
    fn test_missing_schema_is_reported() {
        let temp = TempDir::new().unwrap();
        let settings = Settings {
            schema: temp.path().join("absent.json"),
            generator: GeneratorConfig::new().with_output_dir(temp.path().join("comments")),
        };

        let err = render(&settings, &mut Vec::new()).unwrap_err();
        assert!(format!("{:#}", err).contains("Schema not found"));
    }
}
