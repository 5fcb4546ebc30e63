//! Command-line argument definitions

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "remarks")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Generate COMMENT ON migrations from schema documentation", long_about = None)]
#[command(after_help = "EXAMPLES:
    remarks render --schema prisma/schema.json    # Print the comment SQL
    remarks generate                              # Emit a migration if comments changed
    remarks check                                 # Exit 1 if a migration is pending
    remarks migrations                            # List comment migrations")]
pub struct Cli {
    /// TOML configuration file (defaults to ./remarks.toml when present)
    #[arg(short, long, global = true, env = "REMARKS_CONFIG")]
    pub config: Option<PathBuf>,

    /// Verbose output (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Render comments and create a migration if they changed
    Generate {
        #[command(flatten)]
        schema: SchemaArg,
        #[command(flatten)]
        output: OutputArg,
        #[command(flatten)]
        migrations: MigrationsArg,
    },
    /// Print the rendered comment SQL without writing anything
    Render {
        #[command(flatten)]
        schema: SchemaArg,
    },
    /// Exit with status 1 if `generate` would create a migration
    Check {
        #[command(flatten)]
        schema: SchemaArg,
        #[command(flatten)]
        output: OutputArg,
    },
    /// List existing comment migrations
    Migrations {
        #[command(flatten)]
        migrations: MigrationsArg,
    },
}

#[derive(Debug, Clone, Default, Args)]
pub struct SchemaArg {
    /// Schema JSON document
    #[arg(id = "schema", short = 's', long = "schema", env = "REMARKS_SCHEMA")]
    pub path: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, Args)]
pub struct OutputArg {
    /// Directory holding the comments lock file
    #[arg(id = "output", short = 'o', long = "output", env = "REMARKS_OUTPUT")]
    pub dir: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, Args)]
pub struct MigrationsArg {
    /// Migrations root directory
    #[arg(id = "migrations", short = 'm', long = "migrations", env = "REMARKS_MIGRATIONS")]
    pub dir: Option<PathBuf>,
}
