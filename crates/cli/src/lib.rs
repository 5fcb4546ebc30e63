//! # Remarks CLI
//!
//! Command-line interface for remarks.
//!
//! ## Commands
//!
//! - `generate` - Render comments and emit a migration when they changed
//! - `render` - Print the rendered comment SQL
//! - `check` - Exit non-zero when a comment migration is pending
//! - `migrations` - List existing comment migrations
//!

pub mod cli;
pub mod commands;
pub mod config;

pub use cli::{Cli, Command};
pub use commands::{Status, run};
pub use config::{ConfigFile, Settings};

/// CLI version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// CLI name
pub const NAME: &str = env!("CARGO_PKG_NAME");
