//! Command-line tool for inspecting Microsoft Graph payloads against the
//! typed models.
//!
//! Usage:
//! ```bash
//! graph-models list                          # List registered types
//! graph-models describe SubjectSet           # Show a type and its schema
//! graph-models schema IpRange                # Print the JSON Schema only
//! graph-models decode Application app.json   # Summarize a decoded payload
//! graph-models roundtrip DirectoryObject -   # Re-encode stdin and diff it
//! ```

use std::{path::PathBuf, process::ExitCode};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use crate::config::{Config, LogFormat, LoggingConfig};

mod commands;
mod config;

#[cfg(test)]
pub(crate) mod testing {
    use std::sync::{Mutex, MutexGuard, OnceLock, PoisonError};

    /// Serializes tests that touch the process environment or cwd.
    pub(crate) fn test_lock() -> MutexGuard<'static, ()> {
        static LOCK: OnceLock<Mutex<()>> = OnceLock::new();
        LOCK.get_or_init(|| Mutex::new(()))
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

#[derive(Debug, Parser)]
#[command(name = "graph-models", author, version, about)]
struct Cli {
    /// Path to a graph-models.toml; overrides discovery
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List registered models, families and collections
    List(commands::list::ListArgs),

    /// Show a registered type and its JSON Schema
    Describe(commands::describe::DescribeArgs),

    /// Print the JSON Schema of a type
    Schema(commands::schema::SchemaArgs),

    /// Decode a payload and summarize the result
    Decode(commands::decode::DecodeArgs),

    /// Decode, re-encode and report divergences
    Roundtrip(commands::roundtrip::RoundtripArgs),
}

impl std::fmt::Debug for Command {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::List(_) => f.debug_tuple("List").finish(),
            Self::Describe(_) => f.debug_tuple("Describe").finish(),
            Self::Schema(_) => f.debug_tuple("Schema").finish(),
            Self::Decode(_) => f.debug_tuple("Decode").finish(),
            Self::Roundtrip(_) => f.debug_tuple("Roundtrip").finish(),
        }
    }
}

/// Picks filter directives: `RUST_LOG`, then the config, then `warn`.
fn filter_directives(env: Option<String>, logging: &LoggingConfig) -> String {
    env.filter(|directives| !directives.trim().is_empty())
        .or_else(|| logging.filter.clone())
        .unwrap_or_else(|| "warn".to_owned())
}

fn init_tracing(logging: &LoggingConfig) -> Result<()> {
    let directives = filter_directives(std::env::var(EnvFilter::DEFAULT_ENV).ok(), logging);
    let filter = EnvFilter::try_new(&directives)
        .with_context(|| format!("invalid log filter `{directives}`"))?;
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    match logging.format {
        LogFormat::Text => builder.init(),
        LogFormat::Json => builder.json().init(),
    }
    Ok(())
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let loaded = Config::resolve(cli.config.as_deref()).context("failed to load configuration")?;
    init_tracing(&loaded.config.logging)?;
    debug!(path = ?loaded.path, command = ?cli.command, "configuration resolved");

    let config = &loaded.config;
    match &cli.command {
        Command::List(args) => commands::list::run(args, config).map(|()| ExitCode::SUCCESS),
        Command::Describe(args) => {
            commands::describe::run(args, config).map(|()| ExitCode::SUCCESS)
        }
        Command::Schema(args) => commands::schema::run(args, config).map(|()| ExitCode::SUCCESS),
        Command::Decode(args) => commands::decode::run(args, config).map(|()| ExitCode::SUCCESS),
        Command::Roundtrip(args) => commands::roundtrip::run(args, config),
    }
}
