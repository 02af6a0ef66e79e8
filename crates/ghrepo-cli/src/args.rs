//! Command-line argument parsing.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Declarative GitHub repository reconciler
///
/// Creates, reads, updates, deletes and imports repositories of one
/// organization from desired-state manifests.
#[derive(Debug, Parser)]
#[command(name = "ghrepo")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Args {
    /// Path to configuration file
    ///
    /// If not specified, searches for ghrepo.toml in:
    /// 1. $GHREPO_CONFIG environment variable
    /// 2. Current directory
    /// 3. ~/.config/ghrepo/ghrepo.toml
    #[arg(short, long, value_name = "FILE", env = "GHREPO_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Logging level
    ///
    /// Valid values: trace, debug, info, warn, error
    #[arg(short, long, default_value = "info", env = "GHREPO_LOG", global = true)]
    pub log_level: String,

    /// Output logs as JSON (for structured logging)
    #[arg(long, default_value = "false", env = "GHREPO_LOG_JSON", global = true)]
    pub log_json: bool,

    /// Operation to run
    #[command(subcommand)]
    pub command: Command,
}

/// Lifecycle operation on a single repository.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Create the repository declared in a manifest
    Create {
        /// Desired-state manifest (TOML)
        #[arg(value_name = "MANIFEST")]
        manifest: PathBuf,
    },

    /// Read a repository and print its current state
    Read {
        /// Repository name
        name: String,
    },

    /// Apply a manifest to an existing repository
    Update {
        /// Desired-state manifest (TOML)
        #[arg(value_name = "MANIFEST")]
        manifest: PathBuf,

        /// Current repository name, if it differs in casing from the manifest
        #[arg(long, value_name = "NAME")]
        id: Option<String>,
    },

    /// Delete a repository
    Delete {
        /// Repository name
        name: String,
    },

    /// Import an existing repository and print its state
    Import {
        /// Repository name
        name: String,
    },
}
