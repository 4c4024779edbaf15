//! CLI command definitions.

mod commands;

pub use commands::execute;

use clap::{Parser, Subcommand, ValueEnum};

use crate::config::Config;
use crate::storage::WriteFallback;

/// Track holidays in a remote table with an offline cache.
#[derive(Debug, Parser)]
#[command(name = "itinerary")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format.
    #[arg(long, global = true, default_value = "pretty")]
    pub format: OutputFormat,

    /// Suppress non-essential output.
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Keep the cache in memory instead of on disk.
    #[arg(long, global = true)]
    pub ephemeral: bool,

    /// Path to the SQLite cache file.
    #[arg(long, global = true, env = "ITINERARY_CACHE_PATH")]
    pub cache_path: Option<String>,

    /// DynamoDB table holding the holidays.
    #[arg(long, global = true, env = "DYNAMODB_TABLE_NAME")]
    pub table: Option<String>,

    /// What writes do when the remote backend fails: cache or surface.
    #[arg(long, global = true, env = "ITINERARY_WRITE_FALLBACK")]
    pub write_fallback: Option<WriteFallback>,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Overrides environment configuration with the flags, or their
    /// environment variables, that were given.
    pub fn apply_to(&self, config: &mut Config) {
        if let Some(path) = &self.cache_path {
            config.cache_path = path.clone();
        }
        if let Some(table) = &self.table {
            config.dynamodb_table_name = table.clone();
        }
        if let Some(policy) = self.write_fallback {
            config.write_fallback = policy;
        }
    }
}

/// Output format options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Raw JSON output.
    Json,
    /// Human-readable output.
    #[default]
    Pretty,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List every holiday by outbound date.
    List,
    /// Show holidays as countdown cards: current, upcoming, then past.
    Dashboard,
    /// Show one holiday in full.
    Show {
        /// Holiday ID.
        id: String,
    },
    /// Add a holiday from a JSON document.
    Add {
        /// JSON file with the holiday fields, or `-` for stdin.
        #[arg(long, short = 'f')]
        file: String,
    },
    /// Update fields of a holiday from a JSON document.
    Update {
        /// Holiday ID.
        id: String,
        /// JSON file with the fields to change, or `-` for stdin.
        #[arg(long, short = 'f')]
        file: String,
    },
    /// Delete a holiday.
    Delete {
        /// Holiday ID.
        id: String,
    },
}
