//! CLI commands and argument parsing

use clap::{Parser, Subcommand};

/// Resumable multi-source pagination CLI
#[derive(Parser, Debug)]
#[command(name = "pagechain")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Dataset: built-in name or YAML file
    #[arg(short, long, global = true, default_value = "modern")]
    pub dataset: String,

    /// Output format
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Command to run
    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Page through entries across all sub-queries
    Entries {
        /// Resume cursor from a previous run
        #[arg(long, default_value = "")]
        cursor: String,

        /// Maximum entries to print (defaults to the dataset limit)
        #[arg(long)]
        limit: Option<u64>,
    },

    /// Page through identifiers, filling short pages from later holders
    Ids {
        /// Resume cursor from a previous run
        #[arg(long, default_value = "")]
        cursor: String,

        /// Identifier budget for the whole listing
        #[arg(long)]
        limit: Option<u64>,

        /// Identifiers per page
        #[arg(long)]
        page_size: Option<usize>,

        /// Number of pages to print
        #[arg(long, default_value = "1")]
        pages: usize,
    },

    /// Decode a cursor
    Cursor {
        /// Cursor to decode
        cursor: String,
    },

    /// List built-in datasets
    Datasets,

    /// Start HTTP server mode
    Serve {
        /// Port to listen on
        #[arg(short, long, default_value = "8080")]
        port: u16,
    },
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output (one message per line)
    Json,
    /// Human-readable output
    Pretty,
}
