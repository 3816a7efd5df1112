//! CLI module
//!
//! Command-line interface for paging through datasets.
//!
//! # Commands
//!
//! - `entries` - Page through entries across all sub-queries
//! - `ids` - Page through identifier pages
//! - `cursor` - Decode a resume cursor
//! - `datasets` - List built-in datasets
//! - `serve` - Start HTTP server mode

mod commands;
mod runner;
mod server;

pub use commands::{Cli, Commands, OutputFormat};
pub use runner::Runner;
pub use server::{router, serve};
