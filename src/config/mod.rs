//! Dataset configuration module
//!
//! Load datasets (entries, ordered sub-queries, paging defaults) from YAML.
//!
//! # Overview
//!
//! The config module provides:
//! - `DatasetConfig` - declarative dataset definition
//! - `Dataset` - a loaded store plus compiled sub-queries
//! - YAML parsing with validation, and built-in datasets by name

mod builtin;
mod parser;
mod types;

pub use builtin::{get_builtin, list_builtin};
pub use parser::{load_dataset, load_dataset_from_str};
pub use types::{Dataset, DatasetConfig, PagingConfig, QueryConfig};

#[cfg(test)]
mod tests;
