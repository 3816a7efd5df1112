//! YAML parser for dataset definitions
//!
//! Parses and validates dataset files. Supports both built-in datasets (by
//! name) and custom YAML files (by path).

use super::builtin;
use super::types::{Dataset, DatasetConfig};
use crate::error::{Error, Result, ResultExt};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

/// Load a dataset from a built-in name or a file path
///
/// # Examples
///
/// ```ignore
/// let dataset = load_dataset("modern")?;
/// let dataset = load_dataset("./graph.yaml")?;
/// ```
pub fn load_dataset(path: impl AsRef<Path>) -> Result<Dataset> {
    let path = path.as_ref();
    let path_str = path.to_string_lossy();

    if !path_str.contains('/')
        && !path_str.contains('\\')
        && !path_str.ends_with(".yaml")
        && !path_str.ends_with(".yml")
    {
        if let Some(yaml) = builtin::get_builtin(&path_str) {
            return load_dataset_from_str(yaml);
        }
    }

    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            Error::config(format!(
                "Dataset '{}' not found. Built-in datasets: {}. Or provide a path to a YAML file.",
                path.display(),
                builtin::list_builtin().join(", ")
            ))
        } else {
            Error::config(format!(
                "Failed to read dataset file '{}': {}",
                path.display(),
                e
            ))
        }
    })?;
    load_dataset_from_str(&content)
}

/// Load a dataset from a YAML string
pub fn load_dataset_from_str(yaml: &str) -> Result<Dataset> {
    let config: DatasetConfig = serde_yaml::from_str(yaml)
        .map_err(|e| Error::config(format!("Failed to parse dataset YAML: {e}")))?;

    validate_dataset(&config)?;
    config
        .build()
        .with_context(|| format!("Dataset '{}' has an invalid query", config.name))
}

/// Validate a dataset definition
fn validate_dataset(config: &DatasetConfig) -> Result<()> {
    if config.name.is_empty() {
        return Err(Error::config("Dataset name cannot be empty"));
    }

    if config.paging.page_size == 0 {
        return Err(Error::config("paging.page_size must be greater than zero"));
    }

    if config.queries.is_empty() {
        return Err(Error::config("Dataset must have at least one query"));
    }

    let mut seen = HashSet::new();
    for entry in &config.entries {
        if entry.id.is_empty() {
            return Err(Error::config("Entry id cannot be empty"));
        }
        if !seen.insert(entry.id.as_str()) {
            return Err(Error::config(format!("Duplicate entry id: {}", entry.id)));
        }
    }

    Ok(())
}
