//! Dataset configuration types
//!
//! These types are deserialized from dataset YAML files.

use crate::error::Result;
use crate::memory::{Condition, MemoryStore};
use crate::types::Entry;
use serde::{Deserialize, Serialize};

// ============================================================================
// Top-Level Dataset Config
// ============================================================================

/// Complete dataset definition loaded from YAML
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasetConfig {
    /// Dataset name
    #[serde(default = "default_name")]
    pub name: String,

    /// Paging defaults
    #[serde(default)]
    pub paging: PagingConfig,

    /// Stored entries, in scan order
    #[serde(default)]
    pub entries: Vec<Entry>,

    /// Ordered sub-queries making up the logical query
    #[serde(default)]
    pub queries: Vec<QueryConfig>,
}

fn default_name() -> String {
    "dataset".to_string()
}

impl DatasetConfig {
    /// Build the store and compiled conditions for this dataset
    pub fn build(&self) -> Result<Dataset> {
        let conditions = self
            .queries
            .iter()
            .map(QueryConfig::to_condition)
            .collect::<Result<Vec<_>>>()?;

        Ok(Dataset {
            name: self.name.clone(),
            paging: self.paging.clone(),
            store: MemoryStore::new(self.entries.clone()),
            conditions,
        })
    }
}

// ============================================================================
// Paging
// ============================================================================

/// Paging defaults applied when a request does not specify them
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PagingConfig {
    /// Identifiers per page
    #[serde(default = "default_page_size")]
    pub page_size: usize,

    /// Total results per request
    #[serde(default = "default_limit")]
    pub limit: u64,

    /// Entries a holder may scan without a match before yielding
    #[serde(default)]
    pub scan_window: Option<usize>,
}

fn default_page_size() -> usize {
    100
}

fn default_limit() -> u64 {
    1000
}

impl Default for PagingConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
            limit: default_limit(),
            scan_window: None,
        }
    }
}

// ============================================================================
// Queries
// ============================================================================

/// One sub-query definition
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct QueryConfig {
    /// Required label
    #[serde(default)]
    pub label: Option<String>,

    /// Regex the entry id must match
    #[serde(default)]
    pub pattern: Option<String>,
}

impl QueryConfig {
    /// Compile into a store condition
    pub fn to_condition(&self) -> Result<Condition> {
        let mut condition = match &self.pattern {
            Some(pattern) => Condition::pattern(pattern)?,
            None => Condition::any(),
        };
        if let Some(label) = &self.label {
            condition = condition.with_label(label.clone());
        }
        Ok(condition)
    }
}

// ============================================================================
// Built Dataset
// ============================================================================

/// A loaded dataset ready to be paged
#[derive(Debug, Clone)]
pub struct Dataset {
    /// Dataset name
    pub name: String,
    /// Paging defaults
    pub paging: PagingConfig,
    /// Entry store
    pub store: MemoryStore,
    /// Compiled sub-queries, in order
    pub conditions: Vec<Condition>,
}
