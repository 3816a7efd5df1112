//! Engine types
//!
//! Request and response types for paged reads.

use crate::types::Entry;
use serde::{Deserialize, Serialize};

/// A request for the next page of entries
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EntryRequest {
    /// Cursor from a previous response; empty or absent to start over
    #[serde(default)]
    pub cursor: String,
    /// Maximum entries to return
    #[serde(default)]
    pub limit: Option<u64>,
}

impl EntryRequest {
    /// Create a request
    pub fn new(cursor: impl Into<String>, limit: Option<u64>) -> Self {
        Self {
            cursor: cursor.into(),
            limit,
        }
    }
}

/// One page of entries
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntryPage {
    /// Entries in query order
    pub items: Vec<Entry>,
    /// Cursor for the next page, `None` once the query is exhausted
    pub cursor: Option<String>,
}

/// A request for identifier pages
#[derive(Debug, Clone, Default, Deserialize)]
pub struct IdRequest {
    /// Cursor from a previous response; empty or absent to start over
    #[serde(default)]
    pub cursor: String,
    /// Identifiers per page
    #[serde(default)]
    pub page_size: Option<usize>,
    /// Number of pages to return
    #[serde(default)]
    pub pages: Option<usize>,
    /// Identifier budget left for the whole listing
    #[serde(default)]
    pub limit: Option<u64>,
}

/// Identifier pages with the cursor to continue from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdPages {
    /// Pages in order
    pub pages: Vec<Vec<String>>,
    /// Cursor for the next page, `None` once the listing is exhausted
    pub cursor: Option<String>,
    /// Budget to pass back as `limit` with `cursor`
    pub remaining: u64,
}
