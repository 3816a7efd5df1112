//! # pagechain
//!
//! Resumable pagination over an ordered list of data sources.
//!
//! A logical query is often answered by several sub-queries (one per label,
//! index or shard). pagechain walks them in order and hands callers a single
//! opaque cursor that resumes exactly where the previous page stopped.
//!
//! ## Features
//!
//! - **Entry paging**: stream entries across sub-queries, skipping empty ones
//! - **Identifier paging**: fixed-size id pages, filling short pages from later holders
//! - **Opaque cursors**: `<offset>:<token>` wrapped in URL-safe base64
//! - **Datasets**: YAML-defined in-memory stores for the CLI and HTTP server
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use pagechain::{load_dataset, EntryPager, Result};
//!
//! fn main() -> Result<()> {
//!     let dataset = load_dataset("modern")?;
//!
//!     let mut pager = EntryPager::new(&dataset.conditions, "", 2, |condition, state| {
//!         dataset.store.query(condition, state)
//!     })?;
//!     while pager.has_next()? {
//!         println!("{}", pager.next_entry()?.id);
//!     }
//!
//!     // Hand this to the next request to continue
//!     let cursor = pager.cursor()?;
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌───────────────────────────────────────────────────────────┐
//! │              CLI (entries / ids / serve)                  │
//! └─────────────────────────────┬─────────────────────────────┘
//!                               │
//! ┌─────────────────────────────┴─────────────────────────────┐
//! │        Engine: read_entries / read_ids per request        │
//! └─────────────────────────────┬─────────────────────────────┘
//!                               │
//! ┌──────────────┬──────────────┴──────────────┬──────────────┐
//! │    Cursor    │           Pager             │    Memory    │
//! ├──────────────┼─────────────────────────────┼──────────────┤
//! │ encode       │ EntryPager (EntryStream)    │ MemoryStore  │
//! │ decode       │ IdPager (IdHolder chain)    │ Condition    │
//! │ PageState    │ Position bookkeeping        │ holders      │
//! └──────────────┴─────────────────────────────┴──────────────┘
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
// Allow common clippy pedantic lints that aren't critical for this codebase
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_lossless)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::needless_pass_by_value)]
#![allow(clippy::unused_async)]

pub mod cli;
pub mod config;
pub mod cursor;
pub mod engine;
pub mod error;
pub mod memory;
pub mod pager;
pub mod types;

// Re-export commonly used types
pub use config::{load_dataset, load_dataset_from_str, Dataset, DatasetConfig, PagingConfig};
pub use cursor::{PageCursor, PageState};
pub use engine::{read_entries, read_ids, EntryPage, EntryRequest, IdPages, IdRequest};
pub use error::{Error, Result, ResultExt};
pub use memory::{Condition, MemoryStore};
pub use pager::{
    EntryPager, EntryStream, HolderChain, HolderFetch, IdHolder, IdPager, PAGE_METADATA,
};
pub use types::Entry;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
