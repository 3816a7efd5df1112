//! Execution engine module
//!
//! Serves paged reads over a loaded dataset.
//!
//! # Overview
//!
//! The engine module provides:
//! - `read_entries` - one page of entries across the dataset's sub-queries
//! - `read_ids` - one or more identifier pages across the holder chain
//!
//! Each call builds a fresh pager from the request cursor, drains what the
//! request asks for, and reports the cursor to continue from.

mod types;

pub use types::{EntryPage, EntryRequest, IdPages, IdRequest};

use crate::config::Dataset;
use crate::error::Result;
use crate::pager::{EntryPager, IdPager};
use tracing::debug;

/// Read the next page of entries
pub fn read_entries(dataset: &Dataset, request: &EntryRequest) -> Result<EntryPage> {
    let limit = request.limit.unwrap_or(dataset.paging.limit);

    // One extra entry of budget lets has_next probe past the page
    let mut pager = EntryPager::new(
        &dataset.conditions,
        &request.cursor,
        limit.saturating_add(1),
        |condition, state| dataset.store.query(condition, state),
    )?;

    let mut items = Vec::new();
    while (items.len() as u64) < limit && pager.has_next()? {
        items.push(pager.next_entry()?);
    }

    let cursor = if pager.has_next()? {
        Some(pager.cursor()?)
    } else {
        None
    };

    debug!(
        "Read {} entries from '{}' (more: {})",
        items.len(),
        dataset.name,
        cursor.is_some()
    );
    Ok(EntryPage { items, cursor })
}

/// Read identifier pages
pub fn read_ids(dataset: &Dataset, request: &IdRequest) -> Result<IdPages> {
    let page_size = request.page_size.unwrap_or(dataset.paging.page_size);
    let limit = request.limit.unwrap_or(dataset.paging.limit);
    let max_pages = request.pages.unwrap_or(1);

    let chain = dataset
        .store
        .holder_chain(&dataset.conditions, dataset.paging.scan_window);
    let mut pager = IdPager::new(&chain, &request.cursor, page_size, limit)?;

    let mut pages = Vec::new();
    let mut remaining = limit;
    while pages.len() < max_pages && pager.has_next()? {
        let page = pager.next_page()?;
        remaining = remaining.saturating_sub(page.len() as u64);
        pages.push(page);
    }

    // A page buffered by has_next is replayed by the cursor
    let cursor = if pager.has_next()? {
        Some(pager.cursor()?)
    } else {
        None
    };

    debug!(
        "Read {} id pages from '{}' (more: {})",
        pages.len(),
        dataset.name,
        cursor.is_some()
    );
    Ok(IdPages {
        pages,
        cursor,
        remaining,
    })
}
