//! Memory store, conditions, streams and holders

use crate::cursor::PageState;
use crate::error::{Error, Result};
use crate::pager::{EntryStream, HolderChain, HolderFetch, IdHolder};
use crate::types::Entry;
use regex::Regex;

// ============================================================================
// Condition
// ============================================================================

/// A sub-query over the store: entries matching every set criterion
#[derive(Debug, Clone, Default)]
pub struct Condition {
    /// Required entry label
    pub label: Option<String>,
    /// Pattern the entry id must match
    pub pattern: Option<Regex>,
}

impl Condition {
    /// Match every entry
    pub fn any() -> Self {
        Self::default()
    }

    /// Match entries with the given label
    pub fn label(label: impl Into<String>) -> Self {
        Self {
            label: Some(label.into()),
            pattern: None,
        }
    }

    /// Match entries whose id matches `pattern`
    pub fn pattern(pattern: &str) -> Result<Self> {
        Ok(Self {
            label: None,
            pattern: Some(Regex::new(pattern)?),
        })
    }

    /// Also require the given label
    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Check an entry against this condition
    pub fn matches(&self, entry: &Entry) -> bool {
        self.label.as_deref().map_or(true, |label| entry.label == label)
            && self
                .pattern
                .as_ref()
                .map_or(true, |pattern| pattern.is_match(&entry.id))
    }
}

// ============================================================================
// Store
// ============================================================================

/// Ordered in-memory entry store
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: Vec<Entry>,
}

impl MemoryStore {
    /// Create a store from entries, kept in the given order
    pub fn new(entries: Vec<Entry>) -> Self {
        Self { entries }
    }

    /// Number of stored entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the store is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All entries in scan order
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Open a lazy stream of entries matching `condition`, resuming at `state`
    pub fn query(&self, condition: &Condition, state: &PageState) -> Result<MemoryStream<'_>> {
        Ok(MemoryStream {
            entries: &self.entries,
            condition: condition.clone(),
            pos: scan_position(state, self.entries.len())?,
        })
    }

    /// Create an identifier holder for `condition`
    ///
    /// With a `scan_window`, a fetch that inspects that many entries without
    /// a match returns `EmptyContinue` instead of scanning on.
    pub fn holder(&self, condition: &Condition, scan_window: Option<usize>) -> MemoryHolder<'_> {
        MemoryHolder {
            entries: &self.entries,
            condition: condition.clone(),
            scan_window: scan_window.filter(|window| *window > 0),
        }
    }

    /// Build a paged holder chain, one holder per condition
    pub fn holder_chain(
        &self,
        conditions: &[Condition],
        scan_window: Option<usize>,
    ) -> HolderChain<MemoryHolder<'_>> {
        HolderChain::paged(
            conditions
                .iter()
                .map(|condition| self.holder(condition, scan_window))
                .collect(),
        )
    }
}

/// Parse a resume token as a scan position
///
/// Tokens come back from callers inside cursors, so a token this store could
/// not have produced is a malformed cursor.
fn scan_position(state: &PageState, len: usize) -> Result<usize> {
    let PageState::At(token) = state else {
        return Ok(0);
    };
    match token.parse::<usize>() {
        Ok(pos) if pos <= len => Ok(pos),
        Ok(pos) => Err(Error::malformed_cursor(
            token.as_str(),
            format!("scan position {pos} is beyond the {len} stored entries"),
        )),
        Err(_) => Err(Error::malformed_cursor(
            token.as_str(),
            "scan position is not a number",
        )),
    }
}

// ============================================================================
// Stream
// ============================================================================

/// Lazy scan over the store for one condition
#[derive(Debug)]
pub struct MemoryStream<'a> {
    entries: &'a [Entry],
    condition: Condition,
    pos: usize,
}

impl EntryStream for MemoryStream<'_> {
    type Entry = Entry;

    fn next_entry(&mut self) -> Result<Option<Entry>> {
        while let Some(entry) = self.entries.get(self.pos) {
            self.pos += 1;
            if self.condition.matches(entry) {
                return Ok(Some(entry.clone()));
            }
        }
        Ok(None)
    }

    fn page_state(&self) -> PageState {
        PageState::At(self.pos.to_string())
    }
}

// ============================================================================
// Holder
// ============================================================================

/// Identifier holder scanning the store for one condition
#[derive(Debug, Clone)]
pub struct MemoryHolder<'a> {
    entries: &'a [Entry],
    condition: Condition,
    scan_window: Option<usize>,
}

impl IdHolder for MemoryHolder<'_> {
    type Id = String;

    fn fetch(&self, state: &PageState, limit: usize) -> Result<HolderFetch<String>> {
        let mut pos = scan_position(state, self.entries.len())?;
        if pos >= self.entries.len() {
            return Ok(HolderFetch::Exhausted);
        }

        let mut batch = Vec::new();
        let mut scanned = 0;
        while let Some(entry) = self.entries.get(pos) {
            if batch.len() >= limit {
                break;
            }
            if batch.is_empty() && self.scan_window == Some(scanned) {
                return Ok(HolderFetch::EmptyContinue {
                    next: PageState::At(pos.to_string()),
                });
            }
            if self.condition.matches(entry) {
                batch.push(entry.id.clone());
            }
            pos += 1;
            scanned += 1;
        }

        if batch.is_empty() {
            return Ok(HolderFetch::Exhausted);
        }
        Ok(HolderFetch::data(batch, PageState::At(pos.to_string())))
    }
}
