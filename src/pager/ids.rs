//! Identifier pager
//!
//! Yields whole pages of identifiers drawn from a chain of holders. When a
//! holder comes up short, the page is topped up from the holders after it so
//! that every page but the last is full whenever the data exists.

use super::position::{Position, PAGE_METADATA};
use crate::cursor::PageState;
use crate::error::{Error, Result};
use tracing::{debug, trace, warn};

// ============================================================================
// Holder Contract
// ============================================================================

/// Outcome of a single holder fetch
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HolderFetch<T> {
    /// Identifiers fetched, at most the requested limit. A batch shorter
    /// than the limit means the holder has nothing after it.
    Data {
        /// The identifiers
        batch: Vec<T>,
        /// State to resume right after `batch`
        next: PageState,
    },
    /// The holder made progress without producing identifiers and must be
    /// asked again from `next`
    EmptyContinue {
        /// State to resume from
        next: PageState,
    },
    /// Nothing further from this holder
    Exhausted,
}

impl<T> HolderFetch<T> {
    /// Create a data result
    pub fn data(batch: Vec<T>, next: PageState) -> Self {
        Self::Data { batch, next }
    }
}

/// A paged source of identifiers
///
/// Fetching is a pure function of the paging state: the holder keeps no
/// cursor of its own between calls.
pub trait IdHolder {
    /// Identifier type
    type Id;

    /// Fetch at most `limit` identifiers starting from `state`
    fn fetch(&self, state: &PageState, limit: usize) -> Result<HolderFetch<Self::Id>>;
}

impl<H: IdHolder + ?Sized> IdHolder for Box<H> {
    type Id = H::Id;

    fn fetch(&self, state: &PageState, limit: usize) -> Result<HolderFetch<Self::Id>> {
        (**self).fetch(state, limit)
    }
}

/// Ordered chain of identifier holders
#[derive(Debug, Clone)]
pub struct HolderChain<H> {
    holders: Vec<H>,
    paged: bool,
}

impl<H> HolderChain<H> {
    /// Create a chain that supports paging
    pub fn paged(holders: Vec<H>) -> Self {
        Self {
            holders,
            paged: true,
        }
    }

    /// Create a chain that can only be read in one go
    pub fn unpaged(holders: Vec<H>) -> Self {
        Self {
            holders,
            paged: false,
        }
    }

    /// Whether the chain supports paging
    pub fn is_paged(&self) -> bool {
        self.paged
    }

    /// Number of holders
    pub fn len(&self) -> usize {
        self.holders.len()
    }

    /// Check if the chain has no holders
    pub fn is_empty(&self) -> bool {
        self.holders.is_empty()
    }

    /// The holders in order
    pub fn holders(&self) -> &[H] {
        &self.holders
    }
}

// ============================================================================
// Pager
// ============================================================================

/// A holder index and the state it was left in
#[derive(Debug, Clone, PartialEq, Eq)]
struct Mark {
    index: usize,
    state: PageState,
}

/// A fetched page not yet handed out
struct Buffered<T> {
    ids: Vec<T>,
    /// Where the fetch that produced this page started
    from: Mark,
}

/// Paginates identifier pages across a [`HolderChain`]
pub struct IdPager<'a, H: IdHolder> {
    chain: &'a HolderChain<H>,
    page_size: usize,
    position: Position,
    /// Resume state for the holder at the current offset
    state: PageState,
    /// Last holder fetched from
    touched: Option<Mark>,
    page: Option<Buffered<H::Id>>,
}

impl<'a, H: IdHolder> IdPager<'a, H> {
    /// Create a pager over `chain`
    ///
    /// `page_size` bounds every page; `limit` bounds the total number of
    /// identifiers across all pages.
    pub fn new(
        chain: &'a HolderChain<H>,
        cursor: &str,
        page_size: usize,
        limit: u64,
    ) -> Result<Self> {
        if !chain.is_paged() {
            return Err(Error::UnpagedChain);
        }
        if page_size == 0 {
            return Err(Error::config("page size must be greater than zero"));
        }

        let (position, state) = Position::resume(chain.len(), cursor, limit)?;
        debug!(
            "Id pager over {} holders starting at offset {} (page size {}, limit {})",
            chain.len(),
            position.offset(),
            page_size,
            limit
        );

        Ok(Self {
            chain,
            page_size,
            position,
            state,
            touched: None,
            page: None,
        })
    }

    /// Check whether another page is available, fetching if needed
    ///
    /// A buffered page counts even when it is empty.
    pub fn has_next(&mut self) -> Result<bool> {
        while self.page.is_none() {
            if self.position.is_exhausted() {
                return Ok(false);
            }
            self.fetch()?;
        }
        Ok(true)
    }

    /// Take the next page
    pub fn next_page(&mut self) -> Result<Vec<H::Id>> {
        if !self.has_next()? {
            return Err(Error::NoSuchElement);
        }
        self.page
            .take()
            .map(|page| page.ids)
            .ok_or(Error::NoSuchElement)
    }

    /// Cursor that resumes after the last page handed out
    pub fn cursor(&self) -> Result<String> {
        self.metadata(PAGE_METADATA)
    }

    /// Answer a metadata request; only `"page"` is supported
    pub fn metadata(&self, key: &str) -> Result<String> {
        // A page fetched but not taken yet is replayed on resume
        let mark = match &self.page {
            Some(page) => Some(&page.from),
            None => self.touched.as_ref(),
        };
        Position::metadata(
            key,
            mark.map_or(self.position.offset(), |mark| mark.index),
            mark.map(|mark| &mark.state),
        )
    }

    /// Index of the holder the next fetch starts from
    pub fn offset(&self) -> usize {
        self.position.offset()
    }

    /// Remaining identifier budget
    pub fn remaining(&self) -> u64 {
        self.position.remaining()
    }

    /// Configured page size
    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Fetch one page, compensating short pages from later holders
    ///
    /// Works on copies of the pager state and commits only on success, so a
    /// failing holder leaves the pager exactly as it was.
    fn fetch(&mut self) -> Result<()> {
        let chain = self.chain;
        let mut position = self.position.clone();
        let mut state = self.state.clone();
        let mut touched = self.touched.clone();
        let from = Mark {
            index: position.offset(),
            state: state.clone(),
        };

        let want = position.budget(self.page_size);
        let mut ids = match fetch_from(chain, &position, &mut state, &mut touched, want)? {
            Some(batch) => batch,
            None => {
                trace!("Holder {} exhausted", position.offset());
                position.advance();
                self.position = position;
                self.state = PageState::Start;
                self.touched = touched;
                return Ok(());
            }
        };
        position.consume(ids.len());

        while ids.len() < self.page_size && position.remaining() > 0 {
            if position.is_last() {
                position.advance();
                break;
            }
            position.advance();
            state = PageState::Start;

            let want = position.budget(self.page_size - ids.len());
            debug!(
                "Compensating short page ({} of {}) from holder {}",
                ids.len(),
                self.page_size,
                position.offset()
            );
            if let Some(mut batch) = fetch_from(chain, &position, &mut state, &mut touched, want)? {
                position.consume(batch.len());
                ids.append(&mut batch);
            }
        }

        trace!(
            "Fetched page of {} ids, now at holder {} with {} remaining",
            ids.len(),
            position.offset(),
            position.remaining()
        );
        self.position = position;
        self.state = state;
        self.touched = touched;
        self.page = Some(Buffered { ids, from });
        Ok(())
    }
}

/// Fetch up to `want` ids from the holder at the current offset
///
/// Retries `EmptyContinue` on the same holder. Returns `None` when the holder
/// is exhausted.
fn fetch_from<H: IdHolder>(
    chain: &HolderChain<H>,
    position: &Position,
    state: &mut PageState,
    touched: &mut Option<Mark>,
    want: usize,
) -> Result<Option<Vec<H::Id>>> {
    let index = position.offset();
    let holder = &chain.holders[index];

    loop {
        match holder.fetch(state, want)? {
            HolderFetch::Data { mut batch, next } => {
                if batch.len() > want {
                    warn!(
                        "Holder {} returned {} ids for a limit of {}, truncating",
                        index,
                        batch.len(),
                        want
                    );
                    batch.truncate(want);
                }
                *state = next;
                *touched = Some(Mark {
                    index,
                    state: state.clone(),
                });
                return Ok(Some(batch));
            }
            HolderFetch::EmptyContinue { next } => {
                trace!("Holder {} produced nothing this round, continuing", index);
                *state = next;
                *touched = Some(Mark {
                    index,
                    state: state.clone(),
                });
            }
            HolderFetch::Exhausted => {
                *touched = Some(Mark {
                    index,
                    state: state.clone(),
                });
                return Ok(None);
            }
        }
    }
}

impl<H: IdHolder> Iterator for IdPager<'_, H> {
    type Item = Result<Vec<H::Id>>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.has_next() {
            Ok(true) => Some(self.next_page()),
            Ok(false) => None,
            Err(e) => Some(Err(e)),
        }
    }
}
