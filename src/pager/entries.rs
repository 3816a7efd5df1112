//! Entry pager
//!
//! Streams single entries out of an ordered list of sub-queries, resolving
//! each sub-query to a lazy backend stream only when the previous one runs dry.

use super::position::{Position, PAGE_METADATA};
use crate::cursor::PageState;
use crate::error::{Error, Result};
use tracing::{debug, trace};

/// A lazy stream of entries returned by the backend for one sub-query
pub trait EntryStream {
    /// Entry type produced by the stream
    type Entry;

    /// Pull the next entry, or `None` once the stream is drained
    fn next_entry(&mut self) -> Result<Option<Self::Entry>>;

    /// Resume state pointing at the first entry not yet pulled
    fn page_state(&self) -> PageState;
}

impl<S: EntryStream + ?Sized> EntryStream for Box<S> {
    type Entry = S::Entry;

    fn next_entry(&mut self) -> Result<Option<Self::Entry>> {
        (**self).next_entry()
    }

    fn page_state(&self) -> PageState {
        (**self).page_state()
    }
}

/// The stream currently being read
struct Active<S: EntryStream> {
    stream: S,
    /// Entry pulled to answer `has_next`, with the stream state from before it
    pending: Option<(S::Entry, PageState)>,
    /// Stream returned `None`; never pulled from again
    drained: bool,
}

impl<S: EntryStream> Active<S> {
    fn new(stream: S) -> Self {
        Self {
            stream,
            pending: None,
            drained: false,
        }
    }

    /// Resume state for the first entry not yet handed to the caller
    fn resume_state(&self) -> PageState {
        match &self.pending {
            Some((_, before)) => before.clone(),
            None => self.stream.page_state(),
        }
    }
}

/// Paginates entries across an ordered list of sub-queries
///
/// Empty sub-queries are skipped transparently. The pager borrows the
/// sub-query list; each sub-query's paging state is passed to `fetcher`
/// explicitly, so the list itself is never mutated.
pub struct EntryPager<'a, Q, S, F>
where
    S: EntryStream,
{
    queries: &'a [Q],
    fetcher: F,
    position: Position,
    /// Resume state for the sub-query at the current offset
    start: PageState,
    active: Option<Active<S>>,
}

impl<'a, Q, S, F> EntryPager<'a, Q, S, F>
where
    S: EntryStream,
    F: FnMut(&Q, &PageState) -> Result<S>,
{
    /// Create a pager over `queries`
    ///
    /// `cursor` is either empty (start from the first sub-query) or a cursor
    /// previously returned by [`EntryPager::cursor`] over the same list.
    pub fn new(queries: &'a [Q], cursor: &str, limit: u64, fetcher: F) -> Result<Self> {
        let (position, start) = Position::resume(queries.len(), cursor, limit)?;
        debug!(
            "Entry pager over {} sub-queries starting at offset {} (limit {})",
            queries.len(),
            position.offset(),
            limit
        );

        Ok(Self {
            queries,
            fetcher,
            position,
            start,
            active: None,
        })
    }

    /// Check whether another entry is available, fetching if needed
    pub fn has_next(&mut self) -> Result<bool> {
        if self
            .active
            .as_ref()
            .is_some_and(|active| active.pending.is_some())
        {
            return Ok(true);
        }

        if self.position.is_exhausted() {
            return Ok(false);
        }

        loop {
            if self.active.is_none() {
                let query = &self.queries[self.position.offset()];
                let stream = (self.fetcher)(query, &self.start)?;
                trace!("Fetched sub-query {}", self.position.offset());
                self.active = Some(Active::new(stream));
            }

            let Some(active) = self.active.as_mut() else {
                return Ok(false);
            };
            if !active.drained {
                let before = active.stream.page_state();
                if let Some(entry) = active.stream.next_entry()? {
                    active.pending = Some((entry, before));
                    return Ok(true);
                }
                active.drained = true;
            }

            // Keep the last drained stream so the cursor stays in range
            if self.position.is_last() {
                debug!("All {} sub-queries drained", self.position.len());
                return Ok(false);
            }

            // The drained stream stays current until the next fetch succeeds
            let next = self.position.offset() + 1;
            trace!("Sub-query {} drained, moving to {}", next - 1, next);
            let stream = (self.fetcher)(&self.queries[next], &PageState::Start)?;
            trace!("Fetched sub-query {}", next);
            self.position.advance();
            self.start = PageState::Start;
            self.active = Some(Active::new(stream));
        }
    }

    /// Take the next entry
    pub fn next_entry(&mut self) -> Result<S::Entry> {
        if !self.has_next()? {
            return Err(Error::NoSuchElement);
        }

        let (entry, _) = self
            .active
            .as_mut()
            .and_then(|active| active.pending.take())
            .ok_or(Error::NoSuchElement)?;
        self.position.consume(1);
        Ok(entry)
    }

    /// Cursor that resumes right after the last entry handed out
    pub fn cursor(&self) -> Result<String> {
        self.metadata(PAGE_METADATA)
    }

    /// Answer a metadata request; only `"page"` is supported
    pub fn metadata(&self, key: &str) -> Result<String> {
        let state = self.active.as_ref().map(Active::resume_state);
        Position::metadata(key, self.position.offset(), state.as_ref())
    }

    /// Index of the sub-query currently being read
    pub fn offset(&self) -> usize {
        self.position.offset()
    }

    /// Remaining entry budget
    pub fn remaining(&self) -> u64 {
        self.position.remaining()
    }
}

impl<Q, S, F> Iterator for EntryPager<'_, Q, S, F>
where
    S: EntryStream,
    F: FnMut(&Q, &PageState) -> Result<S>,
{
    type Item = Result<S::Entry>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.has_next() {
            Ok(true) => Some(self.next_entry()),
            Ok(false) => None,
            Err(e) => Some(Err(e)),
        }
    }
}
