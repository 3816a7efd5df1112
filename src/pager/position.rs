//! Position bookkeeping shared by every pager
//!
//! Tracks which source is being read, how much of the caller's budget is
//! left, and how an incoming cursor maps onto the source sequence.

use crate::cursor::{self, PageCursor, PageState};
use crate::error::{Error, Result};

/// Metadata key answered by [`Position::metadata`]
pub const PAGE_METADATA: &str = "page";

/// Offset and remaining budget over an ordered sequence of sources
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Position {
    len: usize,
    offset: usize,
    remaining: u64,
}

impl Position {
    /// Start over `len` sources from an incoming cursor string
    ///
    /// Returns the position together with the resume state of the source at
    /// the starting offset. Every later source starts from
    /// [`PageState::Start`]; earlier ones are never read again.
    pub fn resume(len: usize, cursor: &str, limit: u64) -> Result<(Self, PageState)> {
        let Some(PageCursor { offset, state }) = PageCursor::parse_optional(cursor)? else {
            return Ok((Self::fresh(len, limit), PageState::Start));
        };

        if offset >= len {
            return Err(Error::InvalidCursor { offset, len });
        }

        Ok((
            Self {
                len,
                offset,
                remaining: limit,
            },
            state,
        ))
    }

    fn fresh(len: usize, limit: u64) -> Self {
        Self {
            len,
            offset: 0,
            remaining: limit,
        }
    }

    /// Number of sources
    pub fn len(&self) -> usize {
        self.len
    }

    /// Current source index
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Remaining element budget
    pub fn remaining(&self) -> u64 {
        self.remaining
    }

    /// True once the budget is spent or every source has been read
    pub fn is_exhausted(&self) -> bool {
        self.remaining == 0 || self.offset >= self.len
    }

    /// Whether `offset` is the last source
    pub fn is_last(&self) -> bool {
        self.offset + 1 >= self.len
    }

    /// Move to the next source, saturating at `len`
    pub fn advance(&mut self) {
        if self.offset < self.len {
            self.offset += 1;
        }
    }

    /// Charge `count` emitted elements against the budget
    pub fn consume(&mut self, count: usize) {
        self.remaining = self.remaining.saturating_sub(count as u64);
    }

    /// Elements to request next: the budget capped at `cap`
    pub fn budget(&self, cap: usize) -> usize {
        self.remaining.min(cap as u64) as usize
    }

    /// Answer a metadata request for the source at `index`
    pub fn metadata(key: &str, index: usize, state: Option<&PageState>) -> Result<String> {
        if key != PAGE_METADATA {
            return Err(Error::unsupported_metadata(key));
        }
        state
            .map(|state| cursor::encode(index, state))
            .ok_or_else(|| Error::unsupported_metadata(key))
    }
}
