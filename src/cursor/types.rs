//! Cursor types and codec
//!
//! Defines the per-source paging state and the outer cursor that wraps it.

use crate::error::{Error, Result};
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine as _;
use serde::de::{self, Deserializer};
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Upper bound on the encoded length accepted by [`decode`]
pub const MAX_CURSOR_LEN: usize = 8 * 1024;

const OFFSET_SEPARATOR: char = ':';

// ============================================================================
// Page State
// ============================================================================

/// Resume position within a single source
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum PageState {
    /// Unpaged: read the source from the beginning of its own result set
    #[default]
    Start,
    /// Resume from a backend-specific token
    At(String),
}

impl PageState {
    /// Create a resume state from a token, treating the empty token as `Start`
    pub fn from_token(token: impl Into<String>) -> Self {
        let token = token.into();
        if token.is_empty() {
            Self::Start
        } else {
            Self::At(token)
        }
    }

    /// The inner token, empty for `Start`
    pub fn token(&self) -> &str {
        match self {
            Self::Start => "",
            Self::At(token) => token,
        }
    }

    /// Check if this is the unpaged state
    pub fn is_start(&self) -> bool {
        matches!(self, Self::Start)
    }
}

// ============================================================================
// Page Cursor
// ============================================================================

/// Outer cursor: source offset plus that source's resume state
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct PageCursor {
    /// Index into the ordered source sequence
    pub offset: usize,
    /// Resume state of the source at `offset`
    pub state: PageState,
}

impl PageCursor {
    /// Create a new cursor
    pub fn new(offset: usize, state: PageState) -> Self {
        Self { offset, state }
    }

    /// Encode to the wire string
    pub fn encode(&self) -> String {
        encode(self.offset, &self.state)
    }

    /// Decode a cursor, mapping the empty "no cursor" sentinel to `None`
    pub fn parse_optional(cursor: &str) -> Result<Option<Self>> {
        if cursor.is_empty() {
            return Ok(None);
        }
        decode(cursor).map(Some)
    }
}

impl fmt::Display for PageCursor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.encode())
    }
}

impl FromStr for PageCursor {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        decode(s)
    }
}

impl Serialize for PageCursor {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.encode())
    }
}

impl<'de> Deserialize<'de> for PageCursor {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        decode(&raw).map_err(de::Error::custom)
    }
}

// ============================================================================
// Codec
// ============================================================================

/// Encode a source offset and its resume state into a cursor string
///
/// The result is never empty.
pub fn encode(offset: usize, state: &PageState) -> String {
    let raw = format!("{offset}{OFFSET_SEPARATOR}{}", state.token());
    URL_SAFE_NO_PAD.encode(raw.as_bytes())
}

/// Decode a cursor string produced by [`encode`]
///
/// The empty string is not a cursor; callers check for it first.
pub fn decode(cursor: &str) -> Result<PageCursor> {
    if cursor.is_empty() {
        return Err(Error::malformed_cursor(cursor, "cursor is empty"));
    }

    if cursor.len() > MAX_CURSOR_LEN {
        return Err(Error::malformed_cursor(
            truncate(cursor),
            format!(
                "cursor exceeds max length: {} chars (max {MAX_CURSOR_LEN})",
                cursor.len()
            ),
        ));
    }

    let bytes = URL_SAFE_NO_PAD
        .decode(cursor)
        .map_err(|e| Error::malformed_cursor(cursor, format!("invalid encoding: {e}")))?;
    let raw = String::from_utf8(bytes)
        .map_err(|_| Error::malformed_cursor(cursor, "cursor is not valid UTF-8"))?;

    let (offset, token) = raw
        .split_once(OFFSET_SEPARATOR)
        .ok_or_else(|| Error::malformed_cursor(cursor, "missing offset separator"))?;

    // Digits only: `usize::from_str` would also take a leading '+'
    if offset.is_empty() || !offset.bytes().all(|b| b.is_ascii_digit()) {
        return Err(Error::malformed_cursor(
            cursor,
            format!("offset '{offset}' is not a non-negative integer"),
        ));
    }
    if offset.len() > 1 && offset.starts_with('0') {
        return Err(Error::malformed_cursor(
            cursor,
            format!("offset '{offset}' has leading zeros"),
        ));
    }
    let offset = offset
        .parse::<usize>()
        .map_err(|e| Error::malformed_cursor(cursor, format!("offset out of range: {e}")))?;

    Ok(PageCursor::new(offset, PageState::from_token(token)))
}

fn truncate(cursor: &str) -> String {
    cursor.chars().take(32).collect::<String>() + "..."
}
