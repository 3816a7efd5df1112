//! Cursor module
//!
//! Encodes and decodes the opaque resume cursor handed to callers.
//!
//! # Overview
//!
//! A cursor names a position inside a multi-source result stream: the index
//! of the source (sub-query or identifier holder) currently being read and
//! that source's own resume token. The empty string is reserved for "no
//! cursor, start from the beginning" and is never produced by [`encode`].
//!
//! ```text
//! "3:tok-17"  --base64url-->  "Mzp0b2stMTc"
//!  │ └── inner token (opaque, may contain ':')
//!  └──── source offset
//! ```

mod types;

pub use types::{decode, encode, PageCursor, PageState, MAX_CURSOR_LEN};

#[cfg(test)]
mod tests;
