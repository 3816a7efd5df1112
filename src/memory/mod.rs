//! In-memory backend
//!
//! A reference implementation of both pager collaborators over an ordered
//! list of stored entries.
//!
//! # Overview
//!
//! The memory module provides:
//! - `MemoryStore` - ordered entries, scanned by position
//! - `Condition` - a sub-query: label and/or id pattern
//! - `MemoryStream` - lazy entry stream for `EntryPager`
//! - `MemoryHolder` - identifier holder for `IdPager`
//!
//! Resume tokens are scan positions into the store, so a cursor stays valid
//! as long as the store is not reordered.

mod store;

pub use store::{Condition, MemoryHolder, MemoryStore, MemoryStream};

#[cfg(test)]
mod tests;
