//! Pager module
//!
//! Resumable pagination over an ordered sequence of independent sources.
//!
//! # Overview
//!
//! A single logical query is often answered by several backend sub-queries
//! read one after another. The pagers hide those boundaries from the caller:
//!
//! - `EntryPager` - yields entries one at a time, skipping empty sub-queries
//! - `IdPager` - yields pages of identifiers, topping up short pages from
//!   the following holders
//!
//! Both share the same bookkeeping (`Position`): a source offset, a
//! remaining budget, and a cursor that encodes the offset together with the
//! current source's own resume state. A pager is built per request and
//! dropped afterwards; only its cursor survives.

mod entries;
mod ids;
mod position;

pub use entries::{EntryPager, EntryStream};
pub use ids::{HolderChain, HolderFetch, IdHolder, IdPager};
pub use position::{Position, PAGE_METADATA};
