//! Tests for memory backend

use super::*;
use crate::cursor::PageState;
use crate::error::{Error, Result};
use crate::pager::{EntryPager, EntryStream, HolderFetch, IdHolder, IdPager};
use crate::types::Entry;

fn store() -> MemoryStore {
    MemoryStore::new(vec![
        Entry::new("marko", "person"),
        Entry::new("lop", "software"),
        Entry::new("vadas", "person"),
        Entry::new("josh", "person"),
        Entry::new("ripple", "software"),
        Entry::new("peter", "person"),
    ])
}

fn ids(entries: &[Entry]) -> Vec<&str> {
    entries.iter().map(|e| e.id.as_str()).collect()
}

// ============================================================================
// Condition Tests
// ============================================================================

#[test]
fn test_condition_matching() {
    let marko = Entry::new("marko", "person");

    assert!(Condition::any().matches(&marko));
    assert!(Condition::label("person").matches(&marko));
    assert!(!Condition::label("software").matches(&marko));
    assert!(Condition::pattern("^ma").unwrap().matches(&marko));
    assert!(!Condition::pattern("^ma")
        .unwrap()
        .with_label("software")
        .matches(&marko));
}

#[test]
fn test_condition_invalid_pattern() {
    let err = Condition::pattern("(").unwrap_err();
    assert!(matches!(err, Error::InvalidPattern(_)));
}

// ============================================================================
// Stream Tests
// ============================================================================

#[test]
fn test_stream_scans_matching_entries() {
    let store = store();
    let mut stream = store
        .query(&Condition::label("software"), &PageState::Start)
        .unwrap();

    assert_eq!(stream.next_entry().unwrap().unwrap().id, "lop");
    assert_eq!(stream.page_state(), PageState::from_token("2"));
    assert_eq!(stream.next_entry().unwrap().unwrap().id, "ripple");
    assert!(stream.next_entry().unwrap().is_none());
    assert_eq!(stream.page_state(), PageState::from_token("6"));
}

#[test]
fn test_stream_resumes_from_token() {
    let store = store();
    let mut stream = store
        .query(&Condition::label("person"), &PageState::from_token("3"))
        .unwrap();

    assert_eq!(stream.next_entry().unwrap().unwrap().id, "josh");
}

#[test]
fn test_stream_rejects_bad_tokens() {
    let store = store();
    for token in ["abc", "7"] {
        let err = store
            .query(&Condition::any(), &PageState::from_token(token))
            .unwrap_err();
        assert!(matches!(err, Error::MalformedCursor { .. }), "token {token}");
        assert!(err.is_cursor_error());
    }
}

// ============================================================================
// Holder Tests
// ============================================================================

#[test]
fn test_holder_fetches_bounded_batches() {
    let store = store();
    let holder = store.holder(&Condition::label("person"), None);

    let first = holder.fetch(&PageState::Start, 2).unwrap();
    assert_eq!(
        first,
        HolderFetch::data(
            vec!["marko".to_string(), "vadas".to_string()],
            PageState::from_token("3")
        )
    );

    let second = holder.fetch(&PageState::from_token("3"), 5).unwrap();
    assert_eq!(
        second,
        HolderFetch::data(
            vec!["josh".to_string(), "peter".to_string()],
            PageState::from_token("6")
        )
    );

    assert!(matches!(
        holder.fetch(&PageState::from_token("6"), 5).unwrap(),
        HolderFetch::Exhausted
    ));
}

#[test]
fn test_holder_with_no_matches_is_exhausted() {
    let store = store();
    let holder = store.holder(&Condition::label("edge"), None);
    assert!(matches!(
        holder.fetch(&PageState::Start, 3).unwrap(),
        HolderFetch::Exhausted
    ));
}

#[test]
fn test_holder_scan_window_continues() {
    let store = store();
    let holder = store.holder(&Condition::label("software"), Some(1));

    // "marko" fills the window without a match
    assert_eq!(
        holder.fetch(&PageState::Start, 3).unwrap(),
        HolderFetch::EmptyContinue {
            next: PageState::from_token("1")
        }
    );

    // Once a match is found the scan runs on to fill the batch
    assert_eq!(
        holder.fetch(&PageState::from_token("1"), 3).unwrap(),
        HolderFetch::data(
            vec!["lop".to_string(), "ripple".to_string()],
            PageState::from_token("6")
        )
    );
}

// ============================================================================
// Pager Integration Tests
// ============================================================================

#[test]
fn test_entry_pager_over_store() {
    let store = store();
    let conditions = vec![
        Condition::label("software"),
        Condition::label("edge"),
        Condition::pattern("^(josh|peter)$").unwrap(),
    ];

    let entries: Vec<Entry> = EntryPager::new(&conditions, "", 10, |c, s| store.query(c, s))
        .unwrap()
        .collect::<Result<_>>()
        .unwrap();

    assert_eq!(ids(&entries), vec!["lop", "ripple", "josh", "peter"]);
}

#[test]
fn test_id_pager_over_store() {
    let store = store();
    let conditions = vec![Condition::label("software"), Condition::label("person")];
    let chain = store.holder_chain(&conditions, Some(2));

    let pages: Vec<Vec<String>> = IdPager::new(&chain, "", 3, 100)
        .unwrap()
        .collect::<Result<_>>()
        .unwrap();

    assert_eq!(
        pages,
        vec![
            vec!["lop", "ripple", "marko"],
            vec!["vadas", "josh", "peter"],
        ]
    );
}
