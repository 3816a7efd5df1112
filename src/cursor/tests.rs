//! Tests for cursor module

use super::*;
use crate::error::Error;
use test_case::test_case;

// ============================================================================
// PageState Tests
// ============================================================================

#[test]
fn test_page_state_from_token() {
    assert_eq!(PageState::from_token(""), PageState::Start);
    assert_eq!(
        PageState::from_token("tok"),
        PageState::At("tok".to_string())
    );
}

#[test]
fn test_page_state_token() {
    assert_eq!(PageState::Start.token(), "");
    assert_eq!(PageState::At("abc".to_string()).token(), "abc");
    assert!(PageState::Start.is_start());
    assert!(!PageState::At("abc".to_string()).is_start());
}

// ============================================================================
// Encode Tests
// ============================================================================

#[test]
fn test_encode_known_values() {
    assert_eq!(encode(3, &PageState::from_token("tok-17")), "Mzp0b2stMTc");
    assert_eq!(encode(0, &PageState::Start), "MDo");
}

#[test]
fn test_encode_is_never_empty() {
    assert!(!encode(0, &PageState::Start).is_empty());
    assert!(!PageCursor::default().encode().is_empty());
}

// ============================================================================
// Round Trip Tests
// ============================================================================

#[test_case(0, "" ; "start of first source")]
#[test_case(0, "tok" ; "plain token")]
#[test_case(12, "a:b:c" ; "token containing separator")]
#[test_case(7, "ключ/値 ✓" ; "non ascii token")]
#[test_case(usize::MAX, "end" ; "max offset")]
fn test_round_trip(offset: usize, token: &str) {
    let state = PageState::from_token(token);
    let cursor = decode(&encode(offset, &state)).unwrap();
    assert_eq!(cursor.offset, offset);
    assert_eq!(cursor.state, state);
    assert_eq!(cursor.state.token(), token);
}

#[test]
fn test_display_and_from_str() {
    let cursor = PageCursor::new(4, PageState::from_token("row-9"));
    let text = cursor.to_string();
    let parsed: PageCursor = text.parse().unwrap();
    assert_eq!(parsed, cursor);
}

// ============================================================================
// Decode Error Tests
// ============================================================================

#[test_case("" ; "empty")]
#[test_case("!!!" ; "not base64")]
#[test_case("MDo=" ; "padded")]
#[test_case("eA" ; "missing separator")]
#[test_case("YWJjOg" ; "non numeric offset")]
#[test_case("OnRvaw" ; "empty offset")]
#[test_case("KzE6eA" ; "leading plus")]
#[test_case("MDE6eA" ; "leading zero")]
#[test_case("__4" ; "invalid utf8")]
fn test_decode_rejects_malformed(cursor: &str) {
    let err = decode(cursor).unwrap_err();
    assert!(
        matches!(err, Error::MalformedCursor { .. }),
        "unexpected error: {err}"
    );
    assert!(err.is_cursor_error());
}

#[test]
fn test_decode_enforces_max_length() {
    let long = "A".repeat(MAX_CURSOR_LEN + 1);
    let err = decode(&long).unwrap_err();
    assert!(err.to_string().contains("exceeds max length"));
}

#[test]
fn test_parse_optional() {
    assert!(PageCursor::parse_optional("").unwrap().is_none());

    let cursor = PageCursor::parse_optional("Mzp0b2stMTc").unwrap().unwrap();
    assert_eq!(cursor.offset, 3);
    assert_eq!(cursor.state.token(), "tok-17");

    assert!(PageCursor::parse_optional("eA").is_err());
}

// ============================================================================
// Serde Tests
// ============================================================================

#[test]
fn test_cursor_serializes_as_string() {
    let cursor = PageCursor::new(3, PageState::from_token("tok-17"));
    let json = serde_json::to_string(&cursor).unwrap();
    assert_eq!(json, "\"Mzp0b2stMTc\"");

    let restored: PageCursor = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, cursor);
}

#[test]
fn test_cursor_deserialize_rejects_malformed() {
    let result: std::result::Result<PageCursor, _> = serde_json::from_str("\"eA\"");
    assert!(result.is_err());
}
