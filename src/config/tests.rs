//! Tests for dataset config module

use super::*;
use crate::error::Error;
use std::io::Write;

// ============================================================================
// Basic Loading Tests
// ============================================================================

#[test]
fn test_load_minimal_dataset() {
    let yaml = r#"
name: tiny
entries:
  - id: a
    label: person
queries:
  - label: person
"#;

    let dataset = load_dataset_from_str(yaml).unwrap();
    assert_eq!(dataset.name, "tiny");
    assert_eq!(dataset.store.len(), 1);
    assert_eq!(dataset.conditions.len(), 1);
    assert_eq!(dataset.paging, PagingConfig::default());
}

#[test]
fn test_load_dataset_paging_defaults() {
    let yaml = r#"
paging:
  page_size: 5
queries:
  - {}
"#;

    let dataset = load_dataset_from_str(yaml).unwrap();
    assert_eq!(dataset.name, "dataset");
    assert_eq!(dataset.paging.page_size, 5);
    assert_eq!(dataset.paging.limit, 1000);
    assert!(dataset.paging.scan_window.is_none());
}

#[test]
fn test_query_config_to_condition() {
    let query = QueryConfig {
        label: Some("person".to_string()),
        pattern: Some("^m".to_string()),
    };
    let condition = query.to_condition().unwrap();
    assert_eq!(condition.label.as_deref(), Some("person"));
    assert!(condition.pattern.is_some());
}

// ============================================================================
// Validation Tests
// ============================================================================

#[test]
fn test_rejects_missing_queries() {
    let err = load_dataset_from_str("name: empty\n").unwrap_err();
    assert!(err.to_string().contains("at least one query"));
}

#[test]
fn test_rejects_zero_page_size() {
    let yaml = r#"
paging:
  page_size: 0
queries:
  - label: person
"#;
    let err = load_dataset_from_str(yaml).unwrap_err();
    assert!(matches!(err, Error::Config { .. }));
}

#[test]
fn test_rejects_duplicate_entry_ids() {
    let yaml = r#"
entries:
  - id: a
    label: person
  - id: a
    label: software
queries:
  - label: person
"#;
    let err = load_dataset_from_str(yaml).unwrap_err();
    assert!(err.to_string().contains("Duplicate entry id: a"));
}

#[test]
fn test_rejects_invalid_pattern() {
    let yaml = r#"
name: broken
queries:
  - pattern: "("
"#;
    let err = load_dataset_from_str(yaml).unwrap_err();
    assert!(err
        .to_string()
        .contains("Dataset 'broken' has an invalid query"));
}

#[test]
fn test_rejects_invalid_yaml() {
    let err = load_dataset_from_str("queries: [").unwrap_err();
    assert!(err.to_string().contains("Failed to parse dataset YAML"));
}

// ============================================================================
// File and Built-in Tests
// ============================================================================

#[test]
fn test_load_builtin_modern() {
    let dataset = load_dataset("modern").unwrap();
    assert_eq!(dataset.name, "modern");
    assert_eq!(dataset.store.len(), 6);
    assert_eq!(dataset.conditions.len(), 2);
    assert_eq!(dataset.paging.page_size, 2);
    assert_eq!(list_builtin(), vec!["modern"]);
    assert!(get_builtin("missing").is_none());
}

#[test]
fn test_load_dataset_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("graph.yaml");
    let mut file = std::fs::File::create(&path).unwrap();
    writeln!(
        file,
        "name: file\nentries:\n  - id: x\n    label: software\nqueries:\n  - label: software"
    )
    .unwrap();

    let dataset = load_dataset(&path).unwrap();
    assert_eq!(dataset.name, "file");
    assert_eq!(dataset.store.entries()[0].id, "x");
}

#[test]
fn test_load_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = load_dataset(dir.path().join("nope.yaml")).unwrap_err();
    assert!(err.to_string().contains("Built-in datasets: modern"));
}
