//! Built-in dataset definitions embedded in the binary
//!
//! Lets users pass `--dataset modern` instead of a file path.

use std::collections::HashMap;
use std::sync::LazyLock;

/// Built-in dataset YAML definitions
pub static BUILTIN_DATASETS: LazyLock<HashMap<&'static str, &'static str>> =
    LazyLock::new(|| {
        let mut m = HashMap::new();
        m.insert("modern", include_str!("../../datasets/modern.yaml"));
        m
    });

/// Get a built-in dataset YAML by name
pub fn get_builtin(name: &str) -> Option<&'static str> {
    BUILTIN_DATASETS.get(name).copied()
}

/// List built-in dataset names, sorted
pub fn list_builtin() -> Vec<&'static str> {
    let mut names: Vec<_> = BUILTIN_DATASETS.keys().copied().collect();
    names.sort_unstable();
    names
}
