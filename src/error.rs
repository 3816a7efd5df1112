//! Error types for pagechain
//!
//! This module defines the error hierarchy for the whole crate.
//! All public APIs return `Result<T, Error>` where Error is defined here.

use thiserror::Error;

/// The main error type for pagechain
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Cursor Errors
    // ============================================================================
    /// Cursor text that does not decode, or names a position no source produced
    #[error("Malformed cursor '{cursor}': {message}")]
    MalformedCursor {
        /// The offending cursor or inner token
        cursor: String,
        /// What is wrong with it
        message: String,
    },

    /// Cursor offset outside the source list it is applied to
    #[error("Invalid cursor: offset {offset} exceeds the {len} sources of this query")]
    InvalidCursor {
        /// Offset carried by the cursor
        offset: usize,
        /// Number of sources
        len: usize,
    },

    // ============================================================================
    // Pager Errors
    // ============================================================================
    /// Identifier pager built over an unpaged holder chain
    #[error("Identifier holder chain must be paged")]
    UnpagedChain,

    /// Element requested after the pager reported none left
    #[error("No more elements")]
    NoSuchElement,

    /// Metadata key not supported, or no position to report yet
    #[error("Unsupported metadata '{key}'")]
    UnsupportedMetadata {
        /// Requested key
        key: String,
    },

    // ============================================================================
    // Backend Errors
    // ============================================================================
    /// Failure reported by a sub-query or holder
    #[error("Backend error: {message}")]
    Backend {
        /// Error message
        message: String,
    },

    // ============================================================================
    // Configuration Errors
    // ============================================================================
    /// Invalid dataset or request configuration
    #[error("Configuration error: {message}")]
    Config {
        /// Error message
        message: String,
    },

    /// YAML parse failure
    #[error("Failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    /// JSON parse failure
    #[error("Failed to parse JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    /// Invalid regex in a query condition
    #[error("Invalid pattern: {0}")]
    InvalidPattern(#[from] regex::Error),

    // ============================================================================
    // I/O Errors
    // ============================================================================
    /// I/O failure
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // ============================================================================
    // Generic Errors
    // ============================================================================
    /// Any other error
    #[error("{0}")]
    Other(String),

    /// Error from an `anyhow` context
    #[error(transparent)]
    Anyhow(#[from] anyhow::Error),
}

impl Error {
    /// Create a malformed cursor error
    pub fn malformed_cursor(cursor: impl Into<String>, message: impl Into<String>) -> Self {
        Self::MalformedCursor {
            cursor: cursor.into(),
            message: message.into(),
        }
    }

    /// Create an unsupported metadata error
    pub fn unsupported_metadata(key: impl Into<String>) -> Self {
        Self::UnsupportedMetadata { key: key.into() }
    }

    /// Create a backend error
    pub fn backend(message: impl Into<String>) -> Self {
        Self::Backend {
            message: message.into(),
        }
    }

    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Check if this error was caused by a cursor the caller supplied
    pub fn is_cursor_error(&self) -> bool {
        matches!(
            self,
            Error::MalformedCursor { .. } | Error::InvalidCursor { .. }
        )
    }
}

/// Result type alias for pagechain
pub type Result<T> = std::result::Result<T, Error>;

/// Extension trait for adding context to errors
pub trait ResultExt<T> {
    /// Add context to an error
    fn context(self, message: impl Into<String>) -> Result<T>;

    /// Add context with a closure (lazy evaluation)
    fn with_context<F: FnOnce() -> String>(self, f: F) -> Result<T>;
}

impl<T, E: Into<Error>> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, message: impl Into<String>) -> Result<T> {
        self.map_err(|e| {
            let inner = e.into();
            Error::Other(format!("{}: {}", message.into(), inner))
        })
    }

    fn with_context<F: FnOnce() -> String>(self, f: F) -> Result<T> {
        self.map_err(|e| {
            let inner = e.into();
            Error::Other(format!("{}: {}", f(), inner))
        })
    }
}
