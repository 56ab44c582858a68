//! Structured error types for the layout engine.
//!
//! Two variants cover the real failure sources: a rejected configuration
//! and unparseable JSON input. Out-of-range queries and absent
//! supplementary elements are ordinary `None` answers, not errors.

use thiserror::Error;

/// The unified error type returned by all public API functions.
#[derive(Debug, Error)]
pub enum LayoutError {
    /// The grid column count must be at least 1. Rejected at
    /// configuration time, before any pass can run.
    #[error("invalid configuration: column count must be at least 1, got {columns}")]
    InvalidColumnCount { columns: usize },

    /// JSON input failed to parse as a layout request.
    #[error("failed to parse layout request: {source}{hint}")]
    Parse {
        source: serde_json::Error,
        hint: String,
    },
}

impl From<serde_json::Error> for LayoutError {
    fn from(e: serde_json::Error) -> Self {
        let hint = match e.classify() {
            serde_json::error::Category::Syntax => {
                "\n  Hint: check for trailing commas, missing quotes, or unescaped characters."
            }
            serde_json::error::Category::Data => {
                "\n  Hint: the JSON is valid but does not match the request schema. Check field names and types."
            }
            serde_json::error::Category::Eof => {
                "\n  Hint: unexpected end of input. Is the JSON truncated?"
            }
            serde_json::error::Category::Io => "",
        }
        .to_string();
        LayoutError::Parse { source: e, hint }
    }
}
