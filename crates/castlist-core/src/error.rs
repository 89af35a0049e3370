//! Shared error taxonomy for castlist operations.
//!
//! Every stage surfaces failures through this enum so that callers
//! (the CLI, or any other presentation layer) can map each kind to a
//! distinct, actionable message. Nothing in the workspace retries or
//! swallows an error; each one carries enough context (column number,
//! path, underlying cause) to act on.

use thiserror::Error;

/// Failures produced by extraction, aggregation, and report writing
#[derive(Error, Debug)]
pub enum Error {
    /// Caller contract violation detected before any I/O
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Source document missing, unreadable, or structurally malformed
    #[error("failed to read document {path}: {reason}")]
    DocumentRead { path: String, reason: String },

    /// Structurally valid document, but no usable value at the target
    /// column in any table. `column` is the 1-based human-facing number.
    #[error(
        "no characters found in column #{column} in any table; \
         check the column index and document structure"
    )]
    NoCharactersFound { column: usize },

    /// Destination path could not be written
    #[error("failed to write report to {path}: {reason}")]
    ReportWrite { path: String, reason: String },
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_characters_message_uses_human_column_number() {
        let err = Error::NoCharactersFound { column: 2 };
        let msg = err.to_string();
        assert!(msg.contains("column #2"));
        assert!(msg.contains("check the column index"));
    }

    #[test]
    fn document_read_carries_path_and_cause() {
        let err = Error::DocumentRead {
            path: "missing.docx".to_string(),
            reason: "No such file or directory".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("missing.docx"));
        assert!(msg.contains("No such file"));
    }
}
