//! Error types for fearstudy-survey
//!
//! Fatal pipeline failures (unreadable source, malformed rows, labels with
//! no subjects) and the recoverable selection errors raised by user input.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the survey pipeline
#[derive(Error, Debug)]
pub enum SurveyError {
    /// Dataset source could not be opened or read
    #[error("Cannot read dataset {}: {}", .path.display(), .source)]
    SourceUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Data row with the wrong field count or a non-numeric numeric field
    #[error("Malformed record at row {row}: {reason}")]
    MalformedRecord { row: usize, reason: String },

    /// Filter selection outside the catalog
    #[error("Selection {position} is out of range (catalog has {len} fears)")]
    SelectionOutOfRange { position: usize, len: usize },

    /// Selection token that is not an index at all
    #[error("Invalid selection: '{0}'")]
    InvalidSelection(String),

    /// Catalog label with no matching subjects
    #[error("No subjects match fear '{0}'")]
    NoMatchingSubjects(String),

    /// Interaction input ended while a prompt was unanswered
    #[error("Input closed before a valid answer was given")]
    InputClosed,

    /// Terminal or file I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Report serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl SurveyError {
    /// True for errors caused by user input that warrant a re-prompt
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            SurveyError::SelectionOutOfRange { .. } | SurveyError::InvalidSelection(_)
        )
    }
}

/// Convenience Result type using SurveyError
pub type Result<T> = std::result::Result<T, SurveyError>;
