// src/error.rs
//! Error taxonomy for the upload and fetch flows.

use reqwest::StatusCode;
use std::path::PathBuf;
use thiserror::Error;

/// Local validation failures, detected before any request is issued.
/// All of them are recoverable by correcting the input; none of them
/// touch the network. The messages are the ones shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// No resume file was selected.
    #[error("Please select a file to upload")]
    MissingResumeFile,

    /// Resume file has an extension outside the accepted set.
    #[error("Unsupported file type: {0}. Use pdf, doc or docx")]
    UnsupportedResumeFile(String),

    /// Title or company left blank, or no source supplied at all.
    #[error("Please complete all required fields")]
    IncompleteFields,

    /// The chosen source mode has nothing usable in it (blank URL).
    #[error("Please provide either a valid job URL or upload a file")]
    MissingJobSource,
}

/// Anything the client can fail with. Backend and transport failures are
/// deliberately rendered the same way (message only): the service makes no
/// distinction the user could act on, and neither does the original UI.
#[derive(Debug, Error)]
pub enum HubError {
    #[error("{0}")]
    Validation(#[from] ValidationError),

    /// Non-success response; `detail` is the body's detail field or a
    /// per-operation fallback.
    #[error("{detail}")]
    Backend { status: StatusCode, detail: String },

    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("failed to read {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl HubError {
    /// True for errors the user fixes by correcting the form input.
    pub fn is_validation(&self) -> bool {
        matches!(self, HubError::Validation(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_messages_match_the_form_alerts() {
        assert_eq!(
            ValidationError::MissingResumeFile.to_string(),
            "Please select a file to upload"
        );
        assert_eq!(
            ValidationError::IncompleteFields.to_string(),
            "Please complete all required fields"
        );
        assert_eq!(
            ValidationError::MissingJobSource.to_string(),
            "Please provide either a valid job URL or upload a file"
        );
    }

    #[test]
    fn backend_error_displays_detail_only() {
        let err = HubError::Backend {
            status: StatusCode::NOT_FOUND,
            detail: "User not found".to_string(),
        };
        assert_eq!(err.to_string(), "User not found");
        assert!(!err.is_validation());
    }
}
