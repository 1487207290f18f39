//! Submission transport errors

use crate::validation::ErrorMap;
use thiserror::Error;

/// Why a submission did not succeed. `Display` is the text shown to the user.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SubmitError {
    /// The server answered with an `error` message
    #[error("{message}")]
    Rejected {
        status: u16,
        message: String,
        field_errors: ErrorMap,
    },
    /// The server answered with something we could not interpret
    #[error("Something went wrong. Please try again.")]
    Unexpected { status: u16, detail: String },
    /// The request never completed
    #[error("Could not reach the server. Check your connection and try again.")]
    Network(String),
}

impl SubmitError {
    pub fn status(&self) -> Option<u16> {
        match self {
            SubmitError::Rejected { status, .. } | SubmitError::Unexpected { status, .. } => {
                Some(*status)
            }
            SubmitError::Network(_) => None,
        }
    }

    /// Per-field messages returned by the server, if any
    pub fn field_errors(&self) -> Option<&ErrorMap> {
        match self {
            SubmitError::Rejected { field_errors, .. } if !field_errors.is_empty() => {
                Some(field_errors)
            }
            _ => None,
        }
    }
}
