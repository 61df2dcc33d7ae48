//! Domain-level errors.

use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors produced by the pure domain layer.
///
/// Rejection of a malformed version identifier is a normal outcome of
/// resolution, not a fault; the caller decides whether it is fatal (a
/// command-line argument) or recoverable (an interactive retry).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The input does not match the accepted `5.N` version form.
    #[error("unsupported engine version '{input}'")]
    UnsupportedVersion { input: String },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::UnsupportedVersion { input } => vec![
                format!("'{input}' does not match the 5.N version form"),
                "Only major version 5 is supported, e.g. 5.0 or 5.4".into(),
                "Patch components and suffixes are not accepted (5.2.1, 5.x)".into(),
            ],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::UnsupportedVersion { .. } => ErrorCategory::Validation,
        }
    }
}
