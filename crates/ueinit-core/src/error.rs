//! Unified error handling for the core crate.
//!
//! One root type wraps the domain and application errors so callers get a
//! single surface with rich context and user-actionable suggestions.

use thiserror::Error;

use crate::application::AppError;
use crate::domain::DomainError;

/// Root error type for core operations.
#[derive(Debug, Error, Clone)]
pub enum CoreError {
    /// Business-rule violations (version validation).
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Orchestration failures (preconditions, filesystem, prompt streams).
    #[error(transparent)]
    App(#[from] AppError),
}

impl CoreError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::App(e) => e.suggestions(),
        }
    }

    /// Error category for display styling and log severity.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(e) => e.category(),
            Self::App(e) => e.category(),
        }
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Invalid user input.
    Validation,
    /// A starting-state check failed before any mutation.
    Precondition,
    /// An I/O operation on the filesystem or prompt streams failed.
    Io,
}

/// Convenient result type alias.
pub type CoreResult<T> = Result<T, CoreError>;
