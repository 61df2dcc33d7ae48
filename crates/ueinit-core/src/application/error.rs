//! Application layer errors.
//!
//! These represent failures in orchestration, not business logic.
//! Version-validation failures are `DomainError` from `crate::domain`.

use std::path::PathBuf;

use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur while orchestrating selection or scaffolding.
#[derive(Debug, Error, Clone)]
pub enum AppError {
    /// No `.uproject` descriptor in the project directory.
    #[error("no .uproject file found in {}", .dir.display())]
    MissingDescriptor { dir: PathBuf },

    /// The output tree already exists; scaffolding is all-or-nothing.
    #[error("'{}' already exists", .path.display())]
    SourceDirExists { path: PathBuf },

    /// A filesystem operation failed.
    #[error("filesystem error at {}: {}", .path.display(), .reason)]
    Filesystem { path: PathBuf, reason: String },

    /// The interactive input stream closed before a version was chosen.
    #[error("input stream closed before a version was selected")]
    PromptClosed,

    /// Reading from or writing to the interactive streams failed.
    #[error("prompt I/O failed: {reason}")]
    PromptIo { reason: String },
}

impl AppError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::MissingDescriptor { dir } => vec![
                format!("No project descriptor in {}", dir.display()),
                "Run ueinit from the directory containing your .uproject file".into(),
            ],
            Self::SourceDirExists { path } => vec![
                format!("The directory '{}' already exists", path.display()),
                "This project already has C++ sources; nothing was changed".into(),
                "Remove or rename the existing directory to scaffold again".into(),
            ],
            Self::Filesystem { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
                "Check available disk space".into(),
            ],
            Self::PromptClosed | Self::PromptIo { .. } => vec![
                "The interactive prompt could not complete".into(),
                "Pass the version as an argument instead, e.g. ueinit 5.4".into(),
            ],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::MissingDescriptor { .. } | Self::SourceDirExists { .. } => {
                ErrorCategory::Precondition
            }
            Self::Filesystem { .. } | Self::PromptClosed | Self::PromptIo { .. } => {
                ErrorCategory::Io
            }
        }
    }
}
