//! Error handling for the ueinit binary.
//!
//! Structured errors with user-friendly messages, actionable suggestions,
//! and exit-code mapping.  The tool's external contract is binary: exit 0
//! on success, exit 1 on any failure (malformed version argument, missing
//! descriptor, pre-existing output, I/O fault).  Categories still exist
//! internally; they pick the log severity and the suggestion text.

use std::error::Error;

use owo_colors::OwoColorize;
use thiserror::Error;

use ueinit_core::domain::DomainError;
use ueinit_core::error::{CoreError, ErrorCategory};

/// Result type alias for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

/// CLI error types.
#[derive(Debug, Error)]
pub enum CliError {
    /// An error propagated from `ueinit-core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// An I/O operation at the CLI layer failed (terminal writes, cwd).
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        CliError::Io {
            message: err.to_string(),
            source: err,
        }
    }
}

impl CliError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            // A rejected command-line argument deserves CLI-specific advice
            // on top of what the core knows.
            Self::Core(CoreError::Domain(DomainError::UnsupportedVersion { input })) => vec![
                format!("'{input}' does not match the 5.N version form"),
                "Only major version 5 is supported, e.g. 5.0 or 5.4".into(),
                "Pass a version like: ueinit 5.3".into(),
                "Or run ueinit with no arguments to pick from the menu".into(),
            ],
            Self::Core(core) => core.suggestions(),
            Self::Io { message, .. } => vec![
                format!("I/O operation failed: {message}"),
                "Check file permissions and available disk space".into(),
            ],
        }
    }

    /// Exit code to pass to the OS.  Always 1: the scaffold either
    /// completed or it did not.  (Argument-parse failures are rendered by
    /// clap itself with its conventional exit 2 before this type is ever
    /// constructed.)
    pub fn exit_code(&self) -> u8 {
        1
    }

    /// Log the error at a severity matching its category.
    pub fn log(&self) {
        match self.category() {
            Some(ErrorCategory::Validation) => tracing::warn!("invalid input: {self}"),
            Some(ErrorCategory::Precondition) => tracing::warn!("precondition failed: {self}"),
            Some(ErrorCategory::Io) | None => tracing::error!("{self}"),
        }

        if let Some(source) = self.source() {
            tracing::debug!("caused by: {source}");
        }
    }

    fn category(&self) -> Option<ErrorCategory> {
        match self {
            Self::Core(core) => Some(core.category()),
            Self::Io { .. } => None,
        }
    }

    /// Format the error for display with colors and suggestions.
    pub fn format_colored(&self, verbose: bool) -> String {
        let mut output = String::new();

        output.push_str(&format!(
            "\n{} {}\n",
            "\u{2717}".red().bold(), // ✗
            "Error:".red().bold()
        ));
        output.push_str(&format!("  {}\n", self.to_string().red()));

        if verbose {
            let mut source = self.source();
            while let Some(err) = source {
                output.push_str(&format!(
                    "  {} {}\n",
                    "\u{2192}".dimmed(), // →
                    err.to_string().dimmed()
                ));
                source = err.source();
            }
        }

        let suggestions = self.suggestions();
        if !suggestions.is_empty() {
            output.push_str(&format!("\n{}\n", "Suggestions:".yellow().bold()));
            for suggestion in suggestions {
                output.push_str(&format!("  {suggestion}\n"));
            }
        }

        output
    }

    /// Plain-text version of [`Self::format_colored`] — no ANSI codes.
    pub fn format_plain(&self, verbose: bool) -> String {
        let mut out = String::new();
        out.push_str(&format!("\nError: {self}\n"));

        if verbose {
            let mut src = self.source();
            while let Some(err) = src {
                out.push_str(&format!("  Caused by: {err}\n"));
                src = err.source();
            }
        }

        let suggestions = self.suggestions();
        if !suggestions.is_empty() {
            out.push_str("\nSuggestions:\n");
            for s in &suggestions {
                out.push_str(&format!("  {s}\n"));
            }
        }

        out
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────
