//! Interactive and argument-driven version selection.
//!
//! The interactive flow is a two-alternative parse: a menu index is always
//! attempted before the literal version fallback, so the precedence rule
//! stays explicit and testable ("7" selects menu entry 7, it is never
//! rejected as a bare version string).
//!
//! The input/output streams are injected so the whole flow runs against
//! `std::io::Cursor` in tests; no terminal required.

use std::io::{BufRead, Write};

use tracing::debug;

use crate::application::error::AppError;
use crate::domain::config::{self, BuildConfig};
use crate::domain::version::CANONICAL_VERSIONS;
use crate::error::{CoreError, CoreResult};

/// Select a build configuration from an optional command-line candidate.
///
/// With a candidate present it is resolved exactly once; rejection is
/// returned to the caller as a hard failure (no retry). With no candidate
/// the interactive flow runs until it produces a valid configuration or
/// the input stream fails. The returned [`BuildConfig`] carries the
/// accepted version identifier.
pub fn select_version<R, W>(candidate: Option<&str>, input: R, output: W) -> CoreResult<BuildConfig>
where
    R: BufRead,
    W: Write,
{
    match candidate {
        Some(raw) => {
            let selected = config::resolve(raw)?;
            debug!(version = %selected.version(), "version taken from argument");
            Ok(selected)
        }
        None => interactive(input, output),
    }
}

/// Menu-driven prompt loop.
///
/// Re-prompts on invalid input without bound; only a closed or failing
/// stream ends it early.
fn interactive<R, W>(mut input: R, mut output: W) -> CoreResult<BuildConfig>
where
    R: BufRead,
    W: Write,
{
    write_menu(&mut output)?;

    loop {
        prompt(&mut output)?;
        let line = read_line(&mut input)?;
        let trimmed = line.trim();

        if trimmed.is_empty() {
            writeln!(output, "Nothing entered. Pick a menu number or type a version.")
                .map_err(prompt_io)?;
            continue;
        }

        // Menu index takes precedence over the literal fallback.
        if let Some(canonical) = menu_entry(trimmed) {
            debug!(choice = trimmed, version = canonical, "menu entry selected");
            return Ok(config::resolve(canonical)?);
        }

        match config::resolve(trimmed) {
            Ok(selected) => {
                debug!(version = %selected.version(), "free-form version accepted");
                return Ok(selected);
            }
            Err(_) => {
                writeln!(
                    output,
                    "'{trimmed}' is not a valid choice. Enter 1-{} or a version like 5.4.",
                    CANONICAL_VERSIONS.len()
                )
                .map_err(prompt_io)?;
            }
        }
    }
}

/// Map a 1-indexed menu choice to its canonical version, if in range.
fn menu_entry(input: &str) -> Option<&'static str> {
    let index: usize = input.parse().ok()?;
    (1..=CANONICAL_VERSIONS.len())
        .contains(&index)
        .then(|| CANONICAL_VERSIONS[index - 1])
}

fn write_menu<W: Write>(output: &mut W) -> CoreResult<()> {
    writeln!(output, "Select an engine version:").map_err(prompt_io)?;
    for (index, version) in CANONICAL_VERSIONS.iter().enumerate() {
        writeln!(output, "  {:>2}) {version}", index + 1).map_err(prompt_io)?;
    }
    Ok(())
}

fn prompt<W: Write>(output: &mut W) -> CoreResult<()> {
    write!(output, "Version (1-{} or 5.N): ", CANONICAL_VERSIONS.len()).map_err(prompt_io)?;
    output.flush().map_err(prompt_io)
}

fn read_line<R: BufRead>(input: &mut R) -> CoreResult<String> {
    let mut line = String::new();
    let bytes = input.read_line(&mut line).map_err(prompt_io)?;
    if bytes == 0 {
        return Err(AppError::PromptClosed.into());
    }
    Ok(line)
}

fn prompt_io(e: std::io::Error) -> CoreError {
    AppError::PromptIo {
        reason: e.to_string(),
    }
    .into()
}

// ── tests ─────────────────────────────────────────────────────────────────────
