//! Terminal reporting.
//!
//! The interactive selection prompts write straight to stdout inside the
//! core selector; everything else the user sees goes through [`Reporter`].

use std::io::{self, IsTerminal};

use console::Term;
use owo_colors::OwoColorize;

use crate::cli::GlobalArgs;

/// Writes user-facing progress lines to the terminal.
///
/// Quiet mode drops everything except errors; colour is disabled by flag,
/// `NO_COLOR`, or a non-TTY stdout.
pub struct Reporter {
    quiet: bool,
    color: bool,
    term: Term,
}

impl Reporter {
    pub fn new(args: &GlobalArgs) -> Self {
        Self {
            quiet: args.quiet,
            color: !args.no_color && io::stdout().is_terminal(),
            term: Term::stdout(),
        }
    }

    /// Bold header line at the start of a run.
    pub fn header(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.color {
            msg.cyan().bold().to_string()
        } else {
            msg.to_owned()
        };
        self.term.write_line(&line)
    }

    /// Indented progress line for a single scaffold step.
    pub fn step(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        self.term.write_line(&format!("  {msg}"))
    }

    /// Success indicator: `✓ <msg>`.
    pub fn success(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.color {
            format!("{} {}", "\u{2713}".green().bold(), msg.green())
        } else {
            format!("\u{2713} {msg}") // ✓
        };
        self.term.write_line(&line)
    }

    /// Dimmed follow-up instruction printed after success.
    pub fn hint(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.color {
            msg.yellow().to_string()
        } else {
            msg.to_owned()
        };
        self.term.write_line(&line)
    }

    /// Error indicator: `✗ <msg>`.  *Not* suppressed in quiet mode —
    /// errors must always be visible.
    pub fn error(&self, msg: &str) -> io::Result<()> {
        let line = if self.color {
            format!("{} {}", "\u{2717}".red().bold(), msg.red())
        } else {
            format!("\u{2717} {msg}") // ✗
        };
        self.term.write_line(&line)
    }

    /// `true` if ANSI colours are enabled.
    pub fn supports_color(&self) -> bool {
        self.color
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn make_reporter(quiet: bool, no_color: bool) -> Reporter {
        let args = GlobalArgs {
            verbose: 0,
            quiet,
            no_color,
        };
        Reporter::new(&args)
    }

    #[test]
    fn quiet_suppresses_progress() {
        let out = make_reporter(true, true);
        // write_line on Term::stdout() in tests is harmless; we just verify
        // the methods return Ok without panicking.
        assert!(out.header("hello").is_ok());
        assert!(out.step("working").is_ok());
        assert!(out.success("done").is_ok());
        assert!(out.hint("next").is_ok());
    }

    #[test]
    fn error_not_suppressed_in_quiet_mode() {
        // error() must always attempt the write, quiet or not.
        let out = make_reporter(true, true);
        assert!(out.error("something went wrong").is_ok());
    }

    #[test]
    fn no_color_flag_disables_color() {
        let no_color = make_reporter(false, true);
        assert!(!no_color.supports_color());
    }
}
