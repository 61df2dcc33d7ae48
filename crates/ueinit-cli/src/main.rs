//! # ueinit
//!
//! Scaffolds the C++ `Source` tree for the Unreal Engine project in the
//! current directory.
//!
//! ## Startup sequence
//!
//! 1. Parse CLI arguments (clap handles `--help` / `--version` early-exit).
//! 2. Initialise the tracing subscriber (logging).
//! 3. Build the [`Reporter`].
//! 4. Run the scaffold action.
//! 5. Translate any [`CliError`] into a user-facing message and exit code.
//!
//! ## Exit codes
//!
//! | Code | Meaning                                                        |
//! |------|----------------------------------------------------------------|
//! |  0   | Success                                                        |
//! |  1   | Any failure: bad version argument, missing `.uproject`,        |
//! |      | pre-existing `Source` directory, or an I/O fault               |
//! |  2   | Argument-parse failure (rendered by clap)                      |

use std::process::ExitCode;

use clap::Parser;
use tracing::debug;

use crate::{
    cli::Cli,
    error::CliError,
    logging::init_logging,
    output::Reporter,
};

mod cli;
mod commands;
mod error;
mod logging;
mod output;

fn main() -> ExitCode {
    // ── 1. Parse arguments ────────────────────────────────────────────────
    // clap handles --help / --version and exits automatically; errors here
    // are argument-parse failures (exit 2).
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // Render clap's own error (already user-friendly) and exit 2.
            eprintln!("{}", e.render().ansi());
            return ExitCode::from(2);
        }
    };

    // ── 2. Initialise tracing ─────────────────────────────────────────────
    if let Err(e) = init_logging(&cli.global) {
        eprintln!("Failed to initialise logging: {e}");
        return ExitCode::from(1);
    }

    debug!(
        verbose = cli.global.verbose,
        quiet = cli.global.quiet,
        no_color = cli.global.no_color,
        "CLI started"
    );

    // ── 3. Build reporter ─────────────────────────────────────────────────
    let reporter = Reporter::new(&cli.global);

    // ── 4. Run + 5. Error handling ────────────────────────────────────────
    match commands::init::execute(cli, &reporter) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => handle_error(e),
    }
}

/// Translate a `CliError` into a user message and an exit code.
///
/// This is the single place where structured errors become human-readable
/// output and OS exit codes — the format/suggestion machinery in `CliError`
/// is all exercised here.
fn handle_error(err: CliError) -> ExitCode {
    // 1. Emit a structured log event at the right severity.
    err.log();

    // 2. Print a user-friendly message.  We write directly to stderr so
    //    the message appears even when stdout is redirected.  Colour is
    //    disabled when stderr is not a TTY (same logic as logging.rs).
    let verbose = false;
    let msg = if std::io::IsTerminal::is_terminal(&std::io::stderr()) {
        err.format_colored(verbose)
    } else {
        err.format_plain(verbose)
    };
    eprint!("{msg}");

    ExitCode::from(err.exit_code())
}
