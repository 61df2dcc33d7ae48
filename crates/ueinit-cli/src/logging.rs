//! Tracing subscriber initialisation.
//!
//! Only the CLI crate is allowed to call [`init_logging`]; the core and
//! adapter crates only *emit* events — they never touch subscribers.
//!
//! Verbosity maps to a filter level: nothing → WARN, `-v` → INFO,
//! `-vv` → DEBUG, `-vvv` → TRACE, `--quiet` → ERROR. A `RUST_LOG`
//! value in the environment overrides the flags entirely.

use std::io::IsTerminal as _;

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::cli::GlobalArgs;

/// Initialise the global tracing subscriber.
///
/// Must be called exactly once, before any tracing macros fire.  Returns
/// an error if the subscriber could not be registered.
pub fn init_logging(args: &GlobalArgs) -> anyhow::Result<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(from_env) => from_env,
        // No RUST_LOG: apply the flag-derived level to all three crates.
        Err(_) => {
            let level = level_for(args);
            EnvFilter::new(format!(
                "ueinit={level},ueinit_core={level},ueinit_adapters={level}"
            ))
        }
    };

    // Diagnostics share stderr with error output; colour only when stderr
    // is a real terminal.
    let use_ansi = !args.no_color && std::io::stderr().is_terminal();

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .with_ansi(use_ansi)
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialise tracing: {e}"))?;

    Ok(())
}

/// Filter level derived from the quiet flag and the verbosity counter.
fn level_for(args: &GlobalArgs) -> &'static str {
    match (args.quiet, args.verbose) {
        (true, _) => "error",
        (false, 0) => "warn",
        (false, 1) => "info",
        (false, 2) => "debug",
        (false, _) => "trace",
    }
}
