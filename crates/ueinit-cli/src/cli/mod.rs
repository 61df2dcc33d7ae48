//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names and
//! help text.  No business logic lives here.

use clap::Parser;

pub mod global;
pub use global::GlobalArgs;

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "ueinit",
    bin_name = "ueinit",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Scaffold C++ sources for an Unreal Engine project",
    long_about = "ueinit creates the Source tree and the three UnrealBuildTool \
                  configuration files for the .uproject found in the current \
                  directory, targeting the selected engine version.",
    after_help = "EXAMPLES:\n\
        \x20 ueinit 5.3    # scaffold for engine version 5.3\n\
        \x20 ueinit        # pick the engine version interactively",
)]
pub struct Cli {
    /// Engine version to target, e.g. `5.4`.
    ///
    /// When omitted, an interactive menu of the canonical versions is
    /// offered instead.
    #[arg(value_name = "VERSION", help = "Engine version of the form 5.N")]
    pub version: Option<String>,

    /// Flags available on every invocation.
    #[command(flatten)]
    pub global: GlobalArgs,
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_structure_is_valid() {
        // clap's internal consistency check — catches conflicts, missing values, etc.
        Cli::command().debug_assert();
    }

    #[test]
    fn cli_version_matches_cargo() {
        let cmd = Cli::command();
        assert_eq!(cmd.get_version(), Some(env!("CARGO_PKG_VERSION")));
    }

    #[test]
    fn version_argument_is_optional() {
        let cli = Cli::parse_from(["ueinit"]);
        assert!(cli.version.is_none());

        let cli = Cli::parse_from(["ueinit", "5.3"]);
        assert_eq!(cli.version.as_deref(), Some("5.3"));
    }

    #[test]
    fn quiet_and_verbose_conflict() {
        // clap should reject --quiet --verbose together
        let result = Cli::try_parse_from(["ueinit", "--quiet", "--verbose"]);
        assert!(result.is_err());
    }

    #[test]
    fn verbosity_accumulates() {
        let cli = Cli::parse_from(["ueinit", "-vv", "5.3"]);
        assert_eq!(cli.global.verbose, 2);
    }
}
