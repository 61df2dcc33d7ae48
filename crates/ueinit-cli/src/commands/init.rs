//! Implementation of the scaffold action.
//!
//! Responsibility: obtain a build configuration via the selection flow,
//! run the core scaffold service against the current directory, and
//! display results.  No business logic lives here.

use std::io;
use std::path::Path;

use tracing::{debug, info, instrument};

use ueinit_adapters::LocalFilesystem;
use ueinit_core::application::scaffold::ScaffoldService;
use ueinit_core::application::selector::select_version;

use crate::{cli::Cli, error::CliResult, output::Reporter};

/// Execute the scaffold action.
///
/// Sequence:
/// 1. Select the engine version (argument or interactive menu)
/// 2. Scaffold the `Source` tree in the current directory
/// 3. Print the created paths and next-steps guidance
#[instrument(skip_all)]
pub fn execute(cli: Cli, reporter: &Reporter) -> CliResult<()> {
    reporter.header("ueinit \u{2014} Unreal Engine C++ initializer")?;

    // Selection completes fully before any filesystem mutation.
    let stdin = io::stdin();
    let config = select_version(cli.version.as_deref(), stdin.lock(), io::stdout())?;

    info!(
        version = %config.version(),
        build_settings = %config.build_settings(),
        include_order = %config.include_order(),
        "version selected"
    );

    let project_dir = std::env::current_dir()?;
    debug!(dir = %project_dir.display(), "scaffolding in current directory");

    let service = ScaffoldService::new(Box::new(LocalFilesystem::new()));
    let report = service.scaffold(&project_dir, &config)?;

    for dir in &report.created_dirs {
        reporter.step(&format!(
            "Created directory {}",
            relative_display(dir, &project_dir)
        ))?;
    }
    for file in &report.written_files {
        reporter.step(&format!(
            "Wrote {}",
            relative_display(file, &project_dir)
        ))?;
    }

    reporter.success(&format!(
        "C++ source structure for '{}' created (engine {})",
        report.project_name,
        config.version()
    ))?;
    reporter.hint(
        "Next step: right-click the .uproject file and select \
         \"Generate Visual Studio project files\".",
    )?;

    Ok(())
}

/// Render `path` relative to `base` for compact progress lines.
fn relative_display(path: &Path, base: &Path) -> String {
    path.strip_prefix(base)
        .unwrap_or(path)
        .display()
        .to_string()
}

// ── tests ─────────────────────────────────────────────────────────────────────
