//! Scaffold service: descriptor discovery, preconditions, and the write
//! workflow.
//!
//! Both preconditions are checked before any mutation, so a failed run
//! leaves the starting state untouched. A failure mid-write rolls the
//! partial tree back.

use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::application::error::AppError;
use crate::application::ports::Filesystem;
use crate::application::templates;
use crate::domain::BuildConfig;
use crate::error::CoreResult;

/// File extension of the project descriptor.
const DESCRIPTOR_EXTENSION: &str = ".uproject";

/// Name of the generated source tree root.
const SOURCE_DIR: &str = "Source";

/// What a completed scaffold run produced, for display by the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldReport {
    /// Name derived from the project descriptor.
    pub project_name: String,
    pub created_dirs: Vec<PathBuf>,
    pub written_files: Vec<PathBuf>,
}

/// Orchestrates the scaffold workflow over an injected filesystem port.
pub struct ScaffoldService {
    filesystem: Box<dyn Filesystem>,
}

impl ScaffoldService {
    pub fn new(filesystem: Box<dyn Filesystem>) -> Self {
        Self { filesystem }
    }

    /// Create the `Source` tree for the project in `project_dir`.
    ///
    /// Writes one module directory and three generated build-configuration
    /// files, all rendered from `config` before the first mutation.
    pub fn scaffold(&self, project_dir: &Path, config: &BuildConfig) -> CoreResult<ScaffoldReport> {
        let source_dir = project_dir.join(SOURCE_DIR);
        if self.filesystem.exists(&source_dir) {
            return Err(AppError::SourceDirExists { path: source_dir }.into());
        }

        let project_name = self.find_project_name(project_dir)?;
        info!(project = %project_name, version = %config.version(), "project descriptor found");

        let module_dir = source_dir.join(&project_name);
        let plan = [
            (
                module_dir.join(format!("{project_name}.Build.cs")),
                templates::module_rules(&project_name),
            ),
            (
                source_dir.join(format!("{project_name}.Target.cs")),
                templates::game_target(&project_name, config),
            ),
            (
                source_dir.join(format!("{project_name}Editor.Target.cs")),
                templates::editor_target(&project_name, config),
            ),
        ];

        if let Err(e) = self.write_tree(&source_dir, &module_dir, &plan) {
            warn!("write failed, rolling back");
            self.rollback(&source_dir);
            return Err(e);
        }

        info!(project = %project_name, "scaffold completed");
        Ok(ScaffoldReport {
            project_name,
            created_dirs: vec![source_dir, module_dir],
            written_files: plan.into_iter().map(|(path, _)| path).collect(),
        })
    }

    /// Derive the project name from the first `.uproject` descriptor.
    ///
    /// Entries are sorted so the choice is deterministic when several
    /// descriptors are present.
    fn find_project_name(&self, project_dir: &Path) -> CoreResult<String> {
        let mut entries = self.filesystem.list_dir(project_dir)?;
        entries.sort();

        entries
            .iter()
            .filter_map(|name| name.strip_suffix(DESCRIPTOR_EXTENSION))
            .find(|stem| !stem.is_empty())
            .map(str::to_owned)
            .ok_or_else(|| {
                AppError::MissingDescriptor {
                    dir: project_dir.to_path_buf(),
                }
                .into()
            })
    }

    fn write_tree(
        &self,
        source_dir: &Path,
        module_dir: &Path,
        plan: &[(PathBuf, String); 3],
    ) -> CoreResult<()> {
        self.filesystem.create_dir_all(source_dir)?;
        debug!(path = %source_dir.display(), "directory created");

        self.filesystem.create_dir_all(module_dir)?;
        debug!(path = %module_dir.display(), "directory created");

        for (path, content) in plan {
            self.filesystem.write_file(path, content)?;
            debug!(path = %path.display(), "file written");
        }
        Ok(())
    }

    /// Best-effort rollback of a partially written tree.
    fn rollback(&self, source_dir: &Path) {
        if let Err(e) = self.filesystem.remove_dir_all(source_dir) {
            warn!(error = %e, path = %source_dir.display(), "rollback failed");
        } else {
            info!("rollback successful");
        }
    }
}
