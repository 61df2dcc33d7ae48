//! Driven ports implemented by the adapters crate.

use std::path::Path;

use crate::error::CoreResult;

/// Filesystem operations the scaffold workflow depends on.
///
/// Production code uses `LocalFilesystem` (std::fs); tests use
/// `MemoryFilesystem`. Both live in `ueinit-adapters`.
pub trait Filesystem {
    fn exists(&self, path: &Path) -> bool;

    fn create_dir_all(&self, path: &Path) -> CoreResult<()>;

    fn write_file(&self, path: &Path, content: &str) -> CoreResult<()>;

    /// File names (not full paths) of the directory's entries.
    fn list_dir(&self, path: &Path) -> CoreResult<Vec<String>>;

    /// Recursive removal. Only used to roll back a partially written tree.
    fn remove_dir_all(&self, path: &Path) -> CoreResult<()>;
}
