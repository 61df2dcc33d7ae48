//! In-memory filesystem adapter for testing.

use std::{
    collections::{HashMap, HashSet},
    path::{Path, PathBuf},
    sync::{Arc, RwLock},
};

use ueinit_core::application::AppError;
use ueinit_core::application::ports::Filesystem;
use ueinit_core::error::{CoreError, CoreResult};

/// In-memory filesystem for testing.
///
/// Clones share the same backing store, so a test can keep a handle for
/// assertions while the scaffold service owns a boxed copy.
#[derive(Debug, Clone, Default)]
pub struct MemoryFilesystem {
    inner: Arc<RwLock<MemoryFilesystemInner>>,
}

#[derive(Debug, Default)]
struct MemoryFilesystemInner {
    files: HashMap<PathBuf, String>,
    directories: HashSet<PathBuf>,
}

impl MemoryFilesystem {
    /// Create a new empty memory filesystem.
    pub fn new() -> Self {
        Self::default()
    }

    /// Read a file's content (testing helper).
    pub fn read_file(&self, path: &Path) -> Option<String> {
        let inner = self.inner.read().ok()?;
        inner.files.get(path).cloned()
    }

    /// List all files (testing helper).
    pub fn list_files(&self) -> Vec<PathBuf> {
        let inner = self.inner.read().expect("filesystem lock poisoned");
        let mut files: Vec<_> = inner.files.keys().cloned().collect();
        files.sort();
        files
    }
}

impl Filesystem for MemoryFilesystem {
    fn exists(&self, path: &Path) -> bool {
        let inner = self.inner.read().expect("filesystem lock poisoned");
        inner.files.contains_key(path) || inner.directories.contains(path)
    }

    fn create_dir_all(&self, path: &Path) -> CoreResult<()> {
        let mut inner = self.inner.write().map_err(|_| lock_poisoned(path))?;

        let mut current = PathBuf::new();
        for component in path.components() {
            current.push(component);
            inner.directories.insert(current.clone());
        }
        Ok(())
    }

    fn write_file(&self, path: &Path, content: &str) -> CoreResult<()> {
        let mut inner = self.inner.write().map_err(|_| lock_poisoned(path))?;

        // Mirror std::fs: writing into a missing directory fails.
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !inner.directories.contains(parent) {
                return Err(AppError::Filesystem {
                    path: path.to_path_buf(),
                    reason: "parent directory does not exist".into(),
                }
                .into());
            }
        }

        inner.files.insert(path.to_path_buf(), content.to_string());
        Ok(())
    }

    fn list_dir(&self, path: &Path) -> CoreResult<Vec<String>> {
        let inner = self.inner.read().map_err(|_| lock_poisoned(path))?;

        if !inner.directories.contains(path) {
            return Err(AppError::Filesystem {
                path: path.to_path_buf(),
                reason: "directory does not exist".into(),
            }
            .into());
        }

        let mut names: Vec<String> = inner
            .files
            .keys()
            .chain(inner.directories.iter())
            .filter(|candidate| candidate.parent() == Some(path))
            .filter_map(|candidate| candidate.file_name())
            .map(|name| name.to_string_lossy().into_owned())
            .collect();
        names.sort();
        names.dedup();
        Ok(names)
    }

    fn remove_dir_all(&self, path: &Path) -> CoreResult<()> {
        let mut inner = self.inner.write().map_err(|_| lock_poisoned(path))?;

        inner.directories.retain(|p| !p.starts_with(path));
        inner.files.retain(|p, _| !p.starts_with(path));
        Ok(())
    }
}

fn lock_poisoned(path: &Path) -> CoreError {
    AppError::Filesystem {
        path: path.to_path_buf(),
        reason: "filesystem lock poisoned".into(),
    }
    .into()
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn write_requires_parent_directory() {
        let fs = MemoryFilesystem::new();
        assert!(fs.write_file(Path::new("a/b.txt"), "x").is_err());

        fs.create_dir_all(Path::new("a")).unwrap();
        assert!(fs.write_file(Path::new("a/b.txt"), "x").is_ok());
        assert_eq!(fs.read_file(Path::new("a/b.txt")).unwrap(), "x");
    }

    #[test]
    fn list_dir_returns_direct_children_only() {
        let fs = MemoryFilesystem::new();
        fs.create_dir_all(Path::new("root/nested")).unwrap();
        fs.write_file(Path::new("root/top.txt"), "x").unwrap();
        fs.write_file(Path::new("root/nested/deep.txt"), "x").unwrap();

        let names = fs.list_dir(Path::new("root")).unwrap();
        assert_eq!(names, vec!["nested".to_string(), "top.txt".to_string()]);
    }

    #[test]
    fn remove_dir_all_is_recursive() {
        let fs = MemoryFilesystem::new();
        fs.create_dir_all(Path::new("root/nested")).unwrap();
        fs.write_file(Path::new("root/nested/deep.txt"), "x").unwrap();

        fs.remove_dir_all(Path::new("root")).unwrap();
        assert!(!fs.exists(Path::new("root")));
        assert!(!fs.exists(Path::new("root/nested/deep.txt")));
    }

    #[test]
    fn clones_share_the_backing_store() {
        let fs = MemoryFilesystem::new();
        let view = fs.clone();
        fs.create_dir_all(Path::new("shared")).unwrap();
        assert!(view.exists(Path::new("shared")));
    }
}
