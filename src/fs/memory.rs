use super::Filesystem;
use crate::error::{LstError, Result};
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

/// In-memory directory tree used by unit tests instead of real disk I/O.
/// Canonical form is the path itself, so expected output is deterministic.
#[derive(Default)]
pub struct MemoryFs {
    dirs: BTreeSet<PathBuf>,
    files: BTreeSet<PathBuf>,
}

impl MemoryFs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_dir(&mut self, path: &str) {
        let path = PathBuf::from(path);
        for ancestor in path.ancestors() {
            if ancestor.as_os_str().is_empty() {
                continue;
            }
            self.dirs.insert(ancestor.to_path_buf());
        }
    }

    pub fn add_file(&mut self, path: &str) {
        let path = PathBuf::from(path);
        if let Some(parent) = path.parent() {
            self.add_dir(&parent.to_string_lossy());
        }
        self.files.insert(path);
    }
}

impl Filesystem for MemoryFs {
    fn children(&self, path: &Path) -> Result<Vec<PathBuf>> {
        if !self.dirs.contains(path) {
            return Err(LstError::InvalidPath(format!(
                "{}: not a directory",
                path.display()
            )));
        }
        Ok(self
            .dirs
            .iter()
            .chain(self.files.iter())
            .filter(|p| p.parent() == Some(path))
            .cloned()
            .collect())
    }

    fn is_dir(&self, path: &Path) -> bool {
        self.dirs.contains(path)
    }

    fn canonical(&self, path: &Path) -> Result<String> {
        Ok(path.display().to_string())
    }
}
