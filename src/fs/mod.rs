use crate::error::{LstError, Result};
use std::fs;
use std::path::{Path, PathBuf};

#[cfg(test)]
pub mod memory;

/// Read-only view over a directory tree. Listing, recursion, and rendering
/// all go through this seam so they can run against [`memory::MemoryFs`]
/// in tests.
pub trait Filesystem {
    /// Immediate children of `path`, in no particular order.
    fn children(&self, path: &Path) -> Result<Vec<PathBuf>>;

    fn is_dir(&self, path: &Path) -> bool;

    /// Absolute, normalized form of `path`, used for both display and
    /// sort ordering.
    fn canonical(&self, path: &Path) -> Result<String>;
}

/// Final component of `path` as a string.
pub fn basename(path: &Path) -> String {
    match path.file_name() {
        Some(name) => name.to_string_lossy().into_owned(),
        None => path.display().to_string(),
    }
}

pub struct DiskFs;

impl Filesystem for DiskFs {
    fn children(&self, path: &Path) -> Result<Vec<PathBuf>> {
        let entries = fs::read_dir(path)
            .map_err(|e| LstError::InvalidPath(format!("{}: {}", path.display(), e)))?;

        let mut children = Vec::with_capacity(16);
        for entry in entries {
            let entry =
                entry.map_err(|e| LstError::InvalidPath(format!("{}: {}", path.display(), e)))?;
            let p = entry.path();
            // Skip current and parent dir entries if the underlying FS
            // yields them; the visibility filter synthesizes those itself.
            let name = basename(&p);
            if name == "." || name == ".." {
                continue;
            }
            children.push(p);
        }
        Ok(children)
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn canonical(&self, path: &Path) -> Result<String> {
        let canonical = fs::canonicalize(path)
            .map_err(|e| LstError::InvalidPath(format!("{}: {}", path.display(), e)))?;
        Ok(canonical.to_string_lossy().into_owned())
    }
}
