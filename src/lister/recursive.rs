use super::FileLister;
use crate::error::{LstError, Result};
use crate::fs::Filesystem;
use std::collections::{HashSet, VecDeque};
use std::path::PathBuf;

/// Breadth-first expansion of each root into the root plus every directory
/// reachable through directory children. Deduplicates by canonical string
/// so a path reachable via multiple roots is listed once.
pub struct RecursiveLister;

impl FileLister for RecursiveLister {
    fn list_paths(&self, fs: &dyn Filesystem, roots: &[PathBuf]) -> Result<Vec<PathBuf>> {
        let mut queue: VecDeque<PathBuf> = VecDeque::new();
        for root in roots {
            if !fs.is_dir(root) {
                return Err(LstError::InvalidPath(format!(
                    "{}: not a directory",
                    root.display()
                )));
            }
            queue.push_back(root.clone());
        }

        let mut seen = HashSet::new();
        let mut paths = Vec::new();
        while let Some(dir) = queue.pop_front() {
            if !seen.insert(fs.canonical(&dir)?) {
                continue;
            }
            for child in fs.children(&dir)? {
                if fs.is_dir(&child) {
                    queue.push_back(child);
                }
            }
            paths.push(dir);
        }
        Ok(paths)
    }
}
