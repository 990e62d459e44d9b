use super::FileLister;
use crate::error::{LstError, Result};
use crate::fs::Filesystem;
use std::collections::HashSet;
use std::path::PathBuf;

pub struct BasicLister;

impl FileLister for BasicLister {
    fn list_paths(&self, fs: &dyn Filesystem, roots: &[PathBuf]) -> Result<Vec<PathBuf>> {
        let mut seen = HashSet::new();
        let mut paths = Vec::with_capacity(roots.len());
        for root in roots {
            if !fs.is_dir(root) {
                return Err(LstError::InvalidPath(format!(
                    "{}: not a directory",
                    root.display()
                )));
            }
            if seen.insert(fs.canonical(root)?) {
                paths.push(root.clone());
            }
        }
        Ok(paths)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fs::memory::MemoryFs;

    #[test]
    fn lists_each_root_once() {
        let mut fs = MemoryFs::new();
        fs.add_dir("/a");
        fs.add_dir("/b");

        let roots = vec![
            PathBuf::from("/b"),
            PathBuf::from("/a"),
            PathBuf::from("/b"),
        ];
        let paths = BasicLister.list_paths(&fs, &roots).unwrap();
        assert_eq!(paths, [PathBuf::from("/b"), PathBuf::from("/a")]);
    }

    #[test]
    fn rejects_non_directory_roots() {
        let mut fs = MemoryFs::new();
        fs.add_file("/a/file");

        let err = BasicLister
            .list_paths(&fs, &[PathBuf::from("/a/file")])
            .unwrap_err();
        assert!(err.to_string().contains("not a directory"));
    }
}
