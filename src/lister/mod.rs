use crate::error::Result;
use crate::fs::Filesystem;
use std::path::PathBuf;

/// Expands the requested roots into the set of paths whose children get
/// rendered. Order is irrelevant; rendering sorts by canonical string.
pub trait FileLister {
    fn list_paths(&self, fs: &dyn Filesystem, roots: &[PathBuf]) -> Result<Vec<PathBuf>>;
}

mod basic;
mod recursive;

pub use basic::BasicLister;
pub use recursive::RecursiveLister;
