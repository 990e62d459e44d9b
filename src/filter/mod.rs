use crate::error::Result;
use crate::fs::{basename, Filesystem};
use std::path::Path;

/// How dotted entries are treated when a directory's children are listed.
/// Never affects whether a listed path itself appears in output.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DotfilesMode {
    Hide,
    ShowAlmostAll,
    ShowAll,
}

impl DotfilesMode {
    pub fn from_config_value(value: &str) -> Option<Self> {
        match value {
            "hide" => Some(DotfilesMode::Hide),
            "almost-all" => Some(DotfilesMode::ShowAlmostAll),
            "all" => Some(DotfilesMode::ShowAll),
            _ => None,
        }
    }
}

/// Child names of `path` chosen for display under `mode`, unsorted.
/// `ShowAll` adds the synthetic `.` and `..` entries.
pub fn visible_children(
    fs: &dyn Filesystem,
    path: &Path,
    mode: DotfilesMode,
) -> Result<Vec<String>> {
    let mut names = Vec::new();
    if mode == DotfilesMode::ShowAll {
        names.push(".".to_string());
        names.push("..".to_string());
    }
    for child in fs.children(path)? {
        let name = basename(&child);
        if mode == DotfilesMode::Hide && name.starts_with('.') {
            continue;
        }
        names.push(name);
    }
    Ok(names)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fs::memory::MemoryFs;

    fn sample_fs() -> MemoryFs {
        let mut fs = MemoryFs::new();
        fs.add_file("/test-dir/foo");
        fs.add_file("/test-dir/.hidden");
        fs
    }

    fn names(fs: &MemoryFs, mode: DotfilesMode) -> Vec<String> {
        let mut names = visible_children(fs, Path::new("/test-dir"), mode).unwrap();
        names.sort();
        names
    }

    #[test]
    fn hide_mode_drops_dotted_entries() {
        assert_eq!(names(&sample_fs(), DotfilesMode::Hide), ["foo"]);
    }

    #[test]
    fn almost_all_keeps_dotted_entries_without_synthetics() {
        assert_eq!(
            names(&sample_fs(), DotfilesMode::ShowAlmostAll),
            [".hidden", "foo"]
        );
    }

    #[test]
    fn all_mode_adds_self_and_parent() {
        assert_eq!(
            names(&sample_fs(), DotfilesMode::ShowAll),
            [".", "..", ".hidden", "foo"]
        );
    }

    #[test]
    fn empty_directory_is_empty_unless_all() {
        let mut fs = MemoryFs::new();
        fs.add_dir("/empty");
        let fs_names = |mode| {
            visible_children(&fs, Path::new("/empty"), mode)
                .unwrap()
                .len()
        };
        assert_eq!(fs_names(DotfilesMode::Hide), 0);
        assert_eq!(fs_names(DotfilesMode::ShowAlmostAll), 0);
        assert_eq!(
            visible_children(&fs, Path::new("/empty"), DotfilesMode::ShowAll).unwrap(),
            [".", ".."]
        );
    }

    #[test]
    fn missing_directory_is_an_error() {
        let fs = MemoryFs::new();
        assert!(visible_children(&fs, Path::new("/nope"), DotfilesMode::Hide).is_err());
    }
}
