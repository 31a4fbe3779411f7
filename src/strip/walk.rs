use std::path::{Path, PathBuf};

use ignore::{DirEntry, WalkBuilder};
use tracing::warn;

/// Every non-directory entry below `root`, parents before children, siblings by name.
///
/// Unreadable entries (including a missing root) are logged and skipped. A root
/// that is not a directory contributes nothing.
pub(crate) fn files(root: &Path) -> impl Iterator<Item = PathBuf> {
    WalkBuilder::new(root)
        .standard_filters(false)
        .follow_links(false)
        .sort_by_file_name(|a, b| a.cmp(b))
        .build()
        .filter_map(|entry| match entry {
            Ok(e) => Some(e),
            Err(err) => {
                warn!("Skipping entry: {err}");
                None
            }
        })
        .filter(|e| e.depth() > 0 && !is_dir_like(e))
        .map(DirEntry::into_path)
}

/// Links are not descended into, but a link to a directory still counts as one.
fn is_dir_like(entry: &DirEntry) -> bool {
    if entry.file_type().is_some_and(|ft| ft.is_dir()) {
        return true;
    }
    entry.path_is_symlink() && entry.path().is_dir()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn walks_nested_and_hidden_files_but_not_dirs() {
        let tmp = tempdir().unwrap();
        let root = tmp.path();
        fs::create_dir_all(root.join("a/b/c")).unwrap();
        fs::create_dir_all(root.join(".hidden")).unwrap();
        fs::write(root.join("a/b/c/deep.disabled"), "").unwrap();
        fs::write(root.join(".hidden/x"), "").unwrap();
        fs::write(root.join(".gitignore"), "*.disabled\n").unwrap();

        let found: Vec<_> = files(root)
            .map(|p| p.strip_prefix(root).unwrap().display().to_string())
            .collect();

        assert_eq!(found, vec![".gitignore", ".hidden/x", "a/b/c/deep.disabled"]);
    }

    #[test]
    fn missing_root_yields_nothing() {
        let tmp = tempdir().unwrap();
        assert_eq!(files(&tmp.path().join("nope")).count(), 0);
    }

    #[test]
    fn file_root_yields_nothing() {
        let tmp = tempdir().unwrap();
        let solo = tmp.path().join("solo.disabled");
        fs::write(&solo, "").unwrap();
        assert_eq!(files(&solo).count(), 0);
    }

    #[cfg(unix)]
    #[test]
    fn symlinked_directory_is_not_a_file() {
        let tmp = tempdir().unwrap();
        let root = tmp.path();
        fs::create_dir_all(root.join("real")).unwrap();
        fs::write(root.join("real/inner"), "").unwrap();
        std::os::unix::fs::symlink(root.join("real"), root.join("link.disabled")).unwrap();
        std::os::unix::fs::symlink(root.join("real/inner"), root.join("file-link")).unwrap();

        let found: Vec<_> = files(root)
            .map(|p| p.strip_prefix(root).unwrap().display().to_string())
            .collect();

        assert_eq!(found, vec!["file-link", "real/inner"]);
    }
}
