//! Metadata source-file discovery.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

/// Find every metadata source file under `root`, sorted by path so that
/// processing order, and therefore both artifacts, stay deterministic.
pub fn find_meta_files(root: &Path) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = WalkDir::new(root)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
        .filter(|entry| {
            entry
                .file_name()
                .to_str()
                .is_some_and(|name| name.ends_with("__meta.json"))
        })
        .map(|entry| entry.into_path())
        .collect();
    files.sort();
    files
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_finds_only_meta_files_sorted() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("physics");
        fs::create_dir(&nested).unwrap();
        fs::write(nested.join("physics__cloud__meta.json"), "{}").unwrap();
        fs::write(dir.path().join("dynamics__wind__meta.json"), "{}").unwrap();
        fs::write(dir.path().join("notes.txt"), "skip").unwrap();
        fs::write(dir.path().join("other.json"), "skip").unwrap();

        let files = find_meta_files(dir.path());
        assert_eq!(files.len(), 2);
        assert!(files[0].ends_with("dynamics__wind__meta.json"));
        assert!(files[1].ends_with("physics/physics__cloud__meta.json"));
    }

    #[test]
    fn test_empty_directory_finds_nothing() {
        let dir = tempfile::tempdir().unwrap();
        assert!(find_meta_files(dir.path()).is_empty());
    }
}
