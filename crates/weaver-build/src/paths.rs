//! Path helpers: extension swaps, glob listing and content hashing

use crate::error::{BuildError, BuildResult};
use glob::Pattern;
use sha2::{Digest, Sha256};
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// File name without directory, extension kept
pub fn base_name(path: &Path) -> Option<String> {
    path.file_name().map(|name| name.to_string_lossy().into_owned())
}

/// Replace the extension of `path`; an empty extension removes it
pub fn replace_extension(path: &Path, extension: &str) -> PathBuf {
    path.with_extension(extension)
}

pub fn is_file(path: &Path) -> bool {
    path.is_file()
}

/// Create the directory holding `path` if it does not exist
pub fn ensure_parent_dir(path: &Path) -> BuildResult<()> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() && !parent.exists() => {
            fs::create_dir_all(parent).map_err(|e| BuildError::io(parent, e))
        }
        _ => Ok(()),
    }
}

/// List the files directly inside `dir` whose name matches the glob `pattern`.
///
/// Entries come back in directory listing order. A missing directory yields
/// an empty list.
pub fn list_matching(dir: &Path, pattern: &str) -> BuildResult<Vec<PathBuf>> {
    let matcher = Pattern::new(pattern).map_err(|e| BuildError::invalid_pattern(pattern, e))?;
    if !dir.is_dir() {
        return Ok(Vec::new());
    }

    Ok(WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|entry| entry.file_type().is_file())
        .filter(|entry| {
            entry
                .file_name()
                .to_str()
                .is_some_and(|name| matcher.matches(name))
        })
        .map(|entry| entry.into_path())
        .collect())
}

/// SHA-256 of a file's content, lowercase hex
pub fn content_hash(path: &Path) -> BuildResult<String> {
    let content = fs::read(path).map_err(|e| BuildError::io(path, e))?;
    let mut hasher = Sha256::new();
    hasher.update(&content);
    Ok(format!("{:x}", hasher.finalize()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_replace_extension() {
        assert_eq!(
            replace_extension(Path::new("dir/foo.fs"), "exe"),
            PathBuf::from("dir/foo.exe")
        );
        assert_eq!(replace_extension(Path::new("foo"), "exe"), PathBuf::from("foo.exe"));
        assert_eq!(replace_extension(Path::new("foo.fs"), ""), PathBuf::from("foo"));
    }

    #[test]
    fn test_base_name() {
        assert_eq!(base_name(Path::new("examples/a.fs")), Some("a.fs".to_string()));
        assert_eq!(base_name(Path::new("/")), None);
    }

    #[test]
    fn test_list_matching_filters_and_ignores_subdirs() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("a.fs"), "").unwrap();
        fs::write(dir.path().join("b.fs"), "").unwrap();
        fs::write(dir.path().join("notes.txt"), "").unwrap();
        fs::create_dir(dir.path().join("nested.fs")).unwrap();
        fs::write(dir.path().join("nested.fs").join("c.fs"), "").unwrap();

        let mut names: Vec<_> = list_matching(dir.path(), "*.fs")
            .unwrap()
            .iter()
            .filter_map(|p| base_name(p))
            .collect();
        names.sort();
        assert_eq!(names, vec!["a.fs", "b.fs"]);
    }

    #[test]
    fn test_list_matching_missing_dir_is_empty() {
        let dir = TempDir::new().unwrap();
        assert!(list_matching(&dir.path().join("missing"), "*.fs")
            .unwrap()
            .is_empty());
    }

    #[test]
    fn test_list_matching_glob_syntax() {
        let dir = TempDir::new().unwrap();
        for name in ["a.fs", "b.fs", "c.fs", "demo1.fs", "demo12.fs"] {
            fs::write(dir.path().join(name), "").unwrap();
        }

        let names = |pattern: &str| {
            let mut names: Vec<_> = list_matching(dir.path(), pattern)
                .unwrap()
                .iter()
                .filter_map(|p| base_name(p))
                .collect();
            names.sort();
            names
        };

        assert_eq!(names("[ab].fs"), vec!["a.fs", "b.fs"]);
        assert_eq!(names("[!ab].fs"), vec!["c.fs"]);
        assert_eq!(names("demo?.fs"), vec!["demo1.fs"]);
        assert_eq!(names("demo*.fs"), vec!["demo1.fs", "demo12.fs"]);
    }

    #[test]
    fn test_list_matching_malformed_pattern() {
        let dir = TempDir::new().unwrap();
        assert!(matches!(
            list_matching(dir.path(), "[ab.fs"),
            Err(BuildError::InvalidPattern { .. })
        ));
    }

    #[test]
    fn test_ensure_parent_dir_creates_nested() {
        let dir = TempDir::new().unwrap();
        let output = dir.path().join("build").join("bin").join("app.exe");
        ensure_parent_dir(&output).unwrap();
        assert!(dir.path().join("build").join("bin").is_dir());
        assert!(ensure_parent_dir(Path::new("app.exe")).is_ok());
    }

    #[test]
    fn test_content_hash() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("empty.dll");
        fs::write(&file, "").unwrap();
        assert_eq!(
            content_hash(&file).unwrap(),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
        assert!(content_hash(&dir.path().join("missing")).is_err());
        assert!(is_file(&file));
    }
}
