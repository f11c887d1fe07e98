//! Target directory safety gate.
//!
//! Scaffolding never merges into a directory that already holds project
//! files. An existing target is only acceptable when every entry in it is
//! tooling noise such as editor metadata, VCS bookkeeping or stray log
//! files. Everything else counts as a conflict and aborts the run before
//! a single file is copied.

use std::fs;
use std::path::Path;

use crate::error::{Error, Result};

/// Entries that may already exist in the target directory without
/// blocking scaffolding.
pub const ALLOWED_EXISTING: [&str; 18] = [
    ".DS_Store",
    ".git",
    ".gitattributes",
    ".gitignore",
    ".gitlab-ci.yml",
    ".hg",
    ".hgcheck",
    ".hgignore",
    ".idea",
    ".npmignore",
    ".travis.yml",
    "LICENSE",
    "Thumbs.db",
    "docs",
    "mkdocs.yml",
    "npm-debug.log",
    "yarn-debug.log",
    "yarn-error.log",
];

fn is_allowed(entry_name: &str) -> bool {
    // IntelliJ module files carry the project name, so they are matched
    // by suffix rather than listed.
    ALLOWED_EXISTING.contains(&entry_name) || entry_name.ends_with(".iml")
}

/// Return every entry of `target_dir` that scaffolding could clash with,
/// sorted by name. A missing target directory has no conflicts.
pub fn find_conflicts(target_dir: &Path) -> Result<Vec<String>> {
    if !target_dir.exists() {
        return Ok(Vec::new());
    }

    let mut conflicts = Vec::new();
    for entry in fs::read_dir(target_dir)? {
        let name = entry?.file_name().to_string_lossy().into_owned();
        if !is_allowed(&name) {
            conflicts.push(name);
        }
    }
    conflicts.sort();
    Ok(conflicts)
}

/// Fail with [`Error::UnsafeTargetDirectoryError`] unless `target_dir` is
/// missing, empty or holds only allowed entries. All conflicts are
/// collected up front so the user sees the complete list at once.
pub fn ensure_safe_directory(target_dir: &Path) -> Result<()> {
    let conflicts = find_conflicts(target_dir)?;
    if conflicts.is_empty() {
        Ok(())
    } else {
        Err(Error::UnsafeTargetDirectoryError {
            target_dir: target_dir.display().to_string(),
            conflicts,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use tempfile::TempDir;

    #[test]
    fn missing_directory_is_safe() {
        let dir = TempDir::new().unwrap();
        let target = dir.path().join("not-created-yet");

        assert!(ensure_safe_directory(&target).is_ok());
    }

    #[test]
    fn empty_directory_is_safe() {
        let dir = TempDir::new().unwrap();

        assert!(ensure_safe_directory(dir.path()).is_ok());
    }

    #[test]
    fn tooling_noise_is_tolerated() {
        let dir = TempDir::new().unwrap();
        File::create(dir.path().join(".DS_Store")).unwrap();
        File::create(dir.path().join("LICENSE")).unwrap();
        File::create(dir.path().join("my-project.iml")).unwrap();
        fs::create_dir(dir.path().join(".git")).unwrap();
        fs::create_dir(dir.path().join("docs")).unwrap();

        assert!(ensure_safe_directory(dir.path()).is_ok());
    }

    #[test]
    fn every_conflict_is_reported_at_once() {
        let dir = TempDir::new().unwrap();
        File::create(dir.path().join("package.json")).unwrap();
        File::create(dir.path().join("index.js")).unwrap();
        File::create(dir.path().join(".gitignore")).unwrap();
        fs::create_dir(dir.path().join("src")).unwrap();

        let error = ensure_safe_directory(dir.path()).unwrap_err();
        match error {
            Error::UnsafeTargetDirectoryError { conflicts, .. } => {
                assert_eq!(conflicts, vec!["index.js", "package.json", "src"]);
            }
            other => panic!("expected an unsafe directory error, got {other:?}"),
        }
    }

    #[test]
    fn iml_matching_requires_the_suffix() {
        let dir = TempDir::new().unwrap();
        File::create(dir.path().join("iml")).unwrap();

        let error = ensure_safe_directory(dir.path()).unwrap_err();
        assert!(matches!(
            error,
            Error::UnsafeTargetDirectoryError { ref conflicts, .. } if conflicts == &["iml"]
        ));
    }
}
