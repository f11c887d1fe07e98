use std::path::Path;

use crate::constants::CRITICAL_FILES;
use crate::error::{Error, Result};
use crate::exclude::ExclusionPolicy;

use super::operation::CopyOperation;

/// Decides what to do with each entry of the template tree.
///
/// The copier only inspects paths and existence; it never writes. Every
/// decision comes back as a [`CopyOperation`] for the executor to carry
/// out, which keeps the policy testable without touching a real project.
pub struct TemplateCopier<'a> {
    policy: ExclusionPolicy,
    template_root: &'a Path,
    target_root: &'a Path,
}

impl<'a> TemplateCopier<'a> {
    pub fn new(template_root: &'a Path, target_root: &'a Path) -> Self {
        Self { policy: ExclusionPolicy::default(), template_root, target_root }
    }

    /// Classify a single template entry.
    ///
    /// Exclusion is matched against the path relative to the template
    /// root, so the root itself always passes even when the template
    /// happens to live under a directory with an excluded name.
    pub fn classify(&self, template_entry: &Path) -> Result<CopyOperation> {
        let relative =
            template_entry.strip_prefix(self.template_root).map_err(|e| {
                Error::ProcessError {
                    source_path: template_entry.display().to_string(),
                    e: e.to_string(),
                }
            })?;

        if self.policy.excludes(relative) {
            return Ok(CopyOperation::SkipExcluded {
                source: template_entry.to_path_buf(),
            });
        }

        let target = self.target_root.join(relative);

        if template_entry.is_dir() {
            return Ok(CopyOperation::CreateDirectory {
                target_exists: target.exists(),
                target,
            });
        }

        if target.exists() {
            Ok(CopyOperation::SkipExisting { target })
        } else {
            Ok(CopyOperation::Copy { source: template_entry.to_path_buf(), target })
        }
    }
}

/// Check that the freshly copied project contains the files the template
/// is expected to ship. Returns the missing ones; an incomplete template
/// is reported, not fatal.
pub fn verify_critical_files(target_root: &Path) -> Vec<String> {
    CRITICAL_FILES
        .iter()
        .filter(|file| !target_root.join(file).exists())
        .map(|file| (*file).to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use std::fs::{self, File};

    use tempfile::TempDir;

    use super::*;

    fn roots() -> (TempDir, TempDir) {
        (TempDir::new().unwrap(), TempDir::new().unwrap())
    }

    #[test]
    fn regular_file_becomes_a_copy() {
        let (template_root, target_root) = roots();
        let source = template_root.path().join("tsconfig.json");
        File::create(&source).unwrap();

        let copier = TemplateCopier::new(template_root.path(), target_root.path());
        let operation = copier.classify(&source).unwrap();

        match operation {
            CopyOperation::Copy { source: op_source, target } => {
                assert_eq!(op_source, source);
                assert_eq!(target, target_root.path().join("tsconfig.json"));
            }
            other => panic!("Expected Copy operation, got {other:?}"),
        }
    }

    #[test]
    fn directory_becomes_a_create_directory() {
        let (template_root, target_root) = roots();
        let source = template_root.path().join("src");
        fs::create_dir(&source).unwrap();

        let copier = TemplateCopier::new(template_root.path(), target_root.path());
        let operation = copier.classify(&source).unwrap();

        match operation {
            CopyOperation::CreateDirectory { target, target_exists } => {
                assert_eq!(target, target_root.path().join("src"));
                assert!(!target_exists);
            }
            other => panic!("Expected CreateDirectory operation, got {other:?}"),
        }
    }

    #[test]
    fn template_root_is_classified_as_the_existing_target_root() {
        let (template_root, target_root) = roots();

        let copier = TemplateCopier::new(template_root.path(), target_root.path());
        let operation = copier.classify(template_root.path()).unwrap();

        match operation {
            CopyOperation::CreateDirectory { target, target_exists } => {
                assert_eq!(target, target_root.path());
                assert!(target_exists);
            }
            other => panic!("Expected CreateDirectory operation, got {other:?}"),
        }
    }

    #[test]
    fn excluded_directories_are_skipped() {
        let (template_root, target_root) = roots();
        let source = template_root.path().join("node_modules");
        fs::create_dir(&source).unwrap();

        let copier = TemplateCopier::new(template_root.path(), target_root.path());
        let operation = copier.classify(&source).unwrap();

        assert!(matches!(operation, CopyOperation::SkipExcluded { .. }));
    }

    #[test]
    fn files_under_excluded_directories_are_skipped() {
        let (template_root, target_root) = roots();
        let dir = template_root.path().join("node_modules").join("express");
        fs::create_dir_all(&dir).unwrap();
        let source = dir.join("index.js");
        File::create(&source).unwrap();

        let copier = TemplateCopier::new(template_root.path(), target_root.path());
        let operation = copier.classify(&source).unwrap();

        assert!(matches!(operation, CopyOperation::SkipExcluded { .. }));
    }

    #[test]
    fn env_files_are_skipped_but_their_examples_are_copied() {
        let (template_root, target_root) = roots();
        let env = template_root.path().join(".env");
        let example = template_root.path().join(".env.example");
        File::create(&env).unwrap();
        File::create(&example).unwrap();

        let copier = TemplateCopier::new(template_root.path(), target_root.path());

        assert!(matches!(
            copier.classify(&env).unwrap(),
            CopyOperation::SkipExcluded { .. }
        ));
        assert!(matches!(
            copier.classify(&example).unwrap(),
            CopyOperation::Copy { .. }
        ));
    }

    #[test]
    fn existing_targets_are_never_overwritten() {
        let (template_root, target_root) = roots();
        let source = template_root.path().join("LICENSE");
        File::create(&source).unwrap();
        File::create(target_root.path().join("LICENSE")).unwrap();

        let copier = TemplateCopier::new(template_root.path(), target_root.path());
        let operation = copier.classify(&source).unwrap();

        match operation {
            CopyOperation::SkipExisting { target } => {
                assert_eq!(target, target_root.path().join("LICENSE"));
            }
            other => panic!("Expected SkipExisting operation, got {other:?}"),
        }
    }

    #[test]
    fn entries_outside_the_template_root_are_rejected() {
        let (template_root, target_root) = roots();
        let stray = TempDir::new().unwrap();
        let source = stray.path().join("file.txt");
        File::create(&source).unwrap();

        let copier = TemplateCopier::new(template_root.path(), target_root.path());
        let error = copier.classify(&source).unwrap_err();

        assert!(matches!(error, Error::ProcessError { .. }));
    }

    #[test]
    fn missing_critical_files_are_listed() {
        let target_root = TempDir::new().unwrap();
        File::create(target_root.path().join("package.json")).unwrap();

        let missing = verify_critical_files(target_root.path());

        assert!(!missing.contains(&"package.json".to_string()));
        assert!(missing.contains(&"tsconfig.json".to_string()));
    }
}
