//! Built-in exclusion policy applied while copying the template tree.
//!
//! Keeps dependency caches, build output, version-control metadata and real
//! environment files out of every generated project. Patterns are exact,
//! case-sensitive name matches, evaluated per path segment for directories
//! and per basename for files.

use std::collections::HashSet;
use std::path::Path;

/// Directory names excluded at any depth below the template root
const EXCLUDED_DIRECTORIES: &[&str] = &[
    "node_modules",
    "dist",
    "logs",
    "coverage",
    ".git",
    ".idea",
    ".vscode",
];

/// File basenames excluded wherever they appear.
///
/// The `.example` variants are intentionally not listed: those are the safe
/// templates users copy their real environment files from.
const EXCLUDED_FILES: &[&str] = &[
    ".env.development",
    ".env.production",
    ".env.local",
    ".env",
    "package-lock.json",
    "yarn.lock",
    "pnpm-lock.yaml",
    ".DS_Store",
    "Thumbs.db",
    "npm-debug.log",
    "yarn-debug.log",
    "yarn-error.log",
];

/// The fixed filter consulted for every candidate path during a copy.
#[derive(Debug)]
pub struct ExclusionPolicy {
    directories: HashSet<&'static str>,
    files: HashSet<&'static str>,
}

impl Default for ExclusionPolicy {
    fn default() -> Self {
        Self {
            directories: EXCLUDED_DIRECTORIES.iter().copied().collect(),
            files: EXCLUDED_FILES.iter().copied().collect(),
        }
    }
}

impl ExclusionPolicy {
    /// Decides whether a path, given relative to the template root, must be
    /// left out of the destination tree.
    ///
    /// A path is excluded when any of its segments matches the directory set
    /// or its basename matches the file set. The template root itself maps
    /// to an empty relative path and is therefore always included.
    ///
    /// # Arguments
    /// * `relative_path` - Candidate path relative to the template root
    ///
    /// # Returns
    /// * `bool` - true when the path must not be materialized
    pub fn excludes<P: AsRef<Path>>(&self, relative_path: P) -> bool {
        let relative_path = relative_path.as_ref();

        let segment_excluded = relative_path
            .components()
            .filter_map(|c| c.as_os_str().to_str())
            .any(|segment| self.directories.contains(segment));

        let basename_excluded = relative_path
            .file_name()
            .and_then(|n| n.to_str())
            .is_some_and(|basename| self.files.contains(basename));

        segment_excluded || basename_excluded
    }
}
