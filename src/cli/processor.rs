use crate::{
    error::Result,
    template::{copier::TemplateCopier, operation::CopyOperation},
};
use std::fs;
use std::path::Path;
use walkdir::WalkDir;

/// What the copy stage did, for logging and diagnostics.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct CopyStats {
    pub files_copied: usize,
    pub directories_created: usize,
    pub entries_skipped: usize,
}

/// Executes the copy plan for every entry of the template tree.
pub struct FileProcessor<'a> {
    copier: TemplateCopier<'a>,
}

impl<'a> FileProcessor<'a> {
    pub fn new(copier: TemplateCopier<'a>) -> Self {
        Self { copier }
    }

    /// Walks the template tree and carries out the operation decided for
    /// each entry. The first I/O failure aborts the run; already copied
    /// files are left in place for inspection.
    pub fn process_all_files(&self, template_root: &Path) -> Result<CopyStats> {
        let mut stats = CopyStats::default();

        for dir_entry in WalkDir::new(template_root) {
            let template_entry = dir_entry?.path().to_path_buf();
            let operation = self.copier.classify(&template_entry)?;
            log::debug!("{}", operation.get_message());

            self.execute(&operation).map_err(|e| {
                log::error!("Failed to {}", operation.error_context());
                e
            })?;

            match operation {
                CopyOperation::Copy { .. } => stats.files_copied += 1,
                CopyOperation::CreateDirectory { target_exists: false, .. } => {
                    stats.directories_created += 1;
                }
                CopyOperation::CreateDirectory { .. } => {}
                CopyOperation::SkipExcluded { .. }
                | CopyOperation::SkipExisting { .. } => stats.entries_skipped += 1,
            }
        }

        Ok(stats)
    }

    /// Handles a single copy operation (copy, create directory, or skip).
    fn execute(&self, operation: &CopyOperation) -> Result<()> {
        match operation {
            CopyOperation::Copy { source, target } => self.copy_file(source, target),
            CopyOperation::CreateDirectory { target, target_exists } => {
                if *target_exists {
                    Ok(())
                } else {
                    self.create_dir_all(target)
                }
            }
            CopyOperation::SkipExcluded { .. } | CopyOperation::SkipExisting { .. } => {
                Ok(())
            }
        }
    }

    /// Copy a file from source to destination, creating parent directories if needed.
    fn copy_file(&self, source_path: &Path, dest_path: &Path) -> Result<()> {
        if let Some(parent) = dest_path.parent() {
            self.create_dir_all(parent)?;
        }

        Ok(fs::copy(source_path, dest_path).map(|_| ())?)
    }

    /// Create directory and all parent directories if they don't exist.
    fn create_dir_all(&self, dest_path: &Path) -> Result<()> {
        Ok(fs::create_dir_all(dest_path)?)
    }
}
