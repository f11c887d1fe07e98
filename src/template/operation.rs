use std::path::PathBuf;

/// One planned step of the template copy.
///
/// Skips are explicit operations rather than silently dropped entries so
/// the executor can log every decision the copier made.
#[derive(Debug)]
pub enum CopyOperation {
    Copy { source: PathBuf, target: PathBuf },
    CreateDirectory { target: PathBuf, target_exists: bool },
    SkipExcluded { source: PathBuf },
    SkipExisting { target: PathBuf },
}

impl CopyOperation {
    /// Returns the target path for this operation, used for error context.
    ///
    /// # Returns
    /// * `Option<&PathBuf>` - The target path, or None for operations without a target
    pub fn target_path(&self) -> Option<&PathBuf> {
        match self {
            CopyOperation::Copy { target, .. } => Some(target),
            CopyOperation::CreateDirectory { target, .. } => Some(target),
            CopyOperation::SkipExisting { target } => Some(target),
            CopyOperation::SkipExcluded { .. } => None,
        }
    }

    /// Returns a brief description of this operation for error messages.
    pub fn error_context(&self) -> String {
        match self {
            CopyOperation::Copy { source, target } => {
                format!("copy '{}' -> '{}'", source.display(), target.display())
            }
            CopyOperation::CreateDirectory { target, .. } => {
                format!("create directory '{}'", target.display())
            }
            CopyOperation::SkipExcluded { source } => {
                format!("skip '{}'", source.display())
            }
            CopyOperation::SkipExisting { target } => {
                format!("skip '{}'", target.display())
            }
        }
    }

    /// Gets a message describing the operation and its status.
    pub fn get_message(&self) -> String {
        match self {
            CopyOperation::Copy { source, target } => {
                format!("Copying '{}' to '{}'", source.display(), target.display())
            }

            CopyOperation::CreateDirectory { target, target_exists } => {
                if *target_exists {
                    format!(
                        "Skipping directory creation '{}' (already exists)",
                        target.display()
                    )
                } else {
                    format!("Creating directory '{}'", target.display())
                }
            }

            CopyOperation::SkipExcluded { source } => {
                format!("Skipping '{}' (matches exclusion policy)", source.display())
            }

            CopyOperation::SkipExisting { target } => {
                format!("Skipping '{}' (target already exists)", target.display())
            }
        }
    }
}
