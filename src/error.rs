use crate::constants::exit_codes;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}.")]
    IoError(#[from] std::io::Error),

    #[error("Failed to walk the template tree. Original error: {0}")]
    WalkError(#[from] walkdir::Error),

    #[error("Prompt failed. Original error: {0}")]
    PromptError(#[from] dialoguer::Error),

    #[error("Failed to parse the project manifest. Original error: {0}")]
    ManifestParseError(#[from] serde_json::Error),

    /// The requested project name does not satisfy package naming rules.
    #[error("Invalid project name '{name}': {reason}.")]
    InvalidProjectNameError { name: String, reason: String },

    /// The target directory holds entries that are not on the allow-list.
    /// Every conflict is listed so the user can clean up in one pass.
    #[error(
        "The directory '{target_dir}' contains files that could conflict:\n\n{}\n\nEither try using a new directory name, or remove the files listed above.",
        .conflicts.iter().map(|c| format!("  {c}")).collect::<Vec<_>>().join("\n")
    )]
    UnsafeTargetDirectoryError { target_dir: String, conflicts: Vec<String> },

    #[error("Failed to process '{source_path}'. Original error: {e}")]
    ProcessError { source_path: String, e: String },

    #[error("Command '{command}' failed with status: {status}")]
    CommandError { command: String, status: std::process::ExitStatus },

    #[error("Cannot proceed: template directory '{template_dir}' does not exist.")]
    TemplateMissingError { template_dir: String },

    #[error("Cannot proceed: no manifest found at '{path}'. The copied scaffold is incomplete.")]
    ManifestMissingError { path: String },
}

/// Convenience type alias for Results with this crate's Error type.
///
/// # Type Parameters
/// * `T` - The type of the success value
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// # Arguments
/// * `err` - The Error to handle
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler(err: Error) {
    eprintln!("{}", err);
    std::process::exit(exit_codes::FAILURE);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unsafe_target_directory_lists_every_conflict() {
        let err = Error::UnsafeTargetDirectoryError {
            target_dir: "my-api".to_string(),
            conflicts: vec!["random.txt".to_string(), "notes.md".to_string()],
        };
        let message = err.to_string();
        assert!(message.contains("my-api"));
        assert!(message.contains("  random.txt"));
        assert!(message.contains("  notes.md"));
        assert!(message.contains("remove the files listed above"));
    }

    #[test]
    fn template_missing_names_the_directory() {
        let err = Error::TemplateMissingError { template_dir: "/opt/missing".to_string() };
        assert_eq!(
            err.to_string(),
            "Cannot proceed: template directory '/opt/missing' does not exist."
        );
    }
}
