use std::path::Path;
use std::process::{Command, Stdio};

use crate::constants::INITIAL_COMMIT_MESSAGE;
use crate::error::{Error, Result};

/// Check whether a usable `git` binary is on the PATH.
pub fn is_git_available() -> bool {
    Command::new("git")
        .arg("--version")
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .is_ok_and(|status| status.success())
}

/// Initialize a repository in `project_dir` and commit the scaffold.
///
/// Git's own output is suppressed; the first failing step comes back as
/// an error. A commit can fail on machines without a configured identity,
/// which the caller reports as a warning.
pub fn init_repository(project_dir: &Path) -> Result<()> {
    run_git(project_dir, &["init"])?;
    run_git(project_dir, &["add", "-A"])?;
    run_git(project_dir, &["commit", "-m", INITIAL_COMMIT_MESSAGE])?;
    Ok(())
}

fn run_git(project_dir: &Path, args: &[&str]) -> Result<()> {
    log::debug!("Running git {}", args.join(" "));

    let status = Command::new("git")
        .args(args)
        .current_dir(project_dir)
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()?;

    if status.success() {
        Ok(())
    } else {
        Err(Error::CommandError {
            command: format!("git {}", args.join(" ")),
            status,
        })
    }
}
