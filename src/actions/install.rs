use std::path::Path;
use std::process::Command;

use crate::error::{Error, Result};
use crate::project::PackageManager;

/// Run `<package manager> install` inside `project_dir`.
///
/// The child inherits stdio so the user sees the package manager's own
/// progress output. A missing binary or a non-zero exit status comes back
/// as an error for the caller to downgrade.
pub fn install_dependencies(
    project_dir: &Path,
    package_manager: PackageManager,
) -> Result<()> {
    println!();
    println!("Installing dependencies...");
    println!();

    let status = Command::new(package_manager.command())
        .arg("install")
        .current_dir(project_dir)
        .status()?;

    if status.success() {
        Ok(())
    } else {
        Err(Error::CommandError {
            command: format!("{package_manager} install"),
            status,
        })
    }
}
