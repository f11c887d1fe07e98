//! Template discovery and copy planning.
//!
//! This module contains the pieces that turn the bundled template into a
//! copy plan:
//! - `operation`: the operations produced for each template entry
//! - `copier`: decides which operation applies to an entry

pub mod copier;
pub mod operation;

use std::env;
use std::path::{Path, PathBuf};

use crate::constants::TEMPLATE_DIR;
use crate::error::{Error, Result};

/// Locate the template directory to scaffold from.
///
/// An explicit `override_dir` always wins. Otherwise the bundled template
/// is looked up next to the executable, then one level above it (installs
/// that keep binaries in a `bin/` subdirectory), and finally in the crate
/// source tree for development runs.
pub fn locate_template_dir(override_dir: Option<&Path>) -> Result<PathBuf> {
    if let Some(dir) = override_dir {
        return ensure_template_dir(dir.to_path_buf());
    }

    if let Ok(exe) = env::current_exe() {
        if let Some(exe_dir) = exe.parent() {
            let beside_binary = exe_dir.join(TEMPLATE_DIR);
            if beside_binary.is_dir() {
                return Ok(beside_binary);
            }
            if let Some(install_root) = exe_dir.parent() {
                let shared = install_root.join(TEMPLATE_DIR);
                if shared.is_dir() {
                    return Ok(shared);
                }
            }
        }
    }

    ensure_template_dir(PathBuf::from(env!("CARGO_MANIFEST_DIR")).join(TEMPLATE_DIR))
}

fn ensure_template_dir(dir: PathBuf) -> Result<PathBuf> {
    if dir.is_dir() {
        Ok(dir)
    } else {
        Err(Error::TemplateMissingError {
            template_dir: dir.display().to_string(),
        })
    }
}
