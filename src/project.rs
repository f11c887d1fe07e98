//! Resolved scaffolding configuration.
//!
//! [`resolve_request`] merges command line flags, interactive answers and
//! built-in defaults into a single [`ProjectRequest`] so the rest of the
//! pipeline never has to distinguish where a value came from. Flags win
//! over prompts: `--yes` suppresses every question and `--no-git` /
//! `--no-install` disable their step without asking.

use std::env;
use std::fmt;
use std::path::PathBuf;

use crate::cli::args::Args;
use crate::constants::{DEFAULT_DESCRIPTION, DEFAULT_PROJECT_NAME};
use crate::error::{Error, Result};
use crate::prompt;
use crate::validation::validate_project_name;

/// Package manager used to install the generated project's dependencies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PackageManager {
    #[default]
    Npm,
    Yarn,
    Pnpm,
}

impl PackageManager {
    /// Selection order offered to the user. The first entry is the default.
    pub const CHOICES: [PackageManager; 3] =
        [PackageManager::Npm, PackageManager::Yarn, PackageManager::Pnpm];

    /// Name shown in prompts and progress output.
    pub fn name(&self) -> &'static str {
        match self {
            PackageManager::Npm => "npm",
            PackageManager::Yarn => "yarn",
            PackageManager::Pnpm => "pnpm",
        }
    }

    /// Program invoked to install dependencies. Windows ships package
    /// managers as `.cmd` shims, which `Command` does not resolve on its own.
    pub fn command(&self) -> &'static str {
        if cfg!(windows) {
            match self {
                PackageManager::Npm => "npm.cmd",
                PackageManager::Yarn => "yarn.cmd",
                PackageManager::Pnpm => "pnpm.cmd",
            }
        } else {
            self.name()
        }
    }
}

impl fmt::Display for PackageManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Everything the scaffolding pipeline needs to materialize one project.
#[derive(Debug, Clone)]
pub struct ProjectRequest {
    /// Validated npm package name, also the target directory name.
    pub project_name: String,
    /// Absolute directory the project is created in.
    pub target_path: PathBuf,
    /// Description written into the generated manifest.
    pub description: String,
    /// Author written into the generated manifest, may be empty.
    pub author: String,
    /// Package manager used for the optional dependency install.
    pub package_manager: PackageManager,
    /// Whether to initialize a git repository after materialization.
    pub init_vcs: bool,
    /// Whether to install dependencies after materialization.
    pub install_deps: bool,
}

/// Resolve the full scaffolding configuration from `args`.
///
/// A project name passed on the command line is validated and used as-is;
/// an invalid one is rejected before any prompt is shown. Remaining fields
/// are prompted for, unless `--yes` requested the built-in defaults.
pub fn resolve_request(args: &Args) -> Result<ProjectRequest> {
    let project_name = match &args.project_name {
        Some(name) => {
            validate_project_name(name).map_err(|reason| Error::InvalidProjectNameError {
                name: name.clone(),
                reason,
            })?;
            name.clone()
        }
        None if args.yes => DEFAULT_PROJECT_NAME.to_string(),
        None => prompt::validated_input("Project name", DEFAULT_PROJECT_NAME, |input: &String| {
            validate_project_name(input)
        })?,
    };

    let (description, author, package_manager) = if args.yes {
        (
            DEFAULT_DESCRIPTION.to_string(),
            String::new(),
            PackageManager::default(),
        )
    } else {
        let description = prompt::input_with_default("Project description", DEFAULT_DESCRIPTION)?;
        let author = prompt::input_allow_empty("Author name")?;
        let choice = prompt::select("Package manager", &PackageManager::CHOICES, 0)?;
        (description, author, PackageManager::CHOICES[choice])
    };

    let init_vcs = if args.no_git {
        false
    } else if args.yes {
        true
    } else {
        prompt::confirm("Initialize Git repository?", true)?
    };

    let install_deps = if args.no_install {
        false
    } else if args.yes {
        true
    } else {
        prompt::confirm("Install dependencies now?", true)?
    };

    let target_path = env::current_dir()?.join(&project_name);

    Ok(ProjectRequest {
        project_name,
        target_path,
        description,
        author,
        package_manager,
        init_vcs,
        install_deps,
    })
}
