use crate::{
    actions::{install, vcs},
    cli::{args::Args, processor::FileProcessor},
    error::Result,
    manifest::patch_manifest,
    project::{resolve_request, ProjectRequest},
    report,
    safety::ensure_safe_directory,
    template::{
        copier::{verify_critical_files, TemplateCopier},
        locate_template_dir,
    },
};
use std::fs;
use std::path::Path;

/// Main CLI runner that orchestrates the entire scaffolding workflow
pub struct Runner {
    args: Args,
}

impl Runner {
    pub fn new(args: Args) -> Self {
        Self { args }
    }

    /// Executes the complete scaffolding workflow
    pub fn run(self) -> Result<()> {
        let template_root = locate_template_dir(self.args.template_dir.as_deref())?;
        let request = resolve_request(&self.args)?;

        let outcome = Scaffolder::new(&request, &template_root).run()?;

        report::print_summary(&request, outcome.dependencies_installed, &outcome.warnings);
        Ok(())
    }
}

/// What a finished scaffold run left behind.
#[derive(Debug)]
pub struct ScaffoldOutcome {
    /// Whether dependencies actually got installed.
    pub dependencies_installed: bool,
    /// Non-fatal problems encountered along the way.
    pub warnings: Vec<String>,
}

/// Materializes one resolved [`ProjectRequest`] from a template directory.
///
/// Required stages (target preparation, copy, manifest patch) abort the
/// run with an error. Optional stages (install, git) only add warnings.
pub struct Scaffolder<'a> {
    request: &'a ProjectRequest,
    template_root: &'a Path,
    warnings: Vec<String>,
}

impl<'a> Scaffolder<'a> {
    pub fn new(request: &'a ProjectRequest, template_root: &'a Path) -> Self {
        Self { request, template_root, warnings: Vec::new() }
    }

    /// Runs every stage in order and collects what happened.
    pub fn run(mut self) -> Result<ScaffoldOutcome> {
        println!();
        println!(
            "Creating a new Express API in {}",
            self.request.target_path.display()
        );
        println!();

        self.prepare_target()?;
        self.copy_template()?;
        self.update_manifest()?;

        let dependencies_installed = self.install_dependencies();
        self.init_repository();

        Ok(ScaffoldOutcome { dependencies_installed, warnings: self.warnings })
    }

    /// Creates the target directory and refuses to scaffold into one that
    /// already holds conflicting files.
    fn prepare_target(&self) -> Result<()> {
        fs::create_dir_all(&self.request.target_path)?;
        ensure_safe_directory(&self.request.target_path)
    }

    /// Copies the template tree into the target directory.
    fn copy_template(&mut self) -> Result<()> {
        println!("Copying template files...");

        let copier = TemplateCopier::new(self.template_root, &self.request.target_path);
        let stats = FileProcessor::new(copier).process_all_files(self.template_root)?;
        log::info!(
            "Copied {} files and created {} directories ({} entries skipped)",
            stats.files_copied,
            stats.directories_created,
            stats.entries_skipped
        );

        for missing in verify_critical_files(&self.request.target_path) {
            self.warnings
                .push(format!("Expected file '{missing}' is missing from the new project."));
        }

        println!("Template files copied");
        Ok(())
    }

    /// Rewrites the copied manifest with the project's identity.
    fn update_manifest(&self) -> Result<()> {
        println!("Updating package.json...");
        patch_manifest(&self.request.target_path, self.request)?;
        println!("package.json updated");
        Ok(())
    }

    /// Installs dependencies when requested. Failures become warnings.
    fn install_dependencies(&mut self) -> bool {
        if !self.request.install_deps {
            println!();
            println!("Remember to install dependencies:");
            println!("  cd {}", self.request.project_name);
            println!("  {} install", self.request.package_manager);
            return false;
        }

        match install::install_dependencies(
            &self.request.target_path,
            self.request.package_manager,
        ) {
            Ok(()) => {
                println!("Dependencies installed");
                true
            }
            Err(e) => {
                log::warn!("{e}");
                self.warnings.push(format!(
                    "Failed to install dependencies. You can install them later by running '{} install' inside the project.",
                    self.request.package_manager
                ));
                false
            }
        }
    }

    /// Initializes a git repository when requested. Failures become warnings.
    fn init_repository(&mut self) {
        if !self.request.init_vcs {
            return;
        }

        if !vcs::is_git_available() {
            self.warnings
                .push("Git is not installed, skipping git initialization".to_string());
            return;
        }

        println!("Initializing git repository...");
        match vcs::init_repository(&self.request.target_path) {
            Ok(()) => println!("Git repository initialized"),
            Err(e) => {
                log::warn!("{e}");
                self.warnings.push(
                    "Git initialization failed. You can run 'git init' yourself later."
                        .to_string(),
                );
            }
        }
    }
}

/// Main entry point for CLI execution
pub fn run(args: Args) -> Result<()> {
    let runner = Runner::new(args);
    runner.run()
}
