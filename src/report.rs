//! User-facing output framing a run.

use crate::project::ProjectRequest;

/// Print the startup banner before any argument handling.
pub fn print_banner() {
    println!();
    println!("Express + MongoDB + TypeScript API");
    println!("Production-Ready Backend Starter");
    println!();
}

/// Print the closing summary with the commands the user will want next.
///
/// `dependencies_installed` reflects what actually happened: a skipped or
/// failed install keeps the manual install step in the suggestions.
pub fn print_summary(
    request: &ProjectRequest,
    dependencies_installed: bool,
    warnings: &[String],
) {
    if !warnings.is_empty() {
        println!();
        println!("Completed with warnings:");
        for warning in warnings {
            println!("  - {warning}");
        }
    }

    println!();
    println!("Success! Created {}", request.project_name);
    println!();
    println!("Inside that directory, you can run several commands:");
    println!();
    println!("  make setup");
    println!("    Initialize development and production environments");
    println!();
    println!("  make dev");
    println!("    Start the development server");
    println!();
    println!("  make up");
    println!("    Start production with Docker");
    println!();
    println!("  npm test");
    println!("    Run the test suite");
    println!();
    println!("We suggest that you begin by typing:");
    println!();
    println!("  cd {}", request.project_name);
    if !dependencies_installed {
        println!("  {} install", request.package_manager);
    }
    println!("  make setup");
    println!("  make dev");
    println!();
    println!("Documentation:");
    println!("  http://localhost:5000/api-docs");
    println!();
    println!("Happy coding!");
    println!();
}
