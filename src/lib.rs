/// Handles argument parsing and workflow orchestration.
pub mod cli;

/// Defines custom error types.
pub mod error;

/// Post-materialization actions (dependency install, git setup).
pub mod actions;

/// Exclusion policy applied while copying the template.
pub mod exclude;

/// Template discovery and copy planning.
pub mod template;

/// User input and interaction handling.
pub mod prompt;

/// Rewrites the generated project's manifest.
pub mod manifest;

/// Resolves flags, prompts and defaults into a project request.
pub mod project;

/// User-facing output framing a run.
pub mod report;

/// Target directory safety checks.
pub mod safety;

/// Project name validation.
pub mod validation;

/// Shared constants for defaults, exit codes and verbosity levels.
pub mod constants;
