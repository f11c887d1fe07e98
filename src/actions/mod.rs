//! Post-materialization actions.
//!
//! Dependency installation and repository setup run after the project is
//! on disk. Both are best-effort: a failure leaves a perfectly usable
//! project behind, so the runner turns it into a warning instead of
//! aborting.

pub mod install;
pub mod vcs;
