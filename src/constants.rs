//! Constants used throughout the application

/// Name of the bundled template directory, relative to the installation root
pub const TEMPLATE_DIR: &str = "templates/default";

/// Manifest file every generated project must carry
pub const MANIFEST_FILE: &str = "package.json";

/// Version stamped into the manifest of every generated project
pub const INITIAL_VERSION: &str = "1.0.0";

/// Project name used when prompts are skipped and none was given
pub const DEFAULT_PROJECT_NAME: &str = "my-express-api";

/// Description used when prompts are skipped or the answer is left empty
pub const DEFAULT_DESCRIPTION: &str = "Express MongoDB TypeScript API with Authentication";

/// Message for the scaffold's first commit
pub const INITIAL_COMMIT_MESSAGE: &str = "Initial commit from create-express-api";

/// Files expected in every correctly copied scaffold.
///
/// Checked after the copy completes; missing entries are reported as
/// warnings, never as failures.
pub const CRITICAL_FILES: &[&str] = &[
    ".gitignore",
    ".dockerignore",
    ".env.development.example",
    ".env.production.example",
    "package.json",
    "tsconfig.json",
    "Dockerfile",
    "docker-compose.yml",
    "Makefile",
    "src/server.ts",
    "src/app.ts",
];

/// Exit codes
pub mod exit_codes {
    pub const SUCCESS: i32 = 0;
    pub const FAILURE: i32 = 1;
}

/// Verbosity levels
pub mod verbosity {
    pub const OFF: u8 = 0;
    pub const INFO: u8 = 1;
    pub const DEBUG: u8 = 2;
    pub const TRACE: u8 = 3;
}
