use crate::constants::verbosity;
use clap::Parser;
use log::LevelFilter;
use std::path::PathBuf;

const AFTER_HELP: &str = r#"Examples:
  create-express-api my-api
  create-express-api my-api --yes
  create-express-api --yes --no-install
  create-express-api my-api --no-git -v

What's included:
  Express + TypeScript
  MongoDB + Mongoose
  Security middleware (helmet, cors)
  Swagger API docs
  Winston logging
  Docker support
  Environment configs
  Jest testing setup
  Makefile automation
"#;

/// CLI arguments for create-express-api.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None, after_help = AFTER_HELP)]
pub struct Args {
    /// Name of the project to create. Prompted for when omitted.
    #[arg(value_name = "PROJECT_NAME")]
    pub project_name: Option<String>,

    /// Accept the built-in defaults instead of prompting.
    #[arg(short, long)]
    pub yes: bool,

    /// Skip git repository initialization.
    #[arg(long = "no-git")]
    pub no_git: bool,

    /// Skip dependency installation.
    #[arg(long = "no-install")]
    pub no_install: bool,

    /// Scaffold from this directory instead of the bundled template.
    #[arg(long = "template-dir", value_name = "DIR")]
    pub template_dir: Option<PathBuf>,

    /// Increase logging verbosity (`-v`, `-vv`, `-vvv`).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Parse command line arguments.
pub fn get_args() -> Args {
    Args::parse()
}

/// Map `-v` counts to the appropriate log level.
pub fn get_log_level_from_verbose(verbose_count: u8) -> LevelFilter {
    match verbose_count {
        verbosity::OFF => LevelFilter::Error,
        verbosity::INFO => LevelFilter::Info,
        verbosity::DEBUG => LevelFilter::Debug,
        verbosity::TRACE.. => LevelFilter::Trace,
    }
}
