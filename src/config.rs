//! Configuration management for bundle-helper.
//!
//! Handles:
//! - Command-line argument parsing
//! - Optional TOML config file (explicit, project, or user-global)
//! - Precedence: command line > config file > built-in defaults

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use serde::Deserialize;

/// Output suffix used when neither the command line nor a config file sets one
pub const DEFAULT_OUTPUT_SUFFIX: &str = ".converted.cpp";

/// Default log filter
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Config file looked up in the working directory
pub const PROJECT_CONFIG_FILE: &str = ".bundle-helper.toml";

/// Command-line arguments for bundle-helper
#[derive(Debug, Default, Parser)]
#[command(name = "bundle-helper")]
#[command(about = "Comment or uncomment source blocks driven by // @bundle-helper directives")]
#[command(version)]
pub struct Args {
    /// File to convert
    pub input: PathBuf,

    /// Write the result here instead of <INPUT><SUFFIX>
    #[arg(short, long, conflicts_with = "stdout")]
    pub output: Option<PathBuf>,

    /// Suffix appended to the input path to name the output file
    #[arg(long, help = "Output file suffix (default: .converted.cpp)")]
    pub suffix: Option<String>,

    /// Print the converted text to standard output
    #[arg(long)]
    pub stdout: bool,

    /// Only validate directives; do not write any output
    #[arg(long, conflicts_with_all = ["output", "stdout"])]
    pub check: bool,

    /// Config file to use instead of the project or user config
    #[arg(long, help = "Path to a bundle-helper TOML config file")]
    pub config: Option<PathBuf>,

    /// Log level
    #[arg(long, help = "Log level (trace, debug, info, warn, error)")]
    pub log_level: Option<String>,
}

/// Settings read from a TOML config file
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    pub output_suffix: Option<String>,
    pub log_level: Option<String>,
}

impl FileConfig {
    /// Parse a config file
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("cannot read config file {}", path.display()))?;
        toml::from_str(&text)
            .with_context(|| format!("invalid config file {}", path.display()))
    }
}

/// Where converted output goes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputTarget {
    File(PathBuf),
    Stdout,
    /// Validate only
    None,
}

/// Combined configuration from all sources
#[derive(Debug, Clone)]
pub struct Config {
    pub input: PathBuf,
    pub output: OutputTarget,
    pub log_level: String,
    /// Config file that was loaded, if any
    pub config_file: Option<PathBuf>,
}

impl Config {
    /// Create configuration from the process command line
    pub fn from_args_and_env() -> Result<Self> {
        Self::from_args(Args::parse())
    }

    /// Create configuration from explicit arguments, resolving the project
    /// config against the current directory
    pub fn from_args(args: Args) -> Result<Self> {
        let cwd = std::env::current_dir().context("cannot determine working directory")?;
        Self::from_args_in(args, &cwd)
    }

    /// Create configuration from explicit arguments with `project_dir` as
    /// the place to look for the project config (useful for testing)
    pub fn from_args_in(args: Args, project_dir: &Path) -> Result<Self> {
        let config_file = match &args.config {
            Some(path) => Some(path.clone()),
            None => find_config_file(project_dir),
        };

        let file_config = match &config_file {
            Some(path) => FileConfig::load(path)?,
            None => FileConfig::default(),
        };

        let suffix = args
            .suffix
            .or(file_config.output_suffix)
            .unwrap_or_else(|| DEFAULT_OUTPUT_SUFFIX.to_string());

        let output = if args.check {
            OutputTarget::None
        } else if args.stdout {
            OutputTarget::Stdout
        } else {
            let path = args
                .output
                .unwrap_or_else(|| crate::files::output_path(&args.input, &suffix));
            OutputTarget::File(path)
        };

        let log_level = args
            .log_level
            .or(file_config.log_level)
            .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string());

        Ok(Config {
            input: args.input,
            output,
            log_level,
            config_file,
        })
    }

    pub fn has_config_file(&self) -> bool {
        self.config_file.is_some()
    }
}

/// Project config first, then the user-global one
fn find_config_file(project_dir: &Path) -> Option<PathBuf> {
    let project = project_dir.join(PROJECT_CONFIG_FILE);
    if project.is_file() {
        return Some(project);
    }

    let user = dirs::config_dir()?.join("bundle-helper").join("config.toml");
    user.is_file().then_some(user)
}
